pub mod request;
pub mod response;

pub use request::{
    HomeAdviceParams, InitializeParams, JsonRpcRequest, PreferredTiming, RequestQuoteParams,
    RpcId, SearchProfessionalsParams, ToolCallParams,
};
pub use response::{JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};
