use crate::config::ServerConfig;
use crate::dataset::Directory;
use crate::lead::{LeadIdSource, SystemClockLeadIds};

/// Everything a tool handler may read: configuration, the immutable
/// dataset, and the lead-id source. Shared by reference across concurrent
/// invocations; nothing here is mutated after construction.
pub struct ServerState {
    pub config: ServerConfig,
    pub directory: Directory,
    pub lead_ids: Box<dyn LeadIdSource>,
}

impl ServerState {
    /// Production state: seeded dataset, clock-derived lead ids.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            directory: Directory::seeded(),
            lead_ids: Box::new(SystemClockLeadIds),
        }
    }
}
