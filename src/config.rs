/// Default base URL for professional profile pages.
const DEFAULT_PROFILE_BASE_URL: &str = "https://www.angi.com/companylist/us";

/// Default base URL for lead tracking pages.
const DEFAULT_TRACKING_BASE_URL: &str = "https://www.angi.com/my-projects";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub profile_base_url: String,
    pub tracking_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `ANGI_PROFILE_BASE_URL` (optional) — base URL for professional profile links
    /// - `ANGI_TRACKING_BASE_URL` (optional) — base URL for lead tracking links
    ///
    /// Both default to the public angi.com paths. Trailing slashes are
    /// stripped so URL assembly can always insert exactly one separator.
    pub fn from_env() -> Result<Self, String> {
        let profile_base_url = base_url_var("ANGI_PROFILE_BASE_URL", DEFAULT_PROFILE_BASE_URL)?;
        let tracking_base_url = base_url_var("ANGI_TRACKING_BASE_URL", DEFAULT_TRACKING_BASE_URL)?;

        Ok(Self {
            profile_base_url,
            tracking_base_url,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            tracking_base_url: DEFAULT_TRACKING_BASE_URL.to_string(),
        }
    }
}

fn base_url_var(name: &str, default: &str) -> Result<String, String> {
    match std::env::var(name) {
        Ok(val) => {
            let trimmed = val.trim().trim_end_matches('/');
            if trimmed.is_empty() {
                return Err(format!("{name} must be a non-empty URL"));
            }
            Ok(trimmed.to_string())
        }
        Err(_) => Ok(default.to_string()),
    }
}
