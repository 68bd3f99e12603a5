use std::env;

/// Client-side configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the search backend, e.g. `http://127.0.0.1:5000`.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
