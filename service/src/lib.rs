use config::Config;
use log::info;

pub mod config;
pub mod logging;

/// Builds the outbound HTTP client shared by every relayed request.
///
/// No timeout or retry policy is configured: upstream latency and failures reach
/// the caller unchanged.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    info!("Upstream API origin: {}", config.upstream_base_url());

    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(format!("family_tree_rs/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            config: app_config,
        }
    }

    pub fn http_client_ref(&self) -> &reqwest::Client {
        &self.http_client
    }
}
