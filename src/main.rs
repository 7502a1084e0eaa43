use log::{error, info};
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    info!(
        "Starting family tree relay [{}] in {} mode",
        config.upstream_base_url(),
        config.runtime_env()
    );

    let http_client = match service::init_http_client(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build the upstream HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let app_state = service::AppState::new(config, http_client);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped with an error: {e}");
        std::process::exit(1);
    }
}
