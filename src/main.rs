use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use relay_lib::{
    server::{start_api_server, ServerState},
    Environment, Result, Settings,
};
use relay_proto::{ApiRoute, DEFAULT_FORWARD_TIMEOUT_SECS, DEFAULT_PORT, DEFAULT_WEBHOOK_URL};
use simple_logger::SimpleLogger;

#[derive(Parser)]
struct Args {
    /// Port the relay listens on
    #[arg(long, env = "UPLOAD_RELAY_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Downstream webhook that receives the forwarded files
    #[arg(long, env = "UPLOAD_RELAY_WEBHOOK_URL", default_value = DEFAULT_WEBHOOK_URL)]
    webhook_url: String,

    /// Directory for transient upload spooling
    #[arg(long, env = "UPLOAD_RELAY_UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// development or production; production elides internal error detail
    #[arg(long, env = "UPLOAD_RELAY_ENV", default_value_t = Environment::Development)]
    environment: Environment,

    /// Webhook timeout in seconds
    #[arg(long, env = "UPLOAD_RELAY_TIMEOUT", default_value_t = DEFAULT_FORWARD_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to init logger");

    let args: Args = Args::parse();
    let settings = Settings {
        webhook_url: args.webhook_url,
        upload_dir: args.upload_dir,
        environment: args.environment,
        forward_timeout: Duration::from_secs(args.timeout),
    };

    log::info!("Upload relay listening on port {}", args.port);
    log::info!("Forwarding uploads to {}", settings.webhook_url);
    log::info!(
        "Endpoints: GET {}, GET {}, POST {}",
        ApiRoute::Form.path(),
        ApiRoute::Health.path(),
        ApiRoute::Upload.path()
    );

    let state = Arc::new(ServerState::new(settings));
    start_api_server(args.port, state).await?;
    Ok(())
}
