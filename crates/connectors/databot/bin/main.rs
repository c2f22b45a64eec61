use std::env;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use databot::routes::create_router;
use databot::state;
use databot_configuration::environment::ProcessEnvironment;

#[derive(Parser)]
struct ServerOptions {
    #[arg(long, value_name = "DIR", env = "DATABOT_CONFIGURATION_DIR")]
    configuration_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let server_options = ServerOptions::parse();

    let parsed_configuration =
        databot_configuration::parse_configuration(&server_options.configuration_dir).await?;
    let configuration =
        databot_configuration::make_runtime_configuration(parsed_configuration, ProcessEnvironment)?;

    let server_state = state::create_state(&configuration).await?;
    let router = create_router(server_state);

    // allow server port to be set via PORT env var
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let address = format!("0.0.0.0:{port}");

    tracing::info!("Starting server on {}", address);

    axum::Server::bind(&address.parse()?)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
