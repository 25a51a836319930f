use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travel_advisor_api::{app::Application, config::Config, Result};

#[actix_web::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default to info level if RUST_LOG is not set
                "travel_advisor_api=info,actix_web=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !dotenv_loaded {
        info!("No .env file found, using environment variables");
    }

    info!("Loading configuration...");
    let config = Config::load()?;

    let application = Application::new(&config);
    application.run().await
}
