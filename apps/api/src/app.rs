use crate::{
    config::Config,
    error::Result,
    routes::api_routes,
    services::{GroqClient, RecommendationService},
};
use actix_cors::Cors;
use actix_web::{
    middleware::{DefaultHeaders, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
use log::{info, warn};
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

/// CORS handling for requests that carry an `Origin` header.
///
/// Preflight interception is disabled: every `OPTIONS` request reaches the
/// routes, which answer it with an empty 200.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .disable_preflight()
}

/// Cross-origin headers added to every response, including requests that
/// carry no `Origin` header and are therefore skipped by [`cors`].
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        let bind_address = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}", bind_address);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let groq = GroqClient::from_config(&self.config)
            .context("Failed to initialize completion client")?;

        if self.config.groq_api_key.is_none() {
            warn!("GROQ_API_KEY is not set; recommendation requests will fail");
        }

        let recommendation_service = web::Data::new(RecommendationService::new(Arc::new(groq)));

        HttpServer::new(move || {
            App::new()
                .wrap(cors_headers())
                .wrap(cors())
                .wrap(Logger::default())
                .app_data(recommendation_service.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
