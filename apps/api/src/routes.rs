use actix_web::{web, Scope};

use crate::handlers::{fallback, health_config, questions_config, recommendations_config};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .configure(health_config)
        .configure(questions_config)
        .configure(recommendations_config)
        .default_service(web::route().to(fallback))
}
