use crate::handlers::{method_not_allowed, preflight};
use crate::models::HealthResponse;
use actix_web::{http::Method, web, HttpResponse};

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn health_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(method_not_allowed("GET, OPTIONS")),
    );
}
