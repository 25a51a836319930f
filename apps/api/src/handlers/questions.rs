use crate::handlers::{method_not_allowed, preflight};
use crate::services::questions::all_questions;
use actix_web::{http::Method, web, HttpResponse};

/// Return the static questionnaire
pub async fn get_questions() -> HttpResponse {
    HttpResponse::Ok().json(all_questions())
}

pub fn questions_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/questions")
            .route(web::get().to(get_questions))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(method_not_allowed("GET, OPTIONS")),
    );
}
