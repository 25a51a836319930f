pub mod health;
pub mod questions;
pub mod recommendations;

use crate::error::ApiError;
use actix_web::{http::Method, web, HttpRequest, HttpResponse, Route};

pub use health::health_config;
pub use questions::questions_config;
pub use recommendations::recommendations_config;

/// Answer an `OPTIONS` request, including CORS preflights, with an empty 200.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Default route for a resource: 405 with `allow` as the `Allow` header.
pub fn method_not_allowed(allow: &'static str) -> Route {
    web::route().to(move || async move {
        Err::<HttpResponse, _>(ApiError::MethodNotAllowed(allow))
    })
}

/// Fallback for paths under `/api` that match no resource
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if *req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    Err(ApiError::NotFound(req.path().to_string()))
}
