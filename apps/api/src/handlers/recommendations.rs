use crate::{
    error::ApiError,
    handlers::{method_not_allowed, preflight},
    models::RecommendationRequest,
    services::RecommendationService,
};
use actix_web::{
    http::Method,
    web::{self, Json},
    HttpResponse,
};
use tracing::{error, warn};

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recommend")
            .app_data(json_config())
            .route(web::post().to(get_recommendation))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(method_not_allowed("POST, OPTIONS")),
    );
}

/// Bodies are accepted regardless of content type; anything that does not
/// decode into `RecommendationRequest` is a 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            warn!("Rejected recommendation request: {}", err);
            ApiError::InvalidInput(err.to_string()).into()
        })
}

/// Generate a travel recommendation from questionnaire answers
pub async fn get_recommendation(
    request: Json<RecommendationRequest>,
    recommendation_service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let recommendation = recommendation_service
        .recommend(&request.answers)
        .await
        .map_err(|e| {
            error!("Error generating recommendation: {}", e);
            ApiError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(recommendation))
}
