use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures of the recommendation pipeline: the completion call and the
/// decoding of its output.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion endpoint returned status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Failed to parse completion envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    #[error("Completion endpoint returned no choices")]
    EmptyResponse,

    #[error("Failed to parse recommendation: {source}. Content: {content}")]
    Decode {
        #[source]
        source: serde_json::Error,
        content: String,
    },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Carries the value of the `Allow` header, e.g. `"GET, OPTIONS"`
    #[error("Method not allowed")]
    MethodNotAllowed(&'static str),

    #[error("Recommendation failed: {0}")]
    Recommendation(#[from] PipelineError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    /// Message shown to the caller. Pipeline and internal failures stay generic;
    /// their detail only goes to the server log.
    fn public_message(&self) -> String {
        match self {
            ApiError::InvalidInput(_) | ApiError::NotFound(_) | ApiError::MethodNotAllowed(_) => {
                self.to_string()
            }
            ApiError::Recommendation(_) => "Error generating recommendation".to_string(),
            ApiError::ConfigurationError(_) | ApiError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let ApiError::MethodNotAllowed(allow) = self {
            response.insert_header((header::ALLOW, *allow));
        }
        response.json(ErrorResponse {
            error: self.public_message(),
        })
    }
}

impl From<::config::ConfigError> for ApiError {
    fn from(err: ::config::ConfigError) -> Self {
        ApiError::ConfigurationError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(format!("{:#}", err))
    }
}
