use serde::{Deserialize, Serialize};

pub use question::{Question, QuestionType};
pub use recommendation::{
    AlternativeDestination, DayItinerary, LocalPhrase, TravelRecommendation, Weather,
};

mod question;
mod recommendation;

/// One answered preference question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
}

/// Request body for `POST /api/recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Answers in the order they were given; rendered into the prompt as-is
    pub answers: Vec<Answer>,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
