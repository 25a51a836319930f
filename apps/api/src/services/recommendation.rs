use crate::error::PipelineError;
use crate::models::{Answer, TravelRecommendation};
use crate::services::completion::CompletionProvider;
use crate::services::decoder::decode_recommendation;
use crate::services::prompt::build_prompt;
use std::sync::Arc;
use tracing::info;

/// Runs the recommendation pipeline: prompt, one completion call, decode.
///
/// Holds no per-request state; a single instance is shared across workers.
#[derive(Clone)]
pub struct RecommendationService {
    provider: Arc<dyn CompletionProvider>,
}

impl RecommendationService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn recommend(
        &self,
        answers: &[Answer],
    ) -> Result<TravelRecommendation, PipelineError> {
        let prompt = build_prompt(answers);
        info!("Built recommendation prompt from {} answers", answers.len());

        let content = self.provider.complete(&prompt).await?;

        let recommendation = decode_recommendation(&content)?;

        info!(
            "Recommended {} with {} alternatives",
            recommendation.destination,
            recommendation.alternative_destinations.len()
        );
        Ok(recommendation)
    }
}
