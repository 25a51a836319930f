use crate::error::PipelineError;
use async_trait::async_trait;

/// A text-completion backend: takes a prompt and returns the generated text.
///
/// Implementations own transport and wire-format details so the
/// recommendation pipeline can run against a stub in tests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, PipelineError>;
}
