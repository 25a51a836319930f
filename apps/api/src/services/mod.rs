pub mod completion;
pub mod decoder;
pub mod groq;
pub mod prompt;
pub mod questions;
pub mod recommendation;

// Re-export public types
pub use completion::CompletionProvider;
pub use groq::GroqClient;
pub use recommendation::RecommendationService;
