use crate::models::{Question, QuestionType};

/// Questionnaire served by `GET /api/questions`, in display order.
pub static QUESTIONS: [Question; 6] = [
    Question {
        id: 1,
        question: "What's your current mood or how do you want to feel during this trip?",
        kind: QuestionType::Text,
        options: &["Adventurous", "Relaxed", "Romantic", "Cultural", "Energetic"],
    },
    Question {
        id: 2,
        question: "What type of activities do you enjoy most?",
        kind: QuestionType::Multiple,
        options: &[
            "Outdoor adventures",
            "Beach & water sports",
            "Historical sites",
            "Food & culinary",
            "Shopping",
            "Nightlife",
            "Wildlife & nature",
            "Art & museums",
        ],
    },
    Question {
        id: 3,
        question: "What's your preferred climate?",
        kind: QuestionType::Text,
        options: &["Tropical/Hot", "Mild/Temperate", "Cold/Snowy", "Desert/Dry"],
    },
    Question {
        id: 4,
        question: "What's your budget range for this trip?",
        kind: QuestionType::Text,
        options: &[
            "Budget ($-$$)",
            "Mid-range ($$$)",
            "Luxury ($$$$)",
            "Ultra-luxury ($$$$$)",
        ],
    },
    Question {
        id: 5,
        question: "How long do you plan to travel?",
        kind: QuestionType::Text,
        options: &[
            "Weekend (2-3 days)",
            "Short trip (4-7 days)",
            "Week+ (8-14 days)",
            "Extended (15+ days)",
        ],
    },
    Question {
        id: 6,
        question: "Do you prefer urban cities or natural landscapes?",
        kind: QuestionType::Text,
        options: &["Big cities", "Small towns", "Nature/countryside", "Mix of both"],
    },
];

pub fn all_questions() -> &'static [Question] {
    &QUESTIONS
}
