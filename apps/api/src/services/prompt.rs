//! Renders questionnaire answers into the instruction sent to the completion model.

use crate::models::Answer;

const PREAMBLE: &str = "You are an expert travel advisor. Based on the following user preferences, \
recommend the perfect travel destination. Provide a detailed recommendation in JSON format.\n\n\
User Preferences:\n";

const FORMAT_INSTRUCTION: &str = "Please analyze these preferences and provide a travel \
recommendation in the following JSON format (respond ONLY with valid JSON, no markdown or \
additional text):";

/// Example reply shown to the model. Keys must stay in sync with `TravelRecommendation`.
pub const RESPONSE_TEMPLATE: &str = r#"{
  "destination": "City/Country name",
  "reason": "A compelling 2-3 sentence explanation of why this destination perfectly matches their preferences",
  "activities": ["activity1", "activity2", "activity3", "activity4"],
  "bestTime": "Best time to visit (e.g., 'April to October' or 'Year-round')",
  "budget": "Budget category and daily estimate (e.g., 'Mid-range: $100-200 per day' or 'Luxury: $300+ per day')",
  "duration": "Recommended trip duration (e.g., '5-7 days' or '10-14 days')",
  "highlights": ["highlight1", "highlight2", "highlight3"],
  "travelTips": ["tip1", "tip2", "tip3"],
  "alternativeDestinations": [
    {
      "name": "Alternative City/Country 1",
      "score": 85,
      "reason": "Why this is also a good match"
    },
    {
      "name": "Alternative City/Country 2",
      "score": 80,
      "reason": "Why this is also a good match"
    }
  ],
  "weather": {
    "temp": "Temperature range (e.g., '75-85°F' or '20-28°C')",
    "condition": "General weather (e.g., 'Sunny', 'Mild', 'Tropical')"
  },
  "flightEstimate": "Flight cost estimate from major hubs (e.g., '$600-$1,200' or '$300-$600')",
  "localCurrency": "Local currency code (e.g., 'EUR', 'USD', 'JPY')",
  "safetyRating": "Safety level (e.g., 'Very Safe', 'Safe', 'Exercise Caution')",
  "packingList": ["Essential item 1", "Essential item 2", "Essential item 3", "Essential item 4", "Essential item 5"],
  "localPhrases": [
    {"english": "Hello", "local": "Translation"},
    {"english": "Thank you", "local": "Translation"},
    {"english": "Where is...?", "local": "Translation"},
    {"english": "How much?", "local": "Translation"}
  ],
  "itinerary": [
    {"day": 1, "activities": ["Activity 1", "Activity 2", "Activity 3"]},
    {"day": 2, "activities": ["Activity 1", "Activity 2", "Activity 3"]},
    {"day": 3, "activities": ["Activity 1", "Activity 2", "Activity 3"]},
    {"day": 4, "activities": ["Activity 1", "Activity 2", "Activity 3"]},
    {"day": 5, "activities": ["Activity 1", "Activity 2", "Activity 3"]}
  ]
}"#;

/// Advisory constraints appended after the template. None of them are enforced on the reply.
pub const RESPONSE_CONSTRAINTS: &[&str] = &[
    "The alternativeDestinations should be 2-3 other destinations that also match their preferences well",
    "Scores should be between 70-90 (since the main destination is the best match at ~95-100)",
    "Make sure alternatives are diverse and genuinely different from the main recommendation",
    "Consider different continents or travel styles for the alternatives",
    "Provide realistic flight estimates based on typical costs from major international hubs",
    "Itinerary should match the recommended duration (adjust number of days as needed)",
    "Local phrases should be accurate translations in the destination's primary language",
    "Packing list should be specific to the destination's climate and activities",
];

/// Build the completion prompt for a set of answers.
///
/// Answers are rendered as `- <question>: <answer>` lines in the order given.
/// An empty slice still yields the full instruction and template.
pub fn build_prompt(answers: &[Answer]) -> String {
    let mut prompt = String::from(PREAMBLE);

    for qa in answers {
        prompt.push_str(&format!("- {}: {}\n", qa.question, qa.answer));
    }

    prompt.push_str("\n\n");
    prompt.push_str(FORMAT_INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(RESPONSE_TEMPLATE);
    prompt.push_str("\n\nImportant:\n");

    for constraint in RESPONSE_CONSTRAINTS {
        prompt.push_str(&format!("- {}\n", constraint));
    }

    prompt
}
