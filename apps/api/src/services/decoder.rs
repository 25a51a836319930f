//! Turns raw completion text into a `TravelRecommendation`.
//!
//! Models are told to reply with bare JSON but often wrap it in a Markdown
//! code fence anyway, so fences are removed before parsing.

use crate::error::PipelineError;
use crate::models::TravelRecommendation;
use tracing::debug;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Remove Markdown code fences surrounding `content`.
///
/// A leading ```` ```json ```` takes precedence over a bare leading fence; a
/// trailing fence is removed independently. Text that neither starts nor ends
/// with a fence is returned unchanged, and the result never does, so applying
/// this twice gives the same output as applying it once.
pub fn strip_code_fences(content: &str) -> &str {
    let mut cleaned = content;

    loop {
        let trimmed = cleaned.trim();
        if !trimmed.starts_with(FENCE) && !trimmed.ends_with(FENCE) {
            return cleaned;
        }

        let mut inner = trimmed;
        if let Some(rest) = inner.strip_prefix(JSON_FENCE) {
            inner = rest;
        } else if let Some(rest) = inner.strip_prefix(FENCE) {
            inner = rest;
        }
        if let Some(rest) = inner.strip_suffix(FENCE) {
            inner = rest;
        }

        cleaned = inner;
    }
}

/// Decode a completion reply into a recommendation.
///
/// On failure the error carries both the parser message and the cleaned text
/// that was rejected.
pub fn decode_recommendation(content: &str) -> Result<TravelRecommendation, PipelineError> {
    let cleaned = strip_code_fences(content);
    debug!(
        "Decoding recommendation ({} bytes, {} after fence stripping)",
        content.len(),
        cleaned.len()
    );

    serde_json::from_str(cleaned).map_err(|source| PipelineError::Decode {
        source,
        content: cleaned.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlternativeDestination, DayItinerary, LocalPhrase, Weather};

    fn sample_recommendation() -> TravelRecommendation {
        TravelRecommendation {
            destination: "Lisbon, Portugal".to_string(),
            reason: "Mild weather, great food and a relaxed pace.".to_string(),
            activities: vec!["Tram 28".to_string(), "Belém".to_string()],
            best_time: "March to October".to_string(),
            budget: "Mid-range: $100-200 per day".to_string(),
            duration: "5-7 days".to_string(),
            highlights: vec!["Alfama".to_string()],
            travel_tips: vec!["Wear comfortable shoes".to_string()],
            alternative_destinations: vec![
                AlternativeDestination {
                    name: "Seville, Spain".to_string(),
                    score: 84,
                    reason: "Similar climate".to_string(),
                },
                AlternativeDestination {
                    name: "Kyoto, Japan".to_string(),
                    score: 76,
                    reason: "Different continent, same calm".to_string(),
                },
            ],
            weather: Weather {
                temp: "18-26°C".to_string(),
                condition: "Sunny".to_string(),
            },
            flight_estimate: "$400-$900".to_string(),
            local_currency: "EUR".to_string(),
            safety_rating: "Very Safe".to_string(),
            packing_list: vec!["Sunscreen".to_string()],
            local_phrases: vec![LocalPhrase {
                english: "Thank you".to_string(),
                local: "Obrigado".to_string(),
            }],
            itinerary: vec![
                DayItinerary {
                    day: 1,
                    activities: vec!["Castelo de São Jorge".to_string()],
                },
                DayItinerary {
                    day: 2,
                    activities: vec!["Sintra day trip".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_strip_tagged_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw).trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_untagged_fence() {
        let raw = "```\n{\"a\": 1}\n```\n";
        assert_eq!(strip_code_fences(raw).trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_only_trailing_fence() {
        assert_eq!(strip_code_fences("{\"a\": 1}```"), "{\"a\": 1}");
    }

    #[test]
    fn test_unfenced_text_is_untouched() {
        for raw in [
            "{\"a\": 1}",
            "  {\"a\": 1}\n",
            "",
            "not json at all",
            "inline ``` fence in the middle",
        ] {
            assert_eq!(strip_code_fences(raw), raw);
        }
    }

    #[test]
    fn test_strip_is_idempotent() {
        for raw in [
            "```json\n{}\n```",
            "```json```json{}",
            "``````json",
            "```````",
            "```",
            "``` ```",
            "\n```json\n{\"a\": [1, 2]}\n```\n\n",
            "plain",
        ] {
            let once = strip_code_fences(raw);
            assert_eq!(strip_code_fences(once), once, "input: {:?}", raw);
        }
    }

    #[test]
    fn test_decode_round_trip() {
        let expected = sample_recommendation();
        let json = serde_json::to_string_pretty(&expected).unwrap();

        assert_eq!(decode_recommendation(&json).unwrap(), expected);

        let fenced = format!("```json\n{}\n```", json);
        assert_eq!(decode_recommendation(&fenced).unwrap(), expected);

        let bare_fence = format!("```\n{}\n```", json);
        assert_eq!(decode_recommendation(&bare_fence).unwrap(), expected);
    }

    #[test]
    fn test_decode_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_recommendation()).unwrap();
        assert!(value.get("bestTime").is_some());
        assert!(value.get("alternativeDestinations").is_some());
        assert!(value.get("best_time").is_none());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let mut value = serde_json::to_value(sample_recommendation()).unwrap();
        value["personality"] = serde_json::json!("Beach Lover");

        let decoded = decode_recommendation(&value.to_string()).unwrap();
        assert_eq!(decoded, sample_recommendation());
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let mut value = serde_json::to_value(sample_recommendation()).unwrap();
        value.as_object_mut().unwrap().remove("itinerary");

        match decode_recommendation(&value.to_string()) {
            Err(PipelineError::Decode { source, .. }) => {
                assert!(source.to_string().contains("itinerary"));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let mut value = serde_json::to_value(sample_recommendation()).unwrap();
        value["alternativeDestinations"][0]["score"] = serde_json::json!("high");

        assert!(matches!(
            decode_recommendation(&value.to_string()),
            Err(PipelineError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let raw = "Sure! Here is your recommendation: Lisbon.";
        match decode_recommendation(raw) {
            Err(PipelineError::Decode { content, .. }) => assert_eq!(content, raw),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_partial_json() {
        let json = serde_json::to_string(&sample_recommendation()).unwrap();
        let half: String = json.chars().take(json.chars().count() / 2).collect();
        let truncated = format!("```json\n{}", half);

        match decode_recommendation(&truncated) {
            Err(PipelineError::Decode { content, .. }) => {
                assert!(!content.starts_with("```"));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
