use serde::{Deserialize, Serialize};

/// Structured travel recommendation produced by the completion model.
///
/// Every field must be present for a reply to decode. Content is taken as-is:
/// scores, day counts and phrase translations are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRecommendation {
    /// Destination city and/or country
    pub destination: String,
    /// Why the destination matches the traveller's answers
    pub reason: String,
    pub activities: Vec<String>,
    pub best_time: String,
    /// Budget category with a daily estimate
    pub budget: String,
    pub duration: String,
    pub highlights: Vec<String>,
    pub travel_tips: Vec<String>,
    /// Two or three other good matches
    pub alternative_destinations: Vec<AlternativeDestination>,
    pub weather: Weather,
    pub flight_estimate: String,
    /// Currency code, e.g. "EUR"
    pub local_currency: String,
    pub safety_rating: String,
    pub packing_list: Vec<String>,
    pub local_phrases: Vec<LocalPhrase>,
    /// Day-by-day plan, ordered by day
    pub itinerary: Vec<DayItinerary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeDestination {
    pub name: String,
    /// Match score, requested in the 70-90 range
    pub score: i32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temp: String,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalPhrase {
    pub english: String,
    pub local: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayItinerary {
    pub day: u32,
    pub activities: Vec<String>,
}
