//! Wire types for the Places Web Service JSON responses.

use serde::{Deserialize, Serialize};

use super::google::PlacesError;

/// One entry of a text search result list. Only the identifier and display
/// name are consumed; everything else about the match comes from the
/// follow-up details call.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
}

/// The detail record for a single place. Every field is optional on the
/// wire; the prompt formatter substitutes defaults where data is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub rating: Option<f32>,
    pub website: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub editorial_summary: Option<EditorialSummary>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorialSummary {
    pub overview: Option<String>,
}

/// A single user review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub text: String,
    pub rating: Option<f32>,
}

/// Envelope of the `textsearch/json` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TextSearchResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
}

impl TextSearchResponse {
    /// Selection is positional: the first entry of the result list wins,
    /// with no ranking or disambiguation.
    pub fn into_first(self) -> Result<PlaceSummary, PlacesError> {
        self.results
            .into_iter()
            .next()
            .ok_or(PlacesError::NoResults)
    }
}

/// Envelope of the `details/json` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct PlaceDetailsResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub result: Option<PlaceDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_result_is_selected_positionally() {
        let response: TextSearchResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [
                    {"place_id": "a", "name": "First Cafe"},
                    {"place_id": "b", "name": "Better Rated Cafe", "rating": 4.9}
                ]
            }"#,
        )
        .expect("valid search response");

        let first = response.into_first().expect("non-empty results");
        assert_eq!(first.place_id, "a");
        assert_eq!(first.name, "First Cafe");
    }

    #[test]
    fn empty_results_map_to_no_results() {
        let response: TextSearchResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#)
                .expect("valid empty response");

        assert!(matches!(
            response.into_first(),
            Err(PlacesError::NoResults)
        ));
    }

    #[test]
    fn detail_record_tolerates_missing_fields() {
        let detail: PlaceDetail =
            serde_json::from_str(r#"{"name": "Joe's Garage"}"#).expect("sparse detail record");

        assert_eq!(detail.name.as_deref(), Some("Joe's Garage"));
        assert!(detail.formatted_address.is_none());
        assert!(detail.rating.is_none());
        assert!(detail.editorial_summary.is_none());
        assert!(detail.reviews.is_empty());
    }

    #[test]
    fn detail_record_parses_full_payload() {
        let detail: PlaceDetail = serde_json::from_str(
            r#"{
                "name": "Joe's Garage",
                "formatted_address": "1 Main St, Las Vegas, NV",
                "formatted_phone_number": "(702) 555-0100",
                "rating": 4.5,
                "website": "https://joes.example",
                "opening_hours": {"open_now": true, "weekday_text": ["Monday: 9-5"]},
                "editorial_summary": {"overview": "A local institution."},
                "reviews": [{"text": "Great work", "rating": 5}]
            }"#,
        )
        .expect("full detail record");

        assert_eq!(detail.rating, Some(4.5));
        assert_eq!(
            detail
                .editorial_summary
                .as_ref()
                .and_then(|s| s.overview.as_deref()),
            Some("A local institution.")
        );
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].rating, Some(5.0));
        assert_eq!(
            detail.opening_hours.as_ref().and_then(|h| h.open_now),
            Some(true)
        );
    }
}
