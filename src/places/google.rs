use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::Settings;
use crate::places::client::PlacesProvider;
use crate::places::models::{PlaceDetail, PlaceDetailsResponse, PlaceSummary, TextSearchResponse};

const DEFAULT_PLACES_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place";

/// Field list requested from the details endpoint. Fixed; the formatter
/// only renders a subset, the rest is available through `lookup --json`.
const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,rating,reviews,\
                             website,opening_hours,editorial_summary";

/// Failures of a single lookup. `NoResults` is the one the REPL answers
/// with a search hint; everything else is reported generically.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("no places matched the query")]
    NoResults,

    #[error("request to the Places API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Places API returned {status}: {message}")]
    Api { status: String, message: String },

    #[error("Places API response did not contain a detail record")]
    MissingDetail,
}

pub struct GooglePlacesClient {
    http: Client,
    api_key: String,
    endpoint: String,
    language: String,
}

impl GooglePlacesClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.places.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Google Places API key is missing. Set places.api_key in config or GOOGLE_API_KEY."
            );
        }

        let endpoint = if settings.places.endpoint.trim().is_empty() {
            DEFAULT_PLACES_ENDPOINT.to_string()
        } else {
            settings
                .places
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(settings.places.timeout_secs))
                .build()
                .context("Failed to build Places HTTP client")?,
            api_key,
            endpoint,
            language: settings.places.language.trim().to_string(),
        })
    }

    /// Free-text search, returning the first match of the result list.
    async fn text_search(&self, query: &str) -> Result<PlaceSummary, PlacesError> {
        let url = format!("{}/textsearch/json", self.endpoint);

        let mut params = vec![("query", query), ("key", self.api_key.as_str())];
        if !self.language.is_empty() {
            params.push(("language", self.language.as_str()));
        }

        let response: TextSearchResponse = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        check_status(&response.status, response.error_message.as_deref())?;
        response.into_first()
    }

    /// Fetch the fixed detail field set for a place identifier.
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = format!("{}/details/json", self.endpoint);

        let mut params = vec![
            ("place_id", place_id),
            ("fields", DETAIL_FIELDS),
            ("key", self.api_key.as_str()),
        ];
        if !self.language.is_empty() {
            params.push(("language", self.language.as_str()));
        }

        let response: PlaceDetailsResponse = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        check_status(&response.status, response.error_message.as_deref())?;
        response.result.ok_or(PlacesError::MissingDetail)
    }
}

/// `OK` and `ZERO_RESULTS` are valid outcomes; anything else (quota,
/// denied key, invalid request) surfaces as an API error.
fn check_status(status: &str, error_message: Option<&str>) -> Result<(), PlacesError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(PlacesError::Api {
            status: other.to_string(),
            message: error_message.unwrap_or("no error message supplied").to_string(),
        }),
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn lookup(&self, query: &str) -> Result<PlaceDetail, PlacesError> {
        let summary = self.text_search(query).await?;
        tracing::info!(place_id = %summary.place_id, "found: {}", summary.name);

        self.place_details(&summary.place_id).await
    }
}
