use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::places::google::{GooglePlacesClient, PlacesError};
use crate::places::models::PlaceDetail;

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Resolve a free-text query to the detail record of its best match.
    async fn lookup(&self, query: &str) -> Result<PlaceDetail, PlacesError>;
}

/// Build a places provider from runtime settings.
///
/// Fails up front when the API credential is missing, before any
/// interactive state exists.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn PlacesProvider>> {
    Ok(Box::new(GooglePlacesClient::from_settings(settings)?))
}
