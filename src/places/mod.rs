//! Google Places integration for placeprompt
//!
//! Text search, first-match selection, and detail fetching against the
//! Places Web Service.

mod client;
mod google;
mod models;

pub use client::{build_provider, PlacesProvider};
pub use google::{GooglePlacesClient, PlacesError};
pub use models::{EditorialSummary, OpeningHours, PlaceDetail, PlaceSummary, Review};
