//! The landing-page prompt template and its field defaults.

use crate::places::{PlaceDetail, Review};

/// Fallback for plain missing fields (address, phone, rating, name).
const NOT_AVAILABLE: &str = "N/A";

/// Fallback overview when the API has no editorial summary for the place.
const FALLBACK_OVERVIEW: &str = "Professional services provided locally.";

/// Number of top-rated reviews rendered as testimonials.
const MAX_REVIEWS: usize = 3;

/// Review text is cut to this many characters before the ellipsis marker.
const MAX_SNIPPET_CHARS: usize = 200;

/// Render a place detail record into the landing-page generation prompt.
///
/// Pure single-pass transform; every section header is emitted even when
/// the underlying data fell back to a default.
pub fn build_landing_page_prompt(detail: &PlaceDetail) -> String {
    let name = detail.name.as_deref().unwrap_or(NOT_AVAILABLE);
    let address = detail
        .formatted_address
        .as_deref()
        .unwrap_or(NOT_AVAILABLE);
    let phone = detail
        .formatted_phone_number
        .as_deref()
        .unwrap_or(NOT_AVAILABLE);
    let rating = detail
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let overview = detail
        .editorial_summary
        .as_ref()
        .and_then(|summary| summary.overview.as_deref())
        .unwrap_or(FALLBACK_OVERVIEW);

    let testimonials = render_testimonials(&detail.reviews);

    format!(
        "--- COPY BELOW THIS LINE ---\n\
         \n\
         # Role\n\
         Act as a Senior Web Developer (HTML5/Tailwind CSS) & UX Strategist.\n\
         \n\
         # Project Context\n\
         We are building a high-converting landing page for a real business.\n\
         Use the data below to generate the exact content and code.\n\
         \n\
         # Business Data (Source: Google Maps)\n\
         - **Name:** {name}\n\
         - **Address:** {address}\n\
         - **Phone:** {phone}\n\
         - **Rating:** {rating} Stars\n\
         - **Overview:** {overview}\n\
         \n\
         # Customer Testimonials (Trust Signals)\n\
         {testimonials}\n\
         \n\
         # Task Instructions\n\
         1. **Header:** Create a compelling Hero section using the \"Overview\" data.\n\
         2. **Social Proof:** Use the \"Customer Testimonials\" to build a reviews section.\n\
         3. **Contact:** Ensure the address and phone are prominent in the footer/header.\n\
         4. **Code:** Generate a **single HTML file** containing all CSS (Tailwind via CDN) and structure.\n\
         \n\
         --- END OF PROMPT ---"
    )
}

/// Top `MAX_REVIEWS` reviews by rating, one bullet per review. The sort is
/// stable, so equally rated reviews keep their input order; a missing
/// rating sorts as zero.
fn render_testimonials(reviews: &[Review]) -> String {
    let mut ranked: Vec<&Review> = reviews.iter().collect();
    ranked.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)));

    ranked
        .iter()
        .take(MAX_REVIEWS)
        .map(|review| {
            let rating = review
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            format!("- \"{}\" ({}/5)", snippet(&review.text), rating)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn rating_key(review: &Review) -> f32 {
    review.rating.unwrap_or(0.0)
}

/// Single-line snippet of review text: newlines become spaces, anything
/// past `MAX_SNIPPET_CHARS` characters is cut and marked with an ellipsis.
fn snippet(text: &str) -> String {
    let clean = text.replace('\n', " ");

    if clean.chars().count() > MAX_SNIPPET_CHARS {
        let truncated: String = clean.chars().take(MAX_SNIPPET_CHARS).collect();
        format!("{truncated}...")
    } else {
        clean
    }
}
