//! Prompt rendering for placeprompt
//!
//! Turns a place detail record into the fixed landing-page prompt template.

mod template;

pub use template::build_landing_page_prompt;
