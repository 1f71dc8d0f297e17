//! Composition of the individual extractors over one text blob.

use lva_core::ExtractedIdentity;

use crate::address::extract_address;
use crate::phone::extract_phone;
use crate::social::extract_social;
use crate::website::extract_website;

/// Jurisdiction context for one extraction call.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    pub city: String,
    pub state: String,
    /// Empty means no area-code constraint.
    pub valid_area_codes: Vec<String>,
}

/// Run all extractors over one text blob.
///
/// Pure and infallible: malformed text yields an empty identity, never an
/// error.
#[must_use]
pub fn extract_identity(text: &str, ctx: &ExtractionContext) -> ExtractedIdentity {
    ExtractedIdentity {
        phone: extract_phone(text, &ctx.valid_area_codes),
        address: extract_address(text, &ctx.city, &ctx.state),
        website: extract_website(text),
        social_links: extract_social(text),
    }
}
