//! Pure identity extraction over noisy free text.
//!
//! Every function here is deterministic and side-effect free: malformed
//! input never errors, and the absence of a match is `None` or an empty
//! map, not a failure. Extraction composes via explicit list operations
//! with no shared mutable accumulator.

pub mod address;
pub mod filter;
pub mod identity;
pub mod markup;
pub mod normalize;
pub mod phone;
pub mod social;
pub mod states;
pub mod website;

pub use address::extract_address;
pub use filter::filter_location_relevant;
pub use identity::{extract_identity, ExtractionContext};
pub use markup::scan_structured_data;
pub use normalize::{normalize_address, normalize_phone, registrable_domain};
pub use phone::extract_phone;
pub use social::extract_social;
pub use website::extract_website;
