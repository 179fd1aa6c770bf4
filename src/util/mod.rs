//! Browser utilities shared across pages.

pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod gesture;
