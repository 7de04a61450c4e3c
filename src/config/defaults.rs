//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [weighted_pages] Section Defaults
// ============================================================================

pub mod weighted_pages {
    /// Config slot the sorted pages are stored under.
    pub fn key() -> String {
        "weighted_pages".into()
    }
}
