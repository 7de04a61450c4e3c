//! Weight error types.

use thiserror::Error;

/// Weight-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    #[error("page `{path}` has a weight of type {found}, expected a number")]
    InvalidWeightType { path: String, found: &'static str },
}
