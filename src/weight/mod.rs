//! Ordering pages by their front-matter `weight`.
//!
//! Every page gets a [`SortKey`]: its weight when it has one, otherwise a
//! default picked by [`UnweightedKey`]. Pages are then stable-sorted by key,
//! ascending, so equal keys keep their manifest order.
//!
//! | `weight` field                     | Key                                  |
//! |------------------------------------|--------------------------------------|
//! | missing, `null`, `false`           | default (collection length)          |
//! | integer or float                   | the number itself                    |
//! | `true`, string, array, table       | [`WeightError::InvalidWeightType`]   |
//!
//! The default key is the size of the whole collection, not infinity: a page
//! weighted above that size sorts after the unweighted ones. Use
//! [`UnweightedKey::Last`] to always put unweighted pages at the end.

mod error;
mod key;
mod sort;

pub use error::WeightError;
pub use key::{SortKey, UnweightedKey, Weight};
pub use sort::{InvalidWeightPolicy, SortOptions, keyed_pages, sort_pages_by_weight};
