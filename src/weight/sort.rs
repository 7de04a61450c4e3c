//! The weight sort itself.

use super::{SortKey, UnweightedKey, Weight, WeightError};
use crate::{log, page::Page};
use serde::Deserialize;

/// What to do with a page whose `weight` is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWeightPolicy {
    /// Fail the whole sort (default)
    #[default]
    Error,
    /// Warn and sort the page as if it had no weight
    Unweighted,
}

/// Knobs for [`sort_pages_by_weight`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub unweighted: UnweightedKey,
    pub invalid_weight: InvalidWeightPolicy,
}

/// Compute the key of `page` within a collection of `len` pages.
pub fn effective_key(page: &Page, len: usize, options: SortOptions) -> Result<SortKey, WeightError> {
    match Weight::of_page(page) {
        Ok(Some(weight)) => Ok(SortKey::Value(weight)),
        Ok(None) => Ok(options.unweighted.key(len)),
        Err(err) => match options.invalid_weight {
            InvalidWeightPolicy::Error => Err(err),
            InvalidWeightPolicy::Unweighted => {
                log!("warn"; "{err}, sorting it as unweighted");
                Ok(options.unweighted.key(len))
            }
        },
    }
}

/// Pair every page with its key, ordered ascending by key.
///
/// Keys are computed once per page. The sort is stable: pages with equal
/// keys (all unweighted pages, for one) stay in input order.
pub fn keyed_pages(pages: &[Page], options: SortOptions) -> Result<Vec<(SortKey, &Page)>, WeightError> {
    let len = pages.len();
    let mut keyed = pages
        .iter()
        .map(|page| effective_key(page, len, options).map(|key| (key, page)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed)
}

/// Order pages ascending by weight.
///
/// Returns a new view over the same pages; neither the slice nor the pages
/// are modified.
pub fn sort_pages_by_weight(pages: &[Page], options: SortOptions) -> Result<Vec<&Page>, WeightError> {
    Ok(keyed_pages(pages, options)?
        .into_iter()
        .map(|(_, page)| page)
        .collect())
}
