//! Host-side site state and generators.
//!
//! A [`Site`] is what a site generator hands to its generator steps: the
//! materialized pages plus a shared configuration mapping that templates
//! read later. Generators write derived data into that mapping.
//!
//! ```text
//! Site { pages, config }
//!    │
//!    ├── WeightedPagesGenerator ──► config["weighted_pages"] = [page, ...]
//!    └── ...
//! ```

mod weighted;

pub use weighted::WeightedPagesGenerator;

use crate::page::Page;
use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;

/// Site configuration mapping shared by all generators.
///
/// # Thread Safety
///
/// Uses `RwLock` so generators may run concurrently: reads are shared,
/// each write is exclusive, and the last write to a key wins.
#[derive(Debug, Default)]
pub struct ConfigMap {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl ConfigMap {
    /// Create a new empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `key`, returning the previous value.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.write().insert(key.into(), value)
    }

    /// Get a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    /// Check whether `key` is set.
    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

/// A derivation step run against the whole site.
pub trait Generator {
    /// Short name used in logs and error context.
    fn name(&self) -> &'static str;

    /// Derive data from `site` and store it into `site.config`.
    fn generate(&self, site: &Site) -> Result<()>;
}

/// Pages and configuration of a single generation run.
#[derive(Debug, Default)]
pub struct Site {
    pub pages: Vec<Page>,
    pub config: ConfigMap,
}

impl Site {
    /// Create a site from already-loaded pages, with an empty config.
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            config: ConfigMap::new(),
        }
    }

    /// Run generators in order, stopping at the first failure.
    pub fn generate(&self, generators: &[&dyn Generator]) -> Result<()> {
        for generator in generators {
            generator
                .generate(self)
                .with_context(|| format!("generator `{}` failed", generator.name()))?;
        }
        Ok(())
    }
}
