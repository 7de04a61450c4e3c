//! The page record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single page of the host site.
///
/// `path` identifies the page in diagnostics. `data` holds the rest of the
/// front matter, flattened next to `path` when (de)serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Source path relative to the content root (e.g., "posts/hello.md")
    pub path: String,

    /// Front-matter fields, in their original order
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Page {
    /// Create a page with empty front matter.
    #[cfg(test)]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: Map::new(),
        }
    }

    /// Set a front-matter field, builder style.
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_owned(), value.into());
        self
    }

    /// Raw `weight` field, if the front matter has one.
    pub fn raw_weight(&self) -> Option<&Value> {
        self.data.get("weight")
    }
}
