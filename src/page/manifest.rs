//! Page manifest reading.
//!
//! The manifest is the already-materialized page collection, produced by the
//! host (or by hand) and fed to the command line front end.

use super::Page;
use serde::Deserialize;
use serde_json::Value;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Manifest-related errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("Manifest JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Manifest TOML parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("page `{path}` has a non-finite float ({value}) in `{field}`, which cannot be passed through")]
    NonFiniteFloat {
        path: String,
        field: String,
        value: f64,
    },
}

/// On-disk format of a page manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ManifestFormat {
    #[default]
    Json,
    Toml,
}

impl ManifestFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// TOML manifests are a list of `[[pages]]` tables.
#[derive(Deserialize)]
struct TomlManifest {
    #[serde(default)]
    pages: Vec<Page>,
}

/// Parse a manifest that has already been read into memory.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Vec<Page>, ManifestError> {
    let pages = match format {
        // Either a bare array or a `{ "pages": [...] }` object
        ManifestFormat::Json => match serde_json::from_str::<Value>(content)? {
            Value::Object(mut table) if table.contains_key("pages") => {
                serde_json::from_value(table.remove("pages").unwrap_or_default())?
            }
            value => serde_json::from_value(value)?,
        },
        ManifestFormat::Toml => {
            let table: toml::Table = toml::from_str(content)?;
            reject_non_finite(&table)?;
            toml::Value::Table(table).try_into::<TomlManifest>()?.pages
        }
    };
    Ok(pages)
}

/// TOML allows `inf` and `nan`, which JSON values cannot hold.
///
/// Pages are stored as JSON, where such a float would silently turn into
/// `null`, so the whole manifest is rejected instead.
fn reject_non_finite(table: &toml::Table) -> Result<(), ManifestError> {
    let Some(toml::Value::Array(pages)) = table.get("pages") else {
        return Ok(());
    };

    for (index, page) in pages.iter().enumerate() {
        let Some(fields) = page.as_table() else {
            continue;
        };
        for (field, value) in fields {
            if let Some(value) = first_non_finite(value) {
                let path = fields
                    .get("path")
                    .and_then(toml::Value::as_str)
                    .map_or_else(|| format!("pages[{index}]"), str::to_owned);
                return Err(ManifestError::NonFiniteFloat {
                    path,
                    field: field.clone(),
                    value,
                });
            }
        }
    }
    Ok(())
}

fn first_non_finite(value: &toml::Value) -> Option<f64> {
    match value {
        toml::Value::Float(float) if !float.is_finite() => Some(*float),
        toml::Value::Array(items) => items.iter().find_map(first_non_finite),
        toml::Value::Table(table) => table.values().find_map(first_non_finite),
        _ => None,
    }
}

/// Read a manifest from `path`, or from stdin when `path` is `None`.
///
/// An explicit `format` wins over the file extension.
pub fn read_manifest(
    path: Option<&Path>,
    format: Option<ManifestFormat>,
) -> Result<Vec<Page>, ManifestError> {
    let (content, guessed) = match path {
        Some(path) => {
            let content =
                fs::read_to_string(path).map_err(|e| ManifestError::Io(path.to_owned(), e))?;
            (content, ManifestFormat::from_path(path))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| ManifestError::Io(PathBuf::from("<stdin>"), e))?;
            (content, ManifestFormat::Json)
        }
    };

    parse_manifest(&content, format.unwrap_or(guessed))
}
