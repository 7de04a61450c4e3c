//! Page records handed over by the host site.
//!
//! A [`Page`] is an opaque front-matter record: only its `weight` field is
//! ever inspected, everything else is carried through untouched.
//!
//! # Manifest
//!
//! The command line front end reads pages from a manifest instead of walking
//! a content directory. Supported shapes:
//!
//! ```json
//! [
//!     { "path": "about.md", "title": "About", "weight": 2 },
//!     { "path": "index.md", "title": "Home" }
//! ]
//! ```
//!
//! ```toml
//! [[pages]]
//! path = "about.md"
//! title = "About"
//! weight = 2
//! ```

mod manifest;
mod types;

pub use manifest::{ManifestFormat, read_manifest};
pub use types::Page;
