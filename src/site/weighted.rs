//! Weighted pages generator.

use super::{Generator, Site};
use crate::{config::WeightConfig, log, weight::sort_pages_by_weight};
use anyhow::{Context, Result};

/// Stores the site's pages, ordered by weight, into the site config.
///
/// The slot (`weighted_pages` unless configured otherwise) is overwritten on
/// every run.
#[derive(Debug, Clone, Default)]
pub struct WeightedPagesGenerator {
    config: WeightConfig,
}

impl WeightedPagesGenerator {
    pub const fn new(config: WeightConfig) -> Self {
        Self { config }
    }
}

impl Generator for WeightedPagesGenerator {
    fn name(&self) -> &'static str {
        "weighted_pages"
    }

    fn generate(&self, site: &Site) -> Result<()> {
        let sorted = sort_pages_by_weight(&site.pages, self.config.sort_options())?;
        let value = serde_json::to_value(&sorted).context("Failed to serialize weighted pages")?;

        site.config.insert(self.config.key.as_str(), value);
        log!("weight"; "sorted {} pages into `{}`", sorted.len(), self.config.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::weight::{InvalidWeightPolicy, WeightError};
    use serde_json::json;

    fn site() -> Site {
        Site::new(vec![
            Page::new("index.md").with("title", "Home"),
            Page::new("about.md").with("title", "About").with("weight", 5),
            Page::new("docs.md").with("title", "Docs").with("weight", 1),
        ])
    }

    fn paths(value: &serde_json::Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|page| page["path"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_generate_stores_sorted_pages() {
        let site = site();
        WeightedPagesGenerator::default().generate(&site).unwrap();

        let stored = site.config.get("weighted_pages").unwrap();
        assert_eq!(paths(&stored), ["docs.md", "index.md", "about.md"]);
    }

    #[test]
    fn test_generate_passes_front_matter_through() {
        let site = site();
        WeightedPagesGenerator::default().generate(&site).unwrap();

        let stored = site.config.get("weighted_pages").unwrap();
        assert_eq!(
            stored[0],
            json!({ "path": "docs.md", "title": "Docs", "weight": 1 })
        );
        assert_eq!(stored[1], json!({ "path": "index.md", "title": "Home" }));
    }

    #[test]
    fn test_generate_leaves_pages_untouched() {
        let site = site();
        WeightedPagesGenerator::default().generate(&site).unwrap();

        let order: Vec<_> = site.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(order, ["index.md", "about.md", "docs.md"]);
    }

    #[test]
    fn test_generate_overwrites_previous_value() {
        let site = site();
        site.config.insert("weighted_pages", json!("stale"));
        WeightedPagesGenerator::default().generate(&site).unwrap();

        assert!(site.config.get("weighted_pages").unwrap().is_array());
    }

    #[test]
    fn test_generate_custom_key() {
        let site = site();
        let generator = WeightedPagesGenerator::new(WeightConfig {
            key: "nav".to_string(),
            ..WeightConfig::default()
        });
        generator.generate(&site).unwrap();

        assert!(site.config.contains_key("nav"));
        assert!(!site.config.contains_key("weighted_pages"));
    }

    #[test]
    fn test_generate_empty_site() {
        let site = Site::new(Vec::new());
        WeightedPagesGenerator::default().generate(&site).unwrap();
        assert_eq!(site.config.get("weighted_pages"), Some(json!([])));
    }

    #[test]
    fn test_generate_invalid_weight() {
        let site = Site::new(vec![
            Page::new("a.md").with("weight", "first"),
            Page::new("b.md").with("weight", 1),
        ]);

        let err = WeightedPagesGenerator::default().generate(&site).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WeightError>(),
            Some(WeightError::InvalidWeightType { path, .. }) if path == "a.md"
        ));
        assert!(!site.config.contains_key("weighted_pages"));

        let lenient = WeightedPagesGenerator::new(WeightConfig {
            invalid_weight: InvalidWeightPolicy::Unweighted,
            ..WeightConfig::default()
        });
        lenient.generate(&site).unwrap();
        assert_eq!(
            paths(&site.config.get("weighted_pages").unwrap()),
            ["b.md", "a.md"]
        );
    }
}
