//! Configuration for the weighted pages generator.
//!
//! The generator owns one section, meant to be embedded in the host's site
//! configuration:
//!
//! ```toml
//! [weighted_pages]
//! key = "weighted_pages"      # config slot the result is stored under
//! unweighted = "length"       # "length" | "last"
//! invalid_weight = "error"    # "error" | "unweighted"
//! ```
//!
//! Every field is optional. Command line flags override the section.

pub mod defaults;

use crate::cli::SortArgs;
use crate::weight::{InvalidWeightPolicy, SortOptions, UnweightedKey};
use educe::Educe;
use serde::Deserialize;

/// `[weighted_pages]` section.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    /// Site config key that receives the sorted pages.
    #[serde(default = "defaults::weighted_pages::key")]
    #[educe(Default = defaults::weighted_pages::key())]
    pub key: String,

    /// Sort key for pages without a weight.
    #[serde(default)]
    pub unweighted: UnweightedKey,

    /// Handling of weights that are not numbers.
    #[serde(default)]
    pub invalid_weight: InvalidWeightPolicy,
}

impl WeightConfig {
    /// Apply command line overrides.
    pub fn update_with_cli(&mut self, args: &SortArgs) {
        Self::update_option(&mut self.key, args.key.as_ref());
        Self::update_option(&mut self.unweighted, args.unweighted.as_ref());
        Self::update_option(&mut self.invalid_weight, args.invalid_weight.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Options passed down to the sorter.
    pub const fn sort_options(&self) -> SortOptions {
        SortOptions {
            unweighted: self.unweighted,
            invalid_weight: self.invalid_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    /// Host configuration embedding the section, as a site generator would.
    #[derive(Debug, Deserialize)]
    struct HostConfig {
        #[serde(default)]
        weighted_pages: WeightConfig,
    }

    fn sort_args(argv: &[&str]) -> SortArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::Sort { args, .. } | Commands::Keys { args } => args,
        }
    }

    #[test]
    fn test_weight_config_defaults() {
        let config = WeightConfig::default();
        assert_eq!(config.key, "weighted_pages");
        assert_eq!(config.unweighted, UnweightedKey::CollectionLength);
        assert_eq!(config.invalid_weight, InvalidWeightPolicy::Error);
    }

    #[test]
    fn test_weight_config_missing_section() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert_eq!(config.weighted_pages, WeightConfig::default());
    }

    #[test]
    fn test_weight_config_full() {
        let config: HostConfig = toml::from_str(
            r#"
            [weighted_pages]
            key = "nav_pages"
            unweighted = "last"
            invalid_weight = "unweighted"
        "#,
        )
        .unwrap();

        let section = config.weighted_pages;
        assert_eq!(section.key, "nav_pages");
        assert_eq!(section.unweighted, UnweightedKey::Last);
        assert_eq!(section.invalid_weight, InvalidWeightPolicy::Unweighted);
    }

    #[test]
    fn test_weight_config_partial() {
        let config: HostConfig = toml::from_str(
            r#"
            [weighted_pages]
            unweighted = "length"
        "#,
        )
        .unwrap();

        assert_eq!(config.weighted_pages.key, "weighted_pages");
        assert_eq!(config.weighted_pages.unweighted, UnweightedKey::CollectionLength);
    }

    #[test]
    fn test_weight_config_rejects_unknown_fields() {
        let result: Result<HostConfig, _> = toml::from_str(
            r#"
            [weighted_pages]
            default_weight = 10
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_weight_config_rejects_unknown_policy() {
        let result: Result<HostConfig, _> = toml::from_str(
            r#"
            [weighted_pages]
            invalid_weight = "ignore"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_with_cli_overrides() {
        let mut config = WeightConfig::default();
        config.update_with_cli(&sort_args(&[
            "weighted-pages",
            "sort",
            "--key",
            "menu",
            "--unweighted",
            "last",
            "--invalid-weight",
            "unweighted",
        ]));

        assert_eq!(config.key, "menu");
        assert_eq!(
            config.sort_options(),
            SortOptions {
                unweighted: UnweightedKey::Last,
                invalid_weight: InvalidWeightPolicy::Unweighted,
            }
        );
    }

    #[test]
    fn test_update_with_cli_keeps_unset_fields() {
        let mut config = WeightConfig {
            key: "nav".to_string(),
            unweighted: UnweightedKey::Last,
            invalid_weight: InvalidWeightPolicy::Unweighted,
        };
        config.update_with_cli(&sort_args(&["weighted-pages", "keys"]));

        assert_eq!(config.key, "nav");
        assert_eq!(config.unweighted, UnweightedKey::Last);
        assert_eq!(config.invalid_weight, InvalidWeightPolicy::Unweighted);
    }
}
