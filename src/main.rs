//! weighted-pages - order static site pages by their front-matter weight.

mod cli;
mod config;
mod logger;
mod page;
mod site;
mod weight;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::WeightConfig;
use page::{Page, read_manifest};
use site::{Site, WeightedPagesGenerator};
use std::io::{Write, stdout};
use weight::keyed_pages;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let args = cli.args();

    let mut config = WeightConfig::default();
    config.update_with_cli(args);

    let pages = read_manifest(args.input.as_deref(), args.format)
        .context("Failed to load page manifest")?;
    log!("site"; "loaded {} pages", pages.len());

    match &cli.command {
        Commands::Sort { pretty, .. } => sort_site(pages, &config, *pretty),
        Commands::Keys { .. } => print_keys(&pages, &config),
    }
}

/// Run the weighted pages generator and print the slot it filled.
fn sort_site(pages: Vec<Page>, config: &WeightConfig, pretty: bool) -> Result<()> {
    let site = Site::new(pages);
    let generator = WeightedPagesGenerator::new(config.clone());
    site.generate(&[&generator])?;

    let stored = site
        .config
        .get(&config.key)
        .with_context(|| format!("`{}` was not set by the generator", config.key))?;
    let json = if pretty {
        serde_json::to_string_pretty(&stored)?
    } else {
        serde_json::to_string(&stored)?
    };

    writeln!(stdout().lock(), "{json}")?;
    Ok(())
}

/// Print `key<TAB>path` for every page, in sorted order.
fn print_keys(pages: &[Page], config: &WeightConfig) -> Result<()> {
    let keyed = keyed_pages(pages, config.sort_options())?;

    let mut stdout = stdout().lock();
    for (key, page) in keyed {
        writeln!(stdout, "{key}\t{}", page.path)?;
    }
    Ok(())
}
