// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface for the talk importer binary.
//!
//! The CLI reads an access token and destination repository, fetches the
//! configured wiki page, extracts talk proposals from its tables, and
//! publishes one issue per proposal. Errors propagate to a single top-level
//! sink that prints to stderr and sets the exit status.

use std::process;

use clap::Parser;
use talk_import::{
    DEFAULT_TABLE_SELECTOR, DEFAULT_WIKI_URL, Error, GithubTracker, RepoConfig, extract_talks,
    fetch_page, parse_table_selector, publish_talks,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for importing wiki talk proposals.
#[derive(Debug, Parser)]
#[command(name = "talk-import", version, about = "Import wiki talk proposals as GitHub issues")]
struct Cli {
    /// GitHub personal access token used to authenticate issue creation.
    #[arg(value_name = "ACCESS_TOKEN")]
    token: String,

    /// Wiki page holding the talk proposal tables.
    #[arg(long = "url", value_name = "URL", default_value = DEFAULT_WIKI_URL)]
    url: String,

    /// Account that owns the destination repository.
    #[arg(long = "owner", value_name = "OWNER")]
    owner: String,

    /// Name of the destination repository.
    #[arg(long = "repo", value_name = "REPO")]
    repository: String,

    /// CSS selector matching the proposal tables.
    #[arg(long = "selector", value_name = "CSS", default_value = DEFAULT_TABLE_SELECTOR)]
    selector: String,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    if let Err(error) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the import using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from configuration validation, page
/// retrieval, and issue publication.
#[tokio::main]
async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    let repo = RepoConfig::new(&cli.owner, &cli.repository)?;
    let table_selector = parse_table_selector(&cli.selector)?;

    let page = fetch_page(&cli.url).await?;
    let talks = extract_talks(&page, &table_selector);
    info!("Extracted {} talk proposals from {}", talks.len(), cli.url);

    let tracker = GithubTracker::from_token(&cli.token)?;
    let created = publish_talks(&tracker, &repo, &talks).await?;
    info!("Imported {} talk proposals into {repo}", created.len());

    Ok(())
}
