// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Imports conference talk proposals from a wiki program table into GitHub
//! issues.
//!
//! The library runs two sequential stages: an extractor that turns rows of
//! the matched wiki tables into [`TalkRecord`] values, and a publisher that
//! converts each record into an issue-creation request with normalized
//! labels and submits it through an [`IssueTracker`] collaborator, aborting
//! on the first failure. The CLI binary wires the stages together and owns
//! all exit-code policy.

mod config;
mod error;
mod extract;
mod fetch;
mod labels;
mod publish;
mod talk;

pub use config::{DEFAULT_WIKI_URL, RepoConfig};
pub use error::{Error, fetch_error};
pub use extract::{DEFAULT_TABLE_SELECTOR, extract_talks, parse_table_selector};
pub use fetch::fetch_page;
pub use labels::{AUDIENCE_LABELS, FORMAT_LABELS, normalize_labels};
pub use publish::{CreatedIssue, GithubTracker, IssueRequest, IssueTracker, publish_talks};
pub use talk::TalkRecord;
