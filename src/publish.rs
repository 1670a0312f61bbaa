// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequential publication of talk records as tracker issues.
//!
//! Submission is strictly one request per record, in input order, and stops
//! at the first failure. Records after the failing one are never attempted;
//! a re-run after fixing the cause is expected to recreate already-published
//! issues. Do not parallelize this loop: concurrent submission would create
//! ambiguous partial-completion states on failure.

use indicatif::{ProgressBar, ProgressStyle};
use masterror::AppError;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{config::RepoConfig, error::Error, labels::normalize_labels, talk::TalkRecord};

/// Issue-creation request derived from a talk record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    /// Issue title, copied verbatim from the talk title.
    pub title:  String,
    /// Issue body rendered from the remaining record fields.
    pub body:   String,
    /// Labels drawn from the fixed allow-lists; format label first.
    pub labels: Vec<String>
}

impl IssueRequest {
    /// Builds the request for a single talk record.
    ///
    /// The body uses the record's [`Display`](std::fmt::Display) rendering
    /// and the labels come from [`normalize_labels`]; unrecognized format or
    /// audience values simply produce fewer labels.
    pub fn from_talk(talk: &TalkRecord) -> Self {
        Self {
            title:  talk.title.clone(),
            body:   talk.to_string(),
            labels: normalize_labels(&talk.format, &talk.audience)
        }
    }
}

/// Identity of an issue created in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Issue number assigned by the tracker.
    pub number: u64,
    /// Browser URL of the created issue.
    pub url:    String
}

impl std::fmt::Display for CreatedIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({})", self.number, self.url)
    }
}

/// Issue tracker collaborator consumed by the publisher.
///
/// The publisher depends on exactly one remote operation, which keeps the
/// sequential submission logic testable without a live tracker.
pub trait IssueTracker {
    /// Creates a single issue in the destination repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the tracker rejects the request or the call
    /// cannot be completed.
    fn create_issue(
        &self,
        repo: &RepoConfig,
        request: &IssueRequest
    ) -> impl Future<Output = Result<CreatedIssue, AppError>>;
}

/// GitHub-backed tracker using an authenticated octocrab client.
pub struct GithubTracker {
    client: Octocrab
}

impl GithubTracker {
    /// Builds a tracker from a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the underlying client cannot be
    /// initialized.
    pub fn from_token(token: &str) -> Result<Self, AppError> {
        let client = Octocrab::builder().personal_token(token).build().map_err(|e| {
            AppError::unauthorized(format!("failed to initialize GitHub client: {e}"))
        })?;
        Ok(Self {
            client
        })
    }
}

impl IssueTracker for GithubTracker {
    async fn create_issue(
        &self,
        repo: &RepoConfig,
        request: &IssueRequest
    ) -> Result<CreatedIssue, AppError> {
        let issue = self
            .client
            .issues(repo.owner.clone(), repo.repository.clone())
            .create(request.title.as_str())
            .body(request.body.as_str())
            .labels(request.labels.clone())
            .send()
            .await
            .map_err(|e| {
                AppError::service(format!("failed to create issue '{}': {e}", request.title))
            })?;

        Ok(CreatedIssue {
            number: issue.number,
            url:    issue.html_url.to_string()
        })
    }
}

/// Publishes talk records as issues, one request per record, in input order.
///
/// A confirmation naming the created issue is printed after each successful
/// call, so confirmations for issues created before a failure are already on
/// stdout when the run aborts.
///
/// # Arguments
///
/// * `tracker` - Authenticated issue tracker collaborator
/// * `repo` - Destination repository for created issues
/// * `talks` - Records to publish, in extraction order
///
/// # Errors
///
/// Returns [`Error::Publish`](Error::Publish) for the first rejected
/// create-issue call; remaining records are not attempted.
pub async fn publish_talks<T: IssueTracker>(
    tracker: &T,
    repo: &RepoConfig,
    talks: &[TalkRecord]
) -> Result<Vec<CreatedIssue>, Error> {
    let pb = ProgressBar::new(talks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.yellow} [{elapsed_precise}] {pos}/{len} {msg}")
            .expect("valid template")
    );

    let mut created = Vec::with_capacity(talks.len());
    for talk in talks {
        let request = IssueRequest::from_talk(talk);
        pb.set_message(format!("Creating issue for '{}'...", request.title));
        debug!("Submitting issue '{}' with labels {:?}", request.title, request.labels);

        let issue = tracker.create_issue(repo, &request).await?;

        println!("created issue {issue} for '{}'", request.title);
        info!("Created issue #{} for '{}'", issue.number, request.title);
        created.push(issue);
        pb.inc(1);
    }

    pb.finish_with_message(format!("Created {} issues in {repo}", created.len()));
    Ok(created)
}
