// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration assembled from command-line arguments.
//!
//! The destination repository is deliberately injectable rather than
//! hard-coded: the publisher receives a validated [`RepoConfig`] from the
//! caller and has no notion of a default destination.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Wiki page scraped by the reference deployment.
pub const DEFAULT_WIKI_URL: &str =
    "https://wiki.duraspace.org/display/samvera/Suggestions+for+Samvera+Connect+2017+Program";

/// Destination repository for created issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Account that owns the destination repository.
    pub owner:      String,
    /// Name of the destination repository.
    pub repository: String
}

impl RepoConfig {
    /// Validates the owner and repository identifiers and builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when either value is
    /// empty or contains whitespace.
    pub fn new(owner: &str, repository: &str) -> Result<Self, Error> {
        Ok(Self {
            owner:      normalize_identifier(owner, "owner")?,
            repository: normalize_identifier(repository, "repository")?
        })
    }
}

impl std::fmt::Display for RepoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}

/// Validates identifier-like fields such as owners or repositories.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the value is empty
/// or contains whitespace.
fn normalize_identifier(input: &str, field: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(Error::validation(format!("{field} cannot contain whitespace")));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::RepoConfig;
    use crate::error::Error;

    #[test]
    fn repo_config_display_joins_owner_and_repository() {
        let repo = RepoConfig::new("samvera", "program-intake").expect("valid config");
        assert_eq!(repo.to_string(), "samvera/program-intake");
    }

    #[test]
    fn repo_config_trims_surrounding_whitespace() {
        let repo = RepoConfig::new(" owner ", " repo ").expect("valid config");
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repository, "repo");
    }

    #[test]
    fn empty_owner_is_rejected() {
        let error = RepoConfig::new("", "repo").expect_err("expected validation error");
        match error {
            Error::Validation {
                message
            } => {
                assert_eq!(message, "owner cannot be empty");
            }
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[test]
    fn interior_whitespace_is_rejected() {
        let error = RepoConfig::new("owner", "my repo").expect_err("expected validation error");
        match error {
            Error::Validation {
                message
            } => {
                assert_eq!(message, "repository cannot contain whitespace");
            }
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[test]
    fn repo_config_serialization_round_trip() {
        let repo = RepoConfig::new("owner", "repo").expect("valid config");
        let json = serde_json::to_string(&repo).expect("serialization failed");
        let deserialized: RepoConfig = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(repo, deserialized);
    }
}
