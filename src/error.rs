#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the importer crate."]
// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

/// Unified error type returned by the extractor, publisher, and CLI.
///
/// Every component reports failures by returning this type to the single
/// top-level caller; nothing below `main` terminates the process. Instances
/// are typically constructed through the [`Error::validation`] helper or by
/// converting from [`masterror::AppError`] via the provided `From`
/// implementation.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps transport failures while downloading the wiki page.
    #[error("failed to fetch wiki page from {url}: {source}")]
    Fetch {
        /// Location of the wiki page being retrieved.
        url:    String,
        /// Underlying transport error reported by the HTTP client.
        source: reqwest::Error
    },
    /// Returned when CLI arguments violate invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Returned when an issue-creation call is rejected by the tracker.
    #[error("failed to publish issues: {message}")]
    Publish {
        /// Human readable message describing the publish failure.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a publish error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the publish failure.
    pub fn publish<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Publish {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// Intended for CLI contexts where the variant name does not add value to
    /// end users. The returned string matches the [`std::fmt::Display`]
    /// implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<masterror::AppError> for Error {
    fn from(error: masterror::AppError) -> Self {
        Self::Publish {
            message: error.to_string()
        }
    }
}

/// Creates an [`Error::Fetch`] variant capturing the failing URL and source.
///
/// # Parameters
///
/// * `url` - Location of the wiki page that triggered the error.
/// * `source` - Transport error reported by the HTTP client.
pub fn fetch_error(url: &str, source: reqwest::Error) -> Error {
    Error::Fetch {
        url: url.to_owned(),
        source
    }
}
