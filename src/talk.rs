// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Talk proposal records extracted from the wiki program table.

use serde::{Deserialize, Serialize};

/// One proposed conference talk, read from a single table row.
///
/// Records are constructed once during extraction and never mutated. All
/// fields are free text taken verbatim from the source cells; the only
/// validation applied anywhere is the non-empty-title row filter in the
/// extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkRecord {
    /// Talk title; rows without one never become records.
    pub title:        String,
    /// Intended audience.
    pub audience:     String,
    /// Session format.
    pub format:       String,
    /// Person who suggested the talk.
    pub suggested_by: String,
    /// Proposed presenter.
    pub presenter:    String
}

impl std::fmt::Display for TalkRecord {
    /// Renders the issue body template for this record.
    ///
    /// The template is fixed: the title, a blank line, then one labeled line
    /// per remaining field. Rendering the same record twice yields
    /// byte-identical output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n\nSuggested by: {}\nPresenter: {}\nFormat: {}\nAudience: {}",
            self.title, self.suggested_by, self.presenter, self.format, self.audience
        )
    }
}
