// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label normalization against the fixed tracker allow-lists.
//!
//! The normalizer is pure and total: any pair of free-text fields maps to
//! zero, one, or two labels, and nothing outside the allow-lists is ever
//! produced. Unrecognized values are omitted silently rather than rejected.

/// Session formats accepted as tracker labels.
pub const FORMAT_LABELS: [&str; 7] = [
    "Breakout",
    "Lightning talk",
    "Panel",
    "Plenary",
    "Presentation",
    "Unconference",
    "Workshop"
];

/// Audiences accepted as tracker labels.
pub const AUDIENCE_LABELS: [&str; 5] =
    ["All", "Developers", "Managers", "System Administrators", "Metadata"];

/// Maps a record's format and audience fields onto tracker labels.
///
/// Matching is exact and case-sensitive. The format label, when recognized,
/// always precedes the audience label, which keeps rendered label lists
/// deterministic.
pub fn normalize_labels(format: &str, audience: &str) -> Vec<String> {
    let mut labels = Vec::with_capacity(2);
    if FORMAT_LABELS.contains(&format) {
        labels.push(format.to_owned());
    }
    if AUDIENCE_LABELS.contains(&audience) {
        labels.push(audience.to_owned());
    }
    labels
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{AUDIENCE_LABELS, FORMAT_LABELS, normalize_labels};

    #[test]
    fn recognized_pair_yields_format_then_audience() {
        let labels = normalize_labels("Workshop", "Developers");
        assert_eq!(labels, vec!["Workshop".to_owned(), "Developers".to_owned()]);
    }

    #[test]
    fn unrecognized_format_is_omitted() {
        let labels = normalize_labels("Keynote", "All");
        assert_eq!(labels, vec!["All".to_owned()]);
    }

    #[test]
    fn unrecognized_audience_is_omitted() {
        let labels = normalize_labels("Panel", "Everyone");
        assert_eq!(labels, vec!["Panel".to_owned()]);
    }

    #[test]
    fn unrecognized_pair_yields_no_labels() {
        let labels = normalize_labels("Fireside chat", "Designers");
        assert!(labels.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let labels = normalize_labels("workshop", "developers");
        assert!(labels.is_empty());
    }

    #[test]
    fn multi_word_entries_match_exactly() {
        let labels = normalize_labels("Lightning talk", "System Administrators");
        assert_eq!(
            labels,
            vec!["Lightning talk".to_owned(), "System Administrators".to_owned()]
        );
    }

    proptest! {
        #[test]
        fn labels_never_leave_the_allow_lists(format in ".*", audience in ".*") {
            let labels = normalize_labels(&format, &audience);
            prop_assert!(labels.len() <= 2);
            for label in &labels {
                prop_assert!(
                    FORMAT_LABELS.contains(&label.as_str())
                        || AUDIENCE_LABELS.contains(&label.as_str())
                );
            }
        }

        #[test]
        fn recognized_format_always_appears_first(
            format_index in 0usize..FORMAT_LABELS.len(),
            audience in ".*"
        ) {
            let format = FORMAT_LABELS[format_index];
            let labels = normalize_labels(format, &audience);
            prop_assert_eq!(labels.first().map(String::as_str), Some(format));
        }

        #[test]
        fn normalization_is_deterministic(format in ".*", audience in ".*") {
            prop_assert_eq!(
                normalize_labels(&format, &audience),
                normalize_labels(&format, &audience)
            );
        }
    }
}
