// SPDX-FileCopyrightText: 2026 talk-import contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Retrieval of the wiki page holding the talk proposal tables.

use tracing::{debug, info};

use crate::error::{Error, fetch_error};

/// Downloads the wiki page body from the given URL.
///
/// # Parameters
///
/// * `url` - Location of the wiki page to retrieve.
///
/// # Errors
///
/// Returns [`Error::Fetch`](Error::Fetch) when the request cannot be sent,
/// the server responds with an error status, or the body cannot be read.
pub async fn fetch_page(url: &str) -> Result<String, Error> {
    debug!("Fetching wiki page from {url}");

    let response = reqwest::get(url).await.map_err(|source| fetch_error(url, source))?;
    let response = response.error_for_status().map_err(|source| fetch_error(url, source))?;
    let body = response.text().await.map_err(|source| fetch_error(url, source))?;

    info!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::fetch_page;
    use crate::error::Error;

    #[tokio::test]
    async fn invalid_url_reports_fetch_error() {
        let error = fetch_page("not-a-url").await.expect_err("expected fetch failure");
        match error {
            Error::Fetch {
                url, ..
            } => {
                assert_eq!(url, "not-a-url");
            }
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[tokio::test]
    async fn unsupported_scheme_reports_fetch_error() {
        let result = fetch_page("ftp://example.invalid/talks").await;
        assert!(result.is_err(), "ftp scheme should be rejected");
    }
}
