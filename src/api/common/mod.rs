//
//  tc-goggles
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared error type for every TeamCity API operation.
//!
//! # Example
//!
//! ```rust
//! use tc_goggles::api::ApiError;
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(ApiError::PagedResponse { .. }) => "too many results".to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//!
//! assert_eq!(describe(Ok(())), "ok");
//! ```

use thiserror::Error;

/// Unified error type for all TeamCity API operations.
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Request` | Server answered with a non-2xx status |
/// | `Network` | Connection, DNS or TLS failure |
/// | `Decode` | Body or collection element has an unexpected shape |
/// | `PagedResponse` | Server returned a paged collection (`nextHref`) |
/// | `MissingField` | A key needed to continue is absent |
///
/// Nothing is retried. Every error propagates to the immediate caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server returned a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response could not be decoded into the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server split the collection into pages.
    ///
    /// Paged responses are not supported; only the first page was received.
    #[error("Unsupported: paged response (next page at {next_href})")]
    PagedResponse {
        /// Value of the `nextHref` key of the first page.
        next_href: String,
    },

    /// A key required to continue was absent from a resource.
    #[error("{resource} has no `{field}` field")]
    MissingField {
        /// The resource kind, e.g. `buildType`.
        resource: &'static str,
        /// The missing key.
        field: &'static str,
    },
}

impl ApiError {
    /// Returns `true` when the server rejected the credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Request { status: 401 | 403, .. })
    }
}
