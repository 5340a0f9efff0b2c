//
//  tc-goggles
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the TeamCity REST API
//!
//! [`RestClient`] executes [`RequestDescriptor`]s against the server and
//! returns parsed JSON bodies.
//!
//! ## Features
//!
//! - Authentication via [`Auth`] (bearer token or HTTP basic)
//! - `Accept: application/json` on every request
//! - Query parameters forwarded from the descriptor
//! - Error handling with messages extracted from the response body
//! - Custom User-Agent header
//!
//! Paged collections are not supported: a body carrying `nextHref` is
//! rejected with [`ApiError::PagedResponse`].

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use super::{ApiError, RequestDescriptor};
use crate::auth::Auth;

/// Extracts a user-friendly message from a failed TeamCity response.
///
/// TeamCity usually answers errors with a plain text body whose first line
/// summarises the problem:
///
/// ```text
/// Error has occurred during request processing, status code: 404 (Not Found).
/// Details: jetbrains.buildServer.server.rest.errors.NotFoundException: ...
/// ```
///
/// Newer versions can also answer with a JSON object carrying `message` and
/// optionally `details`. When neither yields anything, the canonical reason
/// phrase of the status is used.
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = json_error_message(body)
        .or_else(|| {
            body.lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    ApiError::Request {
        status: status.as_u16(),
        message,
    }
}

fn json_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    let message = json.get("message").and_then(Value::as_str)?;

    match json.get("details").and_then(Value::as_str) {
        Some(details) if !details.is_empty() => Some(format!("{message} ({details})")),
        _ => Some(message.to_string()),
    }
}

/// Blocking JSON client for a TeamCity server.
///
/// The client is immutable and can be shared by reference across any number
/// of sequential calls.
///
/// # Example
///
/// ```rust,no_run
/// use tc_goggles::api::{RequestFormatter, RestClient};
/// use tc_goggles::auth::Auth;
///
/// let client = RestClient::new(Auth::token("my-token"))?;
/// let formatter = RequestFormatter::new("https://ci.example.com");
/// let body = client.request_json(&formatter.build_configurations())?;
/// println!("{}", body["count"]);
/// # Ok::<(), tc_goggles::api::ApiError>(())
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The underlying HTTP client
    http: Client,
    /// Credentials applied to every request
    auth: Auth,
}

impl RestClient {
    /// Creates a client authenticating every request with `auth`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client could not be built
    /// (for instance when the TLS backend fails to initialise).
    pub fn new(auth: Auth) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .build()?,
            auth,
        })
    }

    /// The credentials this client authenticates with.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Issues a GET for `request` and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the request could not be sent
    /// - [`ApiError::Request`] if the status is not 2xx; the body is not parsed
    /// - [`ApiError::Decode`] if the body is not JSON
    /// - [`ApiError::PagedResponse`] if the body has a top-level `nextHref`
    pub fn request_json(&self, request: &RequestDescriptor) -> Result<Value, ApiError> {
        debug!(
            uri = %request.uri,
            params = ?request.params,
            auth = self.auth.kind(),
            "GET"
        );

        let mut builder = self
            .http
            .get(&request.uri)
            .header(ACCEPT, "application/json")
            .query(&request.params);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = self.auth.apply_to_request(builder).send()?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            debug!(uri = %request.uri, %status, "request failed");
            return Err(format_api_error(status, &text));
        }

        let json: Value = serde_json::from_str(&response.text()?)?;

        if let Some(next_href) = json.get("nextHref") {
            return Err(ApiError::PagedResponse {
                next_href: next_href
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| next_href.to_string()),
            });
        }

        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn descriptor(server: &mockito::Server, path: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("{}{}", server.url(), path))
    }

    #[test]
    fn test_format_api_error_plain_text() {
        let body = "Error has occurred during request processing, status code: 404 (Not Found).\n\
                    Details: NotFoundException: No build type found";
        let err = format_api_error(StatusCode::NOT_FOUND, body);
        match err {
            ApiError::Request { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(
                    message,
                    "Error has occurred during request processing, status code: 404 (Not Found)."
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_format_api_error_json() {
        let body = r#"{"message": "Access denied", "details": "missing permission"}"#;
        let err = format_api_error(StatusCode::FORBIDDEN, body);
        assert!(matches!(
            err,
            ApiError::Request { status: 403, ref message }
                if message == "Access denied (missing permission)"
        ));
    }

    #[test]
    fn test_format_api_error_empty_body() {
        let err = format_api_error(StatusCode::UNAUTHORIZED, "  \n");
        assert!(matches!(
            err,
            ApiError::Request { status: 401, ref message } if message == "Unauthorized"
        ));
    }

    #[test]
    fn test_request_json_sends_token_and_accept_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/app/rest/buildTypes")
            .match_header("accept", "application/json")
            .match_header("authorization", "Bearer abc")
            .match_query(Matcher::UrlEncoded(
                "locator".into(),
                "templateFlag:false".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 0, "buildType": []}"#)
            .create();

        let client = RestClient::new(Auth::token("abc")).unwrap();
        let request =
            descriptor(&server, "/app/rest/buildTypes").param("locator", "templateFlag:false");
        let json = client.request_json(&request).unwrap();

        assert_eq!(json["count"], 0);
        mock.assert();
    }

    #[test]
    fn test_request_json_sends_basic_credentials() {
        let mut server = mockito::Server::new();
        // "jane:hunter2"
        let mock = server
            .mock("GET", "/app/rest/server")
            .match_header("authorization", "Basic amFuZTpodW50ZXIy")
            .with_status(200)
            .with_body("{}")
            .create();

        let client = RestClient::new(Auth::basic("jane", "hunter2")).unwrap();
        client
            .request_json(&descriptor(&server, "/app/rest/server"))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_request_json_non_success_is_request_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/app/rest/buildTypes")
            .with_status(500)
            .with_body("Internal server error")
            .create();

        let client = RestClient::new(Auth::token("abc")).unwrap();
        let err = client
            .request_json(&descriptor(&server, "/app/rest/buildTypes"))
            .unwrap_err();

        assert!(matches!(
            err,
            ApiError::Request { status: 500, ref message } if message == "Internal server error"
        ));
    }

    #[test]
    fn test_request_json_non_success_skips_json_parsing() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/app/rest/buildTypes")
            .with_status(404)
            .with_body(r#"{"nextHref": "/page/2"}"#)
            .create();

        let client = RestClient::new(Auth::token("abc")).unwrap();
        let err = client
            .request_json(&descriptor(&server, "/app/rest/buildTypes"))
            .unwrap_err();

        assert!(matches!(err, ApiError::Request { status: 404, .. }));
    }

    #[test]
    fn test_request_json_rejects_paged_response() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/app/rest/buildTypes")
            .with_status(200)
            .with_body(
                r#"{"count": 1, "nextHref": "/app/rest/buildTypes?start=1", "buildType": [{}]}"#,
            )
            .create();

        let client = RestClient::new(Auth::token("abc")).unwrap();
        let err = client
            .request_json(&descriptor(&server, "/app/rest/buildTypes"))
            .unwrap_err();

        assert!(matches!(
            err,
            ApiError::PagedResponse { ref next_href }
                if next_href == "/app/rest/buildTypes?start=1"
        ));
    }

    #[test]
    fn test_request_json_invalid_body() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/app/rest/buildTypes")
            .with_status(200)
            .with_body("<html>login</html>")
            .create();

        let client = RestClient::new(Auth::token("abc")).unwrap();
        let err = client
            .request_json(&descriptor(&server, "/app/rest/buildTypes"))
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_request_json_forwards_descriptor_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/app/rest/buildTypes")
            .match_header("x-teamcity-client", "tcg")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body(r#"{"buildType": []}"#)
            .create();

        let mut request = descriptor(&server, "/app/rest/buildTypes");
        request
            .headers
            .insert("X-TeamCity-Client".to_string(), "tcg".to_string());

        let client = RestClient::new(Auth::token("abc")).unwrap();
        client.request_json(&request).unwrap();

        mock.assert();
    }

    #[test]
    fn test_request_json_unreachable_server_is_network_error() {
        let client = RestClient::new(Auth::token("abc")).unwrap();
        let err = client
            .request_json(&RequestDescriptor::get("http://127.0.0.1:1/app/rest/buildTypes"))
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(!err.is_auth_failure());
    }
}
