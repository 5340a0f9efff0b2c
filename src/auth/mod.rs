//
//  tc-goggles
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! TeamCity accepts two kinds of credentials on its REST API:
//!
//! - **Access tokens**: sent as `Authorization: Bearer <token>`. This is the
//!   recommended mechanism and the one used by the `TEAMCITY_ACCESS_TOKEN`
//!   environment variable.
//! - **Username/password**: sent as HTTP Basic credentials.
//!
//! Both are represented by the closed [`Auth`] enum. Callers never need to
//! inspect the variant directly; [`Auth::map`] dispatches to one of two
//! closures instead.
//!
//! ## Example
//!
//! ```rust
//! use tc_goggles::auth::Auth;
//!
//! let auth = Auth::token("eyJ0eXAiOiAiVENWMiJ9");
//! let kind = auth.map(|_, _| "basic", |_| "token");
//! assert_eq!(kind, "token");
//! ```

use std::fmt;

use reqwest::blocking::RequestBuilder;

/// Credentials used to authenticate against a TeamCity server.
///
/// Construct values with [`Auth::token`] or [`Auth::basic`]. The credential is
/// immutable once built.
///
/// The `Debug` implementation redacts secrets so that credentials can safely
/// appear in tracing output.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// HTTP Basic authentication with a TeamCity username and password.
    Basic {
        /// The TeamCity username.
        username: String,
        /// The user's password.
        password: String,
    },
    /// Bearer authentication with a TeamCity access token.
    Token {
        /// The access token generated from the user's profile page.
        token: String,
    },
}

impl Auth {
    /// Creates a credential for token based authentication.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: token.into(),
        }
    }

    /// Creates a credential for username/password authentication.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the result of applying one of two functions depending on the
    /// underlying variant.
    ///
    /// Exactly one of the closures is invoked:
    ///
    /// - `on_basic(username, password)` for [`Auth::Basic`]
    /// - `on_token(token)` for [`Auth::Token`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use tc_goggles::auth::Auth;
    ///
    /// let auth = Auth::basic("jane", "hunter2");
    /// let user = auth.map(|username, _| username.to_string(), |_| String::new());
    /// assert_eq!(user, "jane");
    /// ```
    pub fn map<R>(
        &self,
        on_basic: impl FnOnce(&str, &str) -> R,
        on_token: impl FnOnce(&str) -> R,
    ) -> R {
        match self {
            Self::Basic { username, password } => on_basic(username, password),
            Self::Token { token } => on_token(token),
        }
    }

    /// Applies the credential to an outgoing request.
    ///
    /// Tokens become an `Authorization: Bearer` header, basic credentials are
    /// handed to the transport as HTTP Basic auth.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Token { token } => request.bearer_auth(token),
        }
    }

    /// Short, secret-free description of the credential kind.
    pub fn kind(&self) -> &'static str {
        self.map(|_, _| "basic", |_| "token")
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Token { .. } => f
                .debug_struct("Token")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
