//
//  tc-goggles
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity End-Point
//!
//! [`TeamCityEndPoint`] is the entry point of the library. It owns a
//! [`RestClient`] and a [`RequestFormatter`] and hands out lazy sequences of
//! [`BuildType`]s borrowing both.
//!
//! ```rust,no_run
//! use tc_goggles::api::{ServerConfig, TeamCityEndPoint};
//! use tc_goggles::auth::Auth;
//!
//! let config = ServerConfig::new("https://ci.example.com", Auth::token("my-token"));
//! let teamcity = TeamCityEndPoint::create(&config)?;
//!
//! for build_type in teamcity.build_configurations() {
//!     let build_type = build_type?;
//!     println!("{} {}", build_type.id(), build_type.web_url());
//! }
//! # Ok::<(), tc_goggles::api::ApiError>(())
//! ```

use std::iter::Chain;

use tracing::debug;

use super::resources::{BuildType, BuildTypes};
use super::sequence::Collection;
use super::{ApiError, RequestDescriptor, RequestFormatter, RestClient};
use crate::auth::Auth;

/// Determines how the connection to the server is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base server address, e.g. `https://ci.example.com`.
    pub uri: String,
    /// Credentials for every request.
    pub auth: Auth,
}

impl ServerConfig {
    pub fn new(uri: impl Into<String>, auth: Auth) -> Self {
        Self {
            uri: uri.into(),
            auth,
        }
    }
}

/// The TeamCity end-point and access to its REST API.
#[derive(Debug)]
pub struct TeamCityEndPoint {
    client: RestClient,
    formatter: RequestFormatter,
}

impl TeamCityEndPoint {
    /// Creates an end-point from a custom client and formatter.
    ///
    /// Most callers want [`TeamCityEndPoint::create`] instead.
    pub fn new(client: RestClient, formatter: RequestFormatter) -> Self {
        Self { client, formatter }
    }

    /// Creates an end-point for the server described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn create(config: &ServerConfig) -> Result<Self, ApiError> {
        debug!(server = %config.uri, auth = config.auth.kind(), "creating end-point");
        Ok(Self::new(
            RestClient::new(config.auth.clone())?,
            RequestFormatter::new(&config.uri),
        ))
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    pub fn formatter(&self) -> &RequestFormatter {
        &self.formatter
    }

    /// Build configurations (non-template build types).
    pub fn build_configurations(&self) -> BuildTypes<'_> {
        self.build_types_for(self.formatter.build_configurations())
    }

    /// Build templates.
    pub fn build_templates(&self) -> BuildTypes<'_> {
        self.build_types_for(self.formatter.build_templates())
    }

    /// Build configurations followed by build templates.
    ///
    /// The templates request is only issued once every configuration has
    /// been consumed.
    pub fn build_types(&self) -> Chain<BuildTypes<'_>, BuildTypes<'_>> {
        self.build_configurations().chain(self.build_templates())
    }

    fn build_types_for(&self, request: RequestDescriptor) -> BuildTypes<'_> {
        Collection::<BuildType<'_>>::new(&self.client, &self.formatter, request)
    }
}
