//
//  tc-goggles
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request descriptors for the TeamCity REST API.
//!
//! [`RequestFormatter`] turns a logical query into a [`RequestDescriptor`]
//! without touching the network. The descriptor is then executed by
//! [`RestClient`](super::RestClient).
//!
//! See <https://www.jetbrains.com/help/teamcity/rest-api.html> for the
//! endpoints used here.

use std::collections::BTreeMap;

use url::Url;

/// Path of the build type collection, relative to the server root.
pub const BUILD_TYPES_PATH: &str = "/app/rest/buildTypes";

/// An HTTP GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Absolute request URI, without query string.
    pub uri: String,
    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
}

impl RequestDescriptor {
    /// Creates a descriptor with no headers and no query parameters.
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            headers: BTreeMap::new(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// Builds [`RequestDescriptor`]s for a single TeamCity server.
///
/// The formatter holds only the server base URI. A trailing `/` is removed
/// so that paths can be appended verbatim.
///
/// # Example
///
/// ```rust
/// use tc_goggles::api::RequestFormatter;
///
/// let formatter = RequestFormatter::new("https://ci.example.com/");
/// let request = formatter.build_templates();
/// assert_eq!(request.uri, "https://ci.example.com/app/rest/buildTypes");
/// assert_eq!(request.params["locator"], "templateFlag:true");
/// ```
#[derive(Debug, Clone)]
pub struct RequestFormatter {
    server_uri: String,
}

impl RequestFormatter {
    /// Creates a formatter for the server at `server_uri`.
    pub fn new(server_uri: &str) -> Self {
        Self {
            server_uri: server_uri.trim_end_matches('/').to_string(),
        }
    }

    /// The server base URI, without trailing slash.
    pub fn server_uri(&self) -> &str {
        &self.server_uri
    }

    /// Build configurations, i.e. build types that are not templates.
    pub fn build_configurations(&self) -> RequestDescriptor {
        self.build_types(false)
    }

    /// Build templates.
    pub fn build_templates(&self) -> RequestDescriptor {
        self.build_types(true)
    }

    /// Parameters of the build type located at `href`.
    ///
    /// TeamCity returns server-relative hrefs such as
    /// `/app/rest/buildTypes/id:Project_Build`; absolute URLs are kept as-is.
    pub fn build_type_parameters(&self, href: &str) -> RequestDescriptor {
        RequestDescriptor::get(self.format_uri(&format!("{href}/parameters")))
    }

    fn build_types(&self, template_flag: bool) -> RequestDescriptor {
        RequestDescriptor::get(self.format_uri(BUILD_TYPES_PATH))
            .param("locator", format!("templateFlag:{template_flag}"))
    }

    fn format_uri(&self, path: &str) -> String {
        if Url::parse(path).is_ok() {
            path.to_string()
        } else {
            format!("{}{}", self.server_uri, path)
        }
    }
}
