//
//  tc-goggles
//  api/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! TeamCity Resource Types
//!
//! Read-only views over the JSON objects returned by the REST API.
//!
//! | Type | Endpoint | Collection key |
//! |------|----------|----------------|
//! | [`BuildType`] | `/app/rest/buildTypes` | `buildType` |
//! | [`Parameter`] | `{href}/parameters` | `property` |
//!
//! # Notes
//!
//! - Optional fields default to `None` when absent; they never fail
//! - Required [`BuildType`] fields that are absent make the element decode
//!   fail with [`ApiError::Decode`]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sequence::{Collection, Resource};
use super::{ApiError, RequestFormatter, RestClient};

/// Lazy sequence of the parameters of one build type.
pub type Parameters<'a> = Collection<'a, Parameter>;

/// Lazy sequence of build types.
pub type BuildTypes<'a> = Collection<'a, BuildType<'a>>;

/// A parameter (`property`) of a build type.
///
/// # Example
///
/// ```rust
/// use tc_goggles::api::Parameter;
///
/// let json = r#"{"name": "env.JAVA_HOME", "value": "/opt/jdk17", "inherited": true}"#;
/// let parameter: Parameter = serde_json::from_str(json).unwrap();
///
/// assert_eq!(parameter.name(), Some("env.JAVA_HOME"));
/// assert_eq!(parameter.inherited(), Some(true));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    value: Option<String>,

    /// Set when the parameter comes from a template or parent project.
    #[serde(default)]
    inherited: Option<bool>,
}

impl Parameter {
    /// Creates a parameter from its optional fields.
    pub fn new(name: Option<&str>, value: Option<&str>, inherited: Option<bool>) -> Self {
        Self {
            name: name.map(str::to_string),
            value: value.map(str::to_string),
            inherited,
        }
    }

    /// Parameter name, e.g. `env.JAVA_HOME`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Raw parameter value, before reference resolution.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the parameter comes from a template or parent project.
    pub fn inherited(&self) -> Option<bool> {
        self.inherited
    }
}

impl<'a> Resource<'a> for Parameter {
    const COLLECTION: &'static str = "property";
    const RESPONSE: &'static str = "properties";

    fn from_json(
        json: Value,
        _client: &'a RestClient,
        _formatter: &'a RequestFormatter,
    ) -> Result<Self, ApiError> {
        Ok(serde_json::from_value(json)?)
    }
}

/// The JSON fields of a build type.
///
/// `id`, `name`, `projectId` and `webUrl` are always present in TeamCity
/// responses; the remaining fields depend on the server version and on the
/// `fields` locator used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildTypeInfo {
    /// Build type identifier, e.g. `MyProject_Build`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Identifier of the owning project.
    pub project_id: String,

    /// Link to the build type in the TeamCity web UI.
    pub web_url: String,

    /// REST location of the build type, relative to the server root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Only present (and `true`) for templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_flag: Option<bool>,
}

/// A build configuration or build template.
///
/// A `BuildType` borrows the client and formatter of the
/// [`TeamCityEndPoint`](super::TeamCityEndPoint) that produced it, so that its
/// parameters can be fetched later with [`BuildType::parameters`].
#[derive(Debug, Clone)]
pub struct BuildType<'a> {
    info: BuildTypeInfo,
    client: &'a RestClient,
    formatter: &'a RequestFormatter,
}

impl<'a> BuildType<'a> {
    /// Build type identifier.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Identifier of the owning project.
    pub fn project_id(&self) -> &str {
        &self.info.project_id
    }

    /// Link to the build type in the web UI.
    pub fn web_url(&self) -> &str {
        &self.info.web_url
    }

    /// REST location, if the server sent one.
    pub fn href(&self) -> Option<&str> {
        self.info.href.as_deref()
    }

    /// All decoded fields.
    pub fn info(&self) -> &BuildTypeInfo {
        &self.info
    }

    /// Fetches the parameters of this build type.
    ///
    /// The request is issued when the returned sequence is first advanced.
    /// A build type without `href` yields a single
    /// [`ApiError::MissingField`].
    pub fn parameters(&self) -> Parameters<'a> {
        match self.href() {
            Some(href) => Collection::new(
                self.client,
                self.formatter,
                self.formatter.build_type_parameters(href),
            ),
            None => Collection::failed(
                self.client,
                self.formatter,
                ApiError::MissingField {
                    resource: "buildType",
                    field: "href",
                },
            ),
        }
    }
}

impl<'a> Resource<'a> for BuildType<'a> {
    const COLLECTION: &'static str = "buildType";
    const RESPONSE: &'static str = "buildTypes";

    fn from_json(
        json: Value,
        client: &'a RestClient,
        formatter: &'a RequestFormatter,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            info: serde_json::from_value(json)?,
            client,
            formatter,
        })
    }
}
