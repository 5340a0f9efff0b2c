//
//  tc-goggles
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Client for the TeamCity REST API (`/app/rest`).
//!
//! ## Architecture
//!
//! - [`request`]: pure [`RequestFormatter`] producing [`RequestDescriptor`]s
//! - [`client`]: blocking [`RestClient`] executing descriptors
//! - [`resources`]: [`BuildType`] and [`Parameter`] views
//! - [`sequence`]: lazy, single-pass [`Collection`] iterators
//! - [`endpoint`]: the [`TeamCityEndPoint`] façade
//! - [`common`]: the [`ApiError`] type
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]:
//!
//! - `Request`: non-2xx response
//! - `Network`: transport failure
//! - `Decode`: unexpected response shape
//! - `PagedResponse`: the server paged the collection (unsupported)
//! - `MissingField`: a key required to continue is absent

/// Core HTTP client wrapper.
pub mod client;

/// Shared error type.
pub mod common;

/// End-point façade and server configuration.
pub mod endpoint;

/// Request descriptors and the request formatter.
pub mod request;

/// Build type and parameter resources.
pub mod resources;

/// Lazy collection iterators.
pub mod sequence;

pub use client::{format_api_error, RestClient};
pub use common::ApiError;
pub use endpoint::{ServerConfig, TeamCityEndPoint};
pub use request::{RequestDescriptor, RequestFormatter};
pub use resources::{BuildType, BuildTypeInfo, BuildTypes, Parameter, Parameters};
pub use sequence::{Collection, Resource};
