//
//  tc-goggles
//  search/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lazy parameter search across build types.
//!
//! [`find_parameters`] walks a sequence of build types and yields every
//! parameter accepted by a [`ParameterFilter`]. Parameters of a build type are
//! fetched only when the search reaches it, so bounding the search with
//! [`Iterator::take`] avoids requests for build types never visited.
//!
//! ```rust,no_run
//! use tc_goggles::api::{ServerConfig, TeamCityEndPoint};
//! use tc_goggles::auth::Auth;
//! use tc_goggles::filter::ParameterFilter;
//! use tc_goggles::search::find_parameters;
//!
//! let config = ServerConfig::new("https://ci.example.com", Auth::token("my-token"));
//! let teamcity = TeamCityEndPoint::create(&config)?;
//! let filter = (!ParameterFilter::inherited()).and(ParameterFilter::name_matches("JDK")?);
//!
//! for found in find_parameters(teamcity.build_types(), &filter).take(10) {
//!     let found = found?;
//!     println!("{} {:?}", found.build_type.web_url(), found.parameter.value());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::api::{ApiError, BuildType, Parameter, Parameters};
use crate::filter::ParameterFilter;

/// A parameter accepted by the filter, with the build type it belongs to.
#[derive(Debug, Clone)]
pub struct ParameterMatch<'a> {
    pub build_type: BuildType<'a>,
    pub parameter: Parameter,
}

/// Lazy iterator returned by [`find_parameters`].
pub struct ParameterSearch<'a, 'f, I> {
    build_types: I,
    current: Option<(BuildType<'a>, Parameters<'a>)>,
    filter: &'f ParameterFilter,
}

/// Searches the parameters of `build_types` for those accepted by `filter`.
///
/// Errors from either sequence are yielded in place; the search continues
/// with the next element if the caller keeps iterating.
pub fn find_parameters<'a, 'f, I>(
    build_types: I,
    filter: &'f ParameterFilter,
) -> ParameterSearch<'a, 'f, I::IntoIter>
where
    I: IntoIterator<Item = Result<BuildType<'a>, ApiError>>,
{
    ParameterSearch {
        build_types: build_types.into_iter(),
        current: None,
        filter,
    }
}

impl<'a, I> Iterator for ParameterSearch<'a, '_, I>
where
    I: Iterator<Item = Result<BuildType<'a>, ApiError>>,
{
    type Item = Result<ParameterMatch<'a>, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((build_type, parameters)) = self.current.as_mut() else {
                match self.build_types.next()? {
                    Ok(build_type) => {
                        let parameters = build_type.parameters();
                        self.current = Some((build_type, parameters));
                        continue;
                    }
                    Err(err) => return Some(Err(err)),
                }
            };

            match parameters.next() {
                Some(Ok(parameter)) => {
                    let accepted = self.filter.matches(&parameter);
                    trace!(
                        build_type = build_type.id(),
                        parameter = parameter.name(),
                        accepted,
                        "evaluated filter"
                    );
                    if accepted {
                        return Some(Ok(ParameterMatch {
                            build_type: build_type.clone(),
                            parameter,
                        }));
                    }
                }
                Some(Err(err)) => return Some(Err(err)),
                None => self.current = None,
            }
        }
    }
}

impl<'a, I> FusedIterator for ParameterSearch<'a, '_, I> where
    I: FusedIterator<Item = Result<BuildType<'a>, ApiError>>
{
}
