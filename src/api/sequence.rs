//
//  tc-goggles
//  api/sequence.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lazy, single-pass sequences over TeamCity collections.
//!
//! A [`Collection`] holds a pending [`RequestDescriptor`] and issues it the
//! first time it is advanced. Each element of the response's collection array
//! is then wrapped into a [`Resource`] on demand. Once exhausted the sequence
//! stays exhausted; it never re-fetches.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use serde_json::Value;
use tracing::debug;

use super::{ApiError, RequestDescriptor, RequestFormatter, RestClient};

/// A resource that can be built from one element of a collection response.
pub trait Resource<'a>: Sized {
    /// Key of the array holding the elements, e.g. `buildType`.
    const COLLECTION: &'static str;

    /// Name of the enclosing response, used in error messages.
    const RESPONSE: &'static str;

    /// Wraps one array element.
    fn from_json(
        json: Value,
        client: &'a RestClient,
        formatter: &'a RequestFormatter,
    ) -> Result<Self, ApiError>;
}

enum State {
    Pending(RequestDescriptor),
    Failed(ApiError),
    Streaming(std::vec::IntoIter<Value>),
    Exhausted,
}

/// Lazy sequence of `Result<T, ApiError>`.
///
/// - No request is issued until [`Iterator::next`] is first called.
/// - A failed request is yielded once as `Err`, then the sequence ends.
/// - Elements that fail to decode are yielded as `Err` in place; the
///   remaining elements are still produced.
pub struct Collection<'a, T> {
    client: &'a RestClient,
    formatter: &'a RequestFormatter,
    state: State,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: Resource<'a>> Collection<'a, T> {
    pub(crate) fn new(
        client: &'a RestClient,
        formatter: &'a RequestFormatter,
        request: RequestDescriptor,
    ) -> Self {
        Self {
            client,
            formatter,
            state: State::Pending(request),
            _marker: PhantomData,
        }
    }

    /// A sequence that yields `error` once and ends, without any request.
    pub(crate) fn failed(
        client: &'a RestClient,
        formatter: &'a RequestFormatter,
        error: ApiError,
    ) -> Self {
        Self {
            client,
            formatter,
            state: State::Failed(error),
            _marker: PhantomData,
        }
    }

    /// Returns `true` once the request has been issued (or has failed).
    pub fn is_fetched(&self) -> bool {
        !matches!(self.state, State::Pending(_))
    }

    fn fetch(&self, request: &RequestDescriptor) -> Result<Vec<Value>, ApiError> {
        let mut body = self.client.request_json(request)?;

        let items = match body.get_mut(T::COLLECTION).map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ApiError::Decode(<serde_json::Error as serde::de::Error>::custom(format!(
                    "`{}` is not an array: {other}",
                    T::COLLECTION
                ))))
            }
            None => {
                return Err(ApiError::MissingField {
                    resource: T::RESPONSE,
                    field: T::COLLECTION,
                })
            }
        };

        debug!(uri = %request.uri, count = items.len(), "fetched {}", T::RESPONSE);
        Ok(items)
    }
}

impl<'a, T: Resource<'a>> Iterator for Collection<'a, T> {
    type Item = Result<T, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Exhausted) {
                State::Pending(request) => match self.fetch(&request) {
                    Ok(items) => self.state = State::Streaming(items.into_iter()),
                    Err(err) => return Some(Err(err)),
                },
                State::Failed(err) => return Some(Err(err)),
                State::Streaming(mut items) => {
                    let json = items.next()?;
                    self.state = State::Streaming(items);
                    return Some(T::from_json(json, self.client, self.formatter));
                }
                State::Exhausted => return None,
            }
        }
    }
}

impl<'a, T: Resource<'a>> FusedIterator for Collection<'a, T> {}

impl<T> fmt::Debug for Collection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Pending(request) => format!("pending {}", request.uri),
            State::Failed(err) => format!("failed: {err}"),
            State::Streaming(items) => format!("{} remaining", items.len()),
            State::Exhausted => "exhausted".to_string(),
        };
        f.debug_struct("Collection").field("state", &state).finish()
    }
}
