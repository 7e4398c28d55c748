//! Listing envelopes and the tolerant legacy-shape decoder.
//!
//! Collection endpoints answer with the strict `{data, meta}` envelope or,
//! on older routes, with a bare array or an object wrapping the items under
//! a named member. [`Listing::from_value`] normalises all of these behind
//! one documented precedence order so callers never duck-type responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::meta::PageMeta;

/// Strict paginated envelope: items plus mandatory metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items for the requested page.
    pub data: Vec<T>,
    /// Pagination metadata describing the page.
    pub meta: PageMeta,
}

/// Decoded listing: items plus metadata when the endpoint supplied any.
///
/// Absent metadata marks a legacy response; callers must treat the page
/// count as unknown and suppress pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    /// Items recovered from the response body.
    pub items: Vec<T>,
    /// Pagination metadata, absent for legacy shapes.
    pub meta: Option<PageMeta>,
}

/// Errors raised while normalising a listing response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// The body advertised `{data, meta}` but the envelope did not decode.
    #[error("paginated envelope failed to decode: {detail}")]
    Envelope {
        /// Decoder diagnostic for the malformed envelope.
        detail: String,
    },
    /// An item sequence was located but its elements did not decode.
    #[error("listing items failed to decode: {detail}")]
    Items {
        /// Decoder diagnostic for the malformed items.
        detail: String,
    },
    /// The body matched none of the documented listing shapes.
    #[error("unrecognised listing shape: {detail}")]
    UnrecognisedShape {
        /// Description of the rejected body.
        detail: String,
    },
}

impl<T> Listing<T> {
    /// Build a listing that carries full pagination metadata.
    #[must_use]
    pub fn paginated(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            meta: Some(meta),
        }
    }

    /// Build a legacy listing with no pagination metadata.
    #[must_use]
    pub fn legacy(items: Vec<T>) -> Self {
        Self { items, meta: None }
    }

    /// Report whether the endpoint supplied pagination metadata.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.meta.is_some()
    }
}

impl<T> From<Page<T>> for Listing<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.data,
            meta: Some(page.meta),
        }
    }
}

impl<T: DeserializeOwned> Listing<T> {
    /// Normalise a response body into a listing.
    ///
    /// Shape precedence:
    ///
    /// 1. An object holding both `data` and `meta` decodes as the strict
    ///    envelope; items and metadata are returned verbatim.
    /// 2. A bare array decodes as legacy items with absent metadata.
    /// 3. An object holding an array under one of `members`, probed in
    ///    order, decodes as legacy items with absent metadata. A member
    ///    bound to a non-array value is skipped rather than trusted.
    /// 4. Anything else is rejected with the observed shape named.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Envelope`] when rule 1 matches but the
    /// envelope is malformed, [`EnvelopeError::Items`] when located items
    /// fail to decode, and [`EnvelopeError::UnrecognisedShape`] when no
    /// rule matches.
    pub fn from_value(body: Value, members: &[&str]) -> Result<Self, EnvelopeError> {
        let is_envelope = body
            .as_object()
            .is_some_and(|map| map.contains_key("data") && map.contains_key("meta"));
        if is_envelope {
            let page: Page<T> = serde_json::from_value(body).map_err(|error| {
                EnvelopeError::Envelope {
                    detail: error.to_string(),
                }
            })?;
            return Ok(page.into());
        }

        match body {
            Value::Array(_) => decode_items(body).map(Self::legacy),
            Value::Object(mut map) => {
                for member in members {
                    match map.remove(*member) {
                        Some(value) if value.is_array() => {
                            return decode_items(value).map(Self::legacy);
                        }
                        _ => {}
                    }
                }
                Err(EnvelopeError::UnrecognisedShape {
                    detail: format!(
                        "object with none of the expected members: {}",
                        members.join(", ")
                    ),
                })
            }
            other => Err(EnvelopeError::UnrecognisedShape {
                detail: format!("body was a JSON {}", value_kind(&other)),
            }),
        }
    }
}

fn decode_items<T: DeserializeOwned>(items: Value) -> Result<Vec<T>, EnvelopeError> {
    serde_json::from_value(items).map_err(|error| EnvelopeError::Items {
        detail: error.to_string(),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
