//! Shared pagination envelope primitives for Quickly collection endpoints.
//!
//! Purpose: give every consumer of the collection API one vocabulary for
//! paginated responses. The crate owns the `meta` invariants
//! (`totalPages == ceil(total / limit)` and the boundary flags), the strict
//! `{data, meta}` envelope, the tolerant decoder for legacy listing shapes,
//! and the cursor clamping used by page navigation.
//!
//! Public surface:
//! - [`PageMeta`] / [`PageMetaError`] — wire metadata and its invariants.
//! - [`Page`] — strict paginated envelope.
//! - [`Listing`] / [`EnvelopeError`] — normalised decode result and the
//!   documented shape precedence.
//! - [`clamp_page`] — one-based cursor clamping.
//!
//! # Examples
//!
//! ```
//! use pagination::Listing;
//! use serde_json::json;
//!
//! let body = json!({ "recipes": [ { "name": "Flatbread" } ] });
//! let listing: Listing<serde_json::Value> =
//!     Listing::from_value(body, &["recipes", "data"])?;
//! assert_eq!(listing.items.len(), 1);
//! assert!(!listing.is_paginated());
//! # Ok::<(), pagination::EnvelopeError>(())
//! ```

mod envelope;
mod meta;

pub use envelope::{EnvelopeError, Listing, Page};
pub use meta::{PageMeta, PageMetaError, clamp_page};
