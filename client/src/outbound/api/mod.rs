//! HTTP adapters for the backend API.
//!
//! This module provides the shared request dispatcher plus thin
//! implementations of the `AuthSource` and `CatalogueSource` ports.

mod auth;
mod catalogue;
mod dispatcher;

pub use auth::HttpAuthSource;
pub use catalogue::HttpCatalogueSource;
pub use dispatcher::{ApiResponse, HttpDispatcher};
