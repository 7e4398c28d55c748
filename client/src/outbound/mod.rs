//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing
//! concrete implementations of domain port traits:
//!
//! - **api**: reqwest-backed adapters for the backend REST API
//! - **token_file**: file-backed token persistence
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod api;
pub mod token_file;

pub use api::{ApiResponse, HttpAuthSource, HttpCatalogueSource, HttpDispatcher};
pub use token_file::FileTokenStore;
