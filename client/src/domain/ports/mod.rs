//! Domain ports and supporting types for the hexagonal boundary.

mod auth_source;
mod catalogue_source;
mod token_store;

#[cfg(test)]
pub use auth_source::MockAuthSource;
pub use auth_source::{AuthSource, FixtureAuthSource};
#[cfg(test)]
pub use catalogue_source::MockCatalogueSource;
pub use catalogue_source::{CatalogueSource, FixtureCatalogueSource};
#[cfg(test)]
pub use token_store::MockTokenStore;
pub use token_store::{DisabledTokenStore, MemoryTokenStore, TokenStore};
