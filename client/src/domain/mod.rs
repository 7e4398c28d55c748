//! Domain primitives and the client's port boundary.
//!
//! Purpose: Define strongly typed session and catalogue entities shared by
//! the view orchestrators and the HTTP adapters. Keep types immutable and
//! document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Token (alias to `token::Token`) — bearer credential with a redacted
//!   `Debug` and a hashed fingerprint for logs.
//! - DispatchError (alias to `error::DispatchError`) — classified request
//!   failure shared by every port.
//! - CollectionQuery (alias to `query::CollectionQuery`) — validated
//!   pagination, search, and sort parameters.
//! - ports — `TokenStore`, `AuthSource`, and `CatalogueSource` traits with
//!   fixture implementations.

pub mod auth;
pub mod catalogue;
pub mod draft;
pub mod error;
pub mod ports;
pub mod query;
pub mod token;

pub use self::auth::{
    LoginCredentials, LoginSession, LoginValidationError, SessionStatus, UserSummary,
};
pub use self::catalogue::{
    Category, Ingredient, IngredientSummary, Nutrition, Recipe, RecipeIngredient,
};
pub use self::draft::{
    DraftIngredient, IngredientDraft, IngredientDraftError, NewIngredient, NewRecipe,
    NewRecipeIngredient, RecipeDraft, RecipeDraftError,
};
pub use self::error::{DispatchError, DispatchResult};
pub use self::query::{
    CollectionQuery, DEFAULT_PAGE_SIZE, QueryValidationError, SortKey, SortOrder, SortSpec,
};
pub use self::token::{Token, TokenValidationError};
