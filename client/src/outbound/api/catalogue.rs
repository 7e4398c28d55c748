//! HTTP implementation of the catalogue port.
//!
//! Collection endpoints answer with either the paginated envelope or one of
//! the legacy list shapes; normalisation into [`Listing`] happens here so
//! the orchestrators only ever see one shape. Recipe search and browse sit
//! on distinct backend routes and that split is preserved as an external
//! contract.

use async_trait::async_trait;
use pagination::{EnvelopeError, Listing, PageMeta};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::dispatcher::HttpDispatcher;
use crate::domain::catalogue::{Category, Ingredient, Recipe};
use crate::domain::draft::{NewIngredient, NewRecipe};
use crate::domain::error::{DispatchError, DispatchResult};
use crate::domain::ports::CatalogueSource;
use crate::domain::query::CollectionQuery;

const RECIPE_SEARCH_PATH: &str = "/recipes/paginated";
const RECIPE_BROWSE_PATH: &str = "/recipes-secondary/paginated";
const RECIPE_COLLECTION_PATH: &str = "/recipes";
const CATEGORIES_PATH: &str = "/categories";
const INGREDIENTS_PATH: &str = "/ingredients";

/// Legacy object members probed for the item list, in precedence order.
const LISTING_MEMBERS: &[&str] = &["recipes", "data"];

/// Catalogue adapter over the backend's collection endpoints.
pub struct HttpCatalogueSource {
    dispatcher: HttpDispatcher,
}

impl HttpCatalogueSource {
    /// Build an adapter over the given dispatcher.
    #[must_use]
    pub fn new(dispatcher: HttpDispatcher) -> Self {
        Self { dispatcher }
    }

    async fn fetch_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &CollectionQuery,
    ) -> DispatchResult<Listing<T>> {
        let response = self.dispatcher.get(path, &query.to_pairs()).await?;
        let listing =
            Listing::from_value(response.json_value()?, LISTING_MEMBERS).map_err(decode_error)?;
        warn_on_inconsistent_meta(path, listing.meta.as_ref());
        Ok(listing)
    }
}

#[async_trait]
impl CatalogueSource for HttpCatalogueSource {
    async fn search_recipes(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
        self.fetch_listing(RECIPE_SEARCH_PATH, query).await
    }

    async fn browse_recipes(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
        self.fetch_listing(RECIPE_BROWSE_PATH, query).await
    }

    async fn recipe(&self, id: i64) -> DispatchResult<Recipe> {
        let response = self.dispatcher.get(&recipe_path(id), &[]).await?;
        response.json()
    }

    async fn recent_recipes(&self, limit: u64) -> DispatchResult<Vec<Recipe>> {
        let response = self
            .dispatcher
            .get(RECIPE_COLLECTION_PATH, &[("limit", limit.to_string())])
            .await?;
        let listing: Listing<Recipe> =
            Listing::from_value(response.json_value()?, LISTING_MEMBERS).map_err(decode_error)?;
        Ok(listing.items)
    }

    async fn categories(&self) -> DispatchResult<Vec<Category>> {
        let response = self.dispatcher.get(CATEGORIES_PATH, &[]).await?;
        response.json()
    }

    async fn search_ingredients(
        &self,
        query: &CollectionQuery,
    ) -> DispatchResult<Listing<Ingredient>> {
        self.fetch_listing(INGREDIENTS_PATH, query).await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> DispatchResult<Recipe> {
        let response = self.dispatcher.post(RECIPE_COLLECTION_PATH, recipe).await?;
        response.json()
    }

    async fn create_ingredient(&self, ingredient: &NewIngredient) -> DispatchResult<Ingredient> {
        let response = self.dispatcher.post(INGREDIENTS_PATH, ingredient).await?;
        response.json()
    }
}

fn recipe_path(id: i64) -> String {
    format!("/recipes-secondary/{id}")
}

fn decode_error(error: EnvelopeError) -> DispatchError {
    DispatchError::decode(error.to_string())
}

fn warn_on_inconsistent_meta(path: &str, meta: Option<&PageMeta>) {
    if let Some(meta) = meta {
        if !meta.is_consistent() {
            warn!(
                path,
                total = meta.total,
                page = meta.page,
                limit = meta.limit,
                total_pages = meta.total_pages,
                "pagination metadata is internally inconsistent"
            );
        }
    }
}
