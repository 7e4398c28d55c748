//! Driven port for the paginated recipe catalogue.
//!
//! One port covers every collection endpoint the client consumes: recipe
//! search and browse (distinct backend routes kept as an external
//! contract), single-recipe lookup, the quick recent list, category and
//! ingredient lookups, and the two create operations.

use async_trait::async_trait;
use pagination::Listing;

use crate::domain::catalogue::{Category, Ingredient, Recipe};
use crate::domain::draft::{NewIngredient, NewRecipe};
use crate::domain::error::{DispatchError, DispatchResult};
use crate::domain::query::CollectionQuery;

/// Port over the backend's collection endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Search recipes via `GET /recipes/paginated`.
    async fn search_recipes(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>>;

    /// Browse recipes via `GET /recipes-secondary/paginated`.
    async fn browse_recipes(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>>;

    /// Fetch one recipe via `GET /recipes-secondary/{id}`.
    async fn recipe(&self, id: i64) -> DispatchResult<Recipe>;

    /// Fetch the most recent recipes via `GET /recipes`, a legacy list.
    async fn recent_recipes(&self, limit: u64) -> DispatchResult<Vec<Recipe>>;

    /// Fetch all categories via `GET /categories`.
    async fn categories(&self) -> DispatchResult<Vec<Category>>;

    /// Search ingredients via `GET /ingredients`.
    async fn search_ingredients(
        &self,
        query: &CollectionQuery,
    ) -> DispatchResult<Listing<Ingredient>>;

    /// Create a recipe via `POST /recipes`.
    async fn create_recipe(&self, recipe: &NewRecipe) -> DispatchResult<Recipe>;

    /// Create an ingredient via `POST /ingredients`.
    async fn create_ingredient(&self, ingredient: &NewIngredient) -> DispatchResult<Ingredient>;
}

/// Fixture implementation behaving like an empty catalogue.
///
/// Lookups answer with empty listings, single-recipe fetches miss, and
/// creates echo the payload back under a fixed identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalogueSource;

#[async_trait]
impl CatalogueSource for FixtureCatalogueSource {
    async fn search_recipes(&self, _query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
        Ok(Listing::legacy(Vec::new()))
    }

    async fn browse_recipes(&self, _query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
        Ok(Listing::legacy(Vec::new()))
    }

    async fn recipe(&self, id: i64) -> DispatchResult<Recipe> {
        Err(DispatchError::api(
            404_u16,
            format!("recipe {id} does not exist"),
        ))
    }

    async fn recent_recipes(&self, _limit: u64) -> DispatchResult<Vec<Recipe>> {
        Ok(Vec::new())
    }

    async fn categories(&self) -> DispatchResult<Vec<Category>> {
        Ok(Vec::new())
    }

    async fn search_ingredients(
        &self,
        _query: &CollectionQuery,
    ) -> DispatchResult<Listing<Ingredient>> {
        Ok(Listing::legacy(Vec::new()))
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> DispatchResult<Recipe> {
        Ok(Recipe {
            id: 1,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            instructions: Some(recipe.instructions.join("\n")),
            image: None,
            category_id: Some(recipe.category_id),
            user_id: None,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            nutrition: None,
            created_at: None,
            updated_at: None,
            category: None,
            ingredients: Vec::new(),
        })
    }

    async fn create_ingredient(&self, ingredient: &NewIngredient) -> DispatchResult<Ingredient> {
        Ok(Ingredient {
            id: 1,
            name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            category: None,
            image_url: None,
        })
    }
}
