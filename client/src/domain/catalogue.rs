//! Wire records for the remote recipe catalogue.
//!
//! These are the backend's entities, decoded liberally: unknown fields are
//! ignored and optional fields default, so older and newer backend
//! revisions both decode. The client never mutates them locally; creation
//! travels through the draft payloads in [`crate::domain::draft`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipe category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Standalone ingredient entity served by the ingredient endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Default measurement unit, used to pre-fill recipe drafts.
    #[serde(default)]
    pub unit: Option<String>,
    /// Owning category record, when the endpoint embeds it.
    #[serde(default)]
    pub category: Option<Category>,
    /// Image URL, when one exists.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Slim ingredient record as embedded in recipe payloads.
///
/// Recipe endpoints flatten the category to its display name, so this shape
/// differs from the standalone [`Ingredient`] entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSummary {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional grouping label.
    #[serde(default)]
    pub category: Option<String>,
}

/// One ingredient line attached to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Backend identifier of the recipe-ingredient link.
    pub id: i64,
    /// Amount of the ingredient, in `unit`.
    pub quantity: f64,
    /// Measurement unit for `quantity`.
    pub unit: String,
    /// The referenced ingredient.
    pub ingredient: IngredientSummary,
}

/// Nutrition summary attached to a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kilocalories.
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein in grams.
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrates in grams.
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat in grams.
    #[serde(default)]
    pub fat: Option<f64>,
}

/// Recipe as served by the catalogue endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Backend identifier.
    pub id: i64,
    /// Recipe title.
    pub title: String,
    /// Short description, empty when the backend supplied none.
    #[serde(default)]
    pub description: String,
    /// Flattened instruction text, when present.
    #[serde(default)]
    pub instructions: Option<String>,
    /// Image URL, when one has been generated or uploaded.
    #[serde(default)]
    pub image: Option<String>,
    /// Identifier of the owning category.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Identifier of the authoring user.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: Option<u32>,
    /// Number of servings the quantities yield.
    #[serde(default)]
    pub servings: Option<u32>,
    /// Nutrition summary, when computed.
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Expanded category record, when the endpoint embeds it.
    #[serde(default)]
    pub category: Option<Category>,
    /// Ingredient lines, empty when the endpoint omits them.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}
