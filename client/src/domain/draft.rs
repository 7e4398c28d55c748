//! Create-flow drafts and their local validation.
//!
//! Drafts are transient form state: freely mutable, never persisted, and
//! discarded on navigation. Validation turns a draft into the wire payload
//! for the create endpoint or reports the first missing requirement, so a
//! rejected submission never reaches the network.

use std::fmt;

use serde::Serialize;

/// Domain error returned when a recipe draft is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeDraftError {
    /// Title was missing or blank once trimmed.
    EmptyTitle,
    /// No category was chosen.
    MissingCategory,
    /// Every instruction step was blank.
    NoInstructions,
    /// No ingredient row was fully specified.
    NoIngredients,
}

impl fmt::Display for RecipeDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "recipe title is required"),
            Self::MissingCategory => write!(f, "recipe category is required"),
            Self::NoInstructions => write!(f, "at least one instruction step is required"),
            Self::NoIngredients => {
                write!(f, "at least one fully specified ingredient is required")
            }
        }
    }
}

impl std::error::Error for RecipeDraftError {}

/// Domain error returned when an ingredient draft is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientDraftError {
    /// Name was missing or blank once trimmed.
    EmptyName,
}

impl fmt::Display for IngredientDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "ingredient name is required"),
        }
    }
}

impl std::error::Error for IngredientDraftError {}

/// One editable ingredient row on the recipe form.
///
/// `name` is display-only state for the picker; the wire payload carries
/// the identifier, quantity, and unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftIngredient {
    /// Chosen ingredient identifier; zero marks an unchosen row.
    pub ingredient_id: i64,
    /// Amount of the ingredient.
    pub quantity: f64,
    /// Measurement unit for the quantity.
    pub unit: String,
    /// Display name mirrored from the picker.
    pub name: String,
}

impl DraftIngredient {
    /// Whether the row carries everything the backend requires.
    #[must_use]
    pub fn is_fully_specified(&self) -> bool {
        self.ingredient_id > 0 && self.quantity > 0.0 && !self.unit.trim().is_empty()
    }
}

/// Editable recipe form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeDraft {
    /// Recipe title.
    pub title: String,
    /// Short description, sent even when empty.
    pub description: String,
    /// Chosen category identifier.
    pub category_id: Option<i64>,
    /// Instruction steps; blank steps are dropped at validation.
    pub instructions: Vec<String>,
    /// Ingredient rows; unspecified rows are dropped at validation.
    pub ingredients: Vec<DraftIngredient>,
    /// Preparation time in minutes.
    pub prep_time: Option<u32>,
    /// Cooking time in minutes.
    pub cook_time: Option<u32>,
    /// Number of servings.
    pub servings: Option<u32>,
    /// Whether the backend should generate an image for the recipe.
    pub generate_image: bool,
}

/// Wire payload for one ingredient line of a create request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipeIngredient {
    /// Chosen ingredient identifier.
    pub ingredient_id: i64,
    /// Amount of the ingredient.
    pub quantity: f64,
    /// Measurement unit for the quantity.
    pub unit: String,
}

/// Wire payload for `POST /recipes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    /// Recipe title, trimmed.
    pub title: String,
    /// Short description, possibly empty.
    pub description: String,
    /// Chosen category identifier.
    pub category_id: i64,
    /// Preparation time in minutes, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// Number of servings, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Non-blank instruction steps.
    pub instructions: Vec<String>,
    /// Fully specified ingredient lines.
    pub ingredients: Vec<NewRecipeIngredient>,
    /// Whether the backend should generate an image.
    pub generate_image: bool,
}

impl RecipeDraft {
    /// Validate the draft into the create payload.
    ///
    /// Requirements, checked in order: a non-blank title, a chosen
    /// category, at least one non-blank instruction step, and at least one
    /// fully specified ingredient row. Blank steps and incomplete rows are
    /// filtered out rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecipeDraftError`] the draft fails.
    pub fn validate(&self) -> Result<NewRecipe, RecipeDraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(RecipeDraftError::EmptyTitle);
        }
        let category_id = self.category_id.ok_or(RecipeDraftError::MissingCategory)?;

        let instructions: Vec<String> = self
            .instructions
            .iter()
            .map(|step| step.trim())
            .filter(|step| !step.is_empty())
            .map(str::to_owned)
            .collect();
        if instructions.is_empty() {
            return Err(RecipeDraftError::NoInstructions);
        }

        let ingredients: Vec<NewRecipeIngredient> = self
            .ingredients
            .iter()
            .filter(|row| row.is_fully_specified())
            .map(|row| NewRecipeIngredient {
                ingredient_id: row.ingredient_id,
                quantity: row.quantity,
                unit: row.unit.clone(),
            })
            .collect();
        if ingredients.is_empty() {
            return Err(RecipeDraftError::NoIngredients);
        }

        Ok(NewRecipe {
            title: title.to_owned(),
            description: self.description.clone(),
            category_id,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            instructions,
            ingredients,
            generate_image: self.generate_image,
        })
    }
}

/// Editable ingredient-creation form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientDraft {
    /// Ingredient name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Default measurement unit.
    pub unit: String,
    /// Chosen category identifier.
    pub category_id: Option<i64>,
}

/// Wire payload for `POST /ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIngredient {
    /// Ingredient name, trimmed.
    pub name: String,
    /// Description, omitted when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default unit, omitted when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Chosen category identifier, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl IngredientDraft {
    /// Validate the draft into the create payload.
    ///
    /// Only the name is required; blank description and unit fields are
    /// omitted from the payload rather than sent as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`IngredientDraftError::EmptyName`] when the trimmed name is
    /// empty.
    pub fn validate(&self) -> Result<NewIngredient, IngredientDraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(IngredientDraftError::EmptyName);
        }
        Ok(NewIngredient {
            name: name.to_owned(),
            description: non_blank(&self.description),
            unit: non_blank(&self.unit),
            category_id: self.category_id,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
