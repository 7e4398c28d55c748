//! Submission flows for the recipe and ingredient creation forms.
//!
//! Each flow validates its draft locally before touching the network, so a
//! form with missing fields costs no request. Outcomes are plain values:
//! the embedding view decides how to render errors and when to follow a
//! [`NavigationTarget`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    DispatchError, Ingredient, IngredientDraft, IngredientDraftError, Recipe, RecipeDraft,
    RecipeDraftError,
    ports::CatalogueSource,
};
use crate::view::NavigationTarget;

const CREATE_FORM_PATH: &str = "/recipe/create";

/// Result of submitting the recipe form.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeCreateOutcome {
    /// The backend accepted the recipe.
    Created {
        /// The stored recipe, as the backend returned it.
        recipe: Recipe,
        /// Detail view of the new recipe.
        destination: NavigationTarget,
    },
    /// The draft failed local validation; nothing was sent.
    Invalid {
        /// First requirement the draft missed.
        error: RecipeDraftError,
    },
    /// The stored credential was rejected.
    Unauthenticated {
        /// Login form, returning to the creation form afterwards.
        destination: NavigationTarget,
    },
    /// The backend refused the recipe or was unreachable.
    Failed {
        /// Human-readable description for the form's error banner.
        message: String,
    },
}

/// Result of submitting the ingredient form.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientCreateOutcome {
    /// The backend accepted the ingredient.
    Created {
        /// The stored ingredient, ready to select in the picker.
        ingredient: Ingredient,
    },
    /// The draft failed local validation; nothing was sent.
    Invalid {
        /// Requirement the draft missed.
        error: IngredientDraftError,
    },
    /// The stored credential was rejected.
    Unauthenticated {
        /// Login form, returning to the creation form afterwards.
        destination: NavigationTarget,
    },
    /// The backend refused the ingredient or was unreachable.
    Failed {
        /// Human-readable description for the picker's error banner.
        message: String,
    },
}

/// Drives the recipe creation form.
#[derive(Debug)]
pub struct CreateRecipeFlow<C> {
    catalogue: Arc<C>,
}

impl<C> Clone for CreateRecipeFlow<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
        }
    }
}

impl<C: CatalogueSource> CreateRecipeFlow<C> {
    /// Flow submitting through `catalogue`.
    pub fn new(catalogue: Arc<C>) -> Self {
        Self { catalogue }
    }

    /// Validate `draft` and, when it passes, create the recipe.
    pub async fn submit(&self, draft: &RecipeDraft) -> RecipeCreateOutcome {
        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(error) => return RecipeCreateOutcome::Invalid { error },
        };
        match self.catalogue.create_recipe(&payload).await {
            Ok(recipe) => {
                debug!(id = recipe.id, "recipe created");
                let destination = NavigationTarget::RecipeDetail { id: recipe.id };
                RecipeCreateOutcome::Created {
                    recipe,
                    destination,
                }
            }
            Err(DispatchError::Auth { .. }) => RecipeCreateOutcome::Unauthenticated {
                destination: NavigationTarget::Login {
                    return_to: CREATE_FORM_PATH.to_owned(),
                },
            },
            Err(error) => {
                warn!(error = %error, "recipe creation failed");
                RecipeCreateOutcome::Failed {
                    message: error.to_string(),
                }
            }
        }
    }
}

/// Drives the inline ingredient creation form inside the picker.
#[derive(Debug)]
pub struct CreateIngredientFlow<C> {
    catalogue: Arc<C>,
}

impl<C> Clone for CreateIngredientFlow<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
        }
    }
}

impl<C: CatalogueSource> CreateIngredientFlow<C> {
    /// Flow submitting through `catalogue`.
    pub fn new(catalogue: Arc<C>) -> Self {
        Self { catalogue }
    }

    /// Validate `draft` and, when it passes, create the ingredient.
    pub async fn submit(&self, draft: &IngredientDraft) -> IngredientCreateOutcome {
        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(error) => return IngredientCreateOutcome::Invalid { error },
        };
        match self.catalogue.create_ingredient(&payload).await {
            Ok(ingredient) => {
                debug!(id = ingredient.id, "ingredient created");
                IngredientCreateOutcome::Created { ingredient }
            }
            Err(DispatchError::Auth { .. }) => IngredientCreateOutcome::Unauthenticated {
                destination: NavigationTarget::Login {
                    return_to: CREATE_FORM_PATH.to_owned(),
                },
            },
            Err(error) => {
                warn!(error = %error, "ingredient creation failed");
                IngredientCreateOutcome::Failed {
                    message: error.to_string(),
                }
            }
        }
    }
}
