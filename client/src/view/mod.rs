//! View orchestrators driving the app's screens.
//!
//! Purpose: Turn user intent (keystrokes, page clicks, form submissions,
//! grocery ticks) into port calls and renderable state, without performing
//! any navigation or I/O of their own. Each orchestrator reports outcomes
//! as plain values; the embedding shell routes [`NavigationTarget`]s and
//! renders snapshots.
//!
//! Public surface:
//! - `SearchOrchestrator` / `SearchSnapshot` — debounced recipe search
//!   with last-issued-wins response handling.
//! - `PageCursor` — one-based page cursor clamped by the latest metadata.
//! - `CreateRecipeFlow` / `CreateIngredientFlow` — validate-then-submit
//!   flows for the creation forms.
//! - `GroceryChecklist` — in-memory tick-off state for the shopping list.
//! - `NavigationTarget` — destinations the shell should route to.

mod checklist;
mod create;
mod nav;
mod pager;
mod search;

pub use self::checklist::GroceryChecklist;
pub use self::create::{
    CreateIngredientFlow, CreateRecipeFlow, IngredientCreateOutcome, RecipeCreateOutcome,
};
pub use self::nav::NavigationTarget;
pub use self::pager::PageCursor;
pub use self::search::{SEARCH_QUIET_PERIOD, SearchOrchestrator, SearchSnapshot};
