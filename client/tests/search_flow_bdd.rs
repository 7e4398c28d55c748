//! Behaviour tests for the debounced recipe search.
//!
//! The world owns a paused-clock Tokio runtime, so quiet periods elapse
//! deterministically and the scenarios assert on the exact requests the
//! orchestrator issued.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pagination::Listing;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::{Builder, Runtime};

use client::domain::ports::CatalogueSource;
use client::domain::{
    Category, CollectionQuery, DispatchError, DispatchResult, Ingredient, NewIngredient,
    NewRecipe, Recipe,
};
use client::view::SearchOrchestrator;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordedCall {
    endpoint: &'static str,
    term: String,
    page: u64,
}

/// Scripted source that records every listing call it receives.
struct RecordingCatalogue {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingCatalogue {
    fn record(&self, endpoint: &'static str, query: &CollectionQuery) {
        self.calls.lock().expect("call log lock").push(RecordedCall {
            endpoint,
            term: query.search().to_owned(),
            page: query.page(),
        });
    }
}

#[async_trait]
impl CatalogueSource for RecordingCatalogue {
    async fn search_recipes(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
        self.record("search", query);
        Ok(Listing::legacy(Vec::new()))
    }

    async fn browse_recipes(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
        self.record("browse", query);
        Ok(Listing::legacy(Vec::new()))
    }

    async fn recipe(&self, id: i64) -> DispatchResult<Recipe> {
        Err(DispatchError::api(404_u16, format!("no recipe {id}")))
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

    async fn create_recipe(&self, _recipe: &NewRecipe) -> DispatchResult<Recipe> {
        Err(DispatchError::api(400_u16, "not under test"))
    }

    async fn create_ingredient(&self, _ingredient: &NewIngredient) -> DispatchResult<Ingredient> {
        Err(DispatchError::api(400_u16, "not under test"))
    }
}

struct SearchWorld {
    runtime: Runtime,
    orchestrator: SearchOrchestrator<RecordingCatalogue>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl SearchWorld {
    fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log lock").clone()
    }
}

#[fixture]
fn world() -> SearchWorld {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .expect("paused runtime should build");
    let calls = Arc::new(Mutex::new(Vec::new()));
    let catalogue = RecordingCatalogue {
        calls: Arc::clone(&calls),
    };
    let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));
    SearchWorld {
        runtime,
        orchestrator,
        calls,
    }
}

#[given("an idle recipe listing")]
fn an_idle_recipe_listing(world: &SearchWorld) {
    assert!(world.recorded().is_empty());
}

#[when("the cook types p, pa, and pasta in quick succession")]
fn the_cook_types_in_quick_succession(world: &SearchWorld) {
    world.runtime.block_on(async {
        world.orchestrator.input("p");
        tokio::time::sleep(Duration::from_millis(100)).await;
        world.orchestrator.input("pa");
        tokio::time::sleep(Duration::from_millis(100)).await;
        world.orchestrator.input("pasta");
    });
}

#[when("the cook types the term {term}")]
fn the_cook_types_the_term(world: &SearchWorld, term: String) {
    world.runtime.block_on(async {
        world.orchestrator.input(&term);
    });
}

#[when("the cook clears the search term")]
fn the_cook_clears_the_search_term(world: &SearchWorld) {
    world.runtime.block_on(async {
        world.orchestrator.input("");
    });
}

#[when("the cook moves to page {page}")]
fn the_cook_moves_to_page(world: &SearchWorld, page: u64) {
    world.runtime.block_on(async {
        world.orchestrator.set_page(page);
        tokio::time::sleep(Duration::from_millis(50)).await;
    });
}

#[when("the listing settles")]
fn the_listing_settles(world: &SearchWorld) {
    world.runtime.block_on(async {
        tokio::time::sleep(Duration::from_secs(5)).await;
    });
}

#[then("exactly {count} listing request was issued")]
fn exactly_n_listing_requests_were_issued(world: &SearchWorld, count: usize) {
    let calls = world.recorded();
    assert_eq!(calls.len(), count, "recorded calls: {calls:?}");
}

#[then("the latest request searched for {term} on page {page}")]
fn the_latest_request_searched_for(world: &SearchWorld, term: String, page: u64) {
    let calls = world.recorded();
    let last = calls.last().expect("at least one request");
    assert_eq!(
        last,
        &RecordedCall {
            endpoint: "search",
            term,
            page,
        }
    );
}

#[then("the latest request browsed page {page}")]
fn the_latest_request_browsed_page(world: &SearchWorld, page: u64) {
    let calls = world.recorded();
    let last = calls.last().expect("at least one request");
    assert_eq!(
        last,
        &RecordedCall {
            endpoint: "browse",
            term: String::new(),
            page,
        }
    );
}

#[then("a browse request for page {page} was issued immediately")]
fn a_browse_request_was_issued_immediately(world: &SearchWorld, page: u64) {
    let calls = world.recorded();
    assert_eq!(calls.len(), 1, "recorded calls: {calls:?}");
    assert_eq!(
        calls[0],
        RecordedCall {
            endpoint: "browse",
            term: String::new(),
            page,
        }
    );
}

#[scenario(
    path = "tests/features/search_flow.feature",
    name = "Rapid keystrokes coalesce into one search"
)]
fn rapid_keystrokes_coalesce_into_one_search(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/search_flow.feature",
    name = "Changing the term returns to the first page"
)]
fn changing_the_term_returns_to_the_first_page(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/search_flow.feature",
    name = "Clearing the term browses from the first page"
)]
fn clearing_the_term_browses_from_the_first_page(world: SearchWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/search_flow.feature",
    name = "Page moves skip the quiet period"
)]
fn page_moves_skip_the_quiet_period(world: SearchWorld) {
    drop(world);
}
