//! Debounced search orchestrator for the recipe listing.
//!
//! Keystrokes restart a quiet-period timer; only a term that survives the
//! quiet period issues a request. A non-empty term searches, an empty term
//! falls back to browsing, and a term change always returns to page one.
//! Every dispatch takes a monotonically increasing issue number, and a
//! response is applied only while its number is still the newest, so a slow
//! response can never overwrite the results of a later request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use pagination::PageMeta;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{CollectionQuery, Recipe, ports::CatalogueSource};

/// Quiet period a keystroke must survive before a request is issued.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Listing state the view should render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    /// Recipes for the current term and page.
    pub items: Vec<Recipe>,
    /// Pagination metadata; `None` after a legacy response.
    pub meta: Option<PageMeta>,
    /// Search term the items were fetched for.
    pub term: String,
    /// Whether a request is in flight.
    pub fetching: bool,
    /// Message of the most recent failure, cleared by the next success.
    pub error: Option<String>,
}

struct SearchState {
    query: CollectionQuery,
    timer: Option<JoinHandle<()>>,
}

/// Coalesces keystrokes and page moves into listing requests.
///
/// Handles are cheap to clone and share one subscription stream. The
/// orchestrator issues no request on construction; call [`refresh`] for the
/// initial load.
///
/// [`refresh`]: SearchOrchestrator::refresh
pub struct SearchOrchestrator<C> {
    catalogue: Arc<C>,
    quiet_period: Duration,
    state: Arc<Mutex<SearchState>>,
    issued: Arc<AtomicU64>,
    updates: Arc<watch::Sender<SearchSnapshot>>,
}

impl<C> Clone for SearchOrchestrator<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
            quiet_period: self.quiet_period,
            state: Arc::clone(&self.state),
            issued: Arc::clone(&self.issued),
            updates: Arc::clone(&self.updates),
        }
    }
}

impl<C: CatalogueSource + 'static> SearchOrchestrator<C> {
    /// Orchestrator over `catalogue` with the standard quiet period.
    pub fn new(catalogue: Arc<C>) -> Self {
        Self::with_quiet_period(catalogue, SEARCH_QUIET_PERIOD)
    }

    /// Orchestrator with an explicit quiet period.
    pub fn with_quiet_period(catalogue: Arc<C>, quiet_period: Duration) -> Self {
        let (updates, _initial) = watch::channel(SearchSnapshot::default());
        Self {
            catalogue,
            quiet_period,
            state: Arc::new(Mutex::new(SearchState {
                query: CollectionQuery::default(),
                timer: None,
            })),
            issued: Arc::new(AtomicU64::new(0)),
            updates: Arc::new(updates),
        }
    }

    /// Subscribe to listing snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.updates.subscribe()
    }

    /// Record a keystroke in the search field.
    ///
    /// An unchanged term is ignored. A changed term cancels any pending
    /// timer, resets the cursor to page one, and starts a fresh quiet
    /// period. The request itself is issued only when the timer survives.
    pub fn input(&self, term: &str) {
        let mut state = self.lock_state();
        if state.query.search() == term {
            return;
        }
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.query = state.query.clone().with_search(term).with_page(1);
        let query = state.query.clone();
        let worker = self.clone();
        let quiet_period = self.quiet_period;
        state.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            // The request outlives the timer, so a later keystroke cancels
            // only pending timers, never a request already on the wire.
            tokio::spawn(worker.dispatch(query));
        }));
    }

    /// Move to `page` and fetch it immediately.
    ///
    /// Page moves are deliberate clicks, so no quiet period applies; any
    /// timer still waiting on a keystroke is cancelled.
    pub fn set_page(&self, page: u64) {
        let query = {
            let mut state = self.lock_state();
            if let Some(timer) = state.timer.take() {
                timer.abort();
            }
            state.query = state.query.clone().with_page(page);
            state.query.clone()
        };
        tokio::spawn(self.clone().dispatch(query));
    }

    /// Fetch the current query immediately.
    pub fn refresh(&self) {
        let query = self.lock_state().query.clone();
        tokio::spawn(self.clone().dispatch(query));
    }

    async fn dispatch(self, query: CollectionQuery) {
        let issue = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.updates.send_modify(|snapshot| snapshot.fetching = true);
        let term = query.search().to_owned();
        debug!(issue, term = %term, page = query.page(), "dispatching listing request");
        let result = if term.trim().is_empty() {
            self.catalogue.browse_recipes(&query).await
        } else {
            self.catalogue.search_recipes(&query).await
        };
        self.updates.send_modify(|snapshot| {
            if self.issued.load(Ordering::SeqCst) != issue {
                debug!(issue, "discarding superseded listing response");
                return;
            }
            match result {
                Ok(listing) => {
                    *snapshot = SearchSnapshot {
                        items: listing.items,
                        meta: listing.meta,
                        term,
                        fetching: false,
                        error: None,
                    };
                }
                Err(error) => {
                    warn!(error = %error, "listing request failed");
                    snapshot.fetching = false;
                    snapshot.error = Some(error.to_string());
                }
            }
        });
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use pagination::{Listing, PageMeta};

    use crate::domain::{
        Category, DispatchError, DispatchResult, Ingredient, NewIngredient, NewRecipe,
    };
    use crate::domain::ports::MockCatalogueSource;

    use super::*;

    fn recipe_titled(id: i64, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_owned(),
            description: String::new(),
            instructions: None,
            image: None,
            category_id: None,
            user_id: None,
            prep_time: None,
            cook_time: None,
            servings: None,
            nutrition: None,
            created_at: None,
            updated_at: None,
            category: None,
            ingredients: Vec::new(),
        }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keystrokes_coalesce_into_one_request() {
        let mut catalogue = MockCatalogueSource::new();
        catalogue
            .expect_search_recipes()
            .withf(|query| query.search() == "pasta" && query.page() == 1)
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(1, "Pasta")])));
        catalogue.expect_browse_recipes().times(0);
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.input("p");
        tokio::time::sleep(Duration::from_millis(100)).await;
        orchestrator.input("pa");
        tokio::time::sleep(Duration::from_millis(100)).await;
        orchestrator.input("pasta");
        settle().await;

        let snapshot = orchestrator.subscribe().borrow().clone();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.term, "pasta");
        assert!(!snapshot.fetching);
    }

    #[tokio::test(start_paused = true)]
    async fn no_request_is_issued_before_the_quiet_period_ends() {
        let mut catalogue = MockCatalogueSource::new();
        catalogue
            .expect_search_recipes()
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(1, "Pasta")])));
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.input("pasta");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(orchestrator.subscribe().borrow().items.is_empty());

        settle().await;
        assert_eq!(orchestrator.subscribe().borrow().items.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_terms_browse_instead_of_searching() {
        let mut catalogue = MockCatalogueSource::new();
        catalogue
            .expect_browse_recipes()
            .withf(|query| query.search().is_empty() && query.page() == 1)
            .times(1)
            .returning(|_| {
                let meta = PageMeta::try_new(37, 1, 12).expect("valid counts");
                Ok(Listing::paginated(
                    vec![recipe_titled(1, "Shakshuka")],
                    meta,
                ))
            });
        catalogue.expect_search_recipes().times(0);
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.refresh();
        settle().await;

        let snapshot = orchestrator.subscribe().borrow().clone();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.meta.map(|meta| meta.total_pages), Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_term_returns_to_browsing_on_page_one() {
        let mut catalogue = MockCatalogueSource::new();
        catalogue
            .expect_search_recipes()
            .withf(|query| query.search() == "pasta" && query.page() == 1)
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(1, "Pasta")])));
        catalogue
            .expect_search_recipes()
            .withf(|query| query.search() == "pasta" && query.page() == 3)
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(2, "Pasta al forno")])));
        catalogue
            .expect_browse_recipes()
            .withf(|query| query.search().is_empty() && query.page() == 1)
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(3, "Browse")])));
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.input("pasta");
        settle().await;
        orchestrator.set_page(3);
        settle().await;
        orchestrator.input("");
        settle().await;

        let snapshot = orchestrator.subscribe().borrow().clone();
        assert_eq!(snapshot.term, "");
        assert_eq!(snapshot.items[0].title, "Browse");
    }

    #[tokio::test(start_paused = true)]
    async fn page_moves_skip_the_quiet_period() {
        let mut catalogue = MockCatalogueSource::new();
        catalogue
            .expect_browse_recipes()
            .withf(|query| query.page() == 2)
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(9, "Second page")])));
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.set_page(2);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(orchestrator.subscribe().borrow().items.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failures_keep_the_previous_items_and_record_the_message() {
        let mut catalogue = MockCatalogueSource::new();
        catalogue
            .expect_browse_recipes()
            .times(1)
            .returning(|_| Ok(Listing::legacy(vec![recipe_titled(1, "Shakshuka")])));
        catalogue
            .expect_search_recipes()
            .times(1)
            .returning(|_| Err(DispatchError::api(500_u16, "backend unavailable")));
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.refresh();
        settle().await;
        orchestrator.input("pasta");
        settle().await;

        let snapshot = orchestrator.subscribe().borrow().clone();
        assert_eq!(snapshot.items.len(), 1, "stale items remain renderable");
        let message = snapshot.error.as_deref().unwrap_or_default();
        assert!(message.contains("backend unavailable"));
    }

    /// Scripted source whose next responses take a queued amount of time.
    struct DelayedCatalogue {
        delays: Mutex<VecDeque<Duration>>,
    }

    impl DelayedCatalogue {
        fn new(delays: impl IntoIterator<Item = Duration>) -> Self {
            Self {
                delays: Mutex::new(delays.into_iter().collect()),
            }
        }

        async fn respond(&self, query: &CollectionQuery) -> DispatchResult<Listing<Recipe>> {
            let delay = {
                let mut delays = self.delays.lock().expect("delay queue lock");
                delays.pop_front().unwrap_or_default()
            };
            tokio::time::sleep(delay).await;
            Ok(Listing::legacy(vec![recipe_titled(1, query.search())]))
        }
    }

    #[async_trait]
    impl CatalogueSource for DelayedCatalogue {
        async fn search_recipes(
            &self,
            query: &CollectionQuery,
        ) -> DispatchResult<Listing<Recipe>> {
            self.respond(query).await
        }

        async fn browse_recipes(
            &self,
            query: &CollectionQuery,
        ) -> DispatchResult<Listing<Recipe>> {
            self.respond(query).await
        }

        async fn recipe(&self, _id: i64) -> DispatchResult<Recipe> {
            panic!("not exercised")
        }

        async fn recent_recipes(&self, _limit: u64) -> DispatchResult<Vec<Recipe>> {
            panic!("not exercised")
        }

        async fn categories(&self) -> DispatchResult<Vec<Category>> {
            panic!("not exercised")
        }

        async fn search_ingredients(
            &self,
            _query: &CollectionQuery,
        ) -> DispatchResult<Listing<Ingredient>> {
            panic!("not exercised")
        }

        async fn create_recipe(&self, _recipe: &NewRecipe) -> DispatchResult<Recipe> {
            panic!("not exercised")
        }

        async fn create_ingredient(
            &self,
            _ingredient: &NewIngredient,
        ) -> DispatchResult<Ingredient> {
            panic!("not exercised")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stale_responses_never_overwrite_newer_results() {
        let catalogue = DelayedCatalogue::new([
            Duration::from_millis(1000),
            Duration::from_millis(10),
        ]);
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.input("first");
        tokio::time::sleep(Duration::from_millis(350)).await;
        orchestrator.input("second");
        settle().await;

        let snapshot = orchestrator.subscribe().borrow().clone();
        assert_eq!(snapshot.term, "second");
        assert_eq!(snapshot.items[0].title, "second");
        assert!(!snapshot.fetching);
    }

    #[tokio::test(start_paused = true)]
    async fn fetching_is_reported_while_a_request_is_in_flight() {
        let catalogue = DelayedCatalogue::new([Duration::from_millis(500)]);
        let orchestrator = SearchOrchestrator::new(Arc::new(catalogue));

        orchestrator.input("pasta");
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(orchestrator.subscribe().borrow().fetching);

        settle().await;
        assert!(!orchestrator.subscribe().borrow().fetching);
    }
}
