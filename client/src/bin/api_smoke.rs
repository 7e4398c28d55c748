//! Smoke-test binary exercising the client against a live backend.
//!
//! Optionally logs in, probes the session endpoint, and fetches one page of
//! the recipe listing. Output is one `key=value` line per fact, so the
//! binary doubles as a deployment check in scripts.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use client::SessionProbe;
use client::config::{BuildMode, client_settings_from_process_env};
use client::domain::ports::{AuthSource, CatalogueSource, MemoryTokenStore, TokenStore};
use client::domain::{CollectionQuery, LoginCredentials};
use client::outbound::{FileTokenStore, HttpAuthSource, HttpCatalogueSource, HttpDispatcher};

/// `api-smoke` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "api-smoke",
    about = "Probe the session endpoint and fetch one page of the recipe listing",
    version
)]
struct CliArgs {
    /// Directory holding the persisted token. Uses an in-memory store when
    /// omitted, so nothing outlives the run.
    #[arg(long = "token-dir", value_name = "path")]
    token_dir: Option<PathBuf>,
    /// Log in with this identifier before probing.
    #[arg(long, value_name = "email-or-username", requires = "password")]
    identifier: Option<String>,
    /// Password for `--identifier`.
    #[arg(long, value_name = "password", requires = "identifier")]
    password: Option<String>,
    /// Search term for the listing request; empty browses instead.
    #[arg(long, value_name = "term", default_value = "")]
    search: String,
    /// Page of the listing to fetch.
    #[arg(long, value_name = "page", default_value_t = 1)]
    page: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let args = CliArgs::try_parse()?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build the smoke runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let settings = client_settings_from_process_env(BuildMode::from_debug_assertions())
        .wrap_err("failed to resolve client settings")?;
    println!("backend={}", settings.backend_url);

    let store: Arc<dyn TokenStore> = match &args.token_dir {
        Some(directory) => Arc::new(FileTokenStore::open(directory).wrap_err_with(|| {
            format!("failed to open token directory '{}'", directory.display())
        })?),
        None => Arc::new(MemoryTokenStore::new()),
    };

    let dispatcher = HttpDispatcher::new(settings.backend_url.clone(), Arc::clone(&store))
        .wrap_err("failed to build the HTTP dispatcher")?;
    let auth = HttpAuthSource::new(dispatcher.clone(), Arc::clone(&store));
    let catalogue = HttpCatalogueSource::new(dispatcher);

    if let (Some(identifier), Some(password)) = (&args.identifier, &args.password) {
        let credentials = LoginCredentials::try_from_parts(identifier, password)
            .map_err(|error| eyre!("invalid credentials: {error}"))?;
        let session = auth.login(&credentials).await.wrap_err("login failed")?;
        println!("login=ok token_fingerprint={}", session.token_fingerprint);
    }

    let probe = SessionProbe::new(Arc::new(auth));
    let status = probe.probe().await;
    println!("authenticated={}", status.authenticated);
    if let Some(user) = &status.user {
        println!("user_id={} email={}", user.id, user.email);
    }

    let query = build_query(&args.search, args.page)?;
    let listing = if args.search.trim().is_empty() {
        catalogue.browse_recipes(&query).await
    } else {
        catalogue.search_recipes(&query).await
    }
    .wrap_err("listing request failed")?;

    println!("items={}", listing.items.len());
    match listing.meta {
        Some(meta) => println!(
            "page={} total_pages={} total={}",
            meta.page, meta.total_pages, meta.total
        ),
        None => println!("pagination=legacy"),
    }
    for recipe in &listing.items {
        println!("recipe id={} title={}", recipe.id, recipe.title);
    }

    Ok(())
}

fn build_query(search: &str, page: u64) -> Result<CollectionQuery> {
    if page == 0 {
        return Err(eyre!("--page is one-based; use 1 for the first page"));
    }
    Ok(CollectionQuery::default()
        .with_page(page)
        .with_search(search))
}
