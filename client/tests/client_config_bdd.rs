//! Behaviour tests for client configuration resolution.
//!
//! These scenarios validate that release builds demand explicit origins
//! while debug builds fall back to the local development servers.

use std::cell::RefCell;
use std::collections::HashMap;

use mockable::MockEnv;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use url::Url;

use client::config::{
    BACKEND_URL_ENV, BuildMode, ClientConfigError, ClientSettings, FRONTEND_URL_ENV,
    client_settings_from_env,
};

struct ClientConfigWorld {
    vars: RefCell<HashMap<String, String>>,
    mode: RefCell<BuildMode>,
    outcome: RefCell<Option<Result<ClientSettings, ClientConfigError>>>,
}

impl ClientConfigWorld {
    fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
            mode: RefCell::new(BuildMode::Release),
            outcome: RefCell::new(None),
        }
    }

    fn set_mode(&self, mode: BuildMode) {
        *self.mode.borrow_mut() = mode;
    }

    fn set_env_var(&self, name: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn evaluate(&self) {
        let env = mock_env(self.vars.borrow().clone());
        let mode = *self.mode.borrow();
        let result = client_settings_from_env(&env, mode);
        *self.outcome.borrow_mut() = Some(result);
    }

    fn with_settings<F>(&self, f: F)
    where
        F: FnOnce(&ClientSettings),
    {
        let outcome = self.outcome.borrow();
        let settings = outcome
            .as_ref()
            .expect("evaluation result")
            .as_ref()
            .expect("expected settings to succeed");
        f(settings);
    }

    fn with_error<F>(&self, f: F)
    where
        F: FnOnce(&ClientConfigError),
    {
        let outcome = self.outcome.borrow();
        let error = match outcome.as_ref().expect("evaluation result") {
            Ok(_) => panic!("expected settings to fail"),
            Err(error) => error,
        };
        f(error);
    }
}

fn mock_env(vars: HashMap<String, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn parsed(value: &str) -> Url {
    Url::parse(value).expect("expected origin should parse")
}

#[fixture]
fn world() -> ClientConfigWorld {
    ClientConfigWorld::new()
}

#[given("a release build configuration")]
fn a_release_build_configuration(world: &ClientConfigWorld) {
    world.set_mode(BuildMode::Release);
}

#[given("a debug build configuration")]
fn a_debug_build_configuration(world: &ClientConfigWorld) {
    world.set_mode(BuildMode::Debug);
}

#[given("QUICKLY_BACKEND_URL is set to {value}")]
fn backend_url_is_set(world: &ClientConfigWorld, value: String) {
    world.set_env_var(BACKEND_URL_ENV, &value);
}

#[given("QUICKLY_FRONTEND_URL is set to {value}")]
fn frontend_url_is_set(world: &ClientConfigWorld, value: String) {
    world.set_env_var(FRONTEND_URL_ENV, &value);
}

#[when("the client configuration is loaded")]
fn the_client_configuration_is_loaded(world: &ClientConfigWorld) {
    world.evaluate();
}

#[then("the configuration load succeeds")]
fn the_configuration_load_succeeds(world: &ClientConfigWorld) {
    world.with_settings(|_| {});
}

#[then("the backend origin is {value}")]
fn the_backend_origin_is(world: &ClientConfigWorld, value: String) {
    world.with_settings(|settings| {
        assert_eq!(settings.backend_url, parsed(&value));
    });
}

#[then("the frontend origin is {value}")]
fn the_frontend_origin_is(world: &ClientConfigWorld, value: String) {
    world.with_settings(|settings| {
        assert_eq!(settings.frontend_url, parsed(&value));
    });
}

#[then("the configuration load fails due to a missing backend origin")]
fn configuration_fails_missing_backend_origin(world: &ClientConfigWorld) {
    world.with_error(|error| {
        assert!(matches!(
            error,
            ClientConfigError::MissingEnv {
                name: BACKEND_URL_ENV
            }
        ));
    });
}

#[then("the configuration load fails because the backend origin is invalid")]
fn configuration_fails_invalid_backend_origin(world: &ClientConfigWorld) {
    world.with_error(|error| {
        assert!(matches!(
            error,
            ClientConfigError::InvalidEnv {
                name: BACKEND_URL_ENV,
                ..
            }
        ));
    });
}

#[scenario(
    path = "tests/features/client_config.feature",
    name = "Release builds require the backend origin"
)]
fn release_builds_require_the_backend_origin(world: ClientConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_config.feature",
    name = "Release builds accept explicit origins"
)]
fn release_builds_accept_explicit_origins(world: ClientConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_config.feature",
    name = "Release builds reject malformed origins"
)]
fn release_builds_reject_malformed_origins(world: ClientConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_config.feature",
    name = "Debug builds fall back to the local servers"
)]
fn debug_builds_fall_back_to_the_local_servers(world: ClientConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_config.feature",
    name = "Debug builds replace malformed origins with the defaults"
)]
fn debug_builds_replace_malformed_origins(world: ClientConfigWorld) {
    drop(world);
}
