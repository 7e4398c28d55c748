//! Navigation targets computed by the view orchestrators.
//!
//! The orchestrators never perform navigation; they hand one of these
//! targets back so the embedding shell decides how to route. Login targets
//! carry the interrupted location as a `returnTo` parameter, preserving the
//! intent of the visit rather than any draft data.

use std::fmt;

const LOGIN_PATH: &str = "/login";

/// Destination the caller should route to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The login form, remembering where the visitor was headed.
    Login {
        /// Path to resume after a successful login.
        return_to: String,
    },
    /// A recipe's detail view.
    RecipeDetail {
        /// Backend identifier of the recipe.
        id: i64,
    },
}

impl NavigationTarget {
    /// Login target for an authentication failure on `current_path`.
    ///
    /// Returns `None` when the visitor is already on the login screen, so
    /// callers do not bounce the view into itself.
    #[must_use]
    pub fn login_redirect(current_path: &str) -> Option<Self> {
        if current_path.starts_with(LOGIN_PATH) {
            return None;
        }
        Some(Self::Login {
            return_to: current_path.to_owned(),
        })
    }

    /// Render the target as an absolute path with an encoded query.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Login { return_to } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("returnTo", return_to)
                    .finish();
                format!("{LOGIN_PATH}?{query}")
            }
            Self::RecipeDetail { id } => format!("/recipe/{id}"),
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
