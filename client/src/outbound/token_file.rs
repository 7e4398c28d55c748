//! File-backed token store.
//!
//! Persists the bearer token under a settings directory so sessions survive
//! process restarts. Reads and writes are best-effort: storage failures are
//! logged and treated as an absent token rather than surfaced, because the
//! client can always re-authenticate.

use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::TokenStore;
use crate::domain::token::Token;

const TOKEN_FILENAME: &str = "auth_token";

/// Token store writing to one file inside a capability-scoped directory.
#[derive(Debug)]
pub struct FileTokenStore {
    directory: Dir,
}

impl FileTokenStore {
    /// Open a store rooted at `path`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let directory = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { directory })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<Token> {
        let raw = match self.directory.read_to_string(TOKEN_FILENAME) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return None,
            Err(error) => {
                warn!(error = %error, "token file could not be read");
                return None;
            }
        };
        Token::try_new(&raw).ok()
    }

    fn set(&self, token: &Token) {
        let staging_name = format!(".tmp-token-{}", Uuid::new_v4().simple());
        let result = self
            .directory
            .write(&staging_name, token.as_str().as_bytes())
            .and_then(|()| {
                replace_file(
                    &self.directory,
                    Path::new(&staging_name),
                    Path::new(TOKEN_FILENAME),
                )
            });
        if let Err(error) = result {
            warn!(error = %error, "token could not be persisted");
            let _cleanup_result = self.directory.remove_file(&staging_name);
        }
    }

    fn clear(&self) {
        match self.directory.remove_file(TOKEN_FILENAME) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => warn!(error = %error, "token file could not be removed"),
        }
    }
}

fn replace_file(directory: &Dir, from: &Path, to: &Path) -> io::Result<()> {
    match directory.remove_file(to) {
        Ok(()) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return Err(error),
    }
    directory.rename(from, directory, to)
}
