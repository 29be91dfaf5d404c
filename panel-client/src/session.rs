//! Session handling
//!
//! `Session` holds the bearer token in memory for the lifetime of the
//! client. `SessionStore` persists it as a JSON file under a fixed name so
//! a later run can resume without logging in again.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed file name of the persisted session token
pub const SESSION_FILE_NAME: &str = "session.json";

/// In-memory session state.
///
/// Lifecycle: set on login, read by every authorized call, cleared on
/// logout or a 401 response.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Creates a new anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bearer token after successful login.
    pub fn set_login(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Clears the session on logout or authentication failure.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Returns the bearer token if available.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether the session holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Persisted session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
}

/// Durable session storage backed by a JSON file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a session store under the given directory, using the fixed
    /// file name.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join(SESSION_FILE_NAME);
        Self { path }
    }

    /// Creates a session store at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensures the parent directory exists.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Saves the session token.
    pub fn save(&self, session: &StoredSession) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Loads the session token, if any.
    ///
    /// An unreadable or malformed file is treated as no session.
    pub fn load(&self) -> Option<StoredSession> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Checks whether a stored session exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Deletes the stored session.
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
