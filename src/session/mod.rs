//! Persisted session state.
//!
//! The browser original kept login state, profile fields and the current
//! course selection in localStorage; here the same keys live in a small JSON
//! file under the data directory. Loaded once at startup, written back on
//! every mutation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserProfile;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read session file: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write session file: {0}")]
    Write(#[source] io::Error),
    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The selection the user has drilled into so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub course: Option<String>,
    pub year: Option<String>,
    pub subject: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    logged_in: bool,
    profile: Option<UserProfile>,
    #[serde(default)]
    selection: Selection,
}

/// File-backed key-value session store.
pub struct SessionStore {
    path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    /// Load the session from `dir/session.json`. A missing file yields an
    /// empty, logged-out store.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(SESSION_FILE);
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => SessionData::default(),
            Err(err) => return Err(StoreError::Read(err)),
        };
        Ok(Self { path, data })
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text).map_err(StoreError::Write)
    }

    pub fn is_logged_in(&self) -> bool {
        self.data.logged_in
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.data.profile.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.data.selection
    }

    /// Record a successful login.
    pub fn login(&mut self, profile: UserProfile) -> Result<(), StoreError> {
        self.data.logged_in = true;
        self.data.profile = Some(profile);
        self.save()
    }

    /// Update the stored profile fields (settings screen save).
    pub fn update_profile(&mut self, name: String, phone: String) -> Result<(), StoreError> {
        if let Some(profile) = self.data.profile.as_mut() {
            profile.name = name;
            profile.phone = phone;
        }
        self.save()
    }

    pub fn select_course(&mut self, course: String) -> Result<(), StoreError> {
        self.data.selection = Selection {
            course: Some(course),
            ..Selection::default()
        };
        self.save()
    }

    pub fn select_year(&mut self, year: String) -> Result<(), StoreError> {
        self.data.selection.year = Some(year);
        self.data.selection.subject = None;
        self.data.selection.topic = None;
        self.save()
    }

    pub fn select_subject(&mut self, subject: String) -> Result<(), StoreError> {
        self.data.selection.subject = Some(subject);
        self.data.selection.topic = None;
        self.save()
    }

    pub fn select_topic(&mut self, topic: String) -> Result<(), StoreError> {
        self.data.selection.topic = Some(topic);
        self.save()
    }

    /// Drop the user and the whole selection, as the logout buttons do.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.data = SessionData::default();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("lerno-session-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = temp_dir("missing");
        let store = SessionStore::load(&dir).unwrap();
        assert!(!store.is_logged_in());
        assert!(store.profile().is_none());
        assert_eq!(store.selection(), &Selection::default());
    }

    #[test]
    fn test_roundtrip() {
        let dir = temp_dir("roundtrip");
        let mut store = SessionStore::load(&dir).unwrap();
        store.login(UserProfile::from_email("alice@edu.in")).unwrap();
        store.select_course("BCA".to_string()).unwrap();
        store.select_year("1st Year".to_string()).unwrap();
        store.select_subject("DBMS".to_string()).unwrap();
        store.select_topic("SQL".to_string()).unwrap();

        let reloaded = SessionStore::load(&dir).unwrap();
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.profile().unwrap().name, "alice");
        assert_eq!(reloaded.selection().topic.as_deref(), Some("SQL"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reselecting_course_resets_deeper_keys() {
        let dir = temp_dir("reset");
        let mut store = SessionStore::load(&dir).unwrap();
        store.select_course("BCA".to_string()).unwrap();
        store.select_year("1st Year".to_string()).unwrap();
        store.select_subject("DBMS".to_string()).unwrap();
        store.select_course("MCA".to_string()).unwrap();

        assert_eq!(store.selection().course.as_deref(), Some("MCA"));
        assert!(store.selection().year.is_none());
        assert!(store.selection().subject.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_logout_clears_everything() {
        let dir = temp_dir("logout");
        let mut store = SessionStore::load(&dir).unwrap();
        store.login(UserProfile::from_email("bob@edu.in")).unwrap();
        store.select_course("BTech".to_string()).unwrap();
        store.logout().unwrap();

        let reloaded = SessionStore::load(&dir).unwrap();
        assert!(!reloaded.is_logged_in());
        assert!(reloaded.profile().is_none());
        assert!(reloaded.selection().course.is_none());

        let _ = fs::remove_dir_all(&dir);
    }
}
