//! Logged-in user persisted to a JSON file
//!
//! The file holds a single object keyed by `agenda_user`, e.g.
//! `{"agenda_user": {"username": "admin", "role": "admin"}}`.

use std::path::{Path, PathBuf};

use agenda_core::SessionStore;
use agenda_domain::constants::SESSION_KEY;
use agenda_domain::{Result, SessionUser};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, warn};

use crate::errors::InfraError;

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<SessionUser>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        let user = serde_json::from_str::<Map<String, Value>>(&contents)
            .ok()
            .and_then(|mut stored| stored.remove(SESSION_KEY))
            .and_then(|value| serde_json::from_value::<SessionUser>(value).ok());

        if user.is_none() {
            warn!(path = %self.path.display(), "ignoring unreadable session file");
        }
        Ok(user)
    }

    async fn save(&self, user: &SessionUser) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(InfraError::from)?;
        }

        let mut stored = Map::new();
        let value = serde_json::to_value(user).map_err(InfraError::from)?;
        stored.insert(SESSION_KEY.to_string(), value);
        let contents = serde_json::to_string_pretty(&stored).map_err(InfraError::from)?;

        fs::write(&self.path, contents).await.map_err(InfraError::from)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use agenda_domain::UserRole;
    use tempfile::TempDir;

    use super::*;

    fn barber() -> SessionUser {
        SessionUser { username: "carlos".into(), role: UserRole::Barber }
    }

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/agenda_user.json"));

        assert_eq!(store.load().await.unwrap(), None);
        store.save(&barber()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(barber()));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["agenda_user"]["role"], "barber");

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("agenda_user.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.load().await.unwrap(), None);
    }
}
