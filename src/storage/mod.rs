// Local storage on sled; values are bincode-encoded models

use anyhow::{Context, Result};
use sled::Db;
use std::path::PathBuf;

use crate::models::{WeightEntry, WorkoutSession};

const SESSIONS_TREE: &str = "sessions";
const WEIGHT_TREE: &str = "weight_entries";

/// Storage manager for the local embedded database
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Get database directory path (~/.liftlog/)
    pub fn db_path() -> Result<PathBuf> {
        // Check for test environment variable first
        if let Ok(test_path) = std::env::var("LIFTLOG_DB_PATH") {
            return Ok(PathBuf::from(test_path));
        }

        crate::config::Config::config_dir().map(|dir| dir.join("db"))
    }

    /// Initialize storage with the sled database
    pub fn init() -> Result<Self> {
        let db_path = Self::db_path()?;

        tracing::info!("Opening sled database at {:?}", db_path);

        let db = sled::open(db_path).context("Failed to open sled database")?;

        Ok(Self { db })
    }

    /// Initialize storage with a custom path (for testing)
    pub fn init_with_path(path: PathBuf) -> Result<Self> {
        let db = sled::open(path).context("Failed to open sled database")?;

        Ok(Self { db })
    }

    // Session operations

    /// Save a workout session
    pub fn save_session(&self, session: &WorkoutSession) -> Result<()> {
        let tree = self
            .db
            .open_tree(SESSIONS_TREE)
            .context("Failed to open sessions tree")?;

        let key = session.id.as_bytes();
        let value = bincode::serialize(session).context("Failed to serialize session")?;

        tree.insert(key, value).context("Failed to insert session")?;

        self.db.flush().context("Failed to flush database")?;

        tracing::debug!("Saved session {}", session.id);
        Ok(())
    }

    /// Get a session by its full ID
    pub fn get_session(&self, id: &str) -> Result<Option<WorkoutSession>> {
        let tree = self
            .db
            .open_tree(SESSIONS_TREE)
            .context("Failed to open sessions tree")?;

        if let Some(value) = tree.get(id.as_bytes()).context("Failed to get session")? {
            let session: WorkoutSession =
                bincode::deserialize(&value).context("Failed to deserialize session")?;
            Ok(Some(session))
        } else {
            Ok(None)
        }
    }

    /// Resolve a session by full ID or unique ID prefix
    pub fn find_session(&self, id_or_prefix: &str) -> Result<Option<WorkoutSession>> {
        if let Some(session) = self.get_session(id_or_prefix)? {
            return Ok(Some(session));
        }

        let matches: Vec<WorkoutSession> = self
            .list_sessions()?
            .into_iter()
            .filter(|s| s.id.starts_with(id_or_prefix))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(anyhow::anyhow!(
                "Session ID prefix '{}' is ambiguous ({} matches)",
                id_or_prefix,
                n
            )),
        }
    }

    /// List all sessions, most recent first
    pub fn list_sessions(&self) -> Result<Vec<WorkoutSession>> {
        let tree = self
            .db
            .open_tree(SESSIONS_TREE)
            .context("Failed to open sessions tree")?;

        let mut sessions = Vec::new();

        for item in tree.iter() {
            let (_key, value) = item.context("Failed to iterate sessions")?;
            let session: WorkoutSession =
                bincode::deserialize(&value).context("Failed to deserialize session")?;
            sessions.push(session);
        }

        sessions.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(sessions)
    }

    /// Delete a session by its full ID
    pub fn delete_session(&self, id: &str) -> Result<bool> {
        let tree = self
            .db
            .open_tree(SESSIONS_TREE)
            .context("Failed to open sessions tree")?;

        let deleted = tree
            .remove(id.as_bytes())
            .context("Failed to delete session")?
            .is_some();

        if deleted {
            self.db.flush().context("Failed to flush database")?;
            tracing::debug!("Deleted session {}", id);
        }

        Ok(deleted)
    }

    // Weight entry operations

    /// Save a weight entry
    pub fn save_weight_entry(&self, entry: &WeightEntry) -> Result<()> {
        let tree = self
            .db
            .open_tree(WEIGHT_TREE)
            .context("Failed to open weight tree")?;

        let key = entry.id.as_bytes();
        let value = bincode::serialize(entry).context("Failed to serialize weight entry")?;

        tree.insert(key, value)
            .context("Failed to insert weight entry")?;

        self.db.flush().context("Failed to flush database")?;

        tracing::debug!("Saved weight entry {}", entry.id);
        Ok(())
    }

    /// List all weight entries, oldest first
    pub fn list_weight_entries(&self) -> Result<Vec<WeightEntry>> {
        let tree = self
            .db
            .open_tree(WEIGHT_TREE)
            .context("Failed to open weight tree")?;

        let mut entries = Vec::new();

        for item in tree.iter() {
            let (_key, value) = item.context("Failed to iterate weight entries")?;
            let entry: WeightEntry =
                bincode::deserialize(&value).context("Failed to deserialize weight entry")?;
            entries.push(entry);
        }

        entries.sort_by(|a, b| a.date.cmp(&b.date));

        Ok(entries)
    }

    /// Delete a weight entry by full ID or unique ID prefix
    pub fn delete_weight_entry(&self, id_or_prefix: &str) -> Result<bool> {
        let tree = self
            .db
            .open_tree(WEIGHT_TREE)
            .context("Failed to open weight tree")?;

        let matches: Vec<String> = self
            .list_weight_entries()?
            .into_iter()
            .map(|e| e.id)
            .filter(|id| id == id_or_prefix || id.starts_with(id_or_prefix))
            .collect();

        let id = match matches.len() {
            0 => return Ok(false),
            1 => matches.into_iter().next().unwrap(),
            n => {
                return Err(anyhow::anyhow!(
                    "Weight entry ID prefix '{}' is ambiguous ({} matches)",
                    id_or_prefix,
                    n
                ))
            }
        };

        let deleted = tree
            .remove(id.as_bytes())
            .context("Failed to delete weight entry")?
            .is_some();

        if deleted {
            self.db.flush().context("Failed to flush database")?;
            tracing::debug!("Deleted weight entry {}", id);
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseLog, LoggedSet, WeightUnit};
    use chrono::Utc;
    use tempfile::tempdir;

    fn create_test_storage() -> Result<Storage> {
        let dir = tempdir()?;
        Storage::init_with_path(dir.path().to_path_buf())
    }

    fn sample_session() -> WorkoutSession {
        WorkoutSession::new(
            2,
            Utc::now(),
            55,
            Some("bench day".to_string()),
            vec![ExerciseLog::new(
                "Barbell Bench Press".to_string(),
                vec![LoggedSet::new(1, 8, 185.0, Utc::now())],
            )],
        )
    }

    #[test]
    fn test_save_and_get_session() -> Result<()> {
        let storage = create_test_storage()?;

        let session = sample_session();
        storage.save_session(&session)?;

        let retrieved = storage.get_session(&session.id)?;
        assert!(retrieved.is_some());

        let retrieved = retrieved.unwrap();
        assert_eq!(retrieved.id, session.id);
        assert_eq!(retrieved.day_number, 2);
        assert_eq!(retrieved.duration_minutes, 55);
        assert_eq!(retrieved.logs.len(), 1);

        Ok(())
    }

    #[test]
    fn test_missing_session_is_none() -> Result<()> {
        let storage = create_test_storage()?;
        assert!(storage.get_session("no-such-id")?.is_none());
        assert!(!storage.delete_session("no-such-id")?);
        Ok(())
    }

    #[test]
    fn test_list_sessions_sorted_desc() -> Result<()> {
        let storage = create_test_storage()?;

        let mut old = sample_session();
        old.date = Utc::now() - chrono::Duration::days(3);
        let recent = sample_session();

        storage.save_session(&old)?;
        storage.save_session(&recent)?;

        let sessions = storage.list_sessions()?;
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, recent.id);

        Ok(())
    }

    #[test]
    fn test_find_session_by_prefix() -> Result<()> {
        let storage = create_test_storage()?;

        let session = sample_session();
        storage.save_session(&session)?;

        let found = storage.find_session(&session.id[..8])?;
        assert_eq!(found.unwrap().id, session.id);
        assert!(storage.find_session("zzzzzzzz")?.is_none());

        Ok(())
    }

    #[test]
    fn test_delete_session() -> Result<()> {
        let storage = create_test_storage()?;

        let session = sample_session();
        storage.save_session(&session)?;

        assert!(storage.delete_session(&session.id)?);
        assert!(storage.get_session(&session.id)?.is_none());

        Ok(())
    }

    #[test]
    fn test_weight_entries_round_trip() -> Result<()> {
        let storage = create_test_storage()?;

        let older = WeightEntry::new(186.0, WeightUnit::Lbs, Utc::now() - chrono::Duration::days(2));
        let newer = WeightEntry::new(185.0, WeightUnit::Lbs, Utc::now());

        storage.save_weight_entry(&newer)?;
        storage.save_weight_entry(&older)?;

        let entries = storage.list_weight_entries()?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, older.id);

        assert!(storage.delete_weight_entry(&newer.id[..8])?);
        assert_eq!(storage.list_weight_entries()?.len(), 1);
        assert!(!storage.delete_weight_entry("zzzz")?);

        Ok(())
    }
}
