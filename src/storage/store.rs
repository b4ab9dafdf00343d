//! Locked access to the live database with persist-on-write.

use std::sync::RwLock;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::Database;

use super::{Result, StorageBackend};

/// Owns the in-memory database and its persistence backend. Reads share
/// the lock; every mutation runs under the write lock and is followed by a
/// snapshot save before the lock is released, so a record write and its
/// ledger upkeep reach disk together.
pub struct Store {
    backend: Box<dyn StorageBackend>,
    database: RwLock<Database>,
}

impl Store {
    /// Opens the store, loading the existing snapshot or starting empty.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let database = if backend.is_initialized() {
            backend.load()?
        } else {
            Database::default()
        };
        Ok(Self {
            backend,
            database: RwLock::new(database),
        })
    }

    /// Runs a read-only closure against the current database.
    pub fn read<T>(&self, f: impl FnOnce(&Database) -> T) -> T {
        let guard = self.database.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    /// Applies a mutation and persists the resulting snapshot. A failed
    /// mutation leaves the snapshot untouched; a failed save surfaces as a
    /// storage error after the in-memory change has been applied.
    pub fn write<T>(&self, f: impl FnOnce(&mut Database) -> ServiceResult<T>) -> ServiceResult<T> {
        let mut guard = self.database.write().unwrap_or_else(|e| e.into_inner());
        let value = f(&mut guard)?;
        self.backend.save(&guard).map_err(ServiceError::Storage)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::UserService;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;

    #[test]
    fn writes_survive_a_reopen() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().to_path_buf();

        let storage = JsonStorage::new(root.clone()).expect("json storage");
        let store = Store::open(Box::new(storage)).expect("open store");
        store
            .write(|db| UserService::login(db, "money_wise"))
            .expect("login");

        let reopened = Store::open(Box::new(
            JsonStorage::new(root).expect("json storage"),
        ))
        .expect("reopen store");
        let found = reopened.read(|db| db.user_by_username("money_wise").cloned());
        assert!(found.is_some());
    }

    #[test]
    fn failed_mutations_do_not_persist() {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().to_path_buf()).expect("json storage");
        let store = Store::open(Box::new(storage)).expect("open store");

        let result = store.write(|db| UserService::login(db, "   "));
        assert!(result.is_err());
        assert_eq!(store.read(|db| db.users.len()), 0);
    }
}
