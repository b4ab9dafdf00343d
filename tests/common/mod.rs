use std::sync::Mutex;

use budgetd::storage::{JsonStorage, Store};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store backed by a unique directory for each test.
pub fn setup_store() -> Store {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(base).expect("create json storage backend");
    Store::open(Box::new(storage)).expect("open store")
}

/// Same as [`setup_store`] but hands back the base directory so the test
/// can reopen the store later.
pub fn setup_store_with_dir() -> (Store, std::path::PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(base.clone()).expect("create json storage backend");
    (Store::open(Box::new(storage)).expect("open store"), base)
}
