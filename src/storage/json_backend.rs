use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{core::utils::ensure_dir, domain::Database};

use super::{Result, StorageBackend};

const DATA_FILE: &str = "records.json";
const TMP_SUFFIX: &str = "tmp";

/// Persists the whole record snapshot as one JSON document under the data
/// directory. Writes go to a temporary sibling first and are renamed into
/// place, so readers never observe a torn file.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    data_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        ensure_dir(&root)?;
        let data_file = root.join(DATA_FILE);
        Ok(Self { root, data_file })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> &Path {
        &self.data_file
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, database: &Database) -> Result<()> {
        let json = serde_json::to_string_pretty(database)?;
        let tmp = tmp_path(&self.data_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.data_file)?;
        Ok(())
    }

    fn load(&self) -> Result<Database> {
        let data = fs::read_to_string(&self.data_file)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn is_initialized(&self) -> bool {
        self.data_file.exists()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().to_path_buf()).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut database = Database::default();
        database.add_user(User::new("sarah_saver"));

        storage.save(&database).expect("save snapshot");
        assert!(storage.is_initialized());

        let loaded = storage.load().expect("load snapshot");
        assert_eq!(loaded.users.len(), 1);
        assert_eq!(loaded.users[0].username, "sarah_saver");
    }

    #[test]
    fn fresh_directory_reports_uninitialized() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(!storage.is_initialized());
    }
}
