use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JsonConnection manages the data directory and the collection files
/// inside it. Repositories share one connection behind an `Arc`.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at a base directory, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory,
    /// `~/Documents/Clinic Desk`. The `CLINIC_DESK_DATA` environment
    /// variable overrides the location.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("CLINIC_DESK_DATA") {
            info!("Using data directory from CLINIC_DESK_DATA: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir).join("Documents").join("Clinic Desk");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// The data directory this connection is rooted at.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of a named collection's JSON file.
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", collection))
    }

    /// Read a whole collection. A missing file is an empty collection.
    pub fn read_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            debug!("Collection file {} does not exist yet", path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let documents = serde_json::from_str(&contents)?;
        Ok(documents)
    }

    /// Replace a whole collection. The new contents are written to a temp
    /// file and renamed into place so a failed write never corrupts the
    /// collection.
    pub fn write_collection<T: Serialize>(&self, collection: &str, documents: &[T]) -> Result<()> {
        let path = self.collection_path(collection);
        let contents = serde_json::to_string_pretty(documents)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)?;

        debug!(
            "Wrote {} documents to collection {}",
            documents.len(),
            collection
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        id: String,
        value: i32,
    }

    #[test]
    fn test_missing_collection_reads_empty() {
        let dir = tempdir().unwrap();
        let connection = JsonConnection::new(dir.path()).unwrap();
        let docs: Vec<Doc> = connection.read_collection("nothing_here").unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let connection = JsonConnection::new(dir.path()).unwrap();

        let docs = vec![
            Doc { id: "a".to_string(), value: 1 },
            Doc { id: "b".to_string(), value: 2 },
        ];
        connection.write_collection("things", &docs).unwrap();

        let loaded: Vec<Doc> = connection.read_collection("things").unwrap();
        assert_eq!(loaded, docs);

        // No stray temp file left behind
        assert!(!connection.collection_path("things").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_whole_collection() {
        let dir = tempdir().unwrap();
        let connection = JsonConnection::new(dir.path()).unwrap();

        connection
            .write_collection("things", &[Doc { id: "a".to_string(), value: 1 }])
            .unwrap();
        connection
            .write_collection("things", &[Doc { id: "b".to_string(), value: 2 }])
            .unwrap();

        let loaded: Vec<Doc> = connection.read_collection("things").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "b");
    }

    #[test]
    fn test_creates_missing_base_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("clinic");
        let connection = JsonConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }
}
