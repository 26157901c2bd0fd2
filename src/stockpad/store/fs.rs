use super::{parse_catalog, render_catalog, DataStore, LoadReport};
use crate::error::{Result, StockError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Catalog stored as a single delimited text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `file_name` inside `dir`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                StockError::Store(format!("Invalid catalog path: {}", self.path.display()))
            })?;
        let tmp_name = format!(".{}-{}.tmp", file_name, Uuid::new_v4());
        Ok(match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        })
    }
}

/// Temp file next to the catalog. Removed on drop unless it was renamed into place.
struct PendingWrite {
    path: PathBuf,
    persisted: bool,
}

impl PendingWrite {
    fn create(path: PathBuf, content: &str) -> Result<Self> {
        let pending = Self {
            path,
            persisted: false,
        };
        fs::write(&pending.path, content).map_err(StockError::Io)?;
        Ok(pending)
    }

    fn persist(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target).map_err(StockError::Io)?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for PendingWrite {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no catalog file yet");
            return Ok(LoadReport::default());
        }

        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        let report = parse_catalog(&content);
        tracing::debug!(
            path = %self.path.display(),
            loaded = report.products.len(),
            skipped = report.skipped.len(),
            "catalog loaded"
        );
        Ok(report)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        let content = render_catalog(products);

        // Atomic write: the target only ever holds the old or the complete new catalog
        PendingWrite::create(self.tmp_path()?, &content)?.persist(&self.path)?;

        tracing::info!(path = %self.path.display(), count = products.len(), "catalog saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Widget".into(), "Hardware".into(), 9.99, 100).unwrap(),
            Product::new(2, "Gadget".into(), "Electronics".into(), 19.95, 50).unwrap(),
        ]
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::in_dir(dir.path(), "products.csv");
        let report = store.load().unwrap();
        assert!(report.products.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn save_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), "products.csv");
        store.save(&sample()).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            on_disk,
            "id,name,category,price,quantity\n1,Widget,Hardware,9.99,100\n2,Gadget,Electronics,19.95,50\n"
        );
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), "products.csv");
        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        let report = store.load().unwrap();
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].name, "Widget");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::in_dir(&dir.path().join("nope"), "products.csv");
        assert!(matches!(store.save(&sample()), Err(StockError::Io(_))));
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn unpersisted_write_removes_its_temp_file() {
        let dir = tempdir().unwrap();
        let tmp = dir.path().join(".products.csv-partial.tmp");

        let pending = PendingWrite::create(tmp.clone(), "id,name,category,price,quantity\n").unwrap();
        assert!(tmp.exists());
        drop(pending);

        assert!(!tmp.exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory at the catalog path makes the rename fail
        let blocker = dir.path().join("products.csv");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        let mut store = FileStore::in_dir(dir.path(), "products.csv");
        assert!(matches!(store.save(&sample()), Err(StockError::Io(_))));
        assert_eq!(entries(dir.path()), vec!["products.csv".to_string()]);
    }
}
