use super::{DataSource, Dataset};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Datasets read from a JSON document on disk.
///
/// The file is re-read on every [`DataSource::load`], so a reload picks up edits.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn load(&self) -> Result<Dataset> {
        tracing::debug!(path = %self.path.display(), "reading dataset file");
        let content = fs::read_to_string(&self.path)?;
        Dataset::from_json(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn loads_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"users": [], "categories": [], "products": [{"id": 1, "name": "Milk", "categoryId": 1}]}"#,
        )
        .unwrap();

        let dataset = FileSource::new(&path).load().unwrap();
        assert_eq!(dataset.products.len(), 1);
        assert_eq!(dataset.products[0].name, "Milk");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.load(), Err(CatalogError::Io(_))));
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let source = FileSource::new(&path);
        assert!(matches!(source.load(), Err(CatalogError::Serialization(_))));
    }

    #[test]
    fn picks_up_edits_between_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"products": []}"#).unwrap();
        let source = FileSource::new(&path);
        assert!(source.load().unwrap().products.is_empty());

        fs::write(&path, r#"{"products": [{"id": 2, "name": "Bread", "categoryId": 1}]}"#).unwrap();
        assert_eq!(source.load().unwrap().products.len(), 1);
    }
}
