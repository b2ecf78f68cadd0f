// File-based item store
//
// One file per item: `<base_dir>/<id>.txt`, content is the payload verbatim.
// There is no locking and no atomic rename; concurrent writers against the
// same directory interleave however the OS lets them.

use super::traits::{is_valid_id, FileSystem, Storage};
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Suffix appended to every item id to form its file name
pub const ITEM_SUFFIX: &str = "txt";

/// Filesystem-backed implementation of [`Storage`]
///
/// Usage:
///     let fs = Arc::new(RealFileSystem);
///     let storage = FileStorage::new(fs, FileStorage::default_base_dir())?;
///     storage.add("note1", "My first note")?;
pub struct FileStorage {
    /// Filesystem abstraction for testing
    fs: Arc<dyn FileSystem>,

    /// Directory holding one file per item
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `base_dir`
    ///
    /// The directory (and any missing parents) is created here, not on first
    /// write.
    ///
    /// # Errors
    /// - `Io` if the directory cannot be created
    pub fn new(fs: Arc<dyn FileSystem>, base_dir: PathBuf) -> Result<Self> {
        fs.create_dir_all(&base_dir)?;
        tracing::debug!(base_dir = %base_dir.display(), "filesystem storage ready");
        Ok(Self { fs, base_dir })
    }

    /// `<user config dir>/typ-tmpl/items`, falling back to `./typ-tmpl/items`
    pub fn default_base_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typ-tmpl")
            .join("items")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file for `id`; `None` if the id cannot name an item
    fn item_path(&self, id: &str) -> Option<PathBuf> {
        is_valid_id(id).then(|| self.base_dir.join(format!("{}.{}", id, ITEM_SUFFIX)))
    }
}

impl Storage for FileStorage {
    fn add(&self, id: &str, content: &str) -> Result<()> {
        let path = self
            .item_path(id)
            .ok_or_else(|| AppError::InvalidId(id.to_string()))?;

        if self.fs.is_file(&path) {
            return Err(AppError::AlreadyExists(id.to_string()));
        }

        self.fs.write(&path, content)?;
        tracing::debug!(id, path = %path.display(), "item written");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self
            .fs
            .read_dir(&self.base_dir)?
            .iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(ITEM_SUFFIX))
            .filter(|p| self.fs.is_file(p))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
            .filter(|stem| is_valid_id(stem))
            .map(str::to_string)
            .collect();

        ids.sort();
        Ok(ids)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = match self.item_path(id) {
            Some(path) if self.fs.is_file(&path) => path,
            _ => return Err(AppError::NotFound(id.to_string())),
        };

        self.fs.remove_file(&path)?;
        tracing::debug!(id, "item removed");
        Ok(())
    }

    fn exists(&self, id: &str) -> bool {
        self.item_path(id).is_some_and(|path| self.fs.is_file(&path))
    }

    fn get(&self, id: &str) -> Result<Option<String>> {
        match self.item_path(id) {
            Some(path) if self.fs.is_file(&path) => Ok(Some(self.fs.read_to_string(&path)?)),
            _ => Ok(None),
        }
    }

    fn backend(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mocks::test_helpers::*;
    use crate::services::RealFileSystem;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            FileStorage::new(Arc::new(RealFileSystem), temp_dir.path().to_path_buf()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_creates_file() {
        let (_temp_dir, storage) = temp_storage();

        storage.add("test-item", "Test content").unwrap();

        let path = storage.base_dir().join("test-item.txt");
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Test content");
    }

    #[test]
    fn test_add_writes_payload_verbatim() {
        let (_temp_dir, storage) = temp_storage();
        let payload = "line one\n  line two\r\n\tünïcödé ✓\n";

        storage.add("raw", payload).unwrap();

        let on_disk = std::fs::read(storage.base_dir().join("raw.txt")).unwrap();
        assert_eq!(on_disk, payload.as_bytes());
    }

    #[test]
    fn test_add_existing_fails_and_keeps_content() {
        let (_temp_dir, storage) = temp_storage();
        storage.add("dup", "first").unwrap();

        let result = storage.add("dup", "second");

        match result {
            Err(AppError::AlreadyExists(id)) => assert_eq!(id, "dup"),
            _ => panic!("Expected AlreadyExists"),
        }
        assert_eq!(storage.get("dup").unwrap(), Some("first".to_string()));
    }

    #[test]
    fn test_add_rejects_path_like_ids() {
        let (_temp_dir, storage) = temp_storage();

        for id in ["", "..", "../escape", "a/b"] {
            match storage.add(id, "x") {
                Err(AppError::InvalidId(got)) => assert_eq!(got, id),
                other => panic!("Expected InvalidId for {:?}, got {:?}", id, other),
            }
        }
        assert_eq!(storage.list().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_list_is_sorted_and_filters_suffix() {
        let (_temp_dir, storage) = temp_storage();
        storage.add("b", "2").unwrap();
        storage.add("a", "1").unwrap();
        storage.add("c", "3").unwrap();
        std::fs::write(storage.base_dir().join("notes.md"), "ignored").unwrap();

        assert_eq!(storage.list().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_directories_with_item_suffix_are_not_items() {
        let (_temp_dir, storage) = temp_storage();
        std::fs::create_dir(storage.base_dir().join("folder.txt")).unwrap();
        storage.add("real", "content").unwrap();

        assert_eq!(storage.list().unwrap(), vec!["real"]);
        assert!(!storage.exists("folder"));
        assert_eq!(storage.get("folder").unwrap(), None);
        assert!(matches!(storage.delete("folder"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_list_empty() {
        let (_temp_dir, storage) = temp_storage();

        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes_file() {
        let (_temp_dir, storage) = temp_storage();
        storage.add("to-delete", "Content").unwrap();
        assert!(storage.exists("to-delete"));

        storage.delete("to-delete").unwrap();

        assert!(!storage.exists("to-delete"));
        assert_eq!(storage.get("to-delete").unwrap(), None);
    }

    #[test]
    fn test_delete_nonexistent_is_not_found() {
        let (_temp_dir, storage) = temp_storage();

        match storage.delete("nonexistent") {
            Err(AppError::NotFound(id)) => assert_eq!(id, "nonexistent"),
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_get_nonexistent_returns_none() {
        let (_temp_dir, storage) = temp_storage();

        assert_eq!(storage.get("nonexistent").unwrap(), None);
        assert_eq!(storage.get("../outside").unwrap(), None);
    }

    #[test]
    fn test_new_creates_nested_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("items");

        let storage = FileStorage::new(Arc::new(RealFileSystem), nested.clone()).unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.base_dir(), nested.as_path());
    }

    #[test]
    fn test_default_base_dir_ends_with_app_items() {
        let dir = FileStorage::default_base_dir();

        assert!(dir.ends_with("typ-tmpl/items"));
    }

    #[test]
    fn test_new_propagates_create_dir_failure() {
        let mut mock_fs = MockFileSystem::new();
        mock_fs
            .expect_create_dir_all()
            .returning(|_| Err(permission_denied()));

        let result = FileStorage::new(Arc::new(mock_fs), PathBuf::from("/locked"));

        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_add_write_failure_is_io_error() {
        let mut mock_fs = create_mock_filesystem();
        mock_fs
            .expect_write()
            .returning(|_, _| Err(permission_denied()));

        let storage = FileStorage::new(Arc::new(mock_fs), PathBuf::from("items")).unwrap();

        match storage.add("note1", "content") {
            Err(AppError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_add_checks_exact_item_path() {
        let mut mock_fs = MockFileSystem::new();
        mock_fs.expect_create_dir_all().returning(|_| Ok(()));
        mock_fs
            .expect_is_file()
            .withf(|p| p == Path::new("items/note1.txt"))
            .times(1)
            .returning(|_| false);
        mock_fs
            .expect_write()
            .withf(|p, c| p == Path::new("items/note1.txt") && c == "hello")
            .times(1)
            .returning(|_, _| Ok(()));

        let storage = FileStorage::new(Arc::new(mock_fs), PathBuf::from("items")).unwrap();

        storage.add("note1", "hello").unwrap();
    }

    #[test]
    fn test_list_read_dir_failure_is_io_error() {
        let mut mock_fs = create_mock_filesystem();
        mock_fs
            .expect_read_dir()
            .returning(|_| Err(permission_denied()));

        let storage = FileStorage::new(Arc::new(mock_fs), PathBuf::from("items")).unwrap();

        assert!(matches!(storage.list(), Err(AppError::Io(_))));
    }
}
