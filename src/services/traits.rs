// Capability traits for the service layer
//
// Commands depend on these traits only. Concrete providers are chosen by the
// container (`AppBuilder`) and handed out as `Arc<dyn Trait>`.
//
// All traits are Send + Sync so a resolved capability can be shared through
// an Arc without caring which thread holds it.

use crate::error::Result;
#[cfg(test)]
use mockall::automock;
use std::path::{Path, PathBuf};

/// Filesystem abstraction for file I/O operations
///
/// The filesystem-backed store talks to the disk through this port, so its
/// error paths can be exercised with `MockFileSystem` in tests.
///
/// Usage:
///     let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
///     let content = fs.read_to_string(Path::new("items/note1.txt"))?;
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Read entire file contents as a UTF-8 string
    ///
    /// # Errors
    /// - File not found
    /// - Permission denied
    /// - Invalid UTF-8 encoding
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write string content to a file (creates or overwrites)
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check if a path is a regular file
    ///
    /// Returns false for directories, missing paths and permission errors
    fn is_file(&self, path: &Path) -> bool;

    /// Create directory and all parent directories (like mkdir -p)
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read directory entries, returning their paths
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Item storage capability
///
/// Keys are unique within a store: `add` never overwrites, and `delete` of a
/// missing key is an error. Every implementation must behave identically from
/// the caller's point of view.
///
/// Usage:
///     let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
///     storage.add("note1", "My first note")?;
///     assert_eq!(storage.list()?, vec!["note1".to_string()]);
#[cfg_attr(test, automock)]
pub trait Storage: Send + Sync {
    /// Add a new item
    ///
    /// # Errors
    /// - `AlreadyExists` if the id is present (store left unchanged)
    /// - `InvalidId` if the id cannot name an item
    fn add(&self, id: &str, content: &str) -> Result<()>;

    /// All item ids, sorted lexicographically
    fn list(&self) -> Result<Vec<String>>;

    /// Delete an item
    ///
    /// # Errors
    /// - `NotFound` if the id is absent
    fn delete(&self, id: &str) -> Result<()>;

    /// Check whether an item exists
    fn exists(&self, id: &str) -> bool;

    /// Content of an item, or `None` if it is missing
    fn get(&self, id: &str) -> Result<Option<String>>;

    /// Short backend name for diagnostics
    fn backend(&self) -> &'static str;
}

/// Greeting capability
pub trait GreetingService: Send + Sync {
    /// Build a greeting for `name`. Any input is accepted, including "".
    fn generate_greeting(&self, name: &str) -> String;

    /// Short provider name for diagnostics
    fn provider(&self) -> &'static str;
}

/// Whether `id` can name an item in any store
///
/// Ids become file names in the filesystem store, so anything that would
/// escape or alias the base directory is rejected everywhere.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}
