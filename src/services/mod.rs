// Service layer: capability traits and their concrete providers
//
// Architecture Pattern: Ports and Adapters
// - `traits` defines the ports (Storage, GreetingService, FileSystem)
// - the other modules are adapters; the container picks one per port
//
// Usage Example:
//     // Production code
//     let fs = Arc::new(RealFileSystem);
//     let storage = FileStorage::new(fs, FileStorage::default_base_dir())?;
//
//     // Test code
//     let storage = MemoryStorage::new();
//     storage.add("note1", "hello")?;
//     assert_eq!(storage.calls().len(), 1);

pub mod filesystem;
pub mod greeting;
pub mod memory;
#[cfg(test)]
pub mod mocks;
pub mod storage;
pub mod traits;

// Re-export commonly used types
pub use filesystem::RealFileSystem;
pub use greeting::{GreetingGenerator, MockGreetingService};
pub use memory::{MemoryStorage, StorageCall};
pub use storage::FileStorage;
pub use traits::{FileSystem, GreetingService, Storage};
