// Library interface for typ-tmpl
// The binary is a thin wrapper; everything here can be driven directly from
// tests or other Rust code.

pub mod app_builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod services;
pub mod version;

// Re-export commonly used types for convenience
pub use app_builder::{AppBuilder, AppContext};
pub use config::Settings;
pub use error::{AppError, Result};
pub use services::{
    FileStorage, FileSystem, GreetingGenerator, GreetingService, MemoryStorage,
    MockGreetingService, RealFileSystem, Storage,
};
