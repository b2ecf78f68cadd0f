// AppBuilder: dependency construction and injection
//
// The builder turns a Settings snapshot into an AppContext. For each
// capability it uses an explicit override if one was supplied, otherwise it
// consults the matching toggle in Settings:
//
//     toggle true  -> mock provider (MemoryStorage, MockGreetingService)
//     toggle false -> real provider (FileStorage, GreetingGenerator)
//
// Selection happens once per build and is never re-evaluated. Overrides are
// the seam tests use to inject doubles without touching the environment.
//
// Usage Example:
//     // Production
//     let ctx = AppBuilder::new(Settings::load()?).build()?;
//
//     // Testing
//     let storage = Arc::new(MemoryStorage::new());
//     let ctx = AppBuilder::new(Settings::default())
//         .with_storage(storage.clone())
//         .build()?;

use crate::config::Settings;
use crate::error::Result;
use crate::services::{
    FileStorage, FileSystem, GreetingGenerator, GreetingService, MemoryStorage,
    MockGreetingService, RealFileSystem, Storage,
};
use std::sync::Arc;

/// Pick the greeting provider for `settings`
pub fn resolve_greeting_service(settings: &Settings) -> Arc<dyn GreetingService> {
    if settings.use_mock_greeting {
        Arc::new(MockGreetingService)
    } else {
        Arc::new(GreetingGenerator)
    }
}

/// Pick and construct the storage provider for `settings`
///
/// # Errors
/// - `Io` if the filesystem store cannot create its directory
pub fn resolve_storage(settings: &Settings, fs: Arc<dyn FileSystem>) -> Result<Arc<dyn Storage>> {
    if settings.use_mock_storage {
        Ok(Arc::new(MemoryStorage::new()))
    } else {
        Ok(Arc::new(FileStorage::new(fs, settings.storage_dir())?))
    }
}

/// Builder for constructing an AppContext with dependency injection
pub struct AppBuilder {
    settings: Settings,

    // Optional overrides (bypass the toggles)
    filesystem: Option<Arc<dyn FileSystem>>,
    storage: Option<Arc<dyn Storage>>,
    greeting_service: Option<Arc<dyn GreetingService>>,
}

impl AppBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            filesystem: None,
            storage: None,
            greeting_service: None,
        }
    }

    /// Override the filesystem the filesystem store is built on
    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.filesystem = Some(fs);
        self
    }

    /// Override storage (ignores `use_mock_storage`)
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Override the greeting provider (ignores `use_mock_greeting`)
    pub fn with_greeting_service(mut self, service: Arc<dyn GreetingService>) -> Self {
        self.greeting_service = Some(service);
        self
    }

    /// Resolve every capability and assemble the context
    ///
    /// # Errors
    ///
    /// Only constructing the filesystem store can fail (directory creation).
    /// Choosing a provider never does.
    pub fn build(self) -> Result<AppContext> {
        let greeting_service = match self.greeting_service {
            Some(service) => service,
            None => resolve_greeting_service(&self.settings),
        };

        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let fs = self
                    .filesystem
                    .unwrap_or_else(|| Arc::new(RealFileSystem) as Arc<dyn FileSystem>);
                resolve_storage(&self.settings, fs)?
            }
        };

        tracing::debug!(
            app = %self.settings.app_name,
            storage = storage.backend(),
            greeting = greeting_service.provider(),
            "resolved application context"
        );

        Ok(AppContext {
            settings: self.settings,
            storage,
            greeting_service,
        })
    }
}

/// Per-invocation bundle of settings and resolved capabilities
///
/// Built once by [`AppBuilder::build`] and only read afterwards.
pub struct AppContext {
    pub settings: Settings,
    pub storage: Arc<dyn Storage>,
    pub greeting_service: Arc<dyn GreetingService>,
}
