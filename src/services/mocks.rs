// Mock test helpers built on the mockall-generated doubles
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let mut mock_fs = create_mock_filesystem();
//     mock_fs.expect_write().returning(|_, _| Err(permission_denied()));

#[cfg(test)]
pub mod test_helpers {
    pub use super::super::traits::{MockFileSystem, MockStorage};
    use super::super::traits::GreetingService;
    use crate::error::AppError;
    use mockall::mock;

    // Hand-declared so it does not clash with the runtime MockGreetingService
    mock! {
        pub Greeter {}

        impl GreetingService for Greeter {
            fn generate_greeting(&self, name: &str) -> String;
            fn provider(&self) -> &'static str;
        }
    }

    /// Mock filesystem where directory creation succeeds and no file exists
    ///
    /// Default behavior:
    /// - create_dir_all() succeeds
    /// - is_file() returns false
    pub fn create_mock_filesystem() -> MockFileSystem {
        let mut mock = MockFileSystem::new();

        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_is_file().returning(|_| false);

        mock
    }

    /// Mock storage that reports every id as missing
    ///
    /// Default behavior:
    /// - list() returns empty vec
    /// - exists() returns false
    /// - get() returns None
    /// - delete() fails with NotFound
    /// - backend() returns "mock"
    pub fn create_empty_mock_storage() -> MockStorage {
        let mut mock = MockStorage::new();

        mock.expect_list().returning(|| Ok(vec![]));
        mock.expect_exists().returning(|_| false);
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_delete()
            .returning(|id: &str| Err(AppError::NotFound(id.to_string())));
        mock.expect_backend().return_const("mock");

        mock
    }

    /// Mock greeting provider answering with a fixed message
    pub fn create_mock_greeting(message: &str) -> MockGreeter {
        let mut mock = MockGreeter::new();
        let message = message.to_string();

        mock.expect_generate_greeting()
            .returning(move |_: &str| message.clone());
        mock.expect_provider().return_const("mockall");

        mock
    }

    /// Io error with PermissionDenied kind
    pub fn permission_denied() -> AppError {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::{GreetingService, Storage};
    use super::test_helpers::*;

    #[test]
    fn test_create_mock_filesystem() {
        use super::super::traits::FileSystem;

        let mock = create_mock_filesystem();
        assert!(!mock.is_file(std::path::Path::new("anything")));
        assert!(mock.create_dir_all(std::path::Path::new("dir")).is_ok());
    }

    #[test]
    fn test_create_empty_mock_storage() {
        let mock = create_empty_mock_storage();
        assert!(mock.list().unwrap().is_empty());
        assert!(mock.delete("x").is_err());
        assert_eq!(mock.backend(), "mock");
    }

    #[test]
    fn test_create_mock_greeting() {
        let mock = create_mock_greeting("hi");
        assert_eq!(mock.generate_greeting("anyone"), "hi");
    }
}
