// Unit tests for logger initialization

use crate::error::LoggerError;
use crate::logger::{initialize, initialize_internal};

use std::path::PathBuf;

/// **VALUE**: Repeated initialization is harmless.
///
/// **BUG THIS CATCHES**: Would catch the Once/AtomicBool guards being
/// removed, making fern fail when a second global logger is installed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let first = initialize(temp_dir.path());
    let second = initialize(temp_dir.path());

    assert!(first.is_ok(), "First initialization should succeed");
    assert!(second.is_ok(), "Second initialization should be a no-op");
}

#[test]
fn given_unwritable_log_dir_when_initializing_then_init_error_without_panic() {
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    let result = initialize_internal(&invalid_dir);

    assert!(matches!(result, Err(LoggerError::Init { .. })));
}
