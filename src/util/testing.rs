// src/util/testing.rs

use std::env;
use std::sync::OnceLock;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::link::LinkRecord;
use crate::domain::services::confirmation::ConfirmationProvider;
use crate::infrastructure::repositories::file_repository::FileLinkRepository;
use tempfile::TempDir;

/// Guards one-time test setup (logging).
static TEST_ENV: OnceLock<()> = OnceLock::new();

/// Initializes the global test environment exactly once.
pub fn init_test_env() {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Saves and restores the environment variables the loader reads, so tests
/// can mutate them freely.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    store_path: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            store_path: env::var("LINKBOARD_STORE_PATH").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("LINKBOARD_STORE_PATH");
        if let Some(val) = &self.store_path {
            env::set_var("LINKBOARD_STORE_PATH", val);
        }
    }
}

/// Creates a file-backed repository in a fresh temp directory. Keep the
/// `TempDir` alive for the duration of the test.
pub fn temp_repository() -> (TempDir, FileLinkRepository) {
    init_test_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repository = FileLinkRepository::from_path(dir.path());
    (dir, repository)
}

/// Scripted confirmation answer for tests.
#[derive(Debug)]
pub struct StaticConfirmation {
    answer: bool,
}

impl StaticConfirmation {
    pub fn yes() -> Self {
        Self { answer: true }
    }

    pub fn no() -> Self {
        Self { answer: false }
    }
}

impl ConfirmationProvider for StaticConfirmation {
    fn confirm_delete(&self, _record: &LinkRecord) -> bool {
        self.answer
    }
}
