//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
///
/// Honours `RUST_LOG` and falls back to [`DEFAULT_FILTER`]. Safe to call more
/// than once; later calls are ignored.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::trace!("logger already initialised");
    }
}

/// Initialize logging for unit tests (output captured by the test harness)
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
