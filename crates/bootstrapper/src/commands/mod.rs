//! Command implementations

pub mod config;
pub mod doctor;
pub mod new;

use bootstrapper_core::config::DEFAULT_MIN_UV_VERSION;
use bootstrapper_core::ConfigStore;

/// Minimum uv version for the precheck
///
/// Read from an existing config without creating one; the precheck runs
/// before any first-run questions.
pub(crate) fn precheck_min_uv_version(store: &ConfigStore) -> String {
    if !store.exists() {
        return DEFAULT_MIN_UV_VERSION.to_string();
    }
    match store.load() {
        Ok(config) => config.min_uv_version().to_string(),
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {}", store.path(), e);
            DEFAULT_MIN_UV_VERSION.to_string()
        }
    }
}
