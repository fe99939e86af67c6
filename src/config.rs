//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The application name, as displayed to the user.
/// Feel free to override it when initing this library.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Day planner".to_string())));

/// The file [`AppState::load_or_default`](crate::AppState::load_or_default) reads when the caller has no better idea.
/// Feel free to override it when initing this library.
pub static DEFAULT_SNAPSHOT_FILE: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| Arc::new(Mutex::new(PathBuf::from("day-planner.json"))));

/// Returns the current value of [`DEFAULT_SNAPSHOT_FILE`]
pub fn default_snapshot_file() -> PathBuf {
    match DEFAULT_SNAPSHOT_FILE.lock() {
        Ok(path) => path.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the current value of [`APP_NAME`]
pub fn app_name() -> String {
    match APP_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
