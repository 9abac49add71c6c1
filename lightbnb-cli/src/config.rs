//! Environment loading for the CLI

use std::path::PathBuf;

/// Load `.env` files, without overriding variables that are already set.
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.lightbnb/.env
///
/// Returns the files that were loaded. Runs before tracing is set up, so
/// the caller logs the result.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        // dotenvy doesn't overwrite existing vars, so the current
        // directory keeps priority
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// The lightbnb config directory (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}
