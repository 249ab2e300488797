//! Preference files in the platform data directory. Submitted entries are
//! never written here; only shell settings are.

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::FormdeckError;

const APP_NAME: &str = "formdeck";

pub fn get_app_data_dir() -> Result<PathBuf, FormdeckError> {
    let data_dir = dirs::data_local_dir().ok_or(FormdeckError::MissingDataDir)?;
    let app_dir = data_dir.join(APP_NAME);
    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

pub fn get_data_file_path(filename: &str) -> Result<PathBuf, FormdeckError> {
    Ok(get_app_data_dir()?.join(filename))
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<(), FormdeckError> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    debug!(path = %file_path.display(), "data saved");
    Ok(())
}

/// A missing file yields `T::default()`.
pub fn load_json_from<T: DeserializeOwned + Default>(file_path: &Path) -> Result<T, FormdeckError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!(path = %file_path.display(), "data loaded");
    Ok(data)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), FormdeckError> {
    save_json_to(data, &get_data_file_path(filename)?)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    let loaded = get_data_file_path(filename).and_then(|path| load_json_from::<T>(&path));
    match loaded {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
