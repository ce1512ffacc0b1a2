use std::sync::Mutex;

use tauri::State;

use crate::models::config::{AppConfig, Theme};
use crate::services::config::ConfigManager;

/// State wrapper for configuration manager
pub type ConfigManagerState = Mutex<ConfigManager>;

/// Initialize config manager state
pub fn init_config_manager() -> Result<ConfigManagerState, String> {
    let manager = ConfigManager::new()?;
    Ok(Mutex::new(manager))
}

/// Save entire application configuration
#[tauri::command]
pub fn save_config(state: State<ConfigManagerState>, config: AppConfig) -> Result<(), String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to lock config manager: {}", e))?;

    manager.save(&config)
}

/// Load entire application configuration
#[tauri::command]
pub fn load_config(state: State<ConfigManagerState>) -> Result<AppConfig, String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to lock config manager: {}", e))?;

    manager.load()
}

/// Update the persisted theme preference
///
/// The single settings-update entry point; returns the new config so the
/// frontend can apply it without a follow-up load.
#[tauri::command]
pub fn set_theme(state: State<ConfigManagerState>, theme: Theme) -> Result<AppConfig, String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to lock config manager: {}", e))?;

    // Load existing config or start from defaults if it doesn't exist yet
    let mut config = manager.load().unwrap_or_default();
    config.theme = theme;
    manager.save(&config)?;

    Ok(config)
}

/// Get config file path
#[tauri::command]
pub fn get_config_path(state: State<ConfigManagerState>) -> Result<String, String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to lock config manager: {}", e))?;

    Ok(manager
        .config_file_path()
        .to_str()
        .unwrap_or("")
        .to_string())
}

// Note: Unit tests for the underlying ConfigManager are in services/config.rs
