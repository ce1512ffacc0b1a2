mod commands;
mod models;
mod services;

use commands::config::{get_config_path, init_config_manager, load_config, save_config, set_theme};
use commands::extract::{check_ocr_health, extract_units, init_ocr_service};
use commands::report::compose_report;
use commands::roster::{append_unit, remove_unit, replace_unit};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt().init();

    // Initialize managed state
    let config_manager = init_config_manager().expect("Failed to initialize config manager");
    let ocr_service = init_ocr_service().expect("Failed to initialize OCR service");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(config_manager)
        .manage(ocr_service)
        .invoke_handler(tauri::generate_handler![
            extract_units,
            check_ocr_health,
            compose_report,
            replace_unit,
            append_unit,
            remove_unit,
            save_config,
            load_config,
            set_theme,
            get_config_path
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
