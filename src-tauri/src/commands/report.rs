use crate::models::error::ValidationError;
use crate::models::report::ReportInput;
use crate::services::composer;

/// Validate operator input and render the handoff report text
///
/// Synchronous and pure; the frontend copies the returned string to the
/// clipboard itself.
#[tauri::command]
pub fn compose_report(input: ReportInput) -> Result<String, ValidationError> {
    composer::compose(&input)
}
