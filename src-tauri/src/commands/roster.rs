use crate::models::unit::UnitRecord;
use crate::services::roster::{self, UnitPatch};

// Roster edits return a fresh sequence instead of splicing in place;
// the frontend swaps its list wholesale.

/// Apply field edits to one unit and return the new roster
#[tauri::command]
pub fn replace_unit(units: Vec<UnitRecord>, index: usize, patch: UnitPatch) -> Vec<UnitRecord> {
    roster::replace_unit(&units, index, patch)
}

/// Append a manually entered unit and return the new roster
#[tauri::command]
pub fn append_unit(units: Vec<UnitRecord>, name: String) -> Vec<UnitRecord> {
    roster::append_unit(&units, &name)
}

/// Remove one unit and return the new roster
#[tauri::command]
pub fn remove_unit(units: Vec<UnitRecord>, index: usize) -> Vec<UnitRecord> {
    roster::remove_unit(&units, index)
}
