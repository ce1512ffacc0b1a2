use serde::{Deserialize, Serialize};

/// Field status of a roster unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    InField,
    Busy,
    OutOfService,
}

impl Default for UnitStatus {
    fn default() -> Self {
        Self::InField
    }
}

/// A single roster unit in the editable session list
///
/// Ordering is insertion order and is display-significant. The `id` is
/// only guaranteed unique at extraction time (sequential index); manual
/// edits are not re-validated against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub status: UnitStatus,
}

impl UnitRecord {
    /// Create a record the way the extractor seeds them: no code, in field
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: String::new(),
            status: UnitStatus::InField,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UnitStatus::InField).unwrap(),
            "\"in_field\""
        );
        assert_eq!(serde_json::to_string(&UnitStatus::Busy).unwrap(), "\"busy\"");
        assert_eq!(
            serde_json::to_string(&UnitStatus::OutOfService).unwrap(),
            "\"out_of_service\""
        );
    }

    #[test]
    fn test_unit_status_rejects_unknown_value() {
        let result: Result<UnitStatus, _> = serde_json::from_str("\"retired\"");
        assert!(result.is_err(), "Only the three enumerated statuses are valid");
    }

    #[test]
    fn test_unit_record_defaults() {
        let record = UnitRecord::new(0, "إسعاف 1");
        assert_eq!(record.id, 0);
        assert_eq!(record.code, "");
        assert_eq!(record.status, UnitStatus::InField);
    }

    #[test]
    fn test_unit_record_deserializes_with_missing_optionals() {
        let record: UnitRecord =
            serde_json::from_str(r#"{"id": 3, "name": "Unit3"}"#).unwrap();
        assert_eq!(record.code, "");
        assert_eq!(record.status, UnitStatus::InField);
    }
}
