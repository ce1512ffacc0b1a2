use serde::{Deserialize, Serialize};

use crate::models::unit::UnitRecord;

/// Required report fields checked before composing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReportField {
    Receiver,
    Deputy,
}

impl ReportField {
    /// Operator-facing message for a missing field
    pub fn missing_message(&self) -> &'static str {
        match self {
            ReportField::Receiver => "حقل المستلم مطلوب",
            ReportField::Deputy => "حقل النائب مطلوب",
        }
    }
}

/// Everything the composer needs for one report, assembled fresh per request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportInput {
    pub receiver: String,
    pub deputy: String,
    #[serde(default)]
    pub units: Vec<UnitRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_field_serialization() {
        assert_eq!(
            serde_json::to_string(&ReportField::Receiver).unwrap(),
            "\"receiver\""
        );
        assert_eq!(
            serde_json::to_string(&ReportField::Deputy).unwrap(),
            "\"deputy\""
        );
    }

    #[test]
    fn test_report_input_deserializes_without_units() {
        let input: ReportInput =
            serde_json::from_str(r#"{"receiver": "Ahmed", "deputy": "Sara"}"#).unwrap();
        assert!(input.units.is_empty());
    }
}
