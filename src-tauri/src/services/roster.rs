use serde::{Deserialize, Serialize};

use crate::models::unit::{UnitRecord, UnitStatus};

/// Field edits applied to a single roster record; absent fields are kept
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub status: Option<UnitStatus>,
}

/// Return a new roster with the record at `index` patched
///
/// Never mutates or aliases the input; an out-of-range index returns an
/// unchanged copy.
pub fn replace_unit(units: &[UnitRecord], index: usize, patch: UnitPatch) -> Vec<UnitRecord> {
    units
        .iter()
        .enumerate()
        .map(|(i, u)| {
            if i != index {
                return u.clone();
            }
            UnitRecord {
                id: u.id,
                name: patch.name.clone().unwrap_or_else(|| u.name.clone()),
                code: patch.code.clone().unwrap_or_else(|| u.code.clone()),
                status: patch.status.unwrap_or(u.status),
            }
        })
        .collect()
}

/// Return a new roster with a manually entered unit appended
///
/// The new record gets the next free id, no code, and the in-field status.
pub fn append_unit(units: &[UnitRecord], name: &str) -> Vec<UnitRecord> {
    // Ids come from the frontend unchecked; saturate instead of overflowing.
    let next_id = units
        .iter()
        .map(|u| u.id.saturating_add(1))
        .max()
        .unwrap_or(0);
    let mut next = units.to_vec();
    next.push(UnitRecord::new(next_id, name));
    next
}

/// Return a new roster with the record at `index` removed
pub fn remove_unit(units: &[UnitRecord], index: usize) -> Vec<UnitRecord> {
    units
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, u)| u.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<UnitRecord> {
        vec![
            UnitRecord::new(0, "وحدة 1"),
            UnitRecord::new(1, "وحدة 2"),
            UnitRecord::new(2, "وحدة 3"),
        ]
    }

    #[test]
    fn test_replace_unit_patches_single_field() {
        let units = roster();
        let next = replace_unit(
            &units,
            1,
            UnitPatch {
                code: Some("أ-7".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(next[1].code, "أ-7");
        assert_eq!(next[1].name, "وحدة 2", "unpatched fields are kept");
        assert_eq!(next[1].id, 1, "ids survive edits");
        // The original sequence is untouched.
        assert_eq!(units[1].code, "");
    }

    #[test]
    fn test_replace_unit_status_change() {
        let units = roster();
        let next = replace_unit(
            &units,
            0,
            UnitPatch {
                status: Some(UnitStatus::OutOfService),
                ..Default::default()
            },
        );

        assert_eq!(next[0].status, UnitStatus::OutOfService);
        assert_eq!(units[0].status, UnitStatus::InField);
    }

    #[test]
    fn test_replace_unit_out_of_range_is_identity() {
        let units = roster();
        let next = replace_unit(
            &units,
            99,
            UnitPatch {
                name: Some("x".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(next, units);
    }

    #[test]
    fn test_append_unit_assigns_next_id() {
        let next = append_unit(&roster(), "وحدة يدوية");

        assert_eq!(next.len(), 4);
        assert_eq!(next[3].id, 3);
        assert_eq!(next[3].name, "وحدة يدوية");
        assert_eq!(next[3].code, "");
        assert_eq!(next[3].status, UnitStatus::InField);
    }

    #[test]
    fn test_append_unit_to_empty_roster() {
        let next = append_unit(&[], "وحدة");
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 0);
    }

    #[test]
    fn test_append_unit_skips_past_stale_ids() {
        // Manual removals can leave gaps; new ids must not collide.
        let units = vec![UnitRecord::new(5, "وحدة")];
        let next = append_unit(&units, "أخرى");
        assert_eq!(next[1].id, 6);
    }

    #[test]
    fn test_append_unit_saturates_at_max_id() {
        let units = vec![UnitRecord::new(u32::MAX, "وحدة")];
        let next = append_unit(&units, "أخرى");
        assert_eq!(next[1].id, u32::MAX, "id allocation must not overflow");
    }

    #[test]
    fn test_remove_unit_preserves_order() {
        let units = roster();
        let next = remove_unit(&units, 1);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].name, "وحدة 1");
        assert_eq!(next[1].name, "وحدة 3");
        assert_eq!(units.len(), 3, "input roster is untouched");
    }

    #[test]
    fn test_remove_unit_out_of_range_is_identity() {
        let units = roster();
        assert_eq!(remove_unit(&units, 10), units);
    }
}
