use crate::models::error::{FieldError, ValidationError};
use crate::models::report::{ReportField, ReportInput};
use crate::models::unit::{UnitRecord, UnitStatus};

/// Busy marker appended after a unit's code in the report body
const BUSY_SUFFIX: &str = "(مشغول)";

/// Render one handoff report from validated operator input
///
/// Pure and deterministic: identical input yields byte-identical output.
/// Unit names and codes are inserted verbatim.
pub fn compose(input: &ReportInput) -> Result<String, ValidationError> {
    // Both fields are checked; the error lists every missing one.
    let mut missing = Vec::new();
    if input.receiver.trim().is_empty() {
        missing.push(FieldError::missing(ReportField::Receiver));
    }
    if input.deputy.trim().is_empty() {
        missing.push(FieldError::missing(ReportField::Deputy));
    }
    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }

    let (in_field, out_field): (Vec<&UnitRecord>, Vec<&UnitRecord>) = input
        .units
        .iter()
        .partition(|u| u.status != UnitStatus::OutOfService);

    let unit_lines = in_field
        .iter()
        .map(|u| {
            let suffix = if u.status == UnitStatus::Busy {
                BUSY_SUFFIX
            } else {
                ""
            };
            format!("- {} | {} {}", u.name, u.code, suffix)
        })
        .collect::<Vec<_>>()
        .join("\n");

    // The in-field count line renders len + 1, exactly as the product's
    // template always has. Flagged for product clarification; do not
    // silently correct it here.
    Ok(format!(
        "📌 استلام العمليات 📌\n\
         \n\
         المستلم : {receiver}\n\
         النائب  : {deputy}\n\
         \n\
         عدد و اسماء الوحدات الاسعافيه في الميدان : ({in_count})\n\
         {unit_lines}\n\
         \n\
         خارج الخدمة : ({out_count})\n\
         \n\
         🎙️ تم استلام العمليات و جاهزون للتعامل مع البلاغات\n\
         الملاحظات : تحديث",
        receiver = input.receiver,
        deputy = input.deputy,
        in_count = in_field.len() + 1,
        unit_lines = unit_lines,
        out_count = out_field.len(),
    ))
}
