use image::DynamicImage;
use regex::Regex;
use tracing::info;

use crate::models::error::ExtractionError;
use crate::models::unit::UnitRecord;
use crate::services::ocr::OcrEngine;

/// Language hint for the OCR service; rosters are handwritten in Arabic
pub const ROSTER_LANG: &str = "ara";

/// Characters allowed in a unit name: Arabic-block letters, digits,
/// whitespace, and hyphens
fn line_filter() -> Regex {
    Regex::new(r"[^\x{0600}-\x{06FF}0-9\s\-]").unwrap()
}

/// Strip everything the filter disallows, then trim
fn clean_line(filter: &Regex, line: &str) -> String {
    filter.replace_all(line, "").trim().to_string()
}

/// Turn raw OCR text into candidate unit records
///
/// One record per line that survives cleaning; ids are the zero-based
/// position among survivors. Noise-only lines vanish.
pub fn units_from_text(text: &str) -> Vec<UnitRecord> {
    let filter = line_filter();
    text.lines()
        .map(|line| clean_line(&filter, line))
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, name)| UnitRecord::new(i as u32, name))
        .collect()
}

/// Recognize a roster image and seed the editable unit list
///
/// Fails as a whole when the OCR call fails; never emits partial records.
pub async fn extract_units<E: OcrEngine>(
    engine: &E,
    image: &DynamicImage,
) -> Result<Vec<UnitRecord>, ExtractionError> {
    let text = engine.recognize(image, ROSTER_LANG).await?;
    let units = units_from_text(&text);
    info!(count = units.len(), "extracted unit records from roster image");
    Ok(units)
}
