use std::sync::Arc;

use base64::Engine as _;
use image::DynamicImage;
use parking_lot::Mutex;
use tauri::State;

use crate::models::error::ExtractionError;
use crate::models::unit::UnitRecord;
use crate::services::extractor;
use crate::services::ocr::{HttpOcrClient, OcrEngine};

/// State wrapper for OCR service (Arc for async sharing, parking_lot::Mutex for performance)
pub type OcrServiceState = Arc<Mutex<OcrService>>;

/// OCR service using HTTP client to communicate with the recognition server
pub struct OcrService {
    pub http_client: HttpOcrClient, // Public for cloning in async tasks
}

impl OcrService {
    pub fn new() -> Result<Self, String> {
        let http_client = HttpOcrClient::new()?;
        Ok(Self { http_client })
    }
}

/// Initialize OCR service state
pub fn init_ocr_service() -> Result<OcrServiceState, String> {
    let service = OcrService::new()?;
    Ok(Arc::new(Mutex::new(service)))
}

/// Decode base64 image to DynamicImage
fn decode_base64_image(base64_data: &str) -> Result<DynamicImage, ExtractionError> {
    let image_bytes = base64::engine::general_purpose::STANDARD
        .decode(base64_data)
        .map_err(|e| ExtractionError::InvalidImage(format!("failed to decode base64: {}", e)))?;

    let image = image::load_from_memory(&image_bytes)
        .map_err(|e| ExtractionError::InvalidImage(format!("failed to load image: {}", e)))?;

    Ok(image)
}

// ============================================================
// Tauri Commands
// ============================================================

/// Recognize a roster image and return the seeded unit list
/// (async to prevent UI blocking)
#[tauri::command]
pub async fn extract_units(
    state: State<'_, OcrServiceState>,
    image_base64: String,
) -> Result<Vec<UnitRecord>, ExtractionError> {
    let http_client = {
        let service = state.inner().lock();
        service.http_client.clone()
    };
    let image = decode_base64_image(&image_base64)?;
    extractor::extract_units(&http_client, &image).await
}

/// Check whether the OCR server is reachable
#[tauri::command]
pub async fn check_ocr_health(state: State<'_, OcrServiceState>) -> Result<bool, String> {
    let http_client = {
        let service = state.inner().lock();
        service.http_client.clone()
    };

    match http_client.health_check().await {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base64_image_rejects_garbage() {
        let result = decode_base64_image("not-base64!!!");
        assert!(matches!(result, Err(ExtractionError::InvalidImage(_))));
    }

    #[test]
    fn test_decode_base64_image_rejects_non_image_bytes() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"plain text");
        let result = decode_base64_image(&encoded);
        assert!(matches!(result, Err(ExtractionError::InvalidImage(_))));
    }

    #[test]
    fn test_decode_base64_image_accepts_png() {
        let mut buffer = Vec::new();
        DynamicImage::new_rgb8(2, 2)
            .write_to(
                &mut std::io::Cursor::new(&mut buffer),
                image::ImageFormat::Png,
            )
            .unwrap();
        let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);

        let image = decode_base64_image(&encoded).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));
    }
}
