use image::DynamicImage;

use crate::models::error::ExtractionError;

/// OCR engine trait - abstraction over the external recognition service
///
/// The extractor only depends on this, so it can be tested against a
/// scripted engine without a running server.
pub trait OcrEngine: Send + Sync {
    /// Recognize multi-line text from an image with a language hint
    fn recognize(
        &self,
        image: &DynamicImage,
        lang: &str,
    ) -> impl std::future::Future<Output = Result<String, ExtractionError>> + Send;

    /// Check whether the engine is reachable
    fn health_check(&self) -> impl std::future::Future<Output = Result<(), ExtractionError>> + Send;
}
