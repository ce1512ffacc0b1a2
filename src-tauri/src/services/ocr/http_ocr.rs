use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::engine::OcrEngine;
use crate::models::error::ExtractionError;

/// HTTP OCR client that communicates with the local recognition server
#[derive(Clone)]
pub struct HttpOcrClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ImageRequest {
    image_base64: String,
    lang: String,
}

/// OCR response from the recognition server
#[derive(Deserialize)]
struct OcrResponse {
    text: String,
}

impl HttpOcrClient {
    /// Create a new HTTP OCR client
    pub fn new() -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: "http://127.0.0.1:41720".to_string(),
        })
    }

    /// Override the server address (tests, non-default deployments)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Encode image to base64 PNG
    fn encode_image(image: &DynamicImage) -> Result<String, ExtractionError> {
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .map_err(|e| ExtractionError::InvalidImage(format!("failed to encode image: {}", e)))?;
        Ok(general_purpose::STANDARD.encode(&buffer))
    }

    /// Call the OCR endpoint and return the recognized plain text
    async fn recognize_text(
        &self,
        image: &DynamicImage,
        lang: &str,
    ) -> Result<String, ExtractionError> {
        let image_base64 = Self::encode_image(image)?;
        let url = format!("{}/ocr", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ImageRequest {
                image_base64,
                lang: lang.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OCR request failed");
                ExtractionError::Request(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%status, "OCR server returned an error");
            return Err(ExtractionError::Server(error_text));
        }

        let data: OcrResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::Response(e.to_string()))?;

        Ok(data.text)
    }
}

impl OcrEngine for HttpOcrClient {
    async fn recognize(
        &self,
        image: &DynamicImage,
        lang: &str,
    ) -> Result<String, ExtractionError> {
        self.recognize_text(image, lang).await
    }

    async fn health_check(&self) -> Result<(), ExtractionError> {
        let url = format!("{}/health", self.base_url);
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExtractionError::Request(format!("health check failed: {}", e)))?;
        Ok(())
    }
}
