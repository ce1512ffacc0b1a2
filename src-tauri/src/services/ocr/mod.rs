pub mod engine;
pub mod http_ocr;

// Re-export main types
pub use engine::OcrEngine;
pub use http_ocr::HttpOcrClient;
