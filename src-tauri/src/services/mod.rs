pub mod composer;
pub mod config;
pub mod extractor;
pub mod ocr;
pub mod roster;
