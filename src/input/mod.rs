//! Input processing module
//! Handles file detection, document loading and text extraction

pub mod document;
pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use document::Document;
pub use file_detector::FileType;
pub use manager::InputManager;
