// Resume intake: uploaded file -> plain text for the analysis pipeline.

pub mod text_extractor;

pub use text_extractor::{extract_resume_text, MAX_UPLOAD_BYTES};
