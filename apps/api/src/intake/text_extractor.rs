//! Text extraction from uploaded resume files.
//!
//! The analysis pipeline only understands plain text, so every accepted upload
//! is reduced to a UTF-8 string here before prompting.

use crate::errors::AppError;

/// Upload size cap: 5 MB, matching the client-side gate.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Resume formats the intake path accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
    Markdown,
}

impl ResumeFormat {
    /// Resolves a format from the multipart content type, falling back to the
    /// filename extension when the browser sent a generic type.
    pub fn detect(content_type: Option<&str>, filename: Option<&str>) -> Option<ResumeFormat> {
        match content_type {
            Some("application/pdf") => return Some(ResumeFormat::Pdf),
            Some("text/plain") => return Some(ResumeFormat::PlainText),
            Some("text/markdown") => return Some(ResumeFormat::Markdown),
            _ => {}
        }

        let name = filename?.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(ResumeFormat::Pdf)
        } else if name.ends_with(".txt") {
            Some(ResumeFormat::PlainText)
        } else if name.ends_with(".md") || name.ends_with(".markdown") {
            Some(ResumeFormat::Markdown)
        } else {
            None
        }
    }
}

/// Extracts plain text from an uploaded resume.
///
/// Rejects oversized uploads, unsupported formats, and files that yield no
/// usable text (a resume the LLM cannot analyze).
pub fn extract_resume_text(
    bytes: &[u8],
    content_type: Option<&str>,
    filename: Option<&str>,
) -> Result<String, AppError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "Resume file exceeds the {} MB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let format = ResumeFormat::detect(content_type, filename).ok_or_else(|| {
        AppError::UnsupportedMediaType(format!(
            "Unsupported resume format (content type {:?}, filename {:?}); upload PDF, TXT, or Markdown",
            content_type, filename
        ))
    })?;

    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Validation(format!("Failed to extract text from PDF: {e}")))?,
        // Markdown reads fine as prose for prompting purposes.
        ResumeFormat::PlainText | ResumeFormat::Markdown => String::from_utf8(bytes.to_vec())
            .map_err(|_| AppError::Validation("Resume file is not valid UTF-8 text".into()))?,
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the uploaded resume".into(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            ResumeFormat::detect(Some("application/pdf"), None),
            Some(ResumeFormat::Pdf)
        );
        assert_eq!(
            ResumeFormat::detect(Some("text/plain"), None),
            Some(ResumeFormat::PlainText)
        );
        assert_eq!(
            ResumeFormat::detect(Some("text/markdown"), None),
            Some(ResumeFormat::Markdown)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            ResumeFormat::detect(Some("application/octet-stream"), Some("resume.PDF")),
            Some(ResumeFormat::Pdf)
        );
        assert_eq!(
            ResumeFormat::detect(None, Some("resume.md")),
            Some(ResumeFormat::Markdown)
        );
    }

    #[test]
    fn test_detect_rejects_unknown_formats() {
        assert_eq!(ResumeFormat::detect(Some("application/zip"), Some("resume.zip")), None);
        assert_eq!(ResumeFormat::detect(None, None), None);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text =
            extract_resume_text(b"Ada Lovelace\nAnalyst", Some("text/plain"), None).unwrap();
        assert_eq!(text, "Ada Lovelace\nAnalyst");
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let big = vec![b'a'; MAX_UPLOAD_BYTES + 1];
        let err = extract_resume_text(&big, Some("text/plain"), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let err = extract_resume_text(b"PK\x03\x04", Some("application/zip"), Some("r.docx"))
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_whitespace_only_text_rejected() {
        let err = extract_resume_text(b"   \n\t ", Some("text/plain"), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = extract_resume_text(&[0xff, 0xfe, 0x00], Some("text/plain"), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
