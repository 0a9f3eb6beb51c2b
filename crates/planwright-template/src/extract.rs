use std::path::Path;

use crate::error::TemplateError;
use crate::normalize::normalize_template;

pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Reads a PDF template and returns its normalized text.
///
/// Extraction runs on a blocking thread; a document whose text layer is
/// empty or whitespace-only (scanned pages) is reported as
/// [`TemplateError::EmptyText`] rather than passed through silently.
pub struct TemplateExtractor {
    pub max_file_size: u64,
}

impl Default for TemplateExtractor {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl TemplateExtractor {
    /// Extract and normalize template text from a PDF on disk.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the file is missing or unreadable,
    /// exceeds the size cap, cannot be parsed as a PDF, or yields no text.
    pub async fn extract_file(&self, path: &Path) -> Result<String, TemplateError> {
        let path = std::fs::canonicalize(path)?;

        let meta = tokio::fs::metadata(&path).await?;
        if meta.len() > self.max_file_size {
            return Err(TemplateError::FileTooLarge(meta.len()));
        }

        let path_buf = path.clone();
        let raw = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text(&path_buf).map_err(|e| TemplateError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| TemplateError::Io(std::io::Error::other(e)))??;

        tracing::debug!(path = %path.display(), chars = raw.len(), "extracted template text");
        Self::finish(raw)
    }

    /// Extract and normalize template text from in-memory PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the bytes exceed the size cap, are not
    /// a parseable PDF, or yield no text.
    pub async fn extract_bytes(&self, bytes: Vec<u8>) -> Result<String, TemplateError> {
        if bytes.len() as u64 > self.max_file_size {
            return Err(TemplateError::FileTooLarge(bytes.len() as u64));
        }

        let raw = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| TemplateError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| TemplateError::Io(std::io::Error::other(e)))??;

        Self::finish(raw)
    }

    fn finish(raw: String) -> Result<String, TemplateError> {
        let normalized = normalize_template(&raw);
        if normalized.is_empty() {
            return Err(TemplateError::EmptyText);
        }
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let extractor = TemplateExtractor::default();
        let err = extractor
            .extract_file(Path::new("/nonexistent/template.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Io(_)));
    }

    #[tokio::test]
    async fn oversized_file_rejected_before_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0u8; 64]).unwrap();

        let extractor = TemplateExtractor { max_file_size: 16 };
        let err = extractor.extract_file(&path).await.unwrap_err();
        assert!(matches!(err, TemplateError::FileTooLarge(64)));
    }

    #[tokio::test]
    async fn garbage_bytes_are_pdf_error() {
        let extractor = TemplateExtractor::default();
        let err = extractor
            .extract_bytes(b"not a pdf at all".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Pdf(_)));
    }

    #[tokio::test]
    async fn oversized_bytes_rejected() {
        let extractor = TemplateExtractor { max_file_size: 4 };
        let err = extractor
            .extract_bytes(vec![0u8; 10])
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::FileTooLarge(10)));
    }

    #[test]
    fn whitespace_only_text_is_empty_text() {
        let err = TemplateExtractor::finish("  \n\t  ".into()).unwrap_err();
        assert!(matches!(err, TemplateError::EmptyText));
    }

    #[test]
    fn finish_normalizes() {
        let out = TemplateExtractor::finish("Name:  x\n\nObjective: y".into()).unwrap();
        assert_eq!(out, "Name:\nx Objective:\ny");
    }
}
