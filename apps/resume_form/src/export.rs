//! Export: turns a rendered document into a named, downloadable artifact.
//!
//! The byte encoding is pluggable through [`DocumentEncoder`]. A paged-document
//! backend (PDF) lives outside this crate and implements the same trait; the
//! built-in encoders write the layout tree as JSON or plain text.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::FormError;
use crate::render::RenderedDocument;

/// Used when the candidate has not entered a name.
pub const DEFAULT_FILE_STEM: &str = "resume";

/// Encodes a rendered document into bytes. Must be deterministic.
pub trait DocumentEncoder: Send + Sync {
    /// File extension without the dot; fixed per encoder.
    fn extension(&self) -> &'static str;

    fn encode(&self, document: &RenderedDocument) -> Result<Vec<u8>, FormError>;
}

/// Pretty-printed JSON of the full layout tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl DocumentEncoder for JsonEncoder {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, document: &RenderedDocument) -> Result<Vec<u8>, FormError> {
        Ok(serde_json::to_vec_pretty(document)?)
    }
}

/// Page-delimited plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl DocumentEncoder for TextEncoder {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn encode(&self, document: &RenderedDocument) -> Result<Vec<u8>, FormError> {
        Ok(document.plain_text().into_bytes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Writes the artifact into `dir` (created if missing) and returns the file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, FormError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "Resume artifact written");
        Ok(path)
    }
}

/// `<name>_Resume.<ext>`, or `resume_Resume.<ext>` when the name is blank.
///
/// Path separators in the name are replaced so the artifact stays a single file name.
pub fn export_file_name(student_name: &str, extension: &str) -> String {
    let trimmed = student_name.trim();
    let stem = if trimmed.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        trimmed.replace(['/', '\\'], "_")
    };
    format!("{stem}_Resume.{extension}")
}

pub fn export_document(
    student_name: &str,
    document: &RenderedDocument,
    encoder: &dyn DocumentEncoder,
) -> Result<ExportArtifact, FormError> {
    let bytes = encoder.encode(document)?;
    let file_name = export_file_name(student_name, encoder.extension());
    info!(
        file_name = %file_name,
        pages = document.page_count(),
        bytes = bytes.len(),
        "Resume exported"
    );
    Ok(ExportArtifact { file_name, bytes })
}
