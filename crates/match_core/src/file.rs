use std::path::PathBuf;

use thiserror::Error;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME types the backend can parse.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = [MIME_PDF, MIME_DOCX];

/// Client-side upload limit (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Job descriptions must be longer than this (trimmed, in characters).
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

/// How the user handed us the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Browse,
    Drop,
    InputChange,
}

/// A resume file chosen by the user. Only metadata lives in the core; the
/// engine reads the bytes from `path` when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Please upload a PDF or DOCX file")]
    UnsupportedType { mime_type: String },
    #[error("File size must be less than 10MB")]
    TooLarge { size: u64 },
}

/// Type first, then size.
pub fn validate_file(file: &SelectedFile) -> Result<(), FileRejection> {
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FileRejection::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(FileRejection::TooLarge { size: file.size });
    }
    Ok(())
}

/// Human-readable size: bytes below 1 KiB, one-decimal KB below 1 MiB, MB above.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// The form validity gate for the analyze action.
pub fn is_form_valid(file: Option<&SelectedFile>, job_description: &str) -> bool {
    file.is_some() && job_description.trim().chars().count() > MIN_JOB_DESCRIPTION_CHARS
}
