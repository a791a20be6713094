//! Object storage constants, allow-lists and key generation.
//!
//! The I/O side (presigning, deletion) lives in `falcone-cloud`; everything
//! here is pure so handlers can check uploads before any network call.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default lifetime of a presigned upload URL (seconds).
pub const DEFAULT_UPLOAD_TTL_SECS: u64 = 3600;

/// Folder used when the requested folder is missing or not allowed.
pub const DEFAULT_FOLDER: &str = "uploads";

/// Content types clients may upload.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "video/mp4",
    "video/quicktime",
    "video/webm",
    "audio/mpeg",
    "audio/wav",
    "application/pdf",
];

/// Top-level key prefixes clients may upload into.
pub const ALLOWED_FOLDERS: &[&str] = &["photos", "videos", "documents", "press", DEFAULT_FOLDER];

// ---------------------------------------------------------------------------
// Allow-list checks
// ---------------------------------------------------------------------------

pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

/// Map a requested folder onto the allow-list; anything unknown becomes
/// [`DEFAULT_FOLDER`].
pub fn resolve_folder(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|folder| ALLOWED_FOLDERS.iter().copied().find(|f| *f == folder))
        .unwrap_or(DEFAULT_FOLDER)
}

// ---------------------------------------------------------------------------
// Key generation
// ---------------------------------------------------------------------------

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build an object key `{folder}/{unix_millis}-{sanitized_filename}`.
///
/// Two calls with the same filename in the same millisecond collide.
pub fn generate_key(folder: &str, filename: &str) -> String {
    generate_key_at(folder, filename, chrono::Utc::now().timestamp_millis())
}

/// [`generate_key`] with an explicit timestamp.
pub fn generate_key_at(folder: &str, filename: &str, unix_millis: i64) -> String {
    format!("{folder}/{unix_millis}-{}", sanitize_filename(filename))
}

// ---------------------------------------------------------------------------
// Backend selection
// ---------------------------------------------------------------------------

/// Which object storage implementation the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendType {
    S3,
    Memory,
}

impl StorageBackendType {
    /// Parse from the `STORAGE_BACKEND` setting.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "s3" => Ok(Self::S3),
            "memory" => Ok(Self::Memory),
            other => Err(CoreError::Validation(format!(
                "Unknown storage backend '{other}'. Must be one of: s3, memory"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Memory => "memory",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
