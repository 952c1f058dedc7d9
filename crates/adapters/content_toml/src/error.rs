//! Content-loading error type.

use hostbook_domain::error::HostbookError;

/// Errors originating from reading or parsing a content file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The file could not be read.
    #[error("failed to read content file")]
    Io(#[from] std::io::Error),

    /// The file is not a valid page document.
    #[error("failed to parse content file")]
    Parse(#[from] toml::de::Error),
}

impl From<ContentError> for HostbookError {
    fn from(err: ContentError) -> Self {
        Self::Source(Box::new(err))
    }
}
