//! File-backed [`PageSource`].

use std::future::Future;
use std::path::{Path, PathBuf};

use hostbook_app::ports::PageSource;
use hostbook_domain::error::HostbookError;
use hostbook_domain::page::Page;

use crate::error::ContentError;

/// Parse a page document from TOML text.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] when the text is not a valid page document.
/// Domain invariants are not checked here.
pub fn parse_page(content: &str) -> Result<Page, ContentError> {
    Ok(toml::from_str(content)?)
}

/// Reads the page from a TOML file on every load, so edits show up without
/// a restart.
#[derive(Debug, Clone)]
pub struct TomlPageSource {
    path: PathBuf,
}

impl TomlPageSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Page, ContentError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let page = parse_page(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            machines = page.machine_count(),
            "loaded page content"
        );
        Ok(page)
    }
}

impl PageSource for TomlPageSource {
    fn load(&self) -> impl Future<Output = Result<Page, HostbookError>> + Send {
        async move {
            self.read().await.map_err(|err| {
                tracing::error!(path = %self.path.display(), error = %err, "cannot load page content");
                HostbookError::from(err)
            })
        }
    }
}
