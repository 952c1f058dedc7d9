//! Content source port.

use std::future::Future;

use hostbook_domain::error::HostbookError;
use hostbook_domain::page::Page;

/// Provides the page content to render.
pub trait PageSource {
    /// Load the current page. Implementations may read from disk on every call.
    fn load(&self) -> impl Future<Output = Result<Page, HostbookError>> + Send;
}
