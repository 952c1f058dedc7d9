//! In-process page source over a fixed [`Page`].

use std::future::Future;

use hostbook_domain::catalog;
use hostbook_domain::error::HostbookError;
use hostbook_domain::page::Page;

use crate::ports::PageSource;

/// Serves the same page on every load.
#[derive(Debug, Clone)]
pub struct StaticPageSource {
    page: Page,
}

impl StaticPageSource {
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl Default for StaticPageSource {
    /// Backed by the built-in php.net catalog.
    fn default() -> Self {
        Self::new(catalog::php_net())
    }
}

impl PageSource for StaticPageSource {
    fn load(&self) -> impl Future<Output = Result<Page, HostbookError>> + Send {
        let page = self.page.clone();
        async { Ok(page) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_the_same_page_on_every_load() {
        let source = StaticPageSource::default();
        let first = source.load().await.unwrap();
        let second = source.load().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.title, catalog::TITLE);
    }

    #[tokio::test]
    async fn should_serve_custom_page() {
        let page = Page::builder().title("lab machines").build().unwrap();
        let source = StaticPageSource::new(page);
        let loaded = source.load().await.unwrap();
        assert_eq!(loaded.title, "lab machines");
        assert_eq!(loaded.machine_count(), 0);
    }
}
