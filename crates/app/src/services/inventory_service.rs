//! Inventory service — use-cases for reading the machine inventory.

use hostbook_domain::error::{HostbookError, NotFoundError};
use hostbook_domain::machine::Machine;
use hostbook_domain::page::Page;

use crate::ports::PageSource;

/// Application service that loads and queries the inventory page.
pub struct InventoryService<S> {
    source: S,
}

impl<S: PageSource> InventoryService<S> {
    /// Create a new service backed by the given content source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the current page and check its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HostbookError::Validation`] if the loaded content is
    /// invalid, or a source error propagated from the [`PageSource`].
    pub async fn current_page(&self) -> Result<Page, HostbookError> {
        let page = self.source.load().await?;
        if let Err(err) = page.validate() {
            tracing::warn!(error = %err, title = %page.title, "rejecting invalid page content");
            return Err(err);
        }
        Ok(page)
    }

    /// List all machines in page order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::current_page`].
    pub async fn list_machines(&self) -> Result<Vec<Machine>, HostbookError> {
        let page = self.current_page().await?;
        Ok(page.machines().cloned().collect())
    }

    /// Look up a machine by hostname, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HostbookError::NotFound`] when no machine has `hostname`,
    /// or any error from [`Self::current_page`].
    pub async fn get_machine(&self, hostname: &str) -> Result<Machine, HostbookError> {
        let page = self.current_page().await?;
        page.find_machine(hostname).cloned().ok_or_else(|| {
            NotFoundError {
                entity: "Machine",
                id: hostname.to_string(),
            }
            .into()
        })
    }
}
