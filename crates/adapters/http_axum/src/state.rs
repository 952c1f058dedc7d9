//! Shared application state for axum handlers.

use std::sync::Arc;

use hostbook_app::ports::{BlockRenderer, PageChrome, PageSource};
use hostbook_app::services::inventory_service::InventoryService;
use hostbook_app::services::page_renderer::PageRenderer;

/// Application state shared across all axum handlers.
///
/// Generic over the content source and the two markup collaborators to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, C, B> {
    /// Loads and queries the inventory page.
    pub inventory: Arc<InventoryService<S>>,
    /// Turns a page into a full HTML document.
    pub renderer: Arc<PageRenderer<C, B>>,
}

impl<S, C, B> Clone for AppState<S, C, B> {
    fn clone(&self) -> Self {
        Self {
            inventory: Arc::clone(&self.inventory),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<S, C, B> AppState<S, C, B>
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(inventory: InventoryService<S>, renderer: PageRenderer<C, B>) -> Self {
        Self {
            inventory: Arc::new(inventory),
            renderer: Arc::new(renderer),
        }
    }
}
