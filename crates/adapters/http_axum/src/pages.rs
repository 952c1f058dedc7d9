//! HTML page handlers.

use axum::extract::State;
use axum::response::Html;

use hostbook_app::ports::{BlockRenderer, PageChrome, PageSource};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /` — the full inventory page.
pub async fn index<S, C, B>(State(state): State<AppState<S, C, B>>) -> Result<Html<String>, ApiError>
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    let page = state.inventory.current_page().await?;
    let html = state.renderer.render(&page)?;
    Ok(Html(html))
}
