//! JSON handler for the whole page.

use axum::Json;
use axum::extract::State;

use hostbook_app::ports::{BlockRenderer, PageChrome, PageSource};
use hostbook_domain::page::Page;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/page` — title and blocks in page order.
pub async fn get<S, C, B>(State(state): State<AppState<S, C, B>>) -> Result<Json<Page>, ApiError>
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    let page = state.inventory.current_page().await?;
    Ok(Json(page))
}
