//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod machines;
#[allow(clippy::missing_errors_doc)]
pub mod page;

use axum::Router;
use axum::routing::get;

use hostbook_app::ports::{BlockRenderer, PageChrome, PageSource};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, C, B>() -> Router<AppState<S, C, B>>
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    Router::new()
        .route("/page", get(page::get::<S, C, B>))
        .route("/machines", get(machines::list::<S, C, B>))
        .route("/machines/{hostname}", get(machines::get::<S, C, B>))
}
