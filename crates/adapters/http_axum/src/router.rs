//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hostbook_app::ports::{BlockRenderer, PageChrome, PageSource};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the HTML page at `/` and the JSON API under `/api`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, C, B>(state: AppState<S, C, B>) -> Router
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::pages::index::<S, C, B>))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
