//! JSON REST handlers for machines.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use hostbook_app::ports::{BlockRenderer, PageChrome, PageSource};
use hostbook_domain::machine::Machine;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Machine>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Machine>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/machines` — all machines in page order.
pub async fn list<S, C, B>(
    State(state): State<AppState<S, C, B>>,
) -> Result<ListResponse, ApiError>
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    let machines = state.inventory.list_machines().await?;
    Ok(ListResponse::Ok(Json(machines)))
}

/// `GET /api/machines/{hostname}` — a single machine.
pub async fn get<S, C, B>(
    State(state): State<AppState<S, C, B>>,
    Path(hostname): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: PageSource + Send + Sync + 'static,
    C: PageChrome + Send + Sync + 'static,
    B: BlockRenderer + Send + Sync + 'static,
{
    let machine = state.inventory.get_machine(&hostname).await?;
    Ok(GetResponse::Ok(Json(machine)))
}
