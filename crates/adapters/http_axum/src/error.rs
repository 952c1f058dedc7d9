//! Template error wrapping and HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hostbook_domain::error::HostbookError;

/// Errors originating from template rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed")]
    Template(#[from] askama::Error),
}

impl From<RenderError> for HostbookError {
    fn from(err: RenderError) -> Self {
        Self::Render(Box::new(err))
    }
}

/// Render a template, mapping failures into [`HostbookError::Render`].
pub(crate) fn render(template: &impl askama::Template) -> Result<String, HostbookError> {
    template
        .render()
        .map_err(|err| RenderError::from(err).into())
}

/// Render a block-level template that is concatenated with its neighbours.
///
/// askama drops the final newline of a template file, so it is put back
/// here to keep each block on its own lines.
pub(crate) fn render_block(template: &impl askama::Template) -> Result<String, HostbookError> {
    let mut html = render(template)?;
    html.push('\n');
    Ok(html)
}

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HostbookError`] to an HTTP response with appropriate status code.
pub struct ApiError(HostbookError);

impl From<HostbookError> for ApiError {
    fn from(err: HostbookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HostbookError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HostbookError::Validation(err) => {
                tracing::error!(error = %err, "invalid page content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "invalid page content".to_string(),
                )
            }
            HostbookError::Source(err) => {
                tracing::error!(error = %err, "content source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            HostbookError::Render(err) => {
                tracing::error!(error = %err, "render error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
