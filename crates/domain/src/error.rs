//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HostbookError`] via `From` at the port boundary.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum HostbookError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The page content could not be loaded.
    #[error("content source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A markup collaborator failed to produce output.
    #[error("render error")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Broken content invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("page title must not be empty")]
    EmptyTitle,

    #[error("machine hostname must not be empty")]
    EmptyHostname,

    #[error("machine {hostname} has an empty address")]
    EmptyAddress { hostname: String },

    #[error("machine {hostname} has an empty alias")]
    EmptyAlias { hostname: String },

    #[error("hostname {0} appears more than once")]
    DuplicateHostname(String),
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
