//! # hostbook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum) with
//! [askama](https://docs.rs/askama) templates.
//!
//! ## Responsibilities
//! - Implement the markup ports (`PageChrome`, `BlockRenderer`) as HTML
//! - Serve the rendered inventory page at `/`
//! - Serve a small **JSON API** (`/api/page`, `/api/machines`, …)
//! - Map application errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `hostbook-app` (for port traits and services) and
//! `hostbook-domain` (for content types). Never leaks axum or askama types
//! into the domain.

pub mod api;
pub mod blocks;
pub mod chrome;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;

use hostbook_app::services::page_renderer::PageRenderer;

use crate::blocks::HtmlBlockRenderer;
use crate::chrome::SiteChrome;
use crate::config::SiteConfig;

/// Page renderer producing a complete HTML document.
pub type HtmlPageRenderer = PageRenderer<SiteChrome, HtmlBlockRenderer>;

/// Build an HTML page renderer from site settings.
#[must_use]
pub fn html_renderer(site: SiteConfig) -> HtmlPageRenderer {
    PageRenderer::new(SiteChrome::new(site), HtmlBlockRenderer)
}
