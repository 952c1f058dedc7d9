//! # hostbook-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PageChrome` — shared header/footer markup around every page
//!   - `BlockRenderer` — markup for a single prose or machine block
//!   - `PageSource` — where the page content comes from
//! - Define **driving/inbound** use-cases:
//!   - `PageRenderer` — header, blocks in order, footer
//!   - `InventoryService` — load, validate and query the current page
//! - Provide **in-process infrastructure** (`StaticPageSource`) that needs no IO
//!
//! ## Dependency rule
//! Depends on `hostbook-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod static_source;
