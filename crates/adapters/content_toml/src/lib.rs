//! # hostbook-adapter-content-toml
//!
//! Loads the inventory page from a TOML file.
//!
//! ## Responsibilities
//! - Implement the `PageSource` port defined in `hostbook-app::ports::source`
//! - Map between the TOML document layout and domain types
//!
//! ## File layout
//! ```toml
//! title = "machine inventory"
//!
//! [[blocks]]
//! type = "prose"
//! text = "this is a basic inventory of our machines."
//!
//! [[blocks]]
//! type = "machine"
//! hostname = "pb1.php.net"
//! address = "216.92.131.4"
//! hardware = "dual p3/1000 xeon, 512MB RAM"
//! aliases = ["lists.php.net", "news.php.net"]
//! contact = [{ text = "ticket system " }, { code = "qs AT pair com" }]
//! ```
//!
//! ## Dependency rule
//! Depends on `hostbook-app` (for port traits) and `hostbook-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod source;

pub use error::ContentError;
pub use source::{TomlPageSource, parse_page};
