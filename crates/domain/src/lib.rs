//! # hostbook-domain
//!
//! Pure domain model for the hostbook machine inventory.
//!
//! ## Responsibilities
//! - Define **Machines** (physical hosts with hardware, aliases, notes and a contact)
//! - Define **Pages** (a title plus an ordered list of prose and machine blocks)
//! - Define **Rich text** (inline text, monospace and link fragments)
//! - Enforce content invariants (non-empty names, unique hostnames)
//! - Ship the built-in inventory catalog
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod catalog;
pub mod error;
pub mod machine;
pub mod page;
pub mod text;
