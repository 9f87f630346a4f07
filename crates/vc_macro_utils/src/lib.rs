//! Provide some tools for proc-macro crates.
//!
//! - [`Manifest`]: resolves the path under which the invoking crate can
//!   reach `vc_reflect`, directly or through the `vc_persist` facade.
#![allow(clippy::std_instead_of_core, reason = "proc-macro crate")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro crate")]

// -----------------------------------------------------------------------------
// Modules

mod manifest;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
