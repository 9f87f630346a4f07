//! Custom per-type encode and decode functions.
//!
//! - [`CodecRegistry`]: an owned table, built by the caller. Tests and tools
//!   use their own instance.
//! - The process-wide registry: [`initialize`], [`shutdown`],
//!   [`register_codec`] and [`with_registry`]. The free functions of
//!   [`ser`](crate::ser) and [`de`](crate::de) go through it.

// -----------------------------------------------------------------------------
// Modules

mod codec_registry;
mod global;

// -----------------------------------------------------------------------------
// Exports

pub use codec_registry::{CodecRegistry, DecodeFn, EncodeFn};
pub use global::{initialize, is_initialized, register_codec, shutdown};
pub use global::{try_initialize, try_shutdown, try_with_registry};
pub use global::{with_registry, with_registry_mut};
