//! Runtime detection of the native windowing backend.
//!
//! The set of backends that can be served is fixed per target at build time
//! (`Backend::is_compiled_in`). Which one is actually in use is only known once
//! the windowing library has picked a platform, so `current_backend` reads it
//! from the window's display handle.

mod backend;

pub use backend::{current_backend, Backend};
