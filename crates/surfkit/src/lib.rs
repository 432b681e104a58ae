//! surfkit: window surfaces for wgpu from native window handles.
//!
//! The core is [`create_window_surface`]: it detects the windowing backend of
//! a window (X11, Wayland, Cocoa or Win32), extracts that backend's native
//! handles and asks a graphics instance to build a surface from them.
//! `device` and `logging` are glue for applications driving that surface.

pub mod platform;
pub mod native;
pub mod source;
pub mod factory;

pub mod device;
pub mod logging;

#[cfg(test)]
mod testing;

pub use factory::{create_window_surface, SurfaceFactoryError, SurfaceInstance};
pub use platform::{current_backend, Backend};
pub use source::{SurfaceDescriptor, SurfaceSource};
