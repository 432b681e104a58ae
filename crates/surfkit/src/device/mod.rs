//! GPU device glue around a factory-made surface.
//!
//! This module is responsible for:
//! - requesting the adapter/device/queue compatible with a window surface
//! - configuring the surface (swapchain) and reacting to surface errors
//! - polling the device between frames

mod gpu;
mod poll;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
pub use poll::tick_device;
