//! Native handle extraction, one extractor per windowing backend.
//!
//! Extractors exist only on targets where their backend can be linked. The
//! runtime query picks the backend; `extract` dispatches to the matching
//! extractor or reports the backend as unsupported.

#[cfg(target_vendor = "apple")]
mod cocoa;
#[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
mod wayland;
#[cfg(windows)]
mod win32;
#[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
mod x11;

use std::ffi::{c_int, c_ulong, c_void};
use std::num::NonZeroIsize;
use std::ptr::NonNull;

#[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
use raw_window_handle::RawDisplayHandle;
#[cfg(any(windows, all(unix, not(target_os = "android"))))]
use raw_window_handle::RawWindowHandle;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::factory::SurfaceFactoryError;
use crate::platform::Backend;

#[cfg(target_vendor = "apple")]
pub use cocoa::attach_compositing_layer;

/// Xlib display connection and window id.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct X11Handles {
    pub display: NonNull<c_void>,
    pub screen: c_int,
    pub window: c_ulong,
}

/// Wayland display and the window's `wl_surface`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WaylandHandles {
    pub display: NonNull<c_void>,
    pub surface: NonNull<c_void>,
}

/// A `CAMetalLayer` installed as the backing layer of a window's content view.
///
/// The view holds the strong reference; this is a plain pointer to it.
#[cfg(target_vendor = "apple")]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LayerHandle(NonNull<c_void>);

#[cfg(target_vendor = "apple")]
impl LayerHandle {
    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

#[cfg(target_vendor = "apple")]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CocoaHandles {
    pub layer: LayerHandle,
}

/// Module handle of the running process and the window's `HWND`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Win32Handles {
    pub hinstance: NonZeroIsize,
    pub hwnd: NonZeroIsize,
}

/// Result of a successful extraction; exactly one backend's handles.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NativeHandleSet {
    X11(X11Handles),
    Wayland(WaylandHandles),
    #[cfg(target_vendor = "apple")]
    Cocoa(CocoaHandles),
    Win32(Win32Handles),
}

impl NativeHandleSet {
    pub fn backend(&self) -> Backend {
        match self {
            NativeHandleSet::X11(_) => Backend::X11,
            NativeHandleSet::Wayland(_) => Backend::Wayland,
            #[cfg(target_vendor = "apple")]
            NativeHandleSet::Cocoa(_) => Backend::Cocoa,
            NativeHandleSet::Win32(_) => Backend::Win32,
        }
    }
}

/// Runs the extractor for `backend` against `window`.
///
/// Only the matching extractor runs. On Cocoa this mutates the window's
/// content view (see [`attach_compositing_layer`]).
pub(crate) fn extract<W>(backend: Backend, window: &W) -> Result<NativeHandleSet, SurfaceFactoryError>
where
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    match backend {
        #[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
        Backend::X11 => x11::extract(window).map(NativeHandleSet::X11),
        #[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
        Backend::Wayland => wayland::extract(window).map(NativeHandleSet::Wayland),
        #[cfg(target_vendor = "apple")]
        Backend::Cocoa => cocoa::extract(window).map(NativeHandleSet::Cocoa),
        #[cfg(windows)]
        Backend::Win32 => win32::extract(window).map(NativeHandleSet::Win32),
        #[allow(unreachable_patterns)]
        other => Err(SurfaceFactoryError::UnsupportedBackend(other)),
    }
}

#[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
fn raw_display<W>(
    window: &W,
    backend: Backend,
) -> Result<RawDisplayHandle, SurfaceFactoryError>
where
    W: HasDisplayHandle + ?Sized,
{
    window
        .display_handle()
        .map(|h| h.as_raw())
        .map_err(|err| {
            log::debug!("{backend}: display handle: {err}");
            SurfaceFactoryError::unavailable(backend, "display")
        })
}

#[cfg(any(windows, all(unix, not(target_os = "android"))))]
fn raw_window<W>(window: &W, backend: Backend) -> Result<RawWindowHandle, SurfaceFactoryError>
where
    W: HasWindowHandle + ?Sized,
{
    window
        .window_handle()
        .map(|h| h.as_raw())
        .map_err(|err| {
            log::debug!("{backend}: window handle: {err}");
            SurfaceFactoryError::unavailable(backend, "window")
        })
}
