//! Window surface factory.
//!
//! Single entry point: [`create_window_surface`]. It queries the windowing
//! backend, extracts the native handles for it, wraps them in a
//! [`SurfaceSource`](crate::source::SurfaceSource) and asks the graphics
//! instance for a surface. Every failure ends in `None`; the reason is logged.

mod error;
mod instance;

pub use error::SurfaceFactoryError;
pub use instance::SurfaceInstance;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::native;
use crate::platform::current_backend;
use crate::source::{SurfaceDescriptor, SurfaceSource};

const SURFACE_LABEL: &str = "surfkit window surface";

/// Creates a presentable surface for `window`.
///
/// Returns `None` when the backend is unsupported (or not built in), when a
/// native handle is missing, or when the instance rejects the surface. The
/// call is single shot: callers should treat `None` as fatal for this window.
///
/// Must run on the thread the windowing library requires for native handle
/// access (the main thread on macOS). On macOS this installs a new
/// `CAMetalLayer` on the window's content view every time it is called.
pub fn create_window_surface<'w, I, W>(instance: &I, window: &'w W) -> Option<I::Surface<'w>>
where
    I: SurfaceInstance + ?Sized,
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    match try_create_window_surface(instance, window) {
        Ok(surface) => Some(surface),
        Err(err) => {
            log::error!("failed to create window surface: {err}");
            None
        }
    }
}

pub(crate) fn try_create_window_surface<'w, I, W>(
    instance: &I,
    window: &'w W,
) -> Result<I::Surface<'w>, SurfaceFactoryError>
where
    I: SurfaceInstance + ?Sized,
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    let backend = current_backend(window);
    if !backend.is_compiled_in() {
        return Err(SurfaceFactoryError::UnsupportedBackend(backend));
    }

    let handles = native::extract(backend, window)?;
    debug_assert_eq!(handles.backend(), backend);

    let source = SurfaceSource::from(handles);
    let descriptor = SurfaceDescriptor::new(&source).with_label(SURFACE_LABEL);

    // SAFETY: the handles in `source` belong to `window`, which stays borrowed
    // for `'w`, the lifetime of the returned surface.
    let surface = unsafe { instance.create_surface_from_source(&descriptor) }.map_err(|err| {
        SurfaceFactoryError::SurfaceCreationRejected {
            backend,
            reason: err.to_string(),
        }
    })?;

    log::info!("created window surface ({backend})");
    Ok(surface)
}
