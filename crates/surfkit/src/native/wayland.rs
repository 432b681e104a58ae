use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};

use super::{raw_display, raw_window, WaylandHandles};
use crate::factory::SurfaceFactoryError;
use crate::platform::Backend;

/// Reads the `wl_display` and `wl_surface` of `window`.
pub(super) fn extract<W>(window: &W) -> Result<WaylandHandles, SurfaceFactoryError>
where
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    let RawDisplayHandle::Wayland(display) = raw_display(window, Backend::Wayland)? else {
        return Err(SurfaceFactoryError::unavailable(Backend::Wayland, "display"));
    };
    let RawWindowHandle::Wayland(surface) = raw_window(window, Backend::Wayland)? else {
        return Err(SurfaceFactoryError::unavailable(Backend::Wayland, "window"));
    };

    Ok(WaylandHandles {
        display: display.display,
        surface: surface.surface,
    })
}
