use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};

use super::{raw_display, raw_window, X11Handles};
use crate::factory::SurfaceFactoryError;
use crate::platform::Backend;

/// Reads the Xlib display connection and window id of `window`.
pub(super) fn extract<W>(window: &W) -> Result<X11Handles, SurfaceFactoryError>
where
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    let RawDisplayHandle::Xlib(display) = raw_display(window, Backend::X11)? else {
        return Err(SurfaceFactoryError::unavailable(Backend::X11, "display"));
    };
    let Some(display_ptr) = display.display else {
        return Err(SurfaceFactoryError::unavailable(Backend::X11, "display"));
    };

    let RawWindowHandle::Xlib(xlib) = raw_window(window, Backend::X11)? else {
        return Err(SurfaceFactoryError::unavailable(Backend::X11, "window"));
    };
    // 0 is `None` in Xlib.
    if xlib.window == 0 {
        return Err(SurfaceFactoryError::unavailable(Backend::X11, "window"));
    }

    Ok(X11Handles {
        display: display_ptr,
        screen: display.screen,
        window: xlib.window,
    })
}
