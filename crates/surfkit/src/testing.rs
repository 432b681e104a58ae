//! Fake windows for unit tests.

use std::ffi::{c_ulong, c_void};
use std::num::NonZeroIsize;
use std::ptr::NonNull;

use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WaylandDisplayHandle, WaylandWindowHandle, WebDisplayHandle,
    WebWindowHandle, Win32WindowHandle, WindowHandle, WindowsDisplayHandle, XlibDisplayHandle,
    XlibWindowHandle,
};

/// A window whose raw handles are made up. `None` means the windowing library
/// reports the handle as unavailable.
#[derive(Debug, Copy, Clone)]
pub(crate) struct FakeWindow {
    pub display: Option<RawDisplayHandle>,
    pub window: Option<RawWindowHandle>,
}

fn ptr(addr: usize) -> Option<NonNull<c_void>> {
    NonNull::new(addr as *mut c_void)
}

impl FakeWindow {
    /// Xlib window; a zero `display` is a null connection.
    pub fn xlib(display: usize, window: c_ulong) -> Self {
        Self {
            display: Some(RawDisplayHandle::Xlib(XlibDisplayHandle::new(ptr(display), 0))),
            window: Some(RawWindowHandle::Xlib(XlibWindowHandle::new(window))),
        }
    }

    /// Wayland window; zero addresses become unavailable handles.
    pub fn wayland(display: usize, surface: usize) -> Self {
        Self {
            display: ptr(display)
                .map(|d| RawDisplayHandle::Wayland(WaylandDisplayHandle::new(d))),
            window: ptr(surface)
                .map(|s| RawWindowHandle::Wayland(WaylandWindowHandle::new(s))),
        }
    }

    pub fn win32(hwnd: isize) -> Self {
        Self {
            display: Some(RawDisplayHandle::Windows(WindowsDisplayHandle::new())),
            window: NonZeroIsize::new(hwnd)
                .map(|h| RawWindowHandle::Win32(Win32WindowHandle::new(h))),
        }
    }

    /// AppKit window whose content view lives at `ns_view`.
    #[cfg(target_vendor = "apple")]
    pub fn appkit(ns_view: NonNull<c_void>) -> Self {
        use raw_window_handle::{AppKitDisplayHandle, AppKitWindowHandle};

        Self {
            display: Some(RawDisplayHandle::AppKit(AppKitDisplayHandle::new())),
            window: Some(RawWindowHandle::AppKit(AppKitWindowHandle::new(ns_view))),
        }
    }

    /// A canvas window: a backend the factory never serves.
    pub fn web() -> Self {
        Self {
            display: Some(RawDisplayHandle::Web(WebDisplayHandle::new())),
            window: Some(RawWindowHandle::Web(WebWindowHandle::new(1))),
        }
    }
}

impl HasWindowHandle for FakeWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        let raw = self.window.ok_or(HandleError::Unavailable)?;
        // SAFETY: fake handles are never dereferenced by the code under test.
        Ok(unsafe { WindowHandle::borrow_raw(raw) })
    }
}

impl HasDisplayHandle for FakeWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        let raw = self.display.ok_or(HandleError::Unavailable)?;
        // SAFETY: see `window_handle`.
        Ok(unsafe { DisplayHandle::borrow_raw(raw) })
    }
}
