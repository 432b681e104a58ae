use std::fmt;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};

/// Native windowing system in effect for a window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Backend {
    X11,
    Wayland,
    Cocoa,
    Win32,
    /// Anything the factory has no extractor for (Xcb, web, Android, ...).
    Unsupported,
}

impl Backend {
    /// Backends whose extractors are linked into this build.
    pub const COMPILED_IN: &'static [Backend] = &[
        #[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
        Backend::X11,
        #[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
        Backend::Wayland,
        #[cfg(target_vendor = "apple")]
        Backend::Cocoa,
        #[cfg(windows)]
        Backend::Win32,
    ];

    /// Returns `true` if this backend can be served on the current target.
    ///
    /// `Unsupported` is never compiled in.
    pub fn is_compiled_in(self) -> bool {
        Self::COMPILED_IN.contains(&self)
    }

    /// Maps a raw display handle to the backend it belongs to.
    pub fn from_raw_display(raw: RawDisplayHandle) -> Self {
        match raw {
            RawDisplayHandle::Xlib(_) => Backend::X11,
            RawDisplayHandle::Wayland(_) => Backend::Wayland,
            RawDisplayHandle::AppKit(_) => Backend::Cocoa,
            RawDisplayHandle::Windows(_) => Backend::Win32,
            _ => Backend::Unsupported,
        }
    }

    /// Maps a raw window handle to the backend it belongs to.
    pub fn from_raw_window(raw: RawWindowHandle) -> Self {
        match raw {
            RawWindowHandle::Xlib(_) => Backend::X11,
            RawWindowHandle::Wayland(_) => Backend::Wayland,
            RawWindowHandle::AppKit(_) => Backend::Cocoa,
            RawWindowHandle::Win32(_) => Backend::Win32,
            _ => Backend::Unsupported,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::X11 => "x11",
            Backend::Wayland => "wayland",
            Backend::Cocoa => "cocoa",
            Backend::Win32 => "win32",
            Backend::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the windowing backend that owns `window`.
///
/// The display handle decides. If the windowing library cannot hand one out,
/// the kind of the window handle is used instead, so a window with a missing
/// display connection is still attributed to its backend and fails during
/// extraction. Never fails: unknown kinds yield [`Backend::Unsupported`].
pub fn current_backend<W>(window: &W) -> Backend
where
    W: HasDisplayHandle + HasWindowHandle + ?Sized,
{
    let backend = match window.display_handle() {
        Ok(handle) => Backend::from_raw_display(handle.as_raw()),
        Err(display_err) => match window.window_handle() {
            Ok(handle) => Backend::from_raw_window(handle.as_raw()),
            Err(window_err) => {
                log::debug!("no native handles: display: {display_err}, window: {window_err}");
                Backend::Unsupported
            }
        },
    };

    log::debug!("detected windowing backend: {backend}");
    backend
}
