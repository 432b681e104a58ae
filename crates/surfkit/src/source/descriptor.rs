use std::ffi::{c_int, c_ulong, c_void};
use std::num::NonZeroIsize;
use std::ptr::NonNull;

use raw_window_handle::{
    RawDisplayHandle, RawWindowHandle, WaylandDisplayHandle, WaylandWindowHandle,
    Win32WindowHandle, WindowsDisplayHandle, XlibDisplayHandle, XlibWindowHandle,
};

#[cfg(target_vendor = "apple")]
use crate::native::LayerHandle;
use crate::native::NativeHandleSet;
use crate::platform::Backend;

/// Native handles a surface is created from, tagged by backend.
///
/// Variants follow the surface-source kinds of the WebGPU API.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceSource {
    XlibWindow {
        display: NonNull<c_void>,
        screen: c_int,
        window: c_ulong,
    },
    WaylandSurface {
        display: NonNull<c_void>,
        surface: NonNull<c_void>,
    },
    #[cfg(target_vendor = "apple")]
    MetalLayer { layer: LayerHandle },
    WindowsHwnd {
        hinstance: NonZeroIsize,
        hwnd: NonZeroIsize,
    },
}

impl SurfaceSource {
    /// Backend whose handles this source carries.
    pub fn backend(&self) -> Backend {
        match self {
            SurfaceSource::XlibWindow { .. } => Backend::X11,
            SurfaceSource::WaylandSurface { .. } => Backend::Wayland,
            #[cfg(target_vendor = "apple")]
            SurfaceSource::MetalLayer { .. } => Backend::Cocoa,
            SurfaceSource::WindowsHwnd { .. } => Backend::Win32,
        }
    }

    /// Lowers this source to wgpu's raw surface target.
    ///
    /// The target holds the same raw pointers; it does not extend their
    /// lifetime.
    pub fn to_wgpu_target(&self) -> wgpu::SurfaceTargetUnsafe {
        match *self {
            SurfaceSource::XlibWindow {
                display,
                screen,
                window,
            } => wgpu::SurfaceTargetUnsafe::RawHandle {
                raw_display_handle: RawDisplayHandle::Xlib(XlibDisplayHandle::new(
                    Some(display),
                    screen,
                )),
                raw_window_handle: RawWindowHandle::Xlib(XlibWindowHandle::new(window)),
            },

            SurfaceSource::WaylandSurface { display, surface } => {
                wgpu::SurfaceTargetUnsafe::RawHandle {
                    raw_display_handle: RawDisplayHandle::Wayland(WaylandDisplayHandle::new(
                        display,
                    )),
                    raw_window_handle: RawWindowHandle::Wayland(WaylandWindowHandle::new(
                        surface,
                    )),
                }
            }

            #[cfg(target_vendor = "apple")]
            SurfaceSource::MetalLayer { layer } => {
                wgpu::SurfaceTargetUnsafe::CoreAnimationLayer(layer.as_ptr())
            }

            SurfaceSource::WindowsHwnd { hinstance, hwnd } => {
                let mut handle = Win32WindowHandle::new(hwnd);
                handle.hinstance = Some(hinstance);
                wgpu::SurfaceTargetUnsafe::RawHandle {
                    raw_display_handle: RawDisplayHandle::Windows(WindowsDisplayHandle::new()),
                    raw_window_handle: RawWindowHandle::Win32(handle),
                }
            }
        }
    }
}

impl From<NativeHandleSet> for SurfaceSource {
    fn from(handles: NativeHandleSet) -> Self {
        match handles {
            NativeHandleSet::X11(h) => SurfaceSource::XlibWindow {
                display: h.display,
                screen: h.screen,
                window: h.window,
            },
            NativeHandleSet::Wayland(h) => SurfaceSource::WaylandSurface {
                display: h.display,
                surface: h.surface,
            },
            #[cfg(target_vendor = "apple")]
            NativeHandleSet::Cocoa(h) => SurfaceSource::MetalLayer { layer: h.layer },
            NativeHandleSet::Win32(h) => SurfaceSource::WindowsHwnd {
                hinstance: h.hinstance,
                hwnd: h.hwnd,
            },
        }
    }
}

/// Request passed to a graphics instance to create a surface.
///
/// Borrows its source, so the payload stays in place for the whole creation
/// call.
#[derive(Debug, Copy, Clone)]
pub struct SurfaceDescriptor<'a> {
    label: Option<&'a str>,
    source: &'a SurfaceSource,
}

impl<'a> SurfaceDescriptor<'a> {
    pub fn new(source: &'a SurfaceSource) -> Self {
        Self {
            label: None,
            source,
        }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn label(&self) -> Option<&'a str> {
        self.label
    }

    pub fn source(&self) -> &'a SurfaceSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{WaylandHandles, Win32Handles, X11Handles};

    fn ptr(addr: usize) -> NonNull<c_void> {
        NonNull::new(addr as *mut c_void).unwrap()
    }

    #[test]
    fn x11_handles_become_xlib_source() {
        let set = NativeHandleSet::X11(X11Handles {
            display: ptr(0xAAAA),
            screen: 0,
            window: 42,
        });

        let source = SurfaceSource::from(set);
        assert_eq!(source.backend(), Backend::X11);
        assert_eq!(
            source,
            SurfaceSource::XlibWindow {
                display: ptr(0xAAAA),
                screen: 0,
                window: 42,
            }
        );
    }

    #[test]
    fn source_tag_follows_handle_set() {
        let sets = [
            NativeHandleSet::Wayland(WaylandHandles {
                display: ptr(0x10),
                surface: ptr(0x20),
            }),
            NativeHandleSet::Win32(Win32Handles {
                hinstance: NonZeroIsize::new(0x400000).unwrap(),
                hwnd: NonZeroIsize::new(0x99).unwrap(),
            }),
        ];

        for set in sets {
            assert_eq!(SurfaceSource::from(set).backend(), set.backend());
        }
    }

    #[test]
    fn xlib_target_carries_display_and_window() {
        let source = SurfaceSource::XlibWindow {
            display: ptr(0xAAAA),
            screen: 1,
            window: 42,
        };

        let wgpu::SurfaceTargetUnsafe::RawHandle {
            raw_display_handle: RawDisplayHandle::Xlib(display),
            raw_window_handle: RawWindowHandle::Xlib(window),
            ..
        } = source.to_wgpu_target()
        else {
            panic!("expected an Xlib raw handle target");
        };

        assert_eq!(display.display, Some(ptr(0xAAAA)));
        assert_eq!(display.screen, 1);
        assert_eq!(window.window, 42);
    }

    #[test]
    fn win32_target_keeps_hinstance() {
        let source = SurfaceSource::WindowsHwnd {
            hinstance: NonZeroIsize::new(0x400000).unwrap(),
            hwnd: NonZeroIsize::new(0x99).unwrap(),
        };

        let wgpu::SurfaceTargetUnsafe::RawHandle {
            raw_window_handle: RawWindowHandle::Win32(handle),
            ..
        } = source.to_wgpu_target()
        else {
            panic!("expected a Win32 raw handle target");
        };

        assert_eq!(handle.hwnd.get(), 0x99);
        assert_eq!(handle.hinstance.map(NonZeroIsize::get), Some(0x400000));
    }

    #[test]
    fn descriptor_borrows_source() {
        let source = SurfaceSource::WaylandSurface {
            display: ptr(0x10),
            surface: ptr(0x20),
        };

        let descriptor = SurfaceDescriptor::new(&source).with_label("main");
        assert_eq!(descriptor.label(), Some("main"));
        assert!(std::ptr::eq(descriptor.source(), &source));
    }
}
