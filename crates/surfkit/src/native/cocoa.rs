use std::ffi::c_void;
use std::ptr::NonNull;

use objc2::MainThreadMarker;
use objc2_app_kit::NSView;
use objc2_quartz_core::{CALayer, CAMetalLayer};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};

use super::{raw_window, CocoaHandles, LayerHandle};
use crate::factory::SurfaceFactoryError;
use crate::platform::Backend;

/// Installs a fresh compositing layer on the window's content view.
///
/// Unlike the other extractors this is not a read: the view owned by the
/// windowing library is modified. Off the main thread nothing is touched and
/// the content view is reported unavailable under the `"main thread"` label.
pub(super) fn extract<W>(window: &W) -> Result<CocoaHandles, SurfaceFactoryError>
where
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    if MainThreadMarker::new().is_none() {
        log::error!("cocoa: surface creation must run on the main thread");
        return Err(SurfaceFactoryError::unavailable(Backend::Cocoa, "main thread"));
    }

    let RawWindowHandle::AppKit(handle) = raw_window(window, Backend::Cocoa)? else {
        return Err(SurfaceFactoryError::unavailable(Backend::Cocoa, "ns_view"));
    };

    // SAFETY: `ns_view` is the live content view of `window`, which the caller
    // keeps borrowed, and we are on the main thread.
    let layer = unsafe { attach_compositing_layer(handle.ns_view) };

    Ok(CocoaHandles { layer })
}

/// Creates a `CAMetalLayer` and makes it the backing layer of `view`.
///
/// Call once per window. The view keeps the layer alive. Calling this again
/// on the same view installs another layer in place of the first; the
/// previous one is released by the view, and any surface created from it
/// stops presenting.
///
/// # Safety
///
/// `view` must point to a live `NSView` and the call must happen on the main
/// thread.
pub unsafe fn attach_compositing_layer(view: NonNull<c_void>) -> LayerHandle {
    let view: &NSView = unsafe { view.cast::<NSView>().as_ref() };
    let layer = CAMetalLayer::new();
    let backing: &CALayer = &layer;

    unsafe {
        view.setWantsLayer(true);
        view.setLayer(Some(backing));
    }

    log::debug!("cocoa: attached CAMetalLayer {:p} to content view", backing);
    LayerHandle(NonNull::from(backing).cast())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWindow;

    // Test threads are never the main thread, so the view below is never
    // dereferenced.
    #[test]
    fn off_main_thread_leaves_view_untouched() {
        let window = FakeWindow::appkit(NonNull::dangling());

        assert_eq!(
            extract(&window),
            Err(SurfaceFactoryError::unavailable(Backend::Cocoa, "main thread"))
        );
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn second_attach_replaces_the_backing_layer() {
        // SAFETY: the view is private to this test and never shown.
        let mtm = unsafe { MainThreadMarker::new_unchecked() };
        let view = NSView::new(mtm);
        let view_ptr = NonNull::from(&*view).cast::<c_void>();

        let first = unsafe { attach_compositing_layer(view_ptr) };
        let second = unsafe { attach_compositing_layer(view_ptr) };
        assert_ne!(first, second);

        let current = unsafe { view.layer() }.expect("backing layer");
        assert_eq!(
            objc2::rc::Retained::as_ptr(&current) as *mut c_void,
            second.as_ptr()
        );
    }
}
