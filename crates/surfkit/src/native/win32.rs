use std::num::NonZeroIsize;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;

use super::{raw_window, Win32Handles};
use crate::factory::SurfaceFactoryError;
use crate::platform::Backend;

/// Reads the process module handle and the window's `HWND`.
pub(super) fn extract<W>(window: &W) -> Result<Win32Handles, SurfaceFactoryError>
where
    W: HasWindowHandle + HasDisplayHandle + ?Sized,
{
    let RawWindowHandle::Win32(handle) = raw_window(window, Backend::Win32)? else {
        return Err(SurfaceFactoryError::unavailable(Backend::Win32, "hwnd"));
    };

    // SAFETY: a null module name returns the handle of the running executable.
    let module = unsafe { GetModuleHandleW(std::ptr::null()) };
    let hinstance = NonZeroIsize::new(module as isize)
        .or(handle.hinstance)
        .ok_or_else(|| SurfaceFactoryError::unavailable(Backend::Win32, "hinstance"))?;

    Ok(Win32Handles {
        hinstance,
        hwnd: handle.hwnd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWindow;

    #[test]
    fn reads_module_and_window_handles() {
        let handles = extract(&FakeWindow::win32(0x4242)).unwrap();
        assert_eq!(handles.hwnd.get(), 0x4242);
        assert_ne!(handles.hinstance.get(), 0);
    }
}
