use std::fmt;

use crate::source::SurfaceDescriptor;

/// Graphics-API object able to turn a [`SurfaceDescriptor`] into a surface.
///
/// Implemented for `wgpu::Instance`. The factory only talks to this trait, so
/// the instance's own error is passed through as-is.
pub trait SurfaceInstance {
    /// Surface type produced; `'w` is the borrow of the source window.
    type Surface<'w>;

    /// Rejection reported by the instance.
    type Error: fmt::Display;

    /// Creates a surface from the handles in `descriptor`.
    ///
    /// # Safety
    ///
    /// Every native handle referenced by `descriptor` must stay valid for as
    /// long as the returned surface lives (`'w`).
    unsafe fn create_surface_from_source<'w>(
        &self,
        descriptor: &SurfaceDescriptor<'_>,
    ) -> Result<Self::Surface<'w>, Self::Error>;
}

impl SurfaceInstance for wgpu::Instance {
    type Surface<'w> = wgpu::Surface<'w>;
    type Error = wgpu::CreateSurfaceError;

    unsafe fn create_surface_from_source<'w>(
        &self,
        descriptor: &SurfaceDescriptor<'_>,
    ) -> Result<wgpu::Surface<'w>, wgpu::CreateSurfaceError> {
        let source = descriptor.source();
        log::debug!(
            "creating wgpu surface {:?} from {} handles",
            descriptor.label().unwrap_or("<unlabeled>"),
            source.backend()
        );

        let surface = unsafe { self.create_surface_unsafe(source.to_wgpu_target()) }?;
        Ok(surface)
    }
}
