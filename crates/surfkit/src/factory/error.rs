use thiserror::Error;

use crate::platform::Backend;

/// Why a window surface could not be produced.
///
/// These never cross the public boundary as values: `create_window_surface`
/// logs them and returns `None`.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SurfaceFactoryError {
    #[error("windowing backend `{0}` has no surface extractor in this build")]
    UnsupportedBackend(Backend),

    #[error("{backend}: native handle `{handle}` is unavailable")]
    NativeHandleUnavailable {
        backend: Backend,
        handle: &'static str,
    },

    #[error("{backend}: graphics instance rejected the surface: {reason}")]
    SurfaceCreationRejected { backend: Backend, reason: String },
}

impl SurfaceFactoryError {
    pub(crate) fn unavailable(backend: Backend, handle: &'static str) -> Self {
        Self::NativeHandleUnavailable { backend, handle }
    }
}
