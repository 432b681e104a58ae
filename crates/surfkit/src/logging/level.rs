use log::LevelFilter;

/// Verbosity of the graphics stack (wgpu, its HAL and the shader compiler).
///
/// Mirrors the log levels of the native WebGPU implementation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GraphicsLogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl GraphicsLogLevel {
    /// Log targets emitted by the graphics stack.
    pub const TARGETS: &'static [&'static str] = &["wgpu", "wgpu_core", "wgpu_hal", "naga"];

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            GraphicsLogLevel::Off => LevelFilter::Off,
            GraphicsLogLevel::Error => LevelFilter::Error,
            GraphicsLogLevel::Warn => LevelFilter::Warn,
            GraphicsLogLevel::Info => LevelFilter::Info,
            GraphicsLogLevel::Debug => LevelFilter::Debug,
            GraphicsLogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Adds one filter directive per graphics target to `builder`.
    pub(crate) fn apply(self, builder: &mut env_logger::Builder) {
        let filter = self.to_level_filter();
        for target in Self::TARGETS {
            builder.filter_module(target, filter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_one_to_one() {
        assert_eq!(GraphicsLogLevel::Off.to_level_filter(), LevelFilter::Off);
        assert_eq!(GraphicsLogLevel::Info.to_level_filter(), LevelFilter::Info);
        assert_eq!(GraphicsLogLevel::Trace.to_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn default_keeps_wgpu_quiet() {
        assert_eq!(GraphicsLogLevel::default(), GraphicsLogLevel::Warn);
    }
}
