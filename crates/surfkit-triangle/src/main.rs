//! Draws a single colored triangle into a window whose surface was made by
//! `surfkit::create_window_surface`.

mod runtime;
mod triangle;

use surfkit::device::GpuInit;
use surfkit::logging::{init_logging, GraphicsLogLevel, LoggingConfig};

use runtime::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig {
        graphics_level: GraphicsLogLevel::Info,
        ..Default::default()
    });

    Runtime::run(RuntimeConfig::default(), GpuInit::default())
}
