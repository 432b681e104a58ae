//! Tagged surface sources and the descriptor handed to the graphics instance.

mod descriptor;

pub use descriptor::{SurfaceDescriptor, SurfaceSource};
