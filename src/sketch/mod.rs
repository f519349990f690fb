//! Filled 2D regions built from closed profile outlines.

mod measure;
#[allow(clippy::module_inception)]
mod sketch;

pub use sketch::Sketch;
