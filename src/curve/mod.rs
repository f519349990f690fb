//! 2D curve primitives used to describe a nose cone meridian.

mod arc;
mod boundary;
mod spline;

pub use arc::Arc2;
pub use boundary::BoundaryCurve;
pub use spline::CubicSpline2;
