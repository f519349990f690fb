//! Meridian profiles of **blunted tangent ogive** nose cones.
//!
//! A tangent ogive of base radius `R` and length `L` is blunted by a spherical cap of
//! radius `r` that meets the ogive tangentially. The cap pushes the tip back, so the
//! ogive the cap sits on has to be longer than `L`; its length is found by bisection
//! ([`ogive::solve_blunting`]). The result is a [`curve::BoundaryCurve`]: an [`Arc2`]
//! for the cap followed by a [`CubicSpline2`] through the sampled ogive.
//!
//! [`NoseCone`] combines outer and inner curves into solid, hollow and capped
//! variants, each with or without a shoulder, and closes them into a cross-section
//! [`Sketch`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export sketches to SVG
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to build many profiles at once
//! - **serde**: serialize nose definitions and search options

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod curve;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod nose;
pub mod ogive;
pub mod sketch;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use curve::{Arc2, BoundaryCurve, CubicSpline2};
pub use errors::{GeometryError, Result};
pub use float_types::Real;
pub use nose::{NoseCone, NoseProfile, NoseStyle, Shoulder, build_profiles};
pub use ogive::{GeometryParameters, SearchOptions, SolvedBlunting, build_curve, solve_blunting};
pub use sketch::Sketch;
pub use traits::Tessellate;

#[cfg(feature = "parallel")]
pub use nose::build_profiles_par;
