//! Blunted tangent ogive: tangent geometry, virtual-length search and curve assembly.

mod assembly;
mod params;
mod search;
pub mod tangent;

pub use assembly::{build_curve, sample_ogive};
pub use params::GeometryParameters;
pub use search::{SearchOptions, SolvedBlunting, constraint, search_bracket, solve_blunting};
