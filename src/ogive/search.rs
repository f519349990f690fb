//! Bisection for the virtual length of a blunted ogive.

use crate::errors::{GeometryError, Result};
use crate::float_types::{DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION, Real};
use crate::ogive::params::validate_shape;
use crate::ogive::tangent::{
    apex_offset, generating_radius, tangent_circle_apex, tangent_x, tangent_y,
};
use log::{debug, trace};
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Termination settings for [`solve_blunting`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOptions {
    /// Stop once the bracket is no wider than this.
    pub precision: Real,
    /// Give up with [`GeometryError::NonConvergence`] after this many halvings.
    pub max_iterations: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Tangent construction of a blunted ogive at one virtual length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolvedBlunting {
    /// Generating circle radius of the virtual ogive.
    pub rho: Real,
    /// Length of the sharp ogive the blunted nose is cut from.
    pub virtual_length: Real,
    /// `(Xt, Yt)`, where the blunting arc meets the ogive.
    pub tangent_point: Point2<Real>,
    /// `Xo`, center of the blunting circle on the axis.
    pub apex: Real,
    /// `Xa = Xo − tip_radius`, leading point of the blunting circle.
    pub apex_offset: Real,
    /// Bisection steps taken; 0 when built directly with [`SolvedBlunting::at`].
    pub iterations: usize,
}

impl SolvedBlunting {
    /// Evaluates the whole tangent construction for a trial virtual length.
    pub fn at(virtual_length: Real, radius: Real, tip_radius: Real) -> Result<Self> {
        let rho = generating_radius(radius, virtual_length)?;
        let apex = tangent_circle_apex(rho, virtual_length, radius, tip_radius)?;
        let yt = tangent_y(rho, radius, tip_radius)?;
        let xt = tangent_x(apex, yt, tip_radius)?;
        Ok(SolvedBlunting {
            rho,
            virtual_length,
            tangent_point: Point2::new(xt, yt),
            apex,
            apex_offset: apex_offset(apex, tip_radius),
            iterations: 0,
        })
    }

    /// Axial length the blunted nose has when cut from this virtual ogive.
    pub fn blunted_length(&self) -> Real {
        self.virtual_length - self.apex_offset
    }
}

/// Initial bracket `[length − r, R·L / (R − r)]` for the virtual length.
pub fn search_bracket(length: Real, radius: Real, tip_radius: Real) -> (Real, Real) {
    let min = length - tip_radius;
    let max = (-radius * length) / (tip_radius - radius);
    (min, max)
}

/// Signed residual `f(mid) = (length + Xa(mid)) − mid`.
///
/// Positive means the trial ogive is too short and the search moves up. `f`
/// changes sign exactly once over [`search_bracket`].
pub fn constraint(length: Real, radius: Real, tip_radius: Real, mid: Real) -> Result<Real> {
    let rho = generating_radius(radius, mid)?;
    let apex = tangent_circle_apex(rho, mid, radius, tip_radius)?;
    Ok(length + apex_offset(apex, tip_radius) - mid)
}

/// **Mathematical Foundation: Blunting-Length Bisection**
///
/// Blunting removes `Xa` from the front of a sharp ogive, so the ogive that yields
/// a blunted nose of `length` must itself be longer. There is no closed form for
/// that virtual length `V`; it is the root of
/// ```text
/// f(V) = length + Xa(V) − V
/// ```
/// where `Xa(V)` comes from [`tangent_circle_apex`] applied to the generating
/// circle of `(radius, V)`. `f` is positive below the root and negative above it,
/// so plain bisection over [`search_bracket`] converges.
///
/// Trial lengths so short that the blunting circle cannot touch the generating
/// circle (the apex operand goes negative) sit below the root and are treated as
/// "too short".
///
/// The returned construction is re-evaluated at the midpoint of the final bracket.
///
/// # Errors
/// - [`GeometryError::InvalidParameter`] unless `length ≥ radius > 0` and
///   `0 < tip_radius < radius`.
/// - [`GeometryError::NonConvergence`] if the bracket is still wider than
///   `options.precision` after `options.max_iterations` steps, or stops shrinking.
/// - [`GeometryError::DomainViolation`] if the converged construction is undefined.
pub fn solve_blunting(
    length: Real,
    radius: Real,
    tip_radius: Real,
    options: &SearchOptions,
) -> Result<SolvedBlunting> {
    validate_shape(length, radius, tip_radius)?;
    if !(tip_radius > 0.0) {
        return Err(GeometryError::invalid(
            "tip_radius",
            tip_radius,
            "must be greater than zero for a blunted ogive",
        ));
    }

    let (mut min, mut max) = search_bracket(length, radius, tip_radius);
    let mut iterations = 0;
    while (max - min).abs() > options.precision {
        if iterations >= options.max_iterations {
            return Err(GeometryError::NonConvergence {
                iterations,
                width: (max - min).abs(),
            });
        }
        let mid = 0.5 * (min + max);
        if !(mid > min && mid < max) {
            // bracket narrower than the float spacing at this magnitude
            return Err(GeometryError::NonConvergence {
                iterations,
                width: (max - min).abs(),
            });
        }
        iterations += 1;

        let too_short = match constraint(length, radius, tip_radius, mid) {
            Ok(residual) => residual > 0.0,
            Err(GeometryError::DomainViolation { .. }) => true,
            Err(err) => return Err(err),
        };
        trace!("blunting search #{iterations}: mid={mid} too_short={too_short}");
        if too_short {
            min = mid;
        } else {
            max = mid;
        }
    }

    let mut solved = SolvedBlunting::at(0.5 * (min + max), radius, tip_radius)?;
    solved.iterations = iterations;
    debug!(
        "blunted ogive L={length} R={radius} r={tip_radius}: virtual length {} after {iterations} iterations, tangent at ({}, {})",
        solved.virtual_length, solved.tangent_point.x, solved.tangent_point.y
    );
    Ok(solved)
}
