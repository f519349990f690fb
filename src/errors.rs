//! Geometry errors

use crate::float_types::Real;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Everything that can go wrong while solving or assembling a profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (InvalidParameter) An input is outside its legal range. Raised before any computation.
    #[error("(InvalidParameter) `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    /// (DomainViolation) A formula was evaluated outside its domain: a negative
    /// operand under a square root, or a vanishing divisor.
    #[error("(DomainViolation) {operation} is undefined for operand {operand}")]
    DomainViolation {
        operation: &'static str,
        operand: Real,
    },
    /// (NonConvergence) The blunting search ran out of iterations or stalled.
    #[error("(NonConvergence) bracket still {width} wide after {iterations} iterations")]
    NonConvergence { iterations: usize, width: Real },
    /// (DegenerateCurve) Arc or spline construction got unusable points.
    #[error("(DegenerateCurve) {0}")]
    DegenerateCurve(String),
}

impl GeometryError {
    pub(crate) const fn invalid(name: &'static str, value: Real, reason: &'static str) -> Self {
        GeometryError::InvalidParameter { name, value, reason }
    }
}

/// Square root that refuses negative operands instead of producing NaN.
///
/// Tiny negative values within `EPSILON` of zero are rounding noise and are clamped.
#[inline]
pub(crate) fn checked_sqrt(operation: &'static str, operand: Real) -> Result<Real> {
    if operand >= 0.0 {
        Ok(operand.sqrt())
    } else if operand > -crate::float_types::EPSILON {
        Ok(0.0)
    } else {
        Err(GeometryError::DomainViolation { operation, operand })
    }
}
