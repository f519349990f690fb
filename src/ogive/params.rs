use crate::errors::{GeometryError, Result};
use crate::float_types::Real;

/// Inputs for one meridian curve.
///
/// Fields are only reachable through [`GeometryParameters::new`] and the `with_*`
/// setters, all of which validate, so a value of this type is always legal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryParameters {
    length: Real,
    radius: Real,
    tip_radius: Real,
    wall_offset: Real,
    resolution: usize,
}

impl GeometryParameters {
    /// Validated parameters for an outer curve (`wall_offset = 0`).
    ///
    /// # Errors
    /// [`GeometryError::InvalidParameter`] unless `radius > 0`, `length ≥ radius`,
    /// `0 ≤ tip_radius < radius` and `resolution ≥ 2`.
    pub fn new(length: Real, radius: Real, tip_radius: Real, resolution: usize) -> Result<Self> {
        validate_shape(length, radius, tip_radius)?;
        validate_resolution(resolution)?;
        Ok(GeometryParameters {
            length,
            radius,
            tip_radius,
            wall_offset: 0.0,
            resolution,
        })
    }

    /// Same curve inset axially by `wall_offset`.
    pub fn with_wall_offset(mut self, wall_offset: Real) -> Result<Self> {
        if !(wall_offset >= 0.0) || !wall_offset.is_finite() {
            return Err(GeometryError::invalid(
                "wall_offset",
                wall_offset,
                "must be a finite value of at least zero",
            ));
        }
        self.wall_offset = wall_offset;
        Ok(self)
    }

    pub fn with_resolution(mut self, resolution: usize) -> Result<Self> {
        validate_resolution(resolution)?;
        self.resolution = resolution;
        Ok(self)
    }

    /// Nominal (blunted) axial length.
    pub const fn length(&self) -> Real {
        self.length
    }

    /// Base radius.
    pub const fn radius(&self) -> Real {
        self.radius
    }

    /// Blunting radius, 0 for a sharp ogive.
    pub const fn tip_radius(&self) -> Real {
        self.tip_radius
    }

    pub const fn wall_offset(&self) -> Real {
        self.wall_offset
    }

    /// Number of evenly spaced samples along the ogive segment.
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    pub const fn is_blunted(&self) -> bool {
        self.tip_radius > 0.0
    }
}

/// Checks `length`, `radius` and `tip_radius` against the ranges where a blunted
/// tangent ogive exists.
pub(crate) fn validate_shape(length: Real, radius: Real, tip_radius: Real) -> Result<()> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(GeometryError::invalid("radius", radius, "must be finite and greater than zero"));
    }
    if !(length > 0.0) || !length.is_finite() {
        return Err(GeometryError::invalid("length", length, "must be finite and greater than zero"));
    }
    if length < radius {
        return Err(GeometryError::invalid(
            "length",
            length,
            "must be at least the base radius for a tangent ogive",
        ));
    }
    if !(tip_radius >= 0.0) {
        return Err(GeometryError::invalid("tip_radius", tip_radius, "must not be negative"));
    }
    if tip_radius >= radius {
        return Err(GeometryError::invalid(
            "tip_radius",
            tip_radius,
            "must be smaller than the base radius",
        ));
    }
    Ok(())
}

fn validate_resolution(resolution: usize) -> Result<()> {
    if resolution < 2 {
        return Err(GeometryError::invalid(
            "resolution",
            resolution as Real,
            "needs at least 2 samples",
        ));
    }
    Ok(())
}
