//! Nose cone variants built from one or two meridian curves.
//!
//! Every variant starts from the outer curve. Hollow, capped and shouldered-hollow
//! variants add an inner curve inset by the wall thickness.

mod profile;

pub use profile::NoseProfile;

use crate::curve::BoundaryCurve;
use crate::errors::{GeometryError, Result};
use crate::float_types::Real;
use crate::ogive::{GeometryParameters, SearchOptions, build_curve};
use log::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the inside of the nose is shaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoseStyle {
    /// Filled body.
    #[default]
    Solid,
    /// Shell of constant wall thickness, open at the base.
    Hollow,
    /// Shell closed at the base by a cap one wall thickness deep.
    Capped,
}

/// Cylindrical spigot behind the nose that slides into the body tube.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shoulder {
    pub length: Real,
    pub radius: Real,
    /// Wall thickness of the spigot, unused for solid noses.
    pub thickness: Real,
}

/// A complete nose cone definition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoseCone {
    pub length: Real,
    pub radius: Real,
    /// Blunting radius, 0 for a sharp ogive.
    pub tip_radius: Real,
    /// Wall thickness, used by hollow and capped styles.
    pub thickness: Real,
    pub style: NoseStyle,
    pub shoulder: Option<Shoulder>,
    /// Samples along each ogive segment.
    pub resolution: usize,
    pub search: SearchOptions,
}

impl NoseCone {
    /// A solid, shoulderless nose.
    pub fn new(length: Real, radius: Real, tip_radius: Real, resolution: usize) -> Self {
        NoseCone {
            length,
            radius,
            tip_radius,
            thickness: 0.0,
            style: NoseStyle::Solid,
            shoulder: None,
            resolution,
            search: SearchOptions::default(),
        }
    }

    /// Selects the style and its wall thickness.
    pub const fn with_wall(mut self, style: NoseStyle, thickness: Real) -> Self {
        self.style = style;
        self.thickness = thickness;
        self
    }

    pub const fn with_shoulder(mut self, shoulder: Shoulder) -> Self {
        self.shoulder = Some(shoulder);
        self
    }

    pub const fn with_search(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Builds the variant selected by `style` and `shoulder`.
    pub fn profile(&self) -> Result<NoseProfile> {
        match (self.style, self.shoulder.is_some()) {
            (NoseStyle::Solid, false) => self.solid(),
            (NoseStyle::Solid, true) => self.solid_shoulder(),
            (NoseStyle::Hollow, false) => self.hollow(),
            (NoseStyle::Hollow, true) => self.hollow_shoulder(),
            (NoseStyle::Capped, false) => self.capped(),
            (NoseStyle::Capped, true) => self.capped_shoulder(),
        }
    }

    /// Parameters of the outer curve.
    pub fn outer_parameters(&self) -> Result<GeometryParameters> {
        GeometryParameters::new(self.length, self.radius, self.tip_radius, self.resolution)
    }

    /// Parameters of the inner curve for a wall inset of `thickness`, with the
    /// inner length shortened by `length_inset`.
    ///
    /// The inner tip radius is `tip_radius − thickness`, clamped to zero.
    pub fn inner_parameters(&self, length_inset: Real) -> Result<GeometryParameters> {
        let thickness = self.checked_thickness()?;
        let mut tip = self.tip_radius - thickness;
        if tip <= 0.0 {
            if self.tip_radius > 0.0 {
                warn!(
                    "wall thickness {thickness} swallows tip radius {}: inner curve is a sharp ogive",
                    self.tip_radius
                );
            }
            tip = 0.0;
        }
        GeometryParameters::new(
            self.length - length_inset,
            self.radius - thickness,
            tip,
            self.resolution,
        )?
        .with_wall_offset(thickness)
    }

    /// Outer curve only.
    pub fn solid(&self) -> Result<NoseProfile> {
        let outer = build_curve(&self.outer_parameters()?, &self.search)?;
        Ok(NoseProfile::new(self, NoseStyle::Solid, None, outer, None))
    }

    /// Outer curve followed by a solid shoulder.
    pub fn solid_shoulder(&self) -> Result<NoseProfile> {
        let shoulder = self.checked_shoulder(false)?;
        let outer = build_curve(&self.outer_parameters()?, &self.search)?;
        Ok(NoseProfile::new(self, NoseStyle::Solid, Some(shoulder), outer, None))
    }

    /// Shell open at the base; the inner curve is one thickness shorter.
    pub fn hollow(&self) -> Result<NoseProfile> {
        let (outer, inner) = self.curve_pair(self.thickness)?;
        Ok(NoseProfile::new(self, NoseStyle::Hollow, None, outer, Some(inner)))
    }

    /// Shell with a hollow shoulder; the inner curve stops one thickness short of
    /// the shoulder face.
    pub fn hollow_shoulder(&self) -> Result<NoseProfile> {
        let shoulder = self.checked_shoulder(true)?;
        let (outer, inner) = self.curve_pair(2.0 * self.thickness)?;
        Ok(NoseProfile::new(self, NoseStyle::Hollow, Some(shoulder), outer, Some(inner)))
    }

    /// Shell closed by a base cap one thickness deep.
    pub fn capped(&self) -> Result<NoseProfile> {
        let (outer, inner) = self.curve_pair(2.0 * self.thickness)?;
        Ok(NoseProfile::new(self, NoseStyle::Capped, None, outer, Some(inner)))
    }

    /// Shell with a hollow shoulder closed at its far end.
    pub fn capped_shoulder(&self) -> Result<NoseProfile> {
        let shoulder = self.checked_shoulder(true)?;
        let (outer, inner) = self.curve_pair(2.0 * self.thickness)?;
        Ok(NoseProfile::new(self, NoseStyle::Capped, Some(shoulder), outer, Some(inner)))
    }

    /// Validates both parameter sets before building either curve.
    fn curve_pair(&self, length_inset: Real) -> Result<(BoundaryCurve, BoundaryCurve)> {
        let outer = self.outer_parameters()?;
        let inner = self.inner_parameters(length_inset)?;
        Ok((build_curve(&outer, &self.search)?, build_curve(&inner, &self.search)?))
    }

    fn checked_thickness(&self) -> Result<Real> {
        let t = self.thickness;
        if !(t > 0.0) || t >= self.radius {
            return Err(GeometryError::invalid(
                "thickness",
                t,
                "must be greater than zero and smaller than the base radius",
            ));
        }
        Ok(t)
    }

    fn checked_shoulder(&self, hollow: bool) -> Result<Shoulder> {
        let Some(shoulder) = self.shoulder else {
            return Err(GeometryError::invalid(
                "shoulder",
                0.0,
                "a shouldered variant needs shoulder dimensions",
            ));
        };
        if !(shoulder.length > 0.0) {
            return Err(GeometryError::invalid(
                "shoulder.length",
                shoulder.length,
                "must be greater than zero",
            ));
        }
        if !(shoulder.radius > 0.0) || shoulder.radius > self.radius {
            return Err(GeometryError::invalid(
                "shoulder.radius",
                shoulder.radius,
                "must be greater than zero and no larger than the base radius",
            ));
        }
        if hollow && (!(shoulder.thickness > 0.0) || shoulder.thickness >= shoulder.radius) {
            return Err(GeometryError::invalid(
                "shoulder.thickness",
                shoulder.thickness,
                "must be greater than zero and smaller than the shoulder radius",
            ));
        }
        Ok(shoulder)
    }
}

/// Builds every profile in order. Each entry fails or succeeds on its own.
pub fn build_profiles(cones: &[NoseCone]) -> Vec<Result<NoseProfile>> {
    cones.iter().map(NoseCone::profile).collect()
}

/// Parallel [`build_profiles`]; the output order matches `cones`.
#[cfg(feature = "parallel")]
pub fn build_profiles_par(cones: &[NoseCone]) -> Vec<Result<NoseProfile>> {
    cones.par_iter().map(NoseCone::profile).collect()
}
