//! Turns a solved blunting into a boundary curve.

use crate::curve::{Arc2, BoundaryCurve, CubicSpline2};
use crate::errors::{GeometryError, Result};
use crate::float_types::Real;
use crate::ogive::params::GeometryParameters;
use crate::ogive::search::{SearchOptions, solve_blunting};
use crate::ogive::tangent::{arc_midpoint, generating_radius, inner_minor_radius, ogive_height};
use log::debug;
use nalgebra::Point2;

/// Samples the ogive segment that remains after blunting.
///
/// Produces `resolution` evenly spaced stations over
/// `[start_offset, start_offset + segment_length)`, evaluated on the virtual ogive
/// `(virtual_length, radius, rho)` shifted so the segment ends at the base, plus
/// the exact base point `(start_offset + segment_length, radius)`. The result always
/// has `resolution + 1` points in increasing x.
pub fn sample_ogive(
    rho: Real,
    segment_length: Real,
    virtual_length: Real,
    radius: Real,
    resolution: usize,
    start_offset: Real,
) -> Result<Vec<Point2<Real>>> {
    let step = segment_length / resolution as Real;
    let shift = virtual_length - segment_length;
    let mut points = Vec::with_capacity(resolution + 1);
    for i in 0..resolution {
        let x = i as Real * step;
        let y = ogive_height(x + shift, virtual_length, radius, rho)?;
        points.push(Point2::new(start_offset + x, y));
    }
    points.push(Point2::new(start_offset + segment_length, radius));
    Ok(points)
}

/// Builds the meridian curve for `params`.
///
/// A blunted nose gets a spherical-cap arc from the first ogive sample, through
/// the arc midpoint, to the axis point `(wall_offset, 0)`. The arc starts on the
/// very same point value as the spline so the two pieces share a vertex exactly.
/// A sharp nose (`tip_radius == 0`) is the plain tangent ogive from
/// `(wall_offset, 0)` to `(wall_offset + length, radius)`.
///
/// The cap passes through the first sample, which is evaluated at the converged
/// virtual length. That length is only as exact as `options.precision`, so near
/// `length ≈ radius`, and for tips smaller than the precision, the arc radius can
/// differ noticeably from `tip_radius`.
///
/// # Errors
/// Anything [`solve_blunting`] raises, and [`GeometryError::DegenerateCurve`] for a
/// blunted ogive with `length == radius` or a tangent point that lands on the axis.
pub fn build_curve(params: &GeometryParameters, options: &SearchOptions) -> Result<BoundaryCurve> {
    if !params.is_blunted() {
        return build_sharp_curve(params);
    }

    let (length, radius, tip_radius) = (params.length(), params.radius(), params.tip_radius());
    let offset = params.wall_offset();
    if length <= radius {
        // hemispherical ogive: the cap can only touch it at the apex
        return Err(GeometryError::DegenerateCurve(format!(
            "a blunted ogive needs length > radius, got length = radius = {radius}"
        )));
    }
    let solved = solve_blunting(length, radius, tip_radius, options)?;
    if !(solved.tangent_point.y > 0.0) {
        return Err(GeometryError::DegenerateCurve(format!(
            "blunting arc collapses onto the tip (tangent height {})",
            solved.tangent_point.y
        )));
    }
    let mid = arc_midpoint(solved.tangent_point.y, tip_radius)?;

    let offset_radius = if offset > 0.0 {
        inner_minor_radius(solved.virtual_length, radius, offset)?
    } else {
        radius
    };

    let start = solved.tangent_point.x - solved.apex_offset + offset;
    let segment = length - solved.tangent_point.x + solved.apex_offset;
    let samples = sample_ogive(
        solved.rho,
        segment,
        solved.virtual_length,
        radius,
        params.resolution(),
        start,
    )?;

    let ogive = CubicSpline2::interpolate(&samples)?;
    let blunting = Arc2::from_three_points(
        samples[0],
        Point2::new(mid.x + offset, mid.y),
        Point2::new(offset, 0.0),
    )?;

    debug!(
        "boundary curve: blunting arc to ({}, {}), {} ogive samples from x={start}",
        blunting.start.x,
        blunting.start.y,
        samples.len()
    );

    Ok(BoundaryCurve {
        blunting: Some(blunting),
        ogive,
        solved: Some(solved),
        offset,
        offset_radius,
    })
}

fn build_sharp_curve(params: &GeometryParameters) -> Result<BoundaryCurve> {
    let (length, radius) = (params.length(), params.radius());
    let offset = params.wall_offset();
    let rho = generating_radius(radius, length)?;
    let samples = sample_ogive(rho, length, length, radius, params.resolution(), offset)?;
    let offset_radius = if offset > 0.0 {
        inner_minor_radius(length, radius, offset)?
    } else {
        radius
    };

    debug!("boundary curve: sharp ogive, {} samples from x={offset}", samples.len());

    Ok(BoundaryCurve {
        blunting: None,
        ogive: CubicSpline2::interpolate(&samples)?,
        solved: None,
        offset,
        offset_radius,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn samples_are_even_and_end_on_base() {
        let rho = generating_radius(25.0, 100.0).unwrap();
        let samples = sample_ogive(rho, 100.0, 100.0, 25.0, 10, 0.0).unwrap();
        assert_eq!(samples.len(), 11);
        assert!(samples[0].y.abs() < 1e-9);
        for (i, p) in samples.iter().enumerate() {
            assert!((p.x - 10.0 * i as Real).abs() < 1e-9);
        }
        assert_eq!(samples[10], Point2::new(100.0, 25.0));
    }

    #[test]
    fn arc_starts_on_first_sample() {
        let params = GeometryParameters::new(100.0, 25.0, 5.0, 50).unwrap();
        let curve = build_curve(&params, &SearchOptions::default()).unwrap();
        let arc = curve.blunting.unwrap();
        assert_eq!(arc.start, curve.samples()[0]);
        assert_eq!(arc.end, Point2::new(0.0, 0.0));
        assert_eq!(curve.samples().len(), 51);
        assert_eq!(curve.offset_radius, 25.0);
    }

    #[test]
    fn hemispherical_ogive_cannot_be_blunted() {
        let params = GeometryParameters::new(25.0, 25.0, 5.0, 20).unwrap();
        assert!(matches!(
            build_curve(&params, &SearchOptions::default()),
            Err(GeometryError::DegenerateCurve(_))
        ));
    }
}
