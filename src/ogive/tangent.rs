//! Closed-form tangent-circle geometry of a blunted tangent ogive.
//!
//! Coordinates are meridian coordinates: `x` runs along the axis from the sharp
//! tip of the (virtual) ogive towards the base, `y` is the distance from the axis.
//! Nothing here iterates; [`solve_blunting`](super::solve_blunting) drives these
//! functions with trial lengths.

use crate::errors::{GeometryError, Result, checked_sqrt};
use crate::float_types::Real;
use nalgebra::Point2;

/// **Mathematical Foundation: Tangent Ogive Generating Circle**
///
/// A tangent ogive of base radius `R` and length `L` is an arc of a circle of
/// radius `ρ` centered at `(L, R − ρ)`: tangent to the body tube at the base and
/// passing through the tip `(0, 0)`. From `L² + (ρ − R)² = ρ²`:
/// ```text
/// ρ = (R² + L²) / 2R
/// ```
///
/// # Errors
/// [`GeometryError::InvalidParameter`] if `radius ≤ 0`.
pub fn generating_radius(radius: Real, length: Real) -> Result<Real> {
    if !(radius > 0.0) {
        return Err(GeometryError::invalid("radius", radius, "must be greater than zero"));
    }
    Ok((radius * radius + length * length) / (2.0 * radius))
}

/// Height of the ogive of generating radius `rho` above the axis at station `x`:
/// `y = √(ρ² − (L − x)²) + R − ρ`.
pub fn ogive_height(x: Real, length: Real, radius: Real, rho: Real) -> Result<Real> {
    let run = length - x;
    let root = checked_sqrt("ogive_height", rho * rho - run * run)?;
    Ok(root + radius - rho)
}

/// Radius at which an inset curve meets the base.
///
/// Evaluates the ogive of length `length` at `x = length − offset`, using the
/// generating radius of the offset-reduced pair `(radius − offset, length − offset)`.
pub fn inner_minor_radius(length: Real, radius: Real, offset: Real) -> Result<Real> {
    let rho = generating_radius(radius - offset, length - offset)?;
    ogive_height(length - offset, length, radius - offset, rho)
}

/// Height of the point where the blunting circle touches the ogive:
/// `Yt = r·(ρ − R) / (ρ − r)`.
pub fn tangent_y(rho: Real, radius: Real, tip_radius: Real) -> Result<Real> {
    let divisor = rho - tip_radius;
    if divisor == 0.0 || !divisor.is_finite() {
        return Err(GeometryError::DomainViolation {
            operation: "tangent_y",
            operand: divisor,
        });
    }
    Ok(tip_radius * (rho - radius) / divisor)
}

/// Axial station of the tangent point: `Xt = Xo − √(r² − Yt²)`.
pub fn tangent_x(apex: Real, tangent_y: Real, tip_radius: Real) -> Result<Real> {
    let root = checked_sqrt(
        "tangent_x",
        tip_radius * tip_radius - tangent_y * tangent_y,
    )?;
    Ok(apex - root)
}

/// **Mathematical Foundation: Center of the Blunting Circle**
///
/// The blunting circle (radius `r`, centered on the axis at `Xo`) is internally
/// tangent to the generating circle (radius `ρ`, centered at `(L, R − ρ)`), so the
/// distance between the centers is `ρ − r`:
/// ```text
/// (L − Xo)² + (ρ − R)² = (ρ − r)²
/// Xo = L − √((ρ − r)² − (ρ − R)²)
/// ```
/// The operand is non-negative whenever `r ≤ R ≤ ρ`. During the length search
/// trial lengths can produce `ρ < (R + r)/2`; those fail with
/// [`GeometryError::DomainViolation`].
pub fn tangent_circle_apex(rho: Real, length: Real, radius: Real, tip_radius: Real) -> Result<Real> {
    let a = rho - tip_radius;
    let b = rho - radius;
    let root = checked_sqrt("tangent_circle_apex", a * a - b * b)?;
    Ok(length - root)
}

/// Axial station of the leading point of the blunting circle, `Xa = Xo − r`.
#[inline]
pub const fn apex_offset(apex: Real, tip_radius: Real) -> Real {
    apex - tip_radius
}

/// Point on the blunting circle halfway up to the tangent point, in coordinates
/// where the circle's leading point sits at the origin.
pub fn arc_midpoint(tangent_y: Real, tip_radius: Real) -> Result<Point2<Real>> {
    let y = tangent_y / 2.0;
    let x = tip_radius - checked_sqrt("arc_midpoint", tip_radius * tip_radius - y * y)?;
    Ok(Point2::new(x, y))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generating_radius_matches_closed_form() {
        let rho = generating_radius(25.0, 100.0).unwrap();
        assert!((rho - 212.5).abs() < 1e-12);
        // hemisphere
        assert!((generating_radius(10.0, 10.0).unwrap() - 10.0).abs() < 1e-12);
        assert!(generating_radius(0.0, 10.0).is_err());
    }

    #[test]
    fn ogive_closes_at_tip_and_base() {
        let (length, radius) = (100.0, 25.0);
        let rho = generating_radius(radius, length).unwrap();
        assert!(ogive_height(0.0, length, radius, rho).unwrap().abs() < 1e-9);
        assert!((ogive_height(length, length, radius, rho).unwrap() - radius).abs() < 1e-12);
    }

    #[test]
    fn ogive_height_outside_domain_is_an_error() {
        let result = ogive_height(-500.0, 100.0, 25.0, 212.5);
        assert!(matches!(
            result,
            Err(GeometryError::DomainViolation { operation: "ogive_height", .. })
        ));
    }

    #[test]
    fn tangent_point_lies_on_both_circles() {
        let (length, radius, tip) = (106.8, 25.0, 5.0);
        let rho = generating_radius(radius, length).unwrap();
        let xo = tangent_circle_apex(rho, length, radius, tip).unwrap();
        let yt = tangent_y(rho, radius, tip).unwrap();
        let xt = tangent_x(xo, yt, tip).unwrap();

        // on the blunting circle
        let d_tip = ((xt - xo).powi(2) + yt * yt).sqrt();
        assert!((d_tip - tip).abs() < 1e-9);
        // on the generating circle
        let d_ogive = ((xt - length).powi(2) + (yt - (radius - rho)).powi(2)).sqrt();
        assert!((d_ogive - rho).abs() < 1e-9);
        // and on the ogive itself
        assert!((ogive_height(xt, length, radius, rho).unwrap() - yt).abs() < 1e-9);
    }

    #[test]
    fn midpoint_is_on_the_blunting_circle() {
        let tip = 5.0;
        let mid = arc_midpoint(4.0, tip).unwrap();
        assert!((mid.y - 2.0).abs() < 1e-12);
        let d = ((mid.x - tip).powi(2) + mid.y * mid.y).sqrt();
        assert!((d - tip).abs() < 1e-12);
    }

    #[test]
    fn tangent_y_rejects_coincident_radii() {
        assert!(tangent_y(5.0, 4.0, 5.0).is_err());
        assert_eq!(apex_offset(12.0, 5.0), 7.0);
    }
}
