//! SVG export of sketches.
//!
//! The meridian half-plane has `y` pointing away from the axis while SVG user space
//! has `y` pointing down, so every point is written as `(x, −y)`.

use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::Sketch;
use nalgebra::Point2;
use std::fmt::Debug;
use std::path::Path;
use svg::Document;
use svg::node::element::Path as SvgPath;
use svg::node::element::path::Data;

/// Fraction of the larger extent added around the drawing.
const MARGIN: Real = 0.05;

pub trait ToSVG {
    /// Closed rings to draw, one `<path>` each.
    fn svg_rings(&self) -> Vec<Vec<Point2<Real>>>;

    fn to_svg(&self) -> String {
        document(&self.svg_rings()).to_string()
    }

    /// Writes the SVG document to `path`.
    fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        let rings = self.svg_rings();
        if rings.iter().all(|r| r.len() < 3) {
            return Err(IoError::EmptyGeometry("no closed ring to draw".to_string()));
        }
        svg::save(path, &document(&rings))?;
        Ok(())
    }
}

impl<S: Clone + Debug + Send + Sync> ToSVG for Sketch<S> {
    fn svg_rings(&self) -> Vec<Vec<Point2<Real>>> {
        self.exteriors()
    }
}

fn document(rings: &[Vec<Point2<Real>>]) -> Document {
    let mut min = Point2::new(Real::INFINITY, Real::INFINITY);
    let mut max = Point2::new(Real::NEG_INFINITY, Real::NEG_INFINITY);
    for p in rings.iter().flatten() {
        min.x = min.x.min(p.x);
        min.y = min.y.min(-p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(-p.y);
    }
    if min.x > max.x {
        min = Point2::origin();
        max = Point2::new(1.0, 1.0);
    }

    let extent = (max.x - min.x).max(max.y - min.y).max(Real::EPSILON);
    let margin = extent * MARGIN;
    let view_box = format!(
        "{} {} {} {}",
        min.x - margin,
        min.y - margin,
        max.x - min.x + 2.0 * margin,
        max.y - min.y + 2.0 * margin
    );
    let stroke_width = format!("{}", extent / 500.0);

    let mut doc = Document::new().set("viewBox", view_box);
    for ring in rings.iter().filter(|r| r.len() >= 2) {
        let mut data = Data::new().move_to((ring[0].x as f32, -ring[0].y as f32));
        for p in &ring[1..] {
            data = data.line_to((p.x as f32, -p.y as f32));
        }
        let path = SvgPath::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", stroke_width.clone())
            .set("d", data.close());
        doc = doc.add(path);
    }
    doc
}
