//! Root segments for the two supported figures.

use crate::geometry::{pt, rotate, Segment};

/// Which figure to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ShapeKind {
    Curve,
    Snowflake,
}

impl ShapeKind {
    /// Level-0 segments for this shape on a `width` × `height` canvas,
    /// in draw order.
    pub fn roots(self, width: f64, height: f64) -> Vec<Segment> {
        match self {
            ShapeKind::Curve => koch_curve(width, height),
            ShapeKind::Snowflake => koch_snowflake(width, height),
        }
    }
}

/// A single horizontal baseline at two thirds of the canvas height.
pub fn koch_curve(width: f64, height: f64) -> Vec<Segment> {
    let y = height * 2.0 / 3.0;
    vec![Segment::new(pt(0.0, y), pt(width, y), 0)]
}

/// Three edges of an equilateral triangle, each a level-0 curve of its own.
///
/// The third corner is the second rotated 60° around the first, which keeps
/// the triangle equilateral for any canvas width. Neither builder validates
/// its dimensions; sane canvas sizes are the caller's concern.
pub fn koch_snowflake(width: f64, _height: f64) -> Vec<Segment> {
    let p1 = pt(100.0, 175.0);
    let p2 = pt(width - 100.0, 175.0);
    let p3 = rotate(p1, p2, 60.0);
    vec![
        Segment::new(p1, p2, 0),
        Segment::new(p2, p3, 0),
        Segment::new(p3, p1, 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn curve_baseline_sits_at_two_thirds_height() {
        let roots = koch_curve(600.0, 600.0);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].start, pt(0.0, 400.0));
        assert_eq!(roots[0].end, pt(600.0, 400.0));
        assert_eq!(roots[0].level, 0);
    }

    #[test]
    fn snowflake_edges_close_into_a_triangle() {
        let roots = koch_snowflake(600.0, 600.0);
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0].end, roots[1].start);
        assert_eq!(roots[1].end, roots[2].start);
        assert_eq!(roots[2].end, roots[0].start);
    }

    #[test]
    fn snowflake_triangle_is_equilateral() {
        let roots = koch_snowflake(600.0, 600.0);
        let side = roots[0].length();
        assert!(side > 0.0);
        for edge in &roots {
            assert!((edge.length() - side).abs() < EPS);
        }
    }
}
