//! The Koch construction: trisect a segment, replace the middle third with
//! two sides of an equilateral triangle, recurse.

use thiserror::Error;

use crate::geometry::{displacement, rotate, Point, Segment};

/// Fold angle for the apex point. −60° puts the bump on the correct side
/// for left-to-right segments in y-down screen coordinates.
const FOLD_DEGREES: f64 = -60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid recursion depth {0}: must be >= 0")]
    InvalidDepth(i32),
}

/// Control points of one subdivision step.
///
/// ```text
///      /C\
/// A__B/   \D__E
/// ```
///
/// B and D trisect A→E; C is D rotated −60° around B. A zero-length input
/// just yields five copies of the same point.
pub fn subdivide(tail: Point, tip: Point) -> [Point; 5] {
    let v = displacement(tail, tip);
    let b = tail + v * (1.0 / 3.0);
    let d = tail + v * (2.0 / 3.0);
    let c = rotate(b, d, FOLD_DEGREES);
    [tail, b, c, d, tip]
}

/// The four child segments of `segment`, one level deeper, left to right.
pub fn sublines(segment: &Segment) -> [Segment; 4] {
    let p = subdivide(segment.start, segment.end);
    let level = segment.level + 1;
    [
        Segment::new(p[0], p[1], level),
        Segment::new(p[1], p[2], level),
        Segment::new(p[2], p[3], level),
        Segment::new(p[3], p[4], level),
    ]
}

/// Depth-first subdivision of `segment`, handing each terminal segment to
/// `emit` in draw order.
///
/// Emits exactly `4^(target_depth - level)` segments when `target_depth >=
/// segment.level`; a target equal to the segment's level emits it untouched.
/// The depth is captured once here, so nothing external can change it while
/// the recursion runs.
pub fn traverse<F>(segment: &Segment, target_depth: i32, mut emit: F) -> Result<(), Error>
where
    F: FnMut(&Segment),
{
    if target_depth < 0 {
        return Err(Error::InvalidDepth(target_depth));
    }
    walk(segment, target_depth as u32, &mut emit);
    Ok(())
}

fn walk<F>(segment: &Segment, target: u32, emit: &mut F)
where
    F: FnMut(&Segment),
{
    if segment.level == target {
        emit(segment);
    } else if segment.level < target {
        for child in &sublines(segment) {
            walk(child, target, emit);
        }
    }
    // level > target: nothing to draw down here
}
