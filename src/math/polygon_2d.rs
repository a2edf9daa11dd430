use super::{Point2, Vector2, TOLERANCE};
use crate::error::{Result, ShapeError};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidArgument`] if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    d.try_normalize(0.0).ok_or_else(|| {
        ShapeError::invalid("edge length", d.norm(), "a non-degenerate outline edge")
    })
}

/// Returns the right-pointing normal of a direction vector.
///
/// For a counter-clockwise polygon this points out of the interior.
#[must_use]
pub fn right_normal(dir: Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

/// Returns the miter vector at `curr` for a counter-clockwise polygon.
///
/// Moving `curr` by `miter * d` offsets both adjacent edges outward by exactly
/// `d`, so offset edges stay parallel to the originals.
///
/// # Errors
///
/// Returns an error if an adjacent edge is degenerate or the polygon folds
/// back on itself at `curr`.
pub fn miter_vector(prev: &Point2, curr: &Point2, next: &Point2) -> Result<Vector2> {
    let n_in = right_normal(segment_direction(prev, curr)?);
    let n_out = right_normal(segment_direction(curr, next)?);
    let denom = 1.0 + n_in.dot(&n_out);
    if denom < TOLERANCE {
        return Err(ShapeError::invalid(
            "turn angle",
            std::f64::consts::PI,
            "an outline without reversing edges",
        ));
    }
    Ok((n_in + n_out) / denom)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_abs_diff_eq!(signed_area(&unit_square()), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts: Vec<Point2> = unit_square().into_iter().rev().collect();
        assert_abs_diff_eq!(signed_area(&pts), -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_abs_diff_eq!(signed_area(&[Point2::new(0.0, 0.0)]), 0.0);
        assert_abs_diff_eq!(signed_area(&[]), 0.0);
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(dir.x, 0.6, epsilon = TOLERANCE);
        assert_abs_diff_eq!(dir.y, 0.8, epsilon = TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point2::new(1.0, 1.0);
        assert!(segment_direction(&a, &a).is_err());
    }

    #[test]
    fn segment_direction_on_tiny_edge() {
        let dir = segment_direction(&Point2::new(0.0, 0.0), &Point2::new(3e-12, 4e-12)).unwrap();
        assert_abs_diff_eq!(dir.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn right_normal_points_outward_for_ccw_bottom_edge() {
        let n = right_normal(Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(n.x, 0.0);
        assert_abs_diff_eq!(n.y, -1.0);
    }

    #[test]
    fn miter_at_square_corner() {
        let sq = unit_square();
        // Corner (1, 0): outward diagonal with unit offset on both edges
        let m = miter_vector(&sq[0], &sq[1], &sq[2]).unwrap();
        assert_abs_diff_eq!(m.x, 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(m.y, -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn miter_on_straight_run_is_edge_normal() {
        let m = miter_vector(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(m.x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(m.y, -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn miter_rejects_reversal() {
        let r = miter_vector(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert!(r.is_err());
    }
}
