use crate::error::{ensure_at_least, ensure_positive, Result};

use super::sampler::ConstantRadius;
use super::{ensure_finite_phase, Outline};

/// Builds a regular polygon outline centred on the origin.
pub struct MakePolygonOutline {
    radius: f64,
    sides: usize,
    phase: f64,
}

impl MakePolygonOutline {
    /// Creates a new `MakePolygonOutline` operation with zero phase.
    #[must_use]
    pub fn new(radius: f64, sides: usize) -> Self {
        Self {
            radius,
            sides,
            phase: 0.0,
        }
    }

    /// Sets the angle of the first vertex, in radians.
    #[must_use]
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Executes the operation.
    ///
    /// Vertex `i` lies at angle `phase + i * 2π / sides` on the circle of
    /// the given radius.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidArgument`](crate::ShapeError::InvalidArgument)
    /// if `sides < 3`, `radius <= 0`, or either value is not finite.
    pub fn execute(&self) -> Result<Outline> {
        ensure_at_least("sides", self.sides, 3, "an integer >= 3")?;
        ensure_positive("radius", self.radius)?;
        ensure_finite_phase(self.phase)?;
        Ok(Outline::from_sampler(
            &ConstantRadius(self.radius),
            self.sides,
            self.phase,
        ))
    }
}

/// Generates a regular polygon outline with `sides` vertices at `radius`.
///
/// # Errors
///
/// See [`MakePolygonOutline::execute`].
pub fn generate_polygon_outline(radius: f64, sides: usize, phase: f64) -> Result<Outline> {
    MakePolygonOutline::new(radius, sides)
        .with_phase(phase)
        .execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_4, TAU};

    #[test]
    fn hexagon_matches_known_coordinates() {
        let outline = generate_polygon_outline(1.0, 6, 0.0).unwrap();
        let h = 3.0_f64.sqrt() / 2.0;
        let expected = [
            (1.0, 0.0),
            (0.5, h),
            (-0.5, h),
            (-1.0, 0.0),
            (-0.5, -h),
            (0.5, -h),
        ];
        assert_eq!(outline.len(), 6);
        for (p, (x, y)) in outline.points().iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn every_vertex_sits_on_the_circle() {
        for sides in 3..=24 {
            for radius in [0.01, 1.0, 7.5] {
                let outline = generate_polygon_outline(radius, sides, 0.0).unwrap();
                assert_eq!(outline.len(), sides);
                for p in outline.points() {
                    assert_abs_diff_eq!(p.coords.norm(), radius, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn vertices_are_evenly_spaced() {
        let sides = 9;
        let outline = generate_polygon_outline(2.0, sides, 0.25).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / sides as f64;
        for (a, b) in outline.edges() {
            let angle = b.y.atan2(b.x) - a.y.atan2(a.x);
            assert_abs_diff_eq!(angle.rem_euclid(TAU), step, epsilon = 1e-9);
        }
    }

    #[test]
    fn first_point_follows_phase() {
        let outline = generate_polygon_outline(3.0, 5, FRAC_PI_4).unwrap();
        let first = outline.points()[0];
        assert_abs_diff_eq!(first.x, 3.0 * FRAC_PI_4.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(first.y, 3.0 * FRAC_PI_4.sin(), epsilon = 1e-12);
    }

    #[test]
    fn triangle_is_equilateral() {
        let outline = generate_polygon_outline(1.0, 3, 0.0).unwrap();
        let pts = outline.points();
        let d01 = (pts[1] - pts[0]).norm();
        let d12 = (pts[2] - pts[1]).norm();
        let d20 = (pts[0] - pts[2]).norm();
        assert!(d01 > 1e-6);
        assert_abs_diff_eq!(d01, d12, epsilon = 1e-9);
        assert_abs_diff_eq!(d12, d20, epsilon = 1e-9);
        assert_abs_diff_eq!(d01, 3.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_polygon_outline(1.3, 11, 0.7).unwrap();
        let b = generate_polygon_outline(1.3, 11, 0.7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn builder_matches_free_function() {
        let op = MakePolygonOutline::new(2.0, 8).with_phase(0.1).execute().unwrap();
        assert_eq!(op, generate_polygon_outline(2.0, 8, 0.1).unwrap());
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn too_few_sides_fails() {
        assert!(matches!(
            generate_polygon_outline(1.0, 2, 0.0),
            Err(ShapeError::InvalidArgument { parameter: "sides", .. })
        ));
    }

    #[test]
    fn zero_radius_fails() {
        assert!(matches!(
            generate_polygon_outline(0.0, 6, 0.0),
            Err(ShapeError::InvalidArgument { parameter: "radius", .. })
        ));
    }

    #[test]
    fn negative_radius_fails() {
        assert!(generate_polygon_outline(-1.0, 6, 0.0).is_err());
    }

    #[test]
    fn non_finite_phase_fails() {
        assert!(generate_polygon_outline(1.0, 6, f64::INFINITY).is_err());
    }
}
