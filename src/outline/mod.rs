//! Regular polygon and star outlines.
//!
//! Both shapes are produced by one sampler: `count` points equally spaced in
//! angle around the origin, starting at `phase`, with the distance of each
//! point chosen by a [`RadiusPolicy`]. Generated outlines are
//! counter-clockwise and stored open (the first point is not repeated).

mod polygon;
mod sampler;
mod star;

pub use polygon::{generate_polygon_outline, MakePolygonOutline};
pub use sampler::{AlternatingRadius, ConstantRadius, RadiusPolicy};
pub use star::{generate_star_outline, MakeStarOutline};

use crate::error::{ensure_at_least, ensure_positive, Result, ShapeError};
use crate::math::{polygon_2d, Point2};

/// An ordered, implicitly closed loop of 2D points.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point2>,
}

impl Outline {
    /// Samples an outline from an arbitrary radius policy.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidArgument`] if `count < 3`, `phase` is not
    /// finite, or the policy yields a non-positive radius for any index.
    pub fn sample<P: RadiusPolicy>(policy: &P, count: usize, phase: f64) -> Result<Self> {
        ensure_at_least("count", count, 3, "an integer >= 3")?;
        ensure_finite_phase(phase)?;
        for i in 0..count {
            ensure_positive("radius", policy.radius_at(i))?;
        }
        Ok(Self::from_sampler(policy, count, phase))
    }

    /// Samples without validation; callers have already checked their inputs.
    pub(crate) fn from_sampler<P: RadiusPolicy>(policy: &P, count: usize, phase: f64) -> Self {
        Self {
            points: sampler::sample_points(policy, count, phase),
        }
    }

    /// Returns the points in winding order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the outline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed enclosed area; positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon_2d::signed_area(&self.points)
    }

    /// Returns `true` if the points wind counter-clockwise.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Iterates over the closing edges `(points[i], points[i + 1 mod n])`.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Consumes the outline, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

/// Declarative description of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineSpec {
    /// Regular polygon with `sides` vertices on one circle.
    Polygon { radius: f64, sides: usize, phase: f64 },
    /// Star with `points` tips, alternating outer and inner radius.
    Star {
        inner_radius: f64,
        outer_radius: f64,
        points: usize,
        phase: f64,
    },
}

impl OutlineSpec {
    /// Polygon spec with zero phase.
    #[must_use]
    pub fn polygon(radius: f64, sides: usize) -> Self {
        Self::Polygon {
            radius,
            sides,
            phase: 0.0,
        }
    }

    /// Star spec with zero phase.
    #[must_use]
    pub fn star(inner_radius: f64, outer_radius: f64, points: usize) -> Self {
        Self::Star {
            inner_radius,
            outer_radius,
            points,
            phase: 0.0,
        }
    }

    /// Returns a copy with the starting phase replaced.
    #[must_use]
    pub fn with_phase(self, new_phase: f64) -> Self {
        match self {
            Self::Polygon { radius, sides, .. } => Self::Polygon {
                radius,
                sides,
                phase: new_phase,
            },
            Self::Star {
                inner_radius,
                outer_radius,
                points,
                ..
            } => Self::Star {
                inner_radius,
                outer_radius,
                points,
                phase: new_phase,
            },
        }
    }

    /// Number of vertices the generated outline will have.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidArgument`] if a star's vertex count
    /// overflows `usize`.
    pub fn vertex_count(&self) -> Result<usize> {
        match *self {
            Self::Polygon { sides, .. } => Ok(sides),
            Self::Star { points, .. } => star::star_vertex_count(points),
        }
    }

    /// Generates the outline.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidArgument`] if any parameter violates its
    /// constraint.
    pub fn generate(&self) -> Result<Outline> {
        match *self {
            Self::Polygon {
                radius,
                sides,
                phase,
            } => generate_polygon_outline(radius, sides, phase),
            Self::Star {
                inner_radius,
                outer_radius,
                points,
                phase,
            } => generate_star_outline(inner_radius, outer_radius, points, phase),
        }
    }
}

fn ensure_finite_phase(phase: f64) -> Result<()> {
    if phase.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::invalid("phase", phase, "a finite angle in radians"))
    }
}
