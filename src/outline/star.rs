use crate::error::{ensure_at_least, ensure_positive, Result, ShapeError};

use super::sampler::AlternatingRadius;
use super::{ensure_finite_phase, Outline};

/// Builds a star outline centred on the origin.
///
/// The outline has `points * 2` vertices: tips on the outer circle at even
/// indices and notches on the inner circle at odd indices. An inner radius
/// larger than the outer one is accepted and simply swaps which circle holds
/// the tips.
pub struct MakeStarOutline {
    inner_radius: f64,
    outer_radius: f64,
    points: usize,
    phase: f64,
}

impl MakeStarOutline {
    /// Creates a new `MakeStarOutline` operation with zero phase.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64, points: usize) -> Self {
        Self {
            inner_radius,
            outer_radius,
            points,
            phase: 0.0,
        }
    }

    /// Sets the angle of the first (outer) vertex, in radians.
    #[must_use]
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidArgument`](crate::ShapeError::InvalidArgument)
    /// if `points < 2`, either radius is `<= 0`, or any value is not finite.
    pub fn execute(&self) -> Result<Outline> {
        ensure_at_least("points", self.points, 2, "an integer >= 2")?;
        ensure_positive("inner_radius", self.inner_radius)?;
        ensure_positive("outer_radius", self.outer_radius)?;
        ensure_finite_phase(self.phase)?;
        let policy = AlternatingRadius {
            even: self.outer_radius,
            odd: self.inner_radius,
        };
        let count = star_vertex_count(self.points)?;
        Ok(Outline::from_sampler(&policy, count, self.phase))
    }
}

/// Number of vertices of a star with `points` tips.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn star_vertex_count(points: usize) -> Result<usize> {
    points.checked_mul(2).ok_or_else(|| {
        ShapeError::invalid("points", points as f64, "a tip count whose vertex count fits in usize")
    })
}

/// Generates a star outline with `points` tips.
///
/// # Errors
///
/// See [`MakeStarOutline::execute`].
pub fn generate_star_outline(
    inner_radius: f64,
    outer_radius: f64,
    points: usize,
    phase: f64,
) -> Result<Outline> {
    MakeStarOutline::new(inner_radius, outer_radius, points)
        .with_phase(phase)
        .execute()
}
