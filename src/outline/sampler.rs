use std::f64::consts::TAU;

use crate::math::Point2;

/// Chooses the radius of the `i`-th sampled vertex.
pub trait RadiusPolicy {
    /// Returns the distance from the origin of vertex `index`.
    fn radius_at(&self, index: usize) -> f64;
}

/// Every vertex on one circle (regular polygon).
#[derive(Debug, Clone, Copy)]
pub struct ConstantRadius(pub f64);

impl RadiusPolicy for ConstantRadius {
    fn radius_at(&self, _index: usize) -> f64 {
        self.0
    }
}

/// Even vertices on the `even` circle, odd vertices on the `odd` circle (star).
#[derive(Debug, Clone, Copy)]
pub struct AlternatingRadius {
    pub even: f64,
    pub odd: f64,
}

impl RadiusPolicy for AlternatingRadius {
    fn radius_at(&self, index: usize) -> f64 {
        if index % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Samples `count` angularly equispaced points starting at `phase`.
///
/// Vertex `i` sits at angle `phase + i * TAU / count`. Angles are computed
/// from the index rather than accumulated so the count is exact.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample_points<P: RadiusPolicy>(policy: &P, count: usize, phase: f64) -> Vec<Point2> {
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let theta = phase + i as f64 * step;
            let r = policy.radius_at(i);
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
