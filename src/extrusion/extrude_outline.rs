use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::math::{polygon_2d, Point2, Point3, Vector2, Vector3, TOLERANCE};
use crate::mesh::TriangleMesh;
use crate::outline::Outline;

use super::cap::triangulate_outline;
use super::ExtrudeProfile;

/// Extrudes an outline in the XY plane along +Z into a closed triangle mesh.
///
/// The mesh is built from rings: copies of the outline at increasing Z,
/// optionally pushed outward for the bevel. The first and last rings are
/// capped, consecutive rings are joined by flat-shaded wall quads.
pub struct ExtrudeOutline<'a> {
    outline: &'a Outline,
    profile: ExtrudeProfile,
}

/// One copy of the outline: its height and outward offset.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ring {
    z: f64,
    offset: f64,
}

impl<'a> ExtrudeOutline<'a> {
    /// Creates a new `ExtrudeOutline` operation.
    #[must_use]
    pub fn new(outline: &'a Outline, profile: &ExtrudeProfile) -> Self {
        Self {
            outline,
            profile: *profile,
        }
    }

    /// Executes the extrusion, returning the mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the cap cannot be triangulated or, with bevelling
    /// enabled, the outline has a degenerate or reversing corner.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let base: Vec<Point2> = if self.outline.is_counter_clockwise() {
            self.outline.points().to_vec()
        } else {
            self.outline.points().iter().rev().copied().collect()
        };

        let miters = if self.profile.bevel_enabled() {
            miter_vectors(&base)?
        } else {
            vec![Vector2::zeros(); base.len()]
        };

        let rings: Vec<Vec<Point3>> = ring_layout(&self.profile)
            .into_iter()
            .map(|ring| {
                base.iter()
                    .zip(&miters)
                    .map(|(p, m)| {
                        let q = p + m * ring.offset;
                        Point3::new(q.x, q.y, ring.z)
                    })
                    .collect()
            })
            .collect();

        let cap_triangles = triangulate_outline(&base)?;
        let mut mesh = TriangleMesh::default();

        // Bottom cap faces -Z: reverse the counter-clockwise triangles
        if let Some(bottom) = rings.first() {
            push_cap(&mut mesh, bottom, &cap_triangles, -Vector3::z());
        }
        for pair in rings.windows(2) {
            push_walls(&mut mesh, &pair[0], &pair[1]);
        }
        if let Some(top) = rings.last() {
            push_cap(&mut mesh, top, &cap_triangles, Vector3::z());
        }

        tracing::debug!(
            outline_vertices = base.len(),
            rings = rings.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            bevel = self.profile.bevel_enabled(),
            "extruded outline"
        );

        Ok(mesh)
    }
}

/// Computes the ring heights and offsets, bottom to top.
///
/// Without a bevel there are `steps + 1` rings from 0 to `depth`. With a
/// bevel, quarter-circle profiles of `segments` rings are added below 0 and
/// above `depth`, and the wall rings are offset by the full bevel size.
#[allow(clippy::cast_precision_loss)]
fn ring_layout(profile: &ExtrudeProfile) -> Vec<Ring> {
    let depth = profile.depth();
    let steps = profile.steps();
    let (thickness, size, segments) = if profile.bevel_enabled() {
        let bevel = profile.bevel();
        (bevel.thickness(), bevel.size(), bevel.segments())
    } else {
        (0.0, 0.0, 0)
    };

    let bevel_ring = |k: usize| {
        let t = k as f64 / segments as f64;
        (thickness * (t * FRAC_PI_2).cos(), size * (t * FRAC_PI_2).sin())
    };

    let mut rings = Vec::with_capacity(2 * segments + steps + 1);
    for k in 0..segments {
        let (dz, offset) = bevel_ring(k);
        rings.push(Ring { z: -dz, offset });
    }
    for s in 0..=steps {
        rings.push(Ring {
            z: depth * s as f64 / steps as f64,
            offset: size,
        });
    }
    for k in (0..segments).rev() {
        let (dz, offset) = bevel_ring(k);
        rings.push(Ring {
            z: depth + dz,
            offset,
        });
    }

    // A zero thickness or size collapses bevel rings onto their neighbours
    let eps = TOLERANCE * depth;
    rings.dedup_by(|b, a| (a.z - b.z).abs() <= eps && (a.offset - b.offset).abs() <= eps);
    rings
}

fn miter_vectors(points: &[Point2]) -> Result<Vec<Vector2>> {
    let n = points.len();
    (0..n)
        .map(|i| polygon_2d::miter_vector(&points[(i + n - 1) % n], &points[i], &points[(i + 1) % n]))
        .collect()
}

/// Appends a flat cap. `triangles` are counter-clockwise in the XY plane.
#[allow(clippy::cast_possible_truncation)]
fn push_cap(mesh: &mut TriangleMesh, ring: &[Point3], triangles: &[[usize; 3]], normal: Vector3) {
    let first = mesh.vertices.len();
    for p in ring {
        mesh.push_vertex(*p, normal, Point2::new(p.x, p.y));
    }
    let flip = normal.z < 0.0;
    for &[a, b, c] in triangles {
        let [a, b, c] = [a, b, c].map(|i| (first + i) as u32);
        mesh.indices.push(if flip { [a, c, b] } else { [a, b, c] });
    }
}

/// Joins two rings with one quad per outline edge.
fn push_walls(mesh: &mut TriangleMesh, lower: &[Point3], upper: &[Point3]) {
    let n = lower.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let quad = [lower[i], lower[j], upper[j], upper[i]];

        // Only an exactly zero normal is skipped; small outlines have small cross products
        let Some(normal) = (quad[1] - quad[0])
            .cross(&(quad[3] - quad[0]))
            .try_normalize(0.0)
        else {
            continue;
        };

        let along_x = (quad[0].y - quad[1].y).abs() < (quad[0].x - quad[1].x).abs();
        let base = quad.map(|p| {
            let u = if along_x { p.x } else { p.y };
            mesh.push_vertex(p, normal, Point2::new(u, 1.0 - p.z))
        });
        mesh.indices.push([base[0], base[1], base[2]]);
        mesh.indices.push([base[0], base[2], base[3]]);
    }
}
