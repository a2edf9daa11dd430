mod export;

use std::collections::HashMap;

pub use export::{write_obj, write_stl_ascii};

use crate::math::{Point2, Point3, Vector3};

/// An indexed triangle mesh with per-vertex attributes.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the three corner positions of triangle `tri`.
    #[must_use]
    pub fn triangle(&self, tri: [u32; 3]) -> [Point3; 3] {
        tri.map(|i| self.vertices[i as usize])
    }

    /// Geometric normal of a triangle from its winding (not normalized).
    #[must_use]
    pub fn face_normal(&self, tri: [u32; 3]) -> Vector3 {
        let [a, b, c] = self.triangle(tri);
        (b - a).cross(&(c - a))
    }

    /// Signed enclosed volume (sum of tetrahedra against the origin).
    ///
    /// Positive when triangles wind counter-clockwise seen from outside.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .map(|&tri| {
                let [v0, v1, v2] = self.triangle(tri);
                v0.coords.dot(&v1.coords.cross(&v2.coords))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }

    /// Returns `true` if every edge is matched by an edge running the other
    /// way, comparing vertex positions rather than indices.
    ///
    /// Faces may carry their own copies of shared vertices; a closed,
    /// consistently wound mesh still pairs each directed edge with its reverse.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let key = |i: u32| {
            let p = &self.vertices[i as usize];
            [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
        };
        let mut balance: HashMap<([u64; 3], [u64; 3]), i64> = HashMap::new();
        for &[a, b, c] in &self.indices {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let (from, to) = (key(from), key(to));
                if from == to {
                    continue;
                }
                // +1 for one direction, -1 for the other; closed meshes cancel out
                let (pair, delta) = if from < to {
                    ((from, to), 1)
                } else {
                    ((to, from), -1)
                };
                *balance.entry(pair).or_insert(0) += delta;
            }
        }
        !self.indices.is_empty() && balance.values().all(|&v| v == 0)
    }

    /// Appends a vertex with its attributes, returning its index.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push_vertex(&mut self, position: Point3, normal: Vector3, uv: Point2) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        idx
    }
}
