use std::collections::{HashMap, HashSet};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, ShapeError};
use crate::math::Point2;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the interior of a closed outline.
///
/// Returns triangles as index triples into `points`, each wound
/// counter-clockwise.
pub(crate) fn triangulate_outline(points: &[Point2]) -> Result<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(ShapeError::Triangulation(
            "constraint loop needs at least 3 points".into(),
        ));
    }

    let mut cdt = Cdt::new();
    let vertex_to_point = insert_constraint_loop(&mut cdt, points)?;
    let mut triangles = interior_triangles(&cdt, &vertex_to_point)?;
    for tri in &mut triangles {
        if orientation(&points[tri[0]], &points[tri[1]], &points[tri[2]]) < 0.0 {
            tri.swap(1, 2);
        }
    }
    Ok(triangles)
}

/// Twice the signed area of triangle `abc`.
fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Inserts a closed polygon as constraint edges into the CDT.
///
/// Returns a map from CDT vertex index to the first outline index inserted
/// at that position.
fn insert_constraint_loop(cdt: &mut Cdt, points: &[Point2]) -> Result<HashMap<usize, usize>> {
    let mut handles = Vec::with_capacity(points.len());
    let mut vertex_to_point = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| ShapeError::Triangulation(format!("CDT insert: {e}")))?;
        vertex_to_point.entry(h.index()).or_insert(i);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    Ok(vertex_to_point)
}

/// Collects the CDT faces enclosed by the constraint loop as outline index triples.
///
/// Walks the faces from the convex hull inward. A face is inside when the
/// path from the hull to it crosses an odd number of constraint edges, so
/// crossing a constraint flips the inside flag.
fn interior_triangles(cdt: &Cdt, vertex_to_point: &HashMap<usize, usize>) -> Result<Vec<[usize; 3]>> {
    let outer = cdt.outer_face().fix();
    let mut pending: Vec<(FixedFaceHandle<InnerTag>, bool)> = cdt
        .directed_edges()
        .filter(|edge| edge.face().fix() == outer)
        .filter_map(|edge| {
            let hull_face = edge.rev().face().as_inner()?;
            Some((hull_face.fix(), cdt.is_constraint_edge(edge.as_undirected().fix())))
        })
        .collect();

    let mut visited = HashSet::new();
    let mut triangles = Vec::new();
    while let Some((face_fix, inside)) = pending.pop() {
        if !visited.insert(face_fix.index()) {
            continue;
        }
        let face = cdt.face(face_fix);
        if inside {
            let mut tri = [0usize; 3];
            for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
                *slot = *vertex_to_point.get(&vh.fix().index()).ok_or_else(|| {
                    ShapeError::Triangulation("face references an unknown vertex".into())
                })?;
            }
            triangles.push(tri);
        }
        for edge in face.adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            if !visited.contains(&neighbor.fix().index()) {
                let crosses = cdt.is_constraint_edge(edge.as_undirected().fix());
                pending.push((neighbor.fix(), inside != crosses));
            }
        }
    }

    Ok(triangles)
}
