use std::io::Write;

use crate::error::Result;

use super::TriangleMesh;

/// Writes the mesh as an ASCII STL solid named `name`.
///
/// Facet normals are taken from the triangle winding.
///
/// # Errors
///
/// Returns [`ShapeError::Io`](crate::ShapeError::Io) if writing fails.
pub fn write_stl_ascii<W: Write>(mesh: &TriangleMesh, name: &str, mut writer: W) -> Result<()> {
    writeln!(writer, "solid {name}")?;
    for &tri in &mesh.indices {
        let n = mesh.face_normal(tri);
        let n = n.try_normalize(0.0).unwrap_or(n);
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle(tri) {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

/// Writes the mesh in Wavefront OBJ format with normals and texture coordinates.
///
/// # Errors
///
/// Returns [`ShapeError::Io`](crate::ShapeError::Io) if writing fails.
pub fn write_obj<W: Write>(mesh: &TriangleMesh, mut writer: W) -> Result<()> {
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    // OBJ indices are 1-based
    for tri in &mesh.indices {
        let [a, b, c] = tri.map(|i| i + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}
