//! Builds the default star and hexagon prisms and writes them as OBJ.
//!
//! Usage:
//! ```text
//! cargo run --example star_prism                 # star to stdout
//! cargo run --example star_prism -- polygon      # hexagon to stdout
//! cargo run --example star_prism -- cube         # rejected, exits with status 2
//! RUST_LOG=shapegen=debug cargo run --example star_prism
//! ```

use std::io::{self, BufWriter, Write};

use shapegen::extrusion::{to_extrude_profile, ExtrudeOutline, ExtrudeProfile};
use shapegen::mesh::write_obj;
use shapegen::outline::{Outline, OutlineSpec};
use shapegen::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=shapegen=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("star_prism=info".parse().unwrap_or_default())
        .add_directive("shapegen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let shape = std::env::args().nth(1).unwrap_or_else(|| "star".to_owned());
    let Some((outline, profile)) = select_shape(&shape)? else {
        tracing::error!(shape = %shape, "unknown shape, expected `star` or `polygon`");
        std::process::exit(2);
    };

    let mesh = ExtrudeOutline::new(&outline, &profile).execute()?;
    tracing::info!(
        shape = %shape,
        outline_vertices = outline.len(),
        triangles = mesh.triangle_count(),
        volume = mesh.signed_volume(),
        "built mesh"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_obj(&mesh, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Outline and profile for a shape name, or `None` if the name is unknown.
fn select_shape(shape: &str) -> Result<Option<(Outline, ExtrudeProfile)>> {
    match shape {
        "star" => star().map(Some),
        "polygon" => polygon().map(Some),
        _ => Ok(None),
    }
}

fn star() -> Result<(Outline, ExtrudeProfile)> {
    let outline = OutlineSpec::star(0.4, 0.8, 5).generate()?;
    Ok((outline, to_extrude_profile(1.0, false)?))
}

fn polygon() -> Result<(Outline, ExtrudeProfile)> {
    let radius = 1.0;
    let outline = OutlineSpec::polygon(radius, 6).generate()?;
    Ok((outline, to_extrude_profile(radius * 0.25, false)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_shapes_are_selected() {
        let (star, _) = select_shape("star").unwrap().unwrap();
        assert_eq!(star.len(), 10);
        let (hexagon, profile) = select_shape("polygon").unwrap().unwrap();
        assert_eq!(hexagon.len(), 6);
        assert!((profile.depth() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(select_shape("cube").unwrap().is_none());
        assert!(select_shape("").unwrap().is_none());
    }
}
