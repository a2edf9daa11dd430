//! Procedural regular-polygon and star outlines, and their extrusion into
//! closed triangle meshes.
//!
//! ```
//! use shapegen::extrusion::{to_extrude_profile, ExtrudeOutline};
//! use shapegen::outline::generate_star_outline;
//!
//! let star = generate_star_outline(0.4, 0.8, 5, 0.0)?;
//! let profile = to_extrude_profile(1.0, false)?;
//! let mesh = ExtrudeOutline::new(&star, &profile).execute()?;
//! assert_eq!(star.len(), 10);
//! assert!(mesh.signed_volume() > 0.0);
//! # Ok::<(), shapegen::ShapeError>(())
//! ```

pub mod error;
pub mod extrusion;
pub mod math;
pub mod mesh;
pub mod outline;

pub use error::{Result, ShapeError};
