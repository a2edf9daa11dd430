mod cap;
mod extrude_outline;
mod profile;

pub use extrude_outline::ExtrudeOutline;
pub use profile::{to_extrude_profile, BevelSettings, ExtrudeProfile};
