use crate::error::{ensure_at_least, ensure_non_negative, ensure_positive, Result};

/// Shape of the chamfer added around both caps when bevelling is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevelSettings {
    thickness: f64,
    size: f64,
    segments: usize,
}

impl BevelSettings {
    /// Creates bevel settings.
    ///
    /// `thickness` is how far the bevel extends beyond each cap along the
    /// extrusion axis, `size` how far the walls are pushed out from the
    /// outline, and `segments` the number of rings on each bevel.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` or `size` is negative or not finite,
    /// or `segments` is zero.
    pub fn new(thickness: f64, size: f64, segments: usize) -> Result<Self> {
        ensure_non_negative("bevel_thickness", thickness)?;
        ensure_non_negative("bevel_size", size)?;
        ensure_at_least("bevel_segments", segments, 1, "an integer >= 1")?;
        Ok(Self {
            thickness,
            size,
            segments,
        })
    }

    /// Distance the bevel extends past each cap.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Outward offset of the walls.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Number of rings per bevel.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }
}

impl Default for BevelSettings {
    fn default() -> Self {
        Self {
            thickness: 0.2,
            size: 0.1,
            segments: 3,
        }
    }
}

/// How an outline is given depth: extrusion distance plus bevel options.
///
/// Carries no geometry itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeProfile {
    depth: f64,
    bevel_enabled: bool,
    steps: usize,
    bevel: BevelSettings,
}

impl ExtrudeProfile {
    /// Creates a profile with one wall step and default bevel settings.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidArgument`](crate::ShapeError::InvalidArgument)
    /// if `depth` is not a finite positive number.
    pub fn new(depth: f64, bevel_enabled: bool) -> Result<Self> {
        ensure_positive("depth", depth)?;
        Ok(Self {
            depth,
            bevel_enabled,
            steps: 1,
            bevel: BevelSettings::default(),
        })
    }

    /// Sets the number of wall subdivisions along the extrusion axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero.
    pub fn with_steps(mut self, steps: usize) -> Result<Self> {
        ensure_at_least("steps", steps, 1, "an integer >= 1")?;
        self.steps = steps;
        Ok(self)
    }

    /// Enables bevelling with the given settings.
    #[must_use]
    pub fn with_bevel(mut self, bevel: BevelSettings) -> Self {
        self.bevel_enabled = true;
        self.bevel = bevel;
        self
    }

    /// Extrusion distance along +Z.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Whether the caps are bevelled.
    #[must_use]
    pub fn bevel_enabled(&self) -> bool {
        self.bevel_enabled
    }

    /// Number of wall subdivisions between the caps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Bevel settings; only used when [`bevel_enabled`](Self::bevel_enabled).
    #[must_use]
    pub fn bevel(&self) -> &BevelSettings {
        &self.bevel
    }
}

/// Builds an [`ExtrudeProfile`] after validating `depth > 0`.
///
/// # Errors
///
/// See [`ExtrudeProfile::new`].
pub fn to_extrude_profile(depth: f64, bevel_enabled: bool) -> Result<ExtrudeProfile> {
    ExtrudeProfile::new(depth, bevel_enabled)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults() {
        let profile = to_extrude_profile(1.0, false).unwrap();
        assert_abs_diff_eq!(profile.depth(), 1.0);
        assert!(!profile.bevel_enabled());
        assert_eq!(profile.steps(), 1);
        assert_eq!(*profile.bevel(), BevelSettings::default());
    }

    #[test]
    fn bevel_flag_is_carried() {
        assert!(to_extrude_profile(0.25, true).unwrap().bevel_enabled());
    }

    #[test]
    fn non_positive_depth_fails() {
        for depth in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                to_extrude_profile(depth, false),
                Err(ShapeError::InvalidArgument { parameter: "depth", .. })
            ));
        }
    }

    #[test]
    fn steps_must_be_positive() {
        let profile = to_extrude_profile(1.0, false).unwrap();
        assert!(profile.with_steps(0).is_err());
        assert_eq!(profile.with_steps(4).unwrap().steps(), 4);
    }

    #[test]
    fn with_bevel_enables_flag() {
        let bevel = BevelSettings::new(0.05, 0.02, 2).unwrap();
        let profile = to_extrude_profile(1.0, false).unwrap().with_bevel(bevel);
        assert!(profile.bevel_enabled());
        assert_eq!(profile.bevel().segments(), 2);
    }

    #[test]
    fn bevel_settings_validation() {
        assert!(BevelSettings::new(-0.1, 0.1, 3).is_err());
        assert!(BevelSettings::new(0.1, f64::INFINITY, 3).is_err());
        assert!(BevelSettings::new(0.1, 0.1, 0).is_err());
        assert!(BevelSettings::new(0.0, 0.0, 1).is_ok());
    }
}
