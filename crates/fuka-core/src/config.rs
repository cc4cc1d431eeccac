//! Solver tuning parameters and chunking configuration.

use crate::error::ConfigError;

// ── InterpolationParams ────────────────────────────────────────────

/// Tuning parameters forwarded to the BBH and BHNS export entry points.
///
/// The BNS entry point does not accept them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolationParams {
    /// Radial offset from the excision surface inside which black-hole
    /// interiors are filled by interpolation. Default: 0.0.
    pub interpolation_offset: f64,
    /// Order of the interior interpolation polynomial. Default: 8.
    pub interpolation_order: i32,
    /// Radial spacing of the interpolation stencil, relative to the
    /// excision radius. Default: 0.3.
    pub relative_dr_spacing: f64,
}

impl Default for InterpolationParams {
    fn default() -> Self {
        Self {
            interpolation_offset: 0.0,
            interpolation_order: 8,
            relative_dr_spacing: 0.3,
        }
    }
}

impl InterpolationParams {
    /// Check that the parameters are usable by the solver.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.interpolation_offset.is_finite() {
            return Err(ConfigError::InvalidOffset {
                value: self.interpolation_offset,
            });
        }
        if self.interpolation_order <= 0 {
            return Err(ConfigError::InvalidOrder {
                value: self.interpolation_order,
            });
        }
        if !self.relative_dr_spacing.is_finite() || self.relative_dr_spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                value: self.relative_dr_spacing,
            });
        }
        Ok(())
    }
}

// ── ChunkConfig ────────────────────────────────────────────────────

/// Configuration for [`interpolate_chunked`](crate::interpolate_chunked).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Number of contiguous grid chunks exported one after another. Default: 1.
    pub n_chunks: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self { n_chunks: 1 }
    }
}

impl ChunkConfig {
    /// Check that at least one chunk is requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_chunks == 0 {
            return Err(ConfigError::ZeroChunks);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(InterpolationParams::default().validate().is_ok());
        assert!(ChunkConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_offset() {
        let p = InterpolationParams {
            interpolation_offset: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_order() {
        let p = InterpolationParams {
            interpolation_order: 0,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(ConfigError::InvalidOrder { value: 0 }));
    }

    #[test]
    fn rejects_bad_spacing() {
        for value in [0.0, -0.1, f64::INFINITY] {
            let p = InterpolationParams {
                relative_dr_spacing: value,
                ..Default::default()
            };
            assert!(matches!(
                p.validate(),
                Err(ConfigError::InvalidSpacing { .. })
            ));
        }
    }

    #[test]
    fn zero_chunks_rejected() {
        assert_eq!(
            ChunkConfig { n_chunks: 0 }.validate(),
            Err(ConfigError::ZeroChunks)
        );
    }
}
