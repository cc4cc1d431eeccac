//! Error types for field export.
//!
//! Organized by subsystem: grid construction, buffer allocation,
//! configuration, the external solver and configuration reader, and the
//! two top-level operations ([`interpolate`](crate::interpolate) and
//! [`read_binary_info`](crate::read_binary_info)).

use std::error::Error;
use std::fmt;

use crate::binary::BinaryType;
use crate::quantity::QuantitySet;

/// Errors from [`Grid::new`](crate::Grid::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The three coordinate sequences have different lengths.
    LengthMismatch {
        /// Length of the x coordinates.
        x: usize,
        /// Length of the y coordinates.
        y: usize,
        /// Length of the z coordinates.
        z: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { x, y, z } => {
                write!(f, "coordinate lengths differ: x={x}, y={y}, z={z}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from the buffer allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldsError {
    /// A field buffer could not be reserved (OOM or capacity overflow).
    AllocationFailed {
        /// Points per buffer in the record that failed.
        n_points: usize,
    },
}

impl fmt::Display for FieldsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { n_points } => {
                write!(f, "cannot allocate field buffers for {n_points} points")
            }
        }
    }
}

impl Error for FieldsError {}

/// Errors from [`InterpolationParams::validate`](crate::InterpolationParams::validate)
/// and [`ChunkConfig::validate`](crate::ChunkConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `interpolation_offset` is NaN or infinite.
    InvalidOffset {
        /// The invalid value.
        value: f64,
    },
    /// `interpolation_order` is zero or negative.
    InvalidOrder {
        /// The invalid value.
        value: i32,
    },
    /// `relative_dr_spacing` is NaN, infinite, zero or negative.
    InvalidSpacing {
        /// The invalid value.
        value: f64,
    },
    /// Chunked interpolation was asked for zero chunks.
    ZeroChunks,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOffset { value } => {
                write!(f, "interpolation_offset must be finite, got {value}")
            }
            Self::InvalidOrder { value } => {
                write!(f, "interpolation_order must be positive, got {value}")
            }
            Self::InvalidSpacing { value } => {
                write!(
                    f,
                    "relative_dr_spacing must be finite and positive, got {value}"
                )
            }
            Self::ZeroChunks => write!(f, "n_chunks must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Failure reported by the spectral solver's export entry points.
///
/// The solver owns the meaning of `code`; it is passed through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportError {
    /// Collaborator-defined error code.
    pub code: i32,
    /// Human-readable description of the failure.
    pub reason: String,
}

impl ExportError {
    /// Build an error from a collaborator code and description.
    pub fn new(code: i32, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solver export failed (code {}): {}", self.code, self.reason)
    }
}

impl Error for ExportError {}

/// Failure reported by the solution configuration reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadError {
    /// Collaborator-defined error code.
    pub code: i32,
    /// Human-readable description of the failure.
    pub reason: String,
}

impl ReadError {
    /// Build an error from a collaborator code and description.
    pub fn new(code: i32, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "solution reader failed (code {}): {}",
            self.code, self.reason
        )
    }
}

impl Error for ReadError {}

/// Errors from [`interpolate`](crate::interpolate).
#[derive(Clone, Debug, PartialEq)]
pub enum InterpolateError {
    /// The solver entry point failed.
    Export {
        /// Binary type whose entry point was called.
        binary_type: BinaryType,
        /// The solver's error, unchanged.
        source: ExportError,
    },
    /// The solver returned a result of the wrong shape for the binary type.
    QuantitySetMismatch {
        /// Binary type whose entry point was called.
        binary_type: BinaryType,
        /// Shape the binary type requires.
        expected: QuantitySet,
        /// Shape the solver returned.
        actual: QuantitySet,
    },
    /// The output buffers could not be allocated.
    Fields(FieldsError),
    /// Request parameters are invalid.
    Config(ConfigError),
}

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export {
                binary_type,
                source,
            } => write!(f, "{binary_type} export failed: {source}"),
            Self::QuantitySetMismatch {
                binary_type,
                expected,
                actual,
            } => write!(
                f,
                "{binary_type} export returned the {actual} quantity set, expected {expected}"
            ),
            Self::Fields(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "invalid request: {e}"),
        }
    }
}

impl Error for InterpolateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Export { source, .. } => Some(source),
            Self::Fields(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::QuantitySetMismatch { .. } => None,
        }
    }
}

impl From<FieldsError> for InterpolateError {
    fn from(e: FieldsError) -> Self {
        Self::Fields(e)
    }
}

impl From<ConfigError> for InterpolateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Errors from [`read_binary_info`](crate::read_binary_info).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoError {
    /// The configuration reader failed.
    Read {
        /// Binary type being read.
        binary_type: BinaryType,
        /// The reader's error, unchanged.
        source: ReadError,
    },
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read {
                binary_type,
                source,
            } => write!(f, "cannot read {binary_type} binary info: {source}"),
        }
    }
}

impl Error for InfoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_chains_source() {
        let e = InterpolateError::Export {
            binary_type: BinaryType::Bbh,
            source: ExportError::new(3, "missing space file"),
        };
        assert_eq!(
            e.to_string(),
            "BBH export failed: solver export failed (code 3): missing space file"
        );
        let src = e.source().expect("source");
        assert_eq!(
            src.to_string(),
            "solver export failed (code 3): missing space file"
        );
    }

    #[test]
    fn mismatch_names_both_sets() {
        let e = InterpolateError::QuantitySetMismatch {
            binary_type: BinaryType::Bns,
            expected: QuantitySet::Matter,
            actual: QuantitySet::Vacuum,
        };
        assert_eq!(
            e.to_string(),
            "BNS export returned the vacuum quantity set, expected matter"
        );
        assert!(e.source().is_none());
    }

    #[test]
    fn fields_error_converts() {
        let e: InterpolateError = FieldsError::AllocationFailed { n_points: 64 }.into();
        assert!(matches!(e, InterpolateError::Fields(_)));
        assert_eq!(e.to_string(), "cannot allocate field buffers for 64 points");
    }

    #[test]
    fn allocation_failure_reports_points_not_bytes() {
        let e = FieldsError::AllocationFailed { n_points: usize::MAX };
        assert_eq!(
            e.to_string(),
            format!("cannot allocate field buffers for {} points", usize::MAX)
        );
    }

    #[test]
    fn info_error_display() {
        let e = InfoError::Read {
            binary_type: BinaryType::Bhns,
            source: ReadError::new(-1, "no such file"),
        };
        assert_eq!(
            e.to_string(),
            "cannot read BHNS binary info: solution reader failed (code -1): no such file"
        );
    }
}
