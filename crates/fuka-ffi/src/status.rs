//! C-compatible status codes.
//!
//! [`FukaStatus`] is a `repr(i32)` enum covering every failure the
//! status-returning entry points can report. Conversions from the
//! `fuka-core` error types are provided.

use fuka_core::{ConfigError, FieldsError, InfoError, InterpolateError};

/// C-compatible status code returned by the `fuka_*` functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FukaStatus {
    /// Success.
    Ok = 0,
    /// An argument is null, negative, not UTF-8, or otherwise invalid.
    InvalidArgument = -1,
    /// The binary type is not BNS, BBH or BHNS. No buffers were allocated.
    UnknownBinaryType = -2,
    /// No solver callbacks are registered.
    NoSolver = -3,
    /// A solver export callback failed or is missing.
    SolverFailed = -4,
    /// A configuration callback failed or is missing.
    ReadFailed = -5,
    /// The solver returned a result of the wrong quantity set.
    QuantitySetMismatch = -6,
    /// Field buffers could not be allocated.
    AllocationFailed = -7,
    /// A configuration value is invalid (e.g. zero chunks).
    ConfigError = -8,
    /// Logging was already initialized.
    AlreadyInitialized = -9,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -10,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&FieldsError> for FukaStatus {
    fn from(e: &FieldsError) -> Self {
        match e {
            FieldsError::AllocationFailed { .. } => FukaStatus::AllocationFailed,
        }
    }
}

impl From<&ConfigError> for FukaStatus {
    fn from(_e: &ConfigError) -> Self {
        FukaStatus::ConfigError
    }
}

impl From<&InterpolateError> for FukaStatus {
    fn from(e: &InterpolateError) -> Self {
        match e {
            InterpolateError::Export { .. } => FukaStatus::SolverFailed,
            InterpolateError::QuantitySetMismatch { .. } => FukaStatus::QuantitySetMismatch,
            InterpolateError::Fields(e) => FukaStatus::from(e),
            InterpolateError::Config(e) => FukaStatus::from(e),
        }
    }
}

impl From<&InfoError> for FukaStatus {
    fn from(e: &InfoError) -> Self {
        match e {
            InfoError::Read { .. } => FukaStatus::ReadFailed,
        }
    }
}
