//! C ABI for exporting FUKA initial-data fields.
//!
//! A simulation code links this library, registers the spectral solver's
//! export and configuration callbacks once ([`fuka_solver_register`]), and
//! then requests fields on arbitrary grids. Results come back as
//! [`FukaFields`]: 22 flat `double` buffers the caller owns until it hands
//! them to [`free_fields`].
//!
//! Two families of entry points exist side by side:
//!
//! - the legacy by-value functions (`allocate_fields`, `free_fields`,
//!   `interpolate_FUKA_ID`, `read_binary_info`), whose failure behavior is
//!   fixed by existing callers;
//! - status-returning `fuka_*` functions that report every failure as a
//!   [`FukaStatus`] code and write results through out-pointers.
//!
//! Panics never unwind across the boundary: every exported function runs
//! inside `ffi_guard!` and reports a caught panic as
//! [`FukaStatus::Panicked`] (or an empty result for by-value functions).
//! This crate is the only one in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body`, returning `$fallback` if it panics.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .copied()
                    .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                    .unwrap_or("non-string panic payload");
                tracing::error!(panic = message, "panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

/// Run `$body`, returning `FukaStatus::Panicked` if it panics.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::FukaStatus::Panicked as i32, $body)
    };
}

/// Lock a mutex, returning `FukaStatus::InternalError` if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::FukaStatus::InternalError as i32,
        }
    };
}

pub mod fields;
pub mod info;
pub mod interpolate;
pub mod logging;
pub mod solver;
pub mod status;
pub mod types;

pub use fields::{allocate_fields, free_fields, fuka_fields_allocate, FukaFields};
pub use info::{fuka_read_binary_info, read_binary_info};
pub use interpolate::{
    fuka_interpolate, fuka_interpolate_chunked, interpolate_FUKA_ID, Interpolation,
};
pub use logging::fuka_log_init;
pub use solver::{fuka_solver_register, fuka_solver_unregister, FukaSolverDef};
pub use status::FukaStatus;
pub use types::{FukaBinaryInfo, FukaBinaryType, FukaGrid, FukaInterpolateRequest};

#[cfg(test)]
pub(crate) mod test_support;
