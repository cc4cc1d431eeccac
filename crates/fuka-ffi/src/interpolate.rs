//! Interpolation entry points: validate a C request, route it to the
//! registered solver, and hand the resulting buffers to the caller.

use fuka_core::{BinaryType, ChunkConfig, Fields, InterpolateRequest};

use crate::fields::FukaFields;
use crate::solver;
use crate::status::FukaStatus;
use crate::types::{grid_from_ffi, path_from_ffi, FukaInterpolateRequest};

/// Outcome of a request that passed argument validation.
#[derive(Debug)]
pub enum Interpolation {
    /// The solver ran and every buffer is filled.
    Success(Fields),
    /// `raw` names no known binary type. The solver was not called and
    /// nothing was allocated.
    UnknownBinaryType {
        /// The unrecognized code.
        raw: i32,
    },
}

/// Run one request against the registered solver.
///
/// The binary type is checked first, so an unknown type never reaches grid
/// validation or the solver. `n_chunks` selects chunked export.
///
/// # Safety
///
/// The grid and file name referenced by `request` must be valid per the
/// [`FukaInterpolateRequest`] contract for the duration of the call.
#[allow(unsafe_code)]
unsafe fn dispatch(
    request: &FukaInterpolateRequest,
    n_chunks: Option<usize>,
) -> Result<Interpolation, FukaStatus> {
    let Some(binary_type) = BinaryType::from_raw(request.binary_type) else {
        tracing::warn!(raw = request.binary_type, "unknown binary type, no fields exported");
        return Ok(Interpolation::UnknownBinaryType {
            raw: request.binary_type,
        });
    };
    if request.grid.is_null() {
        return Err(FukaStatus::InvalidArgument);
    }
    // SAFETY: non-null, valid per caller contract.
    let grid = unsafe { grid_from_ffi(&*request.grid) }?;
    let info_filename = unsafe { path_from_ffi(request.info_filename) }?;
    let exporter = solver::registered()?.ok_or_else(|| {
        tracing::error!("interpolation requested with no solver registered");
        FukaStatus::NoSolver
    })?;

    let core_request = InterpolateRequest {
        binary_type,
        info_filename,
        grid,
        params: request.params(),
    };
    let result = match n_chunks {
        None => fuka_core::interpolate(&exporter, &core_request),
        Some(n_chunks) => {
            fuka_core::interpolate_chunked(&exporter, &core_request, &ChunkConfig { n_chunks })
        }
    };
    result.map(Interpolation::Success).map_err(|e| {
        tracing::error!(
            error = %e,
            info_filename = %info_filename.display(),
            "interpolation failed"
        );
        FukaStatus::from(&e)
    })
}

/// Reset `*out` to the empty record if `out` is non-null.
#[allow(unsafe_code)]
fn clear_out(out: *mut FukaFields) {
    if !out.is_null() {
        // SAFETY: out is non-null and writable per caller contract.
        unsafe { out.write(FukaFields::empty()) };
    }
}

/// Shared body of the status-returning entry points.
#[allow(unsafe_code)]
fn interpolate_into(
    request: *const FukaInterpolateRequest,
    n_chunks: Option<usize>,
    out: *mut FukaFields,
) -> i32 {
    clear_out(out);
    if request.is_null() || out.is_null() {
        return FukaStatus::InvalidArgument as i32;
    }
    // SAFETY: request is non-null and valid per caller contract.
    let outcome = match unsafe { dispatch(&*request, n_chunks) } {
        Ok(outcome) => outcome,
        Err(status) => return status as i32,
    };
    match outcome {
        Interpolation::Success(fields) => match FukaFields::from_fields(fields) {
            Ok(record) => {
                unsafe { out.write(record) };
                FukaStatus::Ok as i32
            }
            Err(status) => status as i32,
        },
        Interpolation::UnknownBinaryType { .. } => FukaStatus::UnknownBinaryType as i32,
    }
}

/// Export the fields of one solution on the request's grid.
///
/// Returns the empty record (every buffer null) if the binary type is
/// unknown, an argument is invalid, no solver is registered, or the solver
/// fails. Failures are logged. Use [`fuka_interpolate`] to get the reason
/// as a status code.
#[no_mangle]
#[allow(unsafe_code, non_snake_case)]
pub extern "C" fn interpolate_FUKA_ID(request: *const FukaInterpolateRequest) -> FukaFields {
    ffi_guard_or!(FukaFields::empty(), {
        if request.is_null() {
            return FukaFields::empty();
        }
        // SAFETY: request is non-null and valid per caller contract.
        match unsafe { dispatch(&*request, None) } {
            Ok(Interpolation::Success(fields)) => {
                FukaFields::from_fields(fields).unwrap_or_else(|_| FukaFields::empty())
            }
            Ok(Interpolation::UnknownBinaryType { .. }) | Err(_) => FukaFields::empty(),
        }
    })
}

/// Export the fields of one solution on the request's grid into `*out`.
///
/// Whenever `out` is non-null, `*out` is the empty record unless the call
/// returns `Ok`. Its previous contents are overwritten, not freed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_interpolate(
    request: *const FukaInterpolateRequest,
    out: *mut FukaFields,
) -> i32 {
    ffi_guard!({ interpolate_into(request, None, out) })
}

/// As [`fuka_interpolate`], exporting the grid in `n_chunks` contiguous
/// chunks and concatenating the results.
///
/// At most one chunk per point is used. `n_chunks = 0` is rejected with
/// `ConfigError`, a negative count with `InvalidArgument`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_interpolate_chunked(
    request: *const FukaInterpolateRequest,
    n_chunks: i32,
    out: *mut FukaFields,
) -> i32 {
    ffi_guard!({
        let Ok(n_chunks) = usize::try_from(n_chunks) else {
            clear_out(out);
            return FukaStatus::InvalidArgument as i32;
        };
        interpolate_into(request, Some(n_chunks), out)
    })
}
