//! Binary metadata lookups through the registered solver.

use std::ffi::c_char;

use fuka_core::{BinaryInfo, BinaryType};

use crate::solver;
use crate::status::FukaStatus;
use crate::types::{path_from_ffi, FukaBinaryInfo};

/// # Safety
///
/// `info_filename` must be null or a valid null-terminated string.
#[allow(unsafe_code)]
unsafe fn lookup(binary_type: i32, info_filename: *const c_char) -> Result<BinaryInfo, FukaStatus> {
    let Some(binary_type) = BinaryType::from_raw(binary_type) else {
        tracing::warn!(raw = binary_type, "unknown binary type, no info read");
        return Err(FukaStatus::UnknownBinaryType);
    };
    // SAFETY: forwarded caller contract.
    let path = unsafe { path_from_ffi(info_filename) }?;
    let reader = solver::registered()?.ok_or(FukaStatus::NoSolver)?;
    fuka_core::read_binary_info(&reader, binary_type, path).map_err(|e| {
        tracing::error!(error = %e, info_filename = %path.display(), "binary info lookup failed");
        FukaStatus::from(&e)
    })
}

/// Masses and x-positions of the two compact objects of a stored solution.
///
/// Every member is NaN if the lookup fails for any reason.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn read_binary_info(
    binary_type: i32,
    info_filename: *const c_char,
) -> FukaBinaryInfo {
    ffi_guard_or!(FukaBinaryInfo::NAN, {
        // SAFETY: info_filename is valid per caller contract.
        match unsafe { lookup(binary_type, info_filename) } {
            Ok(info) => info.into(),
            Err(_) => FukaBinaryInfo::NAN,
        }
    })
}

/// As [`read_binary_info`], reporting failures as a status code.
///
/// `*out` is left untouched unless the call returns `Ok`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_read_binary_info(
    binary_type: i32,
    info_filename: *const c_char,
    out: *mut FukaBinaryInfo,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return FukaStatus::InvalidArgument as i32;
        }
        // SAFETY: info_filename is valid per caller contract.
        match unsafe { lookup(binary_type, info_filename) } {
            Ok(info) => {
                // SAFETY: out is non-null and writable.
                unsafe { out.write(info.into()) };
                FukaStatus::Ok as i32
            }
            Err(status) => status as i32,
        }
    })
}
