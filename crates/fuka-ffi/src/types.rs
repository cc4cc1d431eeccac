//! C-compatible request and metadata structs, and their conversion to
//! `fuka-core` types.

use std::ffi::{c_char, CStr};
use std::path::Path;

use fuka_core::{BinaryInfo, BinaryType, Grid, InterpolationParams};

use crate::status::FukaStatus;

/// Binary configuration codes accepted in `binary_type` arguments.
///
/// Structs and functions carry the code as a raw `int32_t` so that values
/// outside this enum reach the unknown-type path instead of being UB.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FukaBinaryType {
    /// Binary neutron star.
    Bns = 0,
    /// Binary black hole.
    Bbh = 1,
    /// Black hole and neutron star.
    Bhns = 2,
}

impl From<FukaBinaryType> for BinaryType {
    fn from(t: FukaBinaryType) -> Self {
        match t {
            FukaBinaryType::Bns => BinaryType::Bns,
            FukaBinaryType::Bbh => BinaryType::Bbh,
            FukaBinaryType::Bhns => BinaryType::Bhns,
        }
    }
}

/// Sample coordinates: three caller-owned arrays of `n_points` doubles.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FukaGrid {
    /// x coordinates.
    pub x: *const f64,
    /// y coordinates.
    pub y: *const f64,
    /// z coordinates.
    pub z: *const f64,
    /// Number of points. May be 0, in which case the pointers may be null.
    pub n_points: i32,
}

/// Masses and x-positions of the two compact objects.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FukaBinaryInfo {
    /// Mass of the first object.
    pub mass1: f64,
    /// Mass of the second object.
    pub mass2: f64,
    /// x-position of the first object.
    pub position_x1: f64,
    /// x-position of the second object.
    pub position_x2: f64,
}

impl FukaBinaryInfo {
    /// Record returned by `read_binary_info` when the lookup fails.
    pub const NAN: Self = Self {
        mass1: f64::NAN,
        mass2: f64::NAN,
        position_x1: f64::NAN,
        position_x2: f64::NAN,
    };
}

impl From<BinaryInfo> for FukaBinaryInfo {
    fn from(info: BinaryInfo) -> Self {
        Self {
            mass1: info.mass1,
            mass2: info.mass2,
            position_x1: info.position_x1,
            position_x2: info.position_x2,
        }
    }
}

/// One interpolation request. The caller keeps ownership of everything it
/// points to.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FukaInterpolateRequest {
    /// Raw [`FukaBinaryType`] code.
    pub binary_type: i32,
    /// Null-terminated UTF-8 path of the solution's configuration file.
    pub info_filename: *const c_char,
    /// Sample points.
    pub grid: *const FukaGrid,
    /// Forwarded to BBH and BHNS exports.
    pub interpolation_offset: f64,
    /// Forwarded to BBH and BHNS exports.
    pub interpolation_order: i32,
    /// Forwarded to BBH and BHNS exports.
    pub relative_dr_spacing: f64,
}

impl FukaInterpolateRequest {
    pub(crate) fn params(&self) -> InterpolationParams {
        InterpolationParams {
            interpolation_offset: self.interpolation_offset,
            interpolation_order: self.interpolation_order,
            relative_dr_spacing: self.relative_dr_spacing,
        }
    }
}

/// Borrow a caller grid as a [`Grid`].
///
/// # Safety
///
/// For `n_points > 0`, `x`, `y` and `z` must each point to `n_points`
/// readable doubles that stay valid and unmodified for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn grid_from_ffi<'a>(grid: &FukaGrid) -> Result<Grid<'a>, FukaStatus> {
    let n = usize::try_from(grid.n_points).map_err(|_| FukaStatus::InvalidArgument)?;
    if n == 0 {
        return Ok(Grid::empty());
    }
    if grid.x.is_null() || grid.y.is_null() || grid.z.is_null() {
        return Err(FukaStatus::InvalidArgument);
    }
    // SAFETY: non-null, n elements each, per caller contract.
    let (x, y, z) = unsafe {
        (
            std::slice::from_raw_parts(grid.x, n),
            std::slice::from_raw_parts(grid.y, n),
            std::slice::from_raw_parts(grid.z, n),
        )
    };
    Grid::new(x, y, z).map_err(|_| FukaStatus::InvalidArgument)
}

/// Borrow a caller file name as a [`Path`].
///
/// # Safety
///
/// `ptr` must be null or point to a null-terminated string valid for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn path_from_ffi<'a>(ptr: *const c_char) -> Result<&'a Path, FukaStatus> {
    if ptr.is_null() {
        return Err(FukaStatus::InvalidArgument);
    }
    // SAFETY: non-null and null-terminated per caller contract.
    let name = unsafe { CStr::from_ptr(ptr) };
    name.to_str()
        .map(Path::new)
        .map_err(|_| FukaStatus::InvalidArgument)
}

// Compile-time layout assertions for ABI stability.
const _: () = assert!(std::mem::size_of::<FukaBinaryInfo>() == 32);
const _: () = assert!(std::mem::align_of::<FukaInterpolateRequest>() == 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_type_codes_match_core() {
        for t in [FukaBinaryType::Bns, FukaBinaryType::Bbh, FukaBinaryType::Bhns] {
            assert_eq!(BinaryType::from(t).as_raw(), t as i32);
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn empty_grid_accepts_null_pointers() {
        let g = FukaGrid {
            x: std::ptr::null(),
            y: std::ptr::null(),
            z: std::ptr::null(),
            n_points: 0,
        };
        let grid = unsafe { grid_from_ffi(&g) }.unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    #[allow(unsafe_code)]
    fn null_coordinates_rejected() {
        let x = [1.0];
        let g = FukaGrid {
            x: x.as_ptr(),
            y: std::ptr::null(),
            z: x.as_ptr(),
            n_points: 1,
        };
        assert_eq!(
            unsafe { grid_from_ffi(&g) }.unwrap_err(),
            FukaStatus::InvalidArgument
        );
    }

    #[test]
    #[allow(unsafe_code)]
    fn negative_point_count_rejected() {
        let g = FukaGrid {
            x: std::ptr::null(),
            y: std::ptr::null(),
            z: std::ptr::null(),
            n_points: -1,
        };
        assert_eq!(
            unsafe { grid_from_ffi(&g) }.unwrap_err(),
            FukaStatus::InvalidArgument
        );
    }

    #[test]
    #[allow(unsafe_code)]
    fn path_conversion() {
        let name = c"bin.info";
        assert_eq!(
            unsafe { path_from_ffi(name.as_ptr()) }.unwrap(),
            Path::new("bin.info")
        );
        assert_eq!(
            unsafe { path_from_ffi(std::ptr::null()) }.unwrap_err(),
            FukaStatus::InvalidArgument
        );
    }

    #[test]
    fn binary_info_converts_field_by_field() {
        let info = FukaBinaryInfo::from(BinaryInfo {
            mass1: 1.0,
            mass2: 2.0,
            position_x1: -3.0,
            position_x2: 4.0,
        });
        assert_eq!(info.mass1, 1.0);
        assert_eq!(info.mass2, 2.0);
        assert_eq!(info.position_x1, -3.0);
        assert_eq!(info.position_x2, 4.0);
    }
}
