//! The C field record: 22 owned `double` buffers, and their lifecycle.
//!
//! Buffers leave Rust as `Box<[f64]>` turned into raw pointers and come back
//! through [`free_fields`], which rebuilds the boxes from `n_points`.

use fuka_core::{Fields, Quantity};

use crate::status::FukaStatus;

/// Exported fields at `n_points` grid points.
///
/// Every buffer is either null or an allocation of exactly `n_points`
/// doubles owned by this record. Ownership passes to the caller, who must
/// release the record with [`free_fields`] exactly once.
#[repr(C)]
#[derive(Debug)]
#[allow(non_snake_case)]
pub struct FukaFields {
    /// Lapse.
    pub alpha: *mut f64,
    /// Shift, x component.
    pub beta_x: *mut f64,
    /// Shift, y component.
    pub beta_y: *mut f64,
    /// Shift, z component.
    pub beta_z: *mut f64,
    /// Spatial metric, xx component.
    pub gamma_xx: *mut f64,
    /// Spatial metric, xy component.
    pub gamma_xy: *mut f64,
    /// Spatial metric, xz component.
    pub gamma_xz: *mut f64,
    /// Spatial metric, yy component.
    pub gamma_yy: *mut f64,
    /// Spatial metric, yz component.
    pub gamma_yz: *mut f64,
    /// Spatial metric, zz component.
    pub gamma_zz: *mut f64,
    /// Extrinsic curvature, xx component.
    pub K_xx: *mut f64,
    /// Extrinsic curvature, xy component.
    pub K_xy: *mut f64,
    /// Extrinsic curvature, xz component.
    pub K_xz: *mut f64,
    /// Extrinsic curvature, yy component.
    pub K_yy: *mut f64,
    /// Extrinsic curvature, yz component.
    pub K_yz: *mut f64,
    /// Extrinsic curvature, zz component.
    pub K_zz: *mut f64,
    /// Rest-mass density. Zero for BBH.
    pub rho: *mut f64,
    /// Specific internal energy. Zero for BBH.
    pub epsilon: *mut f64,
    /// Pressure. Zero for BBH.
    pub pressure: *mut f64,
    /// Fluid velocity, x component. Zero for BBH.
    pub v_x: *mut f64,
    /// Fluid velocity, y component. Zero for BBH.
    pub v_y: *mut f64,
    /// Fluid velocity, z component. Zero for BBH.
    pub v_z: *mut f64,
    /// Length of every non-null buffer.
    pub n_points: i32,
}

// 22 pointers plus a padded i32.
const _: () = assert!(
    std::mem::size_of::<FukaFields>() == 23 * std::mem::size_of::<*mut f64>()
);

impl FukaFields {
    /// The empty record: every buffer null, `n_points = 0`.
    ///
    /// Returned on every failure path. Passing it to [`free_fields`] is a no-op.
    pub const fn empty() -> Self {
        let null = std::ptr::null_mut();
        Self {
            alpha: null,
            beta_x: null,
            beta_y: null,
            beta_z: null,
            gamma_xx: null,
            gamma_xy: null,
            gamma_xz: null,
            gamma_yy: null,
            gamma_yz: null,
            gamma_zz: null,
            K_xx: null,
            K_xy: null,
            K_xz: null,
            K_yy: null,
            K_yz: null,
            K_zz: null,
            rho: null,
            epsilon: null,
            pressure: null,
            v_x: null,
            v_y: null,
            v_z: null,
            n_points: 0,
        }
    }

    /// True if every buffer is null.
    pub fn is_empty(&self) -> bool {
        self.buffers().iter().all(|p| p.is_null())
    }

    /// Buffer handles in data-model order.
    pub fn buffers(&self) -> [*mut f64; Quantity::MATTER_LEN] {
        [
            self.alpha,
            self.beta_x,
            self.beta_y,
            self.beta_z,
            self.gamma_xx,
            self.gamma_xy,
            self.gamma_xz,
            self.gamma_yy,
            self.gamma_yz,
            self.gamma_zz,
            self.K_xx,
            self.K_xy,
            self.K_xz,
            self.K_yy,
            self.K_yz,
            self.K_zz,
            self.rho,
            self.epsilon,
            self.pressure,
            self.v_x,
            self.v_y,
            self.v_z,
        ]
    }

    fn buffers_mut(&mut self) -> [&mut *mut f64; Quantity::MATTER_LEN] {
        [
            &mut self.alpha,
            &mut self.beta_x,
            &mut self.beta_y,
            &mut self.beta_z,
            &mut self.gamma_xx,
            &mut self.gamma_xy,
            &mut self.gamma_xz,
            &mut self.gamma_yy,
            &mut self.gamma_yz,
            &mut self.gamma_zz,
            &mut self.K_xx,
            &mut self.K_xy,
            &mut self.K_xz,
            &mut self.K_yy,
            &mut self.K_yz,
            &mut self.K_zz,
            &mut self.rho,
            &mut self.epsilon,
            &mut self.pressure,
            &mut self.v_x,
            &mut self.v_y,
            &mut self.v_z,
        ]
    }

    /// Hand `fields` over to C. Fails if `n_points` does not fit in `i32`.
    pub(crate) fn from_fields(fields: Fields) -> Result<Self, FukaStatus> {
        let n_points = i32::try_from(fields.n_points()).map_err(|_| FukaStatus::InvalidArgument)?;
        let mut record = Self::empty();
        record.n_points = n_points;
        for (slot, buffer) in record.buffers_mut().into_iter().zip(fields.into_buffers()) {
            *slot = Box::into_raw(buffer.into_boxed_slice()).cast::<f64>();
        }
        Ok(record)
    }

    /// Release every non-null buffer and reset the record to empty.
    ///
    /// # Safety
    ///
    /// Every non-null handle must be a buffer of `n_points` doubles
    /// produced by this library and not yet released.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn release(&mut self) {
        let Ok(n) = usize::try_from(self.n_points) else {
            tracing::error!(n_points = self.n_points, "refusing to free fields with negative size");
            return;
        };
        for slot in self.buffers_mut() {
            if !slot.is_null() {
                // SAFETY: produced by Box::<[f64]>::into_raw with length n.
                drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(*slot, n)) });
            }
            *slot = std::ptr::null_mut();
        }
        self.n_points = 0;
    }
}

impl Default for FukaFields {
    fn default() -> Self {
        Self::empty()
    }
}

/// Allocate 22 zero-filled buffers of `n_points` doubles each.
///
/// Exits the process with a diagnostic if the buffers cannot be allocated.
/// Negative `n_points` yields the empty record. Use
/// [`fuka_fields_allocate`] to get an error code instead.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn allocate_fields(n_points: i32) -> FukaFields {
    ffi_guard_or!(FukaFields::empty(), {
        let Ok(n) = usize::try_from(n_points) else {
            tracing::warn!(n_points, "negative point count");
            return FukaFields::empty();
        };
        match Fields::allocate(n) {
            Ok(fields) => FukaFields::from_fields(fields).unwrap_or_else(|_| FukaFields::empty()),
            Err(e) => {
                tracing::error!(error = %e, n_points = n, "field allocation failed, exiting");
                eprintln!("allocate_fields: {e}");
                std::process::exit(1);
            }
        }
    })
}

/// Allocate 22 zero-filled buffers of `n_points` doubles each into `*out`.
///
/// On failure `*out` is set to the empty record.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_fields_allocate(n_points: i32, out: *mut FukaFields) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return FukaStatus::InvalidArgument as i32;
        }
        // SAFETY: out is non-null and writable per caller contract.
        unsafe { out.write(FukaFields::empty()) };
        let Ok(n) = usize::try_from(n_points) else {
            return FukaStatus::InvalidArgument as i32;
        };
        let record = match Fields::allocate(n) {
            Ok(fields) => FukaFields::from_fields(fields),
            Err(e) => {
                tracing::error!(error = %e, "field allocation failed");
                Err(FukaStatus::from(&e))
            }
        };
        match record {
            Ok(record) => {
                unsafe { out.write(record) };
                FukaStatus::Ok as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Release every buffer of `*fields` and reset it to the empty record.
///
/// Null buffers are skipped, so the empty record and an already-freed
/// record are no-ops. Freeing a bitwise copy of a freed record is a caller
/// error this function cannot detect. A null `fields` is ignored.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn free_fields(fields: *mut FukaFields) {
    ffi_guard_or!((), {
        if fields.is_null() {
            return;
        }
        // SAFETY: non-null, points to a record produced by this library.
        unsafe { (*fields).release() };
    })
}
