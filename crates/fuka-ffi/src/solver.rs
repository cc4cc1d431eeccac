//! C callback solver: bridges `FukaSolverDef` to the `KadathExporter` and
//! `SolutionReader` traits.
//!
//! The spectral solver lives on the C side. It registers one
//! [`FukaSolverDef`] with [`fuka_solver_register`]; every later request is
//! served by a `CallbackSolver` copied out of the registry.

use std::ffi::{c_char, c_void, CString};
use std::path::Path;
use std::sync::Mutex;

use fuka_core::{
    Axis, BinaryConfig, BinaryType, Component, DomainLabel, DomainSpace, ExportError, Exported,
    Grid, InterpolationParams, KadathExporter, MassKind, QuantitySet, ReadError, SolutionReader,
};

use crate::status::FukaStatus;

/// BNS export: `(user_data, n_points, x, y, z, info_filename, slots, n_slots) -> status`.
///
/// Must write `n_points` values into each of the `n_slots` buffers.
pub type FukaExportBnsFn = unsafe extern "C" fn(
    *mut c_void,
    i32,
    *const f64,
    *const f64,
    *const f64,
    *const c_char,
    *const *mut f64,
    i32,
) -> i32;

/// BBH or BHNS export: as [`FukaExportBnsFn`], with `interpolation_offset`,
/// `interpolation_order` and `relative_dr_spacing` before `slots`.
pub type FukaExportTunedFn = unsafe extern "C" fn(
    *mut c_void,
    i32,
    *const f64,
    *const f64,
    *const f64,
    *const c_char,
    f64,
    i32,
    f64,
    *const *mut f64,
    i32,
) -> i32;

/// Center-of-mass offset: `(user_data, info_filename, out) -> status`.
pub type FukaCenterOfMassFn = unsafe extern "C" fn(*mut c_void, *const c_char, *mut f64) -> i32;

/// Component mass: `(user_data, info_filename, mass_kind, component, out) -> status`.
pub type FukaMassFn =
    unsafe extern "C" fn(*mut c_void, *const c_char, i32, i32, *mut f64) -> i32;

/// Domain coordinate:
/// `(user_data, info_filename, binary_type, domain, axis, index, out) -> status`.
pub type FukaDomainCoordFn =
    unsafe extern "C" fn(*mut c_void, *const c_char, i32, i32, i32, i32, *mut f64) -> i32;

/// C-side solver definition with function pointers.
///
/// All callbacks return 0 on success. A missing callback makes the
/// requests that need it fail. `user_data` is passed to every callback and
/// must stay valid until the solver is unregistered or replaced.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FukaSolverDef {
    /// Opaque pointer passed to every callback.
    pub user_data: *mut c_void,
    /// Binary neutron star export (22 slots).
    pub export_bns_fn: Option<FukaExportBnsFn>,
    /// Binary black hole export (16 slots).
    pub export_bbh_fn: Option<FukaExportTunedFn>,
    /// Black hole / neutron star export (22 slots).
    pub export_bhns_fn: Option<FukaExportTunedFn>,
    /// Center-of-mass offset of a stored solution.
    pub center_of_mass_fn: Option<FukaCenterOfMassFn>,
    /// Mass of one component of a stored solution.
    pub mass_fn: Option<FukaMassFn>,
    /// Cartesian coordinate of a collocation point of a named domain.
    pub domain_coord_fn: Option<FukaDomainCoordFn>,
}

/// Rust-side wrapper that implements the solver traits by delegating to C
/// callbacks.
#[derive(Clone, Copy)]
pub(crate) struct CallbackSolver {
    def: FukaSolverDef,
}

// SAFETY: registration requires user_data to be usable from any thread and
// the callbacks to be reentrant.
#[allow(unsafe_code)]
unsafe impl Send for CallbackSolver {}

static SOLVER: Mutex<Option<CallbackSolver>> = Mutex::new(None);

/// Copy of the registered solver, if any. The registry lock is released
/// before any callback runs.
pub(crate) fn registered() -> Result<Option<CallbackSolver>, FukaStatus> {
    SOLVER
        .lock()
        .map(|guard| *guard)
        .map_err(|_| FukaStatus::InternalError)
}

fn c_filename(info_filename: &Path) -> Option<CString> {
    info_filename.to_str().and_then(|s| CString::new(s).ok())
}

fn point_count(grid: &Grid<'_>) -> Result<i32, ExportError> {
    i32::try_from(grid.n_points())
        .map_err(|_| ExportError::new(FukaStatus::InvalidArgument as i32, "grid too large"))
}

impl CallbackSolver {
    /// Allocate a result of `set`, hand its slots to `call`, and keep it if
    /// the callback reports success.
    fn export_with(
        &self,
        entry: &str,
        set: QuantitySet,
        grid: &Grid<'_>,
        call: impl FnOnce(i32, *const *mut f64, i32) -> i32,
    ) -> Result<Exported, ExportError> {
        let n_points = point_count(grid)?;
        let mut exported = Exported::zeroed(set, grid.n_points());
        let slots: Vec<*mut f64> = exported.slots_mut().map(<[f64]>::as_mut_ptr).collect();
        let rc = call(n_points, slots.as_ptr(), set.len() as i32);
        if rc != 0 {
            return Err(ExportError::new(
                rc,
                format!("{entry} callback returned error code {rc}"),
            ));
        }
        Ok(exported)
    }

    #[allow(unsafe_code)]
    fn export_tuned(
        &self,
        entry: &str,
        callback: Option<FukaExportTunedFn>,
        set: QuantitySet,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        let f = callback.ok_or_else(|| {
            ExportError::new(
                FukaStatus::NoSolver as i32,
                format!("no {entry} callback registered"),
            )
        })?;
        let name = c_filename(info_filename).ok_or_else(|| {
            ExportError::new(FukaStatus::InvalidArgument as i32, "unrepresentable filename")
        })?;
        let user_data = self.def.user_data;
        self.export_with(entry, set, grid, |n, slots, n_slots| {
            // SAFETY: coordinate arrays hold n values, slots hold n_slots
            // buffers of n values each; all outlive the call.
            unsafe {
                f(
                    user_data,
                    n,
                    grid.x().as_ptr(),
                    grid.y().as_ptr(),
                    grid.z().as_ptr(),
                    name.as_ptr(),
                    params.interpolation_offset,
                    params.interpolation_order,
                    params.relative_dr_spacing,
                    slots,
                    n_slots,
                )
            }
        })
    }
}

impl KadathExporter for CallbackSolver {
    #[allow(unsafe_code)]
    fn export_bns(&self, grid: &Grid<'_>, info_filename: &Path) -> Result<Exported, ExportError> {
        let f = self.def.export_bns_fn.ok_or_else(|| {
            ExportError::new(FukaStatus::NoSolver as i32, "no export_bns callback registered")
        })?;
        let name = c_filename(info_filename).ok_or_else(|| {
            ExportError::new(FukaStatus::InvalidArgument as i32, "unrepresentable filename")
        })?;
        let user_data = self.def.user_data;
        self.export_with("export_bns", QuantitySet::Matter, grid, |n, slots, n_slots| {
            // SAFETY: see export_tuned.
            unsafe {
                f(
                    user_data,
                    n,
                    grid.x().as_ptr(),
                    grid.y().as_ptr(),
                    grid.z().as_ptr(),
                    name.as_ptr(),
                    slots,
                    n_slots,
                )
            }
        })
    }

    fn export_bbh(
        &self,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        self.export_tuned(
            "export_bbh",
            self.def.export_bbh_fn,
            QuantitySet::Vacuum,
            grid,
            info_filename,
            params,
        )
    }

    fn export_bhns(
        &self,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        self.export_tuned(
            "export_bhns",
            self.def.export_bhns_fn,
            QuantitySet::Matter,
            grid,
            info_filename,
            params,
        )
    }
}

// ── Configuration reader ────────────────────────────────────────

/// A solution configuration, addressed by file name on every callback.
struct CallbackConfig {
    def: FukaSolverDef,
    name: CString,
}

struct CallbackSpace<'a> {
    config: &'a CallbackConfig,
    binary_type: BinaryType,
}

fn missing(what: &str) -> ReadError {
    ReadError::new(FukaStatus::NoSolver as i32, format!("no {what} callback registered"))
}

fn checked(what: &str, rc: i32, value: f64) -> Result<f64, ReadError> {
    if rc == 0 {
        Ok(value)
    } else {
        Err(ReadError::new(rc, format!("{what} callback returned error code {rc}")))
    }
}

impl SolutionReader for CallbackSolver {
    fn open(&self, info_filename: &Path) -> Result<Box<dyn BinaryConfig + '_>, ReadError> {
        let name = c_filename(info_filename).ok_or_else(|| {
            ReadError::new(FukaStatus::InvalidArgument as i32, "unrepresentable filename")
        })?;
        Ok(Box::new(CallbackConfig {
            def: self.def,
            name,
        }))
    }
}

impl BinaryConfig for CallbackConfig {
    #[allow(unsafe_code)]
    fn center_of_mass(&self) -> Result<f64, ReadError> {
        let f = self.def.center_of_mass_fn.ok_or_else(|| missing("center_of_mass"))?;
        let mut out = f64::NAN;
        // SAFETY: name is null-terminated, out is a valid f64.
        let rc = unsafe { f(self.def.user_data, self.name.as_ptr(), &mut out) };
        checked("center_of_mass", rc, out)
    }

    #[allow(unsafe_code)]
    fn mass(&self, kind: MassKind, component: Component) -> Result<f64, ReadError> {
        let f = self.def.mass_fn.ok_or_else(|| missing("mass"))?;
        let mut out = f64::NAN;
        // SAFETY: as above.
        let rc = unsafe {
            f(
                self.def.user_data,
                self.name.as_ptr(),
                kind as i32,
                component as i32,
                &mut out,
            )
        };
        checked("mass", rc, out)
    }

    fn space(&self, binary_type: BinaryType) -> Result<Box<dyn DomainSpace + '_>, ReadError> {
        if self.def.domain_coord_fn.is_none() {
            return Err(missing("domain_coord"));
        }
        Ok(Box::new(CallbackSpace {
            config: self,
            binary_type,
        }))
    }
}

impl DomainSpace for CallbackSpace<'_> {
    #[allow(unsafe_code)]
    fn cartesian(&self, domain: DomainLabel, axis: Axis, index: usize) -> Result<f64, ReadError> {
        let def = &self.config.def;
        let f = def.domain_coord_fn.ok_or_else(|| missing("domain_coord"))?;
        let index = i32::try_from(index).map_err(|_| {
            ReadError::new(FukaStatus::InvalidArgument as i32, "collocation index too large")
        })?;
        let mut out = f64::NAN;
        // SAFETY: as above.
        let rc = unsafe {
            f(
                def.user_data,
                self.config.name.as_ptr(),
                self.binary_type.as_raw(),
                domain as i32,
                axis as i32,
                index,
                &mut out,
            )
        };
        checked("domain_coord", rc, out)
    }
}

// ── Registration ────────────────────────────────────────────────

/// Register the solver callbacks, replacing any earlier registration.
///
/// The definition is copied; `def` itself need not outlive the call. The
/// callbacks may be invoked concurrently when requests arrive from several
/// threads, so they must be reentrant.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_solver_register(def: *const FukaSolverDef) -> i32 {
    ffi_guard!({
        if def.is_null() {
            return FukaStatus::InvalidArgument as i32;
        }
        // SAFETY: def is a valid pointer per caller contract.
        let def = unsafe { *def };
        let replaced = ffi_lock!(SOLVER)
            .replace(CallbackSolver { def })
            .is_some();
        tracing::info!(
            replaced,
            bns = def.export_bns_fn.is_some(),
            bbh = def.export_bbh_fn.is_some(),
            bhns = def.export_bhns_fn.is_some(),
            "solver registered"
        );
        FukaStatus::Ok as i32
    })
}

/// Remove the registered solver. Later requests fail with `NoSolver`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fuka_solver_unregister() -> i32 {
    ffi_guard!({
        if ffi_lock!(SOLVER).take().is_some() {
            tracing::info!("solver unregistered");
        }
        FukaStatus::Ok as i32
    })
}
