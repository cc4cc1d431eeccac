//! Mock C solver callbacks shared by the unit tests.

use std::ffi::{c_char, c_void, CStr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fuka_core::{BinaryInfo, BinaryType, Quantity};
use fuka_test_utils::slot_value;

use crate::solver::FukaSolverDef;

/// File name every mock callback rejects.
pub(crate) const MISSING: &str = "missing.info";
/// Code the mock callbacks return for [`MISSING`].
pub(crate) const MISSING_CODE: i32 = 17;
const COM: f64 = 0.5;

/// Export callbacks invoked so far, counted through `user_data`.
pub(crate) static EXPORTS: AtomicUsize = AtomicUsize::new(0);

static LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the global solver registry.
pub(crate) fn lock() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[allow(unsafe_code)]
unsafe fn is_missing(name: *const c_char) -> bool {
    CStr::from_ptr(name).to_bytes() == MISSING.as_bytes()
}

#[allow(unsafe_code)]
unsafe fn fill(
    user_data: *mut c_void,
    n: i32,
    x: *const f64,
    y: *const f64,
    z: *const f64,
    slots: *const *mut f64,
    n_slots: i32,
) {
    (*(user_data as *const AtomicUsize)).fetch_add(1, Ordering::SeqCst);
    let n = n as usize;
    let (x, y, z) = (
        std::slice::from_raw_parts(x, n),
        std::slice::from_raw_parts(y, n),
        std::slice::from_raw_parts(z, n),
    );
    let slots = std::slice::from_raw_parts(slots, n_slots as usize);
    for (s, &ptr) in slots.iter().enumerate() {
        let q = Quantity::from_index(s).unwrap();
        let out = std::slice::from_raw_parts_mut(ptr, n);
        for i in 0..n {
            out[i] = slot_value(q, x[i], y[i], z[i]);
        }
    }
}

#[allow(unsafe_code)]
unsafe extern "C" fn export_bns(
    user_data: *mut c_void,
    n: i32,
    x: *const f64,
    y: *const f64,
    z: *const f64,
    name: *const c_char,
    slots: *const *mut f64,
    n_slots: i32,
) -> i32 {
    if is_missing(name) {
        return MISSING_CODE;
    }
    fill(user_data, n, x, y, z, slots, n_slots);
    0
}

#[allow(unsafe_code)]
unsafe extern "C" fn export_tuned(
    user_data: *mut c_void,
    n: i32,
    x: *const f64,
    y: *const f64,
    z: *const f64,
    name: *const c_char,
    _offset: f64,
    _order: i32,
    _spacing: f64,
    slots: *const *mut f64,
    n_slots: i32,
) -> i32 {
    if is_missing(name) {
        return MISSING_CODE;
    }
    fill(user_data, n, x, y, z, slots, n_slots);
    0
}

pub(crate) fn mock_mass(kind: i32, component: i32) -> f64 {
    1.0 + 10.0 * kind as f64 + 0.5 * component as f64
}

pub(crate) fn mock_coord(domain: i32) -> f64 {
    (domain as f64 - 2.5) * 4.0
}

#[allow(unsafe_code)]
unsafe extern "C" fn center_of_mass(_: *mut c_void, name: *const c_char, out: *mut f64) -> i32 {
    if is_missing(name) {
        return MISSING_CODE;
    }
    *out = COM;
    0
}

#[allow(unsafe_code)]
unsafe extern "C" fn mass(
    _: *mut c_void,
    name: *const c_char,
    kind: i32,
    component: i32,
    out: *mut f64,
) -> i32 {
    if is_missing(name) {
        return MISSING_CODE;
    }
    *out = mock_mass(kind, component);
    0
}

#[allow(unsafe_code)]
unsafe extern "C" fn domain_coord(
    _: *mut c_void,
    name: *const c_char,
    _binary_type: i32,
    domain: i32,
    axis: i32,
    index: i32,
    out: *mut f64,
) -> i32 {
    if is_missing(name) {
        return MISSING_CODE;
    }
    if axis != 0 || index != 0 {
        return -4;
    }
    *out = mock_coord(domain);
    0
}

/// A complete solver definition backed by the mocks above.
pub(crate) fn mock_def() -> FukaSolverDef {
    FukaSolverDef {
        user_data: &EXPORTS as *const AtomicUsize as *mut c_void,
        export_bns_fn: Some(export_bns),
        export_bbh_fn: Some(export_tuned),
        export_bhns_fn: Some(export_tuned),
        center_of_mass_fn: Some(center_of_mass),
        mass_fn: Some(mass),
        domain_coord_fn: Some(domain_coord),
    }
}

/// What `read_binary_info` yields for any file under [`mock_def`].
pub(crate) fn expected_info(binary_type: BinaryType) -> BinaryInfo {
    let layout = binary_type.layout();
    BinaryInfo {
        mass1: mock_mass(layout.mass1.0 as i32, layout.mass1.1 as i32),
        mass2: mock_mass(layout.mass2.0 as i32, layout.mass2.1 as i32),
        position_x1: COM + mock_coord(layout.domain1 as i32),
        position_x2: COM + mock_coord(layout.domain2 as i32),
    }
}
