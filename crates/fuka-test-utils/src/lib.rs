//! Test utilities and mock collaborators for fuka development.
//!
//! Provides mock implementations of the solver-side traits
//! ([`KadathExporter`], [`SolutionReader`]) and grid fixtures for
//! constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fuka_core::{
    Axis, BinaryConfig, BinaryType, Component, DomainLabel, DomainSpace, ExportError, Exported,
    Grid, InterpolationParams, KadathExporter, MassKind, Quantity, QuantitySet, ReadError,
    SolutionReader,
};

/// Value the mock solver reports for `quantity` at point `(x, y, z)`.
///
/// Distinct per slot and per point, so a misrouted copy shows up as a
/// wrong value rather than a coincidentally equal one.
pub fn slot_value(quantity: Quantity, x: f64, y: f64, z: f64) -> f64 {
    1000.0 * quantity.index() as f64 + x + 0.5 * y + 0.25 * z
}

/// One recorded call to a [`MockExporter`] entry point.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportCall {
    pub binary_type: BinaryType,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub info_filename: PathBuf,
    /// `None` for the BNS entry point, which takes no tuning parameters.
    pub params: Option<InterpolationParams>,
}

/// Mock implementation of [`KadathExporter`].
///
/// Returns [`slot_value`] for every slot of the entry point's quantity set
/// and records every call. Can be configured to fail or to return a result
/// of the wrong shape.
pub struct MockExporter {
    calls: Mutex<Vec<ExportCall>>,
    failure: Option<ExportError>,
    shape_override: Option<QuantitySet>,
}

impl MockExporter {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
            shape_override: None,
        }
    }

    /// An exporter whose every entry point fails with `code`/`reason`.
    pub fn failing(code: i32, reason: &str) -> Self {
        Self {
            failure: Some(ExportError::new(code, reason)),
            ..Self::new()
        }
    }

    /// An exporter that returns `set`-shaped results regardless of entry point.
    pub fn with_shape(set: QuantitySet) -> Self {
        Self {
            shape_override: Some(set),
            ..Self::new()
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<ExportCall> {
        self.calls.lock().unwrap().clone()
    }

    fn export(
        &self,
        binary_type: BinaryType,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: Option<&InterpolationParams>,
    ) -> Result<Exported, ExportError> {
        self.calls.lock().unwrap().push(ExportCall {
            binary_type,
            x: grid.x().to_vec(),
            y: grid.y().to_vec(),
            z: grid.z().to_vec(),
            info_filename: info_filename.to_path_buf(),
            params: params.copied(),
        });
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        let set = self
            .shape_override
            .unwrap_or_else(|| binary_type.quantity_set());
        let slots = set
            .quantities()
            .iter()
            .map(|&q| {
                (0..grid.n_points())
                    .map(|i| slot_value(q, grid.x()[i], grid.y()[i], grid.z()[i]))
                    .collect()
            })
            .collect();
        Exported::new(set, slots).ok_or_else(|| ExportError::new(-1, "mock slot count"))
    }
}

impl Default for MockExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl KadathExporter for MockExporter {
    fn export_bns(&self, grid: &Grid<'_>, info_filename: &Path) -> Result<Exported, ExportError> {
        self.export(BinaryType::Bns, grid, info_filename, None)
    }

    fn export_bbh(
        &self,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        self.export(BinaryType::Bbh, grid, info_filename, Some(params))
    }

    fn export_bhns(
        &self,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        self.export(BinaryType::Bhns, grid, info_filename, Some(params))
    }
}

/// Mock solution store implementing [`SolutionReader`].
///
/// Holds one configuration per file name. Opening an unknown file fails
/// with code `-2`.
#[derive(Clone, Debug, Default)]
pub struct MockSolution {
    configs: HashMap<PathBuf, MockConfig>,
}

/// A mock solution configuration with its domain centers.
#[derive(Clone, Debug, Default)]
pub struct MockConfig {
    pub com: f64,
    pub masses: HashMap<(MassKind, Component), f64>,
    pub centers: HashMap<DomainLabel, f64>,
}

impl MockConfig {
    pub fn new(com: f64) -> Self {
        Self {
            com,
            ..Default::default()
        }
    }

    pub fn mass(mut self, kind: MassKind, component: Component, value: f64) -> Self {
        self.masses.insert((kind, component), value);
        self
    }

    pub fn center(mut self, domain: DomainLabel, x: f64) -> Self {
        self.centers.insert(domain, x);
        self
    }
}

impl MockSolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a configuration under `info_filename`.
    pub fn insert(&mut self, info_filename: impl Into<PathBuf>, config: MockConfig) {
        self.configs.insert(info_filename.into(), config);
    }
}

impl SolutionReader for MockSolution {
    fn open(&self, info_filename: &Path) -> Result<Box<dyn BinaryConfig + '_>, ReadError> {
        self.configs
            .get(info_filename)
            .map(|c| Box::new(c) as Box<dyn BinaryConfig + '_>)
            .ok_or_else(|| {
                ReadError::new(-2, format!("no configuration at {}", info_filename.display()))
            })
    }
}

impl BinaryConfig for &MockConfig {
    fn center_of_mass(&self) -> Result<f64, ReadError> {
        Ok(self.com)
    }

    fn mass(&self, kind: MassKind, component: Component) -> Result<f64, ReadError> {
        self.masses
            .get(&(kind, component))
            .copied()
            .ok_or_else(|| ReadError::new(-3, format!("no {kind:?} mass for {component:?}")))
    }

    fn space(&self, _binary_type: BinaryType) -> Result<Box<dyn DomainSpace + '_>, ReadError> {
        Ok(Box::new(*self))
    }
}

impl DomainSpace for &MockConfig {
    fn cartesian(&self, domain: DomainLabel, axis: Axis, _index: usize) -> Result<f64, ReadError> {
        if axis != Axis::X {
            return Err(ReadError::new(-4, "mock only stores x centers"));
        }
        self.centers
            .get(&domain)
            .copied()
            .ok_or_else(|| ReadError::new(-4, format!("no domain {domain:?}")))
    }
}
