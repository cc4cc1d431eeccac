//! The spectral solver's export entry points and their transient results.

use std::path::Path;

use crate::config::InterpolationParams;
use crate::error::ExportError;
use crate::grid::Grid;
use crate::quantity::{Quantity, QuantitySet};

/// A solver result: one value sequence per quantity slot of its set.
///
/// Owned by the dispatcher for the duration of one request and dropped
/// once its values are copied into [`Fields`](crate::Fields).
#[derive(Clone, Debug, PartialEq)]
pub struct Exported {
    set: QuantitySet,
    slots: Vec<Vec<f64>>,
}

impl Exported {
    /// Wrap solver output. Returns `None` unless `slots` has exactly
    /// `set.len()` entries.
    pub fn new(set: QuantitySet, slots: Vec<Vec<f64>>) -> Option<Self> {
        (slots.len() == set.len()).then_some(Self { set, slots })
    }

    /// A zero-filled result with `n_points` values per slot.
    pub fn zeroed(set: QuantitySet, n_points: usize) -> Self {
        Self {
            set,
            slots: vec![vec![0.0; n_points]; set.len()],
        }
    }

    /// Shape of this result.
    pub fn set(&self) -> QuantitySet {
        self.set
    }

    /// Values of one quantity, or `None` if the set has no such slot.
    pub fn slot(&self, quantity: Quantity) -> Option<&[f64]> {
        self.slots.get(quantity.index()).map(Vec::as_slice)
    }

    /// Mutable values of one quantity, or `None` if the set has no such slot.
    pub fn slot_mut(&mut self, quantity: Quantity) -> Option<&mut Vec<f64>> {
        self.slots.get_mut(quantity.index())
    }

    /// All slots in data-model order, for solvers that fill a result in place.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut [f64]> + '_ {
        self.slots.iter_mut().map(Vec::as_mut_slice)
    }
}

/// The three export entry points of the spectral solver.
///
/// Each call evaluates the stored solution named by `info_filename` at
/// every point of `grid` and returns a result of the binary type's
/// quantity set, with `grid.n_points()` values per slot.
///
/// Implementations are called synchronously, once per request. If callers
/// issue requests from several threads, implementations must be reentrant;
/// the dispatcher adds no locking of its own.
pub trait KadathExporter {
    /// Binary neutron star export (`KadathExportBNS`). Returns the matter set.
    fn export_bns(&self, grid: &Grid<'_>, info_filename: &Path) -> Result<Exported, ExportError>;

    /// Binary black hole export (`KadathExportBBH`). Returns the vacuum set.
    fn export_bbh(
        &self,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError>;

    /// Black hole / neutron star export (`KadathExportBHNS`). Returns the matter set.
    fn export_bhns(
        &self,
        grid: &Grid<'_>,
        info_filename: &Path,
        params: &InterpolationParams,
    ) -> Result<Exported, ExportError>;
}
