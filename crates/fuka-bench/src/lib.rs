//! Benchmark profiles for the fuka field export layer.
//!
//! - [`cube_coords`]: a uniform cube of sample points, the shape evolution
//!   codes typically request
//! - [`SyntheticExporter`]: a solver stand-in that evaluates a cheap
//!   closed-form expression instead of a spectral sum, so benchmarks
//!   measure marshaling rather than the solver

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use fuka_core::{
    BinaryType, ExportError, Exported, Grid, InterpolationParams, KadathExporter,
};
use fuka_test_utils::fixtures::Coords;
use fuka_test_utils::slot_value;

/// `side³` points on a uniform grid spanning `[-extent, extent]` per axis.
pub fn cube_coords(side: usize, extent: f64) -> Coords {
    let step = if side > 1 {
        2.0 * extent / (side - 1) as f64
    } else {
        0.0
    };
    let axis = |i: usize| -extent + step * i as f64;
    let n = side * side * side;
    let mut coords = Coords::new(
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for i in 0..side {
        for j in 0..side {
            for k in 0..side {
                coords.x.push(axis(i));
                coords.y.push(axis(j));
                coords.z.push(axis(k));
            }
        }
    }
    coords
}

/// Exporter that fills every slot with [`slot_value`] and records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntheticExporter;

impl SyntheticExporter {
    fn export(&self, binary_type: BinaryType, grid: &Grid<'_>) -> Exported {
        let set = binary_type.quantity_set();
        let mut exported = Exported::zeroed(set, grid.n_points());
        for (&q, slot) in set.quantities().iter().zip(exported.slots_mut()) {
            for (i, v) in slot.iter_mut().enumerate() {
                *v = slot_value(q, grid.x()[i], grid.y()[i], grid.z()[i]);
            }
        }
        exported
    }
}

impl KadathExporter for SyntheticExporter {
    fn export_bns(&self, grid: &Grid<'_>, _: &Path) -> Result<Exported, ExportError> {
        Ok(self.export(BinaryType::Bns, grid))
    }

    fn export_bbh(
        &self,
        grid: &Grid<'_>,
        _: &Path,
        _: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        Ok(self.export(BinaryType::Bbh, grid))
    }

    fn export_bhns(
        &self,
        grid: &Grid<'_>,
        _: &Path,
        _: &InterpolationParams,
    ) -> Result<Exported, ExportError> {
        Ok(self.export(BinaryType::Bhns, grid))
    }
}
