//! Quantity-set dispatch: pick the solver entry point for a binary type and
//! marshal its result into a fixed-layout [`Fields`] record.

use std::path::Path;

use crate::binary::BinaryType;
use crate::config::{ChunkConfig, InterpolationParams};
use crate::error::InterpolateError;
use crate::export::{Exported, KadathExporter};
use crate::fields::{copy_into, Fields};
use crate::grid::Grid;
use crate::quantity::Quantity;

/// Everything needed to export one solution on one grid.
#[derive(Clone, Copy, Debug)]
pub struct InterpolateRequest<'a> {
    /// Binary configuration of the solution.
    pub binary_type: BinaryType,
    /// Path of the solution's configuration file.
    pub info_filename: &'a Path,
    /// Sample points.
    pub grid: Grid<'a>,
    /// Solver tuning; ignored for [`BinaryType::Bns`].
    pub params: InterpolationParams,
}

/// Export the fields of one solution at every point of the request's grid.
///
/// Calls exactly one solver entry point, allocates a [`Fields`] record
/// sized to the grid, and copies the 16 vacuum quantities into it. The six
/// hydrodynamic quantities are copied for BNS and BHNS only; for BBH they
/// stay zero.
///
/// Coordinates and tuning parameters are not range-checked; their validity
/// is the solver's concern.
pub fn interpolate<E: KadathExporter + ?Sized>(
    exporter: &E,
    request: &InterpolateRequest<'_>,
) -> Result<Fields, InterpolateError> {
    let binary_type = request.binary_type;
    let grid = &request.grid;
    let span = tracing::debug_span!(
        "interpolate",
        binary_type = %binary_type,
        n_points = grid.n_points()
    );
    let _enter = span.enter();

    if binary_type.uses_interpolation_params() {
        if let Err(e) = request.params.validate() {
            tracing::warn!(error = %e, "forwarding suspicious interpolation parameters");
        }
    }

    let exported = match binary_type {
        BinaryType::Bns => exporter.export_bns(grid, request.info_filename),
        BinaryType::Bbh => exporter.export_bbh(grid, request.info_filename, &request.params),
        BinaryType::Bhns => exporter.export_bhns(grid, request.info_filename, &request.params),
    }
    .map_err(|source| InterpolateError::Export {
        binary_type,
        source,
    })?;

    let expected = binary_type.quantity_set();
    if exported.set() != expected {
        return Err(InterpolateError::QuantitySetMismatch {
            binary_type,
            expected,
            actual: exported.set(),
        });
    }

    let mut fields = Fields::allocate(grid.n_points())?;

    // Both result shapes expose the vacuum quantities at the same indices.
    copy_quantities(&mut fields, &exported, Quantity::vacuum());
    if matches!(binary_type, BinaryType::Bns | BinaryType::Bhns) {
        copy_quantities(&mut fields, &exported, Quantity::hydro());
    }

    tracing::debug!(set = %exported.set(), "copied solver result");
    Ok(fields)
}

fn copy_quantities(fields: &mut Fields, exported: &Exported, quantities: &[Quantity]) {
    for &q in quantities {
        if let Some(values) = exported.slot(q) {
            copy_into(fields.get_mut(q), values);
        }
    }
}

/// Export a request chunk by chunk and concatenate the results.
///
/// The grid is split into `chunking.n_chunks` contiguous chunks (never more
/// chunks than points), each chunk is exported with [`interpolate`] in
/// order, and the per-chunk records are appended. The result has the same
/// layout as a single [`interpolate`] call on the whole grid.
pub fn interpolate_chunked<E: KadathExporter + ?Sized>(
    exporter: &E,
    request: &InterpolateRequest<'_>,
    chunking: &ChunkConfig,
) -> Result<Fields, InterpolateError> {
    chunking.validate()?;
    let n_chunks = chunking.n_chunks.min(request.grid.n_points()).max(1);

    let mut fields = Fields::allocate(0)?;
    for (i, chunk) in request.grid.chunks(n_chunks).enumerate() {
        tracing::debug!(chunk = i, n_chunks, n_points = chunk.n_points(), "exporting chunk");
        let part = interpolate(
            exporter,
            &InterpolateRequest {
                grid: chunk,
                ..*request
            },
        )?;
        fields.append(&part)?;
    }
    Ok(fields)
}
