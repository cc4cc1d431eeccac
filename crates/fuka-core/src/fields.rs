//! Owned field buffers: allocation, result copying, and concatenation.
//!
//! A [`Fields`] record always holds all 22 quantity buffers, each exactly
//! `n_points` long. Vacuum-only results leave the hydrodynamic buffers
//! zero-filled. Buffers are plain `Vec<f64>` and are released on drop; the
//! C boundary converts them to raw pointers only when they leave Rust.

use crate::error::FieldsError;
use crate::quantity::Quantity;

/// The 22 exported quantities sampled at `n_points` grid points.
#[derive(Clone, Debug, PartialEq)]
pub struct Fields {
    n_points: usize,
    buffers: Vec<Vec<f64>>,
}

/// Reserve a zero-filled buffer without aborting on OOM.
fn zeroed(n_points: usize) -> Result<Vec<f64>, FieldsError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n_points)
        .map_err(|_| FieldsError::AllocationFailed { n_points })?;
    buf.resize(n_points, 0.0);
    Ok(buf)
}

impl Fields {
    /// Allocate all 22 buffers, zero-initialized, `n_points` long each.
    ///
    /// Fails without returning a partial record if any buffer cannot be
    /// reserved; buffers reserved before the failure are released.
    pub fn allocate(n_points: usize) -> Result<Self, FieldsError> {
        let mut buffers = Vec::new();
        buffers
            .try_reserve_exact(Quantity::MATTER_LEN)
            .map_err(|_| FieldsError::AllocationFailed { n_points })?;
        for _ in Quantity::ALL {
            buffers.push(zeroed(n_points)?);
        }
        tracing::trace!(n_points, "allocated field buffers");
        Ok(Self { n_points, buffers })
    }

    /// Number of sample points per buffer.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Buffer of one quantity.
    pub fn get(&self, quantity: Quantity) -> &[f64] {
        &self.buffers[quantity.index()]
    }

    /// Mutable buffer of one quantity.
    pub fn get_mut(&mut self, quantity: Quantity) -> &mut [f64] {
        &mut self.buffers[quantity.index()]
    }

    /// Lapse.
    pub fn alpha(&self) -> &[f64] {
        self.get(Quantity::Alpha)
    }

    /// Rest-mass density.
    pub fn rho(&self) -> &[f64] {
        self.get(Quantity::Rho)
    }

    /// Iterate over `(quantity, buffer)` pairs in data-model order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, &[f64])> + '_ {
        Quantity::ALL
            .into_iter()
            .zip(self.buffers.iter().map(Vec::as_slice))
    }

    /// Append the points of `other` after the points of `self`.
    ///
    /// Used to reassemble the per-chunk results of a chunked export.
    pub fn append(&mut self, other: &Fields) -> Result<(), FieldsError> {
        for (dst, src) in self.buffers.iter_mut().zip(&other.buffers) {
            dst.try_reserve_exact(src.len())
                .map_err(|_| FieldsError::AllocationFailed {
                    n_points: self.n_points.saturating_add(other.n_points),
                })?;
        }
        for (dst, src) in self.buffers.iter_mut().zip(&other.buffers) {
            dst.extend_from_slice(src);
        }
        self.n_points += other.n_points;
        Ok(())
    }

    /// Consume the record, yielding the 22 buffers in data-model order.
    pub fn into_buffers(self) -> Vec<Vec<f64>> {
        self.buffers
    }
}

/// Copy a transient solver result into a field buffer.
///
/// # Panics
///
/// Panics if the lengths differ. A mismatch means the solver result and the
/// grid disagree on `n_points`, which is a programming error.
pub fn copy_into(destination: &mut [f64], source: &[f64]) {
    assert_eq!(
        destination.len(),
        source.len(),
        "field buffer holds {} points but the solver result holds {}",
        destination.len(),
        source.len()
    );
    destination.copy_from_slice(source);
}
