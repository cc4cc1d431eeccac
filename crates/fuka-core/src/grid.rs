//! Caller-owned sample coordinates.

use crate::error::GridError;

/// A borrowed set of 3-D sample points.
///
/// The three coordinate slices always have the same length; construction
/// through [`Grid::new`] checks it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid<'a> {
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [f64],
}

impl<'a> Grid<'a> {
    /// Build a grid from three coordinate slices of equal length.
    pub fn new(x: &'a [f64], y: &'a [f64], z: &'a [f64]) -> Result<Self, GridError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(GridError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    /// A grid with no points.
    pub fn empty() -> Self {
        Self {
            x: &[],
            y: &[],
            z: &[],
        }
    }

    /// Number of sample points.
    pub fn n_points(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// x coordinates.
    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    /// y coordinates.
    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    /// z coordinates.
    pub fn z(&self) -> &'a [f64] {
        self.z
    }

    /// The `index`-th of `n_chunks` contiguous sub-grids.
    ///
    /// Every chunk holds `n_points / n_chunks` points; the last chunk also
    /// takes the remainder. Concatenating all chunks in order reproduces the
    /// grid.
    ///
    /// # Panics
    ///
    /// Panics if `n_chunks == 0` or `index >= n_chunks`.
    pub fn chunk(&self, index: usize, n_chunks: usize) -> Grid<'a> {
        assert!(
            index < n_chunks,
            "chunk index {index} out of range for {n_chunks} chunks"
        );
        let base = self.n_points() / n_chunks;
        let start = base * index;
        let len = if index == n_chunks - 1 {
            self.n_points() - start
        } else {
            base
        };
        let range = start..start + len;
        Grid {
            x: &self.x[range.clone()],
            y: &self.y[range.clone()],
            z: &self.z[range],
        }
    }

    /// Iterate over all `n_chunks` sub-grids in order.
    pub fn chunks(&self, n_chunks: usize) -> impl Iterator<Item = Grid<'a>> + '_ {
        (0..n_chunks).map(move |i| self.chunk(i, n_chunks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_unequal_lengths() {
        let err = Grid::new(&[0.0, 1.0], &[0.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, GridError::LengthMismatch { x: 2, y: 1, z: 2 });
    }

    #[test]
    fn empty_grid_has_no_points() {
        let g = Grid::new(&[], &[], &[]).unwrap();
        assert_eq!(g.n_points(), 0);
        assert!(g.is_empty());
        assert_eq!(g, Grid::empty());
    }

    #[test]
    fn last_chunk_takes_remainder() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let g = Grid::new(&x, &x, &x).unwrap();
        let lens: Vec<usize> = g.chunks(3).map(|c| c.n_points()).collect();
        assert_eq!(lens, vec![3, 3, 4]);
        assert_eq!(g.chunk(2, 3).x(), &[6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn more_chunks_than_points_leaves_leading_chunks_empty() {
        let g = Grid::new(&[1.0, 2.0], &[0.0, 0.0], &[0.0, 0.0]).unwrap();
        let lens: Vec<usize> = g.chunks(4).map(|c| c.n_points()).collect();
        assert_eq!(lens, vec![0, 0, 0, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn chunk_index_out_of_range_panics() {
        Grid::empty().chunk(2, 2);
    }

    proptest! {
        #[test]
        fn chunks_concatenate_to_grid(n in 0usize..200, n_chunks in 1usize..16) {
            let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
            let z: Vec<f64> = x.iter().map(|v| -v).collect();
            let g = Grid::new(&x, &y, &z).unwrap();

            let mut xs = Vec::new();
            let mut ys = Vec::new();
            let mut zs = Vec::new();
            for c in g.chunks(n_chunks) {
                xs.extend_from_slice(c.x());
                ys.extend_from_slice(c.y());
                zs.extend_from_slice(c.z());
            }
            prop_assert_eq!(xs, x.clone());
            prop_assert_eq!(ys, y.clone());
            prop_assert_eq!(zs, z.clone());
        }
    }
}
