//! Reusable grids and solution configurations.
//!
//! - [`Coords`] owns coordinate vectors and lends a [`Grid`].
//! - [`line_coords`] builds points along the x axis.
//! - [`standard_solution`] stores one configuration per binary type.

use fuka_core::{Component, DomainLabel, Grid, MassKind};

use crate::{MockConfig, MockSolution};

/// Owned coordinates backing a [`Grid`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coords {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Coords {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self { x, y, z }
    }

    /// Borrow as a grid. Panics if the vectors have different lengths.
    pub fn grid(&self) -> Grid<'_> {
        Grid::new(&self.x, &self.y, &self.z).expect("fixture coordinates have equal lengths")
    }
}

/// `n` points at `x = 0, 1, ..., n-1`, `y = 2x`, `z = -x`.
pub fn line_coords(n: usize) -> Coords {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x.iter().map(|v| 2.0 * v).collect();
    let z = x.iter().map(|v| -v).collect();
    Coords::new(x, y, z)
}

/// The single point `(0, 0, 5)`.
pub fn single_point() -> Coords {
    Coords::new(vec![0.0], vec![0.0], vec![5.0])
}

/// Configurations stored under `bns.info`, `bbh.info` and `bhns.info`.
///
/// Center-of-mass offset 0.5 everywhere; neutron-star domains at ±15
/// (BNS) or -20 (BHNS), black-hole domains at ±8 (BBH) or 5 (BHNS).
pub fn standard_solution() -> MockSolution {
    let mut solution = MockSolution::new();
    solution.insert(
        "bns.info",
        MockConfig::new(0.5)
            .mass(MassKind::Adm, Component::Bco1, 1.35)
            .mass(MassKind::Adm, Component::Bco2, 1.25)
            .center(DomainLabel::Ns1, -15.0)
            .center(DomainLabel::Ns2, 15.0),
    );
    solution.insert(
        "bbh.info",
        MockConfig::new(0.5)
            .mass(MassKind::Christodoulou, Component::Bco1, 0.6)
            .mass(MassKind::Christodoulou, Component::Bco2, 0.4)
            .center(DomainLabel::Bh1, -8.0)
            .center(DomainLabel::Bh2, 8.0),
    );
    solution.insert(
        "bhns.info",
        MockConfig::new(0.5)
            .mass(MassKind::Adm, Component::Bco1, 1.4)
            .mass(MassKind::Christodoulou, Component::Bco2, 7.0)
            .center(DomainLabel::Ns, -20.0)
            .center(DomainLabel::Bh, 5.0),
    );
    solution
}
