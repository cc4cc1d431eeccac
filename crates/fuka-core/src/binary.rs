//! Binary configurations and per-configuration metadata layout.

use std::fmt;

use crate::quantity::QuantitySet;

/// Kind of compact-object binary stored in a solution.
///
/// Discriminants are ABI-stable and match the values used across the C
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BinaryType {
    /// Binary neutron star.
    Bns = 0,
    /// Binary black hole.
    Bbh = 1,
    /// Black hole and neutron star.
    Bhns = 2,
}

impl BinaryType {
    /// Every binary type, in discriminant order.
    pub const ALL: [BinaryType; 3] = [Self::Bns, Self::Bbh, Self::Bhns];

    /// Convert a raw discriminant. Returns `None` for unknown values.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Bns),
            1 => Some(Self::Bbh),
            2 => Some(Self::Bhns),
            _ => None,
        }
    }

    /// Raw discriminant of this binary type.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Quantity set returned by this type's solver entry point.
    ///
    /// Matter is present whenever a neutron star is part of the binary.
    pub fn quantity_set(self) -> QuantitySet {
        match self {
            Self::Bns | Self::Bhns => QuantitySet::Matter,
            Self::Bbh => QuantitySet::Vacuum,
        }
    }

    /// Whether this type's entry point takes [`InterpolationParams`](crate::InterpolationParams).
    pub fn uses_interpolation_params(self) -> bool {
        !matches!(self, Self::Bns)
    }

    /// Where this type's [`BinaryInfo`] values come from.
    pub fn layout(self) -> BinaryLayout {
        match self {
            Self::Bns => BinaryLayout {
                mass1: (MassKind::Adm, Component::Bco1),
                mass2: (MassKind::Adm, Component::Bco2),
                domain1: DomainLabel::Ns1,
                domain2: DomainLabel::Ns2,
            },
            Self::Bbh => BinaryLayout {
                mass1: (MassKind::Christodoulou, Component::Bco1),
                mass2: (MassKind::Christodoulou, Component::Bco2),
                domain1: DomainLabel::Bh1,
                domain2: DomainLabel::Bh2,
            },
            Self::Bhns => BinaryLayout {
                mass1: (MassKind::Adm, Component::Bco1),
                mass2: (MassKind::Christodoulou, Component::Bco2),
                domain1: DomainLabel::Ns,
                domain2: DomainLabel::Bh,
            },
        }
    }
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bns => write!(f, "BNS"),
            Self::Bbh => write!(f, "BBH"),
            Self::Bhns => write!(f, "BHNS"),
        }
    }
}

/// Mass and position of the two compact objects of a solution.
///
/// Positions are x-coordinates of the object centers, shifted by the
/// solution's center-of-mass offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BinaryInfo {
    /// Mass of the first object (ADM for neutron stars, Christodoulou for black holes).
    pub mass1: f64,
    /// Mass of the second object.
    pub mass2: f64,
    /// Center of the first object along x.
    pub position_x1: f64,
    /// Center of the second object along x.
    pub position_x2: f64,
}

/// Which mass a configuration lookup returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MassKind {
    /// ADM mass (`MADM`), used for neutron stars.
    Adm = 0,
    /// Christodoulou mass (`MCH`), used for black holes.
    Christodoulou = 1,
}

/// Binary component label in the solution configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Component {
    /// First compact object (`BCO1`).
    Bco1 = 0,
    /// Second compact object (`BCO2`).
    Bco2 = 1,
}

/// Named sub-domain of a reconstructed solver space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DomainLabel {
    /// First neutron star of a BNS space.
    Ns1 = 0,
    /// Second neutron star of a BNS space.
    Ns2 = 1,
    /// First black hole of a BBH space.
    Bh1 = 2,
    /// Second black hole of a BBH space.
    Bh2 = 3,
    /// Neutron star of a BHNS space.
    Ns = 4,
    /// Black hole of a BHNS space.
    Bh = 5,
}

/// Per-type mapping from [`BinaryInfo`] slots to configuration lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryLayout {
    /// Mass lookup for `mass1`.
    pub mass1: (MassKind, Component),
    /// Mass lookup for `mass2`.
    pub mass2: (MassKind, Component),
    /// Domain whose center gives `position_x1`.
    pub domain1: DomainLabel,
    /// Domain whose center gives `position_x2`.
    pub domain2: DomainLabel,
}
