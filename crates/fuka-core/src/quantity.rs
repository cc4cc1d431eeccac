//! Quantity identifiers and the vacuum/matter index spaces.
//!
//! All 22 exported quantities live in one flat enumeration. The split point
//! is [`Quantity::VACUUM_LEN`]: indices below it form the vacuum set, and the
//! matter set is the vacuum set followed by the six hydrodynamic slots. A
//! solver result for either set therefore exposes the vacuum quantities at
//! the same indices.

use std::fmt;

static SLOTS: [Quantity; Quantity::MATTER_LEN] = Quantity::ALL;

/// One exported field, in data-model order.
///
/// The discriminant is the slot index in a solver result and in
/// [`Fields`](crate::Fields).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quantity {
    /// Lapse.
    Alpha = 0,
    /// Shift, x component.
    BetaX = 1,
    /// Shift, y component.
    BetaY = 2,
    /// Shift, z component.
    BetaZ = 3,
    /// Spatial metric, xx component.
    GammaXX = 4,
    /// Spatial metric, xy component.
    GammaXY = 5,
    /// Spatial metric, xz component.
    GammaXZ = 6,
    /// Spatial metric, yy component.
    GammaYY = 7,
    /// Spatial metric, yz component.
    GammaYZ = 8,
    /// Spatial metric, zz component.
    GammaZZ = 9,
    /// Extrinsic curvature, xx component.
    KXX = 10,
    /// Extrinsic curvature, xy component.
    KXY = 11,
    /// Extrinsic curvature, xz component.
    KXZ = 12,
    /// Extrinsic curvature, yy component.
    KYY = 13,
    /// Extrinsic curvature, yz component.
    KYZ = 14,
    /// Extrinsic curvature, zz component.
    KZZ = 15,
    /// Rest-mass density.
    Rho = 16,
    /// Specific internal energy.
    Epsilon = 17,
    /// Pressure.
    Pressure = 18,
    /// Fluid velocity, x component.
    VelX = 19,
    /// Fluid velocity, y component.
    VelY = 20,
    /// Fluid velocity, z component.
    VelZ = 21,
}

impl Quantity {
    /// Number of slots in the vacuum set.
    pub const VACUUM_LEN: usize = 16;
    /// Number of slots in the matter set (vacuum prefix included).
    pub const MATTER_LEN: usize = 22;

    /// Every quantity, in slot order.
    pub const ALL: [Quantity; Self::MATTER_LEN] = [
        Self::Alpha,
        Self::BetaX,
        Self::BetaY,
        Self::BetaZ,
        Self::GammaXX,
        Self::GammaXY,
        Self::GammaXZ,
        Self::GammaYY,
        Self::GammaYZ,
        Self::GammaZZ,
        Self::KXX,
        Self::KXY,
        Self::KXZ,
        Self::KYY,
        Self::KYZ,
        Self::KZZ,
        Self::Rho,
        Self::Epsilon,
        Self::Pressure,
        Self::VelX,
        Self::VelY,
        Self::VelZ,
    ];

    /// The spacetime quantities present in every solver result.
    pub fn vacuum() -> &'static [Quantity] {
        &SLOTS[..Self::VACUUM_LEN]
    }

    /// The hydrodynamic quantities appended by the matter set.
    pub fn hydro() -> &'static [Quantity] {
        &SLOTS[Self::VACUUM_LEN..]
    }

    /// Slot index of this quantity.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Quantity stored at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this quantity only exists in the matter set.
    pub fn is_hydro(self) -> bool {
        self.index() >= Self::VACUUM_LEN
    }

    /// Field name used by simulation codes consuming the export.
    pub fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::BetaX => "beta_x",
            Self::BetaY => "beta_y",
            Self::BetaZ => "beta_z",
            Self::GammaXX => "gamma_xx",
            Self::GammaXY => "gamma_xy",
            Self::GammaXZ => "gamma_xz",
            Self::GammaYY => "gamma_yy",
            Self::GammaYZ => "gamma_yz",
            Self::GammaZZ => "gamma_zz",
            Self::KXX => "K_xx",
            Self::KXY => "K_xy",
            Self::KXZ => "K_xz",
            Self::KYY => "K_yy",
            Self::KYZ => "K_yz",
            Self::KZZ => "K_zz",
            Self::Rho => "rho",
            Self::Epsilon => "epsilon",
            Self::Pressure => "pressure",
            Self::VelX => "v_x",
            Self::VelY => "v_y",
            Self::VelZ => "v_z",
        }
    }

    /// Parse a field name produced by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|q| q.name() == name)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a solver result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantitySet {
    /// Spacetime quantities only (16 slots).
    Vacuum,
    /// Spacetime plus hydrodynamic quantities (22 slots).
    Matter,
}

impl QuantitySet {
    /// Number of slots in a result of this shape.
    pub fn len(self) -> usize {
        match self {
            Self::Vacuum => Quantity::VACUUM_LEN,
            Self::Matter => Quantity::MATTER_LEN,
        }
    }

    /// Quantities carried by a result of this shape, in slot order.
    pub fn quantities(self) -> &'static [Quantity] {
        &SLOTS[..self.len()]
    }

    /// Whether `quantity` has a slot in this set.
    pub fn contains(self, quantity: Quantity) -> bool {
        quantity.index() < self.len()
    }
}

impl fmt::Display for QuantitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vacuum => write!(f, "vacuum"),
            Self::Matter => write!(f, "matter"),
        }
    }
}
