//! Binary metadata: component masses and positions from a solution's
//! configuration.
//!
//! The configuration file format and the reconstruction of the solver's
//! spatial domains belong to the solver. They are reached through
//! [`SolutionReader`], [`BinaryConfig`] and [`DomainSpace`].

use std::path::Path;

use crate::binary::{BinaryInfo, BinaryType, Component, DomainLabel, MassKind};
use crate::error::{InfoError, ReadError};

/// Cartesian axis of a coordinate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Axis {
    /// x axis.
    X = 0,
    /// y axis.
    Y = 1,
    /// z axis.
    Z = 2,
}

/// Opens solution configurations.
pub trait SolutionReader {
    /// Load the configuration stored at `info_filename`.
    fn open(&self, info_filename: &Path) -> Result<Box<dyn BinaryConfig + '_>, ReadError>;
}

/// A loaded solution configuration.
pub trait BinaryConfig {
    /// Center-of-mass offset along x (`COM`).
    fn center_of_mass(&self) -> Result<f64, ReadError>;

    /// Mass of one component.
    fn mass(&self, kind: MassKind, component: Component) -> Result<f64, ReadError>;

    /// Reconstruct the spatial domains of the solution, shaped for `binary_type`.
    fn space(&self, binary_type: BinaryType) -> Result<Box<dyn DomainSpace + '_>, ReadError>;
}

/// A reconstructed solver space with named sub-domains.
pub trait DomainSpace {
    /// Cartesian coordinate `axis` of `domain` at collocation point `index`.
    fn cartesian(&self, domain: DomainLabel, axis: Axis, index: usize) -> Result<f64, ReadError>;
}

/// Read masses and positions of both compact objects of a solution.
///
/// Each position is the x-coordinate of the object's domain at collocation
/// point 0, shifted by the center-of-mass offset. Which mass kind and which
/// domains are used is fixed per binary type (see
/// [`BinaryType::layout`]). Reader failures are passed through unchanged.
pub fn read_binary_info<R: SolutionReader + ?Sized>(
    reader: &R,
    binary_type: BinaryType,
    info_filename: &Path,
) -> Result<BinaryInfo, InfoError> {
    let wrap = |source| InfoError::Read {
        binary_type,
        source,
    };
    let layout = binary_type.layout();

    let config = reader.open(info_filename).map_err(wrap)?;
    let com = config.center_of_mass().map_err(wrap)?;
    let mass1 = config.mass(layout.mass1.0, layout.mass1.1).map_err(wrap)?;
    let mass2 = config.mass(layout.mass2.0, layout.mass2.1).map_err(wrap)?;

    let space = config.space(binary_type).map_err(wrap)?;
    let x1 = space.cartesian(layout.domain1, Axis::X, 0).map_err(wrap)?;
    let x2 = space.cartesian(layout.domain2, Axis::X, 0).map_err(wrap)?;

    let info = BinaryInfo {
        mass1,
        mass2,
        position_x1: com + x1,
        position_x2: com + x2,
    };
    tracing::debug!(%binary_type, ?info, "read binary info");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Table {
        com: f64,
        masses: HashMap<(MassKind, Component), f64>,
        centers: HashMap<DomainLabel, f64>,
    }

    struct Reader(Table);

    impl SolutionReader for Reader {
        fn open(&self, info_filename: &Path) -> Result<Box<dyn BinaryConfig + '_>, ReadError> {
            if info_filename == Path::new("missing.info") {
                return Err(ReadError::new(-2, "no such file"));
            }
            Ok(Box::new(&self.0))
        }
    }

    impl BinaryConfig for &Table {
        fn center_of_mass(&self) -> Result<f64, ReadError> {
            Ok(self.com)
        }

        fn mass(&self, kind: MassKind, component: Component) -> Result<f64, ReadError> {
            self.masses
                .get(&(kind, component))
                .copied()
                .ok_or_else(|| ReadError::new(-3, "mass not stored"))
        }

        fn space(&self, _: BinaryType) -> Result<Box<dyn DomainSpace + '_>, ReadError> {
            Ok(Box::new(*self))
        }
    }

    impl DomainSpace for &Table {
        fn cartesian(&self, domain: DomainLabel, axis: Axis, index: usize) -> Result<f64, ReadError> {
            assert_eq!(axis, Axis::X);
            assert_eq!(index, 0);
            self.centers
                .get(&domain)
                .copied()
                .ok_or_else(|| ReadError::new(-4, "no such domain"))
        }
    }

    fn reader() -> Reader {
        Reader(Table {
            com: 0.25,
            masses: HashMap::from([
                ((MassKind::Adm, Component::Bco1), 1.4),
                ((MassKind::Adm, Component::Bco2), 1.3),
                ((MassKind::Christodoulou, Component::Bco1), 10.0),
                ((MassKind::Christodoulou, Component::Bco2), 7.0),
            ]),
            centers: HashMap::from([
                (DomainLabel::Ns1, -15.0),
                (DomainLabel::Ns2, 15.0),
                (DomainLabel::Bh1, -8.0),
                (DomainLabel::Bh2, 8.0),
                (DomainLabel::Ns, -20.0),
                (DomainLabel::Bh, 5.0),
            ]),
        })
    }

    #[test]
    fn bns_uses_adm_masses_and_star_domains() {
        let info = read_binary_info(&reader(), BinaryType::Bns, Path::new("bns.info")).unwrap();
        assert_eq!(
            info,
            BinaryInfo {
                mass1: 1.4,
                mass2: 1.3,
                position_x1: -14.75,
                position_x2: 15.25,
            }
        );
    }

    #[test]
    fn bbh_uses_christodoulou_masses() {
        let info = read_binary_info(&reader(), BinaryType::Bbh, Path::new("bbh.info")).unwrap();
        assert_eq!(info.mass1, 10.0);
        assert_eq!(info.mass2, 7.0);
        assert_eq!(info.position_x1, -7.75);
        assert_eq!(info.position_x2, 8.25);
    }

    #[test]
    fn bhns_mixes_mass_kinds() {
        let info = read_binary_info(&reader(), BinaryType::Bhns, Path::new("bhns.info")).unwrap();
        assert_eq!(info.mass1, 1.4);
        assert_eq!(info.mass2, 7.0);
        assert_eq!(info.position_x1, -19.75);
        assert_eq!(info.position_x2, 5.25);
    }

    #[test]
    fn reader_failure_passes_through() {
        let err = read_binary_info(&reader(), BinaryType::Bns, Path::new("missing.info"))
            .unwrap_err();
        assert_eq!(
            err,
            InfoError::Read {
                binary_type: BinaryType::Bns,
                source: ReadError::new(-2, "no such file"),
            }
        );
    }
}
