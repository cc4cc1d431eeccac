//! Binary metadata lookups against the mock solution store.

use std::path::Path;

use fuka_core::{read_binary_info, BinaryInfo, BinaryType, InfoError};
use fuka_test_utils::fixtures::standard_solution;

#[test]
fn bns_info() {
    let info =
        read_binary_info(&standard_solution(), BinaryType::Bns, Path::new("bns.info")).unwrap();
    assert_eq!(
        info,
        BinaryInfo {
            mass1: 1.35,
            mass2: 1.25,
            position_x1: -14.5,
            position_x2: 15.5,
        }
    );
}

#[test]
fn bbh_info() {
    let info =
        read_binary_info(&standard_solution(), BinaryType::Bbh, Path::new("bbh.info")).unwrap();
    assert_eq!(info.mass1, 0.6);
    assert_eq!(info.mass2, 0.4);
    assert_eq!(info.position_x1, -7.5);
    assert_eq!(info.position_x2, 8.5);
}

#[test]
fn bhns_info() {
    let info =
        read_binary_info(&standard_solution(), BinaryType::Bhns, Path::new("bhns.info")).unwrap();
    assert_eq!(info.mass1, 1.4);
    assert_eq!(info.mass2, 7.0);
    assert_eq!(info.position_x1, -19.5);
    assert_eq!(info.position_x2, 5.5);
}

#[test]
fn missing_file_is_reported() {
    let err = read_binary_info(&standard_solution(), BinaryType::Bns, Path::new("nope.info"))
        .unwrap_err();
    let InfoError::Read { source, .. } = err;
    assert_eq!(source.code, -2);
}

#[test]
fn wrong_type_for_file_fails_on_missing_mass() {
    // A BNS configuration has no black-hole masses.
    let err = read_binary_info(&standard_solution(), BinaryType::Bbh, Path::new("bns.info"))
        .unwrap_err();
    let InfoError::Read {
        binary_type,
        source,
    } = err;
    assert_eq!(binary_type, BinaryType::Bbh);
    assert_eq!(source.code, -3);
}
