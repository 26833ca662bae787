//! Unit tests for the `CanId` range checks and conversions.
use super::*;

#[test]
/// The 11-bit boundary is accepted, the next value is not.
fn test_standard_boundary() {
    assert_eq!(CanId::standard(0x7FF).map(|id| id.raw()), Ok(0x7FF));
    assert_eq!(
        CanId::standard(0x800),
        Err(FrameBuildError::IdOutOfRange {
            id: 0x800,
            extended: false
        })
    );
}

#[test]
/// The 29-bit boundary is accepted, the next value is not.
fn test_extended_boundary() {
    assert_eq!(CanId::extended(0x1FFF_FFFF).map(|id| id.raw()), Ok(0x1FFF_FFFF));
    assert!(CanId::extended(0x2000_0000).is_err());
}

#[test]
/// `0x800` only fits once extended framing is requested.
fn test_new_selects_format() {
    assert!(CanId::new(0x800, false).is_err());
    let id = CanId::new(0x800, true).unwrap();
    assert!(id.is_extended());
    assert_eq!(id.raw(), 0x800);
    assert_eq!(id.nibbles(), 8);
    assert_eq!(CanId::standard(0x123).unwrap().nibbles(), 3);
}

#[test]
/// Conversions with `embedded_can::Id` keep format and value.
fn test_embedded_can_round_trip() {
    let std_id = CanId::standard(0x123).unwrap();
    let ext_id = CanId::extended(0x1ABCDE).unwrap();

    let converted: Id = std_id.into();
    assert_eq!(converted, Id::Standard(StandardId::new(0x123).unwrap()));
    assert_eq!(CanId::from(converted), std_id);

    let converted: Id = ext_id.into();
    assert_eq!(converted, Id::Extended(ExtendedId::new(0x1ABCDE).unwrap()));
    assert_eq!(CanId::from(converted), ext_id);
}
