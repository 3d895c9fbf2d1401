use super::*;
use crate::equiv::equiv_mode;
use crate::error::MalformedKind;
use crate::wire::decode_entries;
use crate::{AclEntry, AclPerm};
use test_support::BlobBuilder;

const R: AclPerm = AclPerm::READ;
const W: AclPerm = AclPerm::WRITE;
const X: AclPerm = AclPerm::EXECUTE;

#[test]
fn create_narrows_owner_and_other_against_requested_mode() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .group_obj(7)
        .other(7)
        .build();

    let result = create_masq(&mut blob, 0o100_640).expect("masquerade succeeds");

    assert_eq!(result.class, AclClass::Equivalent);
    assert_eq!(result.mode, 0o100_640);
    assert_eq!(
        decode_entries(&blob).expect("decodes"),
        vec![
            AclEntry::user_obj(R | W),
            AclEntry::group_obj(R),
            AclEntry::other(AclPerm::NONE),
        ]
    );
}

#[test]
fn create_narrows_mode_against_acl() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .group_obj(5)
        .other(4)
        .build();

    let result = create_masq(&mut blob, 0o777).expect("masquerade succeeds");

    assert_eq!(result.mode, 0o754);
    assert_eq!(
        decode_entries(&blob).expect("decodes"),
        vec![
            AclEntry::user_obj(R | W | X),
            AclEntry::group_obj(R | X),
            AclEntry::other(R),
        ]
    );
}

#[test]
fn create_reaches_fixed_point() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .user(42, 6)
        .group_obj(5)
        .mask(7)
        .other(4)
        .build();

    let first = create_masq(&mut blob, 0o777).expect("first pass");
    let after_first = blob.clone();
    let second = create_masq(&mut blob, first.mode).expect("second pass");

    assert_eq!(second.mode, first.mode);
    assert_eq!(blob, after_first);
}

#[test]
fn create_narrows_mask_instead_of_group_obj() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .user(42, 7)
        .group_obj(7)
        .mask(7)
        .other(5)
        .build();

    let result = create_masq(&mut blob, 0o750).expect("masquerade succeeds");

    assert_eq!(result.class, AclClass::Extended);
    assert_eq!(result.mode, 0o750);
    let entries = decode_entries(&blob).expect("decodes");
    assert_eq!(entries[1], AclEntry::user(42, R | W | X));
    assert_eq!(entries[2], AclEntry::group_obj(R | W | X));
    assert_eq!(entries[3], AclEntry::mask(R | X));
    assert_eq!(entries[4], AclEntry::other(AclPerm::NONE));
}

#[test]
fn create_uses_mask_appearing_before_group_obj() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .mask(6)
        .group_obj(7)
        .other(0)
        .build();

    let result = create_masq(&mut blob, 0o777).expect("masquerade succeeds");

    assert_eq!(result.mode, 0o760);
    let entries = decode_entries(&blob).expect("decodes");
    assert_eq!(entries[1], AclEntry::mask(R | W));
    assert_eq!(entries[2], AclEntry::group_obj(R | W | X));
}

#[test]
fn create_narrows_only_the_last_duplicate_group_obj() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .group_obj(7)
        .group_obj(7)
        .other(7)
        .build();

    let result = create_masq(&mut blob, 0o640).expect("masquerade succeeds");

    assert_eq!(result.class, AclClass::Equivalent);
    assert_eq!(result.mode, 0o640);
    assert_eq!(
        decode_entries(&blob).expect("decodes"),
        vec![
            AclEntry::user_obj(R | W),
            AclEntry::group_obj(R | W | X),
            AclEntry::group_obj(R),
            AclEntry::other(AclPerm::NONE),
        ]
    );
}

#[test]
fn chmod_writes_group_triad_to_the_last_duplicate_mask() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .group_obj(7)
        .mask(7)
        .mask(7)
        .other(7)
        .build();

    chmod_masq(&mut blob, 0o751).expect("chmod succeeds");

    assert_eq!(
        decode_entries(&blob).expect("decodes"),
        vec![
            AclEntry::user_obj(R | W | X),
            AclEntry::group_obj(R | W | X),
            AclEntry::mask(R | W | X),
            AclEntry::mask(R | X),
            AclEntry::other(X),
        ]
    );
}

#[test]
fn create_named_group_marks_extended() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .group_obj(5)
        .group(7, 7)
        .other(0)
        .build();

    let result = create_masq(&mut blob, 0o777).expect("masquerade succeeds");
    assert_eq!(result.class, AclClass::Extended);
    assert_eq!(decode_entries(&blob).expect("decodes")[2], AclEntry::group(7, R | W | X));
}

#[test]
fn create_keeps_high_perm_bits_on_disk() {
    let mut blob = BlobBuilder::new()
        .user_obj(0x0107)
        .group_obj(5)
        .other(4)
        .build();

    create_masq(&mut blob, 0o600).expect("masquerade succeeds");
    let view = crate::EaBlob::new(&blob).expect("valid");
    assert_eq!(view.entry(0).map(|e| e.perm), Some(0x0106));
}

#[test]
fn create_without_group_class_is_missing_entry() {
    let mut blob = BlobBuilder::new().user_obj(7).other(4).build();
    assert_eq!(
        create_masq(&mut blob, 0o777),
        Err(AclError::MissingRequiredEntry)
    );
}

#[test]
fn create_rejects_unknown_tag() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .raw(0x80, 7, 0)
        .group_obj(5)
        .other(4)
        .build();
    assert_eq!(
        create_masq(&mut blob, 0o777),
        Err(AclError::InvalidEncoding { index: 1, tag: 0x80 })
    );
}

#[test]
fn create_rejects_malformed_blob_without_touching_it() {
    let mut blob = BlobBuilder::new().user_obj(7).group_obj(7).other(7).build();
    blob.truncate(blob.len() - 1);
    let before = blob.clone();
    assert_eq!(
        create_masq(&mut blob, 0),
        Err(AclError::MalformedBlob(MalformedKind::Misaligned { len: 27 }))
    );
    assert_eq!(blob, before);
}

#[test]
fn chmod_overwrites_owner_group_and_other() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .group_obj(0)
        .other(0)
        .build();

    chmod_masq(&mut blob, 0o100_751).expect("chmod succeeds");

    assert_eq!(
        decode_entries(&blob).expect("decodes"),
        vec![
            AclEntry::user_obj(R | W | X),
            AclEntry::group_obj(R | X),
            AclEntry::other(X),
        ]
    );
}

#[test]
fn chmod_writes_group_triad_to_mask_and_leaves_named_entries() {
    let mut blob = BlobBuilder::new()
        .user_obj(7)
        .user(42, 7)
        .group_obj(7)
        .group(9, 6)
        .mask(7)
        .other(7)
        .build();

    chmod_masq(&mut blob, 0o640).expect("chmod succeeds");

    assert_eq!(
        decode_entries(&blob).expect("decodes"),
        vec![
            AclEntry::user_obj(R | W),
            AclEntry::user(42, R | W | X),
            AclEntry::group_obj(R | W | X),
            AclEntry::group(9, R | W),
            AclEntry::mask(R),
            AclEntry::other(AclPerm::NONE),
        ]
    );
}

#[test]
fn chmod_then_reduce_reproduces_mode() {
    for mode in [0o000, 0o640, 0o754, 0o777, 0o123] {
        let mut blob = BlobBuilder::new()
            .user_obj(5)
            .user(1000, 7)
            .group_obj(1)
            .mask(2)
            .other(6)
            .build();
        chmod_masq(&mut blob, mode).expect("chmod succeeds");
        let reduced = equiv_mode(&blob, 0).expect("reduces");
        assert_eq!(reduced.mode, mode, "mode {mode:o}");
    }
}

#[test]
fn chmod_clears_high_perm_bits() {
    let mut blob = BlobBuilder::new().user_obj(0xFF07).group_obj(7).other(7).build();
    chmod_masq(&mut blob, 0o500).expect("chmod succeeds");
    let view = crate::EaBlob::new(&blob).expect("valid");
    assert_eq!(view.entry(0).map(|e| e.perm), Some(0o5));
}

#[test]
fn chmod_without_group_class_is_missing_entry() {
    let mut blob = BlobBuilder::new().user_obj(7).user(3, 7).other(4).build();
    assert_eq!(chmod_masq(&mut blob, 0o644), Err(AclError::MissingRequiredEntry));
}

#[test]
fn chmod_rejects_bad_version() {
    let mut blob = BlobBuilder::with_version(0).user_obj(7).group_obj(7).other(7).build();
    assert_eq!(
        chmod_masq(&mut blob, 0o644),
        Err(AclError::MalformedBlob(MalformedKind::BadVersion { found: 0 }))
    );
}
