use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind, RenameMode};
use notify::EventKind;
use proptest::prelude::*;

use watchrun::config::parse_events_or_default;
use watchrun::types::{EventCategory, EventMask};
use watchrun::watch::{classify, enabled_by};

#[test]
fn mask_bits_follow_rename_delete_modify_create_order() {
    let mask: EventMask = "1000".parse().unwrap();
    assert!(mask.enabled(EventCategory::Rename));
    assert!(!mask.enabled(EventCategory::Delete));
    assert!(!mask.enabled(EventCategory::Modify));
    assert!(!mask.enabled(EventCategory::Create));

    let mask: EventMask = "0001".parse().unwrap();
    assert_eq!(mask.categories().collect::<Vec<_>>(), vec![EventCategory::Create]);

    let mask: EventMask = "1100".parse().unwrap();
    assert_eq!(
        mask.categories().collect::<Vec<_>>(),
        vec![EventCategory::Delete, EventCategory::Rename]
    );
}

#[test]
fn default_mask_is_modify_and_create() {
    let mask = EventMask::default();
    assert_eq!(mask.to_string(), "0011");
    assert!(mask.enabled(EventCategory::Modify));
    assert!(mask.enabled(EventCategory::Create));
    assert!(!mask.enabled(EventCategory::Delete));
    assert!(!mask.enabled(EventCategory::Rename));
}

#[test]
fn malformed_masks_are_rejected() {
    for bad in ["", "001", "00110", "0021", "abcd", "-001", "0b11"] {
        assert!(bad.parse::<EventMask>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn malformed_mask_falls_back_to_default() {
    assert_eq!(parse_events_or_default(Some("12")), EventMask::DEFAULT);
    assert_eq!(parse_events_or_default(Some("xyz0")), EventMask::DEFAULT);
    assert_eq!(parse_events_or_default(None), EventMask::DEFAULT);
    assert_eq!(parse_events_or_default(Some("0100")).to_string(), "0100");
}

#[test]
fn classifier_maps_notify_kinds() {
    let create = EventKind::Create(CreateKind::File);
    let write = EventKind::Modify(ModifyKind::Data(DataChange::Content));
    let any_modify = EventKind::Modify(ModifyKind::Any);
    let remove = EventKind::Remove(RemoveKind::Any);
    let rename = EventKind::Modify(ModifyKind::Name(RenameMode::From));

    assert_eq!(classify(&create), EventMask::NONE.with(EventCategory::Create));
    assert_eq!(classify(&write), EventMask::NONE.with(EventCategory::Modify));
    assert_eq!(classify(&any_modify), EventMask::NONE.with(EventCategory::Modify));
    assert_eq!(classify(&remove), EventMask::NONE.with(EventCategory::Delete));
    assert_eq!(classify(&rename), EventMask::NONE.with(EventCategory::Rename));
}

#[test]
fn metadata_access_and_unknown_kinds_are_never_enabled() {
    use notify::event::{AccessKind, MetadataKind};

    let kinds = [
        EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
        EventKind::Access(AccessKind::Read),
        EventKind::Any,
        EventKind::Other,
    ];
    for kind in kinds {
        assert!(classify(&kind).is_empty());
        assert!(!enabled_by(&kind, EventMask::ALL));
    }
}

#[test]
fn modify_only_mask_rejects_create() {
    let mask: EventMask = "0010".parse().unwrap();
    assert!(enabled_by(&EventKind::Modify(ModifyKind::Data(DataChange::Any)), mask));
    assert!(!enabled_by(&EventKind::Create(CreateKind::File), mask));
}

proptest! {
    #[test]
    fn every_four_bit_string_maps_bit_for_bit(bits in 0u8..16) {
        let s = format!("{bits:04b}");
        let mask: EventMask = s.parse().unwrap();

        prop_assert_eq!(mask.bits(), bits);
        prop_assert_eq!(mask.to_string(), s.clone());
        prop_assert_eq!(mask.enabled(EventCategory::Rename), s.as_bytes()[0] == b'1');
        prop_assert_eq!(mask.enabled(EventCategory::Delete), s.as_bytes()[1] == b'1');
        prop_assert_eq!(mask.enabled(EventCategory::Modify), s.as_bytes()[2] == b'1');
        prop_assert_eq!(mask.enabled(EventCategory::Create), s.as_bytes()[3] == b'1');
    }

    #[test]
    fn non_binary_strings_always_fall_back(s in "[2-9a-z]{1,6}") {
        prop_assert_eq!(parse_events_or_default(Some(&s)), EventMask::DEFAULT);
    }
}
