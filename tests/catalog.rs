// Integration tests for catalog invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use zoom_doom::catalog::{CRUST_OPTIONS, FRUIT_OPTIONS};
use zoom_doom::{CATALOG, SpecimenKind, answer_label, options_for};

#[test]
fn catalog_ids_are_unique() {
    let mut seen = HashSet::new();
    for item in CATALOG {
        assert!(seen.insert(item.id), "duplicate id '{}' in CATALOG", item.id);
        assert!(!item.name.is_empty(), "empty name for '{}'", item.id);
        assert!(item.image_url.starts_with("https://"), "non-https url for '{}'", item.id);
    }
}

#[test]
fn every_answer_belongs_to_its_kind() {
    for item in CATALOG {
        let opts = options_for(item.kind);
        assert!(
            opts.iter().any(|o| o.id == item.correct_answer),
            "answer '{}' of '{}' is not a {} option",
            item.correct_answer,
            item.id,
            item.kind.as_str()
        );
    }
}

#[test]
fn crop_and_scale_are_sane() {
    for item in CATALOG {
        assert!((0.0..=100.0).contains(&item.crop_x), "crop_x out of range for '{}'", item.id);
        assert!((0.0..=100.0).contains(&item.crop_y), "crop_y out of range for '{}'", item.id);
        assert!(item.scale > 1.0, "scale {} does not zoom in for '{}'", item.scale, item.id);
    }
}

#[test]
fn kinds_are_balanced() {
    let crusts = CATALOG.iter().filter(|i| i.kind == SpecimenKind::Crust).count();
    let fruits = CATALOG.iter().filter(|i| i.kind == SpecimenKind::Fruit).count();
    assert_eq!((crusts, fruits), (6, 6));
}

#[test]
fn option_ids_do_not_overlap_between_kinds() {
    let crust: HashSet<&str> = CRUST_OPTIONS.iter().map(|o| o.id).collect();
    for opt in FRUIT_OPTIONS {
        assert!(!crust.contains(opt.id), "option '{}' appears in both kinds", opt.id);
    }
    for opt in CRUST_OPTIONS.iter().chain(FRUIT_OPTIONS) {
        assert_eq!(answer_label(opt.id), opt.label);
    }
}
