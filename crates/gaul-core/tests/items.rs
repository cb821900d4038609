//! Tests of the boundary-fetch composition with a recording provider.

use gaul_core::{api, BoundaryProvider, Feature, FeatureSet, GaulError, ItemsQuery, Result};
use std::cell::RefCell;

/// Fake remote dataset: records every fetch and fabricates one feature per
/// requested code.
#[derive(Default)]
struct RecordingProvider {
    calls: RefCell<Vec<(u8, Vec<i64>)>>,
}

impl BoundaryProvider for RecordingProvider {
    fn fetch(&self, level: u8, codes: &[i64]) -> Result<FeatureSet> {
        self.calls.borrow_mut().push((level, codes.to_vec()));
        let features = codes
            .iter()
            .map(|code| {
                let mut properties = serde_json::Map::new();
                properties.insert(format!("gaul{level}_code"), serde_json::json!(code));
                Feature {
                    properties,
                    geometry: None,
                }
            })
            .collect();
        Ok(FeatureSet { features })
    }
}

fn by_name(names: &[&str]) -> ItemsQuery {
    ItemsQuery {
        name: names.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn by_admin(admins: &[&str]) -> ItemsQuery {
    ItemsQuery {
        admin: admins.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn codes(fc: &FeatureSet, level: u8) -> Vec<i64> {
    fc.features
        .iter()
        .filter_map(|f| f.properties.get(&format!("gaul{level}_code")))
        .filter_map(|v| v.as_i64())
        .collect()
}

#[test]
fn empty_request_is_rejected() {
    let provider = RecordingProvider::default();
    let result = api::resolve_items(&provider, &ItemsQuery::default());
    assert!(matches!(result, Err(GaulError::InvalidQuery(_))));
    assert!(provider.calls.borrow().is_empty());
}

#[test]
fn duplicate_input_is_rejected() {
    let provider = RecordingProvider::default();
    let q = ItemsQuery {
        name: vec!["Singapore".into()],
        admin: vec!["222".into()],
        ..Default::default()
    };
    assert!(matches!(
        api::resolve_items(&provider, &q),
        Err(GaulError::InvalidQuery(_))
    ));
}

#[test]
fn non_existing_area_is_rejected() {
    let provider = RecordingProvider::default();
    assert!(matches!(
        api::resolve_items(&provider, &by_name(&["t0t0"])),
        Err(GaulError::NotFound { .. })
    ));
    assert!(matches!(
        api::resolve_items(&provider, &by_admin(&["t0t0"])),
        Err(GaulError::NotFound { .. })
    ));
}

#[test]
fn known_area_fetches_its_single_code() {
    let provider = RecordingProvider::default();
    let fc = api::resolve_items(&provider, &by_name(&["Singapore"])).expect("fetch");
    assert_eq!(fc.len(), 1);
    assert_eq!(codes(&fc, 0), [269]);
    assert_eq!(*provider.calls.borrow(), [(0, vec![269])]);
}

#[test]
fn sub_content_fetches_at_the_requested_level() {
    let provider = RecordingProvider::default();
    let q = ItemsQuery {
        name: vec!["Singapore".into()],
        content_level: Some(1),
        ..Default::default()
    };
    let fc = api::resolve_items(&provider, &q).expect("fetch");
    assert_eq!(fc.len(), 9);
    assert_eq!(
        codes(&fc, 1),
        [2658, 2659, 2660, 2661, 2662, 2663, 2664, 2665, 2666]
    );
}

#[test]
fn too_high_request_fetches_the_clamped_level() {
    let provider = RecordingProvider::default();
    let q = ItemsQuery {
        admin: vec!["2658".into()],
        content_level: Some(0),
        ..Default::default()
    };
    let fc = api::resolve_items(&provider, &q).expect("fetch");
    assert_eq!(fc.len(), 1);
    assert_eq!(*provider.calls.borrow(), [(1, vec![2658])]);
}

#[test]
fn continent_fetches_each_member_country() {
    let provider = RecordingProvider::default();
    let fc = api::resolve_items(&provider, &by_name(&["Africa"])).expect("fetch");
    assert_eq!(fc.len(), 2);
    assert_eq!(codes(&fc, 0), [4, 40765]);
    // one fetch per member resolution
    assert_eq!(*provider.calls.borrow(), [(0, vec![4]), (0, vec![40765])]);
}

#[test]
fn multiple_inputs_merge_in_order() {
    let provider = RecordingProvider::default();
    let by_names = api::resolve_items(&provider, &by_name(&["france", "germany"])).expect("fetch");
    let by_admins = api::resolve_items(&provider, &by_admin(&["85", "93"])).expect("fetch");
    assert_eq!(codes(&by_names, 0), codes(&by_admins, 0));
    assert_eq!(codes(&by_names, 0), [85, 93]);
}

#[test]
fn ambiguous_name_is_rejected_before_fetching() {
    let provider = RecordingProvider::default();
    let result = api::resolve_items(&provider, &by_name(&["Cordoba"]));
    match result {
        Err(GaulError::NotUnique { name, count }) => {
            assert_eq!(name, "Cordoba");
            assert_eq!(count, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(provider.calls.borrow().is_empty());
}

#[test]
fn case_insensitive() {
    let provider = RecordingProvider::default();
    let fc1 = api::resolve_items(&provider, &by_name(&["Singapore"])).expect("fetch");
    let fc2 = api::resolve_items(&provider, &by_name(&["singaPORE"])).expect("fetch");
    assert_eq!(codes(&fc1, 0), codes(&fc2, 0));
}

#[test]
fn deprecated_get_items_still_works() {
    let provider = RecordingProvider::default();
    #[allow(deprecated)]
    let fc = gaul_core::compat::get_items(&provider, &["Singapore"], &[], None).expect("fetch");
    assert_eq!(codes(&fc, 0), [269]);
}
