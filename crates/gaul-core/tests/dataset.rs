//! Tests of the bundled dataset, the loader and the continent grouping.

use gaul_core::{Continents, DefaultTable};
use std::collections::BTreeSet;

#[test]
fn load_is_memoized() {
    let first = DefaultTable::load().expect("bundled dataset");
    let second = DefaultTable::load().expect("bundled dataset");
    assert_eq!(first.len(), second.len());
    assert_eq!(first.stats().countries, second.stats().countries);
}

#[test]
fn stats_match_the_bundled_dataset() {
    let table = DefaultTable::load().expect("bundled dataset");
    let stats = table.stats();
    assert_eq!(stats.countries, 11);
    assert_eq!(stats.regions, 27);
    assert_eq!(stats.districts, 26);
}

#[test]
fn every_country_belongs_to_exactly_one_continent() {
    let table = DefaultTable::load().expect("bundled dataset");
    let continents = Continents::load().expect("continent grouping");

    let countries: BTreeSet<String> = (0..table.len())
        .map(|row| table.code(0, row).to_string())
        .collect();

    let mut grouped = Vec::new();
    for (_, codes) in continents.iter() {
        grouped.extend(codes.iter().cloned());
    }

    // no duplicates across continents
    let distinct: BTreeSet<String> = grouped.iter().cloned().collect();
    assert_eq!(distinct.len(), grouped.len());
    // no orphans in either direction
    assert_eq!(distinct, countries);
}

#[test]
fn continent_lookup_is_case_insensitive() {
    let continents = Continents::load().expect("continent grouping");
    assert_eq!(continents.get("Africa"), continents.get("africa"));
    assert!(continents.get("africa").is_some());
    assert!(continents.get("atlantis").is_none());
}

#[cfg(feature = "compact")]
mod custom_dataset {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const ROWS: &str = r#"[
        {"gaul0_name": "Narnia", "gaul0_code": "1", "gaul1_name": "Lantern Waste", "gaul1_code": "11", "gaul2_name": "", "gaul2_code": ""}
    ]"#;

    #[test]
    fn load_from_path_reads_a_custom_dataset_and_caches_it() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.json.gz");

        let mut gz = GzEncoder::new(Vec::new(), Compression::default());
        gz.write_all(ROWS.as_bytes()).expect("compress");
        std::fs::write(&path, gz.finish().expect("compress")).expect("write dataset");

        let table = DefaultTable::load_from_path(&path).expect("custom dataset");
        assert_eq!(table.len(), 1);
        assert_eq!(table.name(0, 0), "Narnia");

        // the binary cache appears next to the source and is used on reload
        let cache = dir.path().join("custom.json.gz.comp.standard.bin");
        assert!(cache.exists());
        let again = DefaultTable::load_from_path(&path).expect("cached dataset");
        assert_eq!(again.len(), table.len());
    }

    #[test]
    fn missing_dataset_is_reported() {
        let err = DefaultTable::load_from_path("/no/such/place.json.gz").expect_err("missing file");
        assert!(err.to_string().contains("not found"));
    }
}
