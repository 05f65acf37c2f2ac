//! Integration tests for catalog parsing.

use std::fs;

use tms_catalog::{catalog_filename, locate_catalog, parse_catalog, AddressingMode, CatalogError};

const SAMPLE: &str = r#"{
    "images": {
        "globe": { "data": "aWNvbg==", "format": "png" }
    },
    "services": {
        "category": [
            {
                "name": "Base maps",
                "image": "globe",
                "tms": [
                    {
                        "name": "osm",
                        "title": "OpenStreetMap",
                        "url": "http://tile.osm/[z]/[x]/[y].png",
                        "description": "<b>OSM</b> standard layer",
                        "level": { "min": 0, "max": 19 }
                    },
                    {
                        "name": "bing",
                        "url": "http://ecn.t0.tiles/[q].jpeg?g=1",
                        "type": "quadkey",
                        "size": { "width": 256, "height": 256 },
                        "liveTime": 14
                    }
                ]
            },
            {
                "name": "Overlays",
                "tms": [
                    { "name": "hillshade", "url": "http://tiles/hs/[z]/[x]/[y].png", "cs": "CoordSys Earth Projection 10, 104, \"m\"" }
                ]
            }
        ]
    }
}"#;

#[test]
fn test_parse_sample_catalog() {
    let doc = parse_catalog(SAMPLE).unwrap();
    assert_eq!(doc.categories.len(), 2);
    assert_eq!(doc.service_count(), 3);

    let base = doc.category("Base maps").unwrap();
    assert_eq!(base.image.as_deref(), Some("globe"));
    assert_eq!(base.services[0].name, "osm");
    assert_eq!(base.services[0].display_title(), "OpenStreetMap");
    assert_eq!(base.services[1].addressing, AddressingMode::QuadKey);
    assert_eq!(base.services[1].live_time, 14);

    let overlays = doc.category("Overlays").unwrap();
    let hs = overlays.service("hillshade").unwrap();
    assert_eq!(
        hs.projection.as_deref(),
        Some("CoordSys Earth Projection 10, 104, \"m\"")
    );
}

#[test]
fn test_images_are_carried_opaquely() {
    let doc = parse_catalog(SAMPLE).unwrap();
    let globe = &doc.images["globe"];
    assert_eq!(globe.data, "aWNvbg==");
    assert_eq!(globe.format, "png");
}

#[test]
fn test_parse_is_idempotent() {
    let a = parse_catalog(SAMPLE).unwrap();
    let b = parse_catalog(SAMPLE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_records_missing_name_or_url_are_dropped() {
    let text = r#"{
        "services": { "category": [ {
            "name": "c",
            "tms": [
                { "name": "good", "url": "http://a" },
                { "url": "http://no-name" },
                { "name": "no-url" },
                { "name": "also-good", "url": "http://b" }
            ]
        } ] }
    }"#;
    let doc = parse_catalog(text).unwrap();
    let names: Vec<&str> = doc.categories[0]
        .services
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["good", "also-good"]);
}

#[test]
fn test_category_without_tms_array_is_malformed() {
    let text = r#"{"services": {"category": [ {"name": "broken"} ]}}"#;
    let err = parse_catalog(text).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedCatalog(_)));
}

#[test]
fn test_top_level_without_services_is_malformed() {
    let err = parse_catalog("{}").unwrap_err();
    assert!(matches!(err, CatalogError::MalformedCatalog(_)));
}

#[test]
fn test_syntactically_invalid_document() {
    let err = parse_catalog("[1, 2,").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidJson(_)));
}

#[test]
fn test_locate_catalog_prefers_language_then_falls_back_to_ru() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(catalog_filename("ru")), "{}").unwrap();

    // Only the Russian catalog exists: every language resolves to it.
    assert_eq!(
        locate_catalog(dir.path(), "en"),
        dir.path().join("ListTileServices_ru.json")
    );

    fs::write(dir.path().join(catalog_filename("en")), "{}").unwrap();
    assert_eq!(
        locate_catalog(dir.path(), "en"),
        dir.path().join("ListTileServices_en.json")
    );
}

#[test]
fn test_dangling_image_key_is_not_an_error() {
    let text = r#"{
        "services": { "category": [ {
            "name": "c",
            "image": "missing-icon",
            "tms": [ { "name": "s", "url": "http://a", "image": "also-missing" } ]
        } ] }
    }"#;
    let doc = parse_catalog(text).unwrap();
    assert!(doc.images.is_empty());
    assert_eq!(doc.categories[0].image.as_deref(), Some("missing-icon"));
    assert_eq!(
        doc.categories[0].services[0].image.as_deref(),
        Some("also-missing")
    );
}
