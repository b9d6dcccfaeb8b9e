//! End-to-end wire-contract tests through the public API: JSON field
//! names, kind preservation across a marshal/unmarshal cycle, and
//! rejection of inconsistent externally produced payloads.

use resloc::{Locator, LocatorKind};
use serde_json::json;

#[test]
fn remote_locator_survives_marshal_cycle() {
    let mut l = Locator::new("https://ex.com/pkg/index").unwrap();
    l.set_query_param("rev", "42");

    let json = serde_json::to_value(&l).unwrap();
    assert_eq!(
        json,
        json!({ "Url": "https://ex.com/pkg/index?rev=42", "File": false })
    );

    let back: Locator = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind(), LocatorKind::Remote);
    assert_eq!(back.to_string(), l.to_string());
}

#[cfg(not(windows))]
#[test]
fn file_locator_survives_marshal_cycle() {
    let l = Locator::new("/srv/data/index").unwrap();
    let json = serde_json::to_value(&l).unwrap();
    assert_eq!(json, json!({ "Url": "/srv/data/index", "File": true }));

    let back: Locator = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind(), LocatorKind::File);
    assert_eq!(back.to_string(), "/srv/data/index");
}

#[cfg(not(windows))]
#[test]
fn query_mutation_reflected_in_wire_form() {
    // File locators ignore query mutation entirely.
    let mut f = Locator::new("/srv/data/index").unwrap();
    f.set_query_param("rev", "42");
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json, json!({ "Url": "/srv/data/index", "File": true }));

    // Remote locators round-trip the mutated query.
    let mut r = Locator::new("https://ex.com/p?a=1").unwrap();
    r.set_query_param("a", "");
    let back: Locator = serde_json::from_value(serde_json::to_value(&r).unwrap()).unwrap();
    assert_eq!(back.to_string(), "https://ex.com/p");
}

#[test]
fn external_payload_is_revalidated() {
    // The flag is not trusted: kind is recomputed from the Url string.
    let err = serde_json::from_value::<Locator>(json!({ "Url": "https://ex.com/p", "File": true }))
        .unwrap_err();
    assert!(err.to_string().contains("file flag mismatch"));

    let err =
        serde_json::from_value::<Locator>(json!({ "Url": "ftp://h/p", "File": false })).unwrap_err();
    assert!(err.to_string().contains("unsupported scheme"));

    let err = serde_json::from_value::<Locator>(json!({ "File": true })).unwrap_err();
    assert!(err.to_string().contains("missing url"));
}
