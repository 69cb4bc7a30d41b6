//! Normalizer unit coverage: coercion, unification and derived fields.
//!
//! Everything operates on raw JSON values (no I/O).

mod common;

use common::{base_package, form_state};
use serde_json::json;
use travesia_core::model::GalleryItem;
use travesia_core::normalize_value;
use travesia_core_types::Currency;

// N1: numeric-like strings and numbers normalize identically
#[test]
fn test_numeric_coercion_is_type_blind() {
    let a = normalize_value(&json!({ "precio_total": "15999.00", "anticipo": 1500 })).unwrap();
    let b = normalize_value(&json!({ "precio_total": 15999.0, "anticipo": "1500" })).unwrap();
    assert_eq!(a.scalars.total_price, b.scalars.total_price);
    assert_eq!(a.scalars.deposit, b.scalars.deposit);
}

// N2: invalid numerics fall back to the field default, never error
#[test]
fn test_invalid_numerics_coerce() {
    let snap = normalize_value(&json!({
        "precio_total": "un montón",
        "descuento": "n/a"
    }))
    .unwrap();
    assert_eq!(snap.scalars.total_price, 0.0);
    assert_eq!(snap.scalars.discount, None);
}

// N3: null, absent and blank text are one equivalence class
#[test]
fn test_blank_null_absent_unify() {
    let a = normalize_value(&json!({ "notas": "", "requisitos": null })).unwrap();
    let b = normalize_value(&json!({})).unwrap();
    assert_eq!(a.scalars.notes, b.scalars.notes);
    assert_eq!(a.scalars.requirements, b.scalars.requirements);
}

// N4: currency maps through the allow-list with the documented default
#[test]
fn test_currency_allow_list() {
    let usd = normalize_value(&json!({ "moneda": "usd" })).unwrap();
    assert_eq!(usd.scalars.currency, Currency::Usd);
    let unknown = normalize_value(&json!({ "moneda": "GBP" })).unwrap();
    assert_eq!(unknown.scalars.currency, Currency::Mxn);
    let absent = normalize_value(&json!({})).unwrap();
    assert_eq!(absent.scalars.currency, Currency::Mxn);
}

// N5: itinerary text is derived from the day list when absent
#[test]
fn test_itinerary_derived_from_day_list() {
    let snap = normalize_value(&json!({
        "itinerario": [
            { "dia": 2, "descripcion": "Playa" },
            { "dia": 1, "descripcion": "Llegada" }
        ]
    }))
    .unwrap();
    assert_eq!(
        snap.scalars.itinerary_text.as_deref(),
        Some("DAY 1: Llegada\n\nDAY 2: Playa")
    );
}

// N6: an already-rendered itinerary wins over the day list
#[test]
fn test_itinerary_text_wins_over_day_list() {
    let snap = normalize_value(&json!({
        "itinerario_texto": "DAY 1: Llegada",
        "itinerario": [{ "dia": 5, "descripcion": "Otra cosa" }]
    }))
    .unwrap();
    assert_eq!(snap.scalars.itinerary_text.as_deref(), Some("DAY 1: Llegada"));
}

// N7: server list shape and edit-form shape normalize to the same destinations
#[test]
fn test_destination_shapes_converge() {
    let original = normalize_value(&base_package()).unwrap();
    let current = normalize_value(&form_state(&base_package())).unwrap();
    assert_eq!(original.destinations, current.destinations);
    assert_eq!(original.destinations.primary.as_ref().unwrap().name.as_deref(), Some("Cancún"));
    assert_eq!(original.destinations.additional.len(), 1);
}

// N8: gallery items are tagged once, from the raw shape
#[test]
fn test_gallery_tagging() {
    let snap = normalize_value(&json!({
        "imagenes": [
            { "id": 1, "url": "https://cdn/a.jpg", "orden": 1 },
            { "archivo": "file:local/new.jpg", "orden": 2 },
            { "id": 7, "url": "https://cdn/b.jpg", "orden": 3, "uploaded": false }
        ]
    }))
    .unwrap();
    assert!(matches!(snap.gallery[0], GalleryItem::Existing { id: 1, .. }));
    assert!(snap.gallery[1].is_new());
    // An explicit uploaded=false flag overrides the id.
    assert!(snap.gallery[2].is_new());
}

// N9: gallery is kept sorted by display order
#[test]
fn test_gallery_sorted_by_order() {
    let snap = normalize_value(&json!({
        "imagenes": [
            { "id": 2, "url": "https://cdn/b.jpg", "orden": 2 },
            { "id": 1, "url": "https://cdn/a.jpg", "orden": 1 }
        ]
    }))
    .unwrap();
    let ids: Vec<i64> = snap.gallery.iter().filter_map(GalleryItem::stable_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

// N10: wholesaler ids parse from mixed representations into one set
#[test]
fn test_wholesaler_ids_are_a_set() {
    let a = normalize_value(&json!({ "mayoristasIds": ["1", 2, "3"] })).unwrap();
    let b = normalize_value(&json!({ "mayoristasIds": [3, 1, 2] })).unwrap();
    assert_eq!(a.wholesaler_ids, b.wholesaler_ids);
}

// N11: the active flag tolerates every wire representation
#[test]
fn test_active_flag_coercion() {
    for raw in [json!(true), json!(1), json!("true"), json!("1")] {
        let snap = normalize_value(&json!({ "activo": raw })).unwrap();
        assert!(snap.scalars.active);
    }
    for raw in [json!(false), json!(0), json!("false"), json!("0")] {
        let snap = normalize_value(&json!({ "activo": raw })).unwrap();
        assert!(!snap.scalars.active);
    }
}

// N12: wrongly-typed text fields coerce to absent, never error
#[test]
fn test_non_string_text_fields_coerce() {
    let snap = normalize_value(&json!({
        "titulo": 42,
        "notas": true,
        "incluye": ["vuelo", "hotel"],
        "moneda": 7
    }))
    .unwrap();
    assert_eq!(snap.scalars.title, None);
    assert_eq!(snap.scalars.notes, None);
    assert_eq!(snap.scalars.includes, None);
    assert_eq!(snap.scalars.currency, Currency::Mxn);
}

// N13: wrongly-typed collections and sub-documents coerce to empty/absent
#[test]
fn test_malformed_collections_coerce() {
    let snap = normalize_value(&json!({
        "imagenes": "oops",
        "destinos": 3,
        "mayoristasIds": { "1": true },
        "hotel": 5
    }))
    .unwrap();
    assert!(snap.gallery.is_empty());
    assert!(snap.destinations.is_empty());
    assert!(snap.wholesaler_ids.is_empty());
    assert!(snap.hotel.is_none());
}

// N14: a malformed gallery element defaults to the anomaly shape instead of
// poisoning the rest of the list
#[test]
fn test_malformed_gallery_element_isolated() {
    let snap = normalize_value(&json!({
        "imagenes": [
            { "id": 1, "url": "https://cdn/a.jpg", "orden": 1 },
            "not an item"
        ]
    }))
    .unwrap();
    assert_eq!(snap.gallery.len(), 2);
    assert!(matches!(snap.gallery[0], GalleryItem::Existing { id: 1, .. }));
    assert!(snap.gallery[1].is_new());
}

// N15: non-finite numeric strings fall to the field default
#[test]
fn test_non_finite_numerics_coerce() {
    let snap = normalize_value(&json!({
        "precio_total": "NaN",
        "descuento": "inf",
        "anticipo": "-inf"
    }))
    .unwrap();
    assert_eq!(snap.scalars.total_price, 0.0);
    assert_eq!(snap.scalars.discount, None);
    assert_eq!(snap.scalars.deposit, None);
}

// N16: a nameless form primary keeps its coordinates
#[test]
fn test_nameless_primary_keeps_coordinates() {
    let snap = normalize_value(&json!({
        "destino_lat": 21.1,
        "destino_lng": -86.8
    }))
    .unwrap();
    let primary = snap.destinations.primary.as_ref().unwrap();
    assert_eq!(primary.name, None);
    assert_eq!(primary.lat, Some(21.1));
    assert_eq!(primary.lng, Some(-86.8));
}
