//! Shared fixtures for the reconciliation engine tests.
//!
//! `base_package()` is the server-shape snapshot an edit session fetches;
//! `form_state()` is the same package exactly as the admin form holds it
//! after loading (primary destination split into form fields, gallery items
//! round-tripped with `originalContent` markers).
#![allow(dead_code)]

use serde_json::{json, Value};

/// A minimal but complete server-shape package snapshot.
pub fn base_package() -> Value {
    json!({
        "id": 10,
        "titulo": "Cancún 5 días",
        "fecha_inicio": "2026-03-01",
        "fecha_fin": "2026-03-05",
        "incluye": "Vuelo y hotel",
        "no_incluye": "Comidas",
        "requisitos": "Pasaporte vigente",
        "precio_total": "15999.00",
        "descuento": null,
        "anticipo": "1500",
        "notas": "",
        "activo": true,
        "moneda": "MXN",
        "itinerario_texto": "DAY 1: Llegada\n\nDAY 2: Playa",
        "destinos": [
            { "name": "Cancún", "lat": 21.1, "lng": -86.8, "order": 1 },
            { "name": "Tulum", "lat": 20.2, "lng": -87.4, "order": 2 }
        ],
        "imagenes": [
            { "id": 1, "url": "https://cdn/p10/a.jpg", "orden": 1 },
            { "id": 2, "url": "https://cdn/p10/b.jpg", "orden": 2 },
            { "id": 3, "url": "https://cdn/p10/c.jpg", "orden": 3 }
        ],
        "hotel": {
            "externalId": "place:maya",
            "nombre": "Hotel Maya",
            "estrellas": 4.5,
            "imagenes": []
        },
        "mayoristasIds": [1, 2, 3]
    })
}

/// The same package in edit-form shape, unmodified.
///
/// The form splits the primary destination into scalar fields, keeps the
/// rest in `destinos_adicionales`, and round-trips every gallery item with
/// a rewritten live reference plus its fetched `originalContent`.
pub fn form_state(package: &Value) -> Value {
    let mut form = package.clone();
    let obj = form.as_object_mut().unwrap();

    let destinos = obj
        .remove("destinos")
        .and_then(|v| v.as_array().cloned())
        .unwrap_or_default();
    if let Some(primary) = destinos.first() {
        obj.insert("destino".to_string(), primary["name"].clone());
        obj.insert("destino_lat".to_string(), primary["lat"].clone());
        obj.insert("destino_lng".to_string(), primary["lng"].clone());
    }
    obj.insert(
        "destinos_adicionales".to_string(),
        Value::Array(destinos.iter().skip(1).cloned().collect()),
    );

    let imagenes: Vec<Value> = obj
        .get("imagenes")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    json!({
                        "id": item["id"],
                        "url": format!("blob:session/{}", item["id"]),
                        "originalContent": item["url"],
                        "orden": item["orden"],
                        "uploaded": true
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    obj.insert("imagenes".to_string(), Value::Array(imagenes));

    form
}

/// A brand-new gallery item as the form produces it for a local file.
pub fn new_image(order: u32) -> Value {
    json!({ "archivo": format!("file:local/{order}.jpg"), "orden": order })
}
