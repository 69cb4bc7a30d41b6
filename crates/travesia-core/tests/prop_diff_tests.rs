use proptest::prelude::*;
use serde_json::{json, Value};
use travesia_core::{assemble_payload, compute_diff_values};

/// Any JSON scalar-ish value a backend or form might put in a field.
fn loose_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|f| json!(f)),
        "\\PC{0,40}".prop_map(Value::String),
    ]
}

fn loose_snapshot() -> impl Strategy<Value = Value> {
    (
        loose_value(),
        loose_value(),
        loose_value(),
        loose_value(),
        proptest::collection::vec(0i64..100, 0..8),
        proptest::collection::vec((1i64..1000, 1u32..50), 0..6),
    )
        .prop_map(|(titulo, precio, anticipo, activo, mayoristas, imagenes)| {
            let imagenes: Vec<Value> = imagenes
                .into_iter()
                .map(|(id, orden)| json!({ "id": id, "url": format!("https://cdn/{id}.jpg"), "orden": orden }))
                .collect();
            json!({
                "id": 7,
                "titulo": titulo,
                "precio_total": precio,
                "anticipo": anticipo,
                "activo": activo,
                "mayoristasIds": mayoristas,
                "imagenes": imagenes
            })
        })
}

proptest! {
    // Diffing a snapshot against itself is always a no-op, whatever junk
    // the fields hold.
    #[test]
    fn test_self_diff_is_empty(snapshot in loose_snapshot()) {
        let diff = compute_diff_values(&snapshot, &snapshot).unwrap();
        prop_assert!(!diff.has_changes());
        prop_assert!(assemble_payload(&diff).is_empty());
    }

    // Normalization is total over object snapshots: arbitrary field values
    // never make the pipeline panic or error.
    #[test]
    fn test_pipeline_total_over_objects(
        original in loose_snapshot(),
        current in loose_snapshot(),
    ) {
        let diff = compute_diff_values(&original, &current).unwrap();
        let _ = assemble_payload(&diff);
    }

    // A title edit shows up in the payload under its wire key and nothing
    // else changes when nothing else differs.
    #[test]
    fn test_title_edit_is_isolated(title in "[a-zA-Z ]{1,30}") {
        let original = json!({ "id": 7, "titulo": "before", "activo": true });
        let mut current = original.clone();
        current["titulo"] = json!(title.clone());

        let diff = compute_diff_values(&original, &current).unwrap();
        let payload = assemble_payload(&diff);
        if title == "before" {
            prop_assert!(payload.is_empty());
        } else if title.trim().is_empty() {
            // Blank normalizes to absent, which differs from "before".
            prop_assert_eq!(payload.get("titulo"), Some(&Value::Null));
        } else {
            prop_assert_eq!(payload.len(), 1);
            prop_assert_eq!(payload.get("titulo"), Some(&json!(title)));
        }
    }

    // Wholesaler comparison is order-insensitive.
    #[test]
    fn test_wholesaler_order_irrelevant(ids in proptest::collection::vec(0i64..50, 0..10)) {
        let mut reversed = ids.clone();
        reversed.reverse();
        let original = json!({ "id": 7, "mayoristasIds": ids });
        let current = json!({ "id": 7, "mayoristasIds": reversed });
        let diff = compute_diff_values(&original, &current).unwrap();
        prop_assert!(!diff.wholesaler_changes.changed);
    }
}
