//! Package diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts two normalized
//! snapshots and produces a [`PackageDiff`]. The computation is synchronous,
//! pure and total: it reads both sides, mutates neither, and has no failure
//! paths, so it can be recomputed on every edit-session state change.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use travesia_core_types::schema;

use crate::diff::model::{
    DestinationChanges, DestinationEntry, GalleryChanges, GalleryUpdateReason, HotelChanges,
    ImageOrderEntry, PackageDiff, WholesalerChanges,
};
use crate::errors::TvError;
use crate::model::{
    DestinationList, DestinationPoint, GalleryItem, HotelRef, PackageSnapshot, ScalarFields,
};
use crate::normalize::normalize_value;

/// Compute the structured diff between the original and current snapshots.
///
/// `original` is the immutable server-fetched state; `current` is the live
/// edit-form state. The result describes the smallest safe patch per
/// sub-resource.
pub fn compute_diff(original: &PackageSnapshot, current: &PackageSnapshot) -> PackageDiff {
    let diff = PackageDiff {
        scalar_changes: diff_scalars(&original.scalars, &current.scalars),
        destination_changes: diff_destinations(&original.destinations, &current.destinations),
        gallery_changes: classify_gallery(&original.gallery, &current.gallery),
        wholesaler_changes: diff_wholesalers(&original.wholesaler_ids, &current.wholesaler_ids),
        hotel_changes: diff_hotel(original.hotel.as_ref(), current.hotel.as_ref()),
    };
    debug!(
        component = "diff_engine",
        changed_fields = diff.scalar_changes.len(),
        has_changes = diff.has_changes(),
        "computed package diff"
    );
    diff
}

/// Parse, normalize and diff two raw JSON snapshots in one step.
///
/// # Errors
///
/// - `InvalidSnapshot` — either value fails [`crate::normalize::parse_snapshot`]
pub fn compute_diff_values(original: &Value, current: &Value) -> Result<PackageDiff, TvError> {
    let original = normalize_value(original)?;
    let current = normalize_value(current)?;
    Ok(compute_diff(&original, &current))
}

// ---------------------------------------------------------------------------
// Scalar field differ
// ---------------------------------------------------------------------------

/// Compare the normalized scalar fields and return `wire key -> new value`
/// for every field that differs.
///
/// Fields owned by specialized differs never appear here: they live outside
/// [`ScalarFields`] in the typed model.
pub fn diff_scalars(original: &ScalarFields, current: &ScalarFields) -> BTreeMap<String, Value> {
    let mut changes: BTreeMap<String, Value> = BTreeMap::new();

    if original.title != current.title {
        changes.insert(schema::FIELD_TITULO.to_string(), text_value(&current.title));
    }
    if original.start_date != current.start_date {
        changes.insert(
            schema::FIELD_FECHA_INICIO.to_string(),
            date_value(&current.start_date),
        );
    }
    if original.end_date != current.end_date {
        changes.insert(
            schema::FIELD_FECHA_FIN.to_string(),
            date_value(&current.end_date),
        );
    }
    if original.includes != current.includes {
        changes.insert(
            schema::FIELD_INCLUYE.to_string(),
            text_value(&current.includes),
        );
    }
    if original.excludes != current.excludes {
        changes.insert(
            schema::FIELD_NO_INCLUYE.to_string(),
            text_value(&current.excludes),
        );
    }
    if original.requirements != current.requirements {
        changes.insert(
            schema::FIELD_REQUISITOS.to_string(),
            text_value(&current.requirements),
        );
    }
    if original.total_price != current.total_price {
        changes.insert(
            schema::FIELD_PRECIO_TOTAL.to_string(),
            Value::from(current.total_price),
        );
    }
    if original.discount != current.discount {
        changes.insert(
            schema::FIELD_DESCUENTO.to_string(),
            num_value(&current.discount),
        );
    }
    if original.deposit != current.deposit {
        changes.insert(
            schema::FIELD_ANTICIPO.to_string(),
            num_value(&current.deposit),
        );
    }
    if original.notes != current.notes {
        changes.insert(schema::FIELD_NOTAS.to_string(), text_value(&current.notes));
    }
    if original.active != current.active {
        changes.insert(schema::FIELD_ACTIVO.to_string(), Value::Bool(current.active));
    }
    if original.itinerary_text != current.itinerary_text {
        changes.insert(
            schema::FIELD_ITINERARIO_TEXTO.to_string(),
            text_value(&current.itinerary_text),
        );
    }
    if original.currency != current.currency {
        changes.insert(
            schema::FIELD_MONEDA.to_string(),
            Value::String(current.currency.as_code().to_string()),
        );
    }

    changes
}

fn text_value(value: &Option<String>) -> Value {
    value
        .as_ref()
        .map(|s| Value::String(s.clone()))
        .unwrap_or(Value::Null)
}

fn date_value(value: &Option<NaiveDate>) -> Value {
    value
        .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
        .unwrap_or(Value::Null)
}

fn num_value(value: &Option<f64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

// ---------------------------------------------------------------------------
// Destination list differ
// ---------------------------------------------------------------------------

/// Binary change detection over the whole ordered destination list.
///
/// The primary stop and the additional stops are edited through different UI
/// controls, but storage replaces the list atomically, so any difference in
/// either part flags the whole list and the replacement is rebuilt from the
/// current side (primary first, `orden` contiguous from 1).
pub fn diff_destinations(
    original: &DestinationList,
    current: &DestinationList,
) -> DestinationChanges {
    let changed = original.primary != current.primary || original.additional != current.additional;
    if !changed {
        return DestinationChanges::default();
    }
    DestinationChanges {
        changed: true,
        replacement: wire_destinations(current),
    }
}

fn wire_destinations(list: &DestinationList) -> Vec<DestinationEntry> {
    // `orden` is contiguous from 1 even when no primary survives.
    list.primary
        .iter()
        .chain(&list.additional)
        .enumerate()
        .map(|(i, stop)| wire_destination(stop, i as u32 + 1))
        .collect()
}

fn wire_destination(point: &DestinationPoint, orden: u32) -> DestinationEntry {
    DestinationEntry {
        name: point.name.clone(),
        destino_lat: point.lat,
        destino_lng: point.lng,
        orden,
    }
}

// ---------------------------------------------------------------------------
// Image gallery differ
// ---------------------------------------------------------------------------

/// Classify the gallery change, cheapest verdict first.
///
/// Priority order:
/// 1. fast-path exact match (round-tripped content markers) → `NoChange`
/// 2. count mismatch → `FullUpdate`
/// 3. any unpersisted current item → `FullUpdate`
/// 4. same id multiset, different sequence, unchanged content → `OrderOnly`
/// 5. otherwise → `NoChange`
///
/// The fast-path runs first because content round-tripped unmodified through
/// the edit UI can fail strict structural equality (the UI rewrites content
/// references); steps 2–3 run before the order comparison because both break
/// the premise that the same set of identified images is being reordered.
pub fn classify_gallery(original: &[GalleryItem], current: &[GalleryItem]) -> GalleryChanges {
    // Step 1: fast-path exact match on (id, fetched content, order).
    let fast_path = original.len() == current.len()
        && current.iter().all(|item| {
            matches!(
                item,
                GalleryItem::Existing {
                    original_content: Some(_),
                    ..
                }
            )
        })
        && original.iter().zip(current).all(|(o, c)| match (o, c) {
            (
                GalleryItem::Existing {
                    id: original_id,
                    content: original_ref,
                    order: original_order,
                    ..
                },
                GalleryItem::Existing {
                    id: current_id,
                    order: current_order,
                    original_content: Some(marker),
                    ..
                },
            ) => original_id == current_id && original_ref == marker && original_order == current_order,
            _ => false,
        });
    if fast_path {
        return GalleryChanges::NoChange;
    }

    // Step 2: count mismatch invalidates everything cheaper.
    if original.len() != current.len() {
        return GalleryChanges::FullUpdate {
            reason: GalleryUpdateReason::CountDiffers,
        };
    }

    // Step 3: a new item forces re-processing of the whole gallery.
    if current.iter().any(GalleryItem::is_new) {
        return GalleryChanges::FullUpdate {
            reason: GalleryUpdateReason::NewImagesPresent,
        };
    }

    // Steps 4–5 operate on complete id sequences: same count, no new items.
    let original_ids: Vec<i64> = original.iter().filter_map(GalleryItem::stable_id).collect();
    let current_ids: Vec<i64> = current.iter().filter_map(GalleryItem::stable_id).collect();

    let original_set: BTreeSet<i64> = original_ids.iter().copied().collect();
    let current_set: BTreeSet<i64> = current_ids.iter().copied().collect();
    if original_set != current_set || original_ids.len() != current_ids.len() {
        return GalleryChanges::FullUpdate {
            reason: GalleryUpdateReason::ItemsReplaced,
        };
    }

    // Content check per id; the current side compares by its fetched
    // reference when the UI rewrote the live one.
    let original_refs: BTreeMap<i64, &str> = original
        .iter()
        .filter_map(|item| Some((item.stable_id()?, item.comparable_content()?)))
        .collect();
    let content_unchanged = current.iter().all(|item| {
        match (item.stable_id(), item.comparable_content()) {
            (Some(id), Some(reference)) => original_refs.get(&id) == Some(&reference),
            _ => false,
        }
    });
    if !content_unchanged {
        return GalleryChanges::FullUpdate {
            reason: GalleryUpdateReason::ContentChanged,
        };
    }

    // Step 4: same set, different sequence → minimal reorder instruction.
    if original_ids != current_ids {
        let order = current
            .iter()
            .filter_map(|item| {
                Some(ImageOrderEntry {
                    id: item.stable_id()?,
                    orden: item.order(),
                })
            })
            .collect();
        return GalleryChanges::OrderOnly { order };
    }

    // Step 5: nothing tripped.
    GalleryChanges::NoChange
}

// ---------------------------------------------------------------------------
// Wholesaler association differ
// ---------------------------------------------------------------------------

/// Set-equality comparison; any difference emits the entire current set.
///
/// Full-set replacement is a deliberate simplification: the association is
/// bounded by catalog size, so replacing it is cheap and avoids an
/// incremental add/remove protocol.
pub fn diff_wholesalers(original: &BTreeSet<i64>, current: &BTreeSet<i64>) -> WholesalerChanges {
    if original == current {
        return WholesalerChanges::default();
    }
    WholesalerChanges {
        changed: true,
        replacement: current.iter().copied().collect(),
    }
}

// ---------------------------------------------------------------------------
// Hotel sub-document differ
// ---------------------------------------------------------------------------

/// Presence check first, then identity-triple comparison.
pub fn diff_hotel(original: Option<&HotelRef>, current: Option<&HotelRef>) -> HotelChanges {
    match (original, current) {
        (None, None) => HotelChanges::Unchanged,
        (None, Some(_)) => HotelChanges::Attached,
        (Some(_), None) => HotelChanges::Detached,
        (Some(original), Some(current)) => {
            if original.identity() != current.identity() {
                HotelChanges::IdentityChanged
            } else {
                HotelChanges::Unchanged
            }
        }
    }
}
