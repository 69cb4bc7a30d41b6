//! Snapshot normalization
//!
//! Canonicalizes a raw snapshot (either side) into a [`PackageSnapshot`]:
//! numeric coercion, null/absent/blank unification for optional text,
//! currency allow-list mapping, itinerary derivation from the day list, and
//! one-time tagging of gallery items as `Existing` or `New`.
//!
//! Normalization is total: malformed values coerce to each field's default
//! and are never an error. The only fallible step is [`parse_snapshot`],
//! which rejects values whose root is not a JSON object.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;
use travesia_core_types::Currency;

use crate::errors::{TravesiaError, TvError};
use crate::model::{
    DestinationList, DestinationPoint, GalleryItem, HotelRef, PackageSnapshot, RawDestination,
    RawGalleryItem, RawHotel, RawPackageSnapshot, ScalarFields,
};

/// Parse a raw JSON value into the lenient wire shape.
///
/// # Errors
///
/// - `InvalidSnapshot` — the root is not a JSON object. Everything below the
///   root is lenient: a malformed field coerces during normalization instead
///   of failing the parse.
pub fn parse_snapshot(raw: &Value) -> Result<RawPackageSnapshot, TvError> {
    if !raw.is_object() {
        return Err(TravesiaError::SnapshotNotObject
            .to_facility()
            .with_op("parse_snapshot"));
    }
    serde_json::from_value(raw.clone()).map_err(|e| {
        TravesiaError::SnapshotDeserialize {
            reason: e.to_string(),
        }
        .to_facility()
        .with_op("parse_snapshot")
    })
}

/// Normalize a raw snapshot into the canonical comparable shape.
pub fn normalize(raw: &RawPackageSnapshot) -> PackageSnapshot {
    PackageSnapshot {
        package_id: int_opt(&raw.id),
        scalars: normalize_scalars(raw),
        destinations: normalize_destinations(raw),
        gallery: normalize_gallery(&raw.imagenes),
        hotel: raw.hotel.as_ref().map(normalize_hotel),
        wholesaler_ids: raw.mayoristas_ids.iter().filter_map(int_value).collect(),
    }
}

/// Parse and normalize in one step.
///
/// # Errors
///
/// See [`parse_snapshot`].
pub fn normalize_value(raw: &Value) -> Result<PackageSnapshot, TvError> {
    Ok(normalize(&parse_snapshot(raw)?))
}

fn normalize_scalars(raw: &RawPackageSnapshot) -> ScalarFields {
    ScalarFields {
        title: text_opt(&raw.titulo),
        start_date: date_opt(&raw.fecha_inicio),
        end_date: date_opt(&raw.fecha_fin),
        includes: text_opt(&raw.incluye),
        excludes: text_opt(&raw.no_incluye),
        requirements: text_opt(&raw.requisitos),
        total_price: num_opt(&raw.precio_total).unwrap_or(0.0),
        discount: num_opt(&raw.descuento),
        deposit: num_opt(&raw.anticipo),
        notes: text_opt(&raw.notas),
        active: bool_or(&raw.activo, true),
        itinerary_text: itinerary_text(raw),
        currency: text_opt(&raw.moneda)
            .map(|code| Currency::from_code_or_default(&code))
            .unwrap_or_default(),
    }
}

/// Pre-rendered itinerary text when present, otherwise derived from the
/// day-by-day list: entries sorted by day number, rendered `DAY <n>: <desc>`,
/// joined with a blank line.
fn itinerary_text(raw: &RawPackageSnapshot) -> Option<String> {
    if let Some(text) = text_opt(&raw.itinerario_texto) {
        return Some(text);
    }

    let mut days: Vec<(i64, String)> = raw
        .itinerario
        .iter()
        .filter_map(|entry| {
            let day = entry.day.as_ref().and_then(int_value)?;
            let description = text_opt(&entry.description)?;
            Some((day, description))
        })
        .collect();
    if days.is_empty() {
        return None;
    }
    days.sort_by_key(|(day, _)| *day);

    let rendered: Vec<String> = days
        .into_iter()
        .map(|(day, description)| format!("DAY {}: {}", day, description))
        .collect();
    Some(rendered.join("\n\n"))
}

fn normalize_destinations(raw: &RawPackageSnapshot) -> DestinationList {
    // Form shape wins when any primary form field is present: it is the live
    // UI state, even if a fetched `destinos` array is still attached.
    let has_form_primary =
        raw.destino.is_some() || raw.destino_lat.is_some() || raw.destino_lng.is_some();

    if has_form_primary || !raw.destinos_adicionales.is_empty() {
        let point = DestinationPoint {
            name: text_opt(&raw.destino),
            lat: num_opt(&raw.destino_lat),
            lng: num_opt(&raw.destino_lng),
        };
        // A nameless primary still carries its coordinates; only a fully
        // absent triple means "no primary".
        let primary = (point != DestinationPoint::default()).then_some(point);
        return DestinationList {
            primary,
            additional: raw
                .destinos_adicionales
                .iter()
                .map(normalize_destination)
                .collect(),
        };
    }

    if raw.destinos.is_empty() {
        return DestinationList::default();
    }
    let mut indexed: Vec<(u32, DestinationPoint)> = raw
        .destinos
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let order = d
                .order
                .as_ref()
                .and_then(int_value)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(i as u32 + 1);
            (order, normalize_destination(d))
        })
        .collect();
    indexed.sort_by_key(|(order, _)| *order);
    let mut stops = indexed.into_iter().map(|(_, d)| d);
    DestinationList {
        primary: stops.next(),
        additional: stops.collect(),
    }
}

fn normalize_destination(raw: &RawDestination) -> DestinationPoint {
    DestinationPoint {
        name: text_opt(&raw.name),
        lat: num_opt(&raw.lat),
        lng: num_opt(&raw.lng),
    }
}

fn normalize_gallery(items: &[RawGalleryItem]) -> Vec<GalleryItem> {
    let mut gallery: Vec<GalleryItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| normalize_gallery_item(item, i))
        .collect();
    // `order` is display position; keep the list sorted by it so sequence
    // comparisons and order comparisons agree.
    gallery.sort_by_key(|item| item.order());
    gallery
}

fn normalize_gallery_item(item: &RawGalleryItem, position: usize) -> GalleryItem {
    let order = item
        .order
        .as_ref()
        .and_then(int_value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(position as u32 + 1);

    let resource = text_opt(&item.archivo);
    // An explicit "not uploaded" flag marks the item New even without a
    // resource attached yet.
    if resource.is_some() || !bool_or(&item.subida, true) {
        return GalleryItem::New {
            raw_resource: resource.unwrap_or_default(),
            order,
        };
    }

    match int_opt(&item.id) {
        Some(id) => GalleryItem::Existing {
            id,
            content: text_opt(&item.content).unwrap_or_default(),
            order,
            original_content: text_opt(&item.original_content),
        },
        None => {
            // Anomaly: neither a stable id nor a raw resource. Tagging it
            // `New` keeps the diff conservative (forces FULL_UPDATE).
            warn!(
                component = "normalizer",
                order, "gallery item has neither a stable id nor a raw resource"
            );
            GalleryItem::New {
                raw_resource: String::new(),
                order,
            }
        }
    }
}

fn normalize_hotel(raw: &RawHotel) -> HotelRef {
    HotelRef {
        external_id: text_opt(&raw.external_id),
        internal_id: int_opt(&raw.id),
        name: text_opt(&raw.name),
        star_rating: num_opt(&raw.star_rating),
        images: normalize_gallery(&raw.images),
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Text coercion: absent, non-string and whitespace-only all → None.
fn text_opt(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Numeric coercion: finite numbers pass through, finite numeric strings
/// parse, everything else (including "NaN"/"inf") is None.
fn num_opt(value: &Option<Value>) -> Option<f64> {
    value.as_ref().and_then(num_value)
}

fn num_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn int_opt(value: &Option<Value>) -> Option<i64> {
    value.as_ref().and_then(int_value)
}

fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Flag coercion: accepts booleans, 0/1 numbers and "true"/"false"/"1"/"0"
/// strings; anything else takes the default.
fn bool_or(value: &Option<Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(default, |f| f != 0.0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => default,
        },
        _ => default,
    }
}

/// Date coercion: `YYYY-MM-DD`, with an RFC 3339 timestamp accepted by
/// taking its date part. Unparsable → None.
fn date_opt(value: &Option<Value>) -> Option<NaiveDate> {
    let Some(Value::String(s)) = value else {
        return None;
    };
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
