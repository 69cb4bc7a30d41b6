//! Patch payload assembly.
//!
//! Merges the differ outputs into one wire-ready patch object. Collections
//! whose final content requires asynchronous finalization (uploading new
//! images, serializing the hotel's nested gallery) are represented by
//! sentinel strings; the external finalizer resolves them before the network
//! client transmits the payload.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use travesia_core_types::schema;

use crate::diff::model::{GalleryChanges, PackageDiff};

/// The assembled partial-update payload.
///
/// Keys are a subset of the backend's accepted patch fields. An empty
/// payload is the valid "no changes" outcome: callers must skip network
/// transmission entirely and surface an informational notice instead of
/// sending an empty patch request.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PatchPayload(Map<String, Value>);

impl PatchPayload {
    /// True when nothing changed; the caller must not transmit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level patch fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up one patch field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying map (for the finalizer).
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying map (for the finalizer).
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Merge all differ outputs into one patch payload.
///
/// Scalar changes are added verbatim; destination and wholesaler changes
/// carry their full replacement values; image and hotel changes carry
/// sentinels pending finalization.
pub fn assemble_payload(diff: &PackageDiff) -> PatchPayload {
    let mut payload = Map::new();

    for (key, value) in &diff.scalar_changes {
        payload.insert(key.clone(), value.clone());
    }

    if diff.destination_changes.changed {
        let entries = serde_json::to_value(&diff.destination_changes.replacement)
            .unwrap_or(Value::Array(Vec::new()));
        payload.insert(schema::FIELD_DESTINOS.to_string(), entries);
    }

    if diff.wholesaler_changes.changed {
        let ids = diff
            .wholesaler_changes
            .replacement
            .iter()
            .map(|id| Value::from(*id))
            .collect();
        payload.insert(schema::FIELD_MAYORISTAS_IDS.to_string(), Value::Array(ids));
    }

    match &diff.gallery_changes {
        GalleryChanges::NoChange => {}
        GalleryChanges::OrderOnly { .. } => {
            payload.insert(
                schema::FIELD_IMAGENES.to_string(),
                Value::String(schema::SENTINEL_PROCESS_IMAGES_ORDER_ONLY.to_string()),
            );
        }
        GalleryChanges::FullUpdate { .. } => {
            payload.insert(
                schema::FIELD_IMAGENES.to_string(),
                Value::String(schema::SENTINEL_PROCESS_IMAGES.to_string()),
            );
        }
    }

    if diff.hotel_changes.changed() {
        payload.insert(
            schema::FIELD_HOTEL.to_string(),
            Value::String(schema::SENTINEL_PROCESS_HOTEL.to_string()),
        );
    }

    debug!(
        component = "payload_assembler",
        fields = payload.len(),
        "assembled patch payload"
    );
    PatchPayload(payload)
}
