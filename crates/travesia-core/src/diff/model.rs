//! Package diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections use `BTreeMap` and stable `Vec` order for deterministic
//! serialization. Change sub-structs are populated even when there is no
//! change (empty collections, `Unchanged` variants) to allow uniform
//! downstream processing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The structured diff between an original and a current package snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PackageDiff {
    /// Changed scalar fields: wire key → new (normalized) value
    pub scalar_changes: BTreeMap<String, Value>,
    /// Destination list verdict and, when changed, the full replacement
    pub destination_changes: DestinationChanges,
    /// Gallery classification
    pub gallery_changes: GalleryChanges,
    /// Wholesaler association verdict and, when changed, the full current set
    pub wholesaler_changes: WholesalerChanges,
    /// Hotel sub-document verdict
    pub hotel_changes: HotelChanges,
}

impl PackageDiff {
    /// True if any sub-resource changed.
    pub fn has_changes(&self) -> bool {
        !self.scalar_changes.is_empty()
            || self.destination_changes.changed
            || self.gallery_changes != GalleryChanges::NoChange
            || self.wholesaler_changes.changed
            || self.hotel_changes != HotelChanges::Unchanged
    }
}

/// Destination list verdict: binary-changed with full replacement.
///
/// The backend replaces the whole ordered list atomically, so no per-element
/// patch exists; `replacement` is the complete current-side list ready for
/// the wire (`orden` starting at 1, primary first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DestinationChanges {
    pub changed: bool,
    pub replacement: Vec<DestinationEntry>,
}

/// One destination stop in wire form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationEntry {
    #[serde(rename = "destino")]
    pub name: Option<String>,
    pub destino_lat: Option<f64>,
    pub destino_lng: Option<f64>,
    pub orden: u32,
}

/// Gallery classification, in ascending order of cost to apply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "kind")]
pub enum GalleryChanges {
    /// Gallery is identical on both sides
    #[default]
    NoChange,
    /// Same identified images with unchanged content, display order differs;
    /// carries the minimal `{id, orden}` list the backend needs
    OrderOnly { order: Vec<ImageOrderEntry> },
    /// Content must be re-processed by the finalizer before transmission
    FullUpdate { reason: GalleryUpdateReason },
}

/// Why the gallery requires a full update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GalleryUpdateReason {
    /// Item count differs between sides
    CountDiffers,
    /// At least one current item is not yet persisted
    NewImagesPresent,
    /// An identified item's content reference changed
    ContentChanged,
    /// Same count, but the sets of stable ids differ
    ItemsReplaced,
}

/// Minimal reorder instruction for one persisted image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageOrderEntry {
    pub id: i64,
    pub orden: u32,
}

/// Wholesaler association verdict: set-equality with full replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WholesalerChanges {
    pub changed: bool,
    /// The entire current id set, sorted, when changed
    pub replacement: Vec<i64>,
}

/// Hotel sub-document verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind")]
pub enum HotelChanges {
    /// Same presence and same identity triple
    #[default]
    Unchanged,
    /// No hotel before, one now
    Attached,
    /// Hotel before, none now
    Detached,
    /// Present on both sides with a different identity triple
    IdentityChanged,
}

impl HotelChanges {
    /// True for any variant except `Unchanged`.
    pub fn changed(&self) -> bool {
        *self != HotelChanges::Unchanged
    }
}
