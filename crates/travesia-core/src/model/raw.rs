//! Lenient wire shapes for package snapshots
//!
//! Every field deserializes from any JSON value: the normalizer, not the
//! deserializer, decides what missing or malformed data means. Scalar-ish
//! fields are raw `Value`s (the backend and the edit form both emit
//! numbers-as-strings in places, and malformed types must coerce, not fail);
//! collections drop malformed elements to their defaults element-wise. The
//! only rejected input is a non-object root.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a `T`, falling back to `T::default()` on a type mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserialize a sequence element-wise, defaulting malformed elements.
///
/// A non-array value yields an empty list; a malformed element yields that
/// element's default (for gallery items, the id-less anomaly shape the
/// normalizer tags conservatively) instead of poisoning the whole list.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// A travel package exactly as it arrives over the wire.
///
/// Covers both shapes the engine sees:
/// - the server shape (`destinos` as an ordered list), and
/// - the edit-form shape (`destino`/`destino_lat`/`destino_lng` for the
///   primary stop plus `destinos_adicionales` for the rest).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPackageSnapshot {
    pub id: Option<Value>,
    pub titulo: Option<Value>,
    pub fecha_inicio: Option<Value>,
    pub fecha_fin: Option<Value>,
    pub incluye: Option<Value>,
    pub no_incluye: Option<Value>,
    pub requisitos: Option<Value>,
    pub precio_total: Option<Value>,
    pub descuento: Option<Value>,
    pub anticipo: Option<Value>,
    pub notas: Option<Value>,
    pub activo: Option<Value>,
    pub moneda: Option<Value>,

    /// Pre-rendered itinerary text, when the backend already has it.
    pub itinerario_texto: Option<Value>,
    /// Day-by-day itinerary list; used to derive the text when absent.
    #[serde(alias = "dias", deserialize_with = "lenient_seq")]
    pub itinerario: Vec<RawItineraryDay>,

    /// Server shape: the full ordered destination list.
    #[serde(deserialize_with = "lenient_seq")]
    pub destinos: Vec<RawDestination>,
    /// Form shape: primary destination name.
    pub destino: Option<Value>,
    /// Form shape: primary destination latitude.
    pub destino_lat: Option<Value>,
    /// Form shape: primary destination longitude.
    pub destino_lng: Option<Value>,
    /// Form shape: additional stops beyond the primary.
    #[serde(deserialize_with = "lenient_seq")]
    pub destinos_adicionales: Vec<RawDestination>,

    #[serde(deserialize_with = "lenient_seq")]
    pub imagenes: Vec<RawGalleryItem>,
    #[serde(deserialize_with = "lenient")]
    pub hotel: Option<RawHotel>,

    #[serde(rename = "mayoristasIds", alias = "mayoristas_ids", deserialize_with = "lenient_seq")]
    pub mayoristas_ids: Vec<Value>,
}

/// One itinerary day as entered in the admin console.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawItineraryDay {
    #[serde(alias = "dia")]
    pub day: Option<Value>,
    #[serde(alias = "descripcion")]
    pub description: Option<Value>,
}

/// One destination stop, in either naming convention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDestination {
    #[serde(alias = "destino", alias = "nombre")]
    pub name: Option<Value>,
    #[serde(alias = "destino_lat")]
    pub lat: Option<Value>,
    #[serde(alias = "destino_lng")]
    pub lng: Option<Value>,
    #[serde(alias = "orden")]
    pub order: Option<Value>,
}

/// One gallery entry as it arrives from either side.
///
/// Server items carry `id` + a content reference. Form items may instead
/// carry a raw local resource (`archivo`) for not-yet-uploaded images, and
/// round-tripped server items keep their fetched content in
/// `originalContent`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGalleryItem {
    pub id: Option<Value>,
    #[serde(alias = "contenido", alias = "url")]
    pub content: Option<Value>,
    #[serde(alias = "orden")]
    pub order: Option<Value>,
    #[serde(rename = "originalContent")]
    pub original_content: Option<Value>,
    /// Raw local resource for a not-yet-persisted image.
    #[serde(alias = "file")]
    pub archivo: Option<Value>,
    /// Explicit persisted flag set by the edit form.
    #[serde(alias = "uploaded")]
    pub subida: Option<Value>,
}

/// Attached hotel record, in either naming convention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHotel {
    /// Identifier from the external place provider.
    #[serde(alias = "externalId", alias = "place_id")]
    pub external_id: Option<Value>,
    /// Internal backend id, when already persisted.
    pub id: Option<Value>,
    #[serde(alias = "nombre")]
    pub name: Option<Value>,
    #[serde(alias = "estrellas", alias = "starRating")]
    pub star_rating: Option<Value>,
    #[serde(alias = "imagenes", deserialize_with = "lenient_seq")]
    pub images: Vec<RawGalleryItem>,
}
