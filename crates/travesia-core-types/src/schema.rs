//! Canonical wire schema constants for the partial-update payload
//!
//! These constants ensure the assembler, the finalizer and tests all agree
//! on the exact keys the REST backend accepts.

// Patch payload field keys (scalar fields)
pub const FIELD_TITULO: &str = "titulo";
pub const FIELD_FECHA_INICIO: &str = "fecha_inicio";
pub const FIELD_FECHA_FIN: &str = "fecha_fin";
pub const FIELD_INCLUYE: &str = "incluye";
pub const FIELD_NO_INCLUYE: &str = "no_incluye";
pub const FIELD_REQUISITOS: &str = "requisitos";
pub const FIELD_PRECIO_TOTAL: &str = "precio_total";
pub const FIELD_DESCUENTO: &str = "descuento";
pub const FIELD_ANTICIPO: &str = "anticipo";
pub const FIELD_NOTAS: &str = "notas";
pub const FIELD_ACTIVO: &str = "activo";
pub const FIELD_ITINERARIO_TEXTO: &str = "itinerario_texto";
pub const FIELD_MONEDA: &str = "moneda";

// Patch payload field keys (sub-resources)
pub const FIELD_DESTINOS: &str = "destinos";
pub const FIELD_MAYORISTAS_IDS: &str = "mayoristasIds";
pub const FIELD_IMAGENES: &str = "imagenes";
pub const FIELD_HOTEL: &str = "hotel";

// Sentinels standing in for content that requires asynchronous finalization
// (uploading new images, serializing the hotel's nested gallery) before the
// payload is transmittable.
pub const SENTINEL_PROCESS_IMAGES: &str = "PROCESS_IMAGES";
pub const SENTINEL_PROCESS_IMAGES_ORDER_ONLY: &str = "PROCESS_IMAGES_ORDER_ONLY";
pub const SENTINEL_PROCESS_HOTEL: &str = "PROCESS_HOTEL";
