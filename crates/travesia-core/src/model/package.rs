use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use travesia_core_types::Currency;

use super::destination::DestinationList;
use super::gallery::GalleryItem;
use super::hotel::HotelRef;

/// Canonical, normalized snapshot of a travel package.
///
/// Both diff sides — the immutable server-fetched *original* and the live
/// *current* form state — are normalized into this shape before any differ
/// runs. Equivalence is plain typed equality per field: the null/undefined/
/// blank-string unification already happened in the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PackageSnapshot {
    /// Backend id, when the package is already persisted.
    pub package_id: Option<i64>,
    pub scalars: ScalarFields,
    pub destinations: DestinationList,
    /// Gallery items in display order (sorted by their `order` field).
    pub gallery: Vec<GalleryItem>,
    pub hotel: Option<HotelRef>,
    /// Many-to-many wholesaler association; order-free by construction.
    pub wholesaler_ids: BTreeSet<i64>,
}

/// The top-level scalar fields owned by the scalar differ.
///
/// Fields owned by specialized differs (destinations, gallery, hotel,
/// wholesalers) live on [`PackageSnapshot`] directly; keeping them out of
/// this struct is what the scalar differ's exclusion rule looks like in a
/// typed model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarFields {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub includes: Option<String>,
    pub excludes: Option<String>,
    pub requirements: Option<String>,
    /// Defaults to 0 when absent or unparsable (non-null backend column).
    pub total_price: f64,
    pub discount: Option<f64>,
    pub deposit: Option<f64>,
    pub notes: Option<String>,
    pub active: bool,
    pub itinerary_text: Option<String>,
    pub currency: Currency,
}

impl Default for ScalarFields {
    fn default() -> Self {
        Self {
            title: None,
            start_date: None,
            end_date: None,
            includes: None,
            excludes: None,
            requirements: None,
            total_price: 0.0,
            discount: None,
            deposit: None,
            notes: None,
            active: true,
            itinerary_text: None,
            currency: Currency::default(),
        }
    }
}
