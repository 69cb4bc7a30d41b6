use serde::{Deserialize, Serialize};

use super::gallery::GalleryItem;

/// An attached hotel sub-document.
///
/// The hotel's own nested gallery may contain `New` images, which is why a
/// hotel change is always resolved asynchronously by the finalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HotelRef {
    /// Identifier from the external place provider, when known.
    pub external_id: Option<String>,
    /// Internal backend id, when already persisted.
    pub internal_id: Option<i64>,
    pub name: Option<String>,
    pub star_rating: Option<f64>,
    pub images: Vec<GalleryItem>,
}

impl HotelRef {
    /// The identity triple used for change detection.
    ///
    /// The external id wins over the internal id when both are present;
    /// nested images are deliberately not part of the identity — any image
    /// work is the finalizer's job once a change is flagged.
    pub fn identity(&self) -> HotelIdentity {
        let reference = self
            .external_id
            .clone()
            .or_else(|| self.internal_id.map(|id| id.to_string()));
        HotelIdentity {
            reference,
            name: self.name.clone(),
            star_rating: self.star_rating,
        }
    }
}

/// Comparable hotel identity: `(externalId ?? internalId, name, starRating)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelIdentity {
    pub reference: Option<String>,
    pub name: Option<String>,
    pub star_rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_id_wins() {
        let hotel = HotelRef {
            external_id: Some("place:abc".to_string()),
            internal_id: Some(9),
            name: Some("Hotel Maya".to_string()),
            star_rating: Some(4.5),
            images: Vec::new(),
        };
        assert_eq!(hotel.identity().reference.as_deref(), Some("place:abc"));
    }

    #[test]
    fn test_internal_id_fallback() {
        let hotel = HotelRef {
            internal_id: Some(9),
            ..HotelRef::default()
        };
        assert_eq!(hotel.identity().reference.as_deref(), Some("9"));
    }

    #[test]
    fn test_images_do_not_affect_identity() {
        let mut a = HotelRef {
            name: Some("Hotel Maya".to_string()),
            ..HotelRef::default()
        };
        let b = a.clone();
        a.images.push(GalleryItem::New {
            raw_resource: "blob:x".to_string(),
            order: 1,
        });
        assert_eq!(a.identity(), b.identity());
    }
}
