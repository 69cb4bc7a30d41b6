//! Travel package domain model
//!
//! Two layers:
//!
//! - **Raw**: lenient, serde-deserialized wire shapes as fetched from the
//!   backend or captured from the admin edit form. Numbers may arrive as
//!   strings, optional fields may be absent, null or blank, and the
//!   destination data may come in either the server list shape or the
//!   edit-form shape.
//! - **Normalized**: the canonical [`PackageSnapshot`] the differs operate
//!   on. Produced once per side by the normalizer; equivalence here is plain
//!   typed equality.

pub mod destination;
pub mod gallery;
pub mod hotel;
pub mod package;
pub mod raw;

pub use destination::{DestinationList, DestinationPoint};
pub use gallery::GalleryItem;
pub use hotel::{HotelIdentity, HotelRef};
pub use package::{PackageSnapshot, ScalarFields};
pub use raw::{RawDestination, RawGalleryItem, RawHotel, RawItineraryDay, RawPackageSnapshot};
