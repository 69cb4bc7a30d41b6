//! Travesía Core - partial-update reconciliation engine
//!
//! This crate computes the smallest safe patch payload for an edited travel
//! package by comparing the immutable server-fetched snapshot against the
//! live admin-form state:
//!
//! - Snapshot normalization (numeric coercion, blank/null unification,
//!   itinerary derivation, one-time gallery item tagging)
//! - Five specialized differs: scalar fields, ordered destination list,
//!   image gallery, wholesaler association, hotel sub-document
//! - Payload assembly with sentinels for content that an external finalizer
//!   resolves asynchronously before transmission
//! - Edit-session ownership and the single-in-flight submit rule
//! - A TTL-bound, explicitly invalidated fetch cache
//!
//! The UI that produces the snapshots, the network client that transmits the
//! payload, geocoding and binary asset upload are external collaborators.

pub mod cache;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod patch;
pub mod session;

// Re-export commonly used types
pub use cache::FetchCache;
pub use diff::{compute_diff, compute_diff_values, render_human_summary, PackageDiff};
pub use errors::{Result, TravesiaError, TvError, TvErrorKind};
pub use model::{GalleryItem, PackageSnapshot};
pub use normalize::{normalize, normalize_value, parse_snapshot};
pub use patch::{assemble_payload, PatchPayload};
pub use session::EditSession;
