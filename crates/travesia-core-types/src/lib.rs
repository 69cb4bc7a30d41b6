//! Core types shared across Travesía facilities
//!
//! This crate provides the foundational domain primitives used by the
//! reconciliation engine and its callers:
//!
//! - **Wire schema constants**: canonical patch-payload field keys and
//!   the sentinel strings that stand in for asynchronously finalized content
//! - **Currency**: the fixed currency allow-list with its documented default
//! - **Id types**: SessionId for edit-session correlation

pub mod currency;
pub mod ids;
pub mod schema;

pub use currency::Currency;
pub use ids::SessionId;
