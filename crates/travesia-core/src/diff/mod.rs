//! Partial-update reconciliation engine.
//!
//! Compares the immutable original snapshot of a travel package against the
//! live edit-form state and produces a structured, deterministic diff from
//! which the payload assembler builds the smallest transmittable patch.
//!
//! ## Entry point
//!
//! ```ignore
//! use travesia_core::diff::compute_diff;
//! use travesia_core::patch::assemble_payload;
//!
//! let diff = compute_diff(&original, &current);
//! let payload = assemble_payload(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: no I/O, neither input is mutated, identical inputs produce
//!   identical structured output.
//! - **Correctness**: a real change is never omitted; an unchanged field is
//!   never claimed as changed, including type-only differences erased by
//!   normalization.
//! - **Conservatism**: cheap verdicts (order-only image patches, unchanged
//!   fast-path) are preferred over full replacement whenever safe.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, compute_diff_values};
pub use human_summary::render_human_summary;
pub use model::PackageDiff;
