//! Structured logging facility for Travesía
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Environment-filter override via `RUST_LOG`
//! - JSON output in production, human-readable output in development
//!
//! The engine itself only ever emits `warn!` (normalization anomalies) and
//! `debug!`/`info!` (session lifecycle); it never logs at error level because
//! the differ pipeline has no fatal paths.

pub mod init;

pub use init::{init, Profile};
