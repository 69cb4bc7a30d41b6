//! Edit-session ownership of the two diff sides.
//!
//! An [`EditSession`] owns the immutable *original* snapshot for its whole
//! lifetime and the live *current* snapshot the admin console keeps
//! replacing. The diff engine only ever reads both; the session is also
//! where the single-in-flight submit rule lives.

use tracing::{debug, info};
use travesia_core_types::SessionId;

use crate::diff::{compute_diff, PackageDiff};
use crate::errors::{Result, TravesiaError};
use crate::model::PackageSnapshot;
use crate::patch::{assemble_payload, PatchPayload};

/// One admin edit session over a single travel package.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: SessionId,
    original: PackageSnapshot,
    current: PackageSnapshot,
    submit_in_flight: bool,
}

impl EditSession {
    /// Open a session; the current state starts as a copy of the original.
    pub fn open(original: PackageSnapshot) -> Self {
        let id = SessionId::new();
        info!(
            component = "edit_session",
            session_id = %id,
            package_id = original.package_id,
            "opened edit session"
        );
        Self {
            current: original.clone(),
            original,
            id,
            submit_in_flight: false,
        }
    }

    /// This session's correlation id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The immutable server-fetched snapshot.
    pub fn original(&self) -> &PackageSnapshot {
        &self.original
    }

    /// The live edit-form snapshot.
    pub fn current(&self) -> &PackageSnapshot {
        &self.current
    }

    /// Replace the live snapshot with the latest normalized form state.
    pub fn set_current(&mut self, current: PackageSnapshot) {
        self.current = current;
    }

    /// Recompute the pending diff.
    ///
    /// Pure and cheap; safe to call on every form change for a live
    /// "pending changes" indicator.
    pub fn pending_diff(&self) -> PackageDiff {
        let diff = compute_diff(&self.original, &self.current);
        debug!(
            component = "edit_session",
            session_id = %self.id,
            has_changes = diff.has_changes(),
            "recomputed pending diff"
        );
        diff
    }

    /// Assemble the patch payload and mark a submit cycle as in flight.
    ///
    /// An empty payload is returned without opening a cycle: the caller must
    /// treat it as "no changes detected" and skip transmission. Only one
    /// finalization+submit cycle may be in flight per session.
    ///
    /// # Errors
    ///
    /// - `SubmitInFlight` — a previous submit has not completed yet
    pub fn begin_submit(&mut self) -> Result<PatchPayload> {
        if self.submit_in_flight {
            return Err(TravesiaError::SubmitInFlight {
                session_id: self.id,
            });
        }

        let payload = assemble_payload(&self.pending_diff());
        if payload.is_empty() {
            info!(
                component = "edit_session",
                session_id = %self.id,
                "no changes detected; nothing to submit"
            );
            return Ok(payload);
        }

        self.submit_in_flight = true;
        info!(
            component = "edit_session",
            session_id = %self.id,
            fields = payload.len(),
            "submit cycle opened"
        );
        Ok(payload)
    }

    /// Close the in-flight submit cycle after the network client reports.
    ///
    /// On success the caller must also invalidate any cross-session cache
    /// entry for this package: the cached copy is now stale relative to the
    /// server's new state.
    ///
    /// # Errors
    ///
    /// - `NoSubmitInFlight` — no cycle was open
    pub fn complete_submit(&mut self, success: bool) -> Result<()> {
        if !self.submit_in_flight {
            return Err(TravesiaError::NoSubmitInFlight {
                session_id: self.id,
            });
        }
        self.submit_in_flight = false;
        info!(
            component = "edit_session",
            session_id = %self.id,
            success,
            "submit cycle closed"
        );
        Ok(())
    }

    /// True while a finalization+submit cycle is open.
    pub fn submit_in_flight(&self) -> bool {
        self.submit_in_flight
    }
}
