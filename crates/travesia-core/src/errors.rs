use thiserror::Error;
use travesia_core_types::SessionId;

/// Result type alias using TravesiaError
pub type Result<T> = std::result::Result<T, TravesiaError>;

// ========== Error Facility ==========

/// Stable classification of the errors the engine can surface.
///
/// The differ pipeline itself is a total function and never errors; only the
/// parse boundary and the submit gate can fail. Each kind maps to a stable
/// `ERR_*` code used in log output and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvErrorKind {
    // Parse boundary
    InvalidSnapshot,

    // Submit gating
    SubmitInFlight,

    // Assembly/serialization (future)
    Serialization,

    // Violated internal assumptions
    Internal,
}

impl TvErrorKind {
    /// Stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TvErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            TvErrorKind::SubmitInFlight => "ERR_SUBMIT_IN_FLIGHT",
            TvErrorKind::Serialization => "ERR_SERIALIZATION",
            TvErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Structured error carrying a kind plus diagnosis context.
///
/// Context (operation, package id, session id) is attached at the failure
/// site with the `with_*` builders and rendered into `Display` output, so a
/// single log line identifies which session and package an error belongs to.
#[derive(Debug, Clone)]
pub struct TvError {
    kind: TvErrorKind,
    op: Option<String>,
    package_id: Option<i64>,
    session_id: Option<SessionId>,
    message: String,
}

impl TvError {
    pub fn new(kind: TvErrorKind) -> Self {
        Self {
            kind,
            op: None,
            package_id: None,
            session_id: None,
            message: String::new(),
        }
    }

    /// Name the operation that failed (e.g. `parse_snapshot`).
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Attach the affected package id.
    pub fn with_package_id(mut self, package_id: i64) -> Self {
        self.package_id = Some(package_id);
        self
    }

    /// Attach the edit session this error belongs to.
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Attach a human-readable detail message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> TvErrorKind {
        self.kind
    }

    /// Stable `ERR_*` code for this error.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn package_id(&self) -> Option<i64> {
        self.package_id
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for TvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(package_id) = self.package_id {
            write!(f, " (package_id: {})", package_id)?;
        }
        if let Some(session_id) = &self.session_id {
            write!(f, " (session_id: {})", session_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for TvError {}

// ========== End Error Facility ==========

/// Error taxonomy for engine boundary operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TravesiaError {
    // ===== Parse Errors =====
    /// Snapshot root is not a JSON object
    #[error("Snapshot root must be a JSON object")]
    SnapshotNotObject,

    /// Snapshot failed typed deserialization
    #[error("Failed to deserialize snapshot: {reason}")]
    SnapshotDeserialize { reason: String },

    // ===== Submit Errors =====
    /// A finalization+submit cycle is already in flight for this session
    #[error("Submit already in flight for session {session_id}")]
    SubmitInFlight { session_id: SessionId },

    /// Submit completion reported for a session with no submit in flight
    #[error("No submit in flight for session {session_id}")]
    NoSubmitInFlight { session_id: SessionId },
}

impl TravesiaError {
    /// Map to the structured error facility, preserving context.
    pub fn to_facility(&self) -> TvError {
        match self {
            TravesiaError::SnapshotNotObject => TvError::new(TvErrorKind::InvalidSnapshot)
                .with_message("snapshot root must be a JSON object"),
            TravesiaError::SnapshotDeserialize { reason } => {
                TvError::new(TvErrorKind::InvalidSnapshot).with_message(reason.clone())
            }
            TravesiaError::SubmitInFlight { session_id } => {
                TvError::new(TvErrorKind::SubmitInFlight).with_session_id(*session_id)
            }
            TravesiaError::NoSubmitInFlight { session_id } => {
                TvError::new(TvErrorKind::SubmitInFlight)
                    .with_session_id(*session_id)
                    .with_message("no submit in flight")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(TvErrorKind::InvalidSnapshot.code(), "ERR_INVALID_SNAPSHOT");
        assert_eq!(TvErrorKind::SubmitInFlight.code(), "ERR_SUBMIT_IN_FLIGHT");
    }

    #[test]
    fn test_display_includes_context() {
        let err = TvError::new(TvErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot")
            .with_package_id(42)
            .with_message("not an object");
        let rendered = err.to_string();
        assert!(rendered.contains("ERR_INVALID_SNAPSHOT"));
        assert!(rendered.contains("parse_snapshot"));
        assert!(rendered.contains("42"));
    }

    #[test]
    fn test_taxonomy_maps_to_facility() {
        let err = TravesiaError::SnapshotNotObject;
        assert_eq!(err.to_facility().kind(), TvErrorKind::InvalidSnapshot);
    }
}
