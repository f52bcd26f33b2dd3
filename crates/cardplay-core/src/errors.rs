use cardplay_core_types::RequestId;
use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using CardplayError
pub type Result<T> = std::result::Result<T, CardplayError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, the archive
/// layer, tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Snapshot decoding
    /// Snapshot bytes are not valid UTF-8 JSON, or a field has the wrong shape
    InvalidSnapshot,
    /// A required snapshot field (e.g. `streams`, `timestamp`) is absent
    MissingField,

    // Validation
    /// Two entities of the same kind share an id
    DuplicateId,
    /// A clip points at a stream that is not in the snapshot
    DanglingReference,
    /// A structural rule was broken (e.g. a route that connects a point to itself)
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::DanglingReference => "ERR_DANGLING_REFERENCE",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity id, request id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for snapshot validation and decoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardplayError {
    /// Two entities of the same kind share an id within one snapshot
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },

    /// Two events inside one stream share an id
    #[error("Duplicate event id {event_id} in stream {stream_id}")]
    DuplicateEventId { stream_id: String, event_id: String },

    /// Clip references a stream that is not part of the snapshot
    #[error("Clip {clip_id} references unknown stream {stream_id}")]
    DanglingStreamReference { clip_id: String, stream_id: String },

    /// Route connects a point to itself
    #[error("Route {connection_id} connects {point_id} to itself")]
    SelfRoute {
        connection_id: String,
        point_id: String,
    },

    /// Snapshot document is structurally invalid
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem error while reading or writing a snapshot document
    #[error("I/O error: {message}")]
    Io { message: String },
}

/// Conversion from CardplayError to ExError
impl From<CardplayError> for ExError {
    fn from(err: CardplayError) -> Self {
        match err {
            CardplayError::DuplicateId { kind, id } => ExError::new(ExErrorKind::DuplicateId)
                .with_entity_id(id)
                .with_message(format!("Duplicate {} id", kind)),

            CardplayError::DuplicateEventId {
                stream_id,
                event_id,
            } => ExError::new(ExErrorKind::DuplicateId)
                .with_entity_id(event_id)
                .with_message(format!("Duplicate event id in stream {}", stream_id)),

            CardplayError::DanglingStreamReference { clip_id, stream_id } => {
                ExError::new(ExErrorKind::DanglingReference)
                    .with_entity_id(clip_id)
                    .with_message(format!("Clip references unknown stream {}", stream_id))
            }

            CardplayError::SelfRoute {
                connection_id,
                point_id,
            } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity_id(connection_id)
                .with_message(format!("Route connects {} to itself", point_id)),

            CardplayError::InvalidSnapshot { reason } => {
                ExError::new(ExErrorKind::InvalidSnapshot).with_message(reason)
            }

            CardplayError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            CardplayError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to CardplayError
impl From<serde_json::Error> for CardplayError {
    fn from(err: serde_json::Error) -> Self {
        CardplayError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from serde_json::Error to ExError
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        CardplayError::from(err).into()
    }
}

/// Conversion from std::io::Error to CardplayError
impl From<std::io::Error> for CardplayError {
    fn from(err: std::io::Error) -> Self {
        CardplayError::Io {
            message: err.to_string(),
        }
    }
}
