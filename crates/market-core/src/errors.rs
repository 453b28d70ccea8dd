use market_core_types::RequestId;
use thiserror::Error;

/// Result type alias using the structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure that leaves a command, service or repository is classified
/// by one of these kinds. Each kind has a stable code used by the RPC
/// boundary and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Request shape
    NotEnoughParams,
    InvalidInput,
    MissingField,
    MethodNotFound,

    // Lookup
    NotFound,
    AlreadyExists,

    // Persistence
    /// A create/update/delete against the store failed; carries the cause
    Database,
    /// A read against the store failed and was surfaced unwrapped
    Persistence,

    // Integration/IO
    Serialization,
    Io,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotEnoughParams => "ERR_NOT_ENOUGH_PARAMS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::MethodNotFound => "ERR_METHOD_NOT_FOUND",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Database => "ERR_DATABASE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) plus the context needed to report the
/// failure: the operation, the entity and its lookup key, and the error that
/// caused it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Requested record does not exist
    pub fn not_found(entity: &str, key: impl ToString) -> Self {
        let key = key.to_string();
        ExError::new(ExErrorKind::NotFound)
            .with_entity(entity)
            .with_message(format!("Entity with identifier {} does not exist", key))
            .with_entity_id(key)
    }

    /// A write against the store failed
    ///
    /// `op` names the failed operation (create/update/delete); the message
    /// follows the "Could not <op> the <entity>!" form.
    pub fn database(op: &str, entity: &str, cause: ExError) -> Self {
        ExError::new(ExErrorKind::Database)
            .with_op(op)
            .with_entity(entity)
            .with_message(format!("Could not {} the {}!", op, entity))
            .with_source(cause)
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Lookup key of the entity involved, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error that caused this one, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for request parsing and validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    // ===== Request shape =====
    /// Fewer positional params than the command requires
    #[error("Not enough params.")]
    NotEnoughParams { required: usize, given: usize },

    /// Positional param could not be read as the expected type
    #[error("Invalid param {index} ({field}): {reason}")]
    InvalidParam {
        index: usize,
        field: String,
        reason: String,
    },

    /// Required field missing from a request object
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    // ===== Validation =====
    /// Blank title
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// Blank name or other required text
    #[error("Field {field} cannot be empty")]
    EmptyField { field: String },

    /// Price below zero
    #[error("Price {field} cannot be negative")]
    NegativePrice { field: String },

    /// Text that does not name a known enum variant
    #[error("Unknown {field}: {value}")]
    UnknownVariant { field: String, value: String },

    /// Proposal voting window ends before it starts
    #[error("Invalid block range: start {block_start} is after end {block_end}")]
    InvalidBlockRange { block_start: i64, block_end: i64 },

    // ===== Lookup =====
    /// Owning profile does not exist
    #[error("Profile not found: {profile_id}")]
    ProfileNotFound { profile_id: i64 },

    // ===== Generic =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from MarketError to ExError
impl From<MarketError> for ExError {
    fn from(err: MarketError) -> Self {
        let message = err.to_string();
        match err {
            MarketError::NotEnoughParams { required, given } => {
                ExError::new(ExErrorKind::NotEnoughParams)
                    .with_op("parse_params")
                    .with_entity_id(format!("{}/{}", given, required))
                    .with_message(message)
            }

            MarketError::InvalidParam { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_params")
                .with_entity_id(field)
                .with_message(message),

            MarketError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_entity_id(field)
                .with_message(message),

            MarketError::InvalidTitle { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_entity_id("title")
                .with_message(message),

            MarketError::EmptyField { field }
            | MarketError::NegativePrice { field }
            | MarketError::UnknownVariant { field, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("validate")
                    .with_entity_id(field)
                    .with_message(message)
            }

            MarketError::InvalidBlockRange { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_message(message),

            MarketError::ProfileNotFound { profile_id } => {
                ExError::not_found("Profile", profile_id).with_message(message)
            }

            MarketError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            MarketError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
