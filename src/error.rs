//! Error types for model probing and grading.
//!
//! Resolver failures are grading diagnostics: their `Display` text is what a
//! student reads in the report, so keep the wording actionable.

use thiserror::Error;

/// Structural resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Two role-requiring fields share a signature, so no role can be matched unambiguously.
    #[error(
        "Make sure model `{model}` declares no fields beyond those described in the assignment. \
         Check that every field of the model has the correct type."
    )]
    AmbiguousModel { model: String },

    /// No field carries the signature a role expects.
    #[error("In model `{model}` create a field of type `{expected_kind}` that {description}.")]
    UnresolvedRole {
        model: String,
        role: String,
        expected_kind: String,
        description: String,
    },
}

/// Adapter access errors
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Model `{model}` has no attribute `{name}`")]
    UnknownAttribute { model: String, name: String },

    #[error("Instance of `{model}` has not been saved (no `id`)")]
    NotPersisted { model: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Schema loading and validation errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse schema: {0}")]
    Parse(String),

    #[error("Model `{0}` is declared more than once")]
    DuplicateModel(String),

    #[error("Model `{model}` declares field `{field}` more than once")]
    DuplicateField { model: String, field: String },

    #[error("Field `{model}.{field}` relates to unknown model `{target}`")]
    DanglingRelation {
        model: String,
        field: String,
        target: String,
    },

    #[error("Relation field `{model}.{field}` does not name a related model")]
    MissingRelationTarget { model: String, field: String },
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

/// Model lookup errors
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(
        "Make sure a comment model is declared in the models file, \
         with a `ForeignKey` field linking it to model `{post_model}`."
    )]
    CommentModelMissing { post_model: String },

    #[error("Make sure model `{0}` is declared in the models file.")]
    ModelMissing(String),
}

/// Literal attribute expectation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpectationError {
    #[error("In model `{model}` add attribute `{field}`.")]
    MissingAttribute { model: String, field: String },

    #[error("In model `{model}` set the type of attribute `{field}` to `{expected}`.")]
    WrongKind {
        model: String,
        field: String,
        expected: String,
    },

    #[error("In model `{model}` set parameter `{param}` on attribute `{field}`.")]
    MissingParam {
        model: String,
        field: String,
        param: String,
    },

    #[error(
        "In model `{model}` check that parameter `{param}` of attribute `{field}` \
         matches the assignment."
    )]
    WrongParam {
        model: String,
        field: String,
        param: String,
    },
}

/// Instance store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No `{model}` record with id {id}")]
    NotFound { model: String, id: i64 },

    #[error("Invalid id for `{model}`: {value}")]
    InvalidId { model: String, value: String },

    #[error("No free id left for `{model}`")]
    IdsExhausted { model: String },
}

/// Top-level errors surfaced by config, logging and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Unknown entity: {0} (expected post, comment or user)")]
    UnknownEntity(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        ApiError::Adapter(AdapterError::Resolve(err))
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
