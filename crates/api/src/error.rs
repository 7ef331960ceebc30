/// Errors raised while building a host type system from a [`TypeModel`](crate::TypeModel).
///
/// Lookups themselves never fail; an absent member is an empty result.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Duplicate type: {0}")]
    DuplicateType(String),
    #[error("Unknown type '{name}' referenced by {referenced_by}")]
    UnknownType { name: String, referenced_by: String },
    #[error("Inheritance cycle through {0}")]
    InheritanceCycle(String),
    #[error("Invalid model: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
