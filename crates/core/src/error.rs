use thiserror::Error;

/// Errors from running a [`MemberQuery`](memberscope_api::MemberQuery).
///
/// Only name resolution can fail; the lookups themselves report a miss as
/// an empty result.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown type: {0}")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
