//! Member-resolution engine: walk, filter, match.

pub mod filter;
pub mod matcher;
pub mod walker;

pub use filter::{filter_members, search};
pub use matcher::{
    Named, Signature, first_by_signature, first_named, matches_signature, select_named,
};
pub use walker::{HierarchyWalk, ancestor_chain, walk};
