pub mod assignability;
pub mod type_system;

pub use assignability::{AncestorWalk, is_ancestor_or_self, walk_ancestors};
pub use type_system::{
    AssignabilityProvider, HostTypeSystem, InheritanceProvider, MemberProvider, TypeProvider,
};
