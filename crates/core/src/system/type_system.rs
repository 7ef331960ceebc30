//! Capability traits a host must provide.
//!
//! The engine never talks to a concrete runtime. Everything it knows about
//! types comes through these traits, so a host only has to expose the
//! declared members of a single type plus a base-type link.

use memberscope_api::{Member, TypeHandle, TypeInfo};

use super::assignability;

/// Provides type metadata by handle or name.
pub trait TypeProvider: Send + Sync {
    /// Returns `None` for handles the host does not know.
    fn type_info(&self, ty: TypeHandle) -> Option<TypeInfo>;

    /// Look a type up by its namespace-qualified name.
    fn find_type(&self, full_name: &str) -> Option<TypeHandle>;
}

/// Provides inheritance relationship information.
pub trait InheritanceProvider: Send + Sync {
    /// Direct base type. `None` for root types and interfaces.
    fn base_type(&self, ty: TypeHandle) -> Option<TypeHandle>;

    /// Interfaces directly implemented by a type.
    fn interfaces(&self, ty: TypeHandle) -> Vec<TypeHandle>;

    /// Walk all ancestor types (base chain and interfaces).
    ///
    /// The iterator yields types in BFS order, each once, and stops on cycles.
    fn walk_ancestors(&self, ty: TypeHandle) -> Box<dyn Iterator<Item = TypeHandle> + '_> {
        Box::new(assignability::walk_ancestors(self, ty))
    }
}

/// Provides the members declared by a single type.
pub trait MemberProvider: Send + Sync {
    /// Members declared directly on `ty`, in declaration order.
    ///
    /// Does NOT include inherited members.
    fn declared_members(&self, ty: TypeHandle) -> Vec<Member>;
}

/// Type-compatibility relation used by signature matching.
///
/// The default treats `target` as assignable from `candidate` when they are
/// the same type or `target` is one of `candidate`'s ancestors (base chain
/// or interfaces, transitively). Hosts with richer rules override it.
pub trait AssignabilityProvider: InheritanceProvider {
    fn is_assignable_from(&self, target: TypeHandle, candidate: TypeHandle) -> bool {
        assignability::is_ancestor_or_self(self, target, candidate)
    }
}

/// The combined host interface.
pub trait HostTypeSystem:
    TypeProvider + InheritanceProvider + MemberProvider + AssignabilityProvider
{
}

// Blanket implementation: any type implementing all four traits gets HostTypeSystem
impl<T: TypeProvider + InheritanceProvider + MemberProvider + AssignabilityProvider> HostTypeSystem
    for T
{
}
