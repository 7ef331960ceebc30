//! Hierarchy walker.
//!
//! Produces the members of a type and, optionally, of every type on its
//! base chain. Ancestors come first: the root's members open the sequence
//! and the requested type's own members close it. Nothing is deduplicated,
//! so a member shadowed in a derived type shows up once per declaration.

use std::collections::HashSet;

use memberscope_api::{Member, Scope, TypeHandle};

use crate::system::{InheritanceProvider, MemberProvider};

/// Collect the types a walk visits, root ancestor first, `ty` last.
///
/// Only the base chain is followed; interfaces contribute no members.
pub fn ancestor_chain<P: InheritanceProvider + ?Sized>(
    provider: &P,
    ty: TypeHandle,
    scope: Scope,
) -> Vec<TypeHandle> {
    let mut chain = vec![ty];
    if !scope.includes_ancestors() {
        return chain;
    }

    let mut seen = HashSet::from([ty]);
    let mut current = ty;
    while let Some(base) = provider.base_type(current) {
        if !seen.insert(base) {
            tracing::warn!("Cyclic base chain at {} while walking {}", base, ty);
            break;
        }
        chain.push(base);
        current = base;
    }

    chain.reverse();
    chain
}

/// A restartable walk over the members of a type hierarchy.
///
/// The type chain is resolved up front; member lists are fetched from the
/// host lazily, one type at a time, each time the walk is iterated.
pub struct HierarchyWalk<'a, T: ?Sized> {
    provider: &'a T,
    chain: Vec<TypeHandle>,
}

impl<T: ?Sized> Clone for HierarchyWalk<'_, T> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider,
            chain: self.chain.clone(),
        }
    }
}

impl<'a, T: InheritanceProvider + MemberProvider + ?Sized> HierarchyWalk<'a, T> {
    pub fn new(provider: &'a T, ty: TypeHandle, scope: Scope) -> Self {
        let chain = ancestor_chain(provider, ty, scope);
        tracing::trace!("Walking {} over {} type(s)", ty, chain.len());
        Self { provider, chain }
    }

    /// Types visited by this walk, root ancestor first.
    pub fn chain(&self) -> &[TypeHandle] {
        &self.chain
    }

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.chain
            .iter()
            .flat_map(move |&ty| self.provider.declared_members(ty))
    }

    pub fn into_members(self) -> impl Iterator<Item = Member> + 'a {
        let provider = self.provider;
        self.chain
            .into_iter()
            .flat_map(move |ty| provider.declared_members(ty))
    }
}

/// Walk `ty`'s members, including those of its ancestors when asked to.
pub fn walk<T: InheritanceProvider + MemberProvider + ?Sized>(
    provider: &T,
    ty: TypeHandle,
    include_ancestors: bool,
) -> HierarchyWalk<'_, T> {
    let scope = if include_ancestors {
        Scope::IncludeInherited
    } else {
        Scope::DeclaredOnly
    };
    HierarchyWalk::new(provider, ty, scope)
}
