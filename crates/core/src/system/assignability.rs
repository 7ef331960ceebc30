//! Ancestor traversal and the default assignability relation.

use std::collections::{HashSet, VecDeque};

use memberscope_api::TypeHandle;

use super::type_system::InheritanceProvider;

/// Breadth-first walk over every ancestor of a type: base chain and
/// interfaces, transitively. Each ancestor is yielded once; the start type
/// is never yielded, even when a malformed host links it back to itself.
pub struct AncestorWalk<'a, P: ?Sized> {
    provider: &'a P,
    start: TypeHandle,
    queue: VecDeque<TypeHandle>,
    seen: HashSet<TypeHandle>,
}

impl<'a, P: InheritanceProvider + ?Sized> AncestorWalk<'a, P> {
    pub fn new(provider: &'a P, start: TypeHandle) -> Self {
        let mut walk = Self {
            provider,
            start,
            queue: VecDeque::new(),
            seen: HashSet::new(),
        };
        walk.seen.insert(start);
        walk.enqueue_parents(start);
        walk
    }

    fn enqueue_parents(&mut self, ty: TypeHandle) {
        let parents = self
            .provider
            .base_type(ty)
            .into_iter()
            .chain(self.provider.interfaces(ty));
        for parent in parents {
            if self.seen.insert(parent) {
                self.queue.push_back(parent);
            }
        }
    }
}

impl<P: InheritanceProvider + ?Sized> Iterator for AncestorWalk<'_, P> {
    type Item = TypeHandle;

    fn next(&mut self) -> Option<TypeHandle> {
        let next = self.queue.pop_front()?;
        debug_assert_ne!(next, self.start);
        self.enqueue_parents(next);
        Some(next)
    }
}

/// Walk all ancestor types of `ty` (superclasses and interfaces).
pub fn walk_ancestors<P: InheritanceProvider + ?Sized>(
    provider: &P,
    ty: TypeHandle,
) -> AncestorWalk<'_, P> {
    AncestorWalk::new(provider, ty)
}

/// Check whether `target` is `candidate` itself or one of its ancestors.
pub fn is_ancestor_or_self<P: InheritanceProvider + ?Sized>(
    provider: &P,
    target: TypeHandle,
    candidate: TypeHandle,
) -> bool {
    if target == candidate {
        return true;
    }
    walk_ancestors(provider, candidate).any(|ancestor| ancestor == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Links {
        base: HashMap<TypeHandle, TypeHandle>,
        interfaces: HashMap<TypeHandle, Vec<TypeHandle>>,
    }

    impl InheritanceProvider for Links {
        fn base_type(&self, ty: TypeHandle) -> Option<TypeHandle> {
            self.base.get(&ty).copied()
        }

        fn interfaces(&self, ty: TypeHandle) -> Vec<TypeHandle> {
            self.interfaces.get(&ty).cloned().unwrap_or_default()
        }
    }

    const OBJECT: TypeHandle = TypeHandle(0);
    const ANIMAL: TypeHandle = TypeHandle(1);
    const DOG: TypeHandle = TypeHandle(2);
    const IPET: TypeHandle = TypeHandle(3);
    const IANY: TypeHandle = TypeHandle(4);

    fn zoo() -> Links {
        let mut links = Links::default();
        links.base.insert(ANIMAL, OBJECT);
        links.base.insert(DOG, ANIMAL);
        links.interfaces.insert(DOG, vec![IPET]);
        links.interfaces.insert(IPET, vec![IANY]);
        links
    }

    #[test]
    fn test_walk_ancestors_bfs_order() {
        let links = zoo();
        let ancestors: Vec<_> = walk_ancestors(&links, DOG).collect();
        assert_eq!(ancestors, vec![ANIMAL, IPET, OBJECT, IANY]);
    }

    #[test]
    fn test_assignable_through_base_and_interfaces() {
        let links = zoo();
        assert!(is_ancestor_or_self(&links, DOG, DOG));
        assert!(is_ancestor_or_self(&links, OBJECT, DOG));
        assert!(is_ancestor_or_self(&links, IANY, DOG));
        assert!(!is_ancestor_or_self(&links, DOG, ANIMAL));
        assert!(!is_ancestor_or_self(&links, IPET, ANIMAL));
    }

    #[test]
    fn test_walk_terminates_on_cycle() {
        let mut links = Links::default();
        links.base.insert(TypeHandle(1), TypeHandle(2));
        links.base.insert(TypeHandle(2), TypeHandle(1));
        let ancestors: Vec<_> = walk_ancestors(&links, TypeHandle(1)).collect();
        assert_eq!(ancestors, vec![TypeHandle(2)]);
    }
}
