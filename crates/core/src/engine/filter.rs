//! Flag filter.
//!
//! Narrows a walked member sequence by staticness and visibility. The
//! filter only removes; surviving members keep their walk order.

use memberscope_api::{Member, SearchFlags, TypeHandle};

use super::walker::HierarchyWalk;
use crate::system::{InheritanceProvider, MemberProvider};

pub fn filter_members<I>(members: I, flags: SearchFlags) -> impl Iterator<Item = Member>
where
    I: IntoIterator<Item = Member>,
{
    members.into_iter().filter(move |m| flags.admits(m))
}

/// Walk `ty` with the scope implied by `flags`, then apply the flag filter.
pub fn search<'a, T: InheritanceProvider + MemberProvider + ?Sized>(
    provider: &'a T,
    ty: TypeHandle,
    flags: SearchFlags,
) -> impl Iterator<Item = Member> + 'a {
    let walk = HierarchyWalk::new(provider, ty, flags.scope);
    filter_members(walk.into_members(), flags)
}
