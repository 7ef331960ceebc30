//! Signature matcher.
//!
//! Two modes: by name (ordinal or ordinal ignore-case) and by parameter
//! signature. In both, candidates are taken in walk order and the first
//! match wins. There is no specificity ranking and no ambiguity error.

use memberscope_api::{
    ConstructorInfo, FieldInfo, Member, MethodInfo, NameComparison, ParameterInfo, PropertyInfo,
    TypeHandle,
};

use crate::system::AssignabilityProvider;

/// Anything that can be matched by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Member {
    fn name(&self) -> &str {
        Member::name(self)
    }
}

impl Named for FieldInfo {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for MethodInfo {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for PropertyInfo {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Anything that carries an ordered parameter list.
pub trait Signature {
    fn parameters(&self) -> &[ParameterInfo];
}

impl Signature for MethodInfo {
    fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }
}

impl Signature for ConstructorInfo {
    fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }
}

/// Keep the candidates whose name matches, in their original order.
pub fn select_named<I, M>(
    candidates: I,
    name: &str,
    comparison: NameComparison,
) -> impl Iterator<Item = M>
where
    I: IntoIterator<Item = M>,
    M: Named,
{
    candidates
        .into_iter()
        .filter(move |m| comparison.matches(m.name(), name))
}

pub fn first_named<I, M>(candidates: I, name: &str, comparison: NameComparison) -> Option<M>
where
    I: IntoIterator<Item = M>,
    M: Named,
{
    candidates
        .into_iter()
        .find(|m| comparison.matches(m.name(), name))
}

/// Exact arity, then per-position assignability from argument to parameter.
pub fn matches_signature<A: AssignabilityProvider + ?Sized>(
    provider: &A,
    params: &[ParameterInfo],
    arg_types: &[TypeHandle],
) -> bool {
    if params.len() != arg_types.len() {
        return false;
    }

    params
        .iter()
        .zip(arg_types.iter())
        .all(|(p, &a)| provider.is_assignable_from(p.parameter_type, a))
}

/// First candidate, in order, whose signature accepts `arg_types`.
pub fn first_by_signature<A, I, S>(
    provider: &A,
    candidates: I,
    arg_types: &[TypeHandle],
) -> Option<S>
where
    A: AssignabilityProvider + ?Sized,
    I: IntoIterator<Item = S>,
    S: Signature,
{
    let found = candidates
        .into_iter()
        .find(|cand| matches_signature(provider, cand.parameters(), arg_types));
    if found.is_none() {
        tracing::trace!("No candidate accepts {} argument(s)", arg_types.len());
    }
    found
}
