//! Search flags controlling member lookup.
//!
//! [`BindingFlags`] is the packed bitset used by callers ported from a
//! runtime that speaks in bitmasks. [`SearchFlags`] is the form the engine
//! evaluates: one value per axis, each axis an independent AND-filter.

use super::member::{Member, Visibility};
use bitflags::bitflags;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Packed search flags. Bit values match the classic reflection numbering.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct BindingFlags: u32 {
        const IGNORE_CASE = 1;
        const DECLARED_ONLY = 2;
        const INSTANCE = 4;
        const STATIC = 8;
        const PUBLIC = 16;
        const NON_PUBLIC = 32;
        /// Accepted for compatibility; lookup behaves the same with or without it.
        const FLATTEN_HIERARCHY = 64;
    }
}

/// Whether inherited members take part in a lookup.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    DeclaredOnly,
    #[default]
    IncludeInherited,
}

impl Scope {
    pub fn includes_ancestors(self) -> bool {
        matches!(self, Scope::IncludeInherited)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NameComparison {
    #[default]
    Ordinal,
    OrdinalIgnoreCase,
}

impl NameComparison {
    pub fn matches(self, candidate: &str, requested: &str) -> bool {
        match self {
            NameComparison::Ordinal => candidate == requested,
            NameComparison::OrdinalIgnoreCase => eq_ordinal_ignore_case(candidate, requested),
        }
    }
}

fn eq_ordinal_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().map(simple_uppercase).eq(b.chars().map(simple_uppercase))
}

// One-to-one mapping only; characters that expand (e.g. 'ß' -> "SS") compare as themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Staticness axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// Both or neither of instance/static requested.
    #[default]
    Any,
    InstanceOnly,
    StaticOnly,
}

impl Membership {
    /// Kinds without a staticness bit always pass.
    pub fn admits(self, staticness: Option<bool>) -> bool {
        match (self, staticness) {
            (Membership::Any, _) | (_, None) => true,
            (Membership::InstanceOnly, Some(is_static)) => !is_static,
            (Membership::StaticOnly, Some(is_static)) => is_static,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFilter {
    /// Both or neither of public/non-public requested.
    #[default]
    Any,
    PublicOnly,
    NonPublicOnly,
}

impl VisibilityFilter {
    pub fn admits(self, visibility: Visibility) -> bool {
        match self {
            VisibilityFilter::Any => true,
            VisibilityFilter::PublicOnly => visibility.is_public(),
            VisibilityFilter::NonPublicOnly => !visibility.is_public(),
        }
    }
}

/// Search flags split per axis.
///
/// The default value searches everything: inherited members, ordinal
/// names, no staticness or visibility filtering.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
pub struct SearchFlags {
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub comparison: NameComparison,
    #[serde(default)]
    pub membership: Membership,
    #[serde(default)]
    pub visibility: VisibilityFilter,
}

impl SearchFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags used by lookups that take no explicit flags: `Public | Static | Instance`.
    pub fn default_lookup() -> Self {
        Self::from(BindingFlags::PUBLIC | BindingFlags::STATIC | BindingFlags::INSTANCE)
    }

    pub fn declared_only(mut self) -> Self {
        self.scope = Scope::DeclaredOnly;
        self
    }

    pub fn ignore_case(mut self) -> Self {
        self.comparison = NameComparison::OrdinalIgnoreCase;
        self
    }

    pub fn instance_only(mut self) -> Self {
        self.membership = Membership::InstanceOnly;
        self
    }

    pub fn static_only(mut self) -> Self {
        self.membership = Membership::StaticOnly;
        self
    }

    pub fn public_only(mut self) -> Self {
        self.visibility = VisibilityFilter::PublicOnly;
        self
    }

    pub fn non_public_only(mut self) -> Self {
        self.visibility = VisibilityFilter::NonPublicOnly;
        self
    }

    /// Staticness and visibility axes. Scope is applied by the walk and
    /// name comparison by the matcher.
    pub fn admits(&self, member: &Member) -> bool {
        self.membership.admits(member.staticness()) && self.visibility.admits(member.visibility())
    }

    pub fn matches_name(&self, candidate: &str, requested: &str) -> bool {
        self.comparison.matches(candidate, requested)
    }
}

impl From<BindingFlags> for SearchFlags {
    fn from(flags: BindingFlags) -> Self {
        let scope = if flags.contains(BindingFlags::DECLARED_ONLY) {
            Scope::DeclaredOnly
        } else {
            Scope::IncludeInherited
        };
        let comparison = if flags.contains(BindingFlags::IGNORE_CASE) {
            NameComparison::OrdinalIgnoreCase
        } else {
            NameComparison::Ordinal
        };
        let membership = match (
            flags.contains(BindingFlags::INSTANCE),
            flags.contains(BindingFlags::STATIC),
        ) {
            (true, false) => Membership::InstanceOnly,
            (false, true) => Membership::StaticOnly,
            _ => Membership::Any,
        };
        let visibility = match (
            flags.contains(BindingFlags::PUBLIC),
            flags.contains(BindingFlags::NON_PUBLIC),
        ) {
            (true, false) => VisibilityFilter::PublicOnly,
            (false, true) => VisibilityFilter::NonPublicOnly,
            _ => VisibilityFilter::Any,
        };

        Self {
            scope,
            comparison,
            membership,
            visibility,
        }
    }
}

impl From<SearchFlags> for BindingFlags {
    fn from(flags: SearchFlags) -> Self {
        let mut bits = BindingFlags::empty();
        if flags.scope == Scope::DeclaredOnly {
            bits |= BindingFlags::DECLARED_ONLY;
        }
        if flags.comparison == NameComparison::OrdinalIgnoreCase {
            bits |= BindingFlags::IGNORE_CASE;
        }
        match flags.membership {
            Membership::InstanceOnly => bits |= BindingFlags::INSTANCE,
            Membership::StaticOnly => bits |= BindingFlags::STATIC,
            Membership::Any => {}
        }
        match flags.visibility {
            VisibilityFilter::PublicOnly => bits |= BindingFlags::PUBLIC,
            VisibilityFilter::NonPublicOnly => bits |= BindingFlags::NON_PUBLIC,
            VisibilityFilter::Any => {}
        }
        bits
    }
}

/// A single flag name, as written on the command line or in JSON queries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlagName {
    IgnoreCase,
    DeclaredOnly,
    Instance,
    Static,
    Public,
    NonPublic,
    FlattenHierarchy,
}

impl FlagName {
    pub fn bits(self) -> BindingFlags {
        match self {
            FlagName::IgnoreCase => BindingFlags::IGNORE_CASE,
            FlagName::DeclaredOnly => BindingFlags::DECLARED_ONLY,
            FlagName::Instance => BindingFlags::INSTANCE,
            FlagName::Static => BindingFlags::STATIC,
            FlagName::Public => BindingFlags::PUBLIC,
            FlagName::NonPublic => BindingFlags::NON_PUBLIC,
            FlagName::FlattenHierarchy => BindingFlags::FLATTEN_HIERARCHY,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "ignorecase" => Some(FlagName::IgnoreCase),
            "declaredonly" => Some(FlagName::DeclaredOnly),
            "instance" => Some(FlagName::Instance),
            "static" => Some(FlagName::Static),
            "public" => Some(FlagName::Public),
            "nonpublic" => Some(FlagName::NonPublic),
            "flattenhierarchy" => Some(FlagName::FlattenHierarchy),
            _ => None,
        }
    }
}

impl FromIterator<FlagName> for BindingFlags {
    fn from_iter<I: IntoIterator<Item = FlagName>>(iter: I) -> Self {
        iter.into_iter()
            .fold(BindingFlags::empty(), |acc, f| acc | f.bits())
    }
}
