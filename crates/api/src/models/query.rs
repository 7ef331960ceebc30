use super::flags::FlagName;
use super::member::{MemberKind, Visibility};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// JSON query interface over a loaded type model.
///
/// Types are named by their namespace-qualified name. When `flags` is
/// omitted on a single-result lookup, the default lookup flags
/// (public, static, instance) apply; on bulk lookups, no filtering applies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MemberQuery {
    /// Raw hierarchy walk, no flag filtering.
    Walk {
        type_name: String,
        #[serde(default)]
        declared_only: bool,
    },
    Members {
        type_name: String,
        /// Optional: only members with this name.
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        flags: Vec<FlagName>,
    },
    Methods {
        type_name: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        flags: Vec<FlagName>,
    },
    /// First method by name, or by signature when `args` is given.
    Method {
        type_name: String,
        name: Option<String>,
        /// Argument type names. Omit for a pure name lookup.
        #[serde(default)]
        args: Option<Vec<String>>,
        #[serde(default)]
        flags: Option<Vec<FlagName>>,
    },
    Fields {
        type_name: String,
        #[serde(default)]
        flags: Vec<FlagName>,
    },
    Field {
        type_name: String,
        name: String,
        #[serde(default)]
        flags: Option<Vec<FlagName>>,
    },
    Properties {
        type_name: String,
        #[serde(default)]
        flags: Vec<FlagName>,
    },
    Property {
        type_name: String,
        name: String,
        #[serde(default)]
        flags: Option<Vec<FlagName>>,
    },
    Constructors {
        type_name: String,
    },
    Constructor {
        type_name: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Interfaces {
        type_name: String,
    },
    GenericArguments {
        type_name: String,
    },
    IsAssignableFrom {
        target: String,
        from: String,
    },
    IsInstanceOfType {
        type_name: String,
        /// Runtime type of the instance; `null` for a null instance.
        #[serde(default)]
        instance: Option<String>,
    },
}

/// Printable description of a member with type names resolved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct MemberView {
    pub kind: MemberKind,
    pub name: String,
    pub declaring_type: String,
    /// e.g. `M(System.Int32, System.String) -> System.Void`, `count: System.Int32`
    pub signature: String,
    pub visibility: Visibility,
    /// `None` for kinds without a staticness bit.
    pub is_static: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum QueryResult {
    Members { members: Vec<MemberView> },
    Types { types: Vec<String> },
    Bool { value: bool },
}
