//! Serializable description of a host type system.
//!
//! Types reference each other by namespace-qualified name; the registry
//! resolves those names into [`TypeHandle`](super::TypeHandle)s when loading.

use super::member::Visibility;
use super::types::TypeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct TypeModel {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
    /// Full name of the base type, if any.
    #[serde(default)]
    pub base: Option<String>,
    /// Full names of directly implemented interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Names of generic type parameters, e.g. `["T"]`.
    #[serde(default)]
    pub generic_parameters: Vec<String>,
    /// Declared members, in declaration order.
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

impl TypeDecl {
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberDecl {
    Field {
        name: String,
        #[serde(rename = "type")]
        field_type: String,
        #[serde(default)]
        visibility: Visibility,
        #[serde(default)]
        is_static: bool,
    },
    Method {
        name: String,
        #[serde(default)]
        returns: Option<String>,
        #[serde(default)]
        parameters: Vec<ParameterDecl>,
        #[serde(default)]
        visibility: Visibility,
        #[serde(default)]
        is_static: bool,
    },
    Constructor {
        #[serde(default)]
        parameters: Vec<ParameterDecl>,
        #[serde(default)]
        visibility: Visibility,
    },
    Property {
        name: String,
        #[serde(rename = "type")]
        property_type: String,
        #[serde(default)]
        visibility: Visibility,
        #[serde(default = "default_true")]
        can_read: bool,
        #[serde(default = "default_true")]
        can_write: bool,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: String,
}

fn default_true() -> bool {
    true
}
