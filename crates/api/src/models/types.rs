use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a type owned by the host.
///
/// Identity is by handle: two distinct types may share a name
/// (in different namespaces) and still compare unequal.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct TypeHandle(pub u32);

impl TypeHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of type
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Struct,
    Enum,
    Primitive,
    /// A generic type parameter such as `T`.
    GenericParameter,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Primitive => "primitive",
            TypeKind::GenericParameter => "generic_parameter",
        };
        f.write_str(s)
    }
}

/// Information about a type as reported by the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub handle: TypeHandle,
    /// Simple name, e.g. "List"
    pub name: String,
    /// Enclosing namespace, if any, e.g. "System.Collections"
    pub namespace: Option<String>,
    pub kind: TypeKind,
    /// Generic type parameters declared by this type, in declaration order.
    pub generic_parameters: Vec<TypeHandle>,
}

impl TypeInfo {
    /// Namespace-qualified name, e.g. "System.Collections.List".
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }
}
