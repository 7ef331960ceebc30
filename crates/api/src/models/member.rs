use super::types::TypeHandle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    /// Anything that is not public: private, protected, internal.
    #[default]
    NonPublic,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Kind of member
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
    Property,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
            MemberKind::Constructor => "constructor",
            MemberKind::Property => "property",
        };
        f.write_str(s)
    }
}

/// Information about a method or constructor parameter
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Parameter name (may be synthetic like "arg0")
    pub name: String,
    pub parameter_type: TypeHandle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub declaring_type: TypeHandle,
    pub field_type: TypeHandle,
    pub visibility: Visibility,
    pub is_static: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub declaring_type: TypeHandle,
    /// `None` for methods returning nothing.
    pub return_type: Option<TypeHandle>,
    pub parameters: Vec<ParameterInfo>,
    pub visibility: Visibility,
    pub is_static: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    pub declaring_type: TypeHandle,
    pub parameters: Vec<ParameterInfo>,
    pub visibility: Visibility,
}

impl ConstructorInfo {
    pub const NAME: &'static str = ".ctor";
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: String,
    pub declaring_type: TypeHandle,
    pub property_type: TypeHandle,
    pub visibility: Visibility,
    pub can_read: bool,
    pub can_write: bool,
}

/// A member declared by a type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Field(FieldInfo),
    Method(MethodInfo),
    Constructor(ConstructorInfo),
    Property(PropertyInfo),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Field(_) => MemberKind::Field,
            Member::Method(_) => MemberKind::Method,
            Member::Constructor(_) => MemberKind::Constructor,
            Member::Property(_) => MemberKind::Property,
        }
    }

    /// Constructors all share the name `.ctor`.
    pub fn name(&self) -> &str {
        match self {
            Member::Field(f) => &f.name,
            Member::Method(m) => &m.name,
            Member::Constructor(_) => ConstructorInfo::NAME,
            Member::Property(p) => &p.name,
        }
    }

    pub fn declaring_type(&self) -> TypeHandle {
        match self {
            Member::Field(f) => f.declaring_type,
            Member::Method(m) => m.declaring_type,
            Member::Constructor(c) => c.declaring_type,
            Member::Property(p) => p.declaring_type,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Member::Field(f) => f.visibility,
            Member::Method(m) => m.visibility,
            Member::Constructor(c) => c.visibility,
            Member::Property(p) => p.visibility,
        }
    }

    /// `None` for kinds that carry no staticness bit (constructors, properties).
    pub fn staticness(&self) -> Option<bool> {
        match self {
            Member::Field(f) => Some(f.is_static),
            Member::Method(m) => Some(m.is_static),
            Member::Constructor(_) | Member::Property(_) => None,
        }
    }

    /// `None` for fields and properties.
    pub fn parameters(&self) -> Option<&[ParameterInfo]> {
        match self {
            Member::Method(m) => Some(&m.parameters),
            Member::Constructor(c) => Some(&c.parameters),
            Member::Field(_) | Member::Property(_) => None,
        }
    }

    pub fn into_field(self) -> Option<FieldInfo> {
        match self {
            Member::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn into_method(self) -> Option<MethodInfo> {
        match self {
            Member::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_constructor(self) -> Option<ConstructorInfo> {
        match self {
            Member::Constructor(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_property(self) -> Option<PropertyInfo> {
        match self {
            Member::Property(p) => Some(p),
            _ => None,
        }
    }
}

impl From<FieldInfo> for Member {
    fn from(f: FieldInfo) -> Self {
        Member::Field(f)
    }
}

impl From<MethodInfo> for Member {
    fn from(m: MethodInfo) -> Self {
        Member::Method(m)
    }
}

impl From<ConstructorInfo> for Member {
    fn from(c: ConstructorInfo) -> Self {
        Member::Constructor(c)
    }
}

impl From<PropertyInfo> for Member {
    fn from(p: PropertyInfo) -> Self {
        Member::Property(p)
    }
}
