//! In-memory host type system.
//!
//! Built either programmatically through [`RegistryBuilder`] or from a
//! serialized [`TypeModel`].

use std::collections::{HashMap, HashSet};

use memberscope_api::{
    ConstructorInfo, FieldInfo, Member, MemberDecl, MethodInfo, ModelError, ModelResult,
    ParameterDecl, ParameterInfo, PropertyInfo, TypeHandle, TypeInfo, TypeKind, TypeModel,
    Visibility,
};

use crate::system::{AssignabilityProvider, InheritanceProvider, MemberProvider, TypeProvider};

#[derive(Debug, Clone)]
struct TypeEntry {
    info: TypeInfo,
    base: Option<TypeHandle>,
    interfaces: Vec<TypeHandle>,
    members: Vec<Member>,
}

/// A host type system backed by plain vectors.
///
/// Handles index into the type table, so they are only meaningful for the
/// registry that issued them. Unknown handles behave like a type with no
/// base and no members.
#[derive(Debug, Clone, Default)]
pub struct RegistryTypeSystem {
    types: Vec<TypeEntry>,
    by_name: HashMap<String, TypeHandle>,
}

impl RegistryTypeSystem {
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = TypeHandle> + '_ {
        self.types.iter().map(|e| e.info.handle)
    }

    /// Display name of a type, falling back to the raw handle.
    pub fn display_name(&self, ty: TypeHandle) -> String {
        self.entry(ty)
            .map(|e| e.info.full_name())
            .unwrap_or_else(|| ty.to_string())
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        let model: TypeModel = serde_json::from_str(json)?;
        Self::from_model(&model)
    }

    /// Resolve a [`TypeModel`] into a registry.
    ///
    /// Full names must be unique, every reference must resolve, and base
    /// chains must be acyclic. Generic parameter names are visible only to
    /// the members of the type that declares them and shadow global names.
    pub fn from_model(model: &TypeModel) -> ModelResult<Self> {
        let mut builder = RegistryBuilder::new();
        let mut declared = Vec::with_capacity(model.types.len());

        // Pass 1: allocate handles so declarations can reference each other in any order
        for decl in &model.types {
            let full_name = decl.full_name();
            if builder.by_name.contains_key(&full_name) {
                return Err(ModelError::DuplicateType(full_name));
            }
            let handle = builder.add_type(&decl.name, decl.namespace.as_deref(), decl.kind);
            let generics: HashMap<&str, TypeHandle> = decl
                .generic_parameters
                .iter()
                .map(|p| (p.as_str(), builder.add_generic_parameter(handle, p)))
                .collect();
            declared.push((decl, handle, full_name, generics));
        }

        // Pass 2: links and members
        for (decl, handle, full_name, generics) in &declared {
            let resolve = |name: &str| -> ModelResult<TypeHandle> {
                generics
                    .get(name)
                    .copied()
                    .or_else(|| builder.by_name.get(name).copied())
                    .ok_or_else(|| ModelError::UnknownType {
                        name: name.to_string(),
                        referenced_by: full_name.clone(),
                    })
            };

            let base = decl.base.as_deref().map(&resolve).transpose()?;
            let interfaces = decl
                .interfaces
                .iter()
                .map(|i| resolve(i.as_str()))
                .collect::<ModelResult<Vec<_>>>()?;
            let members = decl
                .members
                .iter()
                .map(|m| resolve_member(m, *handle, &resolve))
                .collect::<ModelResult<Vec<_>>>()?;

            let entry = &mut builder.types[handle.index()];
            entry.base = base;
            entry.interfaces = interfaces;
            entry.members = members;
        }

        let registry = builder.build();
        registry.check_acyclic()?;
        tracing::debug!("Loaded type model with {} type(s)", registry.len());
        Ok(registry)
    }

    fn check_acyclic(&self) -> ModelResult<()> {
        for entry in &self.types {
            let mut seen = HashSet::from([entry.info.handle]);
            let mut current = entry.base;
            while let Some(ty) = current {
                if !seen.insert(ty) {
                    return Err(ModelError::InheritanceCycle(entry.info.full_name()));
                }
                current = self.entry(ty).and_then(|e| e.base);
            }
        }
        Ok(())
    }

    fn entry(&self, ty: TypeHandle) -> Option<&TypeEntry> {
        self.types.get(ty.index())
    }
}

fn resolve_member<F>(decl: &MemberDecl, owner: TypeHandle, resolve: &F) -> ModelResult<Member>
where
    F: Fn(&str) -> ModelResult<TypeHandle>,
{
    let params = |params: &[ParameterDecl]| -> ModelResult<Vec<ParameterInfo>> {
        params
            .iter()
            .map(|p| {
                Ok(ParameterInfo {
                    name: p.name.clone(),
                    parameter_type: resolve(p.parameter_type.as_str())?,
                })
            })
            .collect()
    };

    let member = match decl {
        MemberDecl::Field {
            name,
            field_type,
            visibility,
            is_static,
        } => Member::Field(FieldInfo {
            name: name.clone(),
            declaring_type: owner,
            field_type: resolve(field_type.as_str())?,
            visibility: *visibility,
            is_static: *is_static,
        }),
        MemberDecl::Method {
            name,
            returns,
            parameters,
            visibility,
            is_static,
        } => Member::Method(MethodInfo {
            name: name.clone(),
            declaring_type: owner,
            return_type: returns.as_deref().map(resolve).transpose()?,
            parameters: params(parameters)?,
            visibility: *visibility,
            is_static: *is_static,
        }),
        MemberDecl::Constructor {
            parameters,
            visibility,
        } => Member::Constructor(ConstructorInfo {
            declaring_type: owner,
            parameters: params(parameters)?,
            visibility: *visibility,
        }),
        MemberDecl::Property {
            name,
            property_type,
            visibility,
            can_read,
            can_write,
        } => Member::Property(PropertyInfo {
            name: name.clone(),
            declaring_type: owner,
            property_type: resolve(property_type.as_str())?,
            visibility: *visibility,
            can_read: *can_read,
            can_write: *can_write,
        }),
    };
    Ok(member)
}

impl TypeProvider for RegistryTypeSystem {
    fn type_info(&self, ty: TypeHandle) -> Option<TypeInfo> {
        self.entry(ty).map(|e| e.info.clone())
    }

    fn find_type(&self, full_name: &str) -> Option<TypeHandle> {
        self.by_name.get(full_name).copied()
    }
}

impl InheritanceProvider for RegistryTypeSystem {
    fn base_type(&self, ty: TypeHandle) -> Option<TypeHandle> {
        self.entry(ty).and_then(|e| e.base)
    }

    fn interfaces(&self, ty: TypeHandle) -> Vec<TypeHandle> {
        self.entry(ty)
            .map(|e| e.interfaces.clone())
            .unwrap_or_default()
    }
}

impl MemberProvider for RegistryTypeSystem {
    fn declared_members(&self, ty: TypeHandle) -> Vec<Member> {
        self.entry(ty).map(|e| e.members.clone()).unwrap_or_default()
    }
}

impl AssignabilityProvider for RegistryTypeSystem {}

/// Fluent builder for [`RegistryTypeSystem`].
///
/// Every `add_*` type method returns the new handle; member methods take
/// the owning type and return the builder for chaining.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: Vec<TypeEntry>,
    by_name: HashMap<String, TypeHandle>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. When the full name is already taken the new type
    /// is still created but only the first stays reachable through `find_type`.
    pub fn add_type(&mut self, name: &str, namespace: Option<&str>, kind: TypeKind) -> TypeHandle {
        let handle = TypeHandle(self.types.len() as u32);
        let info = TypeInfo {
            handle,
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            kind,
            generic_parameters: vec![],
        };
        if kind != TypeKind::GenericParameter {
            self.by_name.entry(info.full_name()).or_insert(handle);
        }
        self.types.push(TypeEntry {
            info,
            base: None,
            interfaces: vec![],
            members: vec![],
        });
        handle
    }

    pub fn add_class(&mut self, name: &str, base: Option<TypeHandle>) -> TypeHandle {
        let handle = self.add_type(name, None, TypeKind::Class);
        self.set_base(handle, base);
        handle
    }

    pub fn add_interface(&mut self, name: &str) -> TypeHandle {
        self.add_type(name, None, TypeKind::Interface)
    }

    pub fn add_primitive(&mut self, name: &str) -> TypeHandle {
        self.add_type(name, None, TypeKind::Primitive)
    }

    /// Declare a generic type parameter on `owner`.
    pub fn add_generic_parameter(&mut self, owner: TypeHandle, name: &str) -> TypeHandle {
        let owner_name = self.types[owner.index()].info.full_name();
        let handle = self.add_type(name, Some(&owner_name), TypeKind::GenericParameter);
        self.types[owner.index()]
            .info
            .generic_parameters
            .push(handle);
        handle
    }

    pub fn set_base(&mut self, ty: TypeHandle, base: Option<TypeHandle>) -> &mut Self {
        self.types[ty.index()].base = base;
        self
    }

    pub fn implements(&mut self, ty: TypeHandle, interface: TypeHandle) -> &mut Self {
        self.types[ty.index()].interfaces.push(interface);
        self
    }

    /// Append a fully described member. Its declaring type is set to `owner`.
    pub fn add_member(&mut self, owner: TypeHandle, member: impl Into<Member>) -> &mut Self {
        let mut member = member.into();
        match &mut member {
            Member::Field(f) => f.declaring_type = owner,
            Member::Method(m) => m.declaring_type = owner,
            Member::Constructor(c) => c.declaring_type = owner,
            Member::Property(p) => p.declaring_type = owner,
        }
        self.types[owner.index()].members.push(member);
        self
    }

    pub fn add_field(
        &mut self,
        owner: TypeHandle,
        name: &str,
        field_type: TypeHandle,
        visibility: Visibility,
        is_static: bool,
    ) -> &mut Self {
        self.add_member(
            owner,
            FieldInfo {
                name: name.to_string(),
                declaring_type: owner,
                field_type,
                visibility,
                is_static,
            },
        )
    }

    /// Add a method returning nothing; parameters are named `arg0`, `arg1`, ...
    pub fn add_method(
        &mut self,
        owner: TypeHandle,
        name: &str,
        params: &[TypeHandle],
        visibility: Visibility,
        is_static: bool,
    ) -> &mut Self {
        self.add_member(
            owner,
            MethodInfo {
                name: name.to_string(),
                declaring_type: owner,
                return_type: None,
                parameters: synthetic_parameters(params),
                visibility,
                is_static,
            },
        )
    }

    pub fn add_constructor(
        &mut self,
        owner: TypeHandle,
        params: &[TypeHandle],
        visibility: Visibility,
    ) -> &mut Self {
        self.add_member(
            owner,
            ConstructorInfo {
                declaring_type: owner,
                parameters: synthetic_parameters(params),
                visibility,
            },
        )
    }

    /// Add a read-write property.
    pub fn add_property(
        &mut self,
        owner: TypeHandle,
        name: &str,
        property_type: TypeHandle,
        visibility: Visibility,
    ) -> &mut Self {
        self.add_member(
            owner,
            PropertyInfo {
                name: name.to_string(),
                declaring_type: owner,
                property_type,
                visibility,
                can_read: true,
                can_write: true,
            },
        )
    }

    pub fn build(self) -> RegistryTypeSystem {
        RegistryTypeSystem {
            types: self.types,
            by_name: self.by_name,
        }
    }
}

fn synthetic_parameters(params: &[TypeHandle]) -> Vec<ParameterInfo> {
    params
        .iter()
        .enumerate()
        .map(|(i, &ty)| ParameterInfo {
            name: format!("arg{}", i),
            parameter_type: ty,
        })
        .collect()
}
