//! Mock host for exercising the capability traits directly.

#![allow(dead_code)]

use std::collections::HashMap;

use memberscope_api::{
    FieldInfo, Member, MethodInfo, ParameterInfo, TypeHandle, TypeInfo, TypeKind, Visibility,
};
use memberscope_core::{AssignabilityProvider, InheritanceProvider, MemberProvider, TypeProvider};

/// A mock type system for testing.
///
/// Types are addressed by name in the fluent API and by handle through the
/// traits. Types listed in `accepts_anything` are assignable from every
/// type, standing in for a host with a richer compatibility relation.
#[derive(Default)]
pub struct MockTypeSystem {
    names: HashMap<String, TypeHandle>,
    infos: Vec<TypeInfo>,
    superclass: HashMap<TypeHandle, TypeHandle>,
    members: HashMap<TypeHandle, Vec<Member>>,
    accepts_anything: Vec<TypeHandle>,
}

impl MockTypeSystem {
    /// Create a new empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self, name: &str) -> TypeHandle {
        self.names[name]
    }

    /// Add a class to the mock.
    pub fn add_class(mut self, name: &str, super_class: Option<&str>) -> Self {
        let handle = TypeHandle(self.infos.len() as u32);
        self.infos.push(TypeInfo {
            handle,
            name: name.to_string(),
            namespace: None,
            kind: TypeKind::Class,
            generic_parameters: vec![],
        });
        self.names.insert(name.to_string(), handle);
        if let Some(sup) = super_class {
            let sup = self.handle(sup);
            self.superclass.insert(handle, sup);
        }
        self
    }

    /// Mark a type as assignable from anything.
    pub fn accepting_anything(mut self, name: &str) -> Self {
        let handle = self.handle(name);
        self.accepts_anything.push(handle);
        self
    }

    /// Add a public instance method to a class.
    pub fn add_method(mut self, class: &str, name: &str, params: &[&str]) -> Self {
        let owner = self.handle(class);
        let parameters = params
            .iter()
            .enumerate()
            .map(|(i, p)| ParameterInfo {
                name: format!("p{}", i),
                parameter_type: self.handle(p),
            })
            .collect();
        self.members.entry(owner).or_default().push(Member::Method(MethodInfo {
            name: name.to_string(),
            declaring_type: owner,
            return_type: None,
            parameters,
            visibility: Visibility::Public,
            is_static: false,
        }));
        self
    }

    /// Add a field to a class.
    pub fn add_field(
        mut self,
        class: &str,
        name: &str,
        field_type: &str,
        visibility: Visibility,
        is_static: bool,
    ) -> Self {
        let owner = self.handle(class);
        let field_type = self.handle(field_type);
        self.members.entry(owner).or_default().push(Member::Field(FieldInfo {
            name: name.to_string(),
            declaring_type: owner,
            field_type,
            visibility,
            is_static,
        }));
        self
    }
}

impl TypeProvider for MockTypeSystem {
    fn type_info(&self, ty: TypeHandle) -> Option<TypeInfo> {
        self.infos.get(ty.index()).cloned()
    }

    fn find_type(&self, full_name: &str) -> Option<TypeHandle> {
        self.names.get(full_name).copied()
    }
}

impl InheritanceProvider for MockTypeSystem {
    fn base_type(&self, ty: TypeHandle) -> Option<TypeHandle> {
        self.superclass.get(&ty).copied()
    }

    fn interfaces(&self, _ty: TypeHandle) -> Vec<TypeHandle> {
        vec![]
    }
}

impl MemberProvider for MockTypeSystem {
    fn declared_members(&self, ty: TypeHandle) -> Vec<Member> {
        self.members.get(&ty).cloned().unwrap_or_default()
    }
}

impl AssignabilityProvider for MockTypeSystem {
    fn is_assignable_from(&self, target: TypeHandle, candidate: TypeHandle) -> bool {
        self.accepts_anything.contains(&target)
            || memberscope_core::system::is_ancestor_or_self(self, target, candidate)
    }
}
