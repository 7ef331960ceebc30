//! Reflection-style lookup surface.
//!
//! Every operation is the same pipeline: walk the hierarchy, filter by
//! flags, then match by name and/or signature. Lookups never fail; a miss
//! is `None` or an empty `Vec`.
//!
//! When a base type and a derived type both declare a member with the
//! requested name, single-result lookups return the *base* declaration,
//! because ancestors are walked first and the walk carries no override
//! information.

use memberscope_api::{
    ConstructorInfo, FieldInfo, Member, MethodInfo, PropertyInfo, Scope, SearchFlags, TypeHandle,
};

use crate::engine::{first_by_signature, first_named, search, select_named};
use crate::system::HostTypeSystem;

/// Member lookup operations, available on every [`HostTypeSystem`].
pub trait MemberLookup: HostTypeSystem {
    /// All members passing `flags`, in walk order.
    fn get_members(&self, ty: TypeHandle, flags: impl Into<SearchFlags>) -> Vec<Member> {
        search(self, ty, flags.into()).collect()
    }

    /// All members named `name` passing `flags`, in walk order.
    fn get_member(&self, ty: TypeHandle, name: &str, flags: impl Into<SearchFlags>) -> Vec<Member> {
        let flags = flags.into();
        select_named(search(self, ty, flags), name, flags.comparison).collect()
    }

    fn get_methods(&self, ty: TypeHandle, flags: impl Into<SearchFlags>) -> Vec<MethodInfo> {
        search(self, ty, flags.into())
            .filter_map(Member::into_method)
            .collect()
    }

    fn get_methods_named(
        &self,
        ty: TypeHandle,
        name: &str,
        flags: impl Into<SearchFlags>,
    ) -> Vec<MethodInfo> {
        let flags = flags.into();
        select_named(self.get_methods(ty, flags), name, flags.comparison).collect()
    }

    /// First method named `name` under the default flags (public, static and instance).
    fn get_method(&self, ty: TypeHandle, name: &str) -> Option<MethodInfo> {
        self.get_method_with(ty, name, SearchFlags::default_lookup())
    }

    fn get_method_with(
        &self,
        ty: TypeHandle,
        name: &str,
        flags: impl Into<SearchFlags>,
    ) -> Option<MethodInfo> {
        let flags = flags.into();
        first_named(self.get_methods(ty, flags), name, flags.comparison)
    }

    /// First method named `name` under the default flags whose parameters
    /// accept `arg_types`.
    fn get_method_by_signature(
        &self,
        ty: TypeHandle,
        name: &str,
        arg_types: &[TypeHandle],
    ) -> Option<MethodInfo> {
        self.find_method(ty, Some(name), arg_types, SearchFlags::default_lookup())
    }

    /// Signature lookup with an optional name filter.
    fn find_method(
        &self,
        ty: TypeHandle,
        name: Option<&str>,
        arg_types: &[TypeHandle],
        flags: impl Into<SearchFlags>,
    ) -> Option<MethodInfo> {
        let flags = flags.into();
        let methods = self.get_methods(ty, flags);
        match name {
            Some(name) => first_by_signature(
                self,
                select_named(methods, name, flags.comparison),
                arg_types,
            ),
            None => first_by_signature(self, methods, arg_types),
        }
    }

    fn get_properties(&self, ty: TypeHandle, flags: impl Into<SearchFlags>) -> Vec<PropertyInfo> {
        search(self, ty, flags.into())
            .filter_map(Member::into_property)
            .collect()
    }

    fn get_property(&self, ty: TypeHandle, name: &str) -> Option<PropertyInfo> {
        self.get_property_with(ty, name, SearchFlags::default_lookup())
    }

    fn get_property_with(
        &self,
        ty: TypeHandle,
        name: &str,
        flags: impl Into<SearchFlags>,
    ) -> Option<PropertyInfo> {
        let flags = flags.into();
        first_named(self.get_properties(ty, flags), name, flags.comparison)
    }

    fn get_fields(&self, ty: TypeHandle, flags: impl Into<SearchFlags>) -> Vec<FieldInfo> {
        search(self, ty, flags.into())
            .filter_map(Member::into_field)
            .collect()
    }

    fn get_field(
        &self,
        ty: TypeHandle,
        name: &str,
        flags: impl Into<SearchFlags>,
    ) -> Option<FieldInfo> {
        let flags = flags.into();
        first_named(self.get_fields(ty, flags), name, flags.comparison)
    }

    /// Constructors declared directly on `ty`, unfiltered.
    fn get_constructors(&self, ty: TypeHandle) -> Vec<ConstructorInfo> {
        self.get_constructors_with(ty, SearchFlags::new().declared_only())
    }

    fn get_constructors_with(
        &self,
        ty: TypeHandle,
        flags: impl Into<SearchFlags>,
    ) -> Vec<ConstructorInfo> {
        search(self, ty, flags.into())
            .filter_map(Member::into_constructor)
            .collect()
    }

    /// First declared constructor whose parameters accept `arg_types`.
    fn get_constructor(&self, ty: TypeHandle, arg_types: &[TypeHandle]) -> Option<ConstructorInfo> {
        first_by_signature(self, self.get_constructors(ty), arg_types)
    }

    /// Interfaces directly implemented by `ty`.
    fn get_interfaces(&self, ty: TypeHandle) -> Vec<TypeHandle> {
        self.interfaces(ty)
    }

    /// Generic type parameters declared by `ty`.
    fn get_generic_arguments(&self, ty: TypeHandle) -> Vec<TypeHandle> {
        self.type_info(ty)
            .map(|info| info.generic_parameters)
            .unwrap_or_default()
    }

    /// `instance` is the runtime type of a value, `None` for null.
    ///
    /// Exact type identity only: an instance of a subtype is not an
    /// instance of `ty` here. Use `is_assignable_from` for that.
    fn is_instance_of_type(&self, ty: TypeHandle, instance: Option<TypeHandle>) -> bool {
        instance == Some(ty)
    }

    /// Types a walk of `ty` under `scope` would visit, root ancestor first.
    fn hierarchy(&self, ty: TypeHandle, scope: Scope) -> Vec<TypeHandle> {
        crate::engine::ancestor_chain(self, ty, scope)
    }
}

impl<T: HostTypeSystem + ?Sized> MemberLookup for T {}
