use memberscope_api::{
    BindingFlags, Member, MemberKind, Scope, SearchFlags, TypeHandle, Visibility,
};
use memberscope_core::engine::walk;
use memberscope_core::{AssignabilityProvider, MemberLookup, RegistryBuilder, RegistryTypeSystem};

struct Overloads {
    ts: RegistryTypeSystem,
    base: TypeHandle,
    derived: TypeHandle,
    int: TypeHandle,
}

/// `Derived : Base`; `Base.M()` and `Derived.M(int)`, both public instance.
fn overloads() -> Overloads {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let base = b.add_class("Base", None);
    let derived = b.add_class("Derived", Some(base));
    b.add_method(base, "M", &[], Visibility::Public, false)
        .add_method(derived, "M", &[int], Visibility::Public, false);
    Overloads {
        ts: b.build(),
        base,
        derived,
        int,
    }
}

#[test]
fn test_overloads_across_hierarchy_base_first() {
    let o = overloads();
    let found = o.ts.get_methods_named(
        o.derived,
        "M",
        BindingFlags::PUBLIC | BindingFlags::INSTANCE,
    );

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].declaring_type, o.base);
    assert!(found[0].parameters.is_empty());
    assert_eq!(found[1].declaring_type, o.derived);
    assert_eq!(found[1].parameters[0].parameter_type, o.int);
}

#[test]
fn test_signature_lookup_selects_derived_overload() {
    let o = overloads();
    let found = o.ts.get_method_by_signature(o.derived, "M", &[o.int]).unwrap();
    assert_eq!(found.declaring_type, o.derived);

    let none = o.ts.get_method_by_signature(o.derived, "M", &[]).unwrap();
    assert_eq!(none.declaring_type, o.base);
}

#[test]
fn test_declared_only_hides_base_overload() {
    let o = overloads();
    let flags = SearchFlags::new().declared_only().public_only();
    let found = o.ts.get_methods_named(o.derived, "M", flags);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].declaring_type, o.derived);

    assert!(o.ts.get_method_by_signature(o.base, "M", &[o.int]).is_none());
}

#[test]
fn test_private_static_field_visibility() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let counter = b.add_class("Counter", None);
    b.add_field(counter, "count", int, Visibility::NonPublic, true);
    let ts = b.build();

    assert!(
        ts.get_member(counter, "count", BindingFlags::PUBLIC | BindingFlags::INSTANCE)
            .is_empty()
    );

    let found = ts.get_member(counter, "count", BindingFlags::NON_PUBLIC | BindingFlags::STATIC);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind(), MemberKind::Field);

    let field = ts
        .get_field(counter, "count", BindingFlags::NON_PUBLIC | BindingFlags::STATIC)
        .unwrap();
    assert!(field.is_static);
}

#[test]
fn test_ignore_case_name_lookup() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let ty = b.add_class("Widget", None);
    b.add_property(ty, "foo", int, Visibility::Public);
    let ts = b.build();

    assert!(ts.get_property(ty, "Foo").is_none());
    let flags = SearchFlags::default_lookup().ignore_case();
    assert_eq!(ts.get_property_with(ty, "Foo", flags).unwrap().name, "foo");
    assert_eq!(
        ts.get_member(ty, "FOO", BindingFlags::IGNORE_CASE).len(),
        1
    );
}

#[test]
fn test_shadowed_name_returns_base_declaration() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let base = b.add_class("Base", None);
    let derived = b.add_class("Derived", Some(base));
    b.add_property(base, "Value", int, Visibility::Public)
        .add_property(derived, "Value", int, Visibility::Public);
    let ts = b.build();

    assert_eq!(ts.get_property(derived, "Value").unwrap().declaring_type, base);
    assert_eq!(ts.get_member(derived, "Value", SearchFlags::new()).len(), 2);
}

#[test]
fn test_chain_blocks_follow_hierarchy() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let mut chain = vec![b.add_class("T0", None)];
    for i in 1..5 {
        let parent = chain[i - 1];
        chain.push(b.add_class(&format!("T{}", i), Some(parent)));
    }
    for (i, &ty) in chain.iter().enumerate() {
        for j in 0..=i {
            b.add_field(ty, &format!("f{}_{}", i, j), int, Visibility::Public, j % 2 == 0);
        }
    }
    let ts = b.build();
    let leaf = chain[4];

    assert_eq!(ts.hierarchy(leaf, Scope::IncludeInherited), chain);

    // Contiguous blocks, root ancestor first.
    let owners: Vec<_> = walk(&ts, leaf, true).members().map(|m| m.declaring_type()).collect();
    let mut expected = Vec::new();
    for (i, &ty) in chain.iter().enumerate() {
        expected.extend(std::iter::repeat_n(ty, i + 1));
    }
    assert_eq!(owners, expected);

    // Declared-only sees just the leaf, in declaration order.
    let names: Vec<_> = walk(&ts, leaf, false)
        .members()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(names, vec!["f4_0", "f4_1", "f4_2", "f4_3", "f4_4"]);
}

#[test]
fn test_single_flag_axes_never_leak() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let base = b.add_class("Base", None);
    let derived = b.add_class("Derived", Some(base));
    for (owner, prefix) in [(base, "b"), (derived, "d")] {
        b.add_field(owner, &format!("{}_pi", prefix), int, Visibility::Public, false)
            .add_field(owner, &format!("{}_ps", prefix), int, Visibility::Public, true)
            .add_field(owner, &format!("{}_ni", prefix), int, Visibility::NonPublic, false)
            .add_field(owner, &format!("{}_ns", prefix), int, Visibility::NonPublic, true)
            .add_method(owner, &format!("{}_m", prefix), &[], Visibility::NonPublic, true);
    }
    let ts = b.build();

    let axes = [
        BindingFlags::INSTANCE,
        BindingFlags::STATIC,
        BindingFlags::PUBLIC,
        BindingFlags::NON_PUBLIC,
    ];
    for bits in 0..16u32 {
        let flags: BindingFlags = axes
            .iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .fold(BindingFlags::empty(), |acc, (_, f)| acc | *f);
        let members = ts.get_members(derived, flags);

        let instance = flags.contains(BindingFlags::INSTANCE);
        let stat = flags.contains(BindingFlags::STATIC);
        let public = flags.contains(BindingFlags::PUBLIC);
        let non_public = flags.contains(BindingFlags::NON_PUBLIC);

        for m in &members {
            if instance != stat {
                assert_eq!(m.staticness(), Some(stat), "{:?} leaked {}", flags, m.name());
            }
            if public != non_public {
                assert_eq!(m.visibility().is_public(), public, "{:?} leaked {}", flags, m.name());
            }
        }
        if instance == stat && public == non_public {
            assert_eq!(members.len(), 10);
        }
    }
}

#[test]
fn test_constructors_are_declared_only() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let text = b.add_primitive("String");
    let base = b.add_class("Base", None);
    let derived = b.add_class("Derived", Some(base));
    b.add_constructor(base, &[int], Visibility::Public)
        .add_constructor(derived, &[], Visibility::Public)
        .add_constructor(derived, &[int, text], Visibility::NonPublic);
    let ts = b.build();

    assert_eq!(ts.get_constructors(derived).len(), 2);
    assert!(ts.get_constructor(derived, &[int]).is_none());
    assert!(ts.get_constructor(base, &[int]).is_some());

    let ctor = ts.get_constructor(derived, &[int, text]).unwrap();
    assert_eq!(ctor.visibility, Visibility::NonPublic);
    // Constructor lookups are by signature only; the second argument is checked too.
    assert!(ts.get_constructor(derived, &[int, int]).is_none());

    // Through the general walk, inherited constructors do appear.
    let all: Vec<_> = ts
        .get_constructors_with(derived, SearchFlags::new().public_only())
        .into_iter()
        .map(|c| c.declaring_type)
        .collect();
    assert_eq!(all, vec![base, derived]);
}

#[test]
fn test_interfaces_generics_and_instance_checks() {
    let mut b = RegistryBuilder::new();
    let disposable = b.add_interface("IDisposable");
    let object = b.add_class("Object", None);
    let list = b.add_class("List", Some(object));
    let t = b.add_generic_parameter(list, "T");
    let sorted = b.add_class("SortedList", Some(list));
    b.implements(list, disposable);
    let ts = b.build();

    assert_eq!(ts.get_interfaces(list), vec![disposable]);
    assert!(ts.get_interfaces(sorted).is_empty());
    assert_eq!(ts.get_generic_arguments(list), vec![t]);
    assert!(ts.get_generic_arguments(object).is_empty());

    assert!(ts.is_assignable_from(disposable, sorted));
    assert!(ts.is_instance_of_type(list, Some(list)));
    assert!(!ts.is_instance_of_type(list, Some(sorted)));
    assert!(!ts.is_instance_of_type(list, None));
}

#[test]
fn test_unknown_handle_yields_nothing() {
    let o = overloads();
    let bogus = TypeHandle(999);
    assert!(o.ts.get_members(bogus, SearchFlags::new()).is_empty());
    assert!(o.ts.get_method(bogus, "M").is_none());
    assert!(o.ts.get_constructor(bogus, &[]).is_none());
}

#[test]
fn test_method_lookup_without_name() {
    let o = overloads();
    let found = o
        .ts
        .find_method(o.derived, None, &[o.int], SearchFlags::new())
        .unwrap();
    assert_eq!(found.declaring_type, o.derived);

    let members: Vec<Member> = o.ts.get_members(o.derived, SearchFlags::new());
    assert_eq!(members.len(), 2);
}

#[test]
fn test_bulk_methods_and_properties_follow_walk_order() {
    let mut b = RegistryBuilder::new();
    let int = b.add_primitive("Int32");
    let base = b.add_class("Base", None);
    let derived = b.add_class("Derived", Some(base));
    b.add_method(base, "Reset", &[], Visibility::Public, false)
        .add_method(base, "Create", &[], Visibility::Public, true)
        .add_method(derived, "Draw", &[int], Visibility::NonPublic, false)
        .add_property(base, "Size", int, Visibility::Public)
        .add_property(derived, "Color", int, Visibility::NonPublic)
        .add_field(derived, "cache", int, Visibility::NonPublic, false);
    let ts = b.build();

    let methods: Vec<_> = ts
        .get_methods(derived, SearchFlags::new())
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(methods, vec!["Reset", "Create", "Draw"]);

    let instance: Vec<_> = ts
        .get_methods(derived, BindingFlags::INSTANCE)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(instance, vec!["Reset", "Draw"]);

    let properties: Vec<_> = ts
        .get_properties(derived, SearchFlags::new())
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(properties, vec!["Size", "Color"]);

    // Properties carry no staticness, so STATIC alone does not exclude them.
    let public = ts.get_properties(derived, BindingFlags::PUBLIC | BindingFlags::STATIC);
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].declaring_type, base);
}
