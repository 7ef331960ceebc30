//! Executes [`MemberQuery`] requests against a host.

use memberscope_api::{
    BindingFlags, FlagName, Member, MemberQuery, MemberView, ParameterInfo, QueryResult,
    SearchFlags, TypeHandle,
};

use crate::engine::walk;
use crate::error::{QueryError, Result};
use crate::lookup::MemberLookup;
use crate::system::HostTypeSystem;

pub fn execute<T: HostTypeSystem + ?Sized>(ts: &T, query: &MemberQuery) -> Result<QueryResult> {
    tracing::debug!("Executing {:?}", query);

    let result = match query {
        MemberQuery::Walk {
            type_name,
            declared_only,
        } => {
            let ty = resolve(ts, type_name)?;
            let members = walk(ts, ty, !declared_only).into_members();
            members_result(ts, members)
        }
        MemberQuery::Members {
            type_name,
            name,
            flags,
        } => {
            let ty = resolve(ts, type_name)?;
            let flags = to_flags(flags);
            let members = match name {
                Some(name) => ts.get_member(ty, name, flags),
                None => ts.get_members(ty, flags),
            };
            members_result(ts, members)
        }
        MemberQuery::Methods {
            type_name,
            name,
            flags,
        } => {
            let ty = resolve(ts, type_name)?;
            let flags = to_flags(flags);
            let methods = match name {
                Some(name) => ts.get_methods_named(ty, name, flags),
                None => ts.get_methods(ty, flags),
            };
            members_result(ts, methods.into_iter().map(Member::from))
        }
        MemberQuery::Method {
            type_name,
            name,
            args,
            flags,
        } => {
            let ty = resolve(ts, type_name)?;
            let flags = to_optional_flags(flags.as_deref());
            let found = match args {
                Some(args) => {
                    let arg_types = args
                        .iter()
                        .map(|a| resolve(ts, a))
                        .collect::<Result<Vec<_>>>()?;
                    ts.find_method(ty, name.as_deref(), &arg_types, flags)
                }
                None => match name {
                    Some(name) => ts.get_method_with(ty, name, flags),
                    None => None,
                },
            };
            members_result(ts, found.map(Member::from))
        }
        MemberQuery::Fields { type_name, flags } => {
            let ty = resolve(ts, type_name)?;
            let fields = ts.get_fields(ty, to_flags(flags));
            members_result(ts, fields.into_iter().map(Member::from))
        }
        MemberQuery::Field {
            type_name,
            name,
            flags,
        } => {
            let ty = resolve(ts, type_name)?;
            let found = ts.get_field(ty, name, to_optional_flags(flags.as_deref()));
            members_result(ts, found.map(Member::from))
        }
        MemberQuery::Properties { type_name, flags } => {
            let ty = resolve(ts, type_name)?;
            let properties = ts.get_properties(ty, to_flags(flags));
            members_result(ts, properties.into_iter().map(Member::from))
        }
        MemberQuery::Property {
            type_name,
            name,
            flags,
        } => {
            let ty = resolve(ts, type_name)?;
            let found = ts.get_property_with(ty, name, to_optional_flags(flags.as_deref()));
            members_result(ts, found.map(Member::from))
        }
        MemberQuery::Constructors { type_name } => {
            let ty = resolve(ts, type_name)?;
            members_result(ts, ts.get_constructors(ty).into_iter().map(Member::from))
        }
        MemberQuery::Constructor { type_name, args } => {
            let ty = resolve(ts, type_name)?;
            let arg_types = args
                .iter()
                .map(|a| resolve(ts, a))
                .collect::<Result<Vec<_>>>()?;
            members_result(ts, ts.get_constructor(ty, &arg_types).map(Member::from))
        }
        MemberQuery::Interfaces { type_name } => {
            let ty = resolve(ts, type_name)?;
            types_result(ts, ts.get_interfaces(ty))
        }
        MemberQuery::GenericArguments { type_name } => {
            let ty = resolve(ts, type_name)?;
            types_result(ts, ts.get_generic_arguments(ty))
        }
        MemberQuery::IsAssignableFrom { target, from } => {
            let target = resolve(ts, target)?;
            let from = resolve(ts, from)?;
            QueryResult::Bool {
                value: ts.is_assignable_from(target, from),
            }
        }
        MemberQuery::IsInstanceOfType {
            type_name,
            instance,
        } => {
            let ty = resolve(ts, type_name)?;
            let instance = instance.as_deref().map(|i| resolve(ts, i)).transpose()?;
            QueryResult::Bool {
                value: ts.is_instance_of_type(ty, instance),
            }
        }
    };

    Ok(result)
}

/// Render a member with its types spelled by name.
pub fn describe_member<T: HostTypeSystem + ?Sized>(ts: &T, member: &Member) -> MemberView {
    let signature = match member {
        Member::Field(f) => format!("{}: {}", f.name, type_name(ts, f.field_type)),
        Member::Method(m) => {
            let params = parameter_list(ts, &m.parameters);
            match m.return_type {
                Some(ret) => format!("{}({}) -> {}", m.name, params, type_name(ts, ret)),
                None => format!("{}({})", m.name, params),
            }
        }
        Member::Constructor(c) => {
            format!("{}({})", member.name(), parameter_list(ts, &c.parameters))
        }
        Member::Property(p) => {
            let accessors = match (p.can_read, p.can_write) {
                (true, true) => " { get; set; }",
                (true, false) => " { get; }",
                (false, true) => " { set; }",
                (false, false) => "",
            };
            format!("{}: {}{}", p.name, type_name(ts, p.property_type), accessors)
        }
    };

    MemberView {
        kind: member.kind(),
        name: member.name().to_string(),
        declaring_type: type_name(ts, member.declaring_type()),
        signature,
        visibility: member.visibility(),
        is_static: member.staticness(),
    }
}

pub fn type_name<T: HostTypeSystem + ?Sized>(ts: &T, ty: TypeHandle) -> String {
    ts.type_info(ty)
        .map(|info| info.full_name())
        .unwrap_or_else(|| ty.to_string())
}

fn parameter_list<T: HostTypeSystem + ?Sized>(ts: &T, params: &[ParameterInfo]) -> String {
    params
        .iter()
        .map(|p| type_name(ts, p.parameter_type))
        .collect::<Vec<_>>()
        .join(", ")
}

fn resolve<T: HostTypeSystem + ?Sized>(ts: &T, name: &str) -> Result<TypeHandle> {
    ts.find_type(name)
        .ok_or_else(|| QueryError::UnknownType(name.to_string()))
}

fn to_flags(flags: &[FlagName]) -> SearchFlags {
    flags.iter().copied().collect::<BindingFlags>().into()
}

fn to_optional_flags(flags: Option<&[FlagName]>) -> SearchFlags {
    flags.map_or_else(SearchFlags::default_lookup, to_flags)
}

fn members_result<T, I>(ts: &T, members: I) -> QueryResult
where
    T: HostTypeSystem + ?Sized,
    I: IntoIterator<Item = Member>,
{
    QueryResult::Members {
        members: members
            .into_iter()
            .map(|m| describe_member(ts, &m))
            .collect(),
    }
}

fn types_result<T: HostTypeSystem + ?Sized>(ts: &T, types: Vec<TypeHandle>) -> QueryResult {
    QueryResult::Types {
        types: types.into_iter().map(|t| type_name(ts, t)).collect(),
    }
}
