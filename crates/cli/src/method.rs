use std::path::Path;

use memberscope_api::{Member, SearchFlags};
use memberscope_core::MemberLookup;
use memberscope_core::query::describe_member;

use crate::members::render;
use crate::{Result, load_model, parse_flags, resolve_type};

pub fn run(
    model: &Path,
    type_name: &str,
    name: &str,
    args: Option<&[String]>,
    flags: Option<&[String]>,
) -> Result<String> {
    let ts = load_model(model)?;
    let ty = resolve_type(&ts, type_name)?;
    let flags = match flags {
        Some(flags) => parse_flags(flags)?,
        None => SearchFlags::default_lookup(),
    };

    let found = match args {
        Some(args) => {
            let arg_types = args
                .iter()
                .filter(|a| !a.trim().is_empty())
                .map(|a| resolve_type(&ts, a.trim()))
                .collect::<Result<Vec<_>>>()?;
            ts.find_method(ty, Some(name), &arg_types, flags)
        }
        None => ts.get_method_with(ty, name, flags),
    };

    Ok(render(
        found
            .map(Member::from)
            .iter()
            .map(|m| describe_member(&ts, m))
            .collect(),
    ))
}
