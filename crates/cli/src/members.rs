use std::path::Path;

use memberscope_api::MemberView;
use memberscope_core::MemberLookup;
use memberscope_core::query::describe_member;
use tabled::{Table, Tabled, settings::Style};

use crate::{Result, load_model, parse_flags, resolve_type};

#[derive(Tabled)]
pub(crate) struct MemberRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Declared In")]
    declaring_type: String,
    #[tabled(rename = "Signature")]
    signature: String,
    #[tabled(rename = "Visibility")]
    visibility: String,
    #[tabled(rename = "Static")]
    is_static: String,
}

impl From<MemberView> for MemberRow {
    fn from(view: MemberView) -> Self {
        Self {
            kind: view.kind.to_string(),
            declaring_type: view.declaring_type,
            signature: view.signature,
            visibility: if view.visibility.is_public() {
                "public".to_string()
            } else {
                "non-public".to_string()
            },
            is_static: match view.is_static {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
        }
    }
}

pub(crate) fn render(views: Vec<MemberView>) -> String {
    if views.is_empty() {
        return "No members found.".to_string();
    }
    let rows: Vec<MemberRow> = views.into_iter().map(MemberRow::from).collect();
    Table::new(rows).with(Style::psql()).to_string()
}

pub fn run(model: &Path, type_name: &str, flags: &[String], name: Option<&str>) -> Result<String> {
    let ts = load_model(model)?;
    let ty = resolve_type(&ts, type_name)?;
    let flags = parse_flags(flags)?;

    let members = match name {
        Some(name) => ts.get_member(ty, name, flags),
        None => ts.get_members(ty, flags),
    };
    tracing::debug!("{} member(s) on {}", members.len(), type_name);

    Ok(render(
        members.iter().map(|m| describe_member(&ts, m)).collect(),
    ))
}
