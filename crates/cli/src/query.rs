use std::path::Path;

use memberscope_api::MemberQuery;

use crate::{Result, load_model};

pub fn run(model: &Path, query: &str) -> Result<String> {
    let ts = load_model(model)?;
    let query: MemberQuery = serde_json::from_str(query)?;
    let result = memberscope_core::query::execute(&ts, &query)?;
    Ok(serde_json::to_string_pretty(&result)?)
}
