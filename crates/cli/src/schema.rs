use memberscope_api::{MemberQuery, QueryResult, TypeModel};

use crate::Result;

pub fn run() -> Result<String> {
    let mut out = String::new();

    out.push_str("Type model (MODEL file):\n");
    out.push_str(&serde_json::to_string_pretty(&schemars::schema_for!(TypeModel))?);

    out.push_str("\n\nQuery interface (JSON_QUERY):\n");
    out.push_str(&serde_json::to_string_pretty(&schemars::schema_for!(MemberQuery))?);

    out.push_str("\n\nQuery result:\n");
    out.push_str(&serde_json::to_string_pretty(&schemars::schema_for!(QueryResult))?);

    Ok(out)
}
