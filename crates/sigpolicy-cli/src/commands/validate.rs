//! Validate command implementation.

use crate::input::load_notice;
use crate::output::{error_json, format_json};
use serde_json::json;

pub fn run(
    input: Option<String>,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let notice = load_notice(input)?;
    let errors = notice.validate();

    if json_output {
        let report = json!({
            "valid": errors.is_empty(),
            "errors": errors.iter().map(error_json).collect::<Vec<_>>(),
        });
        println!("{}", format_json(&report));
    } else if errors.is_empty() {
        println!("OK");
    } else {
        for err in &errors {
            println!("{:<22} {}", err.code(), err);
        }
    }

    if strict && !errors.is_empty() {
        return Err(format!("validation failed with {} error(s)", errors.len()).into());
    }

    Ok(())
}
