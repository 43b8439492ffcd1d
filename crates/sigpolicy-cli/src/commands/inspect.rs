//! Inspect command implementation.

use crate::input::load_notice;
use crate::output::{format_json, format_table_row, organization_label, print_table_header};
use serde_json::json;

pub fn run(input: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let notice = load_notice(input)?;

    if json_output {
        let output = json!({
            "organization": notice.organization(),
            "notice_number_count": notice.count_notice_numbers(),
            "notice_numbers": notice.notice_numbers(),
        });
        println!("{}", format_json(&output));
        return Ok(());
    }

    println!("Organization: {}", organization_label(notice.organization()));
    println!("Notice numbers: {}", notice.count_notice_numbers());
    if notice.count_notice_numbers() > 0 {
        print_table_header();
        for (idx, number) in notice.notice_numbers().iter().enumerate() {
            println!("{}", format_table_row(idx, *number));
        }
    }

    Ok(())
}
