//! Build command implementation.

use sigpolicy_notice::NoticeReference;

pub fn run(
    organization: Option<String>,
    numbers: Vec<i32>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut notice = NoticeReference::with_organization(organization);
    for number in numbers {
        notice.add_notice_number(number);
    }

    if !notice.is_valid() {
        for err in notice.validate() {
            eprintln!("Warning: {}", err);
        }
    }

    let json = if pretty {
        notice.to_json_pretty()?
    } else {
        notice.to_json()?
    };
    println!("{}", json);
    Ok(())
}
