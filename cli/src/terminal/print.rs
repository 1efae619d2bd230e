use colored::*;
use vendor6_common::vendors::OuiRecord;
use vendor6_core::VendorAnswer;

use crate::terminal::colors;

pub const PROMPT: &str = ">: ";

const KEY_WIDTH: usize = 7;

pub fn usage() {
    let exit: ColoredString = "exit".color(colors::PRIMARY).bold();
    println!("Enter an IPv6 address to get the vendor name. If you want to exit, type \"{exit}\".");
}

/// Renders an answer the way it is printed to stdout.
///
/// Vendors are printed as the bare company name unless `verbose` is set, in which
/// case the whole record is laid out as a tree.
pub fn render_answer(answer: &VendorAnswer, verbose: bool) -> String {
    match answer {
        VendorAnswer::Vendor(record) if verbose => record_tree(record),
        VendorAnswer::Vendor(_) => answer.to_string(),
        VendorAnswer::NotFound { mac } if verbose => {
            format!("{} ({})", answer, mac.to_string().color(colors::ACCENT))
        }
        VendorAnswer::NotFound { .. } => answer.to_string(),
        VendorAnswer::Rejected { .. } => answer.to_string().color(colors::WARNING).to_string(),
    }
}

fn record_tree(record: &OuiRecord) -> String {
    let unknown = || "unknown".dimmed();
    let details: Vec<(&str, ColoredString)> = vec![
        ("OUI", format_prefix(&record.prefix).color(colors::OUI)),
        (
            "Country",
            record.country.as_deref().map_or_else(unknown, |c| c.normal()),
        ),
        (
            "Address",
            record.address.as_deref().map_or_else(unknown, |a| a.normal()),
        ),
    ];

    let mut lines: Vec<String> = vec![record.company.color(colors::PRIMARY).bold().to_string()];
    lines.extend(as_tree_one_level(&details));
    lines.join("\n")
}

fn as_tree_one_level(key_value_pair: &[(&str, ColoredString)]) -> Vec<String> {
    key_value_pair
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let last: bool = i + 1 == key_value_pair.len();
            let branch: ColoredString = if !last {
                "├─".bright_black()
            } else {
                "└─".bright_black()
            };
            format!(
                " {} {}{}{} {}",
                branch,
                key.color(colors::TEXT_DEFAULT),
                ".".repeat(KEY_WIDTH.saturating_sub(key.len())).color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}

/// `080007` -> `08:00:07`
fn format_prefix(prefix: &str) -> String {
    prefix
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).to_uppercase())
        .collect::<Vec<String>>()
        .join(":")
}
