//! Address extraction from the export's free-text address column.

use bobochic_models::{ParsedAddress, PostalAddress};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::title_case;

/// `<street> <4 or 5 digit zip> <city> (FR)`, street and city non-greedy.
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.+?) (\d{4,5}) (.+?) \(FR\)").expect("address pattern is valid")
});

/// Extracts a French postal address. Only the first match is used; text that
/// does not match yields `ParsedAddress::Unmatched`.
pub fn parse_address(text: &str) -> ParsedAddress {
    let Some(captures) = ADDRESS_PATTERN.captures(text) else {
        tracing::debug!(address = text, "Address does not match the expected layout");
        return ParsedAddress::Unmatched {};
    };

    PostalAddress::french(
        title_case(&captures[1]),
        captures[2].to_string(),
        title_case(&captures[3]),
    )
    .into()
}
