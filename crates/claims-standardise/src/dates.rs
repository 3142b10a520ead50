//! Claim date parsing.
//!
//! Source exports carry dates in a handful of layouts. Formats are tried in
//! a fixed order, ISO first so standardised output parses back unchanged.

use chrono::NaiveDate;

/// Accepted input formats, in trial order.
pub const ACCEPTED_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%Y", "%d-%B-%Y"];

/// Parses a claim date; `None` for empty or unrecognised input.
pub fn parse_claim_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
