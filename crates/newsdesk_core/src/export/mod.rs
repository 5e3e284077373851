//! CSV rendering for the feedback log.
//!
//! # Responsibility
//! - Serialize the ordered event list as downloadable delimited text.
//!
//! # Invariants
//! - Output follows RFC 4180 quoting, so text containing delimiters, quotes
//!   or newlines round-trips losslessly through a standard CSV parser.
//! - Column order matches the storage schema.

use crate::model::event::ClassificationEvent;

/// Header row matching the `predictions` column order.
pub const CSV_HEADER: &str = "id,text,prediction,category,timestamp";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Renders events (in the order given) as a UTF-8 CSV document with header.
pub fn render_csv(events: &[ClassificationEvent]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for event in events {
        out.push_str(&event.id.to_string());
        out.push(',');
        out.push_str(&escape_field(&event.text));
        out.push(',');
        out.push_str(&event.category_id.to_string());
        out.push(',');
        out.push_str(&escape_field(&event.category_label));
        out.push(',');
        out.push_str(&event.timestamp.format(TIMESTAMP_FORMAT).to_string());
        out.push('\n');
    }

    out
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::escape_field;

    #[test]
    fn plain_fields_pass_through_unquoted() {
        assert_eq!(escape_field("SPORTS"), "SPORTS");
    }

    #[test]
    fn delimiters_and_quotes_trigger_quoting() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }
}
