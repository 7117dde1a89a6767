//! Catalog text formatting.

use parts_storage::Part;

/// One catalog line: `<id>. <name> - <price to 2 decimals> руб.` followed by a newline.
pub fn format_part(part: &Part) -> String {
    format!("{}. {} - {:.2} руб.\n", part.id, part.name, part.price)
}

/// Concatenates the lines of all parts in order. An empty catalog yields an empty string.
pub fn format_catalog(parts: &[Part]) -> String {
    parts.iter().map(format_part).collect()
}
