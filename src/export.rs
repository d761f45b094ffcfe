//! CSV export of checked-in guests

use std::fmt::Write;

use crate::registration::Registration;

pub const CSV_HEADER: &str = "Name,Table,Time";
pub const EXPORT_CONTENT_DISPOSITION: &str = "attachment; filename=registered-guests.csv";

/// Render registrations as `Name,Table,Time` CSV in check-in order.
///
/// Only the name is quoted; table numbers and timestamps never contain
/// delimiters.
pub fn registrations_csv(registrations: &[Registration]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + registrations.len() * 48);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for registration in registrations {
        // Writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{}",
            quote_field(&registration.name),
            registration.table_number,
            registration.timestamp()
        );
    }

    csv
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
