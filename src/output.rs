//! Result-set emission to stdout.

use crate::scan::ScanOutcome;

/// Render the scan outcome as report text.
pub fn render_report(outcome: &ScanOutcome) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== Null-Literal Scan: {} ===", outcome.table));
    lines.push(String::new());
    lines.push(outcome.columns.join(" | "));

    for row in &outcome.rows {
        lines.push(row.join(" | "));
    }

    lines.push(String::new());
    match outcome.rows.len() {
        0 => lines.push("No rows store the literal text 'NULL'.".to_string()),
        1 => lines.push("1 row stores the literal text 'NULL'.".to_string()),
        n => lines.push(format!("{} rows store the literal text 'NULL'.", n)),
    }

    lines.join("\n")
}

/// Print the scan outcome to stdout.
pub fn print_report(outcome: &ScanOutcome) {
    println!("{}", render_report(outcome));
}
