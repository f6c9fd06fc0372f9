use std::io::{self, Write};

use crate::core::constants::table;
use crate::core::types::Outcome;

/// Order outcomes by URL so reports do not depend on completion order.
pub fn sort_outcomes(outcomes: &mut [Outcome]) {
    outcomes.sort_by(|a, b| a.url().cmp(b.url()));
}

/// Cells for one outcome, in header order.
fn row_cells(outcome: &Outcome) -> [String; 7] {
    let status = if outcome.status_code() == 0 {
        table::PLACEHOLDER.to_string()
    } else {
        outcome.status_code().to_string()
    };
    let contains = outcome
        .contains()
        .map(|found| found.to_string())
        .unwrap_or_else(|| table::PLACEHOLDER.to_string());

    [
        outcome.url().to_string(),
        status,
        outcome.is_ok().to_string(),
        outcome.ttfb_ms().to_string(),
        outcome.size_bytes().to_string(),
        contains,
        outcome.error().unwrap_or_default().to_string(),
    ]
}

/// Write the outcome table: a header, a separator line, one row per outcome.
///
/// Columns are left-aligned and padded to the widest cell.
pub fn render_table<W: Write>(writer: &mut W, outcomes: &[Outcome]) -> io::Result<()> {
    let header = table::HEADERS.map(str::to_string);
    let rows: Vec<[String; 7]> = outcomes.iter().map(row_cells).collect();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &header, &widths)?;
    writeln!(writer, "{}", "-".repeat(table::SEPARATOR_WIDTH))?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }

    writer.flush()
}

fn write_row<W: Write>(writer: &mut W, cells: &[String; 7], widths: &[usize; 7]) -> io::Result<()> {
    let mut line = String::new();
    let last = cells.len() - 1;
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if i < last {
            let pad = widths[i] - cell.chars().count() + table::COLUMN_PADDING;
            line.push_str(&" ".repeat(pad));
        }
    }
    writeln!(writer, "{}", line.trim_end())
}

/// One-line summary of a run.
pub fn render_summary(outcomes: &[Outcome]) -> String {
    let ok = outcomes.iter().filter(|o| o.is_ok()).count();
    format!(
        "Checked {} URL(s): {} ok, {} failed",
        outcomes.len(),
        ok,
        outcomes.len() - ok
    )
}
