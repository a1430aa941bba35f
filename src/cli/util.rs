use colored::Colorize;

const COLUMN_GAP: usize = 3;

/// Left-aligned text table; the last column is not padded.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = format_row(&header_cells, &widths).bold().to_string();
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx == last {
            line.push_str(cell);
        } else {
            let width = widths.get(idx).copied().unwrap_or(0) + COLUMN_GAP;
            line.push_str(&format!("{cell:<width$}"));
        }
    }
    line
}
