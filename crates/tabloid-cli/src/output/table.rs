#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 4;

/// Render an aligned table: header, divider, then one line per row.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_cells = headers.iter().map(|h| (*h).to_string()).collect::<Vec<_>>();
    let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(&header_cells, &widths));
    lines.push(divider);
    for row in rows {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map_or("-", String::as_str);
            pad(&truncate(cell, *width), *width)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Take one column at a time off the widest column until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(idx) = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > MIN_COLUMN)
            .max_by_key(|(_, w)| **w)
            .map(|(i, _)| i)
        else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align() {
        let rows = vec![
            vec!["1".to_string(), "short".to_string()],
            vec!["200".to_string(), "a much longer title".to_string()],
        ];
        let table = render_table(&["id", "title"], &rows, TableOptions { max_width: None });
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id   title"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].starts_with("200  a much longer title"));
    }

    #[test]
    fn wide_cells_are_truncated_to_fit() {
        let rows = vec![vec!["1".to_string(), "x".repeat(100)]];
        let table = render_table(&["id", "title"], &rows, TableOptions { max_width: Some(40) });
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["1".to_string()]];
        let table = render_table(&["id", "title"], &rows, TableOptions { max_width: None });
        assert!(table.lines().nth(2).is_some_and(|l| l.ends_with('-')));
    }
}
