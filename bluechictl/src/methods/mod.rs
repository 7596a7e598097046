pub mod enablement;
pub mod lifecycle;
pub mod loglevel;
pub mod metrics;
pub mod monitor;
pub mod nodes;
pub mod status;
pub mod target;
pub mod units;

/// Renders rows as padded columns with a dashed rule under the header.
///
/// The last column is left unpadded so lines carry no trailing spaces.
pub(crate) fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let cols = header.len();
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, header.iter().map(|h| *h));
    let total: usize = widths.iter().sum::<usize>() + 3 * (cols - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        push_row(&mut out, &widths, row.iter().map(|c| c.as_str()));
    }
    out
}

fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let cols = widths.len();
    let line: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| {
            if i + 1 == cols {
                cell.to_string()
            } else {
                format!("{:<w$}", cell, w = widths[i])
            }
        })
        .collect();
    out.push_str(&line.join(" | "));
    out.push('\n');
}

#[cfg(test)]
mod test {
    use super::render_table;

    #[test]
    fn columns_line_up() {
        let rows = vec![
            vec!["worker1".to_string(), "nginx.service".to_string(), "active".to_string()],
            vec!["w2".to_string(), "a.timer".to_string(), "inactive".to_string()],
        ];
        let table = render_table(&["NODE", "UNIT", "ACTIVE"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "NODE    | UNIT          | ACTIVE");
        // rule spans the widest possible row: 7 + 13 + 8 plus two separators
        assert_eq!(lines[1], "-".repeat(34));
        assert_eq!(lines[2], "worker1 | nginx.service | active");
        assert_eq!(lines[3], "w2      | a.timer       | inactive");
    }
}
