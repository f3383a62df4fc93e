use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: &str = "  ";

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders a header row plus data rows with columns sized to their widest
/// cell. Cells here are short dates, amounts, and counts; no wrapping.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = column_widths(columns, rows);
    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();

    let mut output = vec![format_row(columns, &header, &widths)];
    for row in rows {
        output.push(format_row(columns, row, &widths));
    }
    output
}

fn column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.len())
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    widths
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = *widths.get(index).unwrap_or(&0);
        let value = cells.get(index).cloned().unwrap_or_default();

        let piece = match column.align {
            Align::Left => format!("{value:<width$}"),
            Align::Right => format!("{value:>width$}"),
        };
        pieces.push(piece);
    }

    let joined = pieces.join(COLUMN_GAP);
    format!("{}{}", " ".repeat(INDENT), joined.trim_end())
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, key_value_rows, render_table};

    #[test]
    fn key_value_rows_align_labels() {
        let rows = key_value_rows(
            &[
                ("Rows read:", "100".to_string()),
                ("Rows dropped:", "0".to_string()),
            ],
            2,
        );

        assert_eq!(rows[0], "  Rows read:     100");
        assert_eq!(rows[1], "  Rows dropped:  0");
    }

    #[test]
    fn table_sizes_columns_to_widest_cell() {
        let columns = [
            Column {
                name: "Amount",
                align: Align::Right,
            },
            Column {
                name: "Occurrences",
                align: Align::Right,
            },
        ];
        let rows = vec![
            vec!["50000.00".to_string(), "3".to_string()],
            vec!["1200.00".to_string(), "12".to_string()],
        ];

        let rendered = render_table(&columns, &rows);
        assert_eq!(rendered[0], "    Amount  Occurrences");
        assert_eq!(rendered[1], "  50000.00            3");
        assert_eq!(rendered[2], "   1200.00           12");
    }

    #[test]
    fn left_aligned_trailing_padding_is_trimmed() {
        let columns = [
            Column {
                name: "Hour bucket",
                align: Align::Left,
            },
            Column {
                name: "Txns",
                align: Align::Right,
            },
            Column {
                name: "Channel",
                align: Align::Left,
            },
        ];
        let rows = vec![vec![
            "2026-04-12-14".to_string(),
            "6".to_string(),
            "upi".to_string(),
        ]];

        let rendered = render_table(&columns, &rows);
        assert!(rendered[1].ends_with("upi"));
    }
}
