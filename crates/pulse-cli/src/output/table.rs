use pulse_core::theme::Rgb;

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    /// Header colour. `None` disables all ANSI output.
    pub accent: Option<Rgb>,
}

/// Render an aligned table for string rows. Numeric cells are
/// right-aligned; cells wider than their column are cut with `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_plain = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_plain.chars().count());
    let header_line = match options.accent {
        Some(accent) => accent.paint(&header_plain),
        None => header_plain,
    };

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = truncate_text(value, *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.accent.is_some() {
                    colorize_status(&padded, &cell)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Shrink the widest columns one cell at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * GAP.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_end_matches('%');
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn colorize_status(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "ok" | "true" | "ready" => "32",
        "loading" | "skipped" => "33",
        "failed" | "false" | "unavailable" | "error" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pulse_core::theme::Rgb;

    use super::{TableOptions, render_table, truncate_text};

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["42".to_string(), "Clear aligners".to_string(), "ok".to_string()],
            vec![
                "1077".to_string(),
                "Full-arch implant restoration".to_string(),
                "failed".to_string(),
            ],
        ]
    }

    #[test]
    fn aligns_columns_and_right_aligns_numbers() {
        let table = render_table(&["id", "name", "status"], &rows(), TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("    42"));
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let options = TableOptions {
            max_width: Some(40),
            accent: None,
        };
        let table = render_table(&["id", "name", "status"], &rows(), options);
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn accent_colours_header_and_status() {
        let options = TableOptions {
            max_width: None,
            accent: Some(Rgb(0x19, 0x76, 0xD2)),
        };
        let table = render_table(&["id", "status"], &[vec!["1".into(), "ok".into()]], options);
        assert!(table.starts_with("\u{1b}[38;2;25;118;210m"));
        assert!(table.contains("\u{1b}[32m"));
    }

    #[test]
    fn truncate_handles_multibyte() {
        assert_eq!(truncate_text("Ästhetik", 4), "Äst…");
        assert_eq!(truncate_text("ab", 1), "…");
    }
}
