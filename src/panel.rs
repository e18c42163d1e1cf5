use console::{Style, measure_text_width, style};

/// Constructs the framed lines of a titled panel.
///
/// The panel is dynamically sized to fit the widest **visible** line of
/// content, using [`console::measure_text_width`] to ignore ANSI color codes
/// when calculating padding. It is framed with rounded Unicode box-drawing
/// characters (`╭─╮`, `│ │`, `╰─╯`) with the title embedded in the top
/// border.
///
/// Borders are styled with `accent` independently from the inner text so
/// that embedded color codes inside the content do not affect the color of
/// the box edges.
///
/// # Parameters
///
/// * `title` - Label rendered inside the top border.
/// * `lines` - Content lines; each may contain ANSI styling.
/// * `accent` - Style applied to the frame and title.
///
/// # Returns
///
/// The framed lines, top border first, ready to print in order.
pub fn panel_lines(title: &str, lines: &[String], accent: &Style) -> Vec<String> {
    let content_width = lines
        .iter()
        .map(|l| measure_text_width(l)) // ignore ANSI in content
        .max()
        .unwrap_or(0);

    let label = format!(" {} ", title);
    let label_width = measure_text_width(&label);
    let inner = (content_width + 2).max(label_width + 2);

    let mut out = Vec::with_capacity(lines.len() + 2);

    let top_fill = "─".repeat(inner - 1 - label_width);
    out.push(
        accent
            .apply_to(format!("╭─{}{}╮", label, top_fill))
            .to_string(),
    );

    let left = accent.apply_to("│").to_string();
    let right = accent.apply_to("│").to_string();
    for line in lines {
        let visible = measure_text_width(line);
        let pad = inner - 2 - visible;
        out.push(format!("{} {}{} {}", left, line, " ".repeat(pad), right));
    }

    out.push(accent.apply_to(format!("╰{}╯", "─".repeat(inner))).to_string());
    out
}

/// Prints a titled panel around a (possibly multi-line) body.
///
/// # Examples
///
/// ```no_run
/// use console::Style;
/// use gli::panel::print_panel;
///
/// print_panel("Commit & Push", "Message: feat: x\nStatus: Pushed", &Style::new().green());
/// ```
pub fn print_panel(title: &str, body: &str, accent: &Style) {
    let lines: Vec<String> = body.lines().map(|l| l.to_string()).collect();
    for line in panel_lines(title, &lines, accent) {
        println!("{}", line);
    }
}

/// Builds column-aligned table lines: a bold header row, a rule, then rows.
///
/// Each column is padded to the widest visible cell in that column. Rows
/// shorter than the header are padded with empty cells; longer rows are
/// truncated to the header width.
pub(crate) fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            let w = measure_text_width(cell);
            if w > widths[i] {
                widths[i] = w;
            }
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);

    let header_cells: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let pad = widths[i] - measure_text_width(h);
            format!("{}{}", style(*h).bold(), " ".repeat(pad))
        })
        .collect();
    out.push(header_cells.join("  "));

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push(style(rule.join("──")).dim().to_string());

    for row in rows {
        let cells: Vec<String> = (0..columns)
            .map(|i| {
                let cell = row.get(i).map(|c| c.as_str()).unwrap_or("");
                let pad = widths[i].saturating_sub(measure_text_width(cell));
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        out.push(cells.join("  ").trim_end().to_string());
    }

    out
}

/// Prints a bordered table with a title, header row, and aligned columns.
pub fn print_table(title: &str, headers: &[&str], rows: &[Vec<String>], accent: &Style) {
    let body = table_lines(headers, rows);
    for line in panel_lines(title, &body, accent) {
        println!("{}", line);
    }
}

/// Prints a single red error line to standard error.
///
/// Every failure path in the tool produces exactly one of these; workflows
/// never raise past their boundary.
pub fn print_error(detail: &str) {
    eprintln!("{} {}", style("✗ Error:").red().bold(), detail);
}

/// Prints a single yellow informational notice (benign aborts, no-op states).
pub fn print_warning(msg: &str) {
    println!("{} {}", style("⚠ Info:").yellow().bold(), msg);
}

/// Prints a blue progress line announcing the step about to run.
pub fn print_status(msg: &str) {
    println!("{}", style(format!("→ {}...", msg)).blue().bold());
}
