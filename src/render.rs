use crate::presentation::BreakdownView;
use colored::Colorize;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Marker appended to labels that carry the informational icon
pub const INFO_MARKER: &str = "(i)";

/// Render a breakdown view for the terminal
///
/// Header line, a two-column table of the rows, then the popover copy when
/// the view has one.
pub fn render_table(view: &BreakdownView) -> String {
    let mut out = String::new();

    let header = if view.show_info_icon {
        format!("{} {}", view.header, INFO_MARKER)
    } else {
        view.header.clone()
    };
    out.push_str(&format!("{}\n", header.bold()));

    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let last = view.rows.len().saturating_sub(1);
    for (idx, row) in view.rows.iter().enumerate() {
        let label = if row.info_icon {
            format!("{} {}", row.label, INFO_MARKER)
        } else {
            row.label.to_string()
        };

        let mut value = Cell::new(&row.value).set_alignment(CellAlignment::Right);
        if idx == last {
            value = value.fg(Color::Green);
        }
        table.add_row(vec![Cell::new(label), value]);

        // Blank spacer row stands in for the muted divider
        if row.divider_after && idx != last {
            table.add_row(vec![Cell::new(""), Cell::new("")]);
        }
    }
    out.push_str(&table.to_string());
    out.push('\n');

    if let Some(popover) = &view.popover {
        out.push('\n');
        out.push_str(&format!("{}\n", popover.title.yellow()));
        for line in &popover.lines {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}
