use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};
use ratatui::style::Color;

use crate::ui::table_render_context::TableRenderContext;
use crate::ui::table_renderer::pagination_text;

/// Render the table as static text for non-interactive output
pub fn display_table(ctx: &TableRenderContext) -> String {
    let mut output = String::new();

    if let Some(caption) = &ctx.caption {
        output.push_str(&format!(
            "{}    Status Filter: {}\n",
            caption, ctx.filter_label
        ));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers: Vec<Cell> = ctx
        .headers
        .iter()
        .map(|h| Cell::new(h.display_text()).add_attribute(Attribute::Bold))
        .collect();
    headers.push(Cell::new(""));
    table.set_header(headers);

    for row in &ctx.rows {
        let mut cells: Vec<Cell> = row
            .cells
            .iter()
            .map(|cell| match cell.badge {
                Some(badge) => Cell::new(&cell.text)
                    .bg(to_table_color(ctx.palette.color(badge)))
                    .fg(TableColor::Black)
                    .add_attribute(Attribute::Bold),
                None => Cell::new(&cell.text),
            })
            .collect();
        cells.push(Cell::new("[ Select ]"));
        table.add_row(cells);
    }

    output.push_str(&table.to_string());
    output.push('\n');

    if let Some(bar) = &ctx.pagination {
        output.push_str(&pagination_text(bar, &ctx.ellipsis));
        output.push('\n');
    }

    output
}

fn to_table_color(color: Color) -> TableColor {
    match color {
        Color::Rgb(r, g, b) => TableColor::Rgb { r, g, b },
        _ => TableColor::Grey,
    }
}
