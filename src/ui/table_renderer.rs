// Pure table rendering function that depends only on TableRenderContext
// This is completely decoupled from the table view and the event loop

use crate::ui::pagination::PageStripItem;
use crate::ui::table_render_context::{PaginationBar, TableRenderContext};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const SELECT_LABEL: &str = "[ Select ]";
const SELECT_WIDTH: u16 = 10;

/// Render a table using only the provided context
pub fn render_table(f: &mut Frame, area: Rect, ctx: &TableRenderContext) {
    let caption_height = if ctx.caption.is_some() { 3 } else { 0 };
    let pagination_height = if ctx.pagination.is_some() { 3 } else { 0 };

    let [caption_area, table_area, pagination_area] = Layout::vertical([
        Constraint::Length(caption_height),
        Constraint::Min(3),
        Constraint::Length(pagination_height),
    ])
    .areas(area);

    if let Some(caption) = &ctx.caption {
        render_caption_bar(f, caption_area, caption, &ctx.filter_label);
    }

    render_body(f, table_area, ctx);

    if let Some(bar) = &ctx.pagination {
        render_pagination_bar(f, pagination_area, bar, &ctx.ellipsis);
    }
}

/// Title on the left, status filter selector on the right
fn render_caption_bar(f: &mut Frame, area: Rect, caption: &str, filter_label: &str) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [title_area, filter_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        caption.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, title_area);

    let filter = Paragraph::new(Line::from(vec![
        Span::styled(
            "Status Filter: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("< {} >", filter_label),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(filter, filter_area);
}

fn render_body(f: &mut Frame, area: Rect, ctx: &TableRenderContext) {
    let header = build_header_row(ctx);
    let rows = build_data_rows(ctx);

    let mut widths: Vec<Constraint> = ctx.headers.iter().map(|_| Constraint::Fill(1)).collect();
    widths.push(Constraint::Length(SELECT_WIDTH));

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Build the header row with sort indicators and host focus
fn build_header_row(ctx: &TableRenderContext) -> Row<'static> {
    let mut cells: Vec<Cell> = ctx
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let mut style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            if ctx.sortable && ctx.is_focused_header(idx) {
                style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
            }
            Cell::from(header.display_text()).style(style)
        })
        .collect();

    // Select button column has no header text
    cells.push(Cell::from(""));
    Row::new(cells).bottom_margin(1)
}

/// Build the data rows: plain cells, a badge for the status cell, and the
/// Select button
fn build_data_rows(ctx: &TableRenderContext) -> Vec<Row<'static>> {
    ctx.rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let mut cells: Vec<Cell> = row
                .cells
                .iter()
                .map(|cell| match cell.badge {
                    Some(badge) => Cell::from(Line::from(Span::styled(
                        format!(" {} ", cell.text),
                        ctx.palette.style_for_badge(badge),
                    ))),
                    None => Cell::from(cell.text.clone()).style(Style::default().fg(Color::Gray)),
                })
                .collect();

            cells.push(
                Cell::from(SELECT_LABEL).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            );

            let mut row_widget = Row::new(cells);
            if ctx.is_focused_row(row_idx) {
                row_widget = row_widget.style(Style::default().bg(Color::DarkGray));
            }
            row_widget
        })
        .collect()
}

/// "Previous  1 … 4 5 6 7 … 12  Next", with disabled buttons dimmed
fn render_pagination_bar(f: &mut Frame, area: Rect, bar: &PaginationBar, ellipsis: &str) {
    let line = Line::from(pagination_spans(bar, ellipsis));
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

/// Spans for the pagination bar, exposed for the static renderer
pub fn pagination_spans(bar: &PaginationBar, ellipsis: &str) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled("Previous", nav_style(bar.previous_enabled))];
    spans.push(Span::raw("  "));

    for item in &bar.strip {
        match item {
            PageStripItem::Page {
                number,
                is_current: true,
            } => spans.push(Span::styled(
                format!("[{}]", number),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            PageStripItem::Page { number, .. } => {
                spans.push(Span::raw(format!(" {} ", number)));
            }
            PageStripItem::Ellipsis => spans.push(Span::raw(format!(" {} ", ellipsis))),
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled("Next", nav_style(bar.next_enabled)));
    spans
}

/// Plain-text form of the pagination bar
pub fn pagination_text(bar: &PaginationBar, ellipsis: &str) -> String {
    pagination_spans(bar, ellipsis)
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pagination::page_strip;

    #[test]
    fn test_pagination_text() {
        let bar = PaginationBar {
            current_page: 6,
            total_pages: 12,
            strip: page_strip(6, 12, 4),
            previous_enabled: true,
            next_enabled: true,
        };
        assert_eq!(
            pagination_text(&bar, "…"),
            "Previous   1  …  4  5 [6] 7  …  12   Next"
        );
    }

    #[test]
    fn test_empty_pagination_text() {
        let bar = PaginationBar {
            current_page: 1,
            total_pages: 0,
            strip: Vec::new(),
            previous_enabled: false,
            next_enabled: false,
        };
        assert_eq!(pagination_text(&bar, "..."), "Previous    Next");
    }
}
