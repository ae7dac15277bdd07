// Table rendering context that encapsulates all data needed for rendering
// This decouples the table renderer from the table view internals

use crate::config::config::IconConfig;
use crate::state::SortOrder;
use crate::table_view::{DerivedView, TableView};
use crate::ui::badge::{BadgeColor, BadgePalette};
use crate::ui::pagination::PageStripItem;

/// One header cell, with its direction glyph if it carries the indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub indicator: Option<String>,
}

impl HeaderCell {
    pub fn display_text(&self) -> String {
        match &self.indicator {
            Some(glyph) => format!("{} {}", self.label, glyph),
            None => self.label.clone(),
        }
    }
}

/// One body cell, already converted to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCell {
    pub text: String,
    /// Set on the status cell when it has something to show
    pub badge: Option<BadgeColor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    /// Index of the row in the source data, passed to the Select hook
    pub source_index: usize,
    pub cells: Vec<RenderCell>,
}

/// State of the Previous / page numbers / Next bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub current_page: usize,
    pub total_pages: usize,
    pub strip: Vec<PageStripItem>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// All the data needed to render a table, collected in one place
#[derive(Debug, Clone)]
pub struct TableRenderContext {
    // ========== Title Bar ==========
    /// Caption; when present the title bar and filter selector are shown
    pub caption: Option<String>,

    /// Current filter selection as shown in the selector
    pub filter_label: String,

    // ========== Columns & Rows ==========
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderRow>,
    pub sortable: bool,

    // ========== Pagination ==========
    /// `None` when pagination is off
    pub pagination: Option<PaginationBar>,
    pub ellipsis: String,

    // ========== Host Focus ==========
    pub focused_header: Option<usize>,
    /// Position within `rows`
    pub focused_row: Option<usize>,

    pub palette: BadgePalette,
}

impl TableRenderContext {
    pub fn is_focused_header(&self, index: usize) -> bool {
        self.focused_header == Some(index)
    }

    pub fn is_focused_row(&self, index: usize) -> bool {
        self.focused_row == Some(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Builder for TableRenderContext to make construction easier
pub struct TableRenderContextBuilder {
    context: TableRenderContext,
}

impl Default for TableRenderContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderContextBuilder {
    pub fn new() -> Self {
        Self {
            context: TableRenderContext {
                caption: None,
                filter_label: "All".to_string(),
                headers: Vec::new(),
                rows: Vec::new(),
                sortable: false,
                pagination: None,
                ellipsis: IconConfig::default().ellipsis,
                focused_header: None,
                focused_row: None,
                palette: BadgePalette::default(),
            },
        }
    }

    /// Fill headers, rows, title bar and pagination from a view and its
    /// derived state
    pub fn from_view(view: &TableView, derived: &DerivedView, icons: &IconConfig) -> Self {
        let headers = view
            .headers()
            .iter()
            .enumerate()
            .map(|(idx, label)| HeaderCell {
                label: label.clone(),
                indicator: match derived.sort_indicator {
                    Some((column, SortOrder::Ascending)) if column == idx => {
                        Some(icons.sort_ascending.clone())
                    }
                    Some((column, SortOrder::Descending)) if column == idx => {
                        Some(icons.sort_descending.clone())
                    }
                    _ => None,
                },
            })
            .collect();

        let rows = derived
            .page_rows
            .iter()
            .filter_map(|&source_index| {
                let row = view.row(source_index)?;
                let last = row.len().checked_sub(1);
                let cells = row
                    .values
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let text = cell.to_string();
                        let badge = (Some(col) == last && cell.is_truthy())
                            .then(|| BadgeColor::for_status(&text));
                        RenderCell { text, badge }
                    })
                    .collect();
                Some(RenderRow {
                    source_index,
                    cells,
                })
            })
            .collect();

        let pagination = view.is_paginated().then(|| PaginationBar {
            current_page: derived.current_page,
            total_pages: derived.total_pages,
            strip: derived.page_strip.clone(),
            previous_enabled: derived.can_go_previous,
            next_enabled: derived.can_go_next,
        });

        let filter_label = view
            .state()
            .status_filter
            .clone()
            .unwrap_or_else(|| "All".to_string());

        let mut builder = Self::new()
            .headers(headers)
            .rows(rows)
            .pagination(pagination)
            .filter_label(filter_label)
            .sortable(view.is_sortable())
            .ellipsis(icons.ellipsis.clone());
        if let Some(caption) = view.caption() {
            builder = builder.caption(caption);
        }
        builder
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.context.caption = Some(caption.into());
        self
    }

    pub fn filter_label(mut self, label: impl Into<String>) -> Self {
        self.context.filter_label = label.into();
        self
    }

    pub fn headers(mut self, headers: Vec<HeaderCell>) -> Self {
        self.context.headers = headers;
        self
    }

    pub fn rows(mut self, rows: Vec<RenderRow>) -> Self {
        self.context.rows = rows;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.context.sortable = sortable;
        self
    }

    pub fn pagination(mut self, bar: Option<PaginationBar>) -> Self {
        self.context.pagination = bar;
        self
    }

    pub fn ellipsis(mut self, glyph: impl Into<String>) -> Self {
        self.context.ellipsis = glyph.into();
        self
    }

    pub fn focus(mut self, header: Option<usize>, row: Option<usize>) -> Self {
        self.context.focused_header = header;
        self.context.focused_row = row;
        self
    }

    pub fn palette(mut self, palette: BadgePalette) -> Self {
        self.context.palette = palette;
        self
    }

    pub fn build(self) -> TableRenderContext {
        self.context
    }
}
