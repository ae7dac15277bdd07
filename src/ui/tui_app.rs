use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::config::{Config, IconConfig};
use crate::table_view::TableView;
use crate::ui::actions::{Action, UiCommand};
use crate::ui::badge::BadgePalette;
use crate::ui::key_mapper::KeyMapper;
use crate::ui::table_render_context::{TableRenderContext, TableRenderContextBuilder};
use crate::ui::table_renderer::render_table;
use crate::utils::logging::{get_log_buffer, LogRingBuffer};

const LOG_PANEL_HEIGHT: u16 = 8;

/// Interactive terminal host for a single table view
pub struct TuiApp {
    view: TableView,
    icons: IconConfig,
    palette: BadgePalette,
    key_mapper: KeyMapper,
    focused_header: Option<usize>,
    focused_row: Option<usize>,
    show_logs: bool,
    log_buffer: Option<LogRingBuffer>,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(view: TableView, config: &Config) -> Self {
        Self {
            view,
            icons: config.display.icons.clone(),
            palette: BadgePalette::from_config(&config.theme.badges),
            key_mapper: KeyMapper::new(),
            focused_header: None,
            focused_row: None,
            show_logs: false,
            log_buffer: get_log_buffer(),
            should_quit: false,
        }
    }

    pub fn with_log_buffer(mut self, buffer: LogRingBuffer) -> Self {
        self.log_buffer = Some(buffer);
        self
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn focused_header(&self) -> Option<usize> {
        self.focused_header
    }

    pub fn focused_row(&self) -> Option<usize> {
        self.focused_row
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(mut self) -> Result<()> {
        if let Err(e) = enable_raw_mode() {
            return Err(anyhow::anyhow!(
                "Failed to enable raw mode: {}. Try running with --print.",
                e
            ));
        }

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(anyhow::anyhow!(
                "Failed to setup terminal: {}. Try running with --print.",
                e
            ));
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(anyhow::anyhow!("Failed to create terminal: {}", e));
            }
        };

        let res = self.run_app(&mut terminal);

        // Always restore terminal, even on error
        let _ = disable_raw_mode();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        res.map_err(|e| anyhow::anyhow!("TUI error: {}", e))
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(target: "table_view", "Starting interactive table view");
        terminal.draw(|f| self.ui(f))?;

        while !self.should_quit {
            // Poll so the log panel keeps refreshing while idle
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(command) = self.key_mapper.map_key(&key) {
                            self.handle_command(command);
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => continue,
                }
            } else if !self.show_logs {
                continue;
            }
            terminal.draw(|f| self.ui(f))?;
        }

        info!(target: "table_view", "Leaving interactive table view");
        Ok(())
    }

    /// Apply one command. Returns true when anything visible changed.
    pub fn handle_command(&mut self, command: UiCommand) -> bool {
        let changed = match command {
            UiCommand::Table(action) => self.view.dispatch(action),
            UiCommand::FocusNextHeader => self.move_header_focus(true),
            UiCommand::FocusPreviousHeader => self.move_header_focus(false),
            UiCommand::SortFocusedHeader => match self.focused_header_label() {
                Some(header) => self.view.dispatch(Action::SortBy(header)),
                None => false,
            },
            UiCommand::CycleStatusFilter => {
                // The selector only exists alongside a caption
                if self.view.caption().is_some() {
                    let next = self.view.next_status_filter();
                    self.view.dispatch(Action::SetStatusFilter(next))
                } else {
                    false
                }
            }
            UiCommand::FocusNextRow => self.move_row_focus(true),
            UiCommand::FocusPreviousRow => self.move_row_focus(false),
            UiCommand::SelectFocusedRow => match self.focused_source_row() {
                Some(row) => self.view.dispatch(Action::SelectRow(row)),
                None => false,
            },
            UiCommand::ToggleLogPanel => {
                self.show_logs = !self.show_logs;
                true
            }
            UiCommand::Quit => {
                self.should_quit = true;
                false
            }
        };

        self.clamp_row_focus();
        changed
    }

    fn move_header_focus(&mut self, forward: bool) -> bool {
        let count = self.view.headers().len();
        if !self.view.is_sortable() || count == 0 {
            return false;
        }
        self.focused_header = Some(match (self.focused_header, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(idx), true) => (idx + 1) % count,
            (Some(idx), false) => (idx + count - 1) % count,
        });
        debug!(target: "table_view", "Header focus {:?}", self.focused_header);
        true
    }

    fn move_row_focus(&mut self, forward: bool) -> bool {
        let count = self.view.derive().page_rows.len();
        if count == 0 {
            return false;
        }
        let next = match (self.focused_row, forward) {
            (None, _) => 0,
            (Some(idx), true) => (idx + 1).min(count - 1),
            (Some(idx), false) => idx.saturating_sub(1),
        };
        let changed = self.focused_row != Some(next);
        self.focused_row = Some(next);
        changed
    }

    fn clamp_row_focus(&mut self) {
        if let Some(idx) = self.focused_row {
            let count = self.view.derive().page_rows.len();
            self.focused_row = if count == 0 {
                None
            } else {
                Some(idx.min(count - 1))
            };
        }
    }

    fn focused_header_label(&self) -> Option<String> {
        self.focused_header
            .and_then(|idx| self.view.headers().get(idx))
            .cloned()
    }

    fn focused_source_row(&self) -> Option<usize> {
        let idx = self.focused_row?;
        self.view.derive().page_rows.get(idx).copied()
    }

    /// Snapshot of everything the renderer needs for the current frame
    pub fn render_context(&self) -> TableRenderContext {
        let derived = self.view.derive();
        TableRenderContextBuilder::from_view(&self.view, &derived, &self.icons)
            .focus(self.focused_header, self.focused_row)
            .palette(self.palette)
            .build()
    }

    pub fn ui(&self, f: &mut Frame) {
        let log_height = if self.show_logs { LOG_PANEL_HEIGHT } else { 0 };
        let [table_area, help_area, log_area] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(log_height),
        ])
        .areas(f.area());

        let ctx = self.render_context();
        render_table(f, table_area, &ctx);
        self.render_help_line(f, help_area);

        if self.show_logs {
            self.render_log_panel(f, log_area);
        }
    }

    fn render_help_line(&self, f: &mut Frame, area: Rect) {
        let mut hints = vec!["←/→ page", "1-9 jump"];
        if self.view.is_sortable() {
            hints.push("Tab header");
            hints.push("Enter sort");
        }
        if self.view.caption().is_some() {
            hints.push("f filter");
        }
        hints.extend(["↑/↓ row", "Space select", "F5 logs", "q quit"]);

        let line = Line::from(Span::styled(
            hints.join("  |  "),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_log_panel(&self, f: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = match &self.log_buffer {
            Some(buffer) => buffer
                .get_recent(visible)
                .into_iter()
                .map(|entry| Line::from(entry.format_for_display()))
                .collect(),
            None => vec![Line::from("Logging not initialised")],
        };

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Logs (F5 to close)"),
        );
        f.render_widget(panel, area);
    }
}
