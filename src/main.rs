use anyhow::{anyhow, Context, Result};
use crossterm::style::Stylize;
use std::path::Path;
use tracing::{info, warn};

use table_view::config::config::Config;
use table_view::data::datatable::DataTable;
use table_view::data::loaders::{load_csv, load_json};
use table_view::demo_data;
use table_view::table_display::display_table;
use table_view::table_view::{TableView, TableViewProps};
use table_view::ui::actions::Action;
use table_view::ui::badge::BadgePalette;
use table_view::ui::table_render_context::TableRenderContextBuilder;
use table_view::ui::tui_app::TuiApp;
use table_view::utils::logging::init_tracing;

const DEFAULT_CAPTION: &str = "Bookings";

fn print_help() {
    println!("{}", "table-view - sortable, paginated status table".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  table-view [OPTIONS] [FILE.csv|FILE.json]");
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}            - Print the table once and exit", "--print".green());
    println!("  {}           - Start on page N", "--page N".green());
    println!("  {}  - Only show rows with this status", "--filter STATUS".green());
    println!("  {}      - Sort on HEADER before showing", "--sort HEADER".green());
    println!("  {}          - Disable header sorting", "--no-sort".green());
    println!("  {}    - Show all rows on one page", "--no-pagination".green());
    println!("  {}   - Title bar text (default \"{}\")", "--caption TEXT".green(), DEFAULT_CAPTION);
    println!("  {}        - Hide the title bar and filter", "--no-caption".green());
    println!("  {}  - Write a commented config file", "--generate-config".green());
    println!();
    println!("Without a file the built-in sample bookings are shown.");
}

/// Value following a flag, e.g. `--page 3`
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + 1))
        .map(|s| s.as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn generate_config() -> Result<()> {
    let path = Config::get_config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating config directory {:?}", parent))?;
    }
    std::fs::write(&path, Config::create_default_with_comments())
        .with_context(|| format!("Error writing config file {:?}", path))?;
    println!("Configuration file created at: {:?}", path);
    Ok(())
}

fn load_table(path: &str) -> Result<DataTable> {
    let lower = path.to_lowercase();
    if lower.ends_with(".json") {
        load_json(Path::new(path))
    } else if lower.ends_with(".csv") {
        load_csv(Path::new(path))
    } else {
        Err(anyhow!("Unsupported file type: {} (expected .csv or .json)", path))
    }
}

fn main() -> Result<()> {
    let log_buffer = init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        print_help();
        return Ok(());
    }

    if has_flag(&args, "--generate-config") {
        return generate_config();
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!(target: "config", "Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // Values that belong to a flag are not data files
    let value_flags = ["--page", "--filter", "--sort", "--caption"];
    let data_file = args
        .iter()
        .enumerate()
        .filter(|(idx, arg)| {
            !arg.starts_with("--")
                && !(*idx > 0 && value_flags.contains(&args[idx - 1].as_str()))
        })
        .map(|(_, arg)| arg.clone())
        .next();

    let (headers, rows) = match &data_file {
        Some(path) => {
            let table = load_table(path)?;
            info!(target: "table_view", "Loaded {} rows from {}", table.row_count(), path);
            (table.headers().to_vec(), table.rows().to_vec())
        }
        None => (demo_data::booking_headers(), demo_data::bookings()),
    };

    let mut props = TableViewProps::new(headers, rows)
        .sortable(!has_flag(&args, "--no-sort"))
        .paginated(!has_flag(&args, "--no-pagination"));
    if !has_flag(&args, "--no-caption") {
        props = props.with_caption(flag_value(&args, "--caption").unwrap_or(DEFAULT_CAPTION));
    }

    let mut view = TableView::new(props).with_options(config.table_options());

    if let Some(header) = flag_value(&args, "--sort") {
        view.dispatch(Action::SortBy(header.to_string()));
    }
    if let Some(status) = flag_value(&args, "--filter") {
        view.dispatch(Action::SetStatusFilter(Some(status.to_string())));
    }
    if let Some(page) = flag_value(&args, "--page") {
        let page: usize = page
            .parse()
            .with_context(|| format!("Invalid page number: {}", page))?;
        view.dispatch(Action::GoToPage(page));
    }

    if has_flag(&args, "--print") {
        let derived = view.derive();
        let ctx = TableRenderContextBuilder::from_view(&view, &derived, &config.display.icons)
            .palette(BadgePalette::from_config(&config.theme.badges))
            .build();
        print!("{}", display_table(&ctx));
        return Ok(());
    }

    TuiApp::new(view, &config).with_log_buffer(log_buffer).run()
}
