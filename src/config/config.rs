use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::table_view::TableViewOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when pagination is on
    pub page_size: usize,

    /// Page-number buttons in the centred window
    pub max_visible_pages: usize,

    /// Header that shows the sort direction indicator, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_indicator_column: Option<String>,

    /// Values offered by the status filter selector (after "All")
    pub status_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use Unicode glyphs for icons
    pub use_glyphs: bool,

    /// Icons for different states (can be overridden)
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub sort_ascending: String,
    pub sort_descending: String,
    pub ellipsis: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Status badge colours as `#RRGGBB`
    pub badges: BadgeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub failed: String,
    pub waiting: String,
    pub paid: String,
    pub neutral: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_visible_pages: 4,
            sort_indicator_column: Some("TIMESTAMP".to_string()),
            status_options: vec![
                "Failed".to_string(),
                "Waiting".to_string(),
                "Paid".to_string(),
            ],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_glyphs: true, // Default to glyphs, can be disabled
            icons: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        // Down arrow while ascending, up arrow while descending
        Self {
            sort_ascending: "↓".to_string(),
            sort_descending: "↑".to_string(),
            ellipsis: "…".to_string(),
        }
    }
}

impl IconConfig {
    /// Get simple ASCII alternatives for terminals without glyph support
    pub fn simple() -> Self {
        Self {
            sort_ascending: "v".to_string(),
            sort_descending: "^".to_string(),
            ellipsis: "...".to_string(),
        }
    }

    /// Replace any icon still at its glyph default with the ASCII form
    fn without_default_glyphs(self) -> Self {
        let glyphs = Self::default();
        let ascii = Self::simple();
        let pick = |value: String, glyph: String, fallback: String| {
            if value == glyph {
                fallback
            } else {
                value
            }
        };
        Self {
            sort_ascending: pick(self.sort_ascending, glyphs.sort_ascending, ascii.sort_ascending),
            sort_descending: pick(
                self.sort_descending,
                glyphs.sort_descending,
                ascii.sort_descending,
            ),
            ellipsis: pick(self.ellipsis, glyphs.ellipsis, ascii.ellipsis),
        }
    }
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            failed: "#FEB2B2".to_string(),
            waiting: "#FEFCBF".to_string(),
            paid: "#9AE6B4".to_string(),
            neutral: "#E2E8F0".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config = Self::from_toml(&contents)?;
        debug!(target: "config", "Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Parse config text. With glyphs disabled, icons left at their glyph
    /// defaults switch to ASCII; icons set explicitly are kept.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        if !config.display.use_glyphs {
            config.display.icons = config.display.icons.without_default_glyphs();
        }
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        crate::utils::app_paths::AppPaths::config_file()
    }

    /// Table behaviour options, with invalid values replaced by defaults
    pub fn table_options(&self) -> TableViewOptions {
        let defaults = TableConfig::default();
        let mut page_size = self.table.page_size;
        if page_size == 0 {
            warn!(target: "config", "page_size must be at least 1, using {}", defaults.page_size);
            page_size = defaults.page_size;
        }
        let mut max_visible_pages = self.table.max_visible_pages;
        if max_visible_pages == 0 {
            warn!(
                target: "config",
                "max_visible_pages must be at least 1, using {}",
                defaults.max_visible_pages
            );
            max_visible_pages = defaults.max_visible_pages;
        }

        TableViewOptions {
            page_size,
            max_visible_pages,
            sort_indicator_column: self
                .table
                .sort_indicator_column
                .clone()
                .filter(|column| !column.is_empty()),
            status_options: self.table.status_options.clone(),
        }
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r##"# Table View Configuration File
# Location: ~/.config/table-view/config.toml (Linux)
#           ~/Library/Application Support/table-view/config.toml (macOS)
#           %APPDATA%\table-view\config.toml (Windows)

[table]
# Rows shown per page when pagination is enabled
page_size = 5

# Number of page buttons in the centred window of the pagination bar
max_visible_pages = 4

# Header that shows the sort direction arrow ("" for none)
sort_indicator_column = "TIMESTAMP"

# Options offered by the status filter, after "All"
status_options = ["Failed", "Waiting", "Paid"]

[display]
# Use Unicode glyphs for icons
# Set to false for ASCII-only mode (better compatibility)
use_glyphs = true

# Icons left at these defaults switch to ASCII when use_glyphs = false
[display.icons]
sort_ascending = "↓"
sort_descending = "↑"
ellipsis = "…"

# Status badge background colours
[theme.badges]
failed = "#FEB2B2"
waiting = "#FEFCBF"
paid = "#9AE6B4"
neutral = "#E2E8F0"
"##
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.table.page_size, 5);
        assert_eq!(config.table.max_visible_pages, 4);
        assert_eq!(
            config.table.sort_indicator_column.as_deref(),
            Some("TIMESTAMP")
        );
        assert!(config.display.use_glyphs);
    }

    #[test]
    fn test_simple_icons() {
        let icons = IconConfig::simple();
        assert_eq!(icons.sort_ascending, "v");
        assert_eq!(icons.ellipsis, "...");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.table.page_size, parsed.table.page_size);
        assert_eq!(config.table.status_options, parsed.table.status_options);
    }

    #[test]
    fn test_commented_default_parses() {
        let config = Config::from_toml(&Config::create_default_with_comments()).unwrap();
        assert_eq!(config.table.page_size, 5);
        assert_eq!(config.theme.badges.paid, "#9AE6B4");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("[table]\npage_size = 10\n").unwrap();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.max_visible_pages, 4);
        assert_eq!(config.table.status_options.len(), 3);
    }

    #[test]
    fn test_glyphs_disabled_uses_ascii() {
        let config = Config::from_toml("[display]\nuse_glyphs = false\n").unwrap();
        assert_eq!(config.display.icons.sort_descending, "^");
    }

    #[test]
    fn test_glyphs_disabled_keeps_explicit_icons() {
        let config = Config::from_toml(
            "[display]\nuse_glyphs = false\n\n[display.icons]\nsort_ascending = \"asc\"\n",
        )
        .unwrap();
        assert_eq!(config.display.icons.sort_ascending, "asc");
        assert_eq!(config.display.icons.sort_descending, "^");
        assert_eq!(config.display.icons.ellipsis, "...");
    }

    #[test]
    fn test_invalid_sizes_fall_back() {
        let config = Config::from_toml("[table]\npage_size = 0\nmax_visible_pages = 0\n").unwrap();
        let options = config.table_options();
        assert_eq!(options.page_size, 5);
        assert_eq!(options.max_visible_pages, 4);
    }

    #[test]
    fn test_empty_indicator_column_disables_indicator() {
        let config = Config::from_toml("[table]\nsort_indicator_column = \"\"\n").unwrap();
        assert!(config.table_options().sort_indicator_column.is_none());
    }
}
