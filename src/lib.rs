pub mod config;
pub mod data;
pub mod demo_data;
pub mod state;
pub mod table_display;
pub mod table_view;
pub mod ui;
pub mod utils;
