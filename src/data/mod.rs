//! Data layer for DataTable/DataView architecture
//!
//! This module provides the data abstraction layer that separates
//! data storage from presentation.

pub mod data_view;
pub mod datatable;
pub mod loaders;
pub mod value_compare;
