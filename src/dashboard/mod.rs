//! Dashboard module
//!
//! Provides the page with the IPC chart and summary cards, the partials that
//! the selection controls and chart clicks swap in, and the data table page.

mod cards;
mod charts;
mod controls;
mod handlers;
mod tables;

pub use handlers::{
    get_dashboard_page, get_data_page, get_selected_point, post_picker_selection,
    post_range_shortcut,
};
