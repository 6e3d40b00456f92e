//! UI modules for the Climate Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title and status
//! - Left panel: The graph request form
//! - Central canvas: The rendered graph

mod autocomplete;
mod canvas;
mod left_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use left_panel::render_left_panel;
pub use top_bar::render_top_bar;
