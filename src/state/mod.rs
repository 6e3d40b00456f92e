//! Application state management.
//!
//! State is organized into logical groupings: the form menu (selections,
//! field buffers, autocomplete sources), the graph pane, and the shareable
//! URL state.

mod fields;
mod graph_view;
mod menu;
pub mod url_state;

pub use fields::{visible_fields, FieldId, FieldVisibility};
pub use graph_view::{GraphPhase, GraphViewState};
pub use menu::{field_suggestions, FieldInputs, MenuState};

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Form menu state (datasets, algorithms, value fields)
    pub menu: MenuState,

    /// Graph pane state
    pub graph: GraphViewState,

    /// Application status message displayed in the top bar
    pub status_message: String,

    /// Set by the form when the selected dataset's menu must be (re)fetched
    pub menu_fetch_requested: bool,

    /// Set by the form when the Graph button is pressed
    pub graph_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            status_message: "Ready".to_string(),
            ..Default::default()
        }
    }
}
