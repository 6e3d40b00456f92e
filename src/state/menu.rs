//! Form menu state: selections, field buffers, and autocomplete sources.

use crate::query::GraphOptions;
use crate::server::DatasetMenu;
use crate::state::fields::{visible_fields, FieldId, FieldVisibility};

/// Raw text buffers for the six value fields.
///
/// These hold whatever the widgets currently contain; presence semantics are
/// applied when they are turned into [`GraphOptions`].
#[derive(Debug, Clone, Default)]
pub struct FieldInputs {
    pub start_time: String,
    pub end_time: String,
    pub top_lat: String,
    pub bottom_lat: String,
    pub left_lon: String,
    pub right_lon: String,
}

impl FieldInputs {
    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::StartTime => &mut self.start_time,
            FieldId::EndTime => &mut self.end_time,
            FieldId::TopLat => &mut self.top_lat,
            FieldId::BottomLat => &mut self.bottom_lat,
            FieldId::LeftLon => &mut self.left_lon,
            FieldId::RightLon => &mut self.right_lon,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// State behind the graph form: fetched name lists, the current selections,
/// field buffers, and the active dataset's menu data.
#[derive(Default)]
pub struct MenuState {
    /// Dataset names from the `datalist` endpoint.
    pub datasets: Vec<String>,

    /// Algorithm names from the `alglist` endpoint.
    pub algorithms: Vec<String>,

    /// Currently selected dataset, if any.
    pub selected_dataset: Option<String>,

    /// Currently selected algorithm. Empty means none selected and the
    /// algorithm segment is omitted from the request.
    pub selected_algorithm: String,

    /// Raw text buffers for the value fields.
    pub fields: FieldInputs,

    /// Which value fields the form shows for the current dataset.
    pub visibility: FieldVisibility,

    /// Menu data (valid ranges, autocomplete sources) for the current
    /// dataset, once fetched.
    pub menu: Option<DatasetMenu>,

    /// Whether a menu fetch is in flight for the current dataset.
    pub menu_loading: bool,
}

impl MenuState {
    /// Switches the form to a dataset: fields are cleared and hidden until
    /// the dataset's menu arrives.
    pub fn select_dataset(&mut self, name: String) {
        if self.selected_dataset.as_deref() == Some(name.as_str()) {
            return;
        }
        self.selected_dataset = Some(name);
        self.fields.clear();
        self.visibility = FieldVisibility::hidden();
        self.menu = None;
        self.menu_loading = true;
    }

    /// Installs a fetched menu. Stale menus (the selection moved on while
    /// the fetch was in flight) are ignored.
    pub fn apply_menu(&mut self, menu: DatasetMenu) -> bool {
        if self.selected_dataset.as_deref() != Some(menu.dataset.as_str()) {
            log::debug!("Ignoring stale menu for {}", menu.dataset);
            return false;
        }
        self.visibility = visible_fields(&menu);
        self.menu = Some(menu);
        self.menu_loading = false;
        true
    }

    /// Snapshot of the form as encoder input. Empty buffers become absent
    /// fields.
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions::from_fields(
            &self.fields.start_time,
            &self.fields.end_time,
            &self.fields.top_lat,
            &self.fields.bottom_lat,
            &self.fields.left_lon,
            &self.fields.right_lon,
            &self.selected_algorithm,
        )
    }
}

/// Autocomplete source within a fetched menu for one field.
///
/// Free function so the UI can borrow suggestions and field buffers from
/// disjoint parts of [`MenuState`] at once.
pub fn field_suggestions(menu: &DatasetMenu, field: FieldId) -> &[String] {
    match field {
        FieldId::StartTime | FieldId::EndTime => &menu.times,
        FieldId::TopLat | FieldId::BottomLat => &menu.lats,
        FieldId::LeftLon | FieldId::RightLon => &menu.lons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ValidRange;

    fn sample_menu(dataset: &str) -> DatasetMenu {
        DatasetMenu {
            dataset: dataset.to_string(),
            valid_range: ValidRange::default(),
            times: vec!["t1".to_string(), "t2".to_string()],
            lats: vec!["10".to_string()],
            lons: vec!["-20".to_string()],
        }
    }

    #[test]
    fn test_select_dataset_clears_and_hides_fields() {
        let mut state = MenuState::default();
        state.select_dataset("buoy42".to_string());
        assert!(state.apply_menu(sample_menu("buoy42")));
        state.fields.start_time = "t1".to_string();

        state.select_dataset("ocean1".to_string());
        assert!(state.fields.start_time.is_empty());
        assert!(!state.visibility.any_visible());
        assert!(state.menu.is_none());
        assert!(state.menu_loading);
    }

    #[test]
    fn test_reselecting_same_dataset_keeps_fields() {
        let mut state = MenuState::default();
        state.select_dataset("buoy42".to_string());
        assert!(state.apply_menu(sample_menu("buoy42")));
        state.fields.start_time = "t1".to_string();

        state.select_dataset("buoy42".to_string());
        assert_eq!(state.fields.start_time, "t1");
        assert!(state.menu.is_some());
    }

    #[test]
    fn test_stale_menu_is_rejected() {
        let mut state = MenuState::default();
        state.select_dataset("buoy42".to_string());
        state.select_dataset("ocean1".to_string());

        // The buoy42 fetch completes after the selection moved on
        assert!(!state.apply_menu(sample_menu("buoy42")));
        assert!(state.menu.is_none());
        assert!(state.menu_loading);

        assert!(state.apply_menu(sample_menu("ocean1")));
        assert!(!state.menu_loading);
        assert!(state.visibility.is_visible(FieldId::StartTime));
    }

    #[test]
    fn test_graph_options_presence_semantics() {
        let mut state = MenuState::default();
        state.fields.start_time = "t1".to_string();
        state.fields.top_lat = "  ".to_string();
        state.selected_algorithm = "kmeans".to_string();

        let options = state.graph_options();
        assert_eq!(options.start_time.as_deref(), Some("t1"));
        assert!(options.top_lat.is_none());
        assert_eq!(options.algorithm.as_deref(), Some("kmeans"));
    }

    #[test]
    fn test_suggestions_per_field() {
        let menu = sample_menu("buoy42");
        assert_eq!(field_suggestions(&menu, FieldId::StartTime), ["t1", "t2"]);
        assert_eq!(field_suggestions(&menu, FieldId::EndTime), ["t1", "t2"]);
        assert_eq!(field_suggestions(&menu, FieldId::BottomLat), ["10"]);
        assert_eq!(field_suggestions(&menu, FieldId::RightLon), ["-20"]);
    }
}
