//! Form field identity and visibility.
//!
//! Which value fields the form shows depends on the selected dataset: time
//! fields only appear for datasets with a time dimension, grid fields only
//! for gridded datasets. Visibility is an explicit record keyed by field
//! identifier, recomputed from the fetched menu by a pure function, rather
//! than show/hide side effects scattered through the UI code.

use crate::server::DatasetMenu;

/// Identifies one of the six value fields in the graph form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    StartTime,
    EndTime,
    TopLat,
    BottomLat,
    LeftLon,
    RightLon,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::StartTime,
        FieldId::EndTime,
        FieldId::TopLat,
        FieldId::BottomLat,
        FieldId::LeftLon,
        FieldId::RightLon,
    ];

    /// Label shown next to the field's text edit.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::StartTime => "Start time",
            FieldId::EndTime => "End time",
            FieldId::TopLat => "Top lat",
            FieldId::BottomLat => "Bottom lat",
            FieldId::LeftLon => "Left lon",
            FieldId::RightLon => "Right lon",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// The set of currently visible form fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldVisibility {
    visible: [bool; FieldId::ALL.len()],
}

impl FieldVisibility {
    /// All fields hidden, the state between dataset selection and menu
    /// arrival.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, field: FieldId) -> bool {
        self.visible[field.index()]
    }

    pub fn any_visible(&self) -> bool {
        self.visible.iter().any(|v| *v)
    }

    fn show(&mut self, field: FieldId) {
        self.visible[field.index()] = true;
    }
}

/// Maps a fetched dataset menu to the next visible-field set.
pub fn visible_fields(menu: &DatasetMenu) -> FieldVisibility {
    let mut visibility = FieldVisibility::hidden();
    if menu.has_time() {
        visibility.show(FieldId::StartTime);
        visibility.show(FieldId::EndTime);
    }
    if menu.has_grid() {
        visibility.show(FieldId::TopLat);
        visibility.show(FieldId::BottomLat);
        visibility.show(FieldId::LeftLon);
        visibility.show(FieldId::RightLon);
    }
    visibility
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ValidRange;

    fn menu(times: Vec<&str>, lats: Vec<&str>, lons: Vec<&str>) -> DatasetMenu {
        DatasetMenu {
            dataset: "test".to_string(),
            valid_range: ValidRange::default(),
            times: times.into_iter().map(String::from).collect(),
            lats: lats.into_iter().map(String::from).collect(),
            lons: lons.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_time_only_dataset_shows_time_fields() {
        let visibility = visible_fields(&menu(vec!["t1", "t2"], vec![], vec![]));
        assert!(visibility.is_visible(FieldId::StartTime));
        assert!(visibility.is_visible(FieldId::EndTime));
        assert!(!visibility.is_visible(FieldId::TopLat));
        assert!(!visibility.is_visible(FieldId::LeftLon));
    }

    #[test]
    fn test_gridded_dataset_shows_all_grid_fields() {
        let visibility = visible_fields(&menu(vec![], vec!["10", "5"], vec!["-20"]));
        for field in [
            FieldId::TopLat,
            FieldId::BottomLat,
            FieldId::LeftLon,
            FieldId::RightLon,
        ] {
            assert!(visibility.is_visible(field));
        }
        assert!(!visibility.is_visible(FieldId::StartTime));
    }

    #[test]
    fn test_empty_menu_hides_everything() {
        let visibility = visible_fields(&menu(vec![], vec![], vec![]));
        assert!(!visibility.any_visible());
        assert_eq!(visibility, FieldVisibility::hidden());
    }
}
