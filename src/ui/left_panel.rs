//! Left panel UI: the graph request form.

use crate::state::{field_suggestions, AppState, FieldId, MenuState};
use crate::ui::autocomplete::autocomplete_field;
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_left_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("left_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .max_width(400.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Graph Request");
                ui.separator();

                render_dataset_section(ui, state);
                ui.add_space(5.0);

                render_algorithm_section(ui, state);
                ui.add_space(5.0);

                render_valid_range(ui, &state.menu);
                ui.add_space(5.0);

                render_fields(ui, &mut state.menu);
                ui.add_space(10.0);

                render_graph_button(ui, state);
            });
        });
}

fn render_dataset_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(RichText::new("Dataset").strong());

    let selected_text = state
        .menu
        .selected_dataset
        .clone()
        .unwrap_or_else(|| "Select a dataset".to_string());

    let mut picked = None;
    egui::ComboBox::from_id_salt("dataset_selector")
        .selected_text(selected_text)
        .width(180.0)
        .show_ui(ui, |ui| {
            for name in &state.menu.datasets {
                let is_selected = state.menu.selected_dataset.as_deref() == Some(name.as_str());
                if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                    picked = Some(name.clone());
                }
            }
        });

    if let Some(name) = picked {
        state.menu.select_dataset(name);
        state.menu_fetch_requested = true;
    }

    if state.menu.menu_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading dataset menu...").small());
        });
    }
}

fn render_algorithm_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(RichText::new("Algorithm").strong());

    let selected_text = if state.menu.selected_algorithm.is_empty() {
        "(none)".to_string()
    } else {
        state.menu.selected_algorithm.clone()
    };

    egui::ComboBox::from_id_salt("algorithm_selector")
        .selected_text(selected_text)
        .width(180.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.menu.selected_algorithm, String::new(), "(none)");
            for name in &state.menu.algorithms {
                ui.selectable_value(&mut state.menu.selected_algorithm, name.clone(), name);
            }
        });
}

/// Valid range summary, phrased the way the server describes its datasets.
fn render_valid_range(ui: &mut egui::Ui, menu: &MenuState) {
    let Some(menu) = &menu.menu else {
        return;
    };

    ui.group(|ui| {
        if let Some(time) = &menu.valid_range.time {
            ui.label(
                RichText::new(format!("Time ranges from {} to {}", time.start, time.end)).small(),
            );
        }
        if let Some(grid) = &menu.valid_range.grid {
            ui.label(
                RichText::new(format!(
                    "Latitude ranges from {} to {} in increments of {} degrees",
                    grid.bottom, grid.top, grid.lat_inc
                ))
                .small(),
            );
            ui.label(
                RichText::new(format!(
                    "Longitude ranges from {} to {} in increments of {} degrees",
                    grid.left, grid.right, grid.lon_inc
                ))
                .small(),
            );
        }
        if menu.valid_range.time.is_none() && menu.valid_range.grid.is_none() {
            ui.label(RichText::new("No range information for this dataset").small());
        }
    });
}

fn render_fields(ui: &mut egui::Ui, menu: &mut MenuState) {
    // Disjoint borrows: suggestion lists from the fetched menu, buffers
    // from the field inputs.
    let MenuState {
        fields,
        menu,
        visibility,
        ..
    } = menu;

    for field in FieldId::ALL {
        if !visibility.is_visible(field) {
            continue;
        }
        let suggestions = menu
            .as_ref()
            .map(|m| field_suggestions(m, field))
            .unwrap_or(&[]);

        ui.label(field.label());
        autocomplete_field(ui, field.label(), fields.get_mut(field), suggestions);
        ui.add_space(3.0);
    }

    if menu.is_some() && !visibility.any_visible() {
        ui.label(
            RichText::new("This dataset exposes no time or grid options")
                .small()
                .italics(),
        );
    }
}

fn render_graph_button(ui: &mut egui::Ui, state: &mut AppState) {
    let ready = state.menu.selected_dataset.is_some() && !state.graph.is_loading();

    if ui
        .add_enabled(ready, egui::Button::new("Graph"))
        .clicked()
    {
        state.graph_requested = true;
    }

    if state.graph.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Rendering...").small());
        });
    }
}
