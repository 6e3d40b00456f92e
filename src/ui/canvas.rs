//! Central panel: the rendered graph.

use crate::state::{AppState, GraphPhase};
use eframe::egui::{self, Color32, RichText};

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        match &state.graph.phase {
            GraphPhase::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Select a dataset and press Graph")
                            .size(14.0)
                            .color(Color32::GRAY),
                    );
                });
            }
            GraphPhase::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Rendering graph...").color(Color32::GRAY));
                });
                // Keep the previous graph up below the spinner
                if let Some(texture) = &state.graph.texture {
                    show_graph(ui, texture);
                }
            }
            GraphPhase::Shown => {
                if let Some(texture) = &state.graph.texture {
                    show_graph(ui, texture);
                }
            }
            GraphPhase::Error(message) => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!("Graph failed: {}", message))
                            .color(Color32::from_rgb(220, 100, 100)),
                    );
                });
            }
        }
    });
}

fn show_graph(ui: &mut egui::Ui, texture: &egui::TextureHandle) {
    ui.centered_and_justified(|ui| {
        ui.add(
            egui::Image::new(texture)
                .max_size(ui.available_size())
                .shrink_to_fit(),
        );
    });
}
