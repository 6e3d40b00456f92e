//! Autocomplete text field fed by server-provided value lists.

use eframe::egui::{self, Id, Rect, ScrollArea, TextEdit, Ui};

/// Most suggestions shown at once; the list is filtered as the user types.
const MAX_SUGGESTIONS: usize = 16;

/// A single-line text edit with a suggestion list below it.
///
/// The list appears while the field has focus (or the pointer is over the
/// list itself, so clicks land after focus moves) and shows the values
/// containing the current text. Clicking a suggestion fills the buffer.
/// Values are not forced to match a suggestion; presence is the only
/// validation the form does.
pub fn autocomplete_field(
    ui: &mut Ui,
    id_salt: &str,
    buffer: &mut String,
    suggestions: &[String],
) -> egui::Response {
    let open_id = Id::new(id_salt).with("ac_open");
    let rect_id = Id::new(id_salt).with("ac_rect");

    let response = ui.add(TextEdit::singleline(buffer).desired_width(140.0));

    let was_open: bool = ui.data(|d| d.get_temp(open_id).unwrap_or(false));
    let mut open = response.has_focus();
    if !open && was_open {
        // Keep the list alive while the pointer is over it from last frame,
        // otherwise the click that should pick a suggestion dismisses it.
        let list_rect: Option<Rect> = ui.data(|d| d.get_temp(rect_id));
        if let (Some(rect), Some(pos)) = (list_rect, ui.ctx().pointer_latest_pos()) {
            open = rect.contains(pos);
        }
    }

    if open && !suggestions.is_empty() {
        let needle = buffer.trim().to_lowercase();
        let mut picked = None;

        let list = ui.scope(|ui| {
            ScrollArea::vertical()
                .id_salt(Id::new(id_salt).with("ac_scroll"))
                .max_height(96.0)
                .show(ui, |ui| {
                    let matches = suggestions
                        .iter()
                        .filter(|s| needle.is_empty() || s.to_lowercase().contains(&needle))
                        .take(MAX_SUGGESTIONS);
                    for suggestion in matches {
                        if ui.selectable_label(false, suggestion).clicked() {
                            picked = Some(suggestion.clone());
                        }
                    }
                });
        });
        ui.data_mut(|d| d.insert_temp(rect_id, list.response.rect));

        if let Some(value) = picked {
            *buffer = value;
            open = false;
            ui.ctx().request_repaint();
        }
    }

    ui.data_mut(|d| d.insert_temp(open_id, open));
    response
}
