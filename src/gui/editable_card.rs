use eframe::egui;

/// Emitted when the user commits an edit: exactly the card's field id and
/// the new text, nothing else.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub field_id: &'static str,
    pub text: String,
}

/// A block of text with an Edit affordance. View mode shows the current
/// value; edit mode holds a draft in a multiline editor with Save/Cancel.
/// The draft survives a failed save so the user can retry.
pub struct EditableCard {
    field_id: &'static str,
    heading: &'static str,
    editing: bool,
    draft: String,
}

impl EditableCard {
    pub fn new(field_id: &'static str, heading: &'static str) -> Self {
        Self { field_id, heading, editing: false, draft: String::new() }
    }

    /// Called when the save round-trip succeeded; the re-fetched document is
    /// the source of truth from here on.
    pub fn finish_save(&mut self) {
        self.editing = false;
        self.draft.clear();
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        current_text: &str,
        saving: bool,
    ) -> Option<SaveRequest> {
        let mut request = None;

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.heading).size(17.0).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !self.editing && ui.button("Edit").clicked() {
                    self.editing = true;
                    self.draft = current_text.to_string();
                }
            });
        });

        if self.editing {
            ui.add(
                egui::TextEdit::multiline(&mut self.draft)
                    .desired_width(f32::INFINITY)
                    .desired_rows(5),
            );

            ui.horizontal(|ui| {
                if ui.add_enabled(!saving, egui::Button::new("Save")).clicked() {
                    request = Some(SaveRequest { field_id: self.field_id, text: self.draft.clone() });
                }

                if ui.add_enabled(!saving, egui::Button::new("Cancel")).clicked() {
                    self.editing = false;
                    self.draft.clear();
                }

                if saving {
                    ui.add(egui::Spinner::new());
                    ui.label("Saving...");
                }
            });
        } else {
            ui.label(current_text);
        }

        request
    }
}
