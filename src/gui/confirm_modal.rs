use eframe::egui;

use crate::core::EntryId;

/// Asks before an entry is removed from the store.
pub struct ConfirmDeleteModal {
    pending: Option<(EntryId, String)>,
}

impl ConfirmDeleteModal {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn ask(&mut self, id: EntryId, form_type: impl Into<String>) {
        self.pending = Some((id, form_type.into()));
    }

    /// Returns the id once the user confirms.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<EntryId> {
        let (id, form_type) = self.pending.as_ref()?;
        let id = *id;
        let mut confirmed = false;

        let modal = egui::Modal::new(egui::Id::new("confirm_delete_modal")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(egui::RichText::new("Delete entry?").size(16.0).strong());
            ui.add_space(6.0);
            ui.label(format!("This removes the {} entry from the list.", form_type));
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete").clicked() {
                    confirmed = true;
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.pending = None;
        }

        confirmed.then_some(id)
    }
}

impl Default for ConfirmDeleteModal {
    fn default() -> Self {
        Self::new()
    }
}
