use eframe::egui;

use super::data::SettingsData;

const GRID_SPACING: [f32; 2] = [12.0, 6.0];

pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::new(), original: SettingsData::new() }
    }

    pub fn open_settings(&mut self, current: &SettingsData) {
        self.draft = current.clone();
        self.original = current.clone();
        self.open = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Returns the edited settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;
        let dirty = self.is_dirty();

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading("Preferences");
            ui.add_space(8.0);

            egui::Grid::new("settings_grid").num_columns(2).spacing(GRID_SPACING).show(ui, |ui| {
                ui.label("Dark mode:");
                ui.checkbox(&mut self.draft.dark_mode, "");
                ui.end_row();

                ui.label("Zoom:");
                ui.add(egui::Slider::new(&mut self.draft.zoom, 0.5..=3.0).step_by(0.1));
                ui.end_row();

                ui.label("Success message (ms):");
                ui.add(
                    egui::DragValue::new(&mut self.draft.success_display_ms)
                        .range(250..=10_000)
                        .speed(50),
                )
                .on_hover_text("How long the confirmation stays up before the form resets.");
                ui.end_row();

                ui.label("Confirm before delete:");
                ui.checkbox(&mut self.draft.confirm_delete, "");
                ui.end_row();
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(dirty, egui::Button::new("Save")).clicked() {
                    saved = Some(self.draft.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
