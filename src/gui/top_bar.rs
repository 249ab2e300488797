use eframe::egui::{
    self,
    containers,
};

use super::actions::{
    ActionQueue,
    UiAction,
};
use crate::core::FormEngine;

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, engine: &FormEngine, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let dark_mode = ctx.style().visuals.dark_mode;
                let theme_icon = if dark_mode { "🌙" } else { "☀" };
                if ui.button(theme_icon).on_hover_text("Toggle dark mode").clicked() {
                    actions.push(UiAction::SetDarkMode(!dark_mode));
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Preferences").clicked() {
                        actions.push(UiAction::OpenSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, engine);
                });
            });
        });
    }

    fn show_status(ui: &mut egui::Ui, engine: &FormEngine) {
        let count = engine.entries().len();
        ui.small(format!("{} {}", count, if count == 1 { "entry" } else { "entries" }));

        if engine.session().is_editing() {
            ui.add_space(6.0);
            let amber = egui::Color32::from_rgb(220, 170, 60);
            ui.small(egui::RichText::new("● editing").color(amber));
        }
    }
}
