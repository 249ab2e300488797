use eframe::egui;

use crate::gui::theme::Theme;

pub struct NoticeBanner;

impl NoticeBanner {
    pub fn show(ui: &mut egui::Ui, message: Option<&str>, theme: &Theme) {
        let Some(message) = message else {
            return;
        };

        let color = theme.success(ui.ctx());
        egui::Frame::new()
            .fill(color.linear_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, color))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✔").color(color));
                    ui.label(egui::RichText::new(message).color(color).strong());
                });
            });
    }
}
