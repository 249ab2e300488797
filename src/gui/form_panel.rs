use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    notice_banner::NoticeBanner,
    theme::Theme,
};
use crate::core::{
    FieldDescriptor,
    FieldKind,
    FormEngine,
};

const FIELD_SPACING: f32 = 10.0;
const SECTION_SPACING: f32 = 14.0;
const SELECT_PLACEHOLDER: &str = "Select Form Type";

pub struct FormPanel;

impl FormPanel {
    pub fn show(
        ui: &mut egui::Ui,
        engine: &FormEngine,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        let session = engine.session();

        Self::form_type_selector(ui, engine, actions);
        ui.add_space(SECTION_SPACING);

        ui.add(
            egui::ProgressBar::new(session.progress_percent() / 100.0)
                .fill(theme.accent(ui.ctx()))
                .desired_height(8.0),
        )
        .on_hover_text(format!("{:.0}% of required fields complete", session.progress_percent()));
        ui.add_space(SECTION_SPACING);

        if session.is_empty() {
            ui.weak("Choose a form type to begin.");
            return;
        }

        for field in session.fields() {
            let value = session.value(&field.name);
            Self::field_row(ui, field, value, session.error(&field.name), theme, actions);
            ui.add_space(FIELD_SPACING);
        }

        let label = if session.is_editing() { "Update Form" } else { "Submit Form" };
        let button = egui::Button::new(egui::RichText::new(label).strong())
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            actions.push(UiAction::Submit);
        }

        ui.add_space(FIELD_SPACING);
        NoticeBanner::show(ui, engine.success_message(), theme);
    }

    fn form_type_selector(ui: &mut egui::Ui, engine: &FormEngine, actions: &mut ActionQueue) {
        let current = engine.session().form_type();

        egui::ComboBox::from_id_salt("form_type_combo")
            .width(ui.available_width())
            .selected_text(current.unwrap_or(SELECT_PLACEHOLDER))
            .show_ui(ui, |ui| {
                for form_type in engine.form_types() {
                    if ui.selectable_label(current == Some(form_type), form_type).clicked()
                        && current != Some(form_type)
                    {
                        actions.push(UiAction::SelectFormType(form_type.to_string()));
                    }
                }
            });
    }

    fn field_row(
        ui: &mut egui::Ui,
        field: &FieldDescriptor,
        value: &str,
        error: Option<&str>,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        ui.horizontal(|ui| {
            ui.label(&field.label);
            if field.required {
                ui.label(theme.required_marker(ui.ctx()));
            }
        });

        match &field.kind {
            FieldKind::Dropdown(options) => {
                egui::ComboBox::from_id_salt(("field", field.name.as_str()))
                    .width(ui.available_width())
                    .selected_text(if value.is_empty() { field.label.as_str() } else { value })
                    .show_ui(ui, |ui| {
                        for option in options {
                            if ui.selectable_label(value == option, option).clicked() {
                                actions.push(UiAction::SetFieldValue {
                                    name: field.name.clone(),
                                    value: option.clone(),
                                });
                            }
                        }
                    });
            }
            kind => {
                let mut buffer = value.to_string();
                let mut edit = egui::TextEdit::singleline(&mut buffer)
                    .id_salt(("field", field.name.as_str()))
                    .desired_width(f32::INFINITY)
                    .password(kind.is_masked())
                    .hint_text(kind.format_hint().unwrap_or(field.label.as_str()));
                if error.is_some() {
                    edit = edit.text_color(theme.error(ui.ctx()));
                }

                if ui.add(edit).changed() {
                    actions.push(UiAction::SetFieldValue {
                        name: field.name.clone(),
                        value: buffer,
                    });
                }
            }
        }

        if let Some(error) = error {
            ui.label(egui::RichText::new(error).small().color(theme.error(ui.ctx())));
        }
    }
}
