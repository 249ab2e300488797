use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::{
    EntryId,
    SubmittedEntry,
};

const TABLE_MAX_HEIGHT: f32 = 360.0;
const TYPE_COLUMN_WIDTH: f32 = 160.0;
const ACTIONS_COLUMN_WIDTH: f32 = 140.0;
const HEADER_HEIGHT: f32 = 22.0;
const ROW_PADDING: f32 = 8.0;

pub struct EntriesTable;

impl EntriesTable {
    pub fn show(
        ui: &mut egui::Ui,
        entries: &[SubmittedEntry],
        editing: Option<EntryId>,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        if entries.is_empty() {
            return;
        }

        ui.label(theme.heading(ui.ctx(), "Submitted Data"));
        ui.add_space(4.0);

        let line_height = egui::TextStyle::Monospace.resolve(ui.style()).size * 1.3;

        egui::ScrollArea::vertical().max_height(TABLE_MAX_HEIGHT).show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Min))
                .column(Column::initial(TYPE_COLUMN_WIDTH).resizable(true))
                .column(Column::remainder().clip(true))
                .column(Column::exact(ACTIONS_COLUMN_WIDTH))
                .header(HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("Form Type");
                    });
                    header.col(|ui| {
                        ui.strong("Details");
                    });
                    header.col(|ui| {
                        ui.strong("Actions");
                    });
                })
                .body(|mut body| {
                    for entry in entries {
                        let details = entry.details_json();
                        let height = details.lines().count() as f32 * line_height + ROW_PADDING;

                        body.row(height, |mut row| {
                            row.col(|ui| {
                                if editing == Some(entry.id) {
                                    ui.label(
                                        egui::RichText::new(&entry.form_type)
                                            .color(theme.accent(ui.ctx())),
                                    )
                                    .on_hover_text("Currently being edited");
                                } else {
                                    ui.label(&entry.form_type);
                                }
                            });
                            row.col(|ui| {
                                ui.label(egui::RichText::new(details).monospace().small());
                            });
                            row.col(|ui| {
                                if ui.button("Edit").clicked() {
                                    actions.push(UiAction::EditEntry(entry.id));
                                }
                                if ui.button("Delete").clicked() {
                                    actions.push(UiAction::RequestDelete(entry.id));
                                }
                            });
                        });
                    }
                });
        });
    }
}
