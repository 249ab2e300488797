mod modals;

use eframe::egui;
use modals::Modals;
use tracing::{
    debug,
    error,
    info,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    entries_table::EntriesTable,
    form_panel::FormPanel,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        tasks::{
            TaskHandle,
            TaskManager,
            TaskResult,
        },
        FormEngine,
        FormdeckError,
        SubmitOutcome,
    },
    persistence::save_json,
};

const FORM_MAX_WIDTH: f32 = 640.0;

pub struct FormApp {
    engine: FormEngine,

    // Configuration
    settings_data: SettingsData,

    // UI State
    theme: Theme,
    modals: Modals,
    actions: ActionQueue,

    task_manager: TaskManager,
    // Dropping the handle cancels the timer, so tearing down the app never
    // resets a session nobody is looking at.
    reset_handle: Option<TaskHandle>,
}

impl FormApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
    ) -> Result<Self, FormdeckError> {
        let app = Self {
            engine: FormEngine::default(),
            settings_data,
            theme: Theme::slate(),
            modals: Modals::default(),
            actions: ActionQueue::new(),
            task_manager: TaskManager::new()?,
            reset_handle: None,
        };

        set_theme(&cc.egui_ctx, &app.theme);
        app.apply_appearance(&cc.egui_ctx);

        Ok(app)
    }

    fn apply_appearance(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.settings_data.dark_mode {
            egui::ThemePreference::Dark
        } else {
            egui::ThemePreference::Light
        });
        ctx.set_zoom_factor(self.settings_data.zoom_factor());
    }

    fn save_settings(&mut self) {
        match save_json(&self.settings_data, SETTINGS_FILE) {
            Ok(()) => info!("settings saved"),
            Err(e) => {
                error!("Failed to save settings: {}", e);
                self.modals.error.show_error(
                    "Settings not saved",
                    "Your preferences apply to this session but could not be written to disk.",
                    Some(e.to_string()),
                );
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "task result");
        match result {
            TaskResult::ResetElapsed(ticket) => {
                if self.engine.complete_reset(ticket) {
                    self.reset_handle = None;
                }
            }
            TaskResult::RequestSaveSettings => self.save_settings(),
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context) {
        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.apply_action(action, ctx);
        }
    }

    fn apply_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::SelectFormType(form_type) => {
                self.engine.select_form_type(&form_type);
                self.sync_reset_timer();
            }
            UiAction::SetFieldValue { name, value } => {
                self.engine.set_field_value(&name, value);
            }
            UiAction::Submit => self.submit(ctx),
            UiAction::EditEntry(id) => {
                if self.engine.load_for_edit(id) {
                    self.sync_reset_timer();
                }
            }
            UiAction::RequestDelete(id) => {
                if !self.settings_data.confirm_delete {
                    self.engine.delete(id);
                } else if let Some(entry) = self.engine.entry(id) {
                    self.modals.confirm_delete.ask(id, entry.form_type.clone());
                }
            }
            UiAction::DeleteEntry(id) => {
                self.engine.delete(id);
            }
            UiAction::OpenSettings => self.modals.settings.open_settings(&self.settings_data),
            UiAction::SetDarkMode(dark_mode) => {
                self.settings_data.dark_mode = dark_mode;
                self.apply_appearance(ctx);
                self.task_manager.request_save_settings();
            }
        }
    }

    fn submit(&mut self, ctx: &egui::Context) {
        match self.engine.submit() {
            SubmitOutcome::Accepted { .. } => {
                let Some(ticket) = self.engine.pending_reset() else {
                    return;
                };
                let delay = self.settings_data.success_display();
                let repaint = ctx.clone();
                // Replacing the old handle cancels it: the reset restarts from
                // the latest submission.
                self.reset_handle =
                    Some(self.task_manager.schedule_reset(ticket, delay, move || {
                        repaint.request_repaint();
                    }));
            }
            SubmitOutcome::Rejected(errors) => {
                debug!(fields = ?errors.keys().collect::<Vec<_>>(), "submission has errors");
            }
            SubmitOutcome::NoFormSelected => {}
        }
    }

    fn sync_reset_timer(&mut self) {
        if self.engine.pending_reset().is_none() {
            self.reset_handle = None;
        }
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        TopBar::show(ctx, &self.engine, &mut self.actions);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_MAX_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::same(16))
                            .show(ui, |ui| {
                                FormPanel::show(ui, &self.engine, &self.theme, &mut self.actions);
                            });
                    });
                });

                ui.add_space(24.0);
                EntriesTable::show(
                    ui,
                    self.engine.entries(),
                    self.engine.session().editing_id(),
                    &self.theme,
                    &mut self.actions,
                );
            });
        });

        if let Some(id) = self.modals.confirm_delete.show(ctx) {
            self.actions.push(UiAction::DeleteEntry(id));
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.settings_data = settings;
            self.apply_appearance(ctx);
            self.save_settings();
        }

        self.modals.error.show(ctx, self.theme.error(ctx));

        self.apply_actions(ctx);
    }
}
