use crate::gui::{
    confirm_modal::ConfirmDeleteModal,
    error_modal::ErrorModal,
    settings::SettingsModal,
};

#[derive(Default)]
pub struct Modals {
    pub confirm_delete: ConfirmDeleteModal,
    pub error: ErrorModal,
    pub settings: SettingsModal,
}
