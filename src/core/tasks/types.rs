use crate::core::notice::ResetTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    ResetElapsed(ResetTicket),
    RequestSaveSettings,
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::ResetElapsed(_) => "reset_elapsed",
            TaskResult::RequestSaveSettings => "request_save_settings",
        }
    }
}
