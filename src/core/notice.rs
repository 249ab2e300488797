use std::time::Duration;

pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(2000);

/// Generation token for the live success notice. Only the most recently
/// issued ticket may complete the reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetTicket(u64);

impl ResetTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    Idle,
    ShowingSuccess {
        message: String,
        ticket: ResetTicket,
    },
}

#[derive(Debug, Default)]
pub struct NoticeState {
    notice: Notice,
    next_generation: u64,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` and supersedes any pending ticket.
    pub fn show_success(&mut self, message: impl Into<String>) -> ResetTicket {
        self.next_generation += 1;
        let ticket = ResetTicket(self.next_generation);
        self.notice = Notice::ShowingSuccess { message: message.into(), ticket };
        ticket
    }

    /// Returns true when `ticket` was live and the notice went back to idle.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.live_ticket() != Some(ticket) {
            return false;
        }
        self.notice = Notice::Idle;
        true
    }

    pub fn dismiss(&mut self) -> Option<ResetTicket> {
        let ticket = self.live_ticket();
        self.notice = Notice::Idle;
        ticket
    }

    pub fn live_ticket(&self) -> Option<ResetTicket> {
        match &self.notice {
            Notice::ShowingSuccess { ticket, .. } => Some(*ticket),
            Notice::Idle => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.notice {
            Notice::ShowingSuccess { message, .. } => Some(message),
            Notice::Idle => None,
        }
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }
}
