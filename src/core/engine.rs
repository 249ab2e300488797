//! Caller-owned form engine: the registry, the working session, the
//! submission store and the success notice behind one call surface.
//!
//! The engine never schedules anything itself. A successful submit leaves a
//! [`ResetTicket`] in [`FormEngine::pending_reset`]; the owner arranges for
//! [`FormEngine::complete_reset`] to be called with it once the display delay
//! has passed. A newer success supersedes an older ticket, so the reset always
//! follows the most recent submission.

use tracing::{
    debug,
    info,
};

use super::{
    notice::{
        Notice,
        NoticeState,
        ResetTicket,
    },
    schema::SchemaRegistry,
    session::SessionState,
    store::{
        EntryId,
        SubmissionStore,
        SubmitOutcome,
        SubmittedEntry,
    },
};

#[derive(Debug, Default)]
pub struct FormEngine {
    registry: SchemaRegistry,
    session: SessionState,
    store: SubmissionStore,
    notice: NoticeState,
}

impl FormEngine {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            session: SessionState::new(),
            store: SubmissionStore::new(),
            notice: NoticeState::new(),
        }
    }

    pub fn form_types(&self) -> Vec<&str> {
        self.registry.form_types()
    }

    /// Starts a fresh session for `form_type`. A pending success reset is
    /// dropped so it cannot wipe the new input.
    pub fn select_form_type(&mut self, form_type: &str) {
        self.cancel_pending_reset();
        self.session.select_form_type(&self.registry, form_type);
        info!(form_type, "form type selected");
    }

    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.session.set_field_value(name, value)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.store.submit(&self.session);

        match &outcome {
            SubmitOutcome::Accepted { kind, .. } => {
                self.session.set_errors(Default::default());
                self.session.clear_editing();
                let ticket = self.notice.show_success(kind.message());
                debug!(generation = ticket.generation(), "success notice shown");
            }
            SubmitOutcome::Rejected(errors) => {
                self.session.set_errors(errors.clone());
            }
            SubmitOutcome::NoFormSelected => {
                debug!("submit ignored, no form type selected");
            }
        }

        outcome
    }

    /// Returns false when no entry has `id`.
    pub fn load_for_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.store.get(id) else {
            debug!(%id, "edit requested for missing entry");
            return false;
        };

        self.notice.dismiss();
        self.session.load_for_edit(&self.registry, entry);
        true
    }

    pub fn delete(&mut self, id: EntryId) -> bool {
        let removed = self.store.delete(id);
        if self.session.editing_id() == Some(id) {
            self.session.clear_editing();
        }
        removed
    }

    /// Resets the session if `ticket` is still the live one. Stale tickets
    /// from superseded submissions are ignored.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        if !self.notice.expire(ticket) {
            debug!(generation = ticket.generation(), "stale reset ignored");
            return false;
        }

        self.session.reset();
        info!("form reset after submission");
        true
    }

    pub fn cancel_pending_reset(&mut self) -> Option<ResetTicket> {
        self.notice.dismiss()
    }

    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.notice.live_ticket()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn entries(&self) -> &[SubmittedEntry] {
        self.store.entries()
    }

    pub fn entry(&self, id: EntryId) -> Option<&SubmittedEntry> {
        self.store.get(id)
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn notice(&self) -> &Notice {
        self.notice.notice()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.notice.message()
    }
}
