use std::fmt;

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    info,
};
use uuid::Uuid;

use super::{
    session::SessionState,
    validation::{
        validate,
        FieldErrors,
        FieldValues,
    },
};

pub const CREATED_MESSAGE: &str = "Form submitted successfully!";
pub const UPDATED_MESSAGE: &str = "Form updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedEntry {
    pub id: EntryId,
    pub form_type: String,
    pub values: FieldValues,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubmittedEntry {
    pub fn details_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self.values))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Created,
    Updated,
}

impl SubmitKind {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitKind::Created => CREATED_MESSAGE,
            SubmitKind::Updated => UPDATED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted { id: EntryId, kind: SubmitKind },
    Rejected(FieldErrors),
    NoFormSelected,
}

impl SubmitOutcome {
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Rejected(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Finalized entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    entries: Vec<SubmittedEntry>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the session and either appends a new entry or overwrites the
    /// one being edited. A rejected submission leaves the store untouched.
    pub fn submit(&mut self, session: &SessionState) -> SubmitOutcome {
        let Some(form_type) = session.form_type() else {
            return SubmitOutcome::NoFormSelected;
        };

        let errors = validate(session.fields(), session.values(), form_type);
        if !errors.is_empty() {
            debug!(form_type, errors = errors.len(), "submission rejected");
            return SubmitOutcome::Rejected(errors);
        }

        let now = Utc::now();

        if let Some(entry) =
            session.editing_id().and_then(|id| self.entries.iter_mut().find(|e| e.id == id))
        {
            entry.form_type = form_type.to_string();
            entry.values = session.values().clone();
            entry.updated_at = now;
            info!(id = %entry.id, form_type, "entry updated");
            return SubmitOutcome::Accepted { id: entry.id, kind: SubmitKind::Updated };
        }

        let entry = SubmittedEntry {
            id: EntryId::new(),
            form_type: form_type.to_string(),
            values: session.values().clone(),
            created_at: now,
            updated_at: now,
        };
        let id = entry.id;
        self.entries.push(entry);
        info!(%id, form_type, total = self.entries.len(), "entry created");

        SubmitOutcome::Accepted { id, kind: SubmitKind::Created }
    }

    /// Removing a missing id is a no-op.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            info!(%id, "entry deleted");
        }
        removed
    }

    pub fn get(&self, id: EntryId) -> Option<&SubmittedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn entries(&self) -> &[SubmittedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubmittedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubmissionStore {
    type Item = &'a SubmittedEntry;
    type IntoIter = std::slice::Iter<'a, SubmittedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
