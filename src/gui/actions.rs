use crate::core::EntryId;

// Widgets only see the engine immutably; every change goes through this queue
// and is applied once the frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Session
    SelectFormType(String),
    SetFieldValue { name: String, value: String },
    Submit,

    // Entries
    EditEntry(EntryId),
    RequestDelete(EntryId),
    DeleteEntry(EntryId),

    // Preferences
    OpenSettings,
    SetDarkMode(bool),
}

#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_push_order() {
        let mut queue = ActionQueue::new();
        queue.push(UiAction::SelectFormType("User Information".to_string()));
        queue.push(UiAction::Submit);

        let drained: Vec<UiAction> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![UiAction::SelectFormType("User Information".to_string()), UiAction::Submit]
        );
        assert!(queue.is_empty());
    }
}
