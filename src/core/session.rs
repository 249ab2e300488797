use tracing::debug;

use super::{
    schema::{
        FieldDescriptor,
        SchemaRegistry,
    },
    store::{
        EntryId,
        SubmittedEntry,
    },
    validation::{
        FieldErrors,
        FieldValues,
    },
};

/// Working state of the form currently being filled or edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    form_type: Option<String>,
    fields: Vec<FieldDescriptor>,
    values: FieldValues,
    errors: FieldErrors,
    progress_percent: f32,
    editing_id: Option<EntryId>,
}

/// Share of required fields holding a non-blank value, in percent.
///
/// A field list without required fields is complete by definition and reports
/// 100. No form type at all reports 0.
pub fn progress_percent(fields: &[FieldDescriptor], values: &FieldValues) -> f32 {
    if fields.is_empty() {
        return 0.0;
    }

    let required: Vec<&FieldDescriptor> = fields.iter().filter(|f| f.required).collect();
    if required.is_empty() {
        return 100.0;
    }

    let satisfied = required
        .iter()
        .filter(|f| f.is_satisfied_by(values.get(&f.name).map(String::as_str)))
        .count();

    satisfied as f32 / required.len() as f32 * 100.0
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_form_type(&mut self, registry: &SchemaRegistry, form_type: &str) {
        self.fields = registry.resolve(form_type).to_vec();
        self.form_type = if form_type.is_empty() { None } else { Some(form_type.to_string()) };
        self.values.clear();
        self.errors.clear();
        self.progress_percent = 0.0;
        self.editing_id = None;
        debug!(form_type, fields = self.fields.len(), "form type selected");
    }

    /// Returns false when `name` is not a field of the loaded schema.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !self.fields.iter().any(|f| f.name == name) {
            debug!(name, "ignoring value for unknown field");
            return false;
        }

        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
        self.recompute_progress();
        true
    }

    pub fn load_for_edit(&mut self, registry: &SchemaRegistry, entry: &SubmittedEntry) {
        self.fields = registry.resolve(&entry.form_type).to_vec();
        self.form_type = Some(entry.form_type.clone());
        self.values = entry
            .values
            .iter()
            .filter(|(name, _)| self.fields.iter().any(|f| &f.name == *name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        self.errors.clear();
        self.editing_id = Some(entry.id);
        self.recompute_progress();
        debug!(id = %entry.id, form_type = %entry.form_type, "entry loaded for edit");
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear_editing(&mut self) {
        self.editing_id = None;
    }

    fn recompute_progress(&mut self) {
        self.progress_percent = progress_percent(&self.fields, &self.values);
    }

    pub fn form_type(&self) -> Option<&str> {
        self.form_type.as_deref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn progress_percent(&self) -> f32 {
        self.progress_percent
    }

    pub fn editing_id(&self) -> Option<EntryId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.form_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::core::schema::{
        FieldKind,
        FormSchema,
        ADDRESS_INFORMATION,
        PAYMENT_INFORMATION,
        USER_INFORMATION,
    };

    fn registry() -> SchemaRegistry {
        SchemaRegistry::builtin()
    }

    #[test]
    fn select_loads_fields_and_clears_state() {
        let registry = registry();
        let mut session = SessionState::new();
        session.select_form_type(&registry, USER_INFORMATION);
        session.set_field_value("firstName", "Ana");
        session
            .set_errors(FieldErrors::from([("lastName".into(), "Last Name is required".into())]));

        session.select_form_type(&registry, PAYMENT_INFORMATION);
        assert_eq!(session.form_type(), Some(PAYMENT_INFORMATION));
        assert_eq!(session.fields().len(), 4);
        assert!(session.values().is_empty());
        assert!(session.errors().is_empty());
        assert_eq!(session.progress_percent(), 0.0);
        assert!(!session.is_editing());
    }

    #[test]
    fn unknown_form_type_leaves_no_fields() {
        let registry = registry();
        let mut session = SessionState::new();
        session.select_form_type(&registry, "Survey");
        assert!(session.fields().is_empty());
        assert!(!session.set_field_value("firstName", "Ana"));
        assert!(session.values().is_empty());
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn set_value_updates_progress_and_clears_that_error() {
        let registry = registry();
        let mut session = SessionState::new();
        session.select_form_type(&registry, ADDRESS_INFORMATION);
        session.set_errors(FieldErrors::from([
            ("street".into(), "Street is required".into()),
            ("city".into(), "City is required".into()),
        ]));

        assert!(session.set_field_value("street", "1 Main St"));
        assert!((session.progress_percent() - 100.0 / 3.0).abs() < 1e-3);
        assert_eq!(session.error("street"), None);
        assert_eq!(session.error("city"), Some("City is required"));

        session.set_field_value("zipCode", "73301");
        assert!((session.progress_percent() - 100.0 / 3.0).abs() < 1e-3);

        session.set_field_value("street", "   ");
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let registry = registry();
        let mut session = SessionState::new();
        session.select_form_type(&registry, USER_INFORMATION);
        assert!(!session.set_field_value("cardNumber", "1234"));
        assert!(!session.values().contains_key("cardNumber"));
    }

    #[test]
    fn zero_required_fields_count_as_complete() {
        let registry = SchemaRegistry::new(vec![FormSchema {
            form_type: "Feedback".to_string(),
            fields: vec![FieldDescriptor::new("comment", "Comment", FieldKind::Text, false)],
        }]);
        let mut session = SessionState::new();
        session.select_form_type(&registry, "Feedback");
        session.set_field_value("comment", "");
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let registry = registry();
        let mut session = SessionState::new();
        session.select_form_type(&registry, USER_INFORMATION);
        session.set_field_value("firstName", "Ana");
        session.reset();
        assert_eq!(session, SessionState::new());
        assert!(session.is_empty());
    }

    proptest! {
        #[test]
        fn filling_every_required_field_reaches_full_progress(
            form in prop::sample::select(vec![
                USER_INFORMATION,
                ADDRESS_INFORMATION,
                PAYMENT_INFORMATION,
            ]),
            filler in "[a-zA-Z0-9]{1,12}",
        ) {
            let registry = registry();
            let mut session = SessionState::new();
            session.select_form_type(&registry, form);
            let required: Vec<String> = session
                .fields()
                .iter()
                .filter(|f| f.required)
                .map(|f| f.name.clone())
                .collect();
            for name in required {
                session.set_field_value(&name, format!(" {filler} "));
            }
            prop_assert_eq!(session.progress_percent(), 100.0);
        }

        #[test]
        fn progress_stays_in_bounds(
            entries in prop::collection::vec(("[a-zA-Z]{1,10}", "[ a-z]{0,4}"), 0..12),
        ) {
            let registry = registry();
            let mut session = SessionState::new();
            session.select_form_type(&registry, PAYMENT_INFORMATION);
            for (name, value) in entries {
                session.set_field_value(&name, value);
                prop_assert!((0.0..=100.0).contains(&session.progress_percent()));
            }
            for name in session.values().keys() {
                prop_assert!(session.fields().iter().any(|f| &f.name == name));
            }
        }
    }
}
