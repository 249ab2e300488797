use std::{
    collections::BTreeMap,
    sync::LazyLock,
};

use regex::Regex;

use super::schema::{
    FieldDescriptor,
    FieldKind,
    PAYMENT_INFORMATION,
};

/// Field name to message. Empty means the session passes.
pub type FieldErrors = BTreeMap<String, String>;

pub type FieldValues = BTreeMap<String, String>;

pub const CARD_NUMBER_FIELD: &str = "cardNumber";
pub const CARD_NUMBER_MESSAGE: &str = "Card number must be 16 digits";

// `\d` would also accept non-ASCII digits.
static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card number pattern is valid"));

pub fn required_message(field: &FieldDescriptor) -> String {
    format!("{} is required", field.label)
}

fn format_message(field: &FieldDescriptor) -> Option<String> {
    match field.kind {
        FieldKind::Number => Some(format!("{} must be a number", field.label)),
        FieldKind::Date => Some(format!("{} must be a valid date (YYYY-MM-DD)", field.label)),
        FieldKind::Dropdown(_) => {
            Some(format!("{} must be one of the listed options", field.label))
        }
        FieldKind::Text | FieldKind::Password => None,
    }
}

/// Checks the whole session. Every failing field gets one message; the
/// required check wins over the format checks since those only look at
/// non-empty values.
pub fn validate(fields: &[FieldDescriptor], values: &FieldValues, form_type: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in fields {
        if field.required && !field.is_satisfied_by(values.get(&field.name).map(String::as_str)) {
            errors.insert(field.name.clone(), required_message(field));
        }
    }

    if form_type == PAYMENT_INFORMATION {
        if let Some(card) = values.get(CARD_NUMBER_FIELD).filter(|v| !v.is_empty()) {
            if !CARD_NUMBER.is_match(card) {
                errors.insert(CARD_NUMBER_FIELD.to_string(), CARD_NUMBER_MESSAGE.to_string());
            }
        }
    }

    for field in fields {
        if errors.contains_key(&field.name) {
            continue;
        }
        let Some(raw) = values.get(&field.name).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        if field.kind.parse(raw).is_none() {
            if let Some(message) = format_message(field) {
                errors.insert(field.name.clone(), message);
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{
        SchemaRegistry,
        ADDRESS_INFORMATION,
        USER_INFORMATION,
    };

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn collects_every_missing_required_field() {
        let registry = SchemaRegistry::builtin();
        let fields = registry.resolve(PAYMENT_INFORMATION);
        let errors = validate(fields, &values(&[("cvv", "   ")]), PAYMENT_INFORMATION);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors["cardNumber"], "Card Number is required");
        assert_eq!(errors["expiryDate"], "Expiry Date is required");
        assert_eq!(errors["cvv"], "CVV is required");
        assert_eq!(errors["cardholderName"], "Cardholder Name is required");
    }

    #[test]
    fn short_card_number_is_rejected() {
        let registry = SchemaRegistry::builtin();
        let fields = registry.resolve(PAYMENT_INFORMATION);
        let input = values(&[
            ("cardNumber", "123"),
            ("expiryDate", "2028-01-31"),
            ("cvv", "999"),
            ("cardholderName", "Ana Lee"),
        ]);

        let errors = validate(fields, &input, PAYMENT_INFORMATION);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["cardNumber"], CARD_NUMBER_MESSAGE);
    }

    #[test]
    fn card_number_needs_exactly_sixteen_ascii_digits() {
        let registry = SchemaRegistry::builtin();
        let fields = registry.resolve(PAYMENT_INFORMATION);
        let cards = ["1234 5678 9012 3456", "12345678901234567", "１２３４５６７８９０１２３４５６"];
        for card in cards {
            let errors = validate(fields, &values(&[("cardNumber", card)]), PAYMENT_INFORMATION);
            assert_eq!(errors["cardNumber"], CARD_NUMBER_MESSAGE, "{card}");
        }

        let errors =
            validate(fields, &values(&[("cardNumber", "1234567890123456")]), PAYMENT_INFORMATION);
        assert!(!errors.contains_key("cardNumber"));
    }

    #[test]
    fn card_rule_only_applies_to_payment_form() {
        let fields = vec![FieldDescriptor::new("cardNumber", "Card", FieldKind::Text, false)];
        let errors = validate(&fields, &values(&[("cardNumber", "12")]), USER_INFORMATION);
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_card_number_reports_required_not_format() {
        let registry = SchemaRegistry::builtin();
        let fields = registry.resolve(PAYMENT_INFORMATION);
        let errors = validate(fields, &values(&[("cardNumber", "")]), PAYMENT_INFORMATION);
        assert_eq!(errors["cardNumber"], "Card Number is required");
    }

    #[test]
    fn kind_format_rules() {
        let registry = SchemaRegistry::builtin();

        let user = registry.resolve(USER_INFORMATION);
        let errors = validate(
            user,
            &values(&[("firstName", "Ana"), ("lastName", "Lee"), ("age", "old")]),
            USER_INFORMATION,
        );
        assert_eq!(errors["age"], "Age must be a number");

        let address = registry.resolve(ADDRESS_INFORMATION);
        let errors = validate(
            address,
            &values(&[("street", "1 Main"), ("city", "Austin"), ("state", "Ohio")]),
            ADDRESS_INFORMATION,
        );
        assert_eq!(errors["state"], "State must be one of the listed options");

        let payment = registry.resolve(PAYMENT_INFORMATION);
        let errors = validate(
            payment,
            &values(&[
                ("cardNumber", "1234567890123456"),
                ("expiryDate", "31/01/2028"),
                ("cvv", "1"),
                ("cardholderName", "A"),
            ]),
            PAYMENT_INFORMATION,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["expiryDate"], "Expiry Date must be a valid date (YYYY-MM-DD)");
    }

    #[test]
    fn optional_blank_fields_pass() {
        let registry = SchemaRegistry::builtin();
        let errors = validate(
            registry.resolve(USER_INFORMATION),
            &values(&[("firstName", "Ana"), ("lastName", "Lee"), ("age", "")]),
            USER_INFORMATION,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn no_fields_no_errors() {
        assert!(validate(&[], &FieldValues::new(), "").is_empty());
    }
}
