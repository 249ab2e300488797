use std::fmt;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

pub const USER_INFORMATION: &str = "User Information";
pub const ADDRESS_INFORMATION: &str = "Address Information";
pub const PAYMENT_INFORMATION: &str = "Payment Information";

/// Input kind of a field. Dropdown choices live on the variant so a
/// descriptor can only carry options when it is a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "options")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Dropdown(Vec<String>),
}

/// Typed view of a raw string value, produced at the validation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    Secret(&'a str),
    Choice(&'a str),
}

impl FieldKind {
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Dropdown(options) => options,
            _ => &[],
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, FieldKind::Password)
    }

    pub fn parse<'a>(&self, raw: &'a str) -> Option<FieldValue<'a>> {
        let trimmed = raw.trim();
        match self {
            FieldKind::Text => Some(FieldValue::Text(raw)),
            FieldKind::Password => Some(FieldValue::Secret(raw)),
            FieldKind::Number => {
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite()).map(FieldValue::Number)
            }
            FieldKind::Date => {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok().map(FieldValue::Date)
            }
            FieldKind::Dropdown(options) => {
                options.iter().any(|o| o == raw).then_some(FieldValue::Choice(raw))
            }
        }
    }

    pub fn format_hint(&self) -> Option<&'static str> {
        match self {
            FieldKind::Number => Some("e.g. 42"),
            FieldKind::Date => Some("YYYY-MM-DD"),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
            FieldKind::Dropdown(_) => "dropdown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self { name: name.to_string(), label: label.to_string(), kind, required }
    }

    /// A required field counts as satisfied once its trimmed value is non-empty.
    pub fn is_satisfied_by(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub form_type: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }
}

/// Fixed, compiled-in lookup of form type to field schema.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<FormSchema>,
}

impl SchemaRegistry {
    pub fn new(schemas: Vec<FormSchema>) -> Self {
        Self { schemas }
    }

    pub fn builtin() -> Self {
        let text = || FieldKind::Text;
        let states = ["California", "Texas", "New York"].iter().map(|s| s.to_string()).collect();

        Self::new(vec![
            FormSchema {
                form_type: USER_INFORMATION.to_string(),
                fields: vec![
                    FieldDescriptor::new("firstName", "First Name", text(), true),
                    FieldDescriptor::new("lastName", "Last Name", text(), true),
                    FieldDescriptor::new("age", "Age", FieldKind::Number, false),
                ],
            },
            FormSchema {
                form_type: ADDRESS_INFORMATION.to_string(),
                fields: vec![
                    FieldDescriptor::new("street", "Street", text(), true),
                    FieldDescriptor::new("city", "City", text(), true),
                    FieldDescriptor::new("state", "State", FieldKind::Dropdown(states), true),
                    FieldDescriptor::new("zipCode", "Zip Code", text(), false),
                ],
            },
            FormSchema {
                form_type: PAYMENT_INFORMATION.to_string(),
                fields: vec![
                    FieldDescriptor::new("cardNumber", "Card Number", text(), true),
                    FieldDescriptor::new("expiryDate", "Expiry Date", FieldKind::Date, true),
                    FieldDescriptor::new("cvv", "CVV", FieldKind::Password, true),
                    FieldDescriptor::new("cardholderName", "Cardholder Name", text(), true),
                ],
            },
        ])
    }

    pub fn form_types(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.form_type.as_str()).collect()
    }

    pub fn schema(&self, form_type: &str) -> Option<&FormSchema> {
        self.schemas.iter().find(|s| s.form_type == form_type)
    }

    /// Unknown form types resolve to an empty field list.
    pub fn resolve(&self, form_type: &str) -> &[FieldDescriptor] {
        self.schema(form_type).map(|s| s.fields.as_slice()).unwrap_or(&[])
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_form_types_keep_registry_order() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(
            registry.form_types(),
            vec![USER_INFORMATION, ADDRESS_INFORMATION, PAYMENT_INFORMATION]
        );
    }

    #[test]
    fn resolve_unknown_form_type_is_empty() {
        let registry = SchemaRegistry::builtin();
        assert!(registry.resolve("Shipping Information").is_empty());
        assert!(registry.resolve("").is_empty());
        assert!(registry.schema("user information").is_none());
    }

    #[test]
    fn resolve_keeps_field_order() {
        let registry = SchemaRegistry::builtin();
        let names: Vec<&str> =
            registry.resolve(ADDRESS_INFORMATION).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["street", "city", "state", "zipCode"]);

        let state = registry.schema(ADDRESS_INFORMATION).unwrap().field("state").unwrap();
        assert_eq!(state.kind.options(), ["California", "Texas", "New York"]);
        assert!(registry.resolve(USER_INFORMATION)[0].kind.options().is_empty());
    }

    #[test]
    fn required_counts() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(registry.schema(USER_INFORMATION).unwrap().required_count(), 2);
        assert_eq!(registry.schema(ADDRESS_INFORMATION).unwrap().required_count(), 3);
        assert_eq!(registry.schema(PAYMENT_INFORMATION).unwrap().required_count(), 4);
    }

    #[test]
    fn kind_parse() {
        assert_eq!(FieldKind::Number.parse(" 42 "), Some(FieldValue::Number(42.0)));
        assert_eq!(FieldKind::Number.parse("forty"), None);
        assert_eq!(FieldKind::Number.parse("inf"), None);
        assert_eq!(
            FieldKind::Date.parse("2027-03-31"),
            Some(FieldValue::Date(NaiveDate::from_ymd_opt(2027, 3, 31).unwrap()))
        );
        assert_eq!(FieldKind::Date.parse("2027-02-30"), None);
        assert_eq!(FieldKind::Password.parse("123"), Some(FieldValue::Secret("123")));

        let dropdown = FieldKind::Dropdown(vec!["Texas".to_string()]);
        assert_eq!(dropdown.parse("Texas"), Some(FieldValue::Choice("Texas")));
        assert_eq!(dropdown.parse("Ohio"), None);
    }

    #[test]
    fn descriptor_serializes_like_lookup_data() {
        let field = FieldDescriptor::new(
            "state",
            "State",
            FieldKind::Dropdown(vec!["Texas".to_string()]),
            true,
        );
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "dropdown");
        assert_eq!(json["options"][0], "Texas");
        assert_eq!(json["required"], true);
    }
}
