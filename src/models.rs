//! Data model for form fields

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The kind of input a field comes from, which selects the rule applied to it.
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldKind {
    #[default]
    #[display("text")]
    Text,
    #[display("email")]
    Email,
    #[display("password")]
    Password,
    #[display("other")]
    Other,
}

impl From<&str> for FieldKind {
    /// Maps an HTML input `type` attribute onto a kind. Anything unknown is `Other`.
    fn from(input_type: &str) -> Self {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            _ => FieldKind::Other,
        }
    }
}

impl From<String> for FieldKind {
    fn from(input_type: String) -> Self {
        FieldKind::from(input_type.as_str())
    }
}

/// One form input: its current raw value plus the attributes validation reads.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl Field {
    pub fn new(value: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            value: value.into(),
            kind,
            required,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(value, FieldKind::Text, false)
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::new(value, FieldKind::Email, false)
    }

    pub fn password(value: impl Into<String>) -> Self {
        Self::new(value, FieldKind::Password, false)
    }

    /// Marks the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A field together with the name of the input it was read from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Display)]
#[display("{name}")]
pub struct NamedField {
    pub name: String,
    #[serde(flatten)]
    pub field: Field,
}

impl NamedField {
    pub fn new(name: impl Into<String>, field: Field) -> Self {
        Self {
            name: name.into(),
            field,
        }
    }
}

/// The on-disk shape of a whole form.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FormDocument {
    #[serde(default)]
    pub fields: Vec<NamedField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_from_input_type() {
        let cases = vec![
            ("text", FieldKind::Text),
            ("email", FieldKind::Email),
            ("password", FieldKind::Password),
            ("  EMAIL ", FieldKind::Email),
            ("Password", FieldKind::Password),
            ("number", FieldKind::Other),
            ("", FieldKind::Other),
        ];

        for (input_type, expected) in cases {
            assert_eq!(FieldKind::from(input_type), expected,
                       "Input type {:?} was mapped to the wrong kind", input_type);
        }
    }

    #[test]
    fn test_kind_display_matches_input_type() {
        for kind in FieldKind::iter() {
            assert_eq!(FieldKind::from(kind.to_string().as_str()), kind);
        }
    }

    #[test]
    fn test_field_defaults_from_json() {
        let field: Field = serde_json::from_str(r#"{"value": "hello"}"#).unwrap();
        assert_eq!(field, Field::text("hello"));

        let field: Field = serde_json::from_str(r#"{"kind": "tel", "required": true}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Other);
        assert!(field.required);
        assert!(field.value.is_empty());
    }

    #[test]
    fn test_named_field_flattens() {
        let named: NamedField =
            serde_json::from_str(r#"{"name": "email", "value": "a@b.c", "kind": "email"}"#).unwrap();
        assert_eq!(named.name, "email");
        assert_eq!(named.field, Field::email("a@b.c"));
        assert_eq!(named.to_string(), "email");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&Field::password("secret").required()).unwrap();
        assert!(json.contains(r#""kind":"password""#), "Unexpected JSON: {}", json);
    }
}
