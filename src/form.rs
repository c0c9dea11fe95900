//! Loading form documents from JSON.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::models::FormDocument;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read form")]
    Io(#[from] io::Error),
    #[error("malformed form document")]
    Parse(#[from] serde_json::Error),
    #[error("field name {0:?} appears more than once")]
    DuplicateName(String),
}

/// Parses a form document and checks that field names are unique.
pub fn load_from_reader<R: Read>(reader: R) -> Result<FormDocument, FormError> {
    let document: FormDocument = serde_json::from_reader(reader)?;

    let mut seen = HashSet::new();
    for named in &document.fields {
        if !seen.insert(named.name.as_str()) {
            return Err(FormError::DuplicateName(named.name.clone()));
        }
    }

    debug!("Loaded form document with {} field(s)", document.fields.len());
    Ok(document)
}

pub fn load_from_path(path: &Path) -> Result<FormDocument, FormError> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, FieldKind};

    #[test]
    fn test_load_document() {
        let json = r#"{
            "fields": [
                {"name": "username", "value": "alice", "required": true},
                {"name": "email", "value": "alice@example.com", "kind": "email", "required": true},
                {"name": "age", "value": "42", "kind": "number"}
            ]
        }"#;

        let document = load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(document.fields.len(), 3);
        assert_eq!(document.fields[0].field, Field::text("alice").required());
        assert_eq!(document.fields[1].field.kind, FieldKind::Email);
        assert_eq!(document.fields[2].field.kind, FieldKind::Other);
    }

    #[test]
    fn test_empty_document() {
        let document = load_from_reader("{}".as_bytes()).unwrap();
        assert!(document.fields.is_empty());
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(load_from_reader("not json".as_bytes()), Err(FormError::Parse(_))));
        assert!(matches!(load_from_reader(r#"{"fields": [{"value": "x"}]}"#.as_bytes()),
                         Err(FormError::Parse(_))));

        let duplicated = r#"{"fields": [{"name": "a"}, {"name": "a"}]}"#;
        match load_from_reader(duplicated.as_bytes()) {
            Err(FormError::DuplicateName(name)) => assert_eq!(name, "a"),
            other => panic!("Expected a duplicate name error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_path(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(FormError::Io(_))));
    }
}
