use crate::core::{
    EditableField,
    PageDocument,
    PageError,
};

/// Strict decode of a page payload. A malformed payload is an error, never a
/// default document: saving on top of a silently-defaulted document would
/// wipe whatever the store actually holds.
pub fn decode_document(raw: &str) -> Result<PageDocument, PageError> {
    Ok(serde_json::from_str::<PageDocument>(raw)?)
}

pub fn encode_document(document: &PageDocument) -> Result<String, PageError> {
    Ok(serde_json::to_string(document)?)
}

/// Field-scoped merge: overwrite exactly the addressed field, leave every
/// other key in the document (and under `intro`) untouched. The match is
/// exhaustive over the closed field set.
pub fn apply_field_update(document: &mut PageDocument, field: EditableField, new_text: &str) {
    match field {
        EditableField::Intro => {
            document.intro.content = new_text.to_string();
        }
        EditableField::Placeholder => {
            document.placeholder = new_text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const DOC: &str = r#"{"intro":{"content":"old","foo":1},"placeholder":"p","theme":"sky"}"#;

    #[test]
    fn decode_is_strict() {
        assert!(matches!(decode_document("not json").unwrap_err(), PageError::Json(_)));
        assert!(matches!(decode_document(r#"{"placeholder":"p"}"#).unwrap_err(), PageError::Json(_)));
    }

    #[test]
    fn round_trip_preserves_unknown_fields() {
        let document = decode_document(DOC).unwrap();
        let encoded = encode_document(&document).unwrap();

        let reparsed = decode_document(&encoded).unwrap();
        assert_eq!(reparsed, document);

        // Unknown keys survive at both nesting levels, byte-for-byte at the
        // JSON value level.
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["intro"]["foo"], json!(1));
        assert_eq!(value["theme"], json!("sky"));
    }

    #[test]
    fn intro_update_preserves_sibling_keys() {
        let mut document = decode_document(DOC).unwrap();
        apply_field_update(&mut document, EditableField::Intro, "X");

        assert_eq!(document.intro.content, "X");
        assert_eq!(document.intro.extra.get("foo"), Some(&json!(1)));
        assert_eq!(document.placeholder, "p");
    }

    #[test]
    fn placeholder_update_leaves_intro_untouched() {
        let mut document = decode_document(DOC).unwrap();
        apply_field_update(&mut document, EditableField::Placeholder, "Y");

        assert_eq!(document.placeholder, "Y");
        assert_eq!(document.intro.content, "old");
        assert_eq!(document.intro.extra.get("foo"), Some(&json!(1)));
    }
}
