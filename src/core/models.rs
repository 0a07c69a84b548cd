use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use crate::core::PageError;

/// A page record as the content API stores it. `content` is an opaque
/// serialized payload; the server owns `updated_at` and the client never
/// writes it back.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageContentRecord {
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Decoded form of a page's content payload. Fields this client does not
/// know about are captured in `extra` and round-trip unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageDocument {
    pub intro: IntroSection,
    pub placeholder: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IntroSection {
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a content write: a full replace of the page payload.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContentPatch {
    pub content: String,
}

/// The fields this page is allowed to edit. Widget callbacks deliver field
/// ids as strings; `from_name` is the only place where an unknown name can
/// show up, and it is rejected there before any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Intro,
    Placeholder,
}

impl EditableField {
    pub fn from_name(name: &str) -> Result<Self, PageError> {
        match name {
            "intro" => Ok(EditableField::Intro),
            "placeholder" => Ok(EditableField::Placeholder),
            other => Err(PageError::UnknownField(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditableField::Intro => "intro",
            EditableField::Placeholder => "placeholder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        assert_eq!(EditableField::from_name("intro").unwrap(), EditableField::Intro);
        assert_eq!(EditableField::from_name("placeholder").unwrap(), EditableField::Placeholder);
        assert_eq!(EditableField::Intro.name(), "intro");
        assert_eq!(EditableField::Placeholder.name(), "placeholder");
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = EditableField::from_name("bogus").unwrap_err();
        assert!(matches!(err, PageError::UnknownField(ref name) if name == "bogus"));
    }
}
