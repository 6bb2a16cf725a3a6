use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The subset of Firestore value kinds this data model uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    BooleanValue(bool),
    TimestampValue(DateTime<Utc>),
    NullValue(()),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringValue(value.into())
    }

    /// `None` maps to an explicit Firestore null.
    pub fn optional_string(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::StringValue(v.to_string()),
            None => Self::NullValue(()),
        }
    }

    pub fn timestamp(value: DateTime<Utc>) -> Self {
        Self::TimestampValue(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::TimestampValue(v) => Some(*v),
            _ => None,
        }
    }
}

/// A Firestore document: a resource name plus a flat field map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl Document {
    pub fn with_fields(fields: HashMap<String, Value>) -> Self {
        Self {
            name: None,
            fields,
        }
    }

    /// The document id, i.e. the last segment of the resource name.
    pub fn doc_id(&self) -> Option<&str> {
        self.name.as_deref().and_then(|n| n.rsplit('/').next())
    }

    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Missing and null fields both read as `None`.
    pub fn optional_string_field(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .map(|v| v.to_string())
    }

    pub fn timestamp_field(&self, key: &str) -> Option<DateTime<Utc>> {
        self.fields.get(key).and_then(Value::as_timestamp)
    }
}

/// Response shape of the Firestore `listDocuments` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_value_with_firestore_tag() {
        let value = Value::string("Chess Club");

        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(json, r#"{"stringValue":"Chess Club"}"#);
    }

    #[test]
    fn should_serialize_none_as_null_value() {
        let value = Value::optional_string(None);

        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(json, r#"{"nullValue":null}"#);
    }

    #[test]
    fn should_deserialize_document_fields() {
        let raw = r#"{
            "name": "projects/p/databases/(default)/documents/universities/3c9f6f0e-8f2a-4a0b-9e68-0a6b84c6a1de",
            "fields": {
                "name": {"stringValue": "UTA"},
                "domain": {"nullValue": null},
                "createdAt": {"timestampValue": "2026-08-01T10:00:00Z"}
            },
            "createTime": "2026-08-01T10:00:00.123456Z",
            "updateTime": "2026-08-01T10:00:00.123456Z"
        }"#;

        let doc: Document = serde_json::from_str(raw).unwrap();

        assert_eq!(doc.doc_id(), Some("3c9f6f0e-8f2a-4a0b-9e68-0a6b84c6a1de"));
        assert_eq!(doc.string_field("name"), Some("UTA"));
        assert!(doc.optional_string_field("domain").is_none());
        assert!(doc.timestamp_field("createdAt").is_some());
    }

    #[test]
    fn should_read_missing_field_as_none() {
        let doc = Document::default();

        assert!(doc.string_field("name").is_none());
        assert!(doc.optional_string_field("domain").is_none());
        assert!(doc.timestamp_field("createdAt").is_none());
    }

    #[test]
    fn should_deserialize_empty_list_response() {
        let response: ListDocumentsResponse = serde_json::from_str("{}").unwrap();

        assert!(response.documents.is_empty());
        assert!(response.next_page_token.is_none());
    }
}
