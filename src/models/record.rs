use serde::{Deserialize, Deserializer, Serialize};

/// Root document written by the voice agent for one call
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TranscriptRecord {
    /// Message items only; function calls, handoffs and other entries are
    /// dropped before their fields are decoded
    #[serde(default, deserialize_with = "message_items")]
    pub items: Vec<TranscriptItem>,
}

/// A single message in the call history
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TranscriptItem {
    /// Item kind, only "message" items are analyzed
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    /// "user" (customer) or "assistant" (agent)
    #[serde(default)]
    pub role: Option<String>,
    /// Text fragments of the utterance
    #[serde(default)]
    pub content: Vec<String>,
    /// Whether the utterance was cut off
    #[serde(default)]
    pub interrupted: Option<bool>,
    /// Speech-to-text confidence (0-1)
    #[serde(default)]
    pub transcript_confidence: Option<f64>,
}

impl TranscriptItem {
    pub fn is_message(&self) -> bool {
        self.item_type.as_deref() == Some("message")
    }

    /// Fragments joined with a single space and lowercased
    pub fn normalized_text(&self) -> String {
        self.content.join(" ").to_lowercase()
    }
}

fn message_items<'de, D>(deserializer: D) -> Result<Vec<TranscriptItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;

    raw.into_iter()
        .filter(|item| item.get("type").and_then(|t| t.as_str()) == Some("message"))
        .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let json = r#"{
            "items": [
                {"type": "message", "role": "assistant", "content": ["Hello, this is a payment reminder."]},
                {"type": "message", "role": "user", "content": ["Haan", "BOLIYE"], "interrupted": true, "transcript_confidence": 0.62},
                {"type": "function_call", "name": "end_call"}
            ]
        }"#;

        let record: TranscriptRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.items.len(), 2);
        assert!(record.items.iter().all(TranscriptItem::is_message));
        assert_eq!(record.items[1].normalized_text(), "haan boliye");
        assert_eq!(record.items[1].interrupted, Some(true));
        assert_eq!(record.items[1].transcript_confidence, Some(0.62));
    }

    #[test]
    fn test_non_message_fields_are_not_decoded() {
        let json = r#"{
            "items": [
                {"type": "function_call", "content": "end_call", "interrupted": "n/a"},
                {"content": {"tool": "lookup"}},
                {"type": "message", "role": "user", "content": ["ok"]}
            ]
        }"#;

        let record: TranscriptRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].normalized_text(), "ok");
    }

    #[test]
    fn test_malformed_message_is_rejected() {
        let json = r#"{"items": [{"type": "message", "role": "user", "content": "ok"}]}"#;
        assert!(serde_json::from_str::<TranscriptRecord>(json).is_err());
    }

    #[test]
    fn test_missing_items_is_empty() {
        let record: TranscriptRecord = serde_json::from_str(r#"{"session": "abc"}"#).unwrap();
        assert!(record.items.is_empty());
    }
}
