use serde::{Deserialize, Serialize};

use super::TranscriptRecord;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Agent,
}

impl Role {
    /// Map the transcript role string; anything else is not a conversational party
    pub fn from_transcript(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Role::Customer),
            "assistant" => Some(Role::Agent),
            _ => None,
        }
    }
}

/// One utterance, normalized for lexicon matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    /// Lowercased, whitespace-joined text
    pub text: String,
    pub interrupted: bool,
    /// Transcription confidence, 1.0 when not reported, clamped to 0-1
    pub confidence: f64,
}

impl Turn {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Customer and agent turns of one call, each in original order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnSet {
    pub customer: Vec<Turn>,
    pub agent: Vec<Turn>,
}

impl TurnSet {
    /// Split a transcript into customer and agent turns
    ///
    /// Non-message items and items without a known role are skipped.
    pub fn classify(record: &TranscriptRecord) -> Self {
        let mut turns = TurnSet::default();

        for item in record.items.iter().filter(|i| i.is_message()) {
            let Some(role) = item.role.as_deref().and_then(Role::from_transcript) else {
                continue;
            };

            let turn = Turn {
                role,
                text: item.normalized_text(),
                interrupted: item.interrupted.unwrap_or(false),
                confidence: item.transcript_confidence.unwrap_or(1.0).clamp(0.0, 1.0),
            };

            match role {
                Role::Customer => turns.customer.push(turn),
                Role::Agent => turns.agent.push(turn),
            }
        }

        turns
    }

    /// All customer text joined with single spaces
    pub fn customer_text(&self) -> String {
        self.customer
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_transcript_json;

    #[test]
    fn test_classify_turns() {
        let json = r#"{
            "items": [
                {"type": "message", "role": "assistant", "content": ["Namaste, EMI due hai."]},
                {"type": "message", "role": "user", "content": ["Abhi", "Busy Hun"], "interrupted": true},
                {"type": "message", "role": "system", "content": ["ignored"]},
                {"type": "agent_handoff", "role": "user", "content": ["also ignored"]},
                {"type": "message", "role": "user", "content": ["kal call karo"], "transcript_confidence": 0.55}
            ]
        }"#;

        let record = parse_transcript_json(json).unwrap();
        let turns = TurnSet::classify(&record);

        assert_eq!(turns.agent.len(), 1);
        assert_eq!(turns.customer.len(), 2);

        assert_eq!(turns.customer[0].text, "abhi busy hun");
        assert!(turns.customer[0].interrupted);
        assert_eq!(turns.customer[0].confidence, 1.0);

        assert_eq!(turns.customer[1].text, "kal call karo");
        assert!(!turns.customer[1].interrupted);
        assert_eq!(turns.customer[1].confidence, 0.55);

        assert_eq!(turns.customer_text(), "abhi busy hun kal call karo");
    }

    #[test]
    fn test_confidence_is_clamped() {
        let json = r#"{
            "items": [
                {"type": "message", "role": "user", "content": ["haan"], "transcript_confidence": 1.7},
                {"type": "message", "role": "user", "content": ["nahi"], "transcript_confidence": -0.2}
            ]
        }"#;

        let turns = TurnSet::classify(&parse_transcript_json(json).unwrap());

        assert_eq!(turns.customer[0].confidence, 1.0);
        assert_eq!(turns.customer[1].confidence, 0.0);
    }

    #[test]
    fn test_word_count() {
        let turn = Turn {
            role: Role::Customer,
            text: "haan  theek hai".to_string(),
            interrupted: false,
            confidence: 1.0,
        };
        assert_eq!(turn.word_count(), 3);
    }
}
