use thiserror::Error;

pub type RiskResult<T> = Result<T, RiskError>;

#[derive(Debug, Error)]
pub enum RiskError {
    /// A single transcript could not be read or decoded
    #[error("failed to load transcript `{source_id}`: {reason}")]
    TranscriptLoad { source_id: String, reason: String },

    /// Nothing can be analyzed with the given setup (missing directory, bad config file)
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl RiskError {
    pub fn transcript_load(source_id: impl Into<String>, reason: impl ToString) -> Self {
        Self::TranscriptLoad {
            source_id: source_id.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error only affects one transcript and a batch may continue
    pub fn is_per_transcript(&self) -> bool {
        matches!(self, Self::TranscriptLoad { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_load_message() {
        let err = RiskError::transcript_load("call_1.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "failed to load transcript `call_1.json`: expected value at line 1"
        );
        assert!(err.is_per_transcript());
    }

    #[test]
    fn test_configuration_is_fatal() {
        let err = RiskError::Configuration("directory `transcripts` does not exist".into());
        assert!(!err.is_per_transcript());
    }
}
