use std::path::{Path, PathBuf};

use crate::error::{RiskError, RiskResult};
use crate::models::TranscriptRecord;

/// Source id used for records parsed from an in-memory string
pub const INLINE_SOURCE: &str = "<inline>";

/// Supplies transcript records to the batch runner
pub trait TranscriptSource: Send + Sync {
    /// Identifiers of every transcript available, in a stable order
    fn list(&self) -> RiskResult<Vec<String>>;

    /// Load one transcript; failures are scoped to that transcript
    fn load(&self, source_id: &str) -> RiskResult<TranscriptRecord>;
}

/// `*.json` transcripts in a single directory, identified by file name
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Fails when the directory does not exist, since nothing could be analyzed
    pub fn new(dir: impl Into<PathBuf>) -> RiskResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(RiskError::Configuration(format!(
                "transcript directory '{}' does not exist",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }
}

impl TranscriptSource for DirectorySource {
    fn list(&self) -> RiskResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            RiskError::Configuration(format!(
                "cannot list transcript directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();

        Ok(names)
    }

    fn load(&self, source_id: &str) -> RiskResult<TranscriptRecord> {
        parse_transcript_file(&self.dir.join(source_id))
    }
}

/// Parse one transcript file, identified by its file name in errors
pub fn parse_transcript_file(path: &Path) -> RiskResult<TranscriptRecord> {
    let source_id = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = std::fs::read_to_string(path)
        .map_err(|e| RiskError::transcript_load(&source_id, e))?;
    serde_json::from_str(&content).map_err(|e| RiskError::transcript_load(source_id, e))
}

/// Parse a transcript JSON string
pub fn parse_transcript_json(json: &str) -> RiskResult<TranscriptRecord> {
    serde_json::from_str(json).map_err(|e| RiskError::transcript_load(INLINE_SOURCE, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transcript_json() {
        let json = r#"{
            "items": [
                {"id": "item_1", "type": "message", "role": "assistant", "content": ["Hello"], "interrupted": false},
                {"id": "item_2", "type": "message", "role": "user", "content": ["haan", "boliye"], "transcript_confidence": 0.91}
            ]
        }"#;

        let record = parse_transcript_json(json).unwrap();
        assert_eq!(record.items.len(), 2);
        assert_eq!(record.items[1].role.as_deref(), Some("user"));
    }

    #[test]
    fn test_function_call_items_are_skipped() {
        let json = r#"{
            "items": [
                {"type": "function_call", "content": "end_call"},
                {"type": "message", "role": "user", "content": ["ok"]}
            ]
        }"#;

        let record = parse_transcript_json(json).unwrap();
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let err = parse_transcript_json(r#"{"items": [ {"type": "message""#).unwrap_err();
        assert!(err.is_per_transcript());
    }

    #[test]
    fn test_wrong_shape_is_load_error() {
        let err = parse_transcript_json(r#"{"items": "not a list"}"#).unwrap_err();
        assert!(matches!(err, RiskError::TranscriptLoad { .. }));
    }

    #[test]
    fn test_missing_directory() {
        let err = DirectorySource::new("/nonexistent/transcripts").unwrap_err();
        assert!(matches!(err, RiskError::Configuration(_)));
    }

    #[test]
    fn test_directory_lists_json_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"items": []}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"items": []}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a transcript").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let source = DirectorySource::new(dir.path()).unwrap();
        assert_eq!(source.list().unwrap(), vec!["a.json", "b.json"]);
        assert!(source.load("a.json").unwrap().items.is_empty());

        let err = source.load("missing.json").unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
