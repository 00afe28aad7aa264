use std::sync::Arc;

use chrono::Local;

use callrisk::{analyze_source, render_report, AggregateReport, DirectorySource, RiskEngine, RiskError};

const COOPERATIVE: &str = r#"{
    "items": [
        {"type": "message", "role": "assistant", "content": ["Namaste, aapka EMI pending hai."]},
        {"type": "message", "role": "user", "content": ["Haan ji, theek hai, kal payment kar dunga"]}
    ]
}"#;

const HOSTILE: &str = r#"{
    "items": [
        {"type": "message", "role": "assistant", "content": ["This is a reminder about your overdue balance."]},
        {"type": "message", "role": "user", "content": ["This is a scam, I refuse to pay"], "interrupted": true},
        {"type": "message", "role": "user", "content": ["phone rakh, police complaint karunga"], "interrupted": true},
        {"type": "message", "role": "user", "content": ["no"], "interrupted": true, "transcript_confidence": 0.4}
    ]
}"#;

fn write(dir: &std::path::Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

#[tokio::test]
async fn corrupted_file_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "call_a.json", COOPERATIVE);
    write(dir.path(), "call_b.json", "{\"items\": [ {\"type\": \"message\", ");
    write(dir.path(), "call_c.json", HOSTILE);

    let source = DirectorySource::new(dir.path()).unwrap();
    let outcome = analyze_source(&RiskEngine::with_defaults(), Arc::new(source))
        .await
        .unwrap();

    assert_eq!(outcome.analyses.len(), 2);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].source_id, "call_b.json");

    let report = AggregateReport::build(outcome.analyses.clone()).unwrap();
    assert_eq!(report.count, 2);
    assert_eq!(report.ordered_analyses[0].source_id, "call_c.json");

    let run_id = outcome.run_id.to_string();
    let text = render_report(outcome.analyses, Local::now(), Some(&run_id), &outcome.skipped);
    assert!(text.contains("Total Transcripts Analyzed: 2"));
    assert!(text.contains(&format!("Run ID: {}", run_id)));
    assert!(text.contains("SKIPPED TRANSCRIPTS:"));
    assert!(text.contains("call_b.json"));
}

#[tokio::test]
async fn empty_directory_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "README.txt", "transcripts go here");

    let source = DirectorySource::new(dir.path()).unwrap();
    let outcome = analyze_source(&RiskEngine::with_defaults(), Arc::new(source))
        .await
        .unwrap();

    assert_eq!(outcome.total(), 0);
    assert_eq!(
        render_report(outcome.analyses, Local::now(), None, &outcome.skipped),
        "No analyses to report"
    );
}

#[test]
fn missing_directory_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("transcripts");

    let err = DirectorySource::new(&missing).unwrap_err();
    assert!(matches!(err, RiskError::Configuration(_)));
}
