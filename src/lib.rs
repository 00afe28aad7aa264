pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod models;
pub mod report;
pub mod scoring;
pub mod signals;

pub use batch::{analyze_source, BatchOutcome};
pub use config::{FlowConfig, KeywordWeights, LanguageConfig, RiskThresholds, RiskWeights, ScoringConfig};
pub use engine::RiskEngine;
pub use error::{RiskError, RiskResult};
pub use io::{
    parse_transcript_file, parse_transcript_json, write_analyses_json, DirectorySource,
    FileReportSink, ReportSink, StdoutReportSink, TranscriptSource,
};
pub use lexicon::{KeywordSet, Lexicon};
pub use models::{RiskAnalysis, RiskLevel, Role, TranscriptItem, TranscriptRecord, Turn, TurnSet};
pub use report::{render_analysis, render_report, AggregateReport, SkippedTranscript, NO_ANALYSES};
pub use signals::SignalScores;
