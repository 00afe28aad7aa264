use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::error::RiskResult;
use crate::lexicon::Lexicon;
use crate::models::{RiskAnalysis, TranscriptRecord, TurnSet};
use crate::scoring::{aggregate_risk, classify_risk, collect_indicators, recommend};
use crate::signals::{extract_signals, SignalScores};

/// Scores call transcripts against a shared lexicon
///
/// Cloning is cheap; the lexicon is shared read-only between clones, so one
/// engine can be handed to every worker of a batch.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    lexicon: Arc<Lexicon>,
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(lexicon: Arc<Lexicon>, config: ScoringConfig) -> RiskResult<Self> {
        config.validate()?;
        Ok(Self { lexicon, config })
    }

    /// Engine with the built-in lexicon and default constants
    pub fn with_defaults() -> Self {
        Self {
            lexicon: Arc::new(Lexicon::builtin()),
            config: ScoringConfig::default(),
        }
    }

    /// Raw signal values for a classified call
    pub fn signals(&self, turns: &TurnSet) -> SignalScores {
        extract_signals(turns, &self.lexicon, &self.config)
    }

    /// Analyze one transcript, stamped with the current local time
    pub fn analyze(&self, record: &TranscriptRecord, source_id: &str) -> RiskAnalysis {
        self.analyze_at(record, source_id, Local::now())
    }

    /// Analyze one transcript with an explicit timestamp
    ///
    /// Every field other than `analyzed_at` depends only on the record and
    /// the engine's lexicon and configuration.
    pub fn analyze_at(
        &self,
        record: &TranscriptRecord,
        source_id: &str,
        analyzed_at: DateTime<Local>,
    ) -> RiskAnalysis {
        let turns = TurnSet::classify(record);
        let signals = self.signals(&turns);

        let risk_score = aggregate_risk(&signals, &self.config.weights);
        let risk_level = classify_risk(risk_score, &self.config.thresholds);

        let indicators = collect_indicators(
            &turns,
            signals.language_switching,
            &self.lexicon,
            self.config.max_indicators,
        );
        let recommendations = recommend(risk_level, signals.cooperation, &indicators);

        debug!(
            source_id,
            customer_turns = turns.customer.len(),
            agent_turns = turns.agent.len(),
            sentiment = signals.sentiment,
            cooperation = signals.cooperation,
            keyword_risk = signals.keyword_risk,
            flow_risk = signals.flow_risk,
            risk_score,
            risk_level = %risk_level,
            "Analyzed transcript"
        );

        RiskAnalysis {
            risk_level,
            risk_score,
            sentiment_score: signals.sentiment,
            cooperation_score: signals.cooperation,
            indicators,
            recommendations,
            source_id: source_id.to_string(),
            analyzed_at,
        }
    }
}
