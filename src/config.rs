use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

/// Weights applied to each signal's risk contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub sentiment: f64,
    pub cooperation: f64,
    pub keywords: f64,
    pub flow: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.25,
            cooperation: 0.35,
            keywords: 0.30,
            flow: 0.10,
        }
    }
}

/// Inclusive lower bounds of each level above Low
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical: 75.0,
            high: 50.0,
            medium: 25.0,
        }
    }
}

/// Points per distinct keyword; low-risk hits are subtracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self {
            high: 30.0,
            medium: 15.0,
            low: 10.0,
        }
    }
}

/// Conversation-flow penalties and the conditions that trigger them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Added when more than `max_interruptions` customer turns were interrupted
    pub interruption_penalty: f64,
    /// Added when the share of short replies exceeds `brevity_ratio`
    pub brevity_penalty: f64,
    /// Added when the share of low-confidence turns exceeds `low_confidence_ratio`
    pub low_confidence_penalty: f64,
    pub max_interruptions: usize,
    /// Replies with at most this many words count as short
    pub short_reply_words: usize,
    pub brevity_ratio: f64,
    /// Turns below this transcription confidence count as unclear
    pub low_confidence: f64,
    pub low_confidence_ratio: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            interruption_penalty: 20.0,
            brevity_penalty: 15.0,
            low_confidence_penalty: 10.0,
            max_interruptions: 2,
            short_reply_words: 2,
            brevity_ratio: 0.7,
            low_confidence: 0.7,
            low_confidence_ratio: 0.5,
        }
    }
}

/// Hindi/English alternation detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Fewer customer turns than this never count as switching
    pub min_turns: usize,
    /// Switches must exceed this share of the customer turn count
    pub switch_ratio: f64,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            min_turns: 3,
            switch_ratio: 0.3,
        }
    }
}

/// All tunable constants of the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
    pub keywords: KeywordWeights,
    pub flow: FlowConfig,
    pub language: LanguageConfig,
    /// Maximum number of indicators kept per analysis
    pub max_indicators: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            thresholds: RiskThresholds::default(),
            keywords: KeywordWeights::default(),
            flow: FlowConfig::default(),
            language: LanguageConfig::default(),
            max_indicators: 7,
        }
    }
}

impl ScoringConfig {
    /// Load overrides from a JSON file; keys not present keep their defaults
    pub fn from_json_file(path: &Path) -> RiskResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RiskError::Configuration(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> RiskResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RiskError::Configuration(format!("invalid scoring config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the score bounds or the level ladder
    pub fn validate(&self) -> RiskResult<()> {
        let w = &self.weights;
        if [w.sentiment, w.cooperation, w.keywords, w.flow]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(RiskError::Configuration(
                "risk weights must be finite and non-negative".into(),
            ));
        }

        let t = &self.thresholds;
        if !(t.critical > t.high && t.high > t.medium && t.medium > 0.0) {
            return Err(RiskError::Configuration(format!(
                "thresholds must be strictly descending and positive (critical {}, high {}, medium {})",
                t.critical, t.high, t.medium
            )));
        }

        if self.max_indicators == 0 {
            return Err(RiskError::Configuration("max_indicators must be at least 1".into()));
        }

        Ok(())
    }
}
