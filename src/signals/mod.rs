pub mod cooperation;
pub mod flow;
pub mod keywords;
pub mod language;
pub mod sentiment;

pub use cooperation::*;
pub use flow::*;
pub use keywords::*;
pub use language::*;
pub use sentiment::*;

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::lexicon::Lexicon;
use crate::models::TurnSet;

/// Raw outputs of every signal extractor for one call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalScores {
    /// -1 to 1
    pub sentiment: f64,
    /// 0-100, 50 when no signal
    pub cooperation: f64,
    /// 0-100
    pub keyword_risk: f64,
    /// 0-100
    pub flow_risk: f64,
    pub language_switching: bool,
}

/// Run all extractors over the customer side of a call
///
/// The extractors are independent of each other; agent turns are not scored.
pub fn extract_signals(turns: &TurnSet, lexicon: &Lexicon, config: &ScoringConfig) -> SignalScores {
    let customer_text = turns.customer_text();

    SignalScores {
        sentiment: estimate_sentiment(&turns.customer, lexicon),
        cooperation: estimate_cooperation(&turns.customer, lexicon),
        keyword_risk: score_keyword_risk(&customer_text, lexicon, &config.keywords),
        flow_risk: score_flow_risk(&turns.customer, &config.flow),
        language_switching: detect_language_switching(&turns.customer, lexicon, &config.language),
    }
}
