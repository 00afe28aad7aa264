use crate::config::KeywordWeights;
use crate::lexicon::Lexicon;

/// Keyword risk (0-100) of the concatenated customer text
///
/// Counts distinct keywords per tier, not occurrences. Low-risk (agreement)
/// language offsets the score.
pub fn score_keyword_risk(customer_text: &str, lexicon: &Lexicon, weights: &KeywordWeights) -> f64 {
    if customer_text.is_empty() {
        return 0.0;
    }

    let high = lexicon.high_risk.count_in(customer_text) as f64;
    let medium = lexicon.medium_risk.count_in(customer_text) as f64;
    let low = lexicon.low_risk.count_in(customer_text) as f64;

    let raw = high * weights.high + medium * weights.medium - low * weights.low;
    raw.clamp(0.0, 100.0)
}
