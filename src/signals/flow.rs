use crate::config::FlowConfig;
use crate::models::Turn;

/// Conversation-flow risk (0-100) from interruptions, brevity and unclear speech
///
/// Additive penalties, each only considered when the customer spoke at all.
pub fn score_flow_risk(customer: &[Turn], config: &FlowConfig) -> f64 {
    if customer.is_empty() {
        return 0.0;
    }

    let turn_count = customer.len() as f64;
    let mut risk = 0.0;

    let interruptions = customer.iter().filter(|t| t.interrupted).count();
    if interruptions > config.max_interruptions {
        risk += config.interruption_penalty;
    }

    let short_replies = customer
        .iter()
        .filter(|t| t.word_count() <= config.short_reply_words)
        .count();
    if short_replies as f64 / turn_count > config.brevity_ratio {
        risk += config.brevity_penalty;
    }

    let unclear = customer
        .iter()
        .filter(|t| t.confidence < config.low_confidence)
        .count();
    if unclear as f64 / turn_count > config.low_confidence_ratio {
        risk += config.low_confidence_penalty;
    }

    f64::min(risk, 100.0)
}
