use crate::config::{RiskThresholds, RiskWeights};
use crate::models::RiskLevel;
use crate::signals::SignalScores;

/// Combine the four scalar signals into a 0-100 risk score
///
/// Sentiment maps -1 -> 100 risk and +1 -> 0; cooperation is inverted.
pub fn aggregate_risk(signals: &SignalScores, weights: &RiskWeights) -> f64 {
    let sentiment_risk = f64::max(0.0, (1.0 - signals.sentiment) * 50.0);
    let cooperation_risk = 100.0 - signals.cooperation;

    let score = weights.sentiment * sentiment_risk
        + weights.cooperation * cooperation_risk
        + weights.keywords * signals.keyword_risk
        + weights.flow * signals.flow_risk;

    score.clamp(0.0, 100.0)
}

/// Map a risk score onto the level ladder, each bound inclusive
pub fn classify_risk(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score >= thresholds.critical {
        RiskLevel::Critical
    } else if score >= thresholds.high {
        RiskLevel::High
    } else if score >= thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(sentiment: f64, cooperation: f64, keyword_risk: f64, flow_risk: f64) -> SignalScores {
        SignalScores {
            sentiment,
            cooperation,
            keyword_risk,
            flow_risk,
            language_switching: false,
        }
    }

    #[test]
    fn test_neutral_call() {
        // sentiment 0 -> 50 risk, cooperation 50 -> 50 risk
        let score = aggregate_risk(&signals(0.0, 50.0, 0.0, 0.0), &RiskWeights::default());
        assert!((score - (0.25 * 50.0 + 0.35 * 50.0)).abs() < 1e-9);
        assert_eq!(classify_risk(score, &RiskThresholds::default()), RiskLevel::Medium);
    }

    #[test]
    fn test_extremes_stay_in_bounds() {
        let weights = RiskWeights::default();
        assert_eq!(aggregate_risk(&signals(1.0, 100.0, 0.0, 0.0), &weights), 0.0);
        let worst = aggregate_risk(&signals(-1.0, 0.0, 100.0, 100.0), &weights);
        assert!((worst - 100.0).abs() < 1e-9 && worst <= 100.0);

        let heavy = RiskWeights {
            sentiment: 1.0,
            cooperation: 1.0,
            keywords: 1.0,
            flow: 1.0,
        };
        assert_eq!(aggregate_risk(&signals(-1.0, 0.0, 100.0, 100.0), &heavy), 100.0);
    }

    #[test]
    fn test_threshold_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(classify_risk(0.0, &t), RiskLevel::Low);
        assert_eq!(classify_risk(24.999, &t), RiskLevel::Low);
        assert_eq!(classify_risk(25.0, &t), RiskLevel::Medium);
        assert_eq!(classify_risk(49.999, &t), RiskLevel::Medium);
        assert_eq!(classify_risk(50.0, &t), RiskLevel::High);
        assert_eq!(classify_risk(74.999, &t), RiskLevel::High);
        assert_eq!(classify_risk(75.0, &t), RiskLevel::Critical);
        assert_eq!(classify_risk(100.0, &t), RiskLevel::Critical);
    }

    #[test]
    fn test_classification_is_monotone() {
        let t = RiskThresholds::default();
        let mut previous = RiskLevel::Low;
        for step in 0..=1000 {
            let level = classify_risk(step as f64 / 10.0, &t);
            assert!(level >= previous);
            previous = level;
        }
    }
}
