use crate::lexicon::Lexicon;
use crate::models::Turn;

/// Neutral score when no cooperation signal is present
pub const NEUTRAL_COOPERATION: f64 = 50.0;

/// How agreeable the customer sounded (0-100, 50 = no signal)
///
/// Every matched cooperation indicator in a turn adds a point, every matched
/// non-cooperation indicator removes one. The net ratio over all matches is
/// mapped onto 0-100 around the neutral midpoint.
pub fn estimate_cooperation(customer: &[Turn], lexicon: &Lexicon) -> f64 {
    let mut points: i64 = 0;
    let mut total_indicators: usize = 0;

    for turn in customer {
        let cooperative = lexicon.cooperation.count_in(&turn.text);
        let uncooperative = lexicon.non_cooperation.count_in(&turn.text);

        points += cooperative as i64 - uncooperative as i64;
        total_indicators += cooperative + uncooperative;
    }

    if total_indicators == 0 {
        return NEUTRAL_COOPERATION;
    }

    let ratio = points as f64 / total_indicators as f64;
    (NEUTRAL_COOPERATION + ratio * 50.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::KeywordSet;
    use crate::models::Role;

    fn turn(text: &str) -> Turn {
        Turn {
            role: Role::Customer,
            text: text.to_string(),
            interrupted: false,
            confidence: 1.0,
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon {
            cooperation: KeywordSet::new(["okay", "sure"]),
            non_cooperation: KeywordSet::new(["busy"]),
            ..Lexicon::default()
        }
    }

    #[test]
    fn test_no_turns_is_neutral() {
        assert_eq!(estimate_cooperation(&[], &lexicon()), 50.0);
    }

    #[test]
    fn test_no_indicators_is_neutral() {
        assert_eq!(estimate_cooperation(&[turn("hello")], &lexicon()), 50.0);
    }

    #[test]
    fn test_fully_cooperative() {
        assert_eq!(estimate_cooperation(&[turn("okay sure")], &lexicon()), 100.0);
    }

    #[test]
    fn test_fully_uncooperative() {
        assert_eq!(estimate_cooperation(&[turn("busy"), turn("still busy")], &lexicon()), 0.0);
    }

    #[test]
    fn test_mixed_across_turns() {
        // +2 -1 over 3 indicators
        let score = estimate_cooperation(&[turn("okay sure"), turn("busy now")], &lexicon());
        assert!((score - (50.0 + 50.0 / 3.0)).abs() < 1e-9);
    }
}
