use crate::lexicon::Lexicon;
use crate::models::Turn;

/// Lexicon polarity of the customer's turns (-1 to 1)
///
/// Each turn with at least one positive or negative hit scores
/// `(pos - neg) / (pos + neg)`; turns without hits are left out of the mean.
/// No scored turn at all yields 0.0.
pub fn estimate_sentiment(customer: &[Turn], lexicon: &Lexicon) -> f64 {
    let mut total = 0.0;
    let mut scored_turns = 0usize;

    for turn in customer {
        let positive = lexicon.positive.count_in(&turn.text);
        let negative = lexicon.negative.count_in(&turn.text);

        if positive + negative == 0 {
            continue;
        }

        total += (positive as f64 - negative as f64) / (positive + negative) as f64;
        scored_turns += 1;
    }

    if scored_turns == 0 {
        0.0
    } else {
        total / scored_turns as f64
    }
}
