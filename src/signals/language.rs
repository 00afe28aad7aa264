use crate::config::LanguageConfig;
use crate::lexicon::Lexicon;
use crate::models::Turn;

/// Dominant register of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Hindi,
    English,
    /// Tie, including no markers at all
    Mixed,
}

/// Classify a turn by comparing Hindi and English marker counts
pub fn classify_register(text: &str, lexicon: &Lexicon) -> Register {
    let hindi = lexicon.hindi_markers.count_in(text);
    let english = lexicon.english_markers.count_in(text);

    match hindi.cmp(&english) {
        std::cmp::Ordering::Greater => Register::Hindi,
        std::cmp::Ordering::Less => Register::English,
        std::cmp::Ordering::Equal => Register::Mixed,
    }
}

/// Whether the customer keeps alternating between Hindi and English
///
/// Only direct Hindi/English transitions count as switches; anything touching
/// a mixed turn does not. The switch count is compared against the total
/// number of customer turns.
pub fn detect_language_switching(customer: &[Turn], lexicon: &Lexicon, config: &LanguageConfig) -> bool {
    if customer.len() < config.min_turns {
        return false;
    }

    let registers: Vec<Register> = customer
        .iter()
        .map(|t| classify_register(&t.text, lexicon))
        .collect();

    let switches = registers
        .windows(2)
        .filter(|pair| {
            matches!(
                (pair[0], pair[1]),
                (Register::Hindi, Register::English) | (Register::English, Register::Hindi)
            )
        })
        .count();

    switches as f64 > registers.len() as f64 * config.switch_ratio
}
