use crate::lexicon::Lexicon;
use crate::models::TurnSet;

pub const CALL_AVOIDANCE: &str = "No user responses - possible call avoidance";
pub const DISENGAGEMENT: &str = "Very brief response - possible disengagement";
pub const LANGUAGE_SWITCHING: &str = "Frequent language switching - possible avoidance tactic";

/// A lone reply of at most this many words reads as disengagement
const BRIEF_RESPONSE_WORDS: usize = 2;

/// Human-readable evidence for an analysis
///
/// Generated in a fixed order (high-risk keywords, medium-risk keywords,
/// evasive, hostile and distress phrases, structural flags, language
/// switching) and then cut to `max_indicators`, so later categories are the
/// first to be dropped.
pub fn collect_indicators(
    turns: &TurnSet,
    language_switching: bool,
    lexicon: &Lexicon,
    max_indicators: usize,
) -> Vec<String> {
    let text = turns.customer_text();
    let mut indicators = Vec::new();

    for keyword in lexicon.high_risk.matches(&text) {
        indicators.push(format!("High risk keyword: '{}'", lexicon.translate(keyword)));
    }
    for keyword in lexicon.medium_risk.matches(&text) {
        indicators.push(format!("Medium risk keyword: '{}'", lexicon.translate(keyword)));
    }

    indicators.extend(hinglish_patterns(&text, lexicon));

    match turns.customer.as_slice() {
        [] => indicators.push(CALL_AVOIDANCE.to_string()),
        [only] if only.word_count() <= BRIEF_RESPONSE_WORDS => {
            indicators.push(DISENGAGEMENT.to_string())
        }
        _ => {}
    }

    if language_switching {
        indicators.push(LANGUAGE_SWITCHING.to_string());
    }

    indicators.truncate(max_indicators);
    indicators
}

/// Evasive, hostile and financial-distress phrases, tagged by category
fn hinglish_patterns(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let evasive = lexicon
        .evasive
        .matches(text)
        .map(|p| format!("Evasive Hinglish phrase: '{}'", p));
    let hostile = lexicon
        .hostile
        .matches(text)
        .map(|p| format!("Hostile Hinglish phrase: '{}'", p));
    let distress = lexicon
        .distress
        .matches(text)
        .map(|p| format!("Financial distress indicator: '{}'", p));

    evasive.chain(hostile).chain(distress).collect()
}
