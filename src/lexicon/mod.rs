pub mod tables;

use std::collections::{HashMap, HashSet};

/// Keywords matched by substring presence
///
/// Duplicates are dropped on construction (first occurrence kept), so a
/// keyword counts once no matter how many tables listed it. Iteration follows
/// insertion order, which keeps indicator output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries: Vec<String> = keywords
            .into_iter()
            .map(Into::<String>::into)
            .filter(|k| seen.insert(k.clone()))
            .collect();
        Self { entries }
    }

    /// Keywords occurring anywhere in `text`, in set order
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(move |k| text.contains(*k))
    }

    /// Number of distinct keywords present in `text`
    pub fn count_in(&self, text: &str) -> usize {
        self.matches(text).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Multilingual keyword and phrase tables shared by every signal extractor
///
/// Built once and never mutated. `Default` gives an empty lexicon, useful for
/// isolating a single table in tests.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub high_risk: KeywordSet,
    pub medium_risk: KeywordSet,
    pub low_risk: KeywordSet,
    pub cooperation: KeywordSet,
    pub non_cooperation: KeywordSet,
    pub positive: KeywordSet,
    pub negative: KeywordSet,
    pub evasive: KeywordSet,
    pub hostile: KeywordSet,
    pub distress: KeywordSet,
    pub hindi_markers: KeywordSet,
    pub english_markers: KeywordSet,
    /// Keyword -> English rendering for reports
    pub translations: HashMap<String, String>,
}

impl Lexicon {
    /// The built-in English / Hindi / Hinglish tables
    pub fn builtin() -> Self {
        Self {
            high_risk: KeywordSet::new(tables::HIGH_RISK.iter().copied()),
            medium_risk: KeywordSet::new(tables::MEDIUM_RISK.iter().copied()),
            low_risk: KeywordSet::new(tables::LOW_RISK.iter().copied()),
            cooperation: KeywordSet::new(tables::COOPERATION.iter().copied()),
            non_cooperation: KeywordSet::new(tables::NON_COOPERATION.iter().copied()),
            positive: KeywordSet::new(tables::POSITIVE.iter().copied()),
            negative: KeywordSet::new(tables::NEGATIVE.iter().copied()),
            evasive: KeywordSet::new(tables::EVASIVE.iter().copied()),
            hostile: KeywordSet::new(tables::HOSTILE.iter().copied()),
            distress: KeywordSet::new(tables::DISTRESS.iter().copied()),
            hindi_markers: KeywordSet::new(tables::HINDI_MARKERS.iter().copied()),
            english_markers: KeywordSet::new(tables::ENGLISH_MARKERS.iter().copied()),
            translations: tables::TRANSLATIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// English rendering of a keyword, or the keyword itself
    pub fn translate<'a>(&'a self, keyword: &'a str) -> &'a str {
        self.translations
            .get(keyword)
            .map(String::as_str)
            .unwrap_or(keyword)
    }
}
