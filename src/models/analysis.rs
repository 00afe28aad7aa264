use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Collection urgency, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// All levels in ascending order
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// High and Critical customers need attention before the next cycle
    pub fn is_priority(&self) -> bool {
        *self >= RiskLevel::High
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk assessment for one call transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub risk_level: RiskLevel,
    /// Combined score (0-100)
    pub risk_score: f64,
    /// Lexicon polarity of the customer's turns (-1 to 1)
    pub sentiment_score: f64,
    /// 0-100, 50 when no signal
    pub cooperation_score: f64,
    /// Evidence strings, at most `max_indicators` of them
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
    /// File name or other identifier of the transcript
    pub source_id: String,
    pub analyzed_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::ALL.iter().max(), Some(&RiskLevel::Critical));
    }

    #[test]
    fn test_priority_levels() {
        assert!(!RiskLevel::Low.is_priority());
        assert!(!RiskLevel::Medium.is_priority());
        assert!(RiskLevel::High.is_priority());
        assert!(RiskLevel::Critical.is_priority());
        assert_eq!(RiskLevel::Critical.to_string(), "Critical");
    }
}
