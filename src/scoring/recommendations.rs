use crate::models::RiskLevel;

/// Cooperation below this asks for a different approach
pub const LOW_COOPERATION: f64 = 30.0;
/// Cooperation above this is worth preserving
pub const HIGH_COOPERATION: f64 = 70.0;

/// Next actions for the collections team, most important first
///
/// The base plan depends only on the risk level; cooperation and the evidence
/// text each add independent follow-ups.
pub fn recommend(level: RiskLevel, cooperation: f64, indicators: &[String]) -> Vec<String> {
    let mut recommendations: Vec<String> = base_plan(level).iter().map(|s| s.to_string()).collect();

    if cooperation < LOW_COOPERATION {
        recommendations
            .push("Customer showed low cooperation - consider different approach".to_string());
    } else if cooperation > HIGH_COOPERATION {
        recommendations
            .push("Customer was cooperative - maintain positive relationship".to_string());
    }

    recommendations.extend(evidence_followups(indicators));
    recommendations
}

fn base_plan(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Critical => &[
            "Escalate to senior collection specialist immediately",
            "Consider legal action or external collection agency",
            "Document all interactions thoroughly",
            "Review account for potential disputes or fraud",
        ],
        RiskLevel::High => &[
            "Schedule follow-up call within 24-48 hours",
            "Offer payment plan options",
            "Consider supervisor review of account",
            "Document customer concerns and objections",
        ],
        RiskLevel::Medium => &[
            "Follow up within 1 week",
            "Send payment reminder via email/SMS",
            "Monitor account closely for changes",
            "Be prepared to offer flexible payment options",
        ],
        RiskLevel::Low => &[
            "Standard follow-up schedule",
            "Customer appears cooperative",
            "Continue with normal collection process",
            "Consider this a positive interaction",
        ],
    }
}

/// Rule table over the lowercased indicator text; every rule is checked
const EVIDENCE_RULES: &[(&[&str], &str)] = &[
    (
        &["evasive hinglish phrase"],
        "Customer using evasive Hinglish - try direct Hindi approach",
    ),
    (
        &["hostile hinglish phrase"],
        "Customer showing hostility in Hinglish - escalate to Hindi-speaking senior agent",
    ),
    (
        &["financial distress indicator"],
        "Financial distress detected - offer EMI/installment options in Hindi",
    ),
    (
        &["language switching"],
        "Customer switching languages - may indicate discomfort, use consistent Hindi",
    ),
    (
        &["no money", "unemployed", "no job"],
        "Financial hardship indicated - consider compassionate collection approach",
    ),
    (
        &["lawyer", "court", "case"],
        "Legal threats detected - document thoroughly and involve legal team",
    ),
];

fn evidence_followups(indicators: &[String]) -> Vec<String> {
    let text = indicators.join(" ").to_lowercase();

    EVIDENCE_RULES
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| text.contains(*n)))
        .map(|(_, recommendation)| recommendation.to_string())
        .collect()
}
