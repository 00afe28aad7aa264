use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::{RiskAnalysis, RiskLevel};

/// Returned instead of a report when there is nothing to summarize
pub const NO_ANALYSES: &str = "No analyses to report";

const BANNER_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 20;
const ENTRY_RULE_WIDTH: usize = 40;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A transcript that could not be analyzed in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedTranscript {
    pub source_id: String,
    pub reason: String,
}

/// Portfolio summary over a set of analyses
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub count: usize,
    /// Every level is present, zero when unused
    pub per_level_counts: BTreeMap<RiskLevel, usize>,
    pub average_score: f64,
    /// Highest risk first; equal scores keep their input order
    pub ordered_analyses: Vec<RiskAnalysis>,
}

impl AggregateReport {
    /// Summarize analyses, or `None` when there are none
    pub fn build(analyses: Vec<RiskAnalysis>) -> Option<Self> {
        if analyses.is_empty() {
            return None;
        }

        let mut per_level_counts: BTreeMap<RiskLevel, usize> =
            RiskLevel::ALL.iter().map(|level| (*level, 0)).collect();
        for analysis in &analyses {
            *per_level_counts.entry(analysis.risk_level).or_insert(0) += 1;
        }

        let count = analyses.len();
        let average_score = analyses.iter().map(|a| a.risk_score).sum::<f64>() / count as f64;

        let mut ordered_analyses = analyses;
        ordered_analyses.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));

        Some(Self {
            count,
            per_level_counts,
            average_score,
            ordered_analyses,
        })
    }

    pub fn level_count(&self, level: RiskLevel) -> usize {
        self.per_level_counts.get(&level).copied().unwrap_or(0)
    }

    /// Share of analyses at `level`, in percent
    pub fn level_percentage(&self, level: RiskLevel) -> f64 {
        self.level_count(level) as f64 / self.count as f64 * 100.0
    }

    /// High and Critical analyses, highest risk first
    pub fn priority_cases(&self) -> impl Iterator<Item = &RiskAnalysis> {
        self.ordered_analyses
            .iter()
            .filter(|a| a.risk_level.is_priority())
    }

    /// Render the text report
    pub fn render(
        &self,
        generated_at: DateTime<Local>,
        run_id: Option<&str>,
        skipped: &[SkippedTranscript],
    ) -> String {
        let mut output = String::new();
        let banner = "=".repeat(BANNER_WIDTH);
        let section_rule = "-".repeat(SECTION_RULE_WIDTH);

        output.push_str(&format!("{}\nCUSTOMER RISK ANALYSIS REPORT\n{}\n", banner, banner));
        output.push_str(&format!(
            "Generated: {}\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));
        if let Some(run_id) = run_id {
            output.push_str(&format!("Run ID: {}\n", run_id));
        }
        output.push_str(&format!("Total Transcripts Analyzed: {}\n\n", self.count));

        output.push_str(&format!("SUMMARY STATISTICS:\n{}\n", section_rule));
        for level in RiskLevel::ALL {
            output.push_str(&format!(
                "{} Risk: {} ({:.1}%)\n",
                level,
                self.level_count(level),
                self.level_percentage(level)
            ));
        }
        output.push_str(&format!(
            "Average Risk Score: {:.1}/100\n\n",
            self.average_score
        ));

        output.push_str(&format!("INDIVIDUAL ANALYSES:\n{}", section_rule));
        for analysis in &self.ordered_analyses {
            output.push_str("\n\n");
            output.push_str(&render_analysis(analysis));
            output.push_str(&"-".repeat(ENTRY_RULE_WIDTH));
        }

        if !skipped.is_empty() {
            output.push_str(&format!("\n\nSKIPPED TRANSCRIPTS:\n{}", section_rule));
            for skip in skipped {
                output.push_str(&format!("\n  • {}: {}", skip.source_id, skip.reason));
            }
        }

        output
    }
}

/// Render one analysis as a block of lines
pub fn render_analysis(analysis: &RiskAnalysis) -> String {
    let mut output = String::new();
    output.push_str(&format!("File: {}\n", analysis.source_id));
    output.push_str(&format!("Risk Level: {}\n", analysis.risk_level));
    output.push_str(&format!("Risk Score: {:.1}/100\n", analysis.risk_score));
    output.push_str(&format!("Sentiment: {:.2}\n", analysis.sentiment_score));
    output.push_str(&format!("Cooperation: {:.1}%\n", analysis.cooperation_score));

    if !analysis.indicators.is_empty() {
        output.push_str("Key Indicators:\n");
        for indicator in &analysis.indicators {
            output.push_str(&format!("  • {}\n", indicator));
        }
    }

    if !analysis.recommendations.is_empty() {
        output.push_str("Recommendations:\n");
        for recommendation in &analysis.recommendations {
            output.push_str(&format!("  • {}\n", recommendation));
        }
    }

    output
}

/// Render a report for any set of analyses, including none
pub fn render_report(
    analyses: Vec<RiskAnalysis>,
    generated_at: DateTime<Local>,
    run_id: Option<&str>,
    skipped: &[SkippedTranscript],
) -> String {
    match AggregateReport::build(analyses) {
        Some(report) => report.render(generated_at, run_id, skipped),
        None => NO_ANALYSES.to_string(),
    }
}
