//! Full analysis payload: score report plus band, advice and the frequency chart data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::frequency::{compare_frequencies, KeywordFrequency, DEFAULT_TOP_KEYWORDS};
use crate::ats::scoring::{AtsScorer, ScoreBand, ScoreReport, ScoreThresholds};
use crate::models::resume::ResumeRecord;
use crate::resume::aggregate::aggregate;

const MAX_SUGGESTED_KEYWORDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub top_keywords: usize,
    pub thresholds: ScoreThresholds,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_keywords: DEFAULT_TOP_KEYWORDS,
            thresholds: ScoreThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub report: ScoreReport,
    pub band: ScoreBand,
    pub recommendation: String,
    /// Missing keywords worth adding; only populated for low scores.
    pub suggested_keywords: Vec<String>,
    pub keyword_frequencies: Vec<KeywordFrequency>,
    pub scorer_backend: String,
}

/// Aggregates the resume, scores it, and assembles everything the
/// presentation layer renders.
pub fn analyze(
    scorer: &dyn AtsScorer,
    resume: &ResumeRecord,
    job_description: &str,
    settings: &AnalysisSettings,
) -> AtsAnalysis {
    let resume_text = aggregate(resume);
    let report = scorer.score(&resume_text, job_description);
    let band = ScoreBand::from_score(report.score, &settings.thresholds);

    let suggested_keywords = match band {
        ScoreBand::Low => report
            .missing_keywords
            .iter()
            .take(MAX_SUGGESTED_KEYWORDS)
            .cloned()
            .collect(),
        ScoreBand::Medium | ScoreBand::High => vec![],
    };

    let keyword_frequencies =
        compare_frequencies(&resume_text, job_description, settings.top_keywords);

    debug!(
        score = report.score,
        matched = report.matched_count,
        total = report.total_job_keywords,
        ?band,
        "ATS analysis complete"
    );

    AtsAnalysis {
        report,
        band,
        recommendation: band.recommendation().to_string(),
        suggested_keywords,
        keyword_frequencies,
        scorer_backend: scorer.backend().to_string(),
    }
}
