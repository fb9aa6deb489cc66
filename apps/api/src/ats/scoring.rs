//! ATS scoring — keyword overlap between resume text and a job description.
//!
//! Default backend: `KeywordAtsScorer` (exact token equality, deterministic).
//! `AppState` holds an `Arc<dyn AtsScorer>` so the backend can be swapped at startup.

use serde::{Deserialize, Serialize};

use crate::ats::keywords::KeywordCounts;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: f64,            // 0 – 100, one decimal
    pub match_percentage: f64, // 0 – 100, one decimal
    pub matched_count: usize,
    pub total_job_keywords: usize,
    /// Distinct job keywords found in the resume, job-description order.
    pub matched_keywords: Vec<String>,
    /// Distinct job keywords absent from the resume, job-description order.
    pub missing_keywords: Vec<String>,
}

impl ScoreReport {
    /// Report for a job description with no extractable keywords.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            match_percentage: 0.0,
            matched_count: 0,
            total_job_keywords: 0,
            matched_keywords: vec![],
            missing_keywords: vec![],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            medium: 60.0,
        }
    }
}

impl ScoreBand {
    pub fn from_score(score: f64, thresholds: &ScoreThresholds) -> Self {
        match score {
            s if s >= thresholds.high => ScoreBand::High,
            s if s >= thresholds.medium => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            ScoreBand::High => "Excellent! Your resume is well-aligned with the job description.",
            ScoreBand::Medium => {
                "Your resume is moderately aligned with the job description. \
                 Consider adding a few more relevant keywords to improve your score."
            }
            ScoreBand::Low => {
                "Your resume needs significant improvement for this position. \
                 Consider adding these missing keywords to your resume."
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
pub trait AtsScorer: Send + Sync {
    fn score(&self, resume_text: &str, job_description: &str) -> ScoreReport;

    /// Short label reported alongside analyses.
    fn backend(&self) -> &'static str;
}

pub struct KeywordAtsScorer;

impl AtsScorer for KeywordAtsScorer {
    fn score(&self, resume_text: &str, job_description: &str) -> ScoreReport {
        score(resume_text, job_description)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_text` against `job_description`.
///
/// Algorithm:
/// 1. Count keywords on both sides.
/// 2. For each distinct job keyword with job count `c` and resume count `r`,
///    `min(c, r)` occurrences are matched. Any `r > 0` puts the keyword in
///    `matched_keywords`, even when `r < c`; `r == 0` puts it in `missing_keywords`.
/// 3. match_percentage = matched occurrences / job occurrences × 100.
pub fn score(resume_text: &str, job_description: &str) -> ScoreReport {
    let job_counts = KeywordCounts::from_text(job_description);
    if job_counts.is_empty() {
        return ScoreReport::empty();
    }
    let resume_counts = KeywordCounts::from_text(resume_text);

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    let mut matched_count = 0;

    for (keyword, job_count) in job_counts.iter() {
        let resume_count = resume_counts.get(keyword);
        if resume_count > 0 {
            matched_count += job_count.min(resume_count);
            matched_keywords.push(keyword.to_string());
        } else {
            missing_keywords.push(keyword.to_string());
        }
    }

    let total_job_keywords = job_counts.total();
    let match_percentage = matched_count as f64 / total_job_keywords as f64 * 100.0;
    let score = match_percentage.min(100.0);

    ScoreReport {
        score: round_one_decimal(score),
        match_percentage: round_one_decimal(match_percentage),
        matched_count,
        total_job_keywords,
        matched_keywords,
        missing_keywords,
    }
}

/// Rounds to one decimal, ties to even, judged on the exact binary value.
fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    if (scaled - scaled.trunc()).abs() != 0.5 {
        return scaled.round() / 10.0;
    }

    // `scaled` may only look like a tie after the multiply rounded it.
    let residual = value.mul_add(10.0, -scaled);
    let rounded = if residual > 0.0 {
        scaled.ceil()
    } else if residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round_ties_even()
    };
    rounded / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Experienced Python developer with Go and Rust skills";
    const JOB: &str = "Looking for a Python and Go developer with cloud experience";

    #[test]
    fn test_reference_scenario() {
        let report = score(RESUME, JOB);
        assert_eq!(report.matched_keywords, vec!["python", "developer"]);
        assert_eq!(report.missing_keywords, vec!["looking", "cloud", "experience"]);
        assert_eq!(report.total_job_keywords, 5);
        assert_eq!(report.matched_count, 2);
        assert_eq!(report.match_percentage, 40.0);
        assert_eq!(report.score, 40.0);
    }

    #[test]
    fn test_empty_job_description_is_degenerate() {
        let report = score(RESUME, "");
        assert_eq!(report, ScoreReport::empty());
    }

    #[test]
    fn test_stopword_only_job_description_is_degenerate() {
        let report = score(RESUME, "I am a go to it, and they would be");
        assert_eq!(report.score, 0.0);
        assert_eq!(report.total_job_keywords, 0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_identical_texts_match_fully() {
        let report = score(JOB, JOB);
        assert_eq!(report.match_percentage, 100.0);
        assert_eq!(report.score, 100.0);
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.matched_keywords.len(), 5);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let report = score("", JOB);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.matched_count, 0);
        assert_eq!(report.missing_keywords.len(), 5);
    }

    #[test]
    fn test_matched_count_capped_by_resume_occurrences() {
        // job: rust ×3, kafka ×1 ; resume: rust ×1
        let report = score("rust", "rust rust rust kafka");
        assert_eq!(report.total_job_keywords, 4);
        assert_eq!(report.matched_count, 1);
        assert_eq!(report.matched_keywords, vec!["rust"]);
        assert_eq!(report.missing_keywords, vec!["kafka"]);
        assert_eq!(report.match_percentage, 25.0);
    }

    #[test]
    fn test_extra_resume_occurrences_do_not_inflate_score() {
        let report = score("rust rust rust rust", "rust kafka");
        assert_eq!(report.matched_count, 1);
        assert_eq!(report.match_percentage, 50.0);
    }

    #[test]
    fn test_percentage_rounded_to_one_decimal() {
        let report = score("rust python", "rust python kafka");
        assert_eq!(report.match_percentage, 66.7);
        assert_eq!(report.score, 66.7);
    }

    const SIXTEEN_KEYWORDS: &str = "alpha bravo charlie delta echo foxtrot golf hotel \
         india juliet kilo lima mike november oscar papa";

    #[test]
    fn test_exact_ties_round_to_even() {
        // 1/16 → 6.25, 5/16 → 31.25, 3/16 → 18.75
        let report = score("alpha", SIXTEEN_KEYWORDS);
        assert_eq!(report.total_job_keywords, 16);
        assert_eq!(report.match_percentage, 6.2);
        assert_eq!(report.score, 6.2);

        let report = score("alpha bravo charlie delta echo", SIXTEEN_KEYWORDS);
        assert_eq!(report.match_percentage, 31.2);

        let report = score("alpha bravo charlie", SIXTEEN_KEYWORDS);
        assert_eq!(report.match_percentage, 18.8);
    }

    #[test]
    fn test_round_one_decimal_uses_exact_value() {
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
        // 0.15 is stored just below the tie, though 0.15 * 10.0 == 1.5
        assert_eq!(round_one_decimal(0.15), 0.1);
        assert_eq!(round_one_decimal(66.666), 66.7);
        assert_eq!(round_one_decimal(100.0), 100.0);
    }

    #[test]
    fn test_matched_and_missing_partition_job_keywords() {
        let job = "Senior Rust engineer: Rust, Kubernetes, Kafka, Postgres, observability.";
        let resume = "Rust engineer with Postgres and Grafana observability";
        let report = score(resume, job);

        let distinct = KeywordCounts::from_text(job).distinct();
        assert_eq!(
            report.matched_keywords.len() + report.missing_keywords.len(),
            distinct
        );
        for kw in &report.matched_keywords {
            assert!(!report.missing_keywords.contains(kw));
        }
        assert!(report.matched_count <= report.total_job_keywords);
        assert!(report.match_percentage <= 100.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        assert_eq!(score(RESUME, JOB), score(RESUME, JOB));
    }

    #[test]
    fn test_keyword_scorer_delegates() {
        let scorer = KeywordAtsScorer;
        assert_eq!(scorer.score(RESUME, JOB), score(RESUME, JOB));
        assert_eq!(scorer.backend(), "keyword");
    }

    #[test]
    fn test_band_thresholds() {
        let t = ScoreThresholds::default();
        assert_eq!(ScoreBand::from_score(80.0, &t), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(79.9, &t), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(60.0, &t), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(59.9, &t), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0.0, &t), ScoreBand::Low);
    }

    #[test]
    fn test_recommendation_per_band() {
        assert!(ScoreBand::High.recommendation().contains("Excellent"));
        assert!(ScoreBand::Medium.recommendation().contains("moderately"));
        assert!(ScoreBand::Low.recommendation().contains("missing keywords"));
    }
}
