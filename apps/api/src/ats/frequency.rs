use serde::{Deserialize, Serialize};

use crate::ats::keywords::KeywordCounts;

pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// One bar pair in the job-vs-resume frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub job_count: usize,
    pub resume_count: usize,
}

/// The `limit` most frequent job keywords with their resume-side counts.
///
/// Empty when either text has no keywords; there is nothing to compare then.
pub fn compare_frequencies(
    resume_text: &str,
    job_description: &str,
    limit: usize,
) -> Vec<KeywordFrequency> {
    let resume_counts = KeywordCounts::from_text(resume_text);
    let job_counts = KeywordCounts::from_text(job_description);

    if resume_counts.is_empty() || job_counts.is_empty() {
        return vec![];
    }

    job_counts
        .most_common(limit)
        .into_iter()
        .map(|(keyword, job_count)| KeywordFrequency {
            keyword: keyword.to_string(),
            job_count,
            resume_count: resume_counts.get(keyword),
        })
        .collect()
}
