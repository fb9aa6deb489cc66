//! Keyword extraction — lowercases text, strips punctuation, and drops short
//! tokens and stopwords. Output keeps repeats since frequency matters to scoring.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Anything that is neither a word character nor whitespace. Word characters
/// are letters, numbers and `_`; combining marks and connector punctuation
/// other than `_` count as punctuation.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("NON_WORD pattern is valid"));

/// Shortest token, in characters, kept as a keyword.
const MIN_KEYWORD_LEN: usize = 3;

pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
    "am",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Extracts keywords in scan order, duplicates retained.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Occurrence counts keyed by keyword, ordered by first occurrence.
#[derive(Debug, Clone, Default)]
pub struct KeywordCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl KeywordCounts {
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::default();
        for keyword in keywords {
            counts.add(keyword.into());
        }
        counts
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_keywords(extract_keywords(text))
    }

    fn add(&mut self, keyword: String) {
        match self.index.get(&keyword) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(keyword.clone(), self.entries.len());
                self.entries.push((keyword, 1));
            }
        }
    }

    /// Occurrences of `keyword`, 0 when absent.
    pub fn get(&self, keyword: &str) -> usize {
        self.index
            .get(keyword)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Total occurrences including repeats.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    #[cfg(test)]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent keywords, highest count first. Ties keep
    /// first-occurrence order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn to_entries(&self) -> Vec<KeywordCount> {
        self.iter()
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.to_string(),
                count,
            })
            .collect()
    }
}
