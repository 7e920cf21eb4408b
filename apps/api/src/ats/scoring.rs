//! Keyword coverage scoring — how much of a job description a resume covers.
//!
//! Coverage is counted per occurrence of each JD token, so a term the JD repeats
//! weighs more than one it mentions once. Matching is exact on normalized tokens.

use std::collections::HashSet;

use serde::Serialize;

use crate::ats::tokenizer::{token_set, tokenize};

/// Upper bound on `missing_keywords` returned to callers.
pub const MAX_MISSING_KEYWORDS: usize = 50;

/// Result of scoring a resume against a JD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub missing_keywords: Vec<String>,
}

/// Scores `resume` against `jd`.
///
/// Algorithm:
/// 1. resume → token set, jd → token sequence
/// 2. total = max(1, jd token count)
/// 3. each jd token present in the resume set counts as matched, others are missing
/// 4. score = round(matched / total × 100)
/// 5. missing keywords deduped in first-seen order, capped at `MAX_MISSING_KEYWORDS`
///
/// Total over all inputs: an empty JD scores 0 with no missing keywords.
pub fn score(resume: &str, jd: &str) -> MatchResult {
    let resume_tokens = token_set(resume);
    let jd_tokens = tokenize(jd);
    let total = jd_tokens.len().max(1);

    let mut matched = 0_usize;
    let mut missing = Vec::new();
    for token in jd_tokens {
        if resume_tokens.contains(&token) {
            matched += 1;
        } else {
            missing.push(token);
        }
    }

    let score = ((matched as f64 / total as f64) * 100.0).round() as u32;

    MatchResult {
        score,
        missing_keywords: dedup_capped(missing, MAX_MISSING_KEYWORDS),
    }
}

/// Order-preserving dedup, keeping at most `cap` distinct values.
fn dedup_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}
