//! Resume enhancement — weaves missing JD keywords into existing sentences.
//!
//! Nothing is generated: each missing keyword is attached to the sentence that
//! already talks about its skill cluster (or to the first sentence), as an
//! `including ...` phrase. The rewritten text is then re-scored.

use std::collections::{BTreeMap, HashSet};

use crate::ats::clusters::{display_name, SKILL_CLUSTERS};
use crate::ats::scoring::score;
use crate::ats::sentences::split_sentences;

/// Most keywords woven into a single sentence.
pub const MAX_KEYWORDS_PER_SENTENCE: usize = 8;

/// Output of `enhance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceResult {
    pub updated_text: String,
    pub new_score: u32,
    pub still_missing: Vec<String>,
}

/// Sentence index → keywords to weave into that sentence, in insertion order.
type InjectionPlan = BTreeMap<usize, Vec<String>>;

/// Rewrites `resume` so it mentions `missing_keywords`, then re-scores it against `jd`.
///
/// Sentences are re-joined with `\n`, so the output is normalized even when no
/// keyword is injected. `still_missing` may be non-empty: display labels such as
/// "Django framework" do not always reproduce the original token.
pub fn enhance(resume: &str, missing_keywords: &[String], jd: &str) -> EnhanceResult {
    let sentences = split_sentences(resume);
    let resume_lower = resume.to_lowercase();
    let missing_unique = normalize_keywords(missing_keywords);

    let plan = plan_injections(&sentences, &resume_lower, &missing_unique);

    let updated_text = sentences
        .iter()
        .enumerate()
        .map(|(idx, sentence)| match plan.get(&idx) {
            Some(keywords) if !keywords.is_empty() => weave_keywords(sentence, keywords),
            _ => sentence.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rescored = score(&updated_text, jd);

    EnhanceResult {
        updated_text,
        new_score: rescored.score,
        still_missing: rescored.missing_keywords,
    }
}

/// Lowercases and dedups keywords in first-seen order.
fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Assigns every keyword to a sentence.
///
/// Clusters are visited in table order. A cluster whose base appears in the
/// resume claims every still-unclaimed keyword relevant to it and sends them to
/// the first sentence mentioning the base. Leftovers go to sentence 0.
fn plan_injections(sentences: &[&str], resume_lower: &str, missing: &[String]) -> InjectionPlan {
    let mut plan = InjectionPlan::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for cluster in SKILL_CLUSTERS {
        if !resume_lower.contains(cluster.base) {
            continue;
        }

        let relevant: Vec<&String> = missing
            .iter()
            .filter(|k| !claimed.contains(k.as_str()) && cluster.is_relevant(k))
            .collect();
        if relevant.is_empty() {
            continue;
        }

        let target = sentences
            .iter()
            .position(|s| s.to_lowercase().contains(cluster.base))
            .unwrap_or(0);

        let slot = plan.entry(target).or_default();
        for keyword in relevant {
            claimed.insert(keyword.as_str());
            slot.push(keyword.clone());
        }
    }

    let leftovers: Vec<String> = missing
        .iter()
        .filter(|k| !claimed.contains(k.as_str()))
        .cloned()
        .collect();
    if !leftovers.is_empty() {
        plan.entry(0).or_default().extend(leftovers);
    }

    plan
}

/// Inserts `" including a, b, c"` before the sentence's terminal punctuation, or appends it.
fn weave_keywords(sentence: &str, keywords: &[String]) -> String {
    let mut seen = HashSet::new();
    let labels: Vec<&str> = keywords
        .iter()
        .filter(|k| seen.insert(k.as_str()))
        .take(MAX_KEYWORDS_PER_SENTENCE)
        .map(|k| display_name(k))
        .collect();
    let phrase = format!(" including {}", labels.join(", "));

    match sentence.chars().last() {
        Some(terminal @ ('.' | '!' | '?')) => {
            let body = &sentence[..sentence.len() - terminal.len_utf8()];
            format!("{body}{phrase}{terminal}")
        }
        _ => format!("{sentence}{phrase}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_cluster_keywords_use_display_names() {
        let result = enhance(
            "I use Python for data science.",
            &keywords(&["django", "numpy"]),
            "",
        );
        assert_eq!(
            result.updated_text,
            "I use Python for data science including Django framework, NumPy library."
        );
    }

    #[test]
    fn test_unclustered_keyword_falls_back_to_first_sentence() {
        let result = enhance(
            "Built internal tools. Mentored two interns.",
            &keywords(&["kubernetes"]),
            "",
        );
        assert_eq!(
            result.updated_text,
            "Built internal tools including kubernetes.\nMentored two interns."
        );
    }

    #[test]
    fn test_cluster_keyword_targets_sentence_mentioning_base() {
        let result = enhance(
            "Led a team of five engineers. Built services in Python!\nShipped weekly",
            &keywords(&["pandas", "graphql"]),
            "",
        );
        assert_eq!(
            result.updated_text,
            "Led a team of five engineers including graphql.\n\
             Built services in Python including pandas!\n\
             Shipped weekly"
        );
    }

    #[test]
    fn test_sentence_without_terminal_gets_phrase_appended() {
        let result = enhance("Cloud migrations on a budget", &keywords(&["AWS"]), "");
        assert_eq!(result.updated_text, "Cloud migrations on a budget including aws");
    }

    #[test]
    fn test_first_matching_cluster_claims_shared_keyword() {
        // "react" is an extra of both javascript and typescript; javascript comes first.
        let resume = "Wrote TypeScript services. Maintained JavaScript widgets.";
        let result = enhance(resume, &keywords(&["react"]), "");
        assert_eq!(
            result.updated_text,
            "Wrote TypeScript services.\nMaintained JavaScript widgets including React."
        );
    }

    #[test]
    fn test_keywords_deduped_case_insensitively() {
        let result = enhance(
            "Shipped Python tooling.",
            &keywords(&["Flask", "flask", "FLASK"]),
            "",
        );
        assert_eq!(result.updated_text, "Shipped Python tooling including flask.");
    }

    #[test]
    fn test_at_most_eight_keywords_per_sentence() {
        let missing = keywords(&["k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9", "k10"]);
        let result = enhance("Summary.", &missing, "");
        assert_eq!(
            result.updated_text,
            "Summary including k1, k2, k3, k4, k5, k6, k7, k8."
        );
    }

    #[test]
    fn test_no_keywords_only_normalizes_separators() {
        let result = enhance("First point.  Second point.", &[], "");
        assert_eq!(result.updated_text, "First point.\nSecond point.");
    }

    #[test]
    fn test_blank_keywords_are_woven_verbatim() {
        let result = enhance("Wrote docs.", &keywords(&["", "rust"]), "");
        assert_eq!(result.updated_text, "Wrote docs including , rust.");
    }

    #[test]
    fn test_normalize_keeps_blank_entries_once() {
        assert_eq!(
            normalize_keywords(&keywords(&["", "Rust", "", "rust", " "])),
            keywords(&["", "rust", " "])
        );
    }

    #[test]
    fn test_empty_resume_still_receives_keywords() {
        let result = enhance("", &keywords(&["rust"]), "rust");
        assert_eq!(result.updated_text, " including rust");
        assert_eq!(result.new_score, 100);
        assert!(result.still_missing.is_empty());
    }

    #[test]
    fn test_rescore_reflects_injected_keywords() {
        let resume = "I use Python for data science.";
        let jd = "Python developer with Django and NumPy";
        let before = score(resume, jd);
        let result = enhance(resume, &before.missing_keywords, jd);
        assert!(result.new_score >= before.score);
        assert!(!result.still_missing.contains(&"django".to_string()));
        assert!(!result.still_missing.contains(&"numpy".to_string()));
    }

    #[test]
    fn test_enhancement_never_lowers_score() {
        let cases = [
            (
                "Backend engineer. Wrote JavaScript and Python services.\nRan ETL jobs on cloud data.",
                "Looking for Node.js, React, pandas, Airflow and Kubernetes on AWS.",
            ),
            (
                "Java developer using Spring.",
                "Senior Java engineer: Spring Boot, Hibernate, Kafka, microservices.",
            ),
            ("", "Rust systems programmer"),
            ("Product manager!", ""),
        ];
        for (resume, jd) in cases {
            let before = score(resume, jd);
            let after = enhance(resume, &before.missing_keywords, jd);
            assert!(
                after.new_score >= before.score,
                "{resume:?}: {} < {}",
                after.new_score,
                before.score
            );
        }
    }

    #[test]
    fn test_plan_routes_leftovers_to_sentence_zero() {
        let sentences = vec!["Intro.", "Python work."];
        let missing = keywords(&["numpy", "graphql"]);
        let plan = plan_injections(&sentences, "intro. python work.", &missing);
        assert_eq!(plan.get(&1), Some(&keywords(&["numpy"])));
        assert_eq!(plan.get(&0), Some(&keywords(&["graphql"])));
    }
}
