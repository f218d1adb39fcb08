//! Deduplication of generated prep tasks against existing tasks
//!
//! A pure pass over the caller-supplied task list. A candidate is a duplicate
//! when its title is close enough to an existing title, or when the two fall
//! in the same due-date window and share a significant keyword. The first
//! matching existing task (in caller order) wins.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{ExistingTask, PrepTask};
use crate::temporal;

/// Token-overlap ratio at or above which two titles are the same task
const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Jaro-Winkler score at or above which two tokens count as the same word
const TOKEN_MATCH_THRESHOLD: f64 = 0.85;

/// Tokens carrying no signal for similarity
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "in", "my", "of", "on", "or", "the", "to", "with",
];

/// Classification of one candidate against the existing list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupOutcome {
    pub is_duplicate: bool,
    pub matched_id: Option<String>,
}

impl DedupOutcome {
    fn unique() -> Self {
        Self { is_duplicate: false, matched_id: None }
    }

    fn duplicate_of(id: &str) -> Self {
        Self { is_duplicate: true, matched_id: Some(id.to_string()) }
    }
}

/// Classify a candidate prep task against the caller's existing tasks
pub fn classify(candidate: &PrepTask, existing: &[ExistingTask]) -> DedupOutcome {
    debug!(
        task_title = %candidate.task_title,
        existing_count = existing.len(),
        "classify: called"
    );

    for task in existing {
        let similarity = title_similarity(&candidate.event_title, &task.title)
            .max(title_similarity(&candidate.task_title, &task.title));

        if similarity >= SIMILARITY_THRESHOLD {
            debug!(matched_id = %task.id, similarity, "classify: title match");
            return DedupOutcome::duplicate_of(&task.id);
        }

        if due_dates_within_one_day(candidate.due_date, task.due_date.as_deref())
            && shares_significant_keyword(&candidate.task_title, &task.title)
        {
            debug!(matched_id = %task.id, "classify: due-date window and keyword match");
            return DedupOutcome::duplicate_of(&task.id);
        }
    }

    DedupOutcome::unique()
}

/// Token-overlap similarity between two titles
///
/// Symmetric; tolerant of case, punctuation, common prep-verb synonyms
/// ("study for" vs "prepare for"), and near-miss spellings. Tokens pair up
/// when equal after canonicalization or within Jaro-Winkler distance of each
/// other; the ratio is matched tokens over total tokens.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let matched = |from: &BTreeSet<String>, into: &BTreeSet<String>| {
        from.iter()
            .filter(|t| into.iter().any(|u| tokens_match(t, u)))
            .count()
    };
    (matched(&tokens_a, &tokens_b) + matched(&tokens_b, &tokens_a)) as f64
        / (tokens_a.len() + tokens_b.len()) as f64
}

fn tokens_match(a: &str, b: &str) -> bool {
    a == b || strsim::jaro_winkler(a, b) >= TOKEN_MATCH_THRESHOLD
}

fn tokenize(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !STOPWORDS.contains(t))
        .map(|t| canonical(t).to_string())
        .collect()
}

/// Collapse common preparation verbs onto one canonical token
fn canonical(token: &str) -> &str {
    match token {
        "study" | "studying" | "review" | "reviewing" | "practice" | "practise" | "prep"
        | "prepping" | "preparing" => "prepare",
        other => other,
    }
}

fn due_dates_within_one_day(candidate: NaiveDate, existing: Option<&str>) -> bool {
    let Some(raw) = existing else {
        return false;
    };
    let Ok(date) = temporal::parse_date(raw) else {
        return false;
    };
    (candidate - date).num_days().abs() <= 1
}

fn shares_significant_keyword(a: &str, b: &str) -> bool {
    let significant = |s: &str| -> BTreeSet<String> {
        tokenize(s)
            .into_iter()
            // The canonical prep verb appears in nearly every prep task and
            // would make everything match everything
            .filter(|t| t.len() >= 4 && t != "prepare")
            .collect()
    };
    !significant(a).is_disjoint(&significant(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, PriorityLevel};

    fn candidate(event_title: &str, task_title: &str, due: &str) -> PrepTask {
        PrepTask {
            event_id: "ev-1".to_string(),
            event_title: event_title.to_string(),
            task_title: task_title.to_string(),
            task_description: String::new(),
            priority_score: 85,
            priority_level: PriorityLevel::High,
            suggested_category: Category::Work,
            due_date: due.parse().unwrap(),
            reasoning: String::new(),
            is_duplicate: false,
            similar_task_id: None,
        }
    }

    fn existing(id: &str, title: &str, due: Option<&str>) -> ExistingTask {
        ExistingTask {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            due_date: due.map(str::to_string),
        }
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = "Prepare for the interview";
        let b = "Study for interview";
        assert_eq!(title_similarity(a, b), title_similarity(b, a));
    }

    #[test]
    fn test_similarity_tolerates_case_and_punctuation() {
        assert_eq!(title_similarity("Submit Tax Forms!", "submit tax forms"), 1.0);
    }

    #[test]
    fn test_prep_synonyms_match() {
        // "Prepare for interview" vs "Study for interview" canonicalize to
        // the same token set
        assert!(title_similarity("Prepare for interview", "Study for interview") >= 0.99);
    }

    #[test]
    fn test_near_miss_spellings_match() {
        // "intervew" is not in the synonym table; Jaro-Winkler pairs it with
        // "interview" anyway
        assert!(title_similarity("Prepare for intervew", "Study for interview") >= SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_unrelated_titles_do_not_match() {
        assert!(title_similarity("Buy groceries", "Quarterly board presentation") < 0.1);
    }

    #[test]
    fn test_classify_title_duplicate() {
        let cand = candidate("Technical Interview", "Prepare for interview", "2026-09-03");
        let tasks = vec![existing("t-9", "Study for interview", Some("2026-09-03"))];

        let outcome = classify(&cand, &tasks);
        assert!(outcome.is_duplicate);
        assert_eq!(outcome.matched_id.as_deref(), Some("t-9"));
    }

    #[test]
    fn test_classify_due_window_and_keyword() {
        let cand = candidate(
            "Doctor Appointment",
            "Write down symptoms and questions",
            "2026-09-02",
        );
        let tasks = vec![existing("t-3", "List symptoms before visit", Some("2026-09-03"))];

        let outcome = classify(&cand, &tasks);
        assert!(outcome.is_duplicate);
        assert_eq!(outcome.matched_id.as_deref(), Some("t-3"));
    }

    #[test]
    fn test_classify_keyword_without_date_window_is_unique() {
        let cand = candidate(
            "Doctor Appointment",
            "Write down symptoms and questions",
            "2026-09-02",
        );
        // Same keyword but a week apart
        let tasks = vec![existing("t-3", "List symptoms before visit", Some("2026-09-09"))];

        assert!(!classify(&cand, &tasks).is_duplicate);
    }

    #[test]
    fn test_classify_first_match_wins() {
        let cand = candidate("Technical Interview", "Prepare for interview", "2026-09-03");
        let tasks = vec![
            existing("first", "Prepare for interview", None),
            existing("second", "Study for interview", None),
        ];

        let outcome = classify(&cand, &tasks);
        assert_eq!(outcome.matched_id.as_deref(), Some("first"));
    }

    #[test]
    fn test_classify_no_match() {
        let cand = candidate("Team Offsite", "Book travel for offsite", "2026-09-05");
        let tasks = vec![existing("t-1", "Finish expense report", Some("2026-09-05"))];

        let outcome = classify(&cand, &tasks);
        assert!(!outcome.is_duplicate);
        assert!(outcome.matched_id.is_none());
    }

    #[test]
    fn test_classify_is_deterministic() {
        let cand = candidate("Technical Interview", "Prepare for interview", "2026-09-03");
        let tasks = vec![
            existing("a", "Water the plants", None),
            existing("b", "Study for interview", Some("2026-09-03")),
        ];

        let first = classify(&cand, &tasks);
        for _ in 0..10 {
            assert_eq!(classify(&cand, &tasks), first);
        }
    }

    #[test]
    fn test_unparsable_existing_due_date_skips_date_rule() {
        let cand = candidate("Doctor Appointment", "Write down symptoms", "2026-09-02");
        let tasks = vec![existing("t-3", "List symptoms before visit", Some("whenever"))];

        assert!(!classify(&cand, &tasks).is_duplicate);
    }
}
