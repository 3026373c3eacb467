//! Keyword preference classifier
//!
//! Fallback path for free-text preference analysis, used only when the
//! remote AI service is unreachable. Case-insensitive substring matching
//! against fixed keyword sets; nothing is learned or scored.

use crate::types::PreferenceAnalysis;

/// Subjects counted as liked when mentioned.
const LIKED_SUBJECTS: [&str; 8] = [
    "math",
    "science",
    "physics",
    "chemistry",
    "biology",
    "computer",
    "programming",
    "engineering",
];

/// Subjects counted as disliked when mentioned.
const DISLIKED_SUBJECTS: [&str; 5] = ["history", "literature", "art", "music", "language"];

/// Any hit here classifies the student as a morning person.
const MORNING_KEYWORDS: [&str; 5] = ["morning", "8am", "9am", "10am", "early"];

/// Fixed confidence reported by the keyword method. Not derived from match
/// quality.
const KEYWORD_CONFIDENCE: f64 = 0.65;

/// Classify free-text preferences by keyword matching.
///
/// The time outcome is binary: any morning keyword yields `["morning"]`,
/// anything else yields `["evening"]`. There is deliberately no "both" or
/// "none" case here; the behavior is ambiguous but preserved as the
/// established wire contract.
pub fn classify(free_text: &str) -> PreferenceAnalysis {
    let lowered = free_text.to_lowercase();

    let liked_subjects = LIKED_SUBJECTS
        .iter()
        .filter(|subject| lowered.contains(**subject))
        .map(|subject| subject.to_string())
        .collect();

    let disliked_subjects = DISLIKED_SUBJECTS
        .iter()
        .filter(|subject| lowered.contains(**subject))
        .map(|subject| subject.to_string())
        .collect();

    let preferred_times = if MORNING_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        vec!["morning".to_string()]
    } else {
        vec!["evening".to_string()]
    };

    PreferenceAnalysis {
        liked_subjects,
        disliked_subjects,
        preferred_times,
        confidence_score: KEYWORD_CONFIDENCE,
        analysis_method: "keyword-based".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_liked_and_disliked() {
        let analysis = classify("I love math and hate history");
        assert!(analysis.liked_subjects.contains(&"math".to_string()));
        assert!(analysis.disliked_subjects.contains(&"history".to_string()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let analysis = classify("PHYSICS is great, Literature less so");
        assert_eq!(analysis.liked_subjects, ["physics"]);
        assert_eq!(analysis.disliked_subjects, ["literature"]);
    }

    #[test]
    fn morning_keyword_wins() {
        let analysis = classify("I prefer early classes");
        assert_eq!(analysis.preferred_times, ["morning"]);
    }

    #[test]
    fn defaults_to_evening() {
        let analysis = classify("whenever works");
        assert_eq!(analysis.preferred_times, ["evening"]);
        // Empty input still produces the binary outcome.
        assert_eq!(classify("").preferred_times, ["evening"]);
    }

    #[test]
    fn confidence_is_constant() {
        assert_eq!(classify("math").confidence_score, 0.65);
        assert_eq!(classify("").confidence_score, 0.65);
        assert_eq!(classify("math").analysis_method, "keyword-based");
    }

    #[test]
    fn preserves_keyword_set_order() {
        let analysis = classify("chemistry and biology after math");
        assert_eq!(analysis.liked_subjects, ["math", "chemistry", "biology"]);
    }
}
