//! Demo student profile.
//!
//! The chat assistant is grounded in a sample student record (a GTU SEM-3
//! CSE student). The record is injected through [`crate::state::AppState`]
//! rather than constructed inside the chat handler, and can be replaced
//! wholesale by pointing `STUDENT_PROFILE_PATH` at a JSON file of the same
//! shape. There is no persistence behind it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use attendance_core::{PreferenceTag, Subject};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BonusMarks {
    pub attendance: u32,
    pub first_four_days: u32,
    pub all_clear: u32,
    pub total: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttendancePolicies {
    pub minimum_exam_eligibility: f64,
    pub minimum_with_medical: f64,
    pub max_attendance_bonus: u32,
    pub first_four_days_bonus: u32,
    pub all_clear_bonus: u32,
}

/// One what-if row: attend this many of the remaining classes, land at this
/// final percentage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub required_to_attend: u32,
    pub remaining_classes: u32,
    pub can_skip: u32,
    pub final_attendance: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudentProfile {
    pub university: String,
    pub semester: String,
    pub program: String,
    pub academic_year: String,
    pub current_attendance: f64,
    pub total_classes_completed: u32,
    pub attended_classes: u32,
    pub remaining_weeks: u32,
    pub exam_eligible: bool,
    pub bonus_eligible: bool,
    pub subjects: Vec<Subject>,
    pub bonus_marks: BonusMarks,
    pub policies: AttendancePolicies,
    pub scenarios: BTreeMap<String, Scenario>,
    pub warnings: Vec<String>,
}

impl StudentProfile {
    /// Load from `path` when given, falling back to the built-in sample on
    /// any read or parse failure.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::sample();
        };

        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => profile,
                Err(err) => {
                    tracing::warn!(error = %err, path = %path.display(), "student profile file invalid, using sample");
                    Self::sample()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "student profile file unreadable, using sample");
                Self::sample()
            }
        }
    }

    /// The built-in GTU sample record.
    pub fn sample() -> Self {
        let subjects = vec![
            subject("DS", "Data Structures", 85.0, 4, PreferenceTag::Liked),
            subject("DBMS", "Database Management System", 80.0, 4, PreferenceTag::Liked),
            subject("PS", "Probability and Statistics", 75.0, 3, PreferenceTag::Liked),
            subject("DF", "Digital Fundamentals", 70.0, 4, PreferenceTag::Neutral),
            subject("IC", "Indian Constitution", 55.0, 2, PreferenceTag::Disliked),
            subject(
                "PCE",
                "Professional Communication and Ethics",
                60.0,
                2,
                PreferenceTag::Disliked,
            ),
        ];

        let mut scenarios = BTreeMap::new();
        scenarios.insert(
            "maintain_current".to_string(),
            scenario(137, 190, 53, 72.0),
        );
        scenarios.insert("safe_buffer".to_string(), scenario(150, 190, 40, 75.0));
        scenarios.insert(
            "bonus_optimization".to_string(),
            scenario(160, 190, 30, 80.0),
        );
        scenarios.insert("minimum_safe".to_string(), scenario(134, 190, 56, 70.1));

        Self {
            university: "GTU".to_string(),
            semester: "SEM-3".to_string(),
            program: "CSE(DS)".to_string(),
            academic_year: "2025".to_string(),
            current_attendance: 72.0,
            total_classes_completed: 190,
            attended_classes: 137,
            remaining_weeks: 10,
            exam_eligible: true,
            bonus_eligible: true,
            subjects,
            bonus_marks: BonusMarks {
                attendance: 11,
                first_four_days: 4,
                all_clear: 0,
                total: 15,
            },
            policies: AttendancePolicies {
                minimum_exam_eligibility: 70.0,
                minimum_with_medical: 60.0,
                max_attendance_bonus: 15,
                first_four_days_bonus: 4,
                all_clear_bonus: 4,
            },
            scenarios,
            warnings: vec![
                "SAFE: Currently eligible for exams and bonus marks".to_string(),
                "CAUTION: Close to danger zone - monitor carefully and maintain buffer".to_string(),
                "SUBJECTS: IC (55%) and PCE (60%) below ideal levels - consider strategic attendance"
                    .to_string(),
            ],
        }
    }

    /// Narrative used when the chat AI is unreachable.
    pub fn fallback_narrative(&self) -> String {
        let liked: Vec<&str> = self
            .subjects
            .iter()
            .filter(|s| s.preference == PreferenceTag::Liked)
            .map(|s| s.code.as_str())
            .collect();
        let weak: Vec<String> = self
            .subjects
            .iter()
            .filter(|s| s.attendance < self.policies.minimum_exam_eligibility)
            .map(|s| format!("{} ({}%)", s.code, s.attendance))
            .collect();

        format!(
            "Based on your current {}% attendance status, you are eligible for {} exams and bonus marks. \
             With {} weeks remaining in {}, you need to maintain attendance above {}%. \
             Your liked subjects ({}) are performing well, but {} need attention. \
             You can earn up to {} attendance bonus marks currently.",
            self.current_attendance,
            self.university,
            self.remaining_weeks,
            self.semester,
            self.policies.minimum_exam_eligibility,
            liked.join(", "),
            if weak.is_empty() {
                "no subjects".to_string()
            } else {
                weak.join(" and ")
            },
            self.bonus_marks.total,
        )
    }

    /// Follow-up prompts surfaced next to a chat answer.
    pub fn suggestions(&self) -> Vec<String> {
        vec![
            format!(
                "How many classes do I need to attend to maintain {}%?",
                self.policies.minimum_exam_eligibility
            ),
            "What's my bonus marks potential with current attendance?".to_string(),
            "Which subjects should I focus on attending?".to_string(),
            format!("Am I safe for {} exam eligibility?", self.university),
            "How can I optimize my attendance strategy?".to_string(),
        ]
    }

    /// Shorter list shown with the offline narrative.
    pub fn fallback_suggestions(&self) -> Vec<String> {
        vec![
            "How many more classes do I need to attend?".to_string(),
            "What's my current bonus marks eligibility?".to_string(),
            "Which subjects need the most attention?".to_string(),
            format!(
                "What happens if I drop below {}%?",
                self.policies.minimum_exam_eligibility
            ),
        ]
    }
}

fn subject(code: &str, name: &str, attendance: f64, weekly: u32, tag: PreferenceTag) -> Subject {
    Subject {
        code: code.to_string(),
        name: name.to_string(),
        attendance,
        weekly_classes: weekly,
        preference: tag,
    }
}

fn scenario(required: u32, remaining: u32, can_skip: u32, final_attendance: f64) -> Scenario {
    Scenario {
        required_to_attend: required,
        remaining_classes: remaining,
        can_skip,
        final_attendance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_round_trips_through_json() {
        let sample = StudentProfile::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let parsed: StudentProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.subjects.len(), 6);
        assert_eq!(parsed.scenarios.len(), 4);
        assert_eq!(parsed.attended_classes, 137);
    }

    #[test]
    fn missing_override_falls_back_to_sample() {
        let profile = StudentProfile::load(Some(Path::new("/nonexistent/profile.json")));
        assert_eq!(profile.university, "GTU");
    }

    #[test]
    fn narrative_names_weak_subjects() {
        let narrative = StudentProfile::sample().fallback_narrative();
        assert!(narrative.contains("IC (55%)"));
        assert!(narrative.contains("PCE (60%)"));
        assert!(narrative.contains("72%"));
    }
}
