//! Public types and constants
//!
//! Shared data structures used across the calculator, recommendation
//! generator, and preference classifier. Field names serialize in snake_case
//! to match the wire format consumed by the dashboard front-end.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Default attendance target when the caller supplies none.
pub const DEFAULT_TARGET_PERCENTAGE: f64 = 70.5;

/// Milestone ladder for the "next milestone" projection.
pub const MILESTONES: [f64; 8] = [60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0];

/// Risk tier thresholds (low / medium / high lower bounds).
pub const RISK_LOW_THRESHOLD: f64 = 80.0;
pub const RISK_MEDIUM_THRESHOLD: f64 = 75.0;
pub const RISK_HIGH_THRESHOLD: f64 = 70.0;

// ==================== Risk & status ====================

/// Four-tier classification of how close current attendance is to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Tier for a given current percentage against the fixed thresholds.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= RISK_LOW_THRESHOLD {
            RiskLevel::Low
        } else if percentage >= RISK_MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else if percentage >= RISK_HIGH_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

/// Whether the student currently meets the target fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    OnTrack,
    NeedsImprovement,
}

// ==================== Recommendations ====================

/// Advisory priority, ordered weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// One advisory message. Generated per request, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(kind: &str, message: impl Into<String>, priority: Priority) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.into(),
            priority,
        }
    }
}

// ==================== Projection ====================

/// Full output of the attendance projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceAnalysis {
    pub current_percentage: f64,
    pub target_percentage: f64,
    /// Current percentage minus target. Negative when below target.
    pub safety_buffer: f64,
    /// Additional classes (each counted as attended and total) needed to
    /// reach the target. Zero when already on track.
    pub classes_needed: u32,
    pub status: AttendanceStatus,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
    /// Placeholder until historical data exists; always "stable".
    pub trend_analysis: String,
    pub next_milestone: f64,
}

// ==================== Preference analysis ====================

/// Result of the keyword fallback classifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreferenceAnalysis {
    #[serde(rename = "likedSubjects")]
    pub liked_subjects: Vec<String>,
    #[serde(rename = "dislikedSubjects")]
    pub disliked_subjects: Vec<String>,
    #[serde(rename = "preferredTimes")]
    pub preferred_times: Vec<String>,
    pub confidence_score: f64,
    pub analysis_method: String,
}

// ==================== Demo subject records ====================

/// How a student feels about a subject. Demo data only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceTag {
    Liked,
    Neutral,
    Disliked,
}

/// One subject row of the sample student record. Static demo data, not
/// computed from uploaded documents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub attendance: f64,
    pub weekly_classes: u32,
    #[serde(rename = "type")]
    pub preference: PreferenceTag,
}

// ==================== Helpers ====================

/// Round to two decimal places, the precision of every percentage on the wire.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tiers_match_thresholds() {
        assert_eq!(RiskLevel::from_percentage(80.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(79.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(75.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(72.11), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(70.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(69.99), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_percentage(0.0), RiskLevel::Critical);
    }

    #[test]
    fn round2_behaves() {
        assert_eq!(round2(72.105_263_157), 72.11);
        assert_eq!(round2(60.0), 60.0);
        assert_eq!(round2(-1.4999), -1.5);
    }

    #[test]
    fn recommendation_serializes_with_type_tag() {
        let rec = Recommendation::new("achievement", "msg", Priority::Low);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "achievement");
        assert_eq!(json["priority"], "low");
    }
}
