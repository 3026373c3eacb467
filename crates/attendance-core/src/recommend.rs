//! Advisory generation
//!
//! Turns a projection into an ordered list of advisory messages. Emission
//! order is part of the contract: the dashboard renders the list top to
//! bottom, so rules append rather than replace.

use crate::types::{Priority, Recommendation};

/// Build the advisory list for a projection.
///
/// Rules, applied in order, additively:
/// 1. on track: achievement (low) + maintenance (medium)
/// 2. otherwise: action_required naming `classes_needed` (high) + strategy (medium)
/// 3. below 65%: critical (critical)
/// 4. else below 70%: warning (high)
pub fn recommend(current_percentage: f64, target: f64, classes_needed: u32) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(3);

    if current_percentage >= target {
        recommendations.push(Recommendation::new(
            "achievement",
            "Excellent! You're exceeding your attendance target.",
            Priority::Low,
        ));
        recommendations.push(Recommendation::new(
            "maintenance",
            "Maintain this consistency to stay ahead.",
            Priority::Medium,
        ));
    } else {
        recommendations.push(Recommendation::new(
            "action_required",
            format!("Attend {classes_needed} more classes to reach {target}% attendance."),
            Priority::High,
        ));
        recommendations.push(Recommendation::new(
            "strategy",
            "Set daily reminders 30 minutes before each class.",
            Priority::Medium,
        ));
    }

    if current_percentage < 65.0 {
        recommendations.push(Recommendation::new(
            "critical",
            "CRITICAL: Immediate action required to avoid academic consequences.",
            Priority::Critical,
        ));
    } else if current_percentage < 70.0 {
        recommendations.push(Recommendation::new(
            "warning",
            "WARNING: Below minimum requirement. Prioritize attendance now.",
            Priority::High,
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.kind.as_str()).collect()
    }

    #[test]
    fn on_track_order() {
        let recs = recommend(85.0, 70.5, 0);
        assert_eq!(kinds(&recs), ["achievement", "maintenance"]);
        assert_eq!(recs[0].priority, Priority::Low);
        assert_eq!(recs[1].priority, Priority::Medium);
    }

    #[test]
    fn below_target_order() {
        let recs = recommend(68.0, 70.5, 9);
        assert_eq!(kinds(&recs), ["action_required", "strategy", "warning"]);
        assert_eq!(recs[0].priority, Priority::High);
        assert!(recs[0].message.contains("9 more classes"));
    }

    #[test]
    fn critical_band_appends_critical_entry() {
        let recs = recommend(50.0, 70.5, 41);
        assert_eq!(kinds(&recs), ["action_required", "strategy", "critical"]);
        assert_eq!(recs[2].priority, Priority::Critical);
    }

    #[test]
    fn warning_band_is_exclusive_with_critical() {
        // 65 is warning territory, not critical.
        let recs = recommend(65.0, 70.5, 12);
        assert_eq!(kinds(&recs), ["action_required", "strategy", "warning"]);
        // On-track percentages inside the warning band still warn.
        let recs = recommend(69.0, 68.0, 0);
        assert_eq!(kinds(&recs), ["achievement", "maintenance", "warning"]);
    }

    #[test]
    fn exactly_one_action_required_below_target() {
        let recs = recommend(60.0, 70.5, 36);
        let count = recs.iter().filter(|r| r.kind == "action_required").count();
        assert_eq!(count, 1);
        assert!(recs[0].message.contains("36"));
    }
}
