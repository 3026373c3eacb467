//! Attendance projection
//!
//! Closed-form calculation of where a student stands against an attendance
//! target: current percentage, how many more classes must be attended to
//! reach the target, the margin above it, a risk tier, and the next round
//! milestone on the ladder.

use thiserror::Error;

use crate::recommend::recommend;
use crate::types::{
    round2, AttendanceAnalysis, AttendanceStatus, RiskLevel, MILESTONES,
};

/// Input validation failures. Map to HTTP 400 at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("totalClasses must be greater than zero")]
    NoClasses,
    #[error("attendedClasses cannot exceed totalClasses")]
    AttendedExceedsTotal,
    #[error("targetPercentage must be between 0 and 100 (exclusive)")]
    InvalidTarget,
}

/// Project attendance against `target` (percent, exclusive (0, 100)).
///
/// `classes_needed` is the minimal count of additional classes, each counted
/// as both attended and held, required for the attended fraction to reach the
/// target:
///
/// ```text
/// ceil((target * total - 100 * attended) / (100 - target))
/// ```
///
/// floored at zero when the student is already on track.
pub fn calculate(
    total_classes: u32,
    attended_classes: u32,
    target: f64,
) -> Result<AttendanceAnalysis, CalcError> {
    if total_classes == 0 {
        return Err(CalcError::NoClasses);
    }
    if attended_classes > total_classes {
        return Err(CalcError::AttendedExceedsTotal);
    }
    if !target.is_finite() || target <= 0.0 || target >= 100.0 {
        return Err(CalcError::InvalidTarget);
    }

    let total = f64::from(total_classes);
    let attended = f64::from(attended_classes);

    let current_percentage = round2(attended / total * 100.0);

    let classes_needed = if current_percentage < target {
        let raw = (target * total - 100.0 * attended) / (100.0 - target);
        raw.ceil().max(0.0) as u32
    } else {
        0
    };

    let status = if current_percentage >= target {
        AttendanceStatus::OnTrack
    } else {
        AttendanceStatus::NeedsImprovement
    };

    Ok(AttendanceAnalysis {
        current_percentage,
        target_percentage: target,
        safety_buffer: round2(current_percentage - target),
        classes_needed,
        status,
        risk_level: RiskLevel::from_percentage(current_percentage),
        recommendations: recommend(current_percentage, target, classes_needed),
        trend_analysis: "stable".to_string(),
        next_milestone: next_milestone(current_percentage, target),
    })
}

/// First milestone strictly above `current`, or the target when the ladder
/// is exhausted.
pub fn next_milestone(current: f64, target: f64) -> f64 {
    MILESTONES
        .iter()
        .copied()
        .find(|&m| m > current)
        .unwrap_or(target)
}
