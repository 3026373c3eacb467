//! # attendance-core - Attendance analytics primitives
//!
//! Pure, deterministic building blocks for the attendance backend:
//!
//! - **Projection calculator** - current percentage, classes still needed to
//!   reach a target, safety buffer, risk tier, next milestone
//! - **Recommendation generator** - ordered advisory messages derived from a
//!   projection
//! - **Preference classifier** - keyword-matching fallback used when the
//!   remote AI analysis is unavailable
//!
//! No IO, no clocks, no randomness. Every function in this crate is a pure
//! function of its arguments, which is what makes the backend's degrade
//! policy testable without a network.
//!
//! ## Module structure
//!
//! - [`calculator`] - attendance projection ([`calculate`])
//! - [`recommend`] - advisory generation ([`recommend`])
//! - [`classify`] - keyword preference analysis ([`classify`])
//! - [`types`] - public types and constants

pub mod calculator;
pub mod classify;
pub mod recommend;
pub mod types;

pub use calculator::{calculate, CalcError};
pub use classify::classify;
pub use recommend::recommend;
pub use types::{
    AttendanceAnalysis, AttendanceStatus, PreferenceAnalysis, PreferenceTag, Priority,
    Recommendation, RiskLevel, Subject, DEFAULT_TARGET_PERCENTAGE, MILESTONES,
};
