//! Admission eligibility checks, success estimation and course recommendations.
//!
//! Everything hangs off an immutable [`Catalog`]: the [`AdmissionEngine`]
//! borrows it to validate subject combinations and grade sheets, compute
//! per-university eligibility, estimate success and rank alternative courses.

pub mod catalog;
pub mod config;
pub mod decision;
pub mod domain;
pub mod eligibility;
pub mod engine;
pub mod intake;
pub mod planning;
pub mod ranking;
pub mod requirements;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{
    CareerOutlook, Catalog, CatalogError, Course, CourseCategory, CutoffRow, Difficulty, Rating,
    SubjectRule, University, UniversityOffer,
};
pub use config::EngineConfig;
pub use decision::{AdmissionDecision, AdmissionStatus, RejectionReason};
pub use domain::{Grade, GradeSheet, LearningStyle, StudentProfile, StudyPreference};
pub use eligibility::{EligibilityMap, UniversityEligibility};
pub use engine::{AdmissionEngine, AdmissionOutcome, CareerAnalysis, EngineError};
pub use intake::{ProfileGuard, ProfileViolation};
pub use planning::{Milestone, PlanAction, StudyPlan, StudyPlanner};
pub use ranking::Recommendation;
pub use requirements::RuleCheck;
pub use scoring::{
    EstimateSource, FeatureVector, PredictorError, StrengthLevel, StrengthProfile,
    SuccessEstimate, SuccessLevel, SuccessPredictor,
};
