use std::collections::BTreeSet;

use super::catalog::Catalog;
use super::config::EngineConfig;
use super::domain::StudentProfile;

/// Validation errors raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("student name is required")]
    MissingName,
    #[error("exam score {0} exceeds the maximum possible score")]
    ScoreOutOfRange(u16),
    #[error("exactly {expected} distinct exam subjects are required (found {found})")]
    ExamSubjectCount { expected: usize, found: usize },
    #[error("'{0}' is not a recognised entrance-exam subject")]
    UnknownExamSubject(String),
    #[error("'{0}' is not a recognised secondary-school subject")]
    UnknownGradedSubject(String),
    #[error("grade for '{subject}' must be recorded under '{canonical}'")]
    GradedSubjectAlias { subject: String, canonical: String },
}

/// Guard rejecting malformed student profiles at the intake boundary.
#[derive(Debug, Clone, Copy)]
pub struct ProfileGuard {
    exam_subject_count: usize,
    max_exam_score: u16,
}

impl Default for ProfileGuard {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ProfileGuard {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            exam_subject_count: config.exam_subject_count,
            max_exam_score: config.max_exam_score,
        }
    }

    pub fn check(&self, catalog: &Catalog, profile: &StudentProfile) -> Result<(), ProfileViolation> {
        if profile.name.trim().is_empty() {
            return Err(ProfileViolation::MissingName);
        }

        if profile.exam_score > self.max_exam_score {
            return Err(ProfileViolation::ScoreOutOfRange(profile.exam_score));
        }

        let distinct: BTreeSet<&str> = profile
            .exam_subjects
            .iter()
            .map(|subject| catalog.canonical_subject(subject))
            .collect();
        if distinct.len() != self.exam_subject_count {
            return Err(ProfileViolation::ExamSubjectCount {
                expected: self.exam_subject_count,
                found: distinct.len(),
            });
        }

        if let Some(unknown) = profile
            .exam_subjects
            .iter()
            .find(|subject| !catalog.is_exam_subject(catalog.canonical_subject(subject)))
        {
            return Err(ProfileViolation::UnknownExamSubject(unknown.clone()));
        }

        // Grade sheets are looked up by exact name downstream.
        for subject in profile.grades.keys() {
            if catalog.is_secondary_subject(subject) {
                continue;
            }
            let canonical = catalog.canonical_subject(subject);
            if canonical != subject && catalog.is_secondary_subject(canonical) {
                return Err(ProfileViolation::GradedSubjectAlias {
                    subject: subject.clone(),
                    canonical: canonical.to_string(),
                });
            }
            return Err(ProfileViolation::UnknownGradedSubject(subject.clone()));
        }

        Ok(())
    }
}
