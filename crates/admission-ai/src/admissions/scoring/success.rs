use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::admissions::catalog::{Course, CourseCategory};
use crate::admissions::domain::StudentProfile;

pub const MIN_PROBABILITY: f64 = 0.05;
pub const MAX_PROBABILITY: f64 = 0.95;

/// Normalized inputs handed to an external predictor, each roughly in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub exam_score: f64,
    pub average_grade: f64,
    pub course_subject_average: f64,
    pub subject_count: f64,
    pub difficulty: f64,
    pub learning_style: f64,
    pub study_preference: f64,
}

impl FeatureVector {
    pub fn extract(course: &Course, profile: &StudentProfile) -> Self {
        Self {
            exam_score: profile.exam_score as f64 / 400.0,
            average_grade: profile.average_grade_rank() / 9.0,
            course_subject_average: course_subject_average(course, profile) / 9.0,
            subject_count: profile.grades.len() as f64 / 10.0,
            difficulty: course.difficulty.tier() as f64 / 4.0,
            learning_style: profile.learning_style.index() as f64 / 3.0,
            study_preference: profile.study_preference.index() as f64 / 3.0,
        }
    }

    pub fn to_array(&self) -> [f64; 7] {
        [
            self.exam_score,
            self.average_grade,
            self.course_subject_average,
            self.subject_count,
            self.difficulty,
            self.learning_style,
            self.study_preference,
        ]
    }
}

/// Mean rank of the course's credit subjects present on the sheet, 1 when none are.
fn course_subject_average(course: &Course, profile: &StudentProfile) -> f64 {
    let ranks: Vec<f64> = course
        .credit_subjects
        .iter()
        .filter_map(|subject| profile.grades.get(subject))
        .map(|grade| grade.rank() as f64)
        .collect();
    if ranks.is_empty() {
        1.0
    } else {
        ranks.iter().sum::<f64>() / ranks.len() as f64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("no predictive model available for {0:?} courses")]
    Unavailable(CourseCategory),
    #[error("predictive model failed: {0}")]
    Failed(String),
    #[error("predictive model returned non-finite probability {0}")]
    NonFinite(f64),
}

/// External capability returning a success probability for a feature vector.
pub trait SuccessPredictor: Send + Sync {
    fn predict(
        &self,
        category: CourseCategory,
        features: &FeatureVector,
    ) -> Result<f64, PredictorError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    Model,
    RuleBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessLevel {
    High,
    Medium,
    Low,
}

impl SuccessLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            SuccessLevel::High
        } else if probability > 0.5 {
            SuccessLevel::Medium
        } else {
            SuccessLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEstimate {
    pub probability: f64,
    pub level: SuccessLevel,
    pub advice: String,
    pub source: EstimateSource,
}

impl SuccessEstimate {
    fn new(probability: f64, source: EstimateSource) -> Self {
        Self {
            probability,
            level: SuccessLevel::from_probability(probability),
            advice: advice_for(probability).to_string(),
            source,
        }
    }
}

fn advice_for(probability: f64) -> &'static str {
    if probability > 0.8 {
        "Excellent match! You have strong potential for success in this course."
    } else if probability > 0.6 {
        "Good match. Focus on strengthening your foundation in key subjects."
    } else if probability > 0.4 {
        "Moderate match. Consider additional preparation and study support."
    } else {
        "Challenging match. Strongly consider alternative courses better suited to your strengths."
    }
}

/// Success estimator preferring an external predictor and falling back to a
/// deterministic formula.
#[derive(Clone)]
pub struct SuccessModel {
    predictor: Option<Arc<dyn SuccessPredictor>>,
    fallback_cutoff: u16,
}

impl std::fmt::Debug for SuccessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuccessModel")
            .field("predictor", &self.predictor.is_some())
            .field("fallback_cutoff", &self.fallback_cutoff)
            .finish()
    }
}

impl SuccessModel {
    pub fn rule_based(fallback_cutoff: u16) -> Self {
        Self {
            predictor: None,
            fallback_cutoff,
        }
    }

    pub fn with_predictor(predictor: Arc<dyn SuccessPredictor>, fallback_cutoff: u16) -> Self {
        Self {
            predictor: Some(predictor),
            fallback_cutoff,
        }
    }

    pub fn estimate(&self, course: &Course, profile: &StudentProfile) -> SuccessEstimate {
        if let Some(predictor) = &self.predictor {
            let features = FeatureVector::extract(course, profile);
            let prediction = predictor
                .predict(course.category, &features)
                .and_then(|probability| {
                    if probability.is_finite() {
                        Ok(probability)
                    } else {
                        Err(PredictorError::NonFinite(probability))
                    }
                });

            match prediction {
                Ok(probability) => {
                    return SuccessEstimate::new(
                        clamp_probability(probability),
                        EstimateSource::Model,
                    );
                }
                Err(error) => {
                    warn!(
                        course = %course.name,
                        %error,
                        "success predictor degraded, using rule-based estimate"
                    );
                }
            }
        }

        SuccessEstimate::new(
            rule_based_probability(course, profile, self.fallback_cutoff),
            EstimateSource::RuleBased,
        )
    }

    pub fn probability(&self, course: &Course, profile: &StudentProfile) -> f64 {
        self.estimate(course, profile).probability
    }
}

/// `(exam factor * 0.4 + grade factor * 0.6) * difficulty penalty`, clamped.
pub fn rule_based_probability(
    course: &Course,
    profile: &StudentProfile,
    fallback_cutoff: u16,
) -> f64 {
    let cutoff = course.lowest_cutoff().unwrap_or(fallback_cutoff).max(1) as f64;
    let exam_factor = (profile.exam_score as f64 / cutoff).min(1.0);
    let grade_factor = course_subject_average(course, profile) / 9.0;
    let probability = (exam_factor * 0.4 + grade_factor * 0.6) * course.difficulty.penalty();
    clamp_probability(probability)
}

fn clamp_probability(probability: f64) -> f64 {
    probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}
