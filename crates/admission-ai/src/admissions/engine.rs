use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{Catalog, Course, Rating};
use super::config::EngineConfig;
use super::decision::{decide, AdmissionDecision, AdmissionStatus};
use super::domain::{GradeSheet, StudentProfile};
use super::eligibility::{Candidate, EligibilityCalculator, EligibilityMap};
use super::ranking::{Recommendation, RecommendationRanker};
use super::requirements::{RequirementEvaluator, RuleCheck};
use super::scoring::{StrengthProfile, SuccessEstimate, SuccessModel, SuccessPredictor};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("course '{0}' not found")]
    UnknownCourse(String),
}

/// Career outlook of the preferred course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub prospects: Vec<String>,
    pub salary_range: String,
    pub job_demand: Rating,
    pub growth_rate: Rating,
    pub job_security: Rating,
    pub international_mobility: Rating,
    pub entrepreneurship_potential: Rating,
}

/// Full result of processing one student profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionOutcome {
    pub student_name: String,
    pub preferred_course: String,
    pub status: AdmissionStatus,
    pub decision: AdmissionDecision,
    pub message: String,
    pub eligibility: EligibilityMap,
    pub success: SuccessEstimate,
    pub career: CareerAnalysis,
    pub recommendations: Vec<Recommendation>,
}

/// Stateless facade over the catalog; safe to share across threads.
#[derive(Debug, Clone)]
pub struct AdmissionEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    success: SuccessModel,
}

impl AdmissionEngine {
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        let success = SuccessModel::rule_based(config.fallback_cutoff);
        Self {
            catalog,
            config,
            success,
        }
    }

    /// Route success estimates through an external predictor first.
    pub fn with_predictor(mut self, predictor: Arc<dyn SuccessPredictor>) -> Self {
        self.success = SuccessModel::with_predictor(predictor, self.config.fallback_cutoff);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn course(&self, name: &str) -> Result<&Course, EngineError> {
        self.catalog
            .course(name)
            .ok_or_else(|| EngineError::UnknownCourse(name.to_string()))
    }

    fn requirements(&self) -> RequirementEvaluator<'_> {
        RequirementEvaluator::new(&self.catalog, self.config.minimum_credits)
    }

    pub fn validate_exam_subjects(
        &self,
        course: &str,
        subjects: &[String],
    ) -> Result<RuleCheck, EngineError> {
        let course = self.course(course)?;
        Ok(self.requirements().validate_exam_subjects(course, subjects))
    }

    pub fn validate_grade_sheet(
        &self,
        course: &str,
        grades: &GradeSheet,
    ) -> Result<RuleCheck, EngineError> {
        let course = self.course(course)?;
        Ok(self.requirements().validate_grade_sheet(course, grades))
    }

    pub fn evaluate_university_eligibility(
        &self,
        course: &str,
        score: u16,
        subjects: &[String],
        grades: &GradeSheet,
        state: &str,
    ) -> Result<EligibilityMap, EngineError> {
        let course = self.course(course)?;
        let calculator = EligibilityCalculator::new(&self.catalog, self.requirements());
        Ok(calculator.evaluate(
            course,
            Candidate {
                score,
                subjects,
                grades,
                state,
            },
        ))
    }

    pub fn estimate_success(
        &self,
        course: &str,
        profile: &StudentProfile,
    ) -> Result<SuccessEstimate, EngineError> {
        let course = self.course(course)?;
        Ok(self.success.estimate(course, profile))
    }

    pub fn estimate_success_probability(
        &self,
        course: &str,
        profile: &StudentProfile,
    ) -> Result<f64, EngineError> {
        self.estimate_success(course, profile)
            .map(|estimate| estimate.probability)
    }

    pub fn assess_strengths(&self, profile: &StudentProfile) -> StrengthProfile {
        StrengthProfile::assess(
            &self.catalog,
            &profile.grades,
            profile.learning_style,
            profile.study_preference,
        )
    }

    pub fn recommend(&self, profile: &StudentProfile) -> Vec<Recommendation> {
        RecommendationRanker::new(
            &self.catalog,
            self.requirements(),
            &self.success,
            self.config.max_recommendations,
        )
        .recommend(profile)
    }

    /// Decide on the preferred course and attach alternative recommendations.
    pub fn process_admission(
        &self,
        profile: &StudentProfile,
    ) -> Result<AdmissionOutcome, EngineError> {
        let course = self.course(&profile.preferred_course)?;
        let requirements = self.requirements();

        let exam = requirements.validate_exam_subjects(course, &profile.exam_subjects);
        let grades = requirements.validate_grade_sheet(course, &profile.grades);
        let eligibility = EligibilityCalculator::new(&self.catalog, requirements)
            .evaluate_with_checks(course, Candidate::from(profile), &exam, &grades);

        let decision = decide(&exam, &grades, &eligibility);
        let status = decision.status();
        let recommendations = self.recommend(profile);

        let mut message = decision.summary(&course.name);
        if status == AdmissionStatus::NotAdmitted && !recommendations.is_empty() {
            message.push_str(&format!(
                "\n\nHowever, we found {} alternative courses that match your profile.",
                recommendations.len()
            ));
        }

        let outlook = self.catalog.career_outlook(course.category);
        let career = CareerAnalysis {
            prospects: course.career_prospects.clone(),
            salary_range: course.salary_range.clone(),
            job_demand: course.job_demand,
            growth_rate: outlook.growth_rate,
            job_security: outlook.job_security,
            international_mobility: outlook.international_mobility,
            entrepreneurship_potential: outlook.entrepreneurship_potential,
        };

        info!(
            course = %course.name,
            status = status.label(),
            eligible = eligibility.values().filter(|result| result.eligible).count(),
            recommendations = recommendations.len(),
            "admission processed"
        );

        Ok(AdmissionOutcome {
            student_name: profile.name.clone(),
            preferred_course: course.name.clone(),
            status,
            decision,
            message,
            eligibility,
            success: self.success.estimate(course, profile),
            career,
            recommendations,
        })
    }
}
