use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{Catalog, CareerOutlook, CourseCategory, Difficulty, Rating};
use super::domain::StudentProfile;
use super::eligibility::{
    eligible_universities, Candidate, EligibilityCalculator, EligibilityMap,
};
use super::requirements::RequirementEvaluator;
use super::scoring::{StrengthLevel, StrengthProfile, SuccessModel};

const STRENGTH_WEIGHT: f64 = 0.3;
const SUCCESS_WEIGHT: f64 = 0.4;
const CAREER_WEIGHT: f64 = 0.2;
const UNIVERSITY_WEIGHT: f64 = 0.1;

/// Ranked alternative course for a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub course: String,
    pub category: CourseCategory,
    pub match_score: f64,
    pub success_probability: f64,
    pub strength_level: StrengthLevel,
    pub eligible_universities: Vec<String>,
    pub justification: String,
    pub career_prospects: Vec<String>,
    pub salary_range: String,
    pub job_demand: Rating,
    pub duration_years: u8,
    pub difficulty: Difficulty,
    pub university_options: EligibilityMap,
}

/// Composite score blending strength, success, career outlook and breadth of options.
pub fn match_score(
    strength_final_score: f64,
    success_probability: f64,
    career_score: f64,
    eligible_university_count: usize,
) -> f64 {
    strength_final_score * STRENGTH_WEIGHT
        + success_probability * 10.0 * SUCCESS_WEIGHT
        + career_score * CAREER_WEIGHT
        + eligible_university_count as f64 * UNIVERSITY_WEIGHT
}

pub fn justification(
    strength_level: StrengthLevel,
    success_probability: f64,
    outlook: &CareerOutlook,
    eligible_university_count: usize,
) -> String {
    let mut reasons = Vec::new();

    match strength_level {
        StrengthLevel::Excellent | StrengthLevel::VeryGood => reasons.push(format!(
            "Strong academic foundation ({})",
            strength_level.label()
        )),
        StrengthLevel::Good => reasons.push("Good academic match".to_string()),
        _ => {}
    }

    if success_probability > 0.8 {
        reasons.push("Very high success probability".to_string());
    } else if success_probability > 0.6 {
        reasons.push("Good success probability".to_string());
    }

    if matches!(outlook.growth_rate, Rating::High | Rating::VeryHigh) {
        reasons.push(format!(
            "{} career growth potential",
            outlook.growth_rate.label().to_lowercase()
        ));
    }

    if eligible_university_count > 3 {
        reasons.push("Multiple university options available".to_string());
    }

    if reasons.is_empty() {
        "Meets basic requirements".to_string()
    } else {
        reasons.join("; ")
    }
}

pub struct RecommendationRanker<'a> {
    catalog: &'a Catalog,
    requirements: RequirementEvaluator<'a>,
    success: &'a SuccessModel,
    limit: usize,
}

impl<'a> RecommendationRanker<'a> {
    pub fn new(
        catalog: &'a Catalog,
        requirements: RequirementEvaluator<'a>,
        success: &'a SuccessModel,
        limit: usize,
    ) -> Self {
        Self {
            catalog,
            requirements,
            success,
            limit,
        }
    }

    /// Every catalog course the student can enter, best match first.
    ///
    /// Ties keep catalog declaration order.
    pub fn recommend(&self, profile: &StudentProfile) -> Vec<Recommendation> {
        let strengths = StrengthProfile::assess(
            self.catalog,
            &profile.grades,
            profile.learning_style,
            profile.study_preference,
        );
        let calculator = EligibilityCalculator::new(self.catalog, self.requirements);
        let candidate = Candidate::from(profile);

        let mut recommendations: Vec<Recommendation> = self
            .catalog
            .courses()
            .iter()
            .filter_map(|course| {
                let exam = self
                    .requirements
                    .validate_exam_subjects(course, &profile.exam_subjects);
                let grades = self
                    .requirements
                    .validate_grade_sheet(course, &profile.grades);
                if !exam.passed || !grades.passed {
                    return None;
                }

                let lowest_cutoff = course.lowest_cutoff()?;
                if profile.exam_score < lowest_cutoff {
                    return None;
                }

                let options = calculator.evaluate_with_checks(course, candidate, &exam, &grades);
                let eligible = eligible_universities(&options);
                if eligible.is_empty() {
                    return None;
                }

                let strength = strengths.for_category(course.category);
                let success_probability = self.success.probability(course, profile);
                let outlook = self.catalog.career_outlook(course.category);
                let score = match_score(
                    strength.final_score,
                    success_probability,
                    outlook.score(),
                    eligible.len(),
                );
                debug!(course = %course.name, score, eligible = eligible.len(), "course ranked");

                Some(Recommendation {
                    course: course.name.clone(),
                    category: course.category,
                    match_score: score,
                    success_probability,
                    strength_level: strength.level,
                    justification: justification(
                        strength.level,
                        success_probability,
                        &outlook,
                        eligible.len(),
                    ),
                    eligible_universities: eligible,
                    career_prospects: course.career_prospects.clone(),
                    salary_range: course.salary_range.clone(),
                    job_demand: course.job_demand,
                    duration_years: course.duration_years,
                    difficulty: course.difficulty,
                    university_options: options,
                })
            })
            .collect();

        recommendations.sort_by(|left, right| right.match_score.total_cmp(&left.match_score));
        recommendations.truncate(self.limit);
        recommendations
    }
}
