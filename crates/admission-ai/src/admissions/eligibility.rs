use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Course};
use super::domain::{GradeSheet, StudentProfile};
use super::requirements::{RequirementEvaluator, RuleCheck};

/// Verdict for one (course, university) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityEligibility {
    pub university: String,
    pub cutoff: u16,
    pub note: String,
    pub eligible: bool,
    pub catchment_advantage: bool,
    pub reason: String,
}

/// Eligibility verdicts keyed by university identifier.
pub type EligibilityMap = BTreeMap<String, UniversityEligibility>;

pub fn eligible_universities(map: &EligibilityMap) -> Vec<String> {
    map.iter()
        .filter(|(_, result)| result.eligible)
        .map(|(id, _)| id.clone())
        .collect()
}

/// Borrowed view of the inputs the calculator needs.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'p> {
    pub score: u16,
    pub subjects: &'p [String],
    pub grades: &'p GradeSheet,
    pub state: &'p str,
}

impl<'p> From<&'p StudentProfile> for Candidate<'p> {
    fn from(profile: &'p StudentProfile) -> Self {
        Self {
            score: profile.exam_score,
            subjects: &profile.exam_subjects,
            grades: &profile.grades,
            state: &profile.state,
        }
    }
}

pub struct EligibilityCalculator<'a> {
    catalog: &'a Catalog,
    requirements: RequirementEvaluator<'a>,
}

impl<'a> EligibilityCalculator<'a> {
    pub fn new(catalog: &'a Catalog, requirements: RequirementEvaluator<'a>) -> Self {
        Self {
            catalog,
            requirements,
        }
    }

    /// One verdict per university offering the course.
    ///
    /// The requirement checks do not depend on the university, so they run
    /// once per call.
    pub fn evaluate(&self, course: &Course, candidate: Candidate<'_>) -> EligibilityMap {
        let exam = self
            .requirements
            .validate_exam_subjects(course, candidate.subjects);
        let grades = self
            .requirements
            .validate_grade_sheet(course, candidate.grades);
        self.evaluate_with_checks(course, candidate, &exam, &grades)
    }

    pub(crate) fn evaluate_with_checks(
        &self,
        course: &Course,
        candidate: Candidate<'_>,
        exam: &RuleCheck,
        grades: &RuleCheck,
    ) -> EligibilityMap {
        course
            .offers
            .iter()
            .map(|offer| {
                let university = self.catalog.university(&offer.university);
                let mut result = UniversityEligibility {
                    university: university
                        .map(|university| university.name.clone())
                        .unwrap_or_else(|| offer.university.clone()),
                    cutoff: offer.cutoff,
                    note: offer.note.clone(),
                    eligible: false,
                    catchment_advantage: false,
                    reason: String::new(),
                };

                if !exam.passed {
                    result.reason = format!("JAMB: {}", exam.reason);
                } else if !grades.passed {
                    result.reason = format!("O'Level: {}", grades.reason);
                } else if candidate.score < offer.cutoff {
                    result.reason =
                        format!("score too low ({}/{})", candidate.score, offer.cutoff);
                } else {
                    result.eligible = true;
                    result.reason = "eligible".to_string();
                    if university.is_some_and(|university| university.in_catchment(candidate.state))
                    {
                        result.catchment_advantage = true;
                        result.reason.push_str(" + catchment advantage");
                    }
                }

                (offer.university.clone(), result)
            })
            .collect()
    }
}
