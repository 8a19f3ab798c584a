use serde::{Deserialize, Serialize};

use super::eligibility::EligibilityMap;
use super::requirements::RuleCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdmissionStatus {
    Admitted,
    NotAdmitted,
}

impl AdmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AdmissionStatus::Admitted => "ADMITTED",
            AdmissionStatus::NotAdmitted => "NOT_ADMITTED",
        }
    }
}

/// Outcome for the preferred course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionDecision {
    Admitted { eligible_universities: usize },
    NotAdmitted(RejectionReason),
}

/// Why the preferred course was not offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    SubjectRules { reason: String },
    GradeRules { reason: String },
    CutoffsMissed { details: Vec<String> },
}

impl AdmissionDecision {
    pub fn status(&self) -> AdmissionStatus {
        match self {
            AdmissionDecision::Admitted { .. } => AdmissionStatus::Admitted,
            AdmissionDecision::NotAdmitted(_) => AdmissionStatus::NotAdmitted,
        }
    }

    pub fn summary(&self, course: &str) -> String {
        match self {
            AdmissionDecision::Admitted {
                eligible_universities,
            } => format!(
                "Congratulations! You are eligible for {course} at {eligible_universities} universities."
            ),
            AdmissionDecision::NotAdmitted(RejectionReason::SubjectRules { reason }) => {
                format!("Exam subjects invalid for {course}. {reason}")
            }
            AdmissionDecision::NotAdmitted(RejectionReason::GradeRules { reason }) => {
                format!("Secondary-school requirements not met for {course}. {reason}")
            }
            AdmissionDecision::NotAdmitted(RejectionReason::CutoffsMissed { details }) => {
                let base = format!(
                    "You meet the subject requirements for {course} but your score is below all university cutoffs"
                );
                if details.is_empty() {
                    format!("{base}.")
                } else {
                    format!("{base}: {}", details.join("; "))
                }
            }
        }
    }
}

pub(crate) fn decide(
    exam: &RuleCheck,
    grades: &RuleCheck,
    eligibility: &EligibilityMap,
) -> AdmissionDecision {
    if !exam.passed {
        return AdmissionDecision::NotAdmitted(RejectionReason::SubjectRules {
            reason: exam.reason.clone(),
        });
    }

    if !grades.passed {
        return AdmissionDecision::NotAdmitted(RejectionReason::GradeRules {
            reason: grades.reason.clone(),
        });
    }

    let eligible = eligibility.values().filter(|result| result.eligible).count();
    if eligible > 0 {
        return AdmissionDecision::Admitted {
            eligible_universities: eligible,
        };
    }

    AdmissionDecision::NotAdmitted(RejectionReason::CutoffsMissed {
        details: eligibility
            .iter()
            .map(|(id, result)| format!("{id} {}", result.reason))
            .collect(),
    })
}
