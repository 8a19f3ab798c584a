use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Course, SubjectRule};
use super::domain::{credit_count, GradeSheet};

/// Outcome of one requirement check with the explanation shown to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub passed: bool,
    pub reason: String,
}

impl RuleCheck {
    fn pass(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
        }
    }
}

/// Checks exam-subject selections and grade sheets against course rules.
#[derive(Debug, Clone, Copy)]
pub struct RequirementEvaluator<'a> {
    catalog: &'a Catalog,
    minimum_credits: usize,
}

impl<'a> RequirementEvaluator<'a> {
    pub fn new(catalog: &'a Catalog, minimum_credits: usize) -> Self {
        Self {
            catalog,
            minimum_credits,
        }
    }

    /// Evaluate every entrance rule independently; unmet rules are reported in
    /// declaration order.
    ///
    /// Combinators do not consume subjects, so one subject may satisfy several
    /// combinators in the same course.
    pub fn validate_exam_subjects(&self, course: &Course, subjects: &[String]) -> RuleCheck {
        let selected: BTreeSet<&str> = subjects.iter().map(String::as_str).collect();
        let canonical: BTreeSet<&str> = subjects
            .iter()
            .map(|subject| self.catalog.canonical_subject(subject))
            .collect();

        let missing: Vec<String> = course
            .exam_rules
            .iter()
            .filter_map(|rule| {
                let matched = if rule.is_combinator() {
                    self.combinator_matches(rule, &canonical)
                } else {
                    rule.candidates()
                        .iter()
                        .filter(|subject| selected.contains(subject.as_str()))
                        .count()
                };
                (matched < rule.required_matches()).then(|| rule.unmet_description(matched))
            })
            .collect();

        if missing.is_empty() {
            RuleCheck::pass("Valid JAMB combination")
        } else {
            RuleCheck::fail(format!("Missing: {}", missing.join(", ")))
        }
    }

    /// Distinct candidates present once synonyms on both sides are resolved.
    fn combinator_matches(&self, rule: &SubjectRule, canonical: &BTreeSet<&str>) -> usize {
        rule.candidates()
            .iter()
            .map(|candidate| self.catalog.canonical_subject(candidate))
            .filter(|candidate| canonical.contains(*candidate))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// The whole sheet must hold enough credits, then every named subject must
    /// itself be a credit.
    pub fn validate_grade_sheet(&self, course: &Course, grades: &GradeSheet) -> RuleCheck {
        let credits = credit_count(grades.values());
        if credits < self.minimum_credits {
            return RuleCheck::fail(format!(
                "Need {} credits minimum (you have {credits})",
                self.minimum_credits
            ));
        }

        let shortfalls: Vec<String> = course
            .credit_subjects
            .iter()
            .filter_map(|subject| match grades.get(subject) {
                None => Some(format!("{subject} (not taken)")),
                Some(grade) if !grade.is_credit() => {
                    Some(format!("{subject} (need C6+, you have {grade})"))
                }
                Some(_) => None,
            })
            .collect();

        if shortfalls.is_empty() {
            RuleCheck::pass(format!("Valid O'Level ({credits} credits)"))
        } else {
            RuleCheck::fail(format!(
                "Requirements not met: {}",
                shortfalls.join("; ")
            ))
        }
    }
}
