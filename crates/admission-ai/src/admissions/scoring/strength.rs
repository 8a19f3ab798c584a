use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::admissions::catalog::{Catalog, CourseCategory};
use crate::admissions::domain::{GradeSheet, LearningStyle, StudyPreference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Weak,
    #[serde(rename = "Very Weak")]
    VeryWeak,
}

impl StrengthLevel {
    pub fn from_average(average: f64) -> Self {
        if average >= 8.0 {
            StrengthLevel::Excellent
        } else if average >= 7.0 {
            StrengthLevel::VeryGood
        } else if average >= 6.0 {
            StrengthLevel::Good
        } else if average >= 5.0 {
            StrengthLevel::Average
        } else if average >= 4.0 {
            StrengthLevel::BelowAverage
        } else {
            StrengthLevel::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrengthLevel::Excellent => "Excellent",
            StrengthLevel::VeryGood => "Very Good",
            StrengthLevel::Good => "Good",
            StrengthLevel::Average => "Average",
            StrengthLevel::BelowAverage => "Below Average",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::VeryWeak => "Very Weak",
        }
    }

    /// Good or better.
    pub fn is_notable(self) -> bool {
        matches!(
            self,
            StrengthLevel::Excellent | StrengthLevel::VeryGood | StrengthLevel::Good
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaStrength {
    pub average_score: f64,
    pub subject_count: usize,
    pub level: StrengthLevel,
    pub adjusted_score: f64,
    pub final_score: f64,
}

impl AreaStrength {
    /// Used for categories with no subject area of their own.
    pub const UNASSESSED: AreaStrength = AreaStrength {
        average_score: 1.0,
        subject_count: 0,
        level: StrengthLevel::Average,
        adjusted_score: 1.0,
        final_score: 1.0,
    };
}

/// Per-area aptitude after learning-style and study-preference adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthProfile {
    pub areas: BTreeMap<CourseCategory, AreaStrength>,
}

impl StrengthProfile {
    pub fn assess(
        catalog: &Catalog,
        grades: &GradeSheet,
        learning_style: LearningStyle,
        study_preference: StudyPreference,
    ) -> Self {
        let areas = catalog
            .subject_areas()
            .iter()
            .map(|(category, subjects)| {
                let subjects: BTreeSet<&str> = subjects
                    .iter()
                    .map(|subject| catalog.canonical_subject(subject))
                    .collect();
                let ranks: Vec<f64> = subjects
                    .iter()
                    .filter_map(|subject| grades.get(*subject))
                    .map(|grade| grade.rank() as f64)
                    .collect();

                let (average_score, level) = if ranks.is_empty() {
                    (1.0, StrengthLevel::VeryWeak)
                } else {
                    let average = ranks.iter().sum::<f64>() / ranks.len() as f64;
                    (average, StrengthLevel::from_average(average))
                };

                let adjusted_score = average_score * learning_multiplier(learning_style, *category);
                let final_score =
                    adjusted_score * preference_multiplier(study_preference, *category);

                (
                    *category,
                    AreaStrength {
                        average_score,
                        subject_count: ranks.len(),
                        level,
                        adjusted_score,
                        final_score,
                    },
                )
            })
            .collect();

        Self { areas }
    }

    pub fn for_category(&self, category: CourseCategory) -> AreaStrength {
        self.areas
            .get(&category)
            .copied()
            .unwrap_or(AreaStrength::UNASSESSED)
    }
}

fn learning_multiplier(style: LearningStyle, category: CourseCategory) -> f64 {
    use CourseCategory::*;
    match (style, category) {
        (LearningStyle::Visual, Science | Medical) => 1.1,
        (LearningStyle::Visual, Engineering) => 1.2,
        (LearningStyle::Auditory, Arts | Education) => 1.2,
        (LearningStyle::Auditory, Commercial) => 1.1,
        (LearningStyle::Kinesthetic, Engineering) => 1.3,
        (LearningStyle::Kinesthetic, Agriculture) => 1.2,
        (LearningStyle::Kinesthetic, Medical | Science) => 1.1,
        (LearningStyle::ReadingWriting, Arts) => 1.3,
        (LearningStyle::ReadingWriting, Commercial) => 1.1,
        (LearningStyle::ReadingWriting, Education) => 1.2,
        _ => 1.0,
    }
}

fn preference_multiplier(preference: StudyPreference, category: CourseCategory) -> f64 {
    use CourseCategory::*;
    match (preference, category) {
        (StudyPreference::Theoretical, Science) => 1.2,
        (StudyPreference::Theoretical, Arts) => 1.1,
        (StudyPreference::Theoretical, Engineering) => 0.9,
        (StudyPreference::Practical, Engineering) => 1.3,
        (StudyPreference::Practical, Medical | Agriculture) => 1.2,
        (StudyPreference::Practical, Science) => 1.1,
        (StudyPreference::Research, Science) => 1.3,
        (StudyPreference::Research, Medical) => 1.2,
        (StudyPreference::Research, Arts | Agriculture) => 1.1,
        (StudyPreference::Applied, Engineering | Commercial) => 1.2,
        (StudyPreference::Applied, Agriculture | Medical) => 1.1,
        _ => 1.0,
    }
}
