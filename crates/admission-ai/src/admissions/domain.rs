use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Secondary-school results keyed by subject name.
pub type GradeSheet = BTreeMap<String, Grade>;

/// Nine-point secondary-school grade scale, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A1,
    B2,
    B3,
    C4,
    C5,
    C6,
    D7,
    E8,
    F9,
}

/// Lowest rank that still counts as a credit (C6).
pub const CREDIT_RANK: u8 = 4;

impl Grade {
    pub const ALL: [Grade; 9] = [
        Grade::A1,
        Grade::B2,
        Grade::B3,
        Grade::C4,
        Grade::C5,
        Grade::C6,
        Grade::D7,
        Grade::E8,
        Grade::F9,
    ];

    /// Integer rank from 9 (A1) down to 1 (F9).
    pub const fn rank(self) -> u8 {
        match self {
            Grade::A1 => 9,
            Grade::B2 => 8,
            Grade::B3 => 7,
            Grade::C4 => 6,
            Grade::C5 => 5,
            Grade::C6 => 4,
            Grade::D7 => 3,
            Grade::E8 => 2,
            Grade::F9 => 1,
        }
    }

    pub const fn is_credit(self) -> bool {
        self.rank() >= CREDIT_RANK
    }

    pub const fn label(self) -> &'static str {
        match self {
            Grade::A1 => "A1",
            Grade::B2 => "B2",
            Grade::B3 => "B3",
            Grade::C4 => "C4",
            Grade::C5 => "C5",
            Grade::C6 => "C6",
            Grade::D7 => "D7",
            Grade::E8 => "E8",
            Grade::F9 => "F9",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of credits (C6 or better) across the whole sheet.
pub fn credit_count<'a, I>(grades: I) -> usize
where
    I: IntoIterator<Item = &'a Grade>,
{
    grades.into_iter().filter(|grade| grade.is_credit()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    Kinesthetic,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
}

impl LearningStyle {
    /// Position in the encoding used by the success predictor features.
    pub const fn index(self) -> u8 {
        match self {
            LearningStyle::Visual => 0,
            LearningStyle::Auditory => 1,
            LearningStyle::Kinesthetic => 2,
            LearningStyle::ReadingWriting => 3,
        }
    }

    pub const fn study_advice(self) -> &'static str {
        match self {
            LearningStyle::Visual => {
                "Use diagrams, charts, and visual aids. Create mind maps for complex topics."
            }
            LearningStyle::Auditory => {
                "Join study groups, use audio materials, and explain concepts aloud."
            }
            LearningStyle::Kinesthetic => {
                "Use hands-on practice, experiments, and physical activities while studying."
            }
            LearningStyle::ReadingWriting => {
                "Take detailed notes, create summaries, and practice writing exercises."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StudyPreference {
    Theoretical,
    #[default]
    Practical,
    Research,
    Applied,
}

impl StudyPreference {
    pub const fn index(self) -> u8 {
        match self {
            StudyPreference::Theoretical => 0,
            StudyPreference::Practical => 1,
            StudyPreference::Research => 2,
            StudyPreference::Applied => 3,
        }
    }
}

/// Request-scoped description of a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    #[serde(default)]
    pub state: String,
    pub preferred_course: String,
    pub exam_score: u16,
    pub exam_subjects: Vec<String>,
    #[serde(default)]
    pub grades: GradeSheet,
    #[serde(default)]
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub study_preference: StudyPreference,
}

impl StudentProfile {
    pub fn credit_count(&self) -> usize {
        credit_count(self.grades.values())
    }

    /// Mean rank across every graded subject, zero when nothing is graded.
    pub fn average_grade_rank(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: u32 = self.grades.values().map(|grade| grade.rank() as u32).sum();
        total as f64 / self.grades.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_threshold_sits_at_c6() {
        let credits: Vec<Grade> = Grade::ALL
            .iter()
            .copied()
            .filter(|grade| grade.is_credit())
            .collect();
        assert_eq!(
            credits,
            vec![Grade::A1, Grade::B2, Grade::B3, Grade::C4, Grade::C5, Grade::C6]
        );
    }

    #[test]
    fn learning_style_parses_display_names() {
        let style: LearningStyle = serde_json::from_str("\"Reading/Writing\"").expect("parses");
        assert_eq!(style, LearningStyle::ReadingWriting);
        assert_eq!(style.index(), 3);
    }
}
