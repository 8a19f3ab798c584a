//! Personalised study-improvement plan derived from an admission outcome.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::decision::AdmissionStatus;
use super::domain::{Grade, StudentProfile};
use super::engine::AdmissionOutcome;

const WEAK_RANK: u8 = 4;
const STRONG_RANK: u8 = 7;
const RETAKE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreStatus {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreStatus {
    pub fn from_score(score: u16) -> Self {
        if score >= 300 {
            ScoreStatus::Excellent
        } else if score >= 250 {
            ScoreStatus::Good
        } else {
            ScoreStatus::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedSubject {
    pub subject: String,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub exam_score: u16,
    pub score_status: ScoreStatus,
    pub credits: usize,
    pub weak_subjects: Vec<GradedSubject>,
    pub strong_subjects: Vec<GradedSubject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAction {
    pub priority: Priority,
    pub area: String,
    pub action: String,
    pub target: String,
    pub timeline: String,
}

/// A plan phase spanning calendar months `first_month..=last_month` from the plan start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub first_month: u32,
    pub last_month: u32,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub focus: String,
}

impl Milestone {
    fn new(start: NaiveDate, first_month: u32, last_month: u32, focus: impl Into<String>) -> Self {
        let starts_on = add_months(start, first_month - 1);
        let ends_on = add_months(start, last_month)
            .pred_opt()
            .unwrap_or(starts_on);
        Self {
            first_month,
            last_month,
            starts_on,
            ends_on,
            focus: focus.into(),
        }
    }

    pub fn period(&self) -> String {
        format!("Month {}-{}", self.first_month, self.last_month)
    }
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyResources {
    pub exam_preparation: Vec<String>,
    pub secondary_preparation: Vec<String>,
    pub course_specific: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub student_name: String,
    pub starts_on: NaiveDate,
    pub assessment: Assessment,
    pub actions: Vec<PlanAction>,
    pub milestones: Vec<Milestone>,
    pub resources: StudyResources,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StudyPlanner;

impl StudyPlanner {
    pub fn plan(
        &self,
        profile: &StudentProfile,
        outcome: &AdmissionOutcome,
        start: NaiveDate,
    ) -> StudyPlan {
        let assessment = assess(profile);
        let actions = actions(profile, &assessment, outcome);
        let milestones = milestones(&assessment, start);
        let resources = resources(&profile.preferred_course, &assessment.weak_subjects);

        StudyPlan {
            student_name: profile.name.clone(),
            starts_on: start,
            assessment,
            actions,
            milestones,
            resources,
        }
    }
}

fn assess(profile: &StudentProfile) -> Assessment {
    let mut weak_subjects = Vec::new();
    let mut strong_subjects = Vec::new();
    for (subject, grade) in &profile.grades {
        let graded = GradedSubject {
            subject: subject.clone(),
            grade: *grade,
        };
        if grade.rank() <= WEAK_RANK {
            weak_subjects.push(graded);
        } else if grade.rank() >= STRONG_RANK {
            strong_subjects.push(graded);
        }
    }

    Assessment {
        exam_score: profile.exam_score,
        score_status: ScoreStatus::from_score(profile.exam_score),
        credits: profile.credit_count(),
        weak_subjects,
        strong_subjects,
    }
}

fn actions(
    profile: &StudentProfile,
    assessment: &Assessment,
    outcome: &AdmissionOutcome,
) -> Vec<PlanAction> {
    let mut actions = Vec::new();

    if assessment.exam_score < 200 {
        actions.push(PlanAction {
            priority: Priority::High,
            area: "Entrance Exam Score".to_string(),
            action: "Focus on intensive entrance exam preparation".to_string(),
            target: "Increase score by 50+ points".to_string(),
            timeline: "3-6 months".to_string(),
        });
    }

    let weak = &assessment.weak_subjects;
    if weak.len() > 2 {
        let named: Vec<&str> = weak
            .iter()
            .take(RETAKE_LIMIT)
            .map(|graded| graded.subject.as_str())
            .collect();
        actions.push(PlanAction {
            priority: Priority::High,
            area: "Secondary-School Retakes".to_string(),
            action: format!("Retake {} subjects: {}", weak.len(), named.join(", ")),
            target: "Achieve minimum C6 in all subjects".to_string(),
            timeline: "6-12 months".to_string(),
        });
    }

    if outcome.status == AdmissionStatus::NotAdmitted {
        let alternative = outcome
            .recommendations
            .first()
            .map(|recommendation| recommendation.course.as_str())
            .unwrap_or("alternative courses");
        actions.push(PlanAction {
            priority: Priority::Medium,
            area: "Alternative Courses".to_string(),
            action: format!("Consider {alternative}"),
            target: "Secure admission in a related field".to_string(),
            timeline: "Current application cycle".to_string(),
        });
    }

    actions.push(PlanAction {
        priority: Priority::Medium,
        area: "Study Method Optimization".to_string(),
        action: profile.learning_style.study_advice().to_string(),
        target: "Improve learning efficiency".to_string(),
        timeline: "Ongoing".to_string(),
    });

    actions
}

fn milestones(assessment: &Assessment, start: NaiveDate) -> Vec<Milestone> {
    let mut milestones = Vec::new();

    if assessment.exam_score < 250 {
        milestones.extend([
            Milestone::new(start, 1, 2, "Entrance exam fundamentals and practice tests"),
            Milestone::new(start, 3, 4, "Intensive exam preparation and mock exams"),
            Milestone::new(start, 5, 6, "Final exam preparation and registration"),
        ]);
    }

    if !assessment.weak_subjects.is_empty() {
        milestones.extend([
            Milestone::new(
                start,
                1,
                3,
                format!(
                    "Secondary-school exam preparation for {} subjects",
                    assessment.weak_subjects.len()
                ),
            ),
            Milestone::new(start, 4, 6, "Secondary-school examinations and results"),
            Milestone::new(start, 7, 8, "University applications with improved grades"),
        ]);
    }

    milestones
}

fn resources(course: &str, weak_subjects: &[GradedSubject]) -> StudyResources {
    let mut resources = StudyResources {
        exam_preparation: [
            "Entrance exam past questions (2010-2024)",
            "Computer-based test practice software",
            "Online exam tutorials and video lessons",
            "Exam study groups and forums",
        ]
        .map(String::from)
        .to_vec(),
        ..StudyResources::default()
    };

    for graded in weak_subjects {
        resources
            .secondary_preparation
            .push(format!("{} past questions", graded.subject));
        resources
            .secondary_preparation
            .push(format!("{} textbooks and study guides", graded.subject));
    }

    let course = course.to_lowercase();
    let family: &[&str] = if course.contains("medicine") || course.contains("nursing") {
        &[
            "Biology and Chemistry intensive courses",
            "Medical terminology resources",
            "Healthcare career guidance materials",
        ]
    } else if course.contains("engineering") || course.contains("computer") {
        &[
            "Mathematics and Physics advanced courses",
            "Programming tutorials",
            "Engineering career pathway guides",
        ]
    } else if course.contains("law") {
        &[
            "Government and Literature intensive study",
            "Legal terminology and concepts",
            "Law school preparation materials",
        ]
    } else {
        &[]
    };
    resources
        .course_specific
        .extend(family.iter().map(|item| item.to_string()));

    resources
}
