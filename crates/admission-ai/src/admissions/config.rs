use serde::{Deserialize, Serialize};

/// Policy constants applied by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub minimum_credits: usize,
    pub exam_subject_count: usize,
    pub max_exam_score: u16,
    pub max_recommendations: usize,
    /// Cutoff assumed by the success estimate for courses with no offers.
    pub fallback_cutoff: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_credits: 5,
            exam_subject_count: 4,
            max_exam_score: 400,
            max_recommendations: 15,
            fallback_cutoff: 200,
        }
    }
}
