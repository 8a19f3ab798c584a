//! Strength profile and success-probability estimation.

mod strength;
mod success;

pub use strength::{AreaStrength, StrengthLevel, StrengthProfile};
pub use success::{
    rule_based_probability, EstimateSource, FeatureVector, PredictorError, SuccessEstimate,
    SuccessLevel, SuccessModel, SuccessPredictor, MAX_PROBABILITY, MIN_PROBABILITY,
};
