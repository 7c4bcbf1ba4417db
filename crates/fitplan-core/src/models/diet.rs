//! Diet recommendation model.

use serde::{Deserialize, Serialize};

use super::FitnessGoal;

/// A BMI-based diet recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// Headline such as "Weight Loss Diet"
    pub title: String,

    /// Body mass index rounded to two decimals
    pub bmi: f64,

    /// Age as supplied by the user
    pub age: u32,

    /// Goal the advice was chosen for
    pub goal: FitnessGoal,

    /// Ordered pieces of advice
    pub recommendations: Vec<String>,
}
