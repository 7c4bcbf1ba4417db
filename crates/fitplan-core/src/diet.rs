//! BMI-based diet recommendations.

use log::debug;

use crate::{
    error::{FitplanError, Result},
    models::{DietPlan, FitnessGoal},
};

/// Body mass index from weight in kilograms and height in centimetres.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn advice(goal: FitnessGoal) -> (&'static str, [&'static str; 3]) {
    match goal {
        FitnessGoal::Lose => (
            "Weight Loss Diet",
            [
                "Eat ~500 kcal deficit.",
                "High protein, low refined carbs.",
                "Lots of veggies & hydration.",
            ],
        ),
        FitnessGoal::Gain => (
            "Muscle Gain Diet",
            [
                "Eat ~300 kcal surplus.",
                "Protein-rich + complex carbs.",
                "Strength training is required.",
            ],
        ),
        FitnessGoal::Maintain => (
            "Maintenance Diet",
            [
                "Balanced macros.",
                "Whole foods, avoid processed.",
                "Stay hydrated.",
            ],
        ),
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitplanError::invalid_input(field)
            .with_reason(format!("must be a positive number, got {value}")))
    }
}

/// Picks diet advice for the goal and reports the BMI.
///
/// # Errors
///
/// Returns [`FitplanError::InvalidInput`] when weight or height is zero,
/// negative or not finite.
pub fn recommend_diet(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    goal: FitnessGoal,
) -> Result<DietPlan> {
    require_positive("weight_kg", weight_kg)?;
    require_positive("height_cm", height_cm)?;

    let bmi = round_to_hundredths(body_mass_index(weight_kg, height_cm));
    let (title, recommendations) = advice(goal);
    debug!("BMI {bmi} for goal {}", goal.as_str());

    Ok(DietPlan {
        title: title.to_string(),
        bmi,
        age,
        goal,
        recommendations: recommendations.iter().map(|s| (*s).to_string()).collect(),
    })
}
