//! Workout plan generation.
//!
//! A plan is assembled in three lookups and one division:
//!
//! 1. [`select_exercise_set`] picks the strength list for the equipment.
//! 2. [`compose_main_set`] mixes that list with interval work per the goal.
//! 3. [`allocate_main_time`] splits the time left after warm-up and
//!    cool-down evenly across the main set.
//!
//! Rep counts are rendered from [`RepScheme`] using the level's set and rep
//! tables, so the same template prints "2 × 10" for a beginner and
//! "4 × 15" for an advanced trainee.
//!
//! ```rust
//! use fitplan_core::{
//!     models::{Equipment, FitnessGoal, Level},
//!     workout::generate_workout_plan,
//! };
//!
//! let plan = generate_workout_plan(FitnessGoal::Lose, 60, Level::Beginner, Equipment::Dumbbells);
//! assert_eq!(plan.main.len(), 4);
//! assert_eq!(plan.main[2].plan, "2 × 10");
//! assert_eq!(plan.main[0].estimated_minutes, Some(11));
//! ```

use log::debug;

use crate::models::{Equipment, FitnessGoal, Level, WorkoutPlan, WorkoutStep};

/// Minutes reserved for the warm-up.
pub const WARMUP_MINUTES: u32 = 8;
/// Minutes reserved for the cool-down.
pub const COOLDOWN_MINUTES: u32 = 8;
/// Smallest main window, whatever the requested duration.
pub const MIN_MAIN_WINDOW_MINUTES: u32 = 10;
/// Smallest per-exercise allotment.
pub const MIN_EXERCISE_MINUTES: u32 = 6;

/// How an exercise's volume is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepScheme {
    /// "{sets} × {reps}" from the level tables
    Reps,
    /// "{sets} × {text}", e.g. a fixed hold or rep range
    SetsOf(&'static str),
    /// Work/rest notation that ignores the level entirely
    Interval(&'static str),
}

impl RepScheme {
    /// Renders the volume text for the given level.
    pub fn render(&self, level: Level) -> String {
        match self {
            RepScheme::Reps => format!("{} × {}", level.sets(), level.reps()),
            RepScheme::SetsOf(text) => format!("{} × {text}", level.sets()),
            RepScheme::Interval(text) => (*text).to_string(),
        }
    }
}

/// A named exercise with its volume scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub scheme: RepScheme,
}

const fn template(name: &'static str, scheme: RepScheme) -> ExerciseTemplate {
    ExerciseTemplate { name, scheme }
}

/// Strength work needing no equipment.
pub const BODYWEIGHT_EXERCISES: &[ExerciseTemplate] = &[
    template("Push-Ups", RepScheme::Reps),
    template("Air Squats", RepScheme::Reps),
    template("Glute Bridges", RepScheme::Reps),
    template("Plank", RepScheme::SetsOf("40 sec")),
];

/// Strength work with a pair of dumbbells.
pub const DUMBBELL_EXERCISES: &[ExerciseTemplate] = &[
    template("DB Goblet Squat", RepScheme::Reps),
    template("DB Bench Press", RepScheme::Reps),
    template("DB Rows", RepScheme::Reps),
];

/// Barbell strength work.
pub const GYM_EXERCISES: &[ExerciseTemplate] = &[
    template("Barbell Back Squat", RepScheme::SetsOf("5–8")),
    template("Deadlift", RepScheme::SetsOf("5–8")),
    template("Bench Press", RepScheme::SetsOf("6–10")),
];

/// High-intensity intervals, 40 seconds on and 20 off.
pub const INTERVAL_EXERCISES: &[ExerciseTemplate] = &[
    template("Jumping Jacks", RepScheme::Interval("40/20")),
    template("High Knees", RepScheme::Interval("40/20")),
    template("Burpees", RepScheme::Interval("40/20")),
];

/// Fixed warm-up as (name, duration text).
pub const WARMUP_STEPS: &[(&str, &str)] = &[
    ("Joint rotations + light cardio", "5 min total"),
    ("Dynamic leg swings & arm circles", "3 min"),
];

/// Fixed cool-down as (name, duration text).
pub const COOLDOWN_STEPS: &[(&str, &str)] = &[
    ("Slow walk + deep breathing", "3 min"),
    ("Static stretching (hamstrings, chest, hips)", "5 min"),
];

/// Returns the strength list for the equipment. Unknown equipment has
/// already collapsed to [`Equipment::Bodyweight`].
pub fn select_exercise_set(equipment: Equipment) -> &'static [ExerciseTemplate] {
    match equipment {
        Equipment::Gym => GYM_EXERCISES,
        Equipment::Dumbbells => DUMBBELL_EXERCISES,
        Equipment::Bodyweight => BODYWEIGHT_EXERCISES,
    }
}

/// How a goal mixes interval and strength work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainSetRule {
    /// Interval exercises placed before the strength work
    pub leading_intervals: usize,
    /// Strength exercises taken from the front of the list; `None` takes all
    pub strength: Option<usize>,
    /// Interval exercises placed after the strength work
    pub trailing_intervals: usize,
    pub note: &'static str,
}

/// Looks up the composition rule for a goal.
pub fn main_set_rule(goal: FitnessGoal) -> MainSetRule {
    match goal {
        FitnessGoal::Lose => MainSetRule {
            leading_intervals: 2,
            strength: Some(2),
            trailing_intervals: 0,
            note: "Circuit style. Keep rest short.",
        },
        FitnessGoal::Gain => MainSetRule {
            leading_intervals: 0,
            strength: None,
            trailing_intervals: 0,
            note: "Controlled tempo. 60–90s rest.",
        },
        FitnessGoal::Maintain => MainSetRule {
            leading_intervals: 0,
            strength: Some(2),
            trailing_intervals: 1,
            note: "Balanced strength + cardio.",
        },
    }
}

/// The chosen main-set exercises and their coaching note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainSet {
    pub exercises: Vec<ExerciseTemplate>,
    pub note: &'static str,
}

/// Combines interval work with `strength` according to the goal's rule.
pub fn compose_main_set(goal: FitnessGoal, strength: &[ExerciseTemplate]) -> MainSet {
    let rule = main_set_rule(goal);
    let strength_count = rule.strength.unwrap_or(strength.len());

    let exercises = INTERVAL_EXERCISES
        .iter()
        .take(rule.leading_intervals)
        .chain(strength.iter().take(strength_count))
        .chain(INTERVAL_EXERCISES.iter().take(rule.trailing_intervals))
        .copied()
        .collect();

    MainSet {
        exercises,
        note: rule.note,
    }
}

/// Minutes per main-set exercise.
///
/// `max(6, max(10, total - 16) / max(1, count))` with integer division.
pub fn allocate_main_time(total_minutes: u32, exercise_count: usize) -> u32 {
    let window = total_minutes
        .saturating_sub(WARMUP_MINUTES + COOLDOWN_MINUTES)
        .max(MIN_MAIN_WINDOW_MINUTES);
    let divisor = u32::try_from(exercise_count.max(1)).unwrap_or(u32::MAX);
    (window / divisor).max(MIN_EXERCISE_MINUTES)
}

/// Builds a full workout. Identical inputs always give identical plans.
pub fn generate_workout_plan(
    goal: FitnessGoal,
    duration_minutes: u32,
    level: Level,
    equipment: Equipment,
) -> WorkoutPlan {
    let main_set = compose_main_set(goal, select_exercise_set(equipment));
    let per_exercise = allocate_main_time(duration_minutes, main_set.exercises.len());

    debug!(
        "Generating {} workout: {} min, {}, {} ({} exercises at {} min)",
        goal.as_str(),
        duration_minutes,
        level.as_str(),
        equipment.as_str(),
        main_set.exercises.len(),
        per_exercise
    );

    let main = main_set
        .exercises
        .iter()
        .map(|exercise| {
            WorkoutStep::timed(exercise.name, exercise.scheme.render(level), per_exercise)
        })
        .collect();

    WorkoutPlan {
        warmup: fixed_steps(WARMUP_STEPS),
        main,
        cooldown: fixed_steps(COOLDOWN_STEPS),
        note: main_set.note.to_string(),
    }
}

fn fixed_steps(steps: &[(&str, &str)]) -> Vec<WorkoutStep> {
    steps
        .iter()
        .map(|(name, plan)| WorkoutStep::fixed(*name, *plan))
        .collect()
}
