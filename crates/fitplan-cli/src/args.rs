//! Command-line interface definitions using clap
//!
//! Each command has an argument struct with clap derives and a `From`
//! conversion into the matching core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Core parameter types stay free of clap attributes, so the MCP server can
//! reuse them unchanged. Preference flags (`--goal`, `--level`,
//! `--equipment`) are free text on purpose: unknown values fall back to a
//! default in the core instead of being rejected here.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use fitplan_core::params::{
    ExerciseName, GenerateSchedule, GenerateWorkout, ListExercises, RecommendDiet,
};

/// Daily schedule, workout and diet planner
///
/// fitplan turns wake, work and sleep times into a time-blocked day with an
/// optional morning workout, builds stand-alone workouts, browses a catalog
/// of exercises and gives BMI-based diet advice. `fitplan serve` exposes the
/// same operations as an MCP server over stdio.
#[derive(Parser)]
#[command(version, about, name = "fitplan")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the fitplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a time-blocked daily schedule
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Generate a stand-alone workout
    #[command(alias = "w")]
    Workout(WorkoutArgs),
    /// Browse the exercise catalog
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Get BMI-based diet advice
    #[command(alias = "d")]
    Diet(DietArgs),
    /// Start the MCP server
    Serve,
}

/// Where the workout goes in the day
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WorkoutSlotArg {
    /// Right after the morning routine
    Morning,
    /// No workout block
    #[value(name = "none")]
    Skip,
}

impl std::fmt::Display for WorkoutSlotArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutSlotArg::Morning => write!(f, "morning"),
            WorkoutSlotArg::Skip => write!(f, "none"),
        }
    }
}

/// Generate a daily schedule
#[derive(ClapArgs)]
pub struct ScheduleArgs {
    #[arg(long, value_name = "HH:MM", help = "Wake-up time")]
    pub wake: String,
    #[arg(long, value_name = "HH:MM", help = "Start of the work day")]
    pub work_start: String,
    #[arg(long, value_name = "HH:MM", help = "End of the work day")]
    pub work_end: String,
    #[arg(long, value_name = "HH:MM", help = "Bedtime")]
    pub sleep: String,
    #[arg(short, long, help = "Who the schedule is for (defaults to \"Person\")")]
    pub name: Option<String>,
    #[arg(long, value_enum, default_value_t = WorkoutSlotArg::Skip, help = "Where to place the workout")]
    pub workout_slot: WorkoutSlotArg,
    #[command(flatten)]
    pub workout: WorkoutArgs,
}

impl From<ScheduleArgs> for GenerateSchedule {
    fn from(val: ScheduleArgs) -> Self {
        GenerateSchedule {
            name: val.name,
            wake_time: val.wake,
            work_start: val.work_start,
            work_end: val.work_end,
            sleep_time: val.sleep,
            workout_slot: Some(val.workout_slot.to_string()),
            workout_duration: val.workout.duration,
            goal: val.workout.goal,
            level: val.workout.level,
            equipment: val.workout.equipment,
        }
    }
}

/// Workout preferences
///
/// Shared by `fitplan workout` and the workout part of `fitplan schedule`.
#[derive(ClapArgs)]
pub struct WorkoutArgs {
    #[arg(short, long, help = "Goal: lose, gain or maintain")]
    pub goal: Option<String>,
    #[arg(long, value_name = "MINUTES", help = "Workout length in minutes (default 30)")]
    pub duration: Option<u32>,
    #[arg(short, long, help = "Level: beginner, intermediate or advanced")]
    pub level: Option<String>,
    #[arg(short, long, help = "Equipment: gym, dumbbells or bodyweight")]
    pub equipment: Option<String>,
}

impl From<WorkoutArgs> for GenerateWorkout {
    fn from(val: WorkoutArgs) -> Self {
        GenerateWorkout {
            goal: val.goal,
            duration_minutes: val.duration,
            level: val.level,
            equipment: val.equipment,
        }
    }
}

/// Exercise catalog category
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Strength,
    Core,
    Cardio,
    Yoga,
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryArg::Strength => write!(f, "strength"),
            CategoryArg::Core => write!(f, "core"),
            CategoryArg::Cardio => write!(f, "cardio"),
            CategoryArg::Yoga => write!(f, "yoga"),
        }
    }
}

/// List catalog exercises
#[derive(ClapArgs, Default)]
pub struct ListExercisesArgs {
    #[arg(short, long, help = "Only exercises whose name contains this text")]
    pub search: Option<String>,
    #[arg(short, long, value_enum, help = "Only exercises in this category")]
    pub category: Option<CategoryArg>,
}

impl From<ListExercisesArgs> for ListExercises {
    fn from(val: ListExercisesArgs) -> Self {
        ListExercises {
            search: val.search,
            category: val.category.map(|c| c.to_string()),
        }
    }
}

/// Show one catalog exercise
#[derive(ClapArgs)]
pub struct ShowExerciseArgs {
    #[arg(help = "Exercise name, case-insensitive")]
    pub name: String,
}

impl From<ShowExerciseArgs> for ExerciseName {
    fn from(val: ShowExerciseArgs) -> Self {
        ExerciseName { name: val.name }
    }
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List catalog exercises
    #[command(aliases = ["l", "ls"])]
    List(ListExercisesArgs),
    /// Show details of one exercise
    #[command(alias = "s")]
    Show(ShowExerciseArgs),
}

/// Get diet advice
#[derive(ClapArgs)]
pub struct DietArgs {
    #[arg(long, value_name = "KG", help = "Body weight in kilograms")]
    pub weight: f64,
    #[arg(long, value_name = "CM", help = "Height in centimetres")]
    pub height: f64,
    #[arg(long, help = "Age in years")]
    pub age: u32,
    #[arg(short, long, help = "Goal: lose, gain or maintain")]
    pub goal: Option<String>,
}

impl From<DietArgs> for RecommendDiet {
    fn from(val: DietArgs) -> Self {
        RecommendDiet {
            weight_kg: val.weight,
            height_cm: val.height,
            age: val.age,
            goal: val.goal,
        }
    }
}
