//! Command handlers for the fitplan CLI
//!
//! [`Cli`] runs one parsed command against the planner and prints the
//! result, either as markdown through the [`TerminalRenderer`] or as pretty
//! JSON when `--json` is given.

use anyhow::{Context, Result};
use fitplan_core::{
    params::{GenerateSchedule, GenerateWorkout, ListExercises, RecommendDiet},
    OperationStatus, Planner,
};
use log::debug;
use serde::Serialize;

use crate::{args::ExerciseCommands, renderer::TerminalRenderer};

/// Runs CLI commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            planner,
            renderer,
            json,
        }
    }

    /// Prints `value` as JSON or renders `markdown`.
    fn emit<T: Serialize>(&self, value: &T, markdown: &str) -> Result<()> {
        if self.json {
            let text =
                serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{text}");
            Ok(())
        } else {
            self.renderer.render(markdown)
        }
    }

    pub fn generate_schedule(&self, params: &GenerateSchedule) -> Result<()> {
        debug!("generate_schedule: {params:?}");
        let saved = self
            .planner
            .generate_schedule(params)
            .context("Failed to generate schedule")?;

        let markdown = format!("{}\n{saved}", OperationStatus::schedule_saved(saved.id));
        self.emit(&saved, &markdown)
    }

    pub fn generate_workout(&self, params: &GenerateWorkout) -> Result<()> {
        debug!("generate_workout: {params:?}");
        let plan = self.planner.generate_workout(params);
        self.emit(&plan, &plan.to_string())
    }

    pub fn list_exercises(&self, params: &ListExercises) -> Result<()> {
        let exercises = self
            .planner
            .list_exercises_result(params)
            .context("Failed to list exercises")?;

        let title = match params.category()? {
            Some(category) if !exercises.is_empty() => {
                format!("Exercises: {category} ({})", exercises.len())
            }
            None if !exercises.is_empty() => format!("Exercises ({})", exercises.len()),
            _ => "No matching exercises".to_string(),
        };
        let markdown = format!("# {title}\n\n{exercises}");
        self.emit(&exercises.0, &markdown)
    }

    pub fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::List(args) => self.list_exercises(&args.into()),
            ExerciseCommands::Show(args) => {
                let record = self
                    .planner
                    .show_exercise(&args.into())
                    .context("Failed to show exercise")?;
                self.emit(record, &record.to_string())
            }
        }
    }

    pub fn recommend_diet(&self, params: &RecommendDiet) -> Result<()> {
        debug!("recommend_diet: {params:?}");
        let plan = self
            .planner
            .recommend_diet(params)
            .context("Failed to recommend diet")?;
        self.emit(&plan, &plan.to_string())
    }
}
