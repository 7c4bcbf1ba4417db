//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, kept apart from the model definitions.
//!
//! Everything renders as markdown so the CLI can hand it to the terminal
//! renderer and the MCP server can return it verbatim.

use std::fmt;

use super::datetime::{ClockRange, LocalDateTime};
use crate::models::{
    DietPlan, Equipment, ExerciseCategory, ExerciseRecord, FitnessGoal, GeneratedSchedule, Level,
    SavedSchedule, ScheduleBlock, WorkoutPlan, WorkoutSlot, WorkoutStep,
};

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WorkoutSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** {}", ClockRange(self.start, self.end), self.title)?;
        if !self.note.is_empty() {
            write!(f, ": {}", self.note)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WorkoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.name, self.plan)?;
        if let Some(minutes) = self.estimated_minutes {
            write!(f, " (~{minutes} min)")?;
        }
        writeln!(f)
    }
}

impl WorkoutPlan {
    /// Writes the three phases with headings at `level`.
    fn fmt_sections(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let heading = "#".repeat(level);
        let phases = [
            ("Warm-up", &self.warmup),
            ("Main Set", &self.main),
            ("Cool-down", &self.cooldown),
        ];

        for (title, steps) in phases {
            writeln!(f, "{heading} {title}")?;
            writeln!(f)?;
            for step in steps {
                write!(f, "{step}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "_{}_", self.note)
    }
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Workout")?;
        writeln!(f)?;
        self.fmt_sections(f, 2)
    }
}

impl GeneratedSchedule {
    fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.schedule {
            write!(f, "{block}")?;
        }

        if let Some(workout) = &self.workout {
            writeln!(f)?;
            writeln!(f, "## Workout")?;
            writeln!(f)?;
            workout.fmt_sections(f, 3)?;
        }

        Ok(())
    }
}

impl fmt::Display for GeneratedSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schedule for {}", self.name)?;
        writeln!(f)?;
        self.fmt_body(f)
    }
}

impl fmt::Display for SavedSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. Schedule for {}", self.id, self.schedule.name)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;
        self.schedule.fmt_body(f)
    }
}

impl fmt::Display for ExerciseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Category**: {}", self.category)?;
        writeln!(f, "- **Default plan**: {}", self.default_plan)?;
        writeln!(f, "- **Image**: {}", self.image_reference)?;
        writeln!(f)?;
        writeln!(f, "{}", self.usage_description)
    }
}

impl fmt::Display for DietPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- **BMI**: {:.2}", self.bmi)?;
        writeln!(f, "- **Age**: {}", self.age)?;
        writeln!(f, "- **Goal**: {}", self.goal)?;
        writeln!(f)?;
        for tip in &self.recommendations {
            writeln!(f, "- {tip}")?;
        }
        Ok(())
    }
}
