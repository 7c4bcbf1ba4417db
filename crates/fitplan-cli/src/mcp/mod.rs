//! MCP server implementation for fitplan
//!
//! Exposes schedule generation, the schedule history, workouts, the
//! exercise catalog and diet advice as Model Context Protocol tools over
//! stdio.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use fitplan_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    ExerciseName, GenerateSchedule, GenerateWorkout, Id, ListExercises, McpHandlers, McpResult,
    RecommendDiet,
};

/// MCP server for fitplan
#[derive(Clone)]
pub struct FitplanMcpServer {
    handlers: McpHandlers,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FitplanMcpServer {
    /// Create a new fitplan MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            handlers: McpHandlers::new(Arc::new(Mutex::new(planner))),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "generate_schedule",
        description = "Generate a time-blocked day from wake_time, work_start, work_end and sleep_time (all \"HH:MM\", 24-hour). Optional: name, workout_slot (\"morning\" adds a workout right after the 20-minute morning routine), workout_duration in minutes (default 30), goal (lose/gain/maintain), level (beginner/intermediate/advanced) and equipment (gym/dumbbells/bodyweight). Unknown preference values fall back to defaults. The schedule is saved to the history and its ID returned."
    )]
    async fn generate_schedule(&self, params: Parameters<GenerateSchedule>) -> McpResult {
        self.handlers.generate_schedule(params).await
    }

    #[tool(
        name = "list_schedules",
        description = "List every schedule generated since the server started, oldest first, with IDs, names and workout placement."
    )]
    async fn list_schedules(&self) -> McpResult {
        self.handlers.list_schedules().await
    }

    #[tool(
        name = "show_schedule",
        description = "Show all blocks of a saved schedule, plus the workout plan when one was placed. Use the ID returned by generate_schedule or list_schedules."
    )]
    async fn show_schedule(&self, params: Parameters<Id>) -> McpResult {
        self.handlers.show_schedule(params).await
    }

    #[tool(
        name = "generate_workout",
        description = "Build a stand-alone workout with warm-up, main set and cool-down. Optional: goal (lose/gain/maintain), duration_minutes (default 30), level (beginner/intermediate/advanced), equipment (gym/dumbbells/bodyweight). Not saved to the history."
    )]
    async fn generate_workout(&self, params: Parameters<GenerateWorkout>) -> McpResult {
        self.handlers.generate_workout(params).await
    }

    #[tool(
        name = "list_exercises",
        description = "List exercises from the catalog. Optional search (case-insensitive name substring) and category (strength, core, cardio or yoga)."
    )]
    async fn list_exercises(&self, params: Parameters<ListExercises>) -> McpResult {
        self.handlers.list_exercises(params).await
    }

    #[tool(
        name = "show_exercise",
        description = "Show one catalog exercise by exact name (case-insensitive): category, default sets and reps, image reference and what it is good for."
    )]
    async fn show_exercise(&self, params: Parameters<ExerciseName>) -> McpResult {
        self.handlers.show_exercise(params).await
    }

    #[tool(
        name = "recommend_diet",
        description = "Compute BMI from weight_kg and height_cm and return diet advice for the goal (lose/gain/maintain). Also requires age. Weight and height must be positive."
    )]
    async fn recommend_diet(&self, params: Parameters<RecommendDiet>) -> McpResult {
        self.handlers.recommend_diet(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FitplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitplan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"fitplan builds daily schedules, workouts and diet advice.

## Core Concepts
- **Schedule**: ordered time blocks (Morning Routine, optional Workout, Work, Evening Routine, Sleep) computed from four "HH:MM" anchor times
- **Workout**: warm-up, main set and cool-down chosen by goal, level and equipment
- **History**: every generated schedule gets an ID, starting at 1; history lasts for the life of the server

## Workflow Examples

### Planning a Day
1. Call `generate_schedule` with wake, work and sleep times; set workout_slot="morning" to include a workout
2. Use `list_schedules` and `show_schedule` to revisit earlier results

### Exploring Exercises
1. `list_exercises` with a category or search term
2. `show_exercise` for details of one entry

## Tool Categories
- **Schedules**: generate_schedule, list_schedules, show_schedule
- **Training**: generate_workout, list_exercises, show_exercise
- **Nutrition**: recommend_diet"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FitplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting fitplan MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
