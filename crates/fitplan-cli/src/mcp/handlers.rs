//! MCP tool handlers implementation

use std::sync::Arc;

use fitplan_core::{display::OperationStatus, params as core, Planner};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types derive JsonSchema behind the `schema` feature; this
// transparent wrapper adds the serde/schemars plumbing rmcp expects without
// touching the core types.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type GenerateSchedule = McpParams<core::GenerateSchedule>;
pub type GenerateWorkout = McpParams<core::GenerateWorkout>;
pub type ListExercises = McpParams<core::ListExercises>;
pub type ExerciseName = McpParams<core::ExerciseName>;
pub type RecommendDiet = McpParams<core::RecommendDiet>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
#[derive(Clone)]
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn generate_schedule(
        &self,
        Parameters(params): Parameters<GenerateSchedule>,
    ) -> McpResult {
        debug!("generate_schedule: {:?}", params);

        let saved = self
            .planner
            .lock()
            .await
            .generate_schedule(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to generate schedule", &e))?;

        text_result(format!(
            "{}\n{saved}",
            OperationStatus::schedule_saved(saved.id)
        ))
    }

    pub async fn list_schedules(&self) -> McpResult {
        debug!("list_schedules");

        let summaries = self
            .planner
            .lock()
            .await
            .list_schedules_summary()
            .map_err(|e| to_mcp_error("Failed to list schedules", &e))?;

        let title = if summaries.is_empty() {
            "No schedules generated yet".to_string()
        } else {
            format!("Schedules ({})", summaries.len())
        };
        text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_schedule(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_schedule: {:?}", params);

        let saved = self
            .planner
            .lock()
            .await
            .show_schedule(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show schedule", &e))?;

        text_result(saved.to_string())
    }

    pub async fn generate_workout(
        &self,
        Parameters(params): Parameters<GenerateWorkout>,
    ) -> McpResult {
        debug!("generate_workout: {:?}", params);

        let plan = self.planner.lock().await.generate_workout(params.as_ref());
        text_result(plan.to_string())
    }

    pub async fn list_exercises(&self, Parameters(params): Parameters<ListExercises>) -> McpResult {
        debug!("list_exercises: {:?}", params);

        let exercises = self
            .planner
            .lock()
            .await
            .list_exercises_result(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list exercises", &e))?;

        let title = if exercises.is_empty() {
            "No matching exercises".to_string()
        } else {
            format!("Exercises ({})", exercises.len())
        };
        text_result(format!("# {title}\n\n{exercises}"))
    }

    pub async fn show_exercise(&self, Parameters(params): Parameters<ExerciseName>) -> McpResult {
        debug!("show_exercise: {:?}", params);

        let record = self
            .planner
            .lock()
            .await
            .show_exercise(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show exercise", &e))?;

        text_result(record.to_string())
    }

    pub async fn recommend_diet(&self, Parameters(params): Parameters<RecommendDiet>) -> McpResult {
        debug!("recommend_diet: {:?}", params);

        let plan = self
            .planner
            .lock()
            .await
            .recommend_diet(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to recommend diet", &e))?;

        text_result(plan.to_string())
    }
}

#[cfg(test)]
mod tests {
    use fitplan_core::PlannerBuilder;
    use futures::future::join_all;
    use rmcp::model::ErrorCode;

    use super::*;

    fn handlers() -> McpHandlers {
        McpHandlers::new(Arc::new(Mutex::new(PlannerBuilder::new().build())))
    }

    fn office_day(name: &str) -> Parameters<GenerateSchedule> {
        Parameters(McpParams(core::GenerateSchedule {
            name: Some(name.to_string()),
            wake_time: "06:00".to_string(),
            work_start: "09:00".to_string(),
            work_end: "17:00".to_string(),
            sleep_time: "22:00".to_string(),
            ..Default::default()
        }))
    }

    /// First text content of a tool result.
    fn text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).expect("Failed to serialize result");
        value["content"][0]["text"]
            .as_str()
            .expect("Missing text content")
            .to_string()
    }

    #[tokio::test]
    async fn test_generate_and_show_schedule() {
        let handlers = handlers();

        let created = handlers
            .generate_schedule(office_day("Ada"))
            .await
            .expect("Failed to generate schedule");
        let output = text(&created);
        assert!(output.contains("Saved schedule with ID: 1"));
        assert!(output.contains("Morning Routine: Hydrate & get ready"));

        let shown = handlers
            .show_schedule(Parameters(McpParams(core::Id { id: 1 })))
            .await
            .expect("Failed to show schedule");
        assert!(text(&shown).contains("# 1. Schedule for Ada"));
    }

    #[tokio::test]
    async fn test_show_missing_schedule_is_invalid_params() {
        let err = handlers()
            .show_schedule(Parameters(McpParams(core::Id { id: 42 })))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_bad_clock_time_is_invalid_params() {
        let mut params = office_day("Ada");
        params.0 .0.wake_time = "25-00".to_string();

        let err = handlers().generate_schedule(params).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("wake_time"));
    }

    #[tokio::test]
    async fn test_concurrent_generation_is_not_lost() {
        let handlers = handlers();

        let calls = (0..10).map(|i| {
            let handlers = handlers.clone();
            async move { handlers.generate_schedule(office_day(&format!("p{i}"))).await }
        });
        let results = join_all(calls).await;
        assert!(results.iter().all(Result::is_ok));

        let listed = handlers.list_schedules().await.unwrap();
        let output = text(&listed);
        assert!(output.contains("# Schedules (10)"));
        for id in 1..=10 {
            assert!(output.contains(&format!("(ID: {id})")));
        }
    }

    #[tokio::test]
    async fn test_reference_tools() {
        let handlers = handlers();

        let listed = handlers
            .list_exercises(Parameters(McpParams(core::ListExercises {
                search: None,
                category: Some("core".to_string()),
            })))
            .await
            .unwrap();
        assert!(text(&listed).contains("# Exercises (10)"));

        let shown = handlers
            .show_exercise(Parameters(McpParams(core::ExerciseName {
                name: "plank".to_string(),
            })))
            .await
            .unwrap();
        assert!(text(&shown).starts_with("# Plank"));

        let diet = handlers
            .recommend_diet(Parameters(McpParams(core::RecommendDiet {
                weight_kg: 70.0,
                height_cm: 175.0,
                age: 30,
                goal: Some("gain".to_string()),
            })))
            .await
            .unwrap();
        let output = text(&diet);
        assert!(output.contains("# Muscle Gain Diet"));
        assert!(output.contains("22.86"));

        let workout = handlers
            .generate_workout(Parameters(McpParams(core::GenerateWorkout::default())))
            .await
            .unwrap();
        assert!(text(&workout).contains("## Main Set"));
    }
}
