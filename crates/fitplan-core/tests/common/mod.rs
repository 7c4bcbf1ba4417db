use fitplan_core::{params::GenerateSchedule, Planner, PlannerBuilder};

/// Helper function to create a test planner
pub fn create_test_planner() -> Planner {
    PlannerBuilder::new().build()
}

/// A 06:00 / 09:00-17:00 / 22:00 request for `name`.
pub fn office_day(name: &str) -> GenerateSchedule {
    GenerateSchedule {
        name: Some(name.to_string()),
        wake_time: "06:00".to_string(),
        work_start: "09:00".to_string(),
        work_end: "17:00".to_string(),
        sleep_time: "22:00".to_string(),
        ..Default::default()
    }
}
