//! Tests for the planner module.

use std::sync::Arc;

use super::*;
use crate::{
    error::FitplanError,
    history::{HistoryStore, InMemoryHistory},
    models::{ExerciseCategory, FitnessGoal},
    params::{ExerciseName, GenerateSchedule, GenerateWorkout, Id, ListExercises, RecommendDiet},
};

/// Helper function to create a test planner
fn create_test_planner() -> Planner {
    PlannerBuilder::new().build()
}

fn office_day(name: &str) -> GenerateSchedule {
    GenerateSchedule {
        name: Some(name.to_string()),
        wake_time: "06:00".to_string(),
        work_start: "09:00".to_string(),
        work_end: "17:00".to_string(),
        sleep_time: "22:00".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_generate_schedule_without_workout() {
    let planner = create_test_planner();

    let saved = planner
        .generate_schedule(&office_day("Ada"))
        .expect("Failed to generate schedule");

    assert_eq!(saved.id, 1);
    assert_eq!(saved.schedule.name, "Ada");
    assert!(saved.schedule.workout.is_none());

    let titles: Vec<_> = saved
        .schedule
        .schedule
        .iter()
        .map(|block| block.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Morning Routine", "Work", "Evening Routine", "Sleep"]);
}

#[test]
fn test_generate_schedule_with_morning_workout() {
    let planner = create_test_planner();
    let params = GenerateSchedule {
        workout_slot: Some("Morning".to_string()),
        workout_duration: Some(40),
        goal: Some("lose".to_string()),
        level: Some("beginner".to_string()),
        equipment: Some("gym".to_string()),
        ..office_day("Sam")
    };

    let saved = planner
        .generate_schedule(&params)
        .expect("Failed to generate schedule");

    let workout_block = saved.schedule.block("Workout").expect("Missing workout block");
    assert_eq!(workout_block.start.to_string(), "6:20 AM");
    assert_eq!(workout_block.end.to_string(), "7:00 AM");
    assert_eq!(workout_block.note, "lose/beginner/gym");

    let workout = saved.schedule.workout.expect("Missing workout plan");
    assert_eq!(workout.main.len(), 4);
    assert!(workout.note.starts_with("Circuit style"));
}

#[test]
fn test_generate_schedule_defaults_name_and_duration() {
    let planner = create_test_planner();
    let params = GenerateSchedule {
        name: None,
        workout_slot: Some("morning".to_string()),
        ..office_day("ignored")
    };

    let saved = planner.generate_schedule(&params).unwrap();
    assert_eq!(saved.schedule.name, "Person");
    assert_eq!(
        saved.schedule.block("Workout").unwrap().duration_minutes(),
        30
    );
}

#[test]
fn test_generate_schedule_rejects_bad_time_without_saving() {
    let planner = create_test_planner();
    let params = GenerateSchedule {
        wake_time: "six".to_string(),
        ..office_day("Ada")
    };

    let err = planner.generate_schedule(&params).unwrap_err();
    assert!(matches!(err, FitplanError::ClockParse { .. }));
    assert!(planner.list_schedules().unwrap().is_empty());
}

#[test]
fn test_generate_schedule_rejects_inverted_work_hours() {
    let planner = create_test_planner();
    let params = GenerateSchedule {
        work_start: "18:00".to_string(),
        ..office_day("Ada")
    };

    let err = planner.generate_schedule(&params).unwrap_err();
    assert!(err.is_input_error());
    assert!(planner.list_schedules().unwrap().is_empty());
}

#[test]
fn test_history_round_trip() {
    let planner = create_test_planner();
    planner.generate_schedule(&office_day("Ada")).unwrap();
    planner.generate_schedule(&office_day("Sam")).unwrap();

    let summaries = planner.list_schedules_summary().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries.0[0].schedule.name, "Ada");

    let second = planner.show_schedule(&Id { id: 2 }).unwrap();
    assert_eq!(second.schedule.name, "Sam");

    match planner.show_schedule(&Id { id: 3 }).unwrap_err() {
        FitplanError::ScheduleNotFound { id } => assert_eq!(id, 3),
        other => panic!("Expected ScheduleNotFound error, got {other:?}"),
    }
    assert!(planner.get_schedule(&Id { id: 3 }).unwrap().is_none());
}

#[test]
fn test_injected_history_is_shared() {
    let history = Arc::new(InMemoryHistory::new());
    let first = PlannerBuilder::new().with_history(history.clone()).build();
    let second = PlannerBuilder::new().with_history(history.clone()).build();

    first.generate_schedule(&office_day("Ada")).unwrap();
    let saved = second.generate_schedule(&office_day("Sam")).unwrap();

    assert_eq!(saved.id, 2);
    assert_eq!(history.list().unwrap().len(), 2);
}

#[test]
fn test_generate_workout_is_not_recorded() {
    let planner = create_test_planner();
    let plan = planner.generate_workout(&GenerateWorkout {
        goal: Some("gain".to_string()),
        duration_minutes: Some(60),
        level: Some("advanced".to_string()),
        equipment: Some("dumbbells".to_string()),
    });

    assert_eq!(plan.main.len(), 3);
    assert!(plan.main.iter().all(|step| step.estimated_minutes == Some(14)));
    assert!(planner.list_schedules().unwrap().is_empty());
}

#[test]
fn test_list_exercises_filters() {
    let planner = create_test_planner();

    let all = planner.list_exercises(&ListExercises::default()).unwrap();
    assert_eq!(all.len(), 66);

    let cardio = planner
        .list_exercises_result(&ListExercises {
            search: None,
            category: Some("cardio".to_string()),
        })
        .unwrap();
    assert_eq!(cardio.len(), 10);
    assert!(cardio.0.iter().all(|e| e.category == ExerciseCategory::Cardio));

    let err = planner
        .list_exercises(&ListExercises {
            search: None,
            category: Some("zumba".to_string()),
        })
        .unwrap_err();
    assert!(matches!(err, FitplanError::InvalidInput { .. }));
}

#[test]
fn test_show_exercise() {
    let planner = create_test_planner();

    let record = planner
        .show_exercise(&ExerciseName {
            name: "  push-ups ".to_string(),
        })
        .unwrap();
    assert_eq!(record.name, "Push-Ups");

    match planner
        .show_exercise(&ExerciseName {
            name: "Moonwalk".to_string(),
        })
        .unwrap_err()
    {
        FitplanError::ExerciseNotFound { name } => assert_eq!(name, "Moonwalk"),
        other => panic!("Expected ExerciseNotFound error, got {other:?}"),
    }
}

#[test]
fn test_recommend_diet() {
    let planner = create_test_planner();
    let plan = planner
        .recommend_diet(&RecommendDiet {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            goal: Some("LOSE".to_string()),
        })
        .unwrap();

    assert_eq!(plan.bmi, 22.86);
    assert_eq!(plan.goal, FitnessGoal::Lose);
    assert_eq!(plan.title, "Weight Loss Diet");
}
