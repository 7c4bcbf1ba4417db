mod common;

use std::{collections::HashSet, thread};

use common::{create_test_planner, office_day};
use fitplan_core::{
    params::{ExerciseName, GenerateSchedule, Id, ListExercises, RecommendDiet},
    FitplanError, SavedSchedule,
};

#[test]
fn test_complete_day_workflow() {
    let planner = create_test_planner();

    let saved = planner
        .generate_schedule(&GenerateSchedule {
            workout_slot: Some("morning".to_string()),
            workout_duration: Some(45),
            goal: Some("maintain".to_string()),
            level: Some("advanced".to_string()),
            equipment: Some("bodyweight".to_string()),
            ..office_day("Ada")
        })
        .expect("Failed to generate schedule");

    let labels: Vec<_> = saved
        .schedule
        .schedule
        .iter()
        .map(|block| {
            format!(
                "{} {}-{}",
                block.title,
                block.start.label(),
                block.end.label()
            )
        })
        .collect();
    assert_eq!(
        labels,
        vec![
            "Morning Routine 6:00 AM-6:20 AM",
            "Workout 6:20 AM-7:05 AM",
            "Work 9:00 AM-5:00 PM",
            "Evening Routine 5:00 PM-6:00 PM",
            "Sleep 10:00 PM-6:00 AM",
        ]
    );

    // Maintenance: two strength moves plus one interval, 29 minutes split three ways.
    let workout = saved.schedule.workout.as_ref().expect("Missing workout");
    assert_eq!(workout.main.len(), 3);
    assert_eq!(workout.main_minutes(), 27);
    assert_eq!(workout.note, "Balanced strength + cardio.");

    let shown = planner
        .show_schedule(&Id { id: saved.id })
        .expect("Failed to show schedule");
    assert_eq!(shown, saved);

    let markdown = shown.to_string();
    assert!(markdown.contains("# 1. Schedule for Ada"));
    assert!(markdown.contains("**6:20 AM – 7:05 AM** Workout: maintain/advanced/bodyweight"));
}

#[test]
fn test_saved_schedule_json_shape() {
    let planner = create_test_planner();
    let saved = planner.generate_schedule(&office_day("Sam")).unwrap();

    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Sam");
    assert!(json["created_at"].is_string());
    assert!(json.get("workout").is_none());

    let blocks = json["schedule"].as_array().unwrap();
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0]["start"], "6:00 AM");
    assert_eq!(blocks[0]["end"], "6:20 AM");
    assert_eq!(blocks[3]["start"], "10:00 PM");
    assert_eq!(blocks[3]["end"], "6:00 AM");

    let back: SavedSchedule = serde_json::from_value(json).unwrap();
    assert_eq!(back, saved);
}

#[test]
fn test_concurrent_generation_keeps_every_schedule() {
    let planner = create_test_planner();

    thread::scope(|scope| {
        for worker in 0..4 {
            let planner = planner.clone();
            scope.spawn(move || {
                for i in 0..10 {
                    planner
                        .generate_schedule(&office_day(&format!("worker-{worker}-{i}")))
                        .expect("Failed to generate schedule");
                }
            });
        }
    });

    let schedules = planner.list_schedules().unwrap();
    assert_eq!(schedules.len(), 40);
    let ids: HashSet<_> = schedules.iter().map(|saved| saved.id).collect();
    assert_eq!(ids.len(), 40);
    assert_eq!(ids.iter().max(), Some(&40));
}

#[test]
fn test_reference_lookups() {
    let planner = create_test_planner();

    let squats = planner
        .list_exercises(&ListExercises {
            search: Some("squat".to_string()),
            category: None,
        })
        .unwrap();
    assert!(!squats.is_empty());
    assert!(squats
        .iter()
        .all(|e| e.name.to_lowercase().contains("squat")));

    let first = squats[0];
    let shown = planner
        .show_exercise(&ExerciseName {
            name: first.name.to_uppercase(),
        })
        .unwrap();
    assert_eq!(shown, first);

    let diet = planner
        .recommend_diet(&RecommendDiet {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            goal: None,
        })
        .unwrap();
    assert_eq!(diet.bmi, 22.86);
    assert_eq!(diet.title, "Maintenance Diet");

    let err = planner
        .recommend_diet(&RecommendDiet {
            weight_kg: 70.0,
            height_cm: -1.0,
            age: 30,
            goal: None,
        })
        .unwrap_err();
    assert!(matches!(err, FitplanError::InvalidInput { .. }));
}
