//! Static exercise catalog.
//!
//! The catalog is reference data: it is compiled into the binary, never
//! mutated, and handed to callers as-is. Lookups preserve catalog order.

use crate::models::{ExerciseCategory, ExerciseRecord};

const fn record(
    name: &'static str,
    image_reference: &'static str,
    usage_description: &'static str,
    default_plan: &'static str,
    category: ExerciseCategory,
) -> ExerciseRecord {
    ExerciseRecord {
        name,
        image_reference,
        usage_description,
        default_plan,
        category,
    }
}

static CATALOG: &[ExerciseRecord] = &[
    record(
        "Push-Ups",
        "images/push-up.png",
        "Strengthens chest, shoulders, and triceps.",
        "3 sets × 15 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Incline Push-Ups",
        "images/incline-push-up.png",
        "Easier variation for beginners, builds upper chest.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Decline Push-Ups",
        "images/exercises.png",
        "Targets upper chest and shoulders.",
        "3 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Diamond Push-Ups",
        "images/images.jpeg",
        "Builds triceps and inner chest.",
        "3 sets × 8 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Wide Push-Ups",
        "images/workout.jpg",
        "Focuses on chest muscles.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Pull-Ups",
        "images/workout.jpg",
        "Strengthens lats, biceps, and grip.",
        "4 sets × 8 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Chin-Ups",
        "images/workout.jpg",
        "Focuses on biceps and back.",
        "4 sets × 8 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Squats",
        "images/workout.jpg",
        "Builds legs and glutes, improves core strength.",
        "4 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Jump Squats",
        "images/workout.jpg",
        "Boosts explosive power and endurance.",
        "3 sets × 15 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Lunges",
        "images/workout.jpg",
        "Strengthens legs and improves balance.",
        "3 sets × 12 reps per leg",
        ExerciseCategory::Strength,
    ),
    record(
        "Side Lunges",
        "images/workout.jpg",
        "Works inner thighs and balance.",
        "3 sets × 10 reps per side",
        ExerciseCategory::Strength,
    ),
    record(
        "Bulgarian Split Squats",
        "images/workout.jpg",
        "Targets quads and glutes.",
        "3 sets × 10 reps per leg",
        ExerciseCategory::Strength,
    ),
    record(
        "Step-Ups",
        "images/workout.jpg",
        "Improves leg strength and coordination.",
        "3 sets × 12 reps per leg",
        ExerciseCategory::Strength,
    ),
    record(
        "Glute Bridges",
        "images/workout.jpg",
        "Strengthens glutes and lower back.",
        "3 sets × 15 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Hip Thrusts",
        "images/workout.jpg",
        "Advanced glute and hamstring workout.",
        "4 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Deadlifts",
        "images/workout.jpg",
        "Full-body strength, focuses on hamstrings and back.",
        "4 sets × 8 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Romanian Deadlifts",
        "images/workout.jpg",
        "Targets hamstrings and glutes.",
        "3 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Bench Press",
        "images/workout.jpg",
        "Builds chest, shoulders, and triceps.",
        "4 sets × 8 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Incline Bench Press",
        "images/workout.jpg",
        "Emphasizes upper chest.",
        "4 sets × 8 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Dumbbell Press",
        "images/workout.jpg",
        "Improves stability and chest strength.",
        "4 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Shoulder Press",
        "images/workout.jpg",
        "Strengthens shoulders and triceps.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Arnold Press",
        "images/workout.jpg",
        "Enhances shoulder muscle activation.",
        "3 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Lateral Raises",
        "images/workout.jpg",
        "Builds side deltoids for wider shoulders.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Front Raises",
        "images/workout.jpg",
        "Strengthens front shoulders.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Bicep Curls",
        "images/workout.jpg",
        "Builds bicep strength and size.",
        "4 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Hammer Curls",
        "images/workout.jpg",
        "Targets biceps and forearms.",
        "3 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Tricep Dips",
        "images/workout.jpg",
        "Strengthens triceps and chest.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Skull Crushers",
        "images/workout.jpg",
        "Isolates and strengthens triceps.",
        "3 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Overhead Tricep Extensions",
        "images/workout.jpg",
        "Improves tricep strength.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Cable Rows",
        "images/workout.jpg",
        "Strengthens back and biceps.",
        "4 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Lat Pulldowns",
        "images/workout.jpg",
        "Builds back muscles, alternative to pull-ups.",
        "4 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Face Pulls",
        "images/workout.jpg",
        "Improves posture and rear delts.",
        "3 sets × 15 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Farmer’s Carry",
        "images/workout.jpg",
        "Strengthens grip, shoulders, and core.",
        "3 sets × 30 sec walk",
        ExerciseCategory::Strength,
    ),
    record(
        "Chest Fly",
        "images/workout.jpg",
        "Isolates chest muscles.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Dumbbell Rows",
        "images/workout.jpg",
        "Builds lats and biceps.",
        "4 sets × 10 reps",
        ExerciseCategory::Strength,
    ),
    record(
        "Good Mornings",
        "images/workout.jpg",
        "Strengthens hamstrings and lower back.",
        "3 sets × 12 reps",
        ExerciseCategory::Strength,
    ),
    // Core
    record(
        "Plank",
        "images/workout.jpg",
        "Improves core stability and posture.",
        "3 sets × 1 min",
        ExerciseCategory::Core,
    ),
    record(
        "Side Plank",
        "images/workout.jpg",
        "Targets obliques and core balance.",
        "3 sets × 30 sec each side",
        ExerciseCategory::Core,
    ),
    record(
        "Crunches",
        "images/workout.jpg",
        "Strengthens abdominal muscles.",
        "3 sets × 20 reps",
        ExerciseCategory::Core,
    ),
    record(
        "Bicycle Crunches",
        "images/workout.jpg",
        "Targets obliques and abs.",
        "3 sets × 15 reps per side",
        ExerciseCategory::Core,
    ),
    record(
        "Leg Raises",
        "images/workout.jpg",
        "Strengthens lower abs.",
        "3 sets × 15 reps",
        ExerciseCategory::Core,
    ),
    record(
        "Russian Twists",
        "images/workout.jpg",
        "Improves core rotation and obliques.",
        "3 sets × 20 reps",
        ExerciseCategory::Core,
    ),
    record(
        "Mountain Climbers",
        "images/workout.jpg",
        "Full-body cardio + core activation.",
        "3 sets × 30 sec",
        ExerciseCategory::Core,
    ),
    record(
        "Hollow Hold",
        "images/workout.jpg",
        "Engages full core for stability.",
        "3 sets × 45 sec",
        ExerciseCategory::Core,
    ),
    record(
        "Flutter Kicks",
        "images/workout.jpg",
        "Works lower abs and hip flexors.",
        "3 sets × 30 sec",
        ExerciseCategory::Core,
    ),
    record(
        "Ab Rollouts",
        "images/workout.jpg",
        "Strengthens abs and lower back.",
        "3 sets × 10 reps",
        ExerciseCategory::Core,
    ),
    // Cardio
    record(
        "Jumping Jacks",
        "images/workout.jpg",
        "Improves cardiovascular health.",
        "3 sets × 50 reps",
        ExerciseCategory::Cardio,
    ),
    record(
        "High Knees",
        "images/workout.jpg",
        "Increases heart rate and leg endurance.",
        "3 sets × 30 sec",
        ExerciseCategory::Cardio,
    ),
    record(
        "Butt Kicks",
        "images/workout.jpg",
        "Warms up hamstrings and glutes.",
        "3 sets × 30 sec",
        ExerciseCategory::Cardio,
    ),
    record(
        "Burpees",
        "images/workout.jpg",
        "Full-body cardio and strength.",
        "3 sets × 12 reps",
        ExerciseCategory::Cardio,
    ),
    record(
        "Sprints",
        "images/workout.jpg",
        "Improves speed and explosiveness.",
        "6 × 50m runs",
        ExerciseCategory::Cardio,
    ),
    record(
        "Jump Rope",
        "images/workout.jpg",
        "Cardio, coordination, and endurance.",
        "3 × 2 min",
        ExerciseCategory::Cardio,
    ),
    record(
        "Box Jumps",
        "images/workout.jpg",
        "Builds explosive leg strength.",
        "3 sets × 12 reps",
        ExerciseCategory::Cardio,
    ),
    record(
        "Lateral Bounds",
        "images/workout.jpg",
        "Improves agility and power.",
        "3 sets × 20 reps",
        ExerciseCategory::Cardio,
    ),
    record(
        "Shadow Boxing",
        "images/workout.jpg",
        "Cardio and upper body endurance.",
        "3 × 2 min",
        ExerciseCategory::Cardio,
    ),
    record(
        "Stair Running",
        "images/workout.jpg",
        "Leg endurance and cardio.",
        "5 min continuous",
        ExerciseCategory::Cardio,
    ),
    // Yoga
    record(
        "Sun Salutation",
        "images/workout.jpg",
        "Full-body flexibility and relaxation.",
        "5 rounds",
        ExerciseCategory::Yoga,
    ),
    record(
        "Downward Dog",
        "images/workout.jpg",
        "Stretches hamstrings and shoulders.",
        "3 × 30 sec",
        ExerciseCategory::Yoga,
    ),
    record(
        "Cobra Pose",
        "images/workout.jpg",
        "Strengthens spine and stretches chest.",
        "3 × 20 sec",
        ExerciseCategory::Yoga,
    ),
    record(
        "Child’s Pose",
        "images/workout.jpg",
        "Relieves back tension.",
        "3 × 1 min",
        ExerciseCategory::Yoga,
    ),
    record(
        "Warrior Pose",
        "images/workout.jpg",
        "Improves balance and leg strength.",
        "3 × 30 sec",
        ExerciseCategory::Yoga,
    ),
    record(
        "Tree Pose",
        "images/workout.jpg",
        "Enhances balance and focus.",
        "3 × 30 sec",
        ExerciseCategory::Yoga,
    ),
    record(
        "Seated Forward Bend",
        "images/workout.jpg",
        "Stretches hamstrings and spine.",
        "3 × 30 sec",
        ExerciseCategory::Yoga,
    ),
    record(
        "Cat-Cow Stretch",
        "images/workout.jpg",
        "Improves spinal mobility.",
        "3 × 10 reps",
        ExerciseCategory::Yoga,
    ),
    record(
        "Bridge Pose",
        "images/workout.jpg",
        "Strengthens glutes and back.",
        "3 × 20 sec",
        ExerciseCategory::Yoga,
    ),
    record(
        "Neck Stretch",
        "images/workout.jpg",
        "Releases neck stiffness.",
        "3 × 30 sec",
        ExerciseCategory::Yoga,
    ),
];

/// Every exercise in catalog order.
pub fn catalog() -> &'static [ExerciseRecord] {
    CATALOG
}

/// Exercises whose name contains `search` (case-insensitive) and whose
/// category matches, when either filter is given.
pub fn list_exercises(
    search: Option<&str>,
    category: Option<ExerciseCategory>,
) -> Vec<&'static ExerciseRecord> {
    let needle = search.map(fold_case).filter(|s| !s.is_empty());

    CATALOG
        .iter()
        .filter(|record| category.map_or(true, |c| record.category == c))
        .filter(|record| {
            needle
                .as_deref()
                .map_or(true, |n| fold_case(record.name).contains(n))
        })
        .collect()
}

/// Finds an exercise by exact name, ignoring case and surrounding
/// whitespace.
pub fn find_exercise(name: &str) -> Option<&'static ExerciseRecord> {
    let name = fold_case(name);
    CATALOG.iter().find(|record| fold_case(record.name) == name)
}

/// Case folding shared by every name lookup.
fn fold_case(text: &str) -> String {
    text.trim().to_lowercase()
}
