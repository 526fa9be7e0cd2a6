use crate::{Category, Equipment, Exercise, ExerciseID, MuscleGroup, Name};

struct CatalogEntry {
    name: &'static str,
    category: Category,
    equipment: &'static [Equipment],
    muscle_groups: &'static [MuscleGroup],
    instructions: Option<&'static str>,
}

/// All catalog exercises, ordered as listed.
///
/// Catalog IDs are derived from the entry position and therefore stable across releases as long
/// as entries are only appended.
#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

#[must_use]
pub fn exercise(id: ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

static EXERCISES: std::sync::LazyLock<Vec<Exercise>> = std::sync::LazyLock::new(|| {
    CATALOG
        .iter()
        .zip(1u128..)
        .filter_map(|(entry, id)| {
            Some(Exercise {
                id: id.into(),
                name: Name::new(entry.name).ok()?,
                category: entry.category,
                equipment: entry.equipment.to_vec(),
                muscle_groups: entry.muscle_groups.to_vec(),
                instructions: entry.instructions.map(str::to_string),
            })
        })
        .collect()
});

const CATALOG: [CatalogEntry; 20] = [
    CatalogEntry {
        name: "Bench Press",
        category: Category::Chest,
        equipment: &[Equipment::Barbell],
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
        ],
        instructions: Some("Lie on bench, lower bar to chest, press up explosively"),
    },
    CatalogEntry {
        name: "Incline Bench Press",
        category: Category::Chest,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
        ],
        instructions: None,
    },
    CatalogEntry {
        name: "Dumbbell Flyes",
        category: Category::Chest,
        equipment: &[Equipment::Dumbbell],
        muscle_groups: &[MuscleGroup::Chest],
        instructions: None,
    },
    CatalogEntry {
        name: "Push-ups",
        category: Category::Chest,
        equipment: &[Equipment::Bodyweight],
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
        ],
        instructions: None,
    },
    CatalogEntry {
        name: "Deadlift",
        category: Category::Back,
        equipment: &[Equipment::Barbell],
        muscle_groups: &[
            MuscleGroup::Back,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
        ],
        instructions: Some("Hip hinge movement, keep bar close to body"),
    },
    CatalogEntry {
        name: "Pull-ups",
        category: Category::Back,
        equipment: &[Equipment::Bodyweight],
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        instructions: None,
    },
    CatalogEntry {
        name: "Barbell Rows",
        category: Category::Back,
        equipment: &[Equipment::Barbell],
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        instructions: None,
    },
    CatalogEntry {
        name: "Lat Pulldown",
        category: Category::Back,
        equipment: &[Equipment::Machine, Equipment::Cable],
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        instructions: None,
    },
    CatalogEntry {
        name: "Squat",
        category: Category::Legs,
        equipment: &[Equipment::Barbell],
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Glutes,
            MuscleGroup::Hamstrings,
        ],
        instructions: Some("Descend by bending at hips and knees, keep chest up"),
    },
    CatalogEntry {
        name: "Leg Press",
        category: Category::Legs,
        equipment: &[Equipment::Machine],
        muscle_groups: &[MuscleGroup::Quadriceps, MuscleGroup::Glutes],
        instructions: None,
    },
    CatalogEntry {
        name: "Romanian Deadlift",
        category: Category::Legs,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        instructions: None,
    },
    CatalogEntry {
        name: "Walking Lunges",
        category: Category::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbell],
        muscle_groups: &[MuscleGroup::Quadriceps, MuscleGroup::Glutes],
        instructions: None,
    },
    CatalogEntry {
        name: "Overhead Press",
        category: Category::Shoulders,
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        instructions: None,
    },
    CatalogEntry {
        name: "Lateral Raises",
        category: Category::Shoulders,
        equipment: &[Equipment::Dumbbell],
        muscle_groups: &[MuscleGroup::Shoulders],
        instructions: None,
    },
    CatalogEntry {
        name: "Bicep Curls",
        category: Category::Arms,
        equipment: &[Equipment::Dumbbell, Equipment::Barbell],
        muscle_groups: &[MuscleGroup::Biceps],
        instructions: None,
    },
    CatalogEntry {
        name: "Tricep Dips",
        category: Category::Arms,
        equipment: &[Equipment::Bodyweight],
        muscle_groups: &[MuscleGroup::Triceps],
        instructions: None,
    },
    CatalogEntry {
        name: "Plank",
        category: Category::Core,
        equipment: &[Equipment::Bodyweight],
        muscle_groups: &[MuscleGroup::Core],
        instructions: Some("Hold a straight line from head to heels"),
    },
    CatalogEntry {
        name: "Cable Crunch",
        category: Category::Core,
        equipment: &[Equipment::Cable],
        muscle_groups: &[MuscleGroup::Core],
        instructions: None,
    },
    CatalogEntry {
        name: "Running",
        category: Category::Cardio,
        equipment: &[Equipment::Bodyweight],
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
        ],
        instructions: None,
    },
    CatalogEntry {
        name: "Rowing",
        category: Category::Cardio,
        equipment: &[Equipment::Machine],
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Quadriceps],
        instructions: None,
    },
];
