use std::{collections::HashSet, slice::Iter};

use crate::{Name, id::uuid_id};

uuid_id!(ExerciseID);

/// Exercise as embedded into workouts and templates.
///
/// Workouts keep their own copy, so later catalog changes do not alter history.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Category,
    pub equipment: Vec<Equipment>,
    pub muscle_groups: Vec<MuscleGroup>,
    pub instructions: Option<String>,
}

impl Exercise {
    #[must_use]
    pub fn is_cardio(&self) -> bool {
        self.category == Category::Cardio
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Chest,
    Back,
    Shoulders,
    Legs,
    Arms,
    Core,
    Cardio,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 7] = [
            Category::Chest,
            Category::Back,
            Category::Shoulders,
            Category::Legs,
            Category::Arms,
            Category::Core,
            Category::Cardio,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Shoulders => "Shoulders",
            Category::Legs => "Legs",
            Category::Arms => "Arms",
            Category::Core => "Core",
            Category::Cardio => "Cardio",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Bodyweight,
    Machine,
    Cable,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 5] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Bodyweight,
            Equipment::Machine,
            Equipment::Cable,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleGroup {
    Chest,
    Triceps,
    Shoulders,
    Back,
    Biceps,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUP: [MuscleGroup; 10] = [
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUP.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Quadriceps => "Quadriceps",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Core => "Core",
        }
    }
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub categories: HashSet<Category>,
    pub equipment: HashSet<Equipment>,
    pub muscle_groups: HashSet<MuscleGroup>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        let name = self.name.trim().to_lowercase();
        exercises
            .filter(|e| {
                e.name.as_ref().to_lowercase().contains(&name)
                    && (self.categories.is_empty() || self.categories.contains(&e.category))
                    && (self.equipment.is_empty()
                        || e.equipment.iter().any(|eq| self.equipment.contains(eq)))
                    && (self.muscle_groups.is_empty()
                        || self
                            .muscle_groups
                            .iter()
                            .all(|m| e.muscle_groups.contains(m)))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.categories.is_empty()
            && self.equipment.is_empty()
            && self.muscle_groups.is_empty()
    }

    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(name: &str, category: Category, equipment: &[Equipment]) -> Exercise {
        Exercise {
            id: ExerciseID::new(),
            name: Name::new(name).unwrap(),
            category,
            equipment: equipment.to_vec(),
            muscle_groups: vec![MuscleGroup::Chest, MuscleGroup::Triceps],
            instructions: None,
        }
    }

    #[rstest]
    #[case("", &[], &[], vec!["Bench Press", "Push-ups", "Rowing"])]
    #[case("  PRESS ", &[], &[], vec!["Bench Press"])]
    #[case("", &[Category::Cardio], &[], vec!["Rowing"])]
    #[case("", &[], &[Equipment::Bodyweight], vec!["Push-ups"])]
    #[case("press", &[Category::Cardio], &[], vec![])]
    fn test_exercise_filter_exercises(
        #[case] name: &str,
        #[case] categories: &[Category],
        #[case] equipment: &[Equipment],
        #[case] expected: Vec<&str>,
    ) {
        let exercises = [
            exercise("Bench Press", Category::Chest, &[Equipment::Barbell]),
            exercise("Push-ups", Category::Chest, &[Equipment::Bodyweight]),
            exercise("Rowing", Category::Cardio, &[Equipment::Machine]),
        ];
        let filter = ExerciseFilter {
            name: name.to_string(),
            categories: categories.iter().copied().collect(),
            equipment: equipment.iter().copied().collect(),
            ..ExerciseFilter::default()
        };
        assert_eq!(
            filter
                .exercises(exercises.iter())
                .iter()
                .map(|e| e.name.to_string())
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_exercise_filter_toggle_category() {
        let mut filter = ExerciseFilter::default();
        assert!(filter.is_empty());
        filter.toggle_category(Category::Legs);
        assert!(filter.categories.contains(&Category::Legs));
        filter.toggle_category(Category::Legs);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_is_cardio() {
        assert!(exercise("Rowing", Category::Cardio, &[]).is_cardio());
        assert!(!exercise("Squat", Category::Legs, &[]).is_cardio());
    }

    #[test]
    fn test_property_names_unique() {
        let names = Category::iter()
            .map(|c| c.name())
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), Category::iter().len());
    }
}
