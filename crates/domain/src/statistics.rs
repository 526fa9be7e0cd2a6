use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::{Category, Workout};

/// Number of days counted as recent.
pub const RECENT_DAYS: i64 = 30;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total_workouts: u32,
    /// Pounds
    pub total_weight: f64,
    pub total_sets: u32,
    pub total_reps: u32,
    /// Milliseconds
    pub total_duration: u64,
    pub recent_workouts: u32,
    /// Milliseconds
    pub average_duration: u64,
    pub favorite_category: Option<Category>,
}

impl Statistics {
    /// Aggregate the completed workouts of a history.
    ///
    /// Workouts dated within the last 30 days before `now` count as recent. The favorite
    /// category is the category with the most exercises, the first in category order on a tie.
    #[must_use]
    pub fn from_history(history: &[Workout], now: DateTime<Utc>) -> Self {
        let mut statistics = Statistics::default();
        let mut categories: BTreeMap<Category, u32> = BTreeMap::new();
        let recent = now - Duration::days(RECENT_DAYS);

        for workout in history.iter().filter(|w| w.completed) {
            statistics.total_workouts += 1;
            if let Some(summary) = &workout.summary {
                statistics.total_weight += summary.total_weight;
                statistics.total_sets += summary.total_sets;
                statistics.total_reps += summary.total_reps;
            }
            statistics.total_duration += workout.duration.unwrap_or_default();
            if workout.date >= recent {
                statistics.recent_workouts += 1;
            }
            for exercise in &workout.exercises {
                *categories.entry(exercise.exercise.category).or_default() += 1;
            }
        }

        if statistics.total_workouts > 0 {
            statistics.average_duration =
                statistics.total_duration / u64::from(statistics.total_workouts);
        }
        statistics.favorite_category = categories
            .into_iter()
            .fold(None, |favorite: Option<(Category, u32)>, (category, count)| {
                match favorite {
                    Some((_, max)) if max >= count => favorite,
                    _ => Some((category, count)),
                }
            })
            .map(|(category, _)| category);

        statistics
    }
}

/// Format milliseconds as "Xh Ym", or as "Ym" below one hour.
#[must_use]
pub fn format_duration(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
