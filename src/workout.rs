use crate::DayInterval;
use crate::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a set was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    #[display(fmt = "warmup")]
    Warmup,
    #[display(fmt = "working")]
    Working,
    #[display(fmt = "drop")]
    Drop,
    #[display(fmt = "failure")]
    Failure,
}

/// One logged set of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub id: String,
    pub set_type: SetType,
    pub weight_kg: f32,
    pub reps: u32,
}

/// An exercise performed during a workout, with its logged sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exercise {
    /// Number of logged sets
    pub fn total_sets(&self) -> usize {
        self.sets.len()
    }

    /// Total volume lifted across all sets (weight x reps, warmups included)
    pub fn volume_kg(&self) -> f64 {
        self.sets
            .iter()
            .map(|set| f64::from(set.weight_kg) * f64::from(set.reps))
            .sum()
    }
}

/// A workout session record. `date` is the instant the session is filed
/// under; day-bucket lookups compare it against a [`DayInterval`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub duration_min: u32,
    pub calories: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The workout filed on a given day, if any.
///
/// At most one workout per day is the domain's expectation, but nothing
/// enforces it in storage. When several records land in the same bucket the
/// most recently updated one wins, with the later session instant as the
/// tie-breaker.
pub fn workout_on<'a>(workouts: &'a [Workout], day: &DayInterval) -> Option<&'a Workout> {
    workouts
        .iter()
        .filter(|w| day.contains(w.date))
        .max_by_key(|w| (w.updated_at, w.date))
}

/// Every workout filed on a given day, in chronological order.
pub fn workouts_in<'a>(workouts: &'a [Workout], day: &DayInterval) -> Vec<&'a Workout> {
    let mut matches: Vec<_> = workouts.iter().filter(|w| day.contains(w.date)).collect();
    matches.sort_by_key(|w| w.date);
    matches
}
