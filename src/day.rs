//! Counters of the active day

use serde::{Deserialize, Serialize};

use crate::traits::Store;

/// Aggregate counters for a day.
///
/// These are not derived from the to-do list by this crate's stores: callers compute them and write them
/// (see [`AppState::recompute_day`](crate::AppState::recompute_day)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    points: i64,
    complete_todo: i64,
}

impl Day {
    pub fn new(points: i64, complete_todo: i64) -> Self {
        Self { points, complete_todo }
    }

    pub fn points(&self) -> i64        { self.points }
    pub fn complete_todo(&self) -> i64 { self.complete_todo }
}


#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayStore {
    day: Day,
}

impl DayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self) -> &Day             { &self.day }
    pub fn total_points(&self) -> i64     { self.day.points }
    pub fn completed_todos(&self) -> i64  { self.day.complete_todo }

    /// Set the points earned.
    /// This only updates this field.
    pub fn change_points(&mut self, points: i64) {
        self.day.points = points;
    }

    /// Set the count of completed to-dos.
    /// This only updates this field.
    pub fn change_complete_todo(&mut self, complete_todo: i64) {
        self.day.complete_todo = complete_todo;
    }

    /// Set both counters at once.
    /// This replaces the entire value.
    pub fn set_day(&mut self, day: Day) {
        log::debug!("Day counters are now {} points, {} completed", day.points, day.complete_todo);
        self.day = day;
    }
}

impl Store for DayStore {
    const NAME: &'static str = "dayStore";
    type State = Day;

    fn state(&self) -> &Day {
        &self.day
    }

    fn reset(&mut self) {
        self.day = Day::default();
    }
}
