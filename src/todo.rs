//! To-do items

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::CurrentDate;
use crate::home_page::NewTodo;

/// The identifier of a [`Todo`].
///
/// Ids are handed out by a [`TodoStore`](crate::TodoStore), starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "#{}", self.0)
    }
}


/// A to-do item, attached to a calendar day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: String,
    points: i64,
    completed: bool,

    year: i32,
    /// 0-based, like [`CurrentDate::month`]
    month: i32,
    day: i32,
}

impl Todo {
    /// Create a not-completed to-do from a draft
    pub fn new(id: TodoId, draft: &NewTodo, date: &CurrentDate) -> Self {
        Self {
            id,
            title: draft.title().to_string(),
            description: draft.description().to_string(),
            points: draft.points(),
            completed: false,
            year: date.full_year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn id(&self) -> TodoId          { self.id          }
    pub fn title(&self) -> &str         { &self.title       }
    pub fn description(&self) -> &str   { &self.description }
    pub fn points(&self) -> i64         { self.points       }
    pub fn completed(&self) -> bool     { self.completed    }
    pub fn year(&self) -> i32           { self.year         }
    pub fn month(&self) -> i32          { self.month        }
    pub fn day(&self) -> i32            { self.day          }

    /// The day this to-do belongs to
    pub fn date(&self) -> CurrentDate {
        CurrentDate::new(self.year, self.month, self.day)
    }

    /// Whether this to-do belongs to exactly this day
    pub fn is_on(&self, date: &CurrentDate) -> bool {
           self.year == date.full_year()
        && self.month == date.month()
        && self.day == date.day()
    }

    /// Flip the completion status
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
