//! The date currently in focus

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Local, NaiveDate};

use crate::traits::Store;

/// A calendar day.
///
/// `month` is 0-based (January is `0`), the way JavaScript-style date pickers count them. \
/// No validation is performed: any integer is accepted in any field. Use [`CurrentDate::to_naive_date`]
/// when an actual calendar date is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDate {
    full_year: i32,
    month: i32,
    day: i32,
}

impl CurrentDate {
    pub fn new(full_year: i32, month: i32, day: i32) -> Self {
        Self { full_year, month, day }
    }

    /// The local date of today
    pub fn today() -> Self {
        Self::from_naive_date(Local::now().date_naive())
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            full_year: date.year(),
            month: date.month0() as i32,
            day: date.day() as i32,
        }
    }

    /// Returns the matching calendar date, or `None` in case this is not a valid date
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.full_year, month.checked_add(1)?, day)
    }

    pub fn full_year(&self) -> i32 { self.full_year }
    pub fn month(&self) -> i32     { self.month     }
    pub fn day(&self) -> i32       { self.day       }
}

impl From<NaiveDate> for CurrentDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

impl Display for CurrentDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        // Displayed with a 1-based month, like humans read it. Widened, since any month value is accepted
        write!(f, "{:04}-{:02}-{:02}", self.full_year, i64::from(self.month) + 1, self.day)
    }
}


/// Holds the date currently selected by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateStore {
    date: CurrentDate,
}

impl DateStore {
    /// Create a store, set on `{0, 0, 0}`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self) -> &CurrentDate { &self.date }
    pub fn full_year(&self) -> i32     { self.date.full_year() }
    pub fn month(&self) -> i32         { self.date.month() }
    pub fn day(&self) -> i32           { self.date.day() }

    /// Select another date.
    /// This replaces the entire value, nothing is validated.
    pub fn set_current_date(&mut self, date: CurrentDate) {
        log::debug!("Selecting date {}", date);
        self.date = date;
    }
}

impl Store for DateStore {
    const NAME: &'static str = "dateStore";
    type State = CurrentDate;

    fn state(&self) -> &CurrentDate {
        &self.date
    }

    fn reset(&mut self) {
        self.date = CurrentDate::default();
    }
}
