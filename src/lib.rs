//! This crate provides the state stores of a daily to-do planner.
//!
//! Each store owns one slice of the application state:
//! * [`DateStore`] holds the date currently in focus,
//! * [`DayStore`] holds the point and completion counters of the active day,
//! * [`ShowModalStore`](home_page::ShowModalStore) holds the "new to-do" modal and its draft,
//! * [`SettingsStore`] holds the display toggles,
//! * [`TodoStore`] holds the list of to-do items.
//!
//! Stores do not know about each other. They are gathered in an [`AppState`] that is created once
//! when the application starts, and handed by reference to whatever needs to read or mutate them. \
//! `AppState` is also where cross-store operations live (e.g. listing the to-dos of the selected date).

pub mod traits;

mod date;
pub use date::{CurrentDate, DateStore};
mod day;
pub use day::{Day, DayStore};
pub mod home_page;
pub use home_page::{NewTodo, ShowModal, ShowModalStore};
mod settings;
pub use settings::{Settings, SettingsStore};
mod todo;
pub use todo::{Todo, TodoId};
mod todo_store;
pub use todo_store::TodoStore;
mod app;
pub use app::AppState;

pub mod config;
pub mod utils;
