//! The holder of every store

use std::error::Error;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::date::{CurrentDate, DateStore};
use crate::day::{Day, DayStore};
use crate::home_page::ShowModalStore;
use crate::settings::{Settings, SettingsStore};
use crate::todo::{Todo, TodoId};
use crate::todo_store::TodoStore;
use crate::traits::Store;

/// The whole application state.
///
/// Create it once when the application starts, and pass it by reference to the parts of the app that need it.
/// Stores are independent from each other; operations that need more than one store are provided here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    date: DateStore,
    day: DayStore,
    show_modal: ShowModalStore,
    settings: SettingsStore,
    todos: TodoStore,
}

/// What is written into snapshot files.
/// The modal is not part of it: an open form does not survive a restart.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    date: CurrentDate,
    day: Day,
    settings: Settings,
    todos: TodoStore,
}

impl AppState {
    /// Create a state where every store has its default value
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self) -> &DateStore                         { &self.date           }
    pub fn date_mut(&mut self) -> &mut DateStore             { &mut self.date       }
    pub fn day(&self) -> &DayStore                           { &self.day            }
    pub fn day_mut(&mut self) -> &mut DayStore               { &mut self.day        }
    pub fn show_modal(&self) -> &ShowModalStore              { &self.show_modal     }
    pub fn show_modal_mut(&mut self) -> &mut ShowModalStore  { &mut self.show_modal }
    pub fn settings(&self) -> &SettingsStore                 { &self.settings       }
    pub fn settings_mut(&mut self) -> &mut SettingsStore     { &mut self.settings   }
    pub fn todos(&self) -> &TodoStore                        { &self.todos          }
    pub fn todos_mut(&mut self) -> &mut TodoStore            { &mut self.todos      }

    /// The to-dos of the selected date
    pub fn todos_for_current_date(&self) -> Vec<&Todo> {
        self.todos.get_todos_by_date(self.date.date())
    }

    /// The to-dos of the selected date that the settings allow to display
    pub fn visible_todos(&self) -> Vec<&Todo> {
        let show_completed = self.settings.show_completed();
        self.todos_for_current_date()
            .into_iter()
            .filter(|todo| show_completed || todo.completed() == false)
            .collect()
    }

    /// Turn the draft of the modal into an actual to-do on the selected date.
    ///
    /// The draft is then emptied and the modal is closed.
    pub fn commit_new_todo(&mut self) -> TodoId {
        let id = self.todos.add_todo_list(self.show_modal.new_todo(), self.date.date());
        self.show_modal.reset_new_todo();
        self.show_modal.set_show_modal(false);
        id
    }

    /// Compute the counters of the selected date from its completed to-dos, and store them into the [`DayStore`].
    /// This replaces the entire [`Day`].
    ///
    /// Points are not validated, so their sum saturates at `i64::MIN` / `i64::MAX`.
    pub fn recompute_day(&mut self) -> Day {
        let (points, complete_todo) = self.todos_for_current_date()
            .iter()
            .filter(|todo| todo.completed())
            .fold((0i64, 0i64), |(points, count), todo| (points.saturating_add(todo.points()), count.saturating_add(1)));

        let day = Day::new(points, complete_todo);
        self.day.set_day(day);
        day
    }

    /// Put every store back to its default state
    pub fn reset(&mut self) {
        reset_store(&mut self.date);
        reset_store(&mut self.day);
        reset_store(&mut self.show_modal);
        reset_store(&mut self.settings);
        reset_store(&mut self.todos);
    }

    /// Initialize a state from the content of a valid snapshot file.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let snapshot: Snapshot = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(std::io::BufReader::new(file))?,
        };

        let mut todos = snapshot.todos;
        todos.fix_next_id()?;

        let mut state = Self::new();
        state.date.set_current_date(snapshot.date);
        state.day.set_day(snapshot.day);
        state.settings.set_settings(snapshot.settings);
        state.todos = todos;
        log::info!("Loaded {} todos from {:?}", state.todos.len(), path);
        Ok(state)
    }

    /// Initialize a state from a snapshot file (or from [`config::DEFAULT_SNAPSHOT_FILE`](crate::config::DEFAULT_SNAPSHOT_FILE) if `path` is `None`).
    /// In case the file cannot be used, this falls back to a default state.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => crate::config::default_snapshot_file(),
        };
        match Self::from_file(&path) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("Invalid snapshot file: {}. Using a default state", err);
                Self::new()
            },
        }
    }

    /// Store the current state into a snapshot file
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let snapshot = Snapshot {
            date: *self.date.date(),
            day: *self.day.day(),
            settings: *self.settings.settings(),
            todos: self.todos.clone(),
        };

        let file = match std::fs::File::create(path) {
            Err(err) => {
                return Err(format!("Unable to save file {:?}: {}", path, err).into());
            },
            Ok(f) => f,
        };
        serde_json::to_writer_pretty(file, &snapshot)?;
        log::debug!("Saved {} todos to {:?}", self.todos.len(), path);
        Ok(())
    }
}

fn reset_store<S: Store>(store: &mut S) {
    log::debug!("Resetting {}", S::NAME);
    store.reset();
}
