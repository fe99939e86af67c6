//! User display settings

use serde::{Deserialize, Serialize};

use crate::traits::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether the points of to-dos are displayed
    show_points: bool,
    /// Whether completed to-dos are displayed
    show_completed: bool,
}

impl Settings {
    pub fn new(show_points: bool, show_completed: bool) -> Self {
        Self { show_points, show_completed }
    }

    pub fn show_points(&self) -> bool    { self.show_points    }
    pub fn show_completed(&self) -> bool { self.show_completed }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_points: true,
            show_completed: true,
        }
    }
}


#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsStore {
    settings: Settings,
}

impl SettingsStore {
    /// Create a store where everything is displayed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings  { &self.settings }
    pub fn show_points(&self) -> bool    { self.settings.show_points    }
    pub fn show_completed(&self) -> bool { self.settings.show_completed }

    /// This only updates this flag
    pub fn change_show_points(&mut self, show_points: bool) {
        self.settings.show_points = show_points;
    }

    /// This only updates this flag
    pub fn change_show_completed(&mut self, show_completed: bool) {
        self.settings.show_completed = show_completed;
    }

    /// Replaces the entire settings (e.g. when restoring a snapshot)
    pub(crate) fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}

impl Store for SettingsStore {
    const NAME: &'static str = "settingsStore";
    type State = Settings;

    fn state(&self) -> &Settings {
        &self.settings
    }

    fn reset(&mut self) {
        self.settings = Settings::default();
    }
}
