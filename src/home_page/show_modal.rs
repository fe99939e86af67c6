//! The "new to-do" modal

use serde::{Deserialize, Serialize};

use crate::traits::Store;

/// A to-do that is being typed in the creation form, and that is not in the [`TodoStore`](crate::TodoStore) yet
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    title: String,
    description: String,
    points: i64,
}

impl NewTodo {
    pub fn new(title: String, description: String, points: i64) -> Self {
        Self { title, description, points }
    }

    pub fn title(&self) -> &str       { &self.title       }
    pub fn description(&self) -> &str { &self.description }
    pub fn points(&self) -> i64       { self.points       }
}

/// Whether the creation modal is displayed, and the draft it holds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowModal {
    show_modal: bool,
    new_todo: NewTodo,
}

impl ShowModal {
    pub fn show_modal(&self) -> bool    { self.show_modal }
    pub fn new_todo(&self) -> &NewTodo  { &self.new_todo  }
}


#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowModalStore {
    modal: ShowModal,
}

impl ShowModalStore {
    /// Create a store with a hidden modal and an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_modal(&self) -> bool    { self.modal.show_modal }
    pub fn new_todo(&self) -> &NewTodo  { &self.modal.new_todo  }

    /// Open or close the modal.
    /// This only updates this flag, the draft is kept.
    pub fn set_show_modal(&mut self, show_modal: bool) {
        self.modal.show_modal = show_modal;
    }

    /// Store the current content of the form.
    /// This replaces the entire draft.
    pub fn set_new_todo(&mut self, new_todo: NewTodo) {
        self.modal.new_todo = new_todo;
    }

    /// Empty the draft.
    /// This replaces the entire draft.
    pub fn reset_new_todo(&mut self) {
        self.modal.new_todo = NewTodo::default();
    }
}

impl Store for ShowModalStore {
    const NAME: &'static str = "showModalStore";
    type State = ShowModal;

    fn state(&self) -> &ShowModal {
        &self.modal
    }

    fn reset(&mut self) {
        self.modal = ShowModal::default();
    }
}
