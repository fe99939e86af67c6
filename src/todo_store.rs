//! The list of to-do items

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::date::CurrentDate;
use crate::home_page::NewTodo;
use crate::todo::{Todo, TodoId};
use crate::traits::Store;

/// Owns every [`Todo`], in creation order.
///
/// Ids come from a counter that is stored alongside the list and only ever grows, so that deleting a
/// to-do can never make two to-dos share an id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStore {
    todo_list: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todo_list: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Every to-do, in creation order
    pub fn todo_list(&self) -> &[Todo] {
        &self.todo_list
    }

    pub fn len(&self) -> usize {
        self.todo_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todo_list.is_empty()
    }

    /// Returns the to-dos of a given day, in creation order.
    ///
    /// This is computed again on every call.
    pub fn get_todos_by_date(&self, date: &CurrentDate) -> Vec<&Todo> {
        self.todo_list.iter()
            .filter(|todo| todo.is_on(date))
            .collect()
    }

    /// Returns the first to-do with this id
    pub fn get_one_todo(&self, id: TodoId) -> Option<&Todo> {
        self.todo_list.iter().find(|todo| todo.id() == id)
    }

    /// Create a to-do from a draft, and append it to the list.
    ///
    /// The new to-do is not completed, and gets a brand new id.
    /// The id counter saturates at `u64::MAX`: past this point, new to-dos share this last id.
    pub fn add_todo_list(&mut self, draft: &NewTodo, date: &CurrentDate) -> TodoId {
        let id = TodoId::from(self.next_id);
        match self.next_id.checked_add(1) {
            Some(next_id) => self.next_id = next_id,
            None => log::warn!("Todo ids are exhausted, {} will be handed out again", id),
        }

        log::debug!("Adding todo {} ({:?}) on {}", id, draft.title(), date);
        self.todo_list.push(Todo::new(id, draft, date));
        id
    }

    /// Toggle the completion status of the first to-do with this id.
    ///
    /// Nothing happens in case there is no such to-do. Returns whether one was found.
    pub fn change_todo_is_completed(&mut self, id: TodoId) -> bool {
        match self.todo_list.iter_mut().find(|todo| todo.id() == id) {
            None => {
                log::debug!("No todo {} to toggle", id);
                false
            },
            Some(todo) => {
                todo.toggle_completed();
                log::debug!("Todo {} is now {}", id, if todo.completed() { "completed" } else { "uncompleted" });
                true
            },
        }
    }

    /// Remove every to-do with this id. Returns how many were removed.
    pub fn delete_todo(&mut self, id: TodoId) -> usize {
        let len_before = self.todo_list.len();
        self.todo_list.retain(|todo| todo.id() != id);
        let removed = len_before - self.todo_list.len();
        if removed == 0 {
            log::debug!("No todo {} to delete", id);
        }
        removed
    }

    /// Make sure the id counter is past every id in the list.
    /// This matters for lists that have not been built by this store (e.g. loaded from a file).
    ///
    /// Returns an error in case no id is left for new to-dos.
    pub(crate) fn fix_next_id(&mut self) -> Result<(), Box<dyn Error>> {
        let max_id = self.todo_list.iter().map(|todo| todo.id().as_u64()).max();
        let min_next_id = match max_id {
            None => 1,
            Some(max_id) => max_id.checked_add(1)
                .ok_or_else(|| format!("Todo {} uses the last possible id", TodoId::from(max_id)))?,
        };
        if self.next_id == u64::MAX {
            return Err(format!("Id counter {} is exhausted", self.next_id).into());
        }
        if self.next_id < min_next_id {
            log::warn!("Id counter {} was behind the existing todos, moving it to {}", self.next_id, min_next_id);
            self.next_id = min_next_id;
        }
        Ok(())
    }
}

impl Store for TodoStore {
    const NAME: &'static str = "todoStore";
    type State = [Todo];

    fn state(&self) -> &[Todo] {
        &self.todo_list
    }

    /// This empties the list, and restarts ids from 1
    fn reset(&mut self) {
        *self = Self::default();
    }
}
