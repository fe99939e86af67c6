//! Some utility functions

use std::fmt::Debug;

use crate::{AppState, Todo};
use crate::traits::Store;

/// Format a single to-do on one line.
/// Points are omitted when `show_points` is false
pub fn format_todo(todo: &Todo, show_points: bool) -> String {
    let completion = if todo.completed() { "✓" } else { " " };
    let points = if show_points { format!(" ({} pts)", todo.points()) } else { String::new() };
    format!("{} {}{}\t{}", completion, todo.title(), points, todo.id())
}

/// A debug utility that pretty-prints the to-dos of the selected date, as the settings allow to display them
pub fn print_current_day(state: &AppState) {
    println!("DAY {}", state.date().date());
    for todo in state.visible_todos() {
        println!("    {}", format_todo(todo, state.settings().show_points()));
    }
    if state.settings().show_points() {
        println!("    = {} points, {} completed", state.day().total_points(), state.day().completed_todos());
    }
}

/// Format the whole state of a store, prefixed by its name
pub fn format_store<S>(store: &S) -> String
where
    S: Store,
    S::State: Debug,
{
    format!("{}: {:?}", S::NAME, store.state())
}

/// A debug utility that pretty-prints the whole state of every store except the to-do list
pub fn print_stores(state: &AppState) {
    println!("    {}", format_store(state.date()));
    println!("    {}", format_store(state.day()));
    println!("    {}", format_store(state.show_modal()));
    println!("    {}", format_store(state.settings()));
}

/// A debug utility that pretty-prints every to-do, whatever its date
pub fn print_todo_list(state: &AppState) {
    for todo in state.todos().todo_list() {
        println!("    {}\t{}", todo.date(), format_todo(todo, true));
    }
}
