//! This binary plays a typical day with the stores, and prints them along the way.
//!
//! Pass a file path to save the resulting state as a snapshot. Set `RUST_LOG=debug` to see every mutation.

use std::path::PathBuf;

use day_planner::{AppState, CurrentDate, NewTodo};
use day_planner::config;
use day_planner::utils::{print_current_day, print_stores, print_todo_list};

fn main() {
    env_logger::init();

    println!("{}", config::app_name());
    let snapshot_file = std::env::args().nth(1).map(PathBuf::from);

    let mut state = AppState::new();
    state.date_mut().set_current_date(CurrentDate::new(2024, 3, 10));

    // The user opens the modal, fills the form, and submits it
    state.show_modal_mut().set_show_modal(true);
    state.show_modal_mut().set_new_todo(NewTodo::new("Buy milk".to_string(), "Semi-skimmed".to_string(), 5));
    let milk = state.commit_new_todo();

    state.show_modal_mut().set_show_modal(true);
    state.show_modal_mut().set_new_todo(NewTodo::new("Water the plants".to_string(), String::new(), 2));
    state.commit_new_todo();

    println!("---- after creation -----");
    print_current_day(&state);

    state.todos_mut().change_todo_is_completed(milk);
    state.recompute_day();
    println!("---- after completing {} -----", milk);
    print_current_day(&state);

    state.settings_mut().change_show_completed(false);
    println!("---- hiding completed todos -----");
    print_current_day(&state);

    println!("---- every todo -----");
    print_todo_list(&state);

    println!("---- other stores -----");
    print_stores(&state);

    if let Some(path) = snapshot_file {
        match state.save_to_file(&path) {
            Ok(()) => println!("State saved to {:?}", path),
            Err(err) => log::error!("Unable to save the state: {}", err),
        }
    }
}
