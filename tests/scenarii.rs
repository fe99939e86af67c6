//! Sequences of user actions, and the state the stores should end up in

use day_planner::{AppState, CurrentDate, NewTodo, TodoId};

pub enum ChangeToApply {
    SelectDate(CurrentDate),
    /// Open the modal, fill the draft and submit it
    Create(NewTodo),
    Toggle(TodoId),
    Delete(TodoId),
}

pub struct ExpectedTodo {
    id: TodoId,
    title: &'static str,
    completed: bool,
}

pub struct Scenario {
    changes: Vec<ChangeToApply>,
    /// Date that is queried after the changes have been applied
    queried_date: CurrentDate,
    expected: Vec<ExpectedTodo>,
}

fn draft(title: &str, points: i64) -> NewTodo {
    NewTodo::new(title.to_string(), String::new(), points)
}

fn expected(id: u64, title: &'static str, completed: bool) -> ExpectedTodo {
    ExpectedTodo { id: TodoId::from(id), title, completed }
}

fn apply(state: &mut AppState, change: &ChangeToApply) {
    match change {
        ChangeToApply::SelectDate(date) => state.date_mut().set_current_date(*date),
        ChangeToApply::Create(new_todo) => {
            state.show_modal_mut().set_show_modal(true);
            state.show_modal_mut().set_new_todo(new_todo.clone());
            state.commit_new_todo();
        },
        ChangeToApply::Toggle(id) => { state.todos_mut().change_todo_is_completed(*id); },
        ChangeToApply::Delete(id) => { state.todos_mut().delete_todo(*id); },
    }
}

fn run(scenario: &Scenario) {
    let mut state = AppState::new();
    for change in &scenario.changes {
        apply(&mut state, change);
    }

    let got = state.todos().get_todos_by_date(&scenario.queried_date);
    assert_eq!(got.len(), scenario.expected.len());
    for (todo, expected) in got.iter().zip(&scenario.expected) {
        assert_eq!(todo.id(), expected.id);
        assert_eq!(todo.title(), expected.title);
        assert_eq!(todo.completed(), expected.completed);
    }
}

#[test]
fn buy_milk() {
    let _ = env_logger::builder().is_test(true).try_init();

    let day = CurrentDate::new(2024, 3, 10);
    let mut state = AppState::new();
    state.date_mut().set_current_date(day);
    state.todos_mut().add_todo_list(&draft("Buy milk", 5), &day);

    let todos = state.todos().get_todos_by_date(&day);
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id(), TodoId::from(1));
    assert_eq!(todos[0].completed(), false);

    assert!(state.todos_mut().change_todo_is_completed(TodoId::from(1)));
    assert!(state.todos().get_one_todo(TodoId::from(1)).unwrap().completed());

    assert_eq!(state.todos_mut().delete_todo(TodoId::from(1)), 1);
    assert!(state.todos().get_one_todo(TodoId::from(1)).is_none());
    assert!(state.todos().get_todos_by_date(&day).is_empty());
}

#[test]
fn scenarii() {
    let _ = env_logger::builder().is_test(true).try_init();

    let monday = CurrentDate::new(2024, 3, 8);
    let tuesday = CurrentDate::new(2024, 3, 9);

    let scenarii = vec![
        // Nothing at all
        Scenario {
            changes: Vec::new(),
            queried_date: monday,
            expected: Vec::new(),
        },
        // Todos are attached to the date that was selected when they were created
        Scenario {
            changes: vec![
                ChangeToApply::SelectDate(monday),
                ChangeToApply::Create(draft("A", 1)),
                ChangeToApply::SelectDate(tuesday),
                ChangeToApply::Create(draft("B", 1)),
                ChangeToApply::SelectDate(monday),
                ChangeToApply::Create(draft("C", 1)),
            ],
            queried_date: monday,
            expected: vec![expected(1, "A", false), expected(3, "C", false)],
        },
        // Toggling twice is a no-op, toggling unknown ids too
        Scenario {
            changes: vec![
                ChangeToApply::SelectDate(monday),
                ChangeToApply::Create(draft("A", 1)),
                ChangeToApply::Create(draft("B", 1)),
                ChangeToApply::Toggle(TodoId::from(1)),
                ChangeToApply::Toggle(TodoId::from(2)),
                ChangeToApply::Toggle(TodoId::from(2)),
                ChangeToApply::Toggle(TodoId::from(42)),
            ],
            queried_date: monday,
            expected: vec![expected(1, "A", true), expected(2, "B", false)],
        },
        // Deleting does not free ids
        Scenario {
            changes: vec![
                ChangeToApply::SelectDate(tuesday),
                ChangeToApply::Create(draft("A", 1)),
                ChangeToApply::Create(draft("B", 1)),
                ChangeToApply::Delete(TodoId::from(1)),
                ChangeToApply::Create(draft("C", 1)),
                ChangeToApply::Delete(TodoId::from(42)),
            ],
            queried_date: tuesday,
            expected: vec![expected(2, "B", false), expected(3, "C", false)],
        },
    ];

    for scenario in &scenarii {
        run(scenario);
    }
}

#[test]
fn ids_match_positions_without_deletions() {
    let mut state = AppState::new();
    let day = CurrentDate::new(2024, 0, 31);
    for n in 1..=20 {
        let id = state.todos_mut().add_todo_list(&draft("task", n), &day);
        assert_eq!(id, TodoId::from(n as u64));
        assert_eq!(state.todos().len(), n as usize);
    }
    for (position, todo) in state.todos().todo_list().iter().enumerate() {
        assert_eq!(todo.id().as_u64(), position as u64 + 1);
    }
}

#[test]
fn reset_new_todo_always_gives_an_empty_draft() {
    let mut state = AppState::new();
    for new_todo in vec![NewTodo::default(), draft("Something", 12), NewTodo::new("x".into(), "y".into(), -3)] {
        state.show_modal_mut().set_new_todo(new_todo);
        state.show_modal_mut().reset_new_todo();
        let empty = state.show_modal().new_todo();
        assert_eq!(empty.title(), "");
        assert_eq!(empty.description(), "");
        assert_eq!(empty.points(), 0);
    }
}
