//! Stores that only make sense on the home page

mod show_modal;
pub use show_modal::{NewTodo, ShowModal, ShowModalStore};
