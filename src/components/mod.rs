//! UI Components
//!
//! Leptos components rendering the view model.

mod todo_form;
mod todo_item;
mod todo_list;
mod toast_stack;

pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use toast_stack::ToastStack;
