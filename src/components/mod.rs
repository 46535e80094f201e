//! UI Components
//!
//! Leptos bindings for the task row and its collaborators.

mod icon_button;
mod new_task_form;
mod task_item;
mod task_list;
mod task_styles;

pub use icon_button::IconButton;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use task_styles::TaskStyles;
