//! Draggable to-do task row
//!
//! `render_task_item` describes the row as a typed view tree; the
//! `components` module renders the same row to the DOM with Leptos.

pub mod components;
pub mod error;
pub mod icon_button;
pub mod list;
pub mod models;
pub mod style;
pub mod task_item;
pub mod theme;
pub mod view;

pub use error::{Error, Result};
pub use models::TaskItem;
pub use task_item::{render_task_item, task_item_stylesheet, TaskItemActions, TaskItemProps};
pub use theme::{Theme, TokenResolver};
