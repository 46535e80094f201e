//! To-do Frontend App
//!
//! Demo host for the task row: a form, the list and a counter.

use leptos::prelude::*;

use todo_task_ui::components::{NewTaskForm, TaskList, TaskStyles};
use todo_task_ui::TaskItem;

#[component]
pub fn App() -> impl IntoView {
    let tasks = RwSignal::new(vec![
        TaskItem::new(1, "Buy milk"),
        TaskItem::new(2, "Walk the dog"),
    ]);

    let summary = move || {
        tasks.with(|items| {
            let done = items.iter().filter(|item| item.checked).count();
            format!("{} tasks, {} done", items.len(), done)
        })
    };

    view! {
        <TaskStyles />
        <main class="task-app">
            <h1>"To-do"</h1>
            <NewTaskForm tasks=tasks />
            <TaskList tasks=tasks />
            <p class="item-count">{summary}</p>
        </main>
    }
}
