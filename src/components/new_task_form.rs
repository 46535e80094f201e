//! New Task Form Component

use leptos::prelude::*;

use crate::list;
use crate::models::TaskItem;

/// Form appending a task to the list
#[component]
pub fn NewTaskForm(tasks: RwSignal<Vec<TaskItem>>) -> impl IntoView {
    let (new_title, set_new_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        let mut added = None;
        tasks.update(|items| added = list::append(items, &title));
        if let Some(id) = added {
            log::debug!("[NewTaskForm] added task {}", id);
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="form-control"
                placeholder="Add new task..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
