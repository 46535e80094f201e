//! Task List Component
//!
//! Hosts task rows: applies their intents to the list and runs the drag
//! coordinator shared by all rows.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TaskItem;
use crate::list;
use crate::models::TaskItem as Task;
use crate::task_item::TASK_KIND;

#[component]
pub fn TaskList(tasks: RwSignal<Vec<Task>>) -> impl IntoView {
    let dnd = create_dnd_signals::<u32>();
    bind_global_mouseup(dnd);

    view! {
        <div class="task-list">
            <For
                each=move || tasks.get()
                // keyed by id only so editing a title keeps its input mounted
                key=|task| task.id
                children=move |task| {
                    let id = task.id;
                    let title = Signal::derive(move || {
                        tasks.with(|items| items.iter().find(|t| t.id == id).map(|t| t.title.clone()).unwrap_or_default())
                    });
                    let checked = Signal::derive(move || {
                        tasks.with(|items| items.iter().any(|t| t.id == id && t.checked))
                    });

                    view! {
                        <TaskItem
                            title=title
                            checked=checked
                            drag=DragHandle::new(dnd, TASK_KIND, id)
                            drop={move |payload: DropPayload<u32>| {
                                log::debug!("[TaskList] drop {} before {}", payload.source, payload.target);
                                tasks.update(|items| {
                                    list::apply_drop(items, &payload);
                                });
                            }}
                            set_check=move |value: bool| tasks.update(|items| list::toggle(items, id, value))
                            set_title=move |value: String| tasks.update(|items| list::retitle(items, id, value))
                            remove=move |_| {
                                log::debug!("[TaskList] remove {}", id);
                                tasks.update(|items| list::remove(items, id));
                            }
                        />
                    }
                }
            />
        </div>
    }
}
