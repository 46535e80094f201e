//! Task Item Component
//!
//! DOM rendering of the task row. Attributes, classes and the remove button
//! come from `crate::task_item`, the same constants and markers the pure
//! renderer uses.

use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;
use leptos_dragdrop::{DragHandle, DropPayload};

use crate::components::IconButton;
use crate::task_item::{
    dragging_marker, dragging_over_marker, ATTR_DRAGGING, ATTR_DRAGGINGOVER, REMOVE_BUTTON_TYPE, REMOVE_CLASS,
    REMOVE_ICON, ROOT_ATTRS, ROOT_CLASS, TITLE_CLASSES,
};

/// A single draggable task row
#[component]
pub fn TaskItem(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    /// Binding to the list's drag coordinator
    drag: DragHandle<u32>,
    #[prop(into)] drop: Callback<DropPayload<u32>>,
    #[prop(into)] set_check: Callback<bool>,
    #[prop(into)] set_title: Callback<String>,
    #[prop(into)] remove: Callback<()>,
) -> impl IntoView {
    let dragging = drag.dragging();
    let dragging_over = drag.dragging_over();

    let [draggable, dragtype, droptarget] = ROOT_ATTRS;
    let root_attrs = (
        custom_attribute(draggable.0, draggable.1),
        custom_attribute(dragtype.0, dragtype.1),
        custom_attribute(droptarget.0, droptarget.1),
        custom_attribute(ATTR_DRAGGING, move || dragging_marker(dragging.get())),
        custom_attribute(ATTR_DRAGGINGOVER, move || dragging_over_marker(dragging_over.get())),
    );

    view! {
        <div
            class=ROOT_CLASS
            // the coordinator follows the mouse; native drag would swallow mousemove
            on:dragstart=|ev| ev.prevent_default()
            on:mousedown=drag.on_mousedown()
            on:mouseenter=drag.on_mouseenter()
            on:mouseleave=drag.on_mouseleave()
            on:mouseup=drag.on_mouseup(move |payload| drop.run(payload))
            {..root_attrs}
        >
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:input=move |ev| set_check.run(event_target_checked(&ev))
            />
            <input
                class=TITLE_CLASSES.join(" ")
                prop:value=move || title.get()
                disabled=move || checked.get()
                on:input=move |ev| set_title.run(event_target_value(&ev))
            />
            <IconButton
                button_type=REMOVE_BUTTON_TYPE
                icon=REMOVE_ICON
                extra_class=REMOVE_CLASS
                on_click=move |_| remove.run(())
            />
        </div>
    }
}
