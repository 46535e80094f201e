//! Icon Button Component

use leptos::prelude::*;

use crate::icon_button::{button_classes, ButtonType, Icon};

/// Glyph button; clicks do not bubble to the row underneath
#[component]
pub fn IconButton(
    icon: Icon,
    #[prop(optional)] button_type: ButtonType,
    /// Extra class appended after the variant classes
    #[prop(optional, into)]
    extra_class: Option<String>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let classes = button_classes(button_type, extra_class.as_deref()).join(" ");

    view! {
        <button
            type="button"
            class=classes
            aria-label=icon.name()
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            <span class=format!("icon icon-{}", icon.name())>{icon.glyph()}</span>
        </button>
    }
}
