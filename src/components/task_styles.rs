//! Task Styles Component
//!
//! Injects the theme tokens and the task row stylesheet.

use leptos::prelude::*;

use crate::style::TokenMode;
use crate::task_item::task_item_stylesheet;
use crate::theme::Theme;

#[component]
pub fn TaskStyles(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
    let theme = theme.unwrap_or_default();
    let rows = match task_item_stylesheet().render(TokenMode::Var) {
        Ok(css) => css,
        Err(e) => {
            log::error!("[TaskStyles] failed to render stylesheet: {}", e);
            String::new()
        }
    };

    view! { <style>{theme.to_root_css()}{rows}</style> }
}
