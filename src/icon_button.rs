//! Icon Button
//!
//! Reusable button showing a single glyph, styled by variant.

use crate::view::{Element, EventKind};

/// Style variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Primary => "primary",
            ButtonType::Secondary => "secondary",
            ButtonType::Danger => "danger",
        }
    }

    pub fn class(self) -> String {
        format!("btn-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Remove,
    Add,
    Grip,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Remove => "remove",
            Icon::Add => "add",
            Icon::Grip => "grip",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Remove => "×",
            Icon::Add => "+",
            Icon::Grip => "⠿",
        }
    }
}

/// Classes of a button: `btn btn-<type> btn-icon [extra]`
pub fn button_classes(button_type: ButtonType, extra_class: Option<&str>) -> Vec<String> {
    let mut classes = vec!["btn".to_string(), button_type.class(), "btn-icon".to_string()];
    classes.extend(extra_class.map(str::to_string));
    classes
}

/// `<button>` with a glyph span. `on_click` runs once per click.
pub fn render_icon_button<P>(
    button_type: ButtonType,
    icon: Icon,
    extra_class: Option<&str>,
    on_click: impl Fn() + 'static,
) -> Element<P> {
    button_classes(button_type, extra_class)
        .into_iter()
        .fold(Element::new("button"), |button, class| button.class(class))
        .attr("type", "button")
        .attr("aria-label", icon.name())
        .child(Element::new("span").class("icon").class(format!("icon-{}", icon.name())).text(icon.glyph()))
        .on(EventKind::Click, move |_| on_click())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Event;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_danger_remove_button() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let button: Element<()> = render_icon_button(ButtonType::Danger, Icon::Remove, Some("row-rm"), move || {
            counter.set(counter.get() + 1)
        });

        assert_eq!(button.classes(), ["btn", "btn-danger", "btn-icon", "row-rm"]);
        assert_eq!(button.attr_text("aria-label"), Some("remove"));
        assert_eq!(button.attr_text("type"), Some("button"));
        assert!(button.find_by_class("icon-remove").is_some());

        assert!(button.dispatch(Event::Click));
        assert_eq!(clicks.get(), 1);
    }
}
