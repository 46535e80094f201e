//! Task Item View
//!
//! One draggable to-do row: a checkbox, an editable title and a remove
//! button revealed on hover. The row never mutates its task; every gesture
//! is forwarded to the owner through [`TaskItemActions`].

use std::rc::Rc;

use crate::icon_button::{render_icon_button, ButtonType, Icon};
use crate::models::TaskItem;
use crate::style::{lit, var, Compound, Selector, StyleSheet};
use crate::theme::{COLOR_BORDER, SIZE_2, SIZE_3, SIZE_DROP_GAP, TRANSLUCENT};
use crate::view::{Element, Event, EventKind, InputValue, ViewNode};

/// Kind shared by task rows as drag sources and drop targets
pub const TASK_KIND: &str = "todo-task";

pub const ROOT_CLASS: &str = "task-item";
pub const TITLE_CLASS: &str = "task-item-title";
pub const REMOVE_CLASS: &str = "task-item-rm";

pub const ATTR_DRAGTYPE: &str = "data-dragtype";
pub const ATTR_DROPTARGET: &str = "data-droptarget";
/// Set by the drag coordinator on the row being dragged
pub const ATTR_DRAGGING: &str = "data-dragging";
/// Set by the drag coordinator to the kind hovering over the row
pub const ATTR_DRAGGINGOVER: &str = "data-draggingover";

/// Attributes every row carries: a drag source and drop target of [`TASK_KIND`]
pub const ROOT_ATTRS: [(&str, &str); 3] = [
    ("draggable", "true"),
    (ATTR_DRAGTYPE, TASK_KIND),
    (ATTR_DROPTARGET, TASK_KIND),
];

pub const TITLE_CLASSES: [&str; 2] = ["form-control", TITLE_CLASS];

pub const REMOVE_BUTTON_TYPE: ButtonType = ButtonType::Danger;
pub const REMOVE_ICON: Icon = Icon::Remove;

/// Value of [`ATTR_DRAGGING`]; `None` leaves the attribute off
pub fn dragging_marker(dragging: bool) -> Option<&'static str> {
    dragging.then_some("")
}

/// Value of [`ATTR_DRAGGINGOVER`]; `None` leaves the attribute off
pub fn dragging_over_marker(dragging_over: bool) -> Option<&'static str> {
    dragging_over.then_some(TASK_KIND)
}

/// What the row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskItemProps<'a> {
    pub title: &'a str,
    pub checked: bool,
    /// This row is the drag source
    pub dragging: bool,
    /// A compatible row is dragged over this one
    pub dragging_over: bool,
}

impl<'a> TaskItemProps<'a> {
    pub fn new(title: &'a str, checked: bool) -> Self {
        Self {
            title,
            checked,
            ..Self::default()
        }
    }

    pub fn from_item(item: &'a TaskItem) -> Self {
        Self::new(&item.title, item.checked)
    }

    pub fn with_drag(self, dragging: bool, dragging_over: bool) -> Self {
        Self {
            dragging,
            dragging_over,
            ..self
        }
    }
}

/// Intents the row forwards. All four are required.
pub struct TaskItemActions<P> {
    pub drop: Rc<dyn Fn(P)>,
    pub set_check: Rc<dyn Fn(bool)>,
    pub set_title: Rc<dyn Fn(String)>,
    pub remove: Rc<dyn Fn()>,
}

impl<P> TaskItemActions<P> {
    pub fn new(
        drop: impl Fn(P) + 'static,
        set_check: impl Fn(bool) + 'static,
        set_title: impl Fn(String) + 'static,
        remove: impl Fn() + 'static,
    ) -> Self {
        Self {
            drop: Rc::new(drop),
            set_check: Rc::new(set_check),
            set_title: Rc::new(set_title),
            remove: Rc::new(remove),
        }
    }
}

impl<P> Clone for TaskItemActions<P> {
    fn clone(&self) -> Self {
        Self {
            drop: self.drop.clone(),
            set_check: self.set_check.clone(),
            set_title: self.set_title.clone(),
            remove: self.remove.clone(),
        }
    }
}

/// Build the row. Pure: the same props always give an equal tree.
pub fn render_task_item<P: 'static>(props: &TaskItemProps<'_>, actions: &TaskItemActions<P>) -> ViewNode<P> {
    let on_drop = actions.drop.clone();
    let set_check = actions.set_check.clone();
    let set_title = actions.set_title.clone();
    let remove = actions.remove.clone();

    let checkbox = Element::new("input")
        .attr("type", "checkbox")
        .flag("checked", props.checked)
        .on(EventKind::Input, move |ev| {
            if let Event::Input(InputValue::Checked(checked)) = ev {
                set_check(checked);
            }
        });

    let title = TITLE_CLASSES
        .iter()
        .fold(Element::new("input"), |el, class| el.class(*class))
        .attr("value", props.title)
        .flag("disabled", props.checked)
        .on(EventKind::Input, move |ev| {
            if let Event::Input(InputValue::Text(text)) = ev {
                set_title(text);
            }
        });

    let remove_button = render_icon_button(REMOVE_BUTTON_TYPE, REMOVE_ICON, Some(REMOVE_CLASS), move || remove());

    ROOT_ATTRS
        .iter()
        .fold(Element::new("div").class(ROOT_CLASS), |el, (name, value)| el.attr(*name, *value))
        .attr_opt(ATTR_DRAGGING, dragging_marker(props.dragging))
        .attr_opt(ATTR_DRAGGINGOVER, dragging_over_marker(props.dragging_over))
        .on(EventKind::Drop, move |ev| {
            if let Event::Drop(payload) = ev {
                on_drop(payload);
            }
        })
        .child(checkbox)
        .child(title)
        .child(remove_button)
        .into()
}

/// Styles for the row. Sizes, colours and opacity come from tokens.
pub fn task_item_stylesheet() -> StyleSheet {
    let root = || Compound::class(ROOT_CLASS);
    StyleSheet::new()
        .rule(
            root(),
            &[
                ("display", lit("grid")),
                ("grid-template-columns", lit("1em 1fr auto")),
                ("align-items", lit("center")),
                ("gap", var(SIZE_3)),
                ("cursor", lit("grab")),
            ],
        )
        .rule(Compound::class(TITLE_CLASS), &[("border", lit("none")), ("padding", var(SIZE_2))])
        .rule(Compound::class(REMOVE_CLASS), &[("visibility", lit("hidden"))])
        .rule(
            root().hover(),
            &[
                ("outline", lit("2px solid").then(var(COLOR_BORDER))),
                ("outline-offset", var(SIZE_2)),
                ("position", lit("relative")),
                ("z-index", lit("100")),
            ],
        )
        .rule(
            Selector::from(Compound::class(REMOVE_CLASS)).child_of(root().hover()),
            &[("visibility", lit("visible"))],
        )
        .rule(
            root(),
            &[
                ("transition", lit("0.15s border-top ease")),
                ("border-top", lit("0 solid transparent")),
            ],
        )
        .rule(
            root().with_attr_eq(ATTR_DRAGGINGOVER, TASK_KIND),
            &[
                ("border-top", var(SIZE_DROP_GAP).then(lit("solid transparent"))),
                ("transition", lit("0.15s border-top ease")),
            ],
        )
        .rule(root().with_attr(ATTR_DRAGGING), &[("opacity", var(TRANSLUCENT))])
}
