//! Task List Operations
//!
//! Helpers the host uses to apply row intents to its list.

use leptos_dragdrop::DropPayload;

use crate::models::TaskItem;
use crate::task_item::TASK_KIND;

pub fn toggle(items: &mut [TaskItem], id: u32, checked: bool) {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.checked = checked;
    }
}

pub fn retitle(items: &mut [TaskItem], id: u32, title: String) {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.title = title;
    }
}

pub fn remove(items: &mut Vec<TaskItem>, id: u32) {
    items.retain(|item| item.id != id);
}

/// Move `source` so it sits directly above `target`, where the drop gap
/// opened. Returns false and leaves the list alone when either id is
/// unknown or both are the same.
pub fn move_before(items: &mut Vec<TaskItem>, source: u32, target: u32) -> bool {
    if source == target {
        return false;
    }
    let Some(from) = items.iter().position(|item| item.id == source) else {
        return false;
    };
    if !items.iter().any(|item| item.id == target) {
        return false;
    }
    let moved = items.remove(from);
    // index of target after removal
    let to = items.iter().position(|item| item.id == target).unwrap_or(items.len());
    items.insert(to, moved);
    true
}

/// Apply a row drop. Payloads of another kind are ignored.
pub fn apply_drop(items: &mut Vec<TaskItem>, payload: &DropPayload<u32>) -> bool {
    payload.kind == TASK_KIND && move_before(items, payload.source, payload.target)
}

/// Append a task with the next free id. Blank titles are ignored, as is
/// any append once the highest id is `u32::MAX`.
pub fn append(items: &mut Vec<TaskItem>, title: &str) -> Option<u32> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let id = match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1)?,
        None => 1,
    };
    items.push(TaskItem::new(id, title));
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items(ids: &[u32]) -> Vec<TaskItem> {
        ids.iter().map(|id| TaskItem::new(*id, format!("Task {}", id))).collect()
    }

    fn ids(items: &[TaskItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_move_up_and_down() {
        let mut items = make_items(&[1, 2, 3, 4]);
        assert!(move_before(&mut items, 4, 2));
        assert_eq!(ids(&items), vec![1, 4, 2, 3]);

        assert!(move_before(&mut items, 1, 3));
        assert_eq!(ids(&items), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_move_rejects_self_and_unknown() {
        let mut items = make_items(&[1, 2, 3]);
        assert!(!move_before(&mut items, 2, 2));
        assert!(!move_before(&mut items, 9, 1));
        assert!(!move_before(&mut items, 1, 9));
        assert_eq!(ids(&items), vec![1, 2, 3]);
    }

    #[test]
    fn test_apply_drop() {
        let mut items = make_items(&[1, 2, 3]);
        let payload = DropPayload {
            kind: TASK_KIND,
            source: 3,
            target: 1,
        };
        assert!(apply_drop(&mut items, &payload));
        assert_eq!(ids(&items), vec![3, 1, 2]);

        let foreign = DropPayload { kind: "photo", ..payload };
        assert!(!apply_drop(&mut items, &foreign));
        assert_eq!(ids(&items), vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_retitle_remove() {
        let mut items = make_items(&[1, 2]);
        toggle(&mut items, 2, true);
        retitle(&mut items, 1, "Buy milk".to_string());
        assert!(items[1].checked);
        assert_eq!(items[0].title, "Buy milk");

        remove(&mut items, 1);
        assert_eq!(ids(&items), vec![2]);
        // unknown ids are ignored
        toggle(&mut items, 7, true);
        remove(&mut items, 7);
        assert_eq!(ids(&items), vec![2]);
    }

    #[test]
    fn test_append() {
        let mut items = Vec::new();
        assert_eq!(append(&mut items, "  Buy milk "), Some(1));
        assert_eq!(append(&mut items, "   "), None);
        assert_eq!(append(&mut items, "Walk dog"), Some(2));
        assert_eq!(items[0].title, "Buy milk");

        remove(&mut items, 1);
        assert_eq!(append(&mut items, "Call mum"), Some(3));
    }

    #[test]
    fn test_append_after_highest_id_is_refused() {
        let mut items = make_items(&[u32::MAX]);
        assert_eq!(append(&mut items, "One more"), None);
        assert_eq!(ids(&items), vec![u32::MAX]);
    }
}
