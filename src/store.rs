//! Checklist State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ChecklistId, ChecklistItem, ItemId};

/// Client-side cache of the checklist.
///
/// Mutated only on the UI thread, and only with server-confirmed
/// records.
#[derive(Clone, Debug, Default, Store)]
pub struct ChecklistState {
    /// The resolved checklist id, set once the list resource saves.
    pub checklist_id: Option<ChecklistId>,
    /// Items in server order.
    pub items: Vec<ChecklistItem>,
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

/// Get the checklist store from context
pub fn use_checklist_store() -> ChecklistStore {
    expect_context::<ChecklistStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a confirmed item.
pub fn store_add_item(store: &ChecklistStore, item: ChecklistItem) {
    store.items().write().push(item);
}

/// Replace an item with its confirmed update, matched by id.
pub fn store_update_item(store: &ChecklistStore, updated: ChecklistItem) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == updated.id)
        .map(|item| *item = updated);
}

/// Remove an item from the store by id.
pub fn store_remove_item(store: &ChecklistStore, item_id: ItemId) {
    store.items().write().retain(|item| item.id != item_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, description: &str, checked: bool) -> ChecklistItem {
        ChecklistItem {
            id,
            description: description.to_string(),
            checked,
        }
    }

    #[test]
    fn confirmed_update_replaces_matching_item() {
        let store = ChecklistStore::new(ChecklistState::default());
        store_add_item(&store, item(1, "first", false));
        store_add_item(&store, item(2, "second", false));

        store_update_item(&store, item(2, "second, edited", true));

        let items = store.items().get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description, "second, edited");
        assert!(items[1].checked);
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let store = ChecklistStore::new(ChecklistState::default());
        store_add_item(&store, item(1, "first", false));

        // Each confirmed toggle lands as an update.
        store_update_item(&store, item(1, "first", true));
        store_update_item(&store, item(1, "first", false));

        let items = store.items().get_untracked();
        assert!(!items[0].checked);
    }

    #[test]
    fn removed_item_leaves_the_collection() {
        let store = ChecklistStore::new(ChecklistState::default());
        store_add_item(&store, item(1, "first", false));
        store_add_item(&store, item(2, "second", false));

        store_remove_item(&store, 1);

        let items = store.items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }
}
