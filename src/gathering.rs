//! Gathering List
//!
//! Ordered list of items to gather. Every mutation ends with an explicit
//! call to the installed notify hook, passing the new list.

use std::fmt;
use std::sync::Arc;

use crate::models::{GatheringItem, ItemId};

/// Hook invoked with the full list after every mutation
pub type NotifyHook = Arc<dyn Fn(&[GatheringItem]) + Send + Sync>;

#[derive(Clone)]
pub struct GatheringList {
    items: Vec<GatheringItem>,
    notify: NotifyHook,
}

impl GatheringList {
    pub fn new(notify: NotifyHook) -> Self {
        Self {
            items: Vec::new(),
            notify,
        }
    }

    /// List without a notify hook
    pub fn detached() -> Self {
        Self::new(Arc::new(|_: &[GatheringItem]| {}))
    }

    pub fn items(&self) -> &[GatheringItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge by name: an existing entry only gains quantity, otherwise append.
    pub fn add_item(&mut self, item: GatheringItem) {
        match self.items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
        self.notify();
    }

    /// Remove the first entry with `id`. Unknown ids leave the list as is.
    pub fn remove_item(&mut self, id: ItemId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.items.remove(index);
        }
        self.notify();
    }

    /// Replace the whole list (reorder, bulk quantity edits)
    pub fn update_items(&mut self, items: Vec<GatheringItem>) {
        self.items = items;
        self.notify();
    }

    fn notify(&self) {
        (self.notify)(&self.items);
    }
}

/// Copy of `items` with the entry at `from` moved to `to`.
/// Out-of-range indices return the list unchanged.
pub fn move_entry(items: &[GatheringItem], from: usize, to: usize) -> Vec<GatheringItem> {
    let mut moved = items.to_vec();
    if from < moved.len() && to < moved.len() {
        let entry = moved.remove(from);
        moved.insert(to, entry);
    }
    moved
}

/// Copy of `items` with the quantity of the first entry matching `id` replaced
pub fn set_quantity(items: &[GatheringItem], id: ItemId, quantity: i64) -> Vec<GatheringItem> {
    let mut updated = items.to_vec();
    if let Some(entry) = updated.iter_mut().find(|item| item.id == id) {
        entry.quantity = quantity;
    }
    updated
}

impl fmt::Debug for GatheringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatheringList")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Default for GatheringList {
    fn default() -> Self {
        Self::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn item(id: ItemId, name: &str, job: &str, level: i32, quantity: i64) -> GatheringItem {
        GatheringItem {
            id,
            name: name.to_string(),
            job: job.to_string(),
            level,
            quantity,
        }
    }

    /// List whose hook records every snapshot it receives
    fn recording_list() -> (GatheringList, Arc<Mutex<Vec<Vec<GatheringItem>>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let list = GatheringList::new(Arc::new(move |items: &[GatheringItem]| {
            sink.lock().unwrap().push(items.to_vec());
        }));
        (list, calls)
    }

    #[test]
    fn test_add_new_item_appends() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Wind Crystal", "ALC", 1, 5));

        assert_eq!(list.items(), &[item(1, "Wind Crystal", "ALC", 1, 5)]);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Copper Ore", "MIN", 1, 2));
        list.add_item(item(2, "Latex", "BTN", 3, 4));
        list.add_item(item(3, "Bone Chip", "MIN", 5, 1));

        let names: Vec<_> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Copper Ore", "Latex", "Bone Chip"]);
    }

    #[test]
    fn test_add_existing_name_merges_quantity() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Wind Crystal", "ALC", 1, 5));
        list.add_item(item(9, "Wind Crystal", "CRP", 50, 3));

        assert_eq!(list.len(), 1);
        // first-seen id, job and level win
        assert_eq!(list.items()[0], item(1, "Wind Crystal", "ALC", 1, 8));
    }

    #[test]
    fn test_add_negative_quantity_is_applied() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Latex", "BTN", 3, 5));
        list.add_item(item(2, "Latex", "BTN", 3, -7));

        assert_eq!(list.items()[0].quantity, -2);
    }

    #[test]
    fn test_remove_item() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Copper Ore", "MIN", 1, 2));
        list.add_item(item(2, "Latex", "BTN", 3, 4));
        list.add_item(item(3, "Bone Chip", "MIN", 5, 1));

        list.remove_item(2);

        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Copper Ore", "MIN", 1, 2));
        let before = list.items().to_vec();

        list.remove_item(42);

        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_remove_first_of_duplicate_ids() {
        let mut list = GatheringList::detached();
        list.update_items(vec![item(7, "Copper Ore", "MIN", 1, 2), item(7, "Latex", "BTN", 3, 4)]);

        list.remove_item(7);

        assert_eq!(list.items(), &[item(7, "Latex", "BTN", 3, 4)]);
    }

    #[test]
    fn test_update_items_replaces_list() {
        let mut list = GatheringList::detached();
        list.add_item(item(1, "Copper Ore", "MIN", 1, 2));

        let replacement = vec![item(5, "Latex", "BTN", 3, 4), item(6, "Copper Ore", "MIN", 1, 9)];
        list.update_items(replacement.clone());

        assert_eq!(list.items(), replacement.as_slice());
    }

    #[test]
    fn test_update_items_accepts_duplicate_names() {
        let mut list = GatheringList::detached();
        let replacement = vec![item(1, "Latex", "BTN", 3, 4), item(2, "Latex", "BTN", 3, 1)];
        list.update_items(replacement.clone());

        assert_eq!(list.items(), replacement.as_slice());
    }

    #[test]
    fn test_hook_fires_once_per_mutation() {
        let (mut list, calls) = recording_list();

        list.add_item(item(1, "Copper Ore", "MIN", 1, 2));
        list.add_item(item(2, "Copper Ore", "MIN", 1, 3));
        list.remove_item(99);
        list.update_items(Vec::new());

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], vec![item(1, "Copper Ore", "MIN", 1, 2)]);
        assert_eq!(calls[1], vec![item(1, "Copper Ore", "MIN", 1, 5)]);
        assert_eq!(calls[2], vec![item(1, "Copper Ore", "MIN", 1, 5)]);
        assert!(calls[3].is_empty());
    }

    #[test]
    fn test_move_entry() {
        let items = vec![
            item(1, "Copper Ore", "MIN", 1, 2),
            item(2, "Latex", "BTN", 3, 4),
            item(3, "Bone Chip", "MIN", 5, 1),
        ];

        let ids = |v: Vec<GatheringItem>| v.into_iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(move_entry(&items, 2, 0)), vec![3, 1, 2]);
        assert_eq!(ids(move_entry(&items, 0, 1)), vec![2, 1, 3]);
        assert_eq!(ids(move_entry(&items, 0, 3)), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_quantity() {
        let items = vec![item(1, "Copper Ore", "MIN", 1, 2), item(2, "Latex", "BTN", 3, 4)];

        let updated = set_quantity(&items, 2, 10);
        assert_eq!(updated[1], item(2, "Latex", "BTN", 3, 10));
        assert_eq!(updated[0], items[0]);
        assert_eq!(set_quantity(&items, 9, 10), items);
    }

    #[test]
    fn test_new_list_is_empty() {
        let (list, calls) = recording_list();
        assert!(list.is_empty());
        assert!(calls.lock().unwrap().is_empty());
    }
}
