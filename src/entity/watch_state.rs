use crate::entity::{DisplayItem, Item};

/// Favorited items in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct WatchState {
    favorites: Vec<Item>,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh a favorite. Returns true when the id was new.
    ///
    /// An existing entry keeps its position and takes the new snapshot.
    pub fn add(&mut self, item: Item) -> bool {
        match self.favorites.iter_mut().find(|f| f.id == item.id) {
            Some(existing) => {
                *existing = item;
                false
            }
            None => {
                self.favorites.push(item);
                true
            }
        }
    }

    /// Returns whether anything was removed; absent ids are ignored.
    pub fn remove(&mut self, item_id: i64) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.id != item_id);
        self.favorites.len() != before
    }

    pub fn contains(&self, item_id: i64) -> bool {
        self.favorites.iter().any(|f| f.id == item_id)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.favorites.iter().map(|f| f.id).collect()
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Swap in fresh snapshots for favorites that are still watched.
    pub fn replace_snapshots(&mut self, fresh: Vec<Item>) {
        for item in fresh {
            if let Some(existing) = self.favorites.iter_mut().find(|f| f.id == item.id) {
                *existing = item;
            }
        }
    }

    pub fn display_items(&self) -> Vec<DisplayItem> {
        self.favorites
            .iter()
            .map(|item| DisplayItem::from(item).with_watched(true))
            .collect()
    }
}
