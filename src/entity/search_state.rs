use std::collections::HashSet;

use crate::entity::{DisplayItem, Item, ItemFilter, SortColumn, SortDirection};

/// Filter selections, the last result set and the active sort.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    filter: ItemFilter,
    results: Vec<Item>,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &ItemFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut ItemFilter {
        &mut self.filter
    }

    /// Items that pass the filter and are both bought and sold right now.
    pub fn accepts(&self, item: &Item) -> bool {
        item.is_traded() && self.filter.matches(item)
    }

    /// Build a fresh result set from a raw fetch and swap it in whole.
    ///
    /// Later duplicates of an id are dropped.
    pub fn replace_results(&mut self, fetched: Vec<Item>) {
        let mut seen = HashSet::new();
        let results: Vec<Item> = fetched
            .into_iter()
            .filter(|item| self.accepts(item))
            .filter(|item| seen.insert(item.id))
            .collect();

        self.results = results;
    }

    pub fn results(&self) -> &[Item] {
        &self.results
    }

    pub fn find_result(&self, item_id: i64) -> Option<&Item> {
        self.results.iter().find(|item| item.id == item_id)
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort_column.map(|column| (column, self.sort_direction))
    }

    /// Re-selecting the active column flips the direction; any other column
    /// starts ascending.
    pub fn change_sort_column(&mut self, column: SortColumn) {
        if self.sort_column == Some(column) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// The result set in display order. Ties keep their fetched order.
    pub fn display_items(&self) -> Vec<DisplayItem> {
        let mut ordered: Vec<&Item> = self.results.iter().collect();
        if let Some((column, direction)) = self.sort() {
            ordered.sort_by(|a, b| direction.apply(column.compare(a, b)));
        }
        ordered.into_iter().map(DisplayItem::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, level: i32, supply: i64, demand: i64) -> Item {
        Item {
            id,
            name: name.to_string(),
            rarity_id: 2,
            restriction_level: level,
            image_url: None,
            type_id: 18,
            subtype_id: Some(6),
            price_last_changed: None,
            max_offer_price: 100 * id,
            min_sale_price: 150 * id,
            offer_availability: demand,
            sale_availability: supply,
            sale_change_pct: 0,
            offer_change_pct: 0,
        }
    }

    fn ids(items: &[DisplayItem]) -> Vec<i64> {
        items.iter().map(|d| d.id).collect()
    }

    #[test]
    fn keeps_first_occurrence_of_duplicate_ids() {
        let mut state = SearchState::new();
        let mut dup = item(1, "Copy", 10, 5, 5);
        dup.min_sale_price = 1;

        state.replace_results(vec![item(1, "Sword", 10, 5, 5), item(2, "Axe", 10, 5, 5), dup]);

        assert_eq!(state.results().len(), 2);
        assert_eq!(state.results()[0].name, "Sword");
    }

    #[test]
    fn drops_items_nobody_trades() {
        let mut state = SearchState::new();
        state.replace_results(vec![
            item(1, "Listed", 10, 5, 5),
            item(2, "No sellers", 10, 0, 5),
            item(3, "No buyers", 10, 5, 0),
        ]);

        assert_eq!(ids(&state.display_items()), vec![1]);
    }

    #[test]
    fn new_results_replace_old_ones() {
        let mut state = SearchState::new();
        state.replace_results(vec![item(1, "Sword", 10, 5, 5)]);
        state.replace_results(vec![item(2, "Axe", 10, 5, 5)]);

        assert_eq!(ids(&state.display_items()), vec![2]);
    }

    #[test]
    fn toggling_sort_keeps_item_set() {
        let mut state = SearchState::new();
        state.replace_results(vec![
            item(2, "b", 20, 5, 5),
            item(1, "a", 10, 5, 5),
            item(3, "c", 30, 5, 5),
        ]);

        state.change_sort_column(SortColumn::Level);
        assert_eq!(state.sort(), Some((SortColumn::Level, SortDirection::Ascending)));
        assert_eq!(ids(&state.display_items()), vec![1, 2, 3]);

        state.change_sort_column(SortColumn::Level);
        assert_eq!(state.sort(), Some((SortColumn::Level, SortDirection::Descending)));
        assert_eq!(ids(&state.display_items()), vec![3, 2, 1]);

        state.change_sort_column(SortColumn::Name);
        assert_eq!(state.sort(), Some((SortColumn::Name, SortDirection::Ascending)));
    }

    #[test]
    fn ties_keep_fetched_order_in_both_directions() {
        let mut state = SearchState::new();
        state.replace_results(vec![
            item(1, "x", 10, 5, 5),
            item(2, "y", 10, 5, 5),
            item(3, "z", 5, 5, 5),
        ]);

        state.change_sort_column(SortColumn::Level);
        assert_eq!(ids(&state.display_items()), vec![3, 1, 2]);
        state.change_sort_column(SortColumn::Level);
        assert_eq!(ids(&state.display_items()), vec![1, 2, 3]);
    }

    #[test]
    fn price_columns_sort_numerically() {
        let mut state = SearchState::new();
        let mut cheap = item(1, "cheap", 10, 5, 5);
        cheap.min_sale_price = 9;
        let mut pricey = item(2, "pricey", 10, 5, 5);
        pricey.min_sale_price = 10_000;
        let mut mid = item(3, "mid", 10, 5, 5);
        mid.min_sale_price = 150;
        state.replace_results(vec![pricey, cheap, mid]);

        state.change_sort_column(SortColumn::MinSale);
        assert_eq!(ids(&state.display_items()), vec![1, 3, 2]);
    }

    #[test]
    fn name_sort_is_case_sensitive() {
        let mut state = SearchState::new();
        state.replace_results(vec![item(1, "apple", 10, 5, 5), item(2, "Zebra", 10, 5, 5)]);

        state.change_sort_column(SortColumn::Name);
        assert_eq!(ids(&state.display_items()), vec![2, 1]);
    }
}
