use crate::entity::{DisplayItem, SortColumn, SortDirection};
use crate::utils::shorten_name;

const NAME_WIDTH: usize = 34;

pub fn header(sort: Option<(SortColumn, SortDirection)>) -> String {
    let mark = |column: SortColumn| match sort {
        Some((active, SortDirection::Ascending)) if active == column => "^",
        Some((active, SortDirection::Descending)) if active == column => "v",
        _ => " ",
    };

    format!(
        "  {:>7} {:<width$}{} {:>3}{} {:>8}{} {:>8}{} {:>13}{} {:>13}{} {:>14}{}",
        "id",
        "name",
        mark(SortColumn::Name),
        "lvl",
        mark(SortColumn::Level),
        "supply",
        mark(SortColumn::Supply),
        "demand",
        mark(SortColumn::Demand),
        "min sale",
        mark(SortColumn::MinSale),
        "max buy",
        mark(SortColumn::MaxBuy),
        "margin",
        mark(SortColumn::Margin),
        width = NAME_WIDTH,
    )
}

pub fn row(item: &DisplayItem) -> String {
    format!(
        "{} {:>7} {:<width$}  {:>3}  {:>8}  {:>8}  {:>13}  {:>13}  {:>14} ",
        if item.watched { "*" } else { " " },
        item.id,
        shorten_name(&item.name, NAME_WIDTH),
        item.level,
        item.supply,
        item.demand,
        item.min_sale_coins.to_string(),
        item.max_buy_coins.to_string(),
        item.margin_coins.to_string(),
        width = NAME_WIDTH,
    )
}

pub fn render(items: &[DisplayItem], sort: Option<(SortColumn, SortDirection)>) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(header(sort));
    lines.extend(items.iter().map(row));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Coins;

    fn display_item(watched: bool) -> DisplayItem {
        DisplayItem {
            id: 24,
            name: "Vial of Potent Blood".to_string(),
            image_url: None,
            level: 0,
            rarity_color: "Black",
            supply: 10,
            demand: 20,
            min_sale: 123456,
            min_sale_coins: Coins::from_copper(123456),
            max_buy: 45,
            max_buy_coins: Coins::from_copper(45),
            margin: 104893,
            margin_coins: Coins::from_copper(104893),
            last_changed: None,
            watched,
        }
    }

    #[test]
    fn rows_show_coins_and_watch_marker() {
        let line = row(&display_item(true));
        assert!(line.starts_with('*'));
        assert!(line.contains("12g 34s 56c"));
        assert!(line.contains("45c"));
        assert!(line.contains("10g 48s 93c"));
    }

    #[test]
    fn header_marks_active_sort() {
        let ascending = header(Some((SortColumn::Margin, SortDirection::Ascending)));
        assert!(ascending.trim_end().ends_with("margin^"));

        let descending = header(Some((SortColumn::Name, SortDirection::Descending)));
        assert!(descending.contains(&format!("{:<width$}v", "name", width = NAME_WIDTH)));
    }

    #[test]
    fn render_has_one_line_per_item_plus_header() {
        let table = render(&[display_item(false), display_item(false)], None);
        assert_eq!(table.lines().count(), 3);
    }
}
