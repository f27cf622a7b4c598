use crate::entity::Coins;

/// Marketplace cut taken from every sale, in percent.
pub const SALE_TAX_PERCENT: i64 = 15;

// Font color used for an item's rarity
pub fn rarity_color(rarity_id: i32) -> &'static str {
    match rarity_id {
        0 | 1 => "Black",
        2 => "DodgerBlue",
        3 => "LimeGreen",
        4 => "Goldenrod",
        5 => "DarkOrange",
        6 => "DeepPink",
        7 => "Purple",
        _ => "Black",
    }
}

/// Profit from buying at `max_buy` and relisting at `min_sale` after tax.
///
/// `floor(min_sale * 0.85) - max_buy`, kept in integer arithmetic so the
/// result never depends on float rounding. Computed in i128 and clamped to
/// the i64 range.
pub fn margin(min_sale: i64, max_buy: i64) -> i64 {
    let after_tax = (i128::from(min_sale) * i128::from(100 - SALE_TAX_PERCENT)).div_euclid(100);
    let margin = after_tax - i128::from(max_buy);
    margin.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Split a copper amount into gold/silver/copper digit groups.
///
/// Copper takes the last two decimal digits, silver the two before and gold
/// whatever leads. Denominations the amount doesn't reach stay empty, and a
/// negative amount carries its sign on the leading group.
pub fn split_coins(value: i64) -> Coins {
    let digits = value.unsigned_abs().to_string();
    let len = digits.len();

    let (gold, silver, copper) = match len {
        0..=2 => ("", "", digits.as_str()),
        3..=4 => ("", &digits[..len - 2], &digits[len - 2..]),
        _ => (&digits[..len - 4], &digits[len - 4..len - 2], &digits[len - 2..]),
    };

    let mut coins = Coins {
        gold: gold.to_string(),
        silver: silver.to_string(),
        copper: copper.to_string(),
    };

    if value < 0 {
        let leading = if !coins.gold.is_empty() {
            &mut coins.gold
        } else if !coins.silver.is_empty() {
            &mut coins.silver
        } else {
            &mut coins.copper
        };
        leading.insert(0, '-');
    }

    coins
}

// Shorten a name to fit a fixed-width column
pub fn shorten_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }

    let keep = width.saturating_sub(3);
    let head: String = name.chars().take(keep).collect();
    format!("{}...", head)
}
