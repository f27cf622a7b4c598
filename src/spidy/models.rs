// Wire format of the gw2spidy v0.9 JSON API
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::entity::{GemPrice, Item, ItemListing, ItemType, Rarity, Subtype};

/// `{"results": [...]}` envelope used by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope<T> {
    pub results: Vec<T>,
}

/// `{"result": {...}}` envelope used by the single-record endpoints.
#[derive(Debug, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

/// One page of a paginated listing.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub page: i64,
    #[serde(deserialize_with = "lenient_int::deserialize")]
    pub last_page: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub total: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct SpidyType {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub subtypes: Vec<SpidySubtype>,
}

#[derive(Debug, Deserialize)]
pub struct SpidySubtype {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SpidyRarity {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SpidyItem {
    pub data_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub rarity: i32,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub restriction_level: i32,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub type_id: i32,
    #[serde(default)]
    pub sub_type_id: Option<i32>,
    #[serde(default)]
    pub price_last_changed: Option<String>,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub max_offer_unit_price: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub min_sale_unit_price: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub offer_availability: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub sale_availability: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub sale_price_change_last_hour: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub offer_price_change_last_hour: i64,
}

#[derive(Debug, Deserialize)]
pub struct SpidyGemPrice {
    #[serde(deserialize_with = "lenient_int::deserialize")]
    pub gem_to_gold: i64,
    #[serde(deserialize_with = "lenient_int::deserialize")]
    pub gold_to_gem: i64,
}

#[derive(Debug, Deserialize)]
pub struct SpidyListing {
    #[serde(default)]
    pub listing_datetime: Option<String>,
    #[serde(deserialize_with = "lenient_int::deserialize")]
    pub unit_price: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient_int::deserialize")]
    pub listings: i64,
}

/// Parse the service's `"2014-06-13 20:16:45 UTC"` timestamps.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim().trim_end_matches("UTC").trim_end();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

impl From<SpidyType> for ItemType {
    fn from(t: SpidyType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            subtypes: t
                .subtypes
                .into_iter()
                .map(|s| Subtype {
                    id: s.id,
                    name: s.name,
                })
                .collect(),
        }
    }
}

impl From<SpidyRarity> for Rarity {
    fn from(r: SpidyRarity) -> Self {
        Rarity::new(r.id, r.name)
    }
}

impl From<SpidyItem> for Item {
    fn from(i: SpidyItem) -> Self {
        Self {
            id: i.data_id,
            name: i.name,
            rarity_id: i.rarity,
            restriction_level: i.restriction_level,
            image_url: i.img.filter(|url| !url.is_empty()),
            type_id: i.type_id,
            subtype_id: i.sub_type_id,
            price_last_changed: i.price_last_changed.as_deref().and_then(parse_timestamp),
            max_offer_price: i.max_offer_unit_price,
            min_sale_price: i.min_sale_unit_price,
            offer_availability: i.offer_availability,
            sale_availability: i.sale_availability,
            sale_change_pct: i.sale_price_change_last_hour,
            offer_change_pct: i.offer_price_change_last_hour,
        }
    }
}

impl From<SpidyGemPrice> for GemPrice {
    fn from(g: SpidyGemPrice) -> Self {
        Self {
            gem_to_gold: g.gem_to_gold,
            gold_to_gem: g.gold_to_gem,
        }
    }
}

impl From<SpidyListing> for ItemListing {
    fn from(l: SpidyListing) -> Self {
        Self {
            listed_at: l.listing_datetime.as_deref().and_then(parse_timestamp),
            unit_price: l.unit_price,
            quantity: l.quantity,
            listings: l.listings,
        }
    }
}

// Integers that sometimes arrive as floats, numeric strings or null.
// Values that don't fit the target type are a shape error, never truncated.
pub mod lenient_int {
    use serde::{self, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64>,
    {
        let value = deserializer.deserialize_any(LenientInt)?;
        T::try_from(value)
            .map_err(|_| serde::de::Error::custom(format!("integer {} out of range", value)))
    }

    fn from_float<E>(value: f64) -> Result<i64, E>
    where
        E: serde::de::Error,
    {
        // i64::MAX as f64 rounds up to 2^63, which no longer fits
        if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(E::custom(format!("number {} out of range", value)));
        }
        Ok(value.trunc() as i64)
    }

    struct LenientInt;

    impl<'de> serde::de::Visitor<'de> for LenientInt {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a float, a numeric string or null")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i64::try_from(value).map_err(serde::de::Error::custom)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            from_float(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let value = value.trim();
            if value.is_empty() {
                return Ok(0);
            }
            match value.parse::<i64>() {
                Ok(parsed) => Ok(parsed),
                Err(_) => value
                    .parse::<f64>()
                    .map_err(serde::de::Error::custom)
                    .and_then(from_float),
            }
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_page() {
        let json = r#"{
            "count": 2, "page": 1, "last_page": 3, "total": 7,
            "results": [{
                "data_id": 19684, "name": "Mithril Ingot", "rarity": 1,
                "restriction_level": 0, "img": "https://render.example/19684.png",
                "type_id": 5, "sub_type_id": 0,
                "price_last_changed": "2014-06-13 20:16:45 UTC",
                "max_offer_unit_price": 48, "min_sale_unit_price": 57,
                "offer_availability": 2090134, "sale_availability": 301402,
                "sale_price_change_last_hour": 0, "offer_price_change_last_hour": 2.5
            }]
        }"#;

        let page: Page<SpidyItem> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.total, 7);

        let item = Item::from(page.results.into_iter().next().unwrap());
        assert_eq!(item.id, 19684);
        assert_eq!(item.subtype_id, Some(0));
        assert_eq!(item.offer_change_pct, 2);
        assert_eq!(item.margin(), 48 - 48);
        assert_eq!(
            item.price_last_changed.map(|t| t.to_rfc3339()),
            Some("2014-06-13T20:16:45+00:00".to_string())
        );
    }

    #[test]
    fn tolerates_null_and_string_numbers() {
        let json = r#"{
            "data_id": 1, "name": "Odd", "rarity": "3", "restriction_level": null,
            "img": "", "type_id": 2, "sub_type_id": null, "price_last_changed": "garbage",
            "max_offer_unit_price": 0, "min_sale_unit_price": "1200"
        }"#;

        let item = Item::from(serde_json::from_str::<SpidyItem>(json).unwrap());
        assert_eq!(item.rarity_id, 3);
        assert_eq!(item.restriction_level, 0);
        assert_eq!(item.min_sale_price, 1200);
        assert_eq!(item.image_url, None);
        assert_eq!(item.subtype_id, None);
        assert_eq!(item.price_last_changed, None);
        assert_eq!(item.sale_availability, 0);
    }

    #[test]
    fn parses_types_with_nested_subtypes() {
        let json = r#"{"results": [
            {"id": 0, "name": "Armor", "subtypes": [{"id": 0, "name": "Coat"}, {"id": 1, "name": "Leggings"}]},
            {"id": 3, "name": "Consumable"}
        ]}"#;

        let envelope: ResultsEnvelope<SpidyType> = serde_json::from_str(json).unwrap();
        let types: Vec<ItemType> = envelope.results.into_iter().map(ItemType::from).collect();
        assert_eq!(types[0].subtypes.len(), 2);
        assert_eq!(types[0].subtype(1).map(|s| s.name.as_str()), Some("Leggings"));
        assert!(types[1].subtypes.is_empty());
    }

    #[test]
    fn rarities_derive_colors() {
        let json = r#"{"results": [{"id": 2, "name": "Fine"}, {"id": 7, "name": "Legendary"}]}"#;

        let envelope: ResultsEnvelope<SpidyRarity> = serde_json::from_str(json).unwrap();
        let rarities: Vec<Rarity> = envelope.results.into_iter().map(Rarity::from).collect();
        assert_eq!(rarities[0].color, "DodgerBlue");
        assert_eq!(rarities[1].color, "Purple");
    }

    #[test]
    fn parses_gem_price() {
        let json = r#"{"result": {"gem_to_gold": 1733, "gold_to_gem": 2312}}"#;

        let envelope: ResultEnvelope<SpidyGemPrice> = serde_json::from_str(json).unwrap();
        let gems = GemPrice::from(envelope.result);
        assert_eq!(gems.gem_to_gold, 1733);
        assert_eq!(gems.gold_to_gem, 2312);
    }

    #[test]
    fn oversized_prices_are_a_shape_error() {
        let item = |price: &str| {
            format!(
                r#"{{"data_id": 1, "name": "Odd", "min_sale_unit_price": {}}}"#,
                price
            )
        };

        assert!(serde_json::from_str::<SpidyItem>(&item("1e20")).is_err());
        assert!(serde_json::from_str::<SpidyItem>(&item(r#""1e20""#)).is_err());
        assert!(serde_json::from_str::<SpidyItem>(&item("-1e20")).is_err());

        let fits = serde_json::from_str::<SpidyItem>(&item("1.5e3")).unwrap();
        assert_eq!(fits.min_sale_unit_price, 1500);
    }

    #[test]
    fn out_of_range_level_and_rarity_are_rejected() {
        let level = r#"{"data_id": 1, "name": "Odd", "restriction_level": 4294967306}"#;
        assert!(serde_json::from_str::<SpidyItem>(level).is_err());

        let rarity = r#"{"data_id": 1, "name": "Odd", "rarity": "4294967298"}"#;
        assert!(serde_json::from_str::<SpidyItem>(rarity).is_err());

        let type_id = r#"{"data_id": 1, "name": "Odd", "type_id": -3000000000}"#;
        assert!(serde_json::from_str::<SpidyItem>(type_id).is_err());
    }

    #[test]
    fn missing_last_page_is_a_shape_error() {
        let json = r#"{"results": []}"#;
        assert!(serde_json::from_str::<Page<SpidyItem>>(json).is_err());
    }
}
