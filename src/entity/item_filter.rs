use crate::entity::{CatalogError, Item, ItemType, Rarity, ReferenceData, Subtype};

/// Selection id that stands for "Any" in every selector.
pub const ANY_ID: i32 = -1;

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 80;

/// Type/subtype/rarity/level selections. `None` selections mean "Any".
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFilter {
    item_type: Option<ItemType>,
    subtype: Option<Subtype>,
    rarity: Option<Rarity>,
    min_level: i32,
    max_level: i32,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            item_type: None,
            subtype: None,
            rarity: None,
            // Untouched filters keep level 0 items (no requirement) visible.
            min_level: 0,
            max_level: MAX_LEVEL,
        }
    }
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_type(&self) -> Option<&ItemType> {
        self.item_type.as_ref()
    }

    pub fn subtype(&self) -> Option<&Subtype> {
        self.subtype.as_ref()
    }

    pub fn rarity(&self) -> Option<&Rarity> {
        self.rarity.as_ref()
    }

    /// Subtypes of the selected type; empty while the type is "Any".
    pub fn subtypes(&self) -> &[Subtype] {
        self.item_type
            .as_ref()
            .map(|t| t.subtypes.as_slice())
            .unwrap_or(&[])
    }

    pub fn min_level(&self) -> i32 {
        self.min_level
    }

    pub fn max_level(&self) -> i32 {
        self.max_level
    }

    /// Selecting a type always resets the subtype to "Any".
    pub fn select_type(
        &mut self,
        reference: &ReferenceData,
        type_id: Option<i32>,
    ) -> Result<(), CatalogError> {
        let item_type = match type_id {
            None | Some(ANY_ID) => None,
            Some(id) => Some(
                reference
                    .item_type(id)
                    .cloned()
                    .ok_or(CatalogError::UnknownType(id))?,
            ),
        };

        self.item_type = item_type;
        self.subtype = None;
        Ok(())
    }

    pub fn select_subtype(&mut self, subtype_id: Option<i32>) -> Result<(), CatalogError> {
        let subtype = match subtype_id {
            None | Some(ANY_ID) => None,
            Some(id) => Some(
                self.subtypes()
                    .iter()
                    .find(|s| s.id == id)
                    .cloned()
                    .ok_or(CatalogError::UnknownSubtype(id))?,
            ),
        };

        self.subtype = subtype;
        Ok(())
    }

    pub fn select_rarity(
        &mut self,
        reference: &ReferenceData,
        rarity_id: Option<i32>,
    ) -> Result<(), CatalogError> {
        let rarity = match rarity_id {
            None | Some(ANY_ID) => None,
            Some(id) => Some(
                reference
                    .rarity(id)
                    .cloned()
                    .ok_or(CatalogError::UnknownRarity(id))?,
            ),
        };

        self.rarity = rarity;
        Ok(())
    }

    /// Non-positive values reset to 1; values above the max level stop there.
    pub fn set_min_level(&mut self, level: i32) {
        self.min_level = if level < MIN_LEVEL {
            MIN_LEVEL
        } else {
            level.min(self.max_level)
        };
    }

    /// Values above 80 reset to 80; values below the min level stop there.
    pub fn set_max_level(&mut self, level: i32) {
        self.max_level = if level > MAX_LEVEL {
            MAX_LEVEL
        } else {
            level.max(self.min_level)
        };
    }

    /// Level range and category match. Availability is not considered.
    pub fn matches(&self, item: &Item) -> bool {
        if item.restriction_level < self.min_level || item.restriction_level > self.max_level {
            return false;
        }
        if let Some(item_type) = &self.item_type {
            if item.type_id != item_type.id {
                return false;
            }
        }
        if let Some(subtype) = &self.subtype {
            if item.subtype_id != Some(subtype.id) {
                return false;
            }
        }
        if let Some(rarity) = &self.rarity {
            if item.rarity_id != rarity.id {
                return false;
            }
        }
        true
    }
}
