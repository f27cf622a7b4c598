use crate::entity::{ItemType, Rarity};

/// Item types and rarities fetched once at startup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    types: Vec<ItemType>,
    rarities: Vec<Rarity>,
}

impl ReferenceData {
    /// The synthetic "Any" rarity is placed in front of `rarities`.
    pub fn new(types: Vec<ItemType>, rarities: Vec<Rarity>) -> Self {
        let mut all_rarities = Vec::with_capacity(rarities.len() + 1);
        all_rarities.push(Rarity::any());
        all_rarities.extend(rarities.into_iter().filter(|r| !r.is_any()));

        Self {
            types,
            rarities: all_rarities,
        }
    }

    pub fn types(&self) -> &[ItemType] {
        &self.types
    }

    pub fn item_type(&self, type_id: i32) -> Option<&ItemType> {
        self.types.iter().find(|t| t.id == type_id)
    }

    /// All rarities, starting with "Any".
    pub fn rarities(&self) -> &[Rarity] {
        &self.rarities
    }

    /// A fetched rarity; never the synthetic "Any" entry.
    pub fn rarity(&self, rarity_id: i32) -> Option<&Rarity> {
        self.rarities
            .iter()
            .find(|r| r.id == rarity_id && !r.is_any())
    }
}
