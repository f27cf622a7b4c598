/// A category of item, e.g. Armor or Crafting Material.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemType {
    pub id: i32,
    pub name: String,
    pub subtypes: Vec<Subtype>,
}

impl ItemType {
    pub fn subtype(&self, subtype_id: i32) -> Option<&Subtype> {
        self.subtypes.iter().find(|s| s.id == subtype_id)
    }
}

/// A subdivision of an item type, e.g. Armor / Helm.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtype {
    pub id: i32,
    pub name: String,
}
