use crate::entity::ANY_ID;
use crate::utils::rarity_color;

/// A rarity tier. The synthetic "Any" entry carries [`ANY_ID`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rarity {
    pub id: i32,
    pub name: String,
    pub color: &'static str,
}

impl Rarity {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: rarity_color(id),
        }
    }

    pub fn any() -> Self {
        Self::new(ANY_ID, "Any")
    }

    pub fn is_any(&self) -> bool {
        self.id == ANY_ID
    }
}
