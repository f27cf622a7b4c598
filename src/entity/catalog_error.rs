#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Data unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Unknown item type: {0}")]
    UnknownType(i32),

    #[error("Unknown subtype: {0}")]
    UnknownSubtype(i32),

    #[error("Unknown rarity: {0}")]
    UnknownRarity(i32),

    #[error("Select an item type before browsing without a name")]
    NoTypeSelected,
}

impl CatalogError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// True for transport, status and response-shape failures.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
