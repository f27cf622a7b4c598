/// Current conversion rates between gold and gems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GemPrice {
    /// Copper received for 100 gems.
    pub gem_to_gold: i64,
    /// Copper paid for 100 gems.
    pub gold_to_gem: i64,
}
