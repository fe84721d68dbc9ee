use serde::{Deserialize, Serialize};

/// Configuration of a packing run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackingConfig {
    /// Configuration of the pivot heuristic
    #[serde(default)]
    pub pivot_config: PivotConfig,
}

///Configuration of the [`PivotPacker`](crate::algorithms::PivotPacker)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PivotConfig {
    ///If some items remain unfitted after packing them smallest first, retry biggest first and keep the best of both
    pub two_pass: bool,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            two_pass: cfg!(feature = "two-pass"),
        }
    }
}
