use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::PackingError;

/// Identifies a packing algorithm. The discriminant is the identifier used in packing requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmType {
    /// First-fit algorithm by E. Baltacioğlu (Air Force Institute of Technology).
    /// Not part of this crate, can be provided through [`AlgorithmRegistry::register`](crate::algorithms::AlgorithmRegistry::register).
    EbAfit = 1,
    /// The greedy pivot-rotation heuristic, see [`PivotPacker`](crate::algorithms::PivotPacker)
    Sharp3dPacking = 2,
}

impl AlgorithmType {
    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmType::EbAfit => "EB_AFIT",
            AlgorithmType::Sharp3dPacking => "Sharp3dPacking",
        }
    }
}

impl TryFrom<u32> for AlgorithmType {
    type Error = PackingError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(AlgorithmType::EbAfit),
            2 => Ok(AlgorithmType::Sharp3dPacking),
            _ => Err(PackingError::InvalidAlgorithm(id)),
        }
    }
}

impl Display for AlgorithmType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
