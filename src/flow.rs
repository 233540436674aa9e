use std::fmt::Debug;

use num::Signed;

/// Quantity of flow carried on an edge. Signed, because the ledger records
/// net flow per ordered vertex pair and the reverse pair goes negative.
pub trait Flow: Copy + PartialOrd + Signed + Debug {}

impl<T> Flow for T where T: Copy + PartialOrd + Signed + Debug {}
