use core::cmp::Ordering;

use crate::bigint::BigNumber;

impl BigNumber {
    /// Strictly less than.
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }
}

impl Ord for BigNumber {
    // Block count decides first; this is sound only because values are
    // canonical. Equal counts compare most significant block down.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.blocks.len().cmp(&other.blocks.len()) {
            Ordering::Equal => {}
            order => return order,
        }
        for (a, b) in self.blocks.iter().rev().zip(other.blocks.iter().rev()) {
            match a.value().cmp(&b.value()) {
                Ordering::Equal => {}
                order => return order,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
