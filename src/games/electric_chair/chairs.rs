//! Chair identifiers and the shrinking chair pool.

use std::fmt;

use crate::tree::game::Action;

/// A chair, identified by its face value (1..=63).
pub type Chair = u8;

/// Largest chair id a [`ChairSet`] can hold.
pub const MAX_CHAIR: Chair = 63;

impl Action for Chair {
    fn label(&self) -> String {
        format!("{}", self)
    }
}

/// A set of chairs stored as a bitmask (bit `c` set ⇔ chair `c` present).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChairSet(u64);

impl ChairSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Chairs `1..=n`.
    ///
    /// # Panics
    /// Panics if `n` exceeds [`MAX_CHAIR`].
    pub fn full(n: u8) -> Self {
        assert!(n <= MAX_CHAIR, "at most {} chairs are supported", MAX_CHAIR);
        (1..=n).collect()
    }

    /// Raw bitmask.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Whether `chair` is in the set.
    pub fn contains(self, chair: Chair) -> bool {
        chair <= MAX_CHAIR && self.0 & (1u64 << chair) != 0
    }

    /// A copy of this set with `chair` added.
    pub fn with(self, chair: Chair) -> Self {
        assert!(chair <= MAX_CHAIR, "chair {} out of range", chair);
        Self(self.0 | (1u64 << chair))
    }

    /// A copy of this set with `chair` removed.
    pub fn without(self, chair: Chair) -> Self {
        if chair > MAX_CHAIR {
            return self;
        }
        Self(self.0 & !(1u64 << chair))
    }

    /// Number of chairs in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every chair of `self` is also in `other`.
    pub fn is_subset(self, other: ChairSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Sum of the face values in the set.
    pub fn total(self) -> u32 {
        self.iter().map(u32::from).sum()
    }

    /// Chairs in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Chair> {
        let bits = self.0;
        (0..=MAX_CHAIR).filter(move |&c| bits & (1u64 << c) != 0)
    }
}

impl FromIterator<Chair> for ChairSet {
    fn from_iter<I: IntoIterator<Item = Chair>>(iter: I) -> Self {
        iter.into_iter().fold(ChairSet::empty(), ChairSet::with)
    }
}

impl fmt::Debug for ChairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ChairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chairs: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        write!(f, "{{{}}}", chairs.join(","))
    }
}
