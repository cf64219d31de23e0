//! Strongly-typed block identifiers.

use std::fmt;

/// Identifies a block slot within an arena.
///
/// Ids index the arena's slot storage, not the address space. A slot
/// vacated by a merge or compaction is recycled by a later split, so an id
/// is only meaningful while the block it names is still linked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl BlockId {
    /// The slot index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BlockId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_raw_value() {
        assert_eq!(BlockId(7).index(), 7);
        assert_eq!(BlockId::from(3), BlockId(3));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(BlockId(42).to_string(), "42");
    }
}
