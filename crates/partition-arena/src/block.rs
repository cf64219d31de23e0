//! Block records.
//!
//! A [`Block`] is a contiguous address range that is either free (a hole)
//! or owned by a named process. Blocks are stored in the arena's slot
//! vector and linked to their address-order neighbours by id.

use partition_core::BlockId;

/// A contiguous address range within the arena.
///
/// `end` is derived from `start` and `size`, so the two can never disagree.
/// The arena guarantees `size > 0` for every linked block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Owning process name; `None` for a hole.
    pub(crate) owner: Option<String>,
    /// First address covered by this block.
    pub(crate) start: u32,
    /// Number of address units covered.
    pub(crate) size: u32,
    /// Lower-address neighbour.
    pub(crate) prev: Option<BlockId>,
    /// Higher-address neighbour.
    pub(crate) next: Option<BlockId>,
}

impl Block {
    /// A free block covering `[start, start + size - 1]` with no neighbours.
    pub(crate) fn hole(start: u32, size: u32) -> Self {
        Self {
            owner: None,
            start,
            size,
            prev: None,
            next: None,
        }
    }

    /// The owning process name, or `None` for a hole.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Whether this block is a hole.
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// First address covered.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last address covered (inclusive).
    pub fn end(&self) -> u32 {
        self.start + self.size - 1
    }

    /// Number of address units covered.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Lower-address neighbour, if any.
    pub fn prev(&self) -> Option<BlockId> {
        self.prev
    }

    /// Higher-address neighbour, if any.
    pub fn next(&self) -> Option<BlockId> {
        self.next
    }

    /// Slack left over if this block served a request of `requested` units.
    ///
    /// `None` when the block is allocated or too small.
    pub fn slack_for(&self, requested: u32) -> Option<u32> {
        if !self.is_free() {
            return None;
        }
        self.size.checked_sub(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_inclusive() {
        let b = Block::hole(70, 30);
        assert_eq!(b.start(), 70);
        assert_eq!(b.end(), 99);
        assert_eq!(b.size(), 30);
    }

    #[test]
    fn slack_only_for_fitting_holes() {
        let mut b = Block::hole(0, 50);
        assert_eq!(b.slack_for(45), Some(5));
        assert_eq!(b.slack_for(50), Some(0));
        assert_eq!(b.slack_for(51), None);

        b.owner = Some("P1".into());
        assert!(!b.is_free());
        assert_eq!(b.slack_for(10), None);
        assert_eq!(b.owner(), Some("P1"));
    }
}
