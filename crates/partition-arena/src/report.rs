//! Read-only views of the arena layout.
//!
//! [`Report`] is a lazy, restartable iterator of [`Region`]s in address
//! order. It borrows the arena, so the layout cannot change while a
//! report is alive. Its `Display` impl prints one line per region:
//!
//! ```text
//! Addresses [0:69] Unused
//! Addresses [70:99] Process P1
//! ```

use std::fmt;
use std::iter::FusedIterator;

use partition_core::BlockId;

use crate::arena::Arena;
use crate::block::Block;

/// One address range in a [`Report`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region<'a> {
    /// First address (inclusive).
    pub start: u32,
    /// Last address (inclusive).
    pub end: u32,
    /// Owning process, or `None` for a hole.
    pub occupant: Option<&'a str>,
}

impl<'a> Region<'a> {
    fn of(block: &'a Block) -> Self {
        Self {
            start: block.start(),
            end: block.end(),
            occupant: block.owner(),
        }
    }

    /// Number of address units covered.
    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Whether this region is a hole.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

impl fmt::Display for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addresses [{}:{}] ", self.start, self.end)?;
        match self.occupant {
            Some(name) => write!(f, "Process {name}"),
            None => write!(f, "Unused"),
        }
    }
}

/// Address-order snapshot of an arena.
///
/// Created by [`Arena::report`]. Clone it to iterate again from the start.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    arena: &'a Arena,
    cursor: Option<BlockId>,
}

impl<'a> Iterator for Report<'a> {
    type Item = Region<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let block = self.arena.block(id);
        debug_assert!(block.size() > 0, "zero-size block {id} left linked");
        self.cursor = block.next();
        Some(Region::of(block))
    }
}

impl FusedIterator for Report<'_> {}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for region in self.clone() {
            writeln!(f, "{region}")?;
        }
        Ok(())
    }
}

impl Arena {
    /// Snapshot the layout as `(start, end, occupant)` regions.
    pub fn report(&self) -> Report<'_> {
        Report {
            arena: self,
            cursor: Some(self.head),
        }
    }

    /// The region owned by `name`, if it is allocated.
    pub fn find(&self, name: &str) -> Option<Region<'_>> {
        let &id = self.owners.get(name)?;
        Some(Region::of(self.block(id)))
    }
}
