//! Occupancy and fragmentation statistics.

use std::fmt;

use crate::arena::Arena;

/// Point-in-time occupancy summary of an arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Total address units in the arena.
    pub total_size: u32,
    /// Units owned by processes.
    pub used: u32,
    /// Units in holes.
    pub free: u32,
    /// Linked blocks, allocated and free.
    pub blocks: usize,
    /// Number of holes.
    pub holes: usize,
    /// Size of the largest hole (0 if none).
    pub largest_hole: u32,
}

impl ArenaStats {
    /// Share of free space that the largest hole cannot serve.
    ///
    /// 0.0 when all free space is one hole (or there is none); approaches
    /// 1.0 as free space splinters into many small holes.
    pub fn external_fragmentation(&self) -> f64 {
        if self.free == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.largest_hole) / f64::from(self.free)
    }

    /// Fraction of the arena owned by processes.
    pub fn utilisation(&self) -> f64 {
        if self.total_size == 0 {
            return 0.0;
        }
        f64::from(self.used) / f64::from(self.total_size)
    }
}

impl fmt::Display for ArenaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} used, {} holes (largest {}), fragmentation {:.2}",
            self.used,
            self.total_size,
            self.holes,
            self.largest_hole,
            self.external_fragmentation()
        )
    }
}

impl Arena {
    /// Summarise occupancy in one pass over the list.
    pub fn stats(&self) -> ArenaStats {
        let mut stats = ArenaStats {
            total_size: self.total_size(),
            ..ArenaStats::default()
        };
        for (_, block) in self.blocks() {
            stats.blocks += 1;
            if block.is_free() {
                stats.holes += 1;
                stats.free += block.size();
                stats.largest_hole = stats.largest_hole.max(block.size());
            } else {
                stats.used += block.size();
            }
        }
        stats
    }
}
