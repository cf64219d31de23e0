//! The arena: block storage, linking, allocation and teardown.
//!
//! [`Arena`] owns every [`Block`] in a slot vector. Address order is
//! carried by the blocks' `prev`/`next` ids, starting from `head`. Slots
//! vacated by merges and compaction are recycled through `free_slots`.

use indexmap::IndexMap;
use partition_core::{ArenaError, BlockId, RequestDefect, Strategy};
use tracing::debug;

use crate::block::Block;
use crate::config::ArenaConfig;
use crate::placement::{self, Candidate, Fit};

/// A simulated variable-partition address space.
///
/// All mutation goes through `&mut self`; a single caller issues every
/// operation in sequence. Any operation that returns an error leaves the
/// arena unchanged.
#[derive(Debug)]
pub struct Arena {
    config: ArenaConfig,
    /// Block storage. `None` marks a vacated slot awaiting reuse.
    pub(crate) slots: Vec<Option<Block>>,
    /// Vacated slots available to the next split.
    pub(crate) free_slots: Vec<BlockId>,
    /// Lowest-address block.
    pub(crate) head: BlockId,
    /// Live owner name → block, in allocation order.
    pub(crate) owners: IndexMap<String, BlockId>,
}

impl Arena {
    /// Create an arena from a validated configuration.
    ///
    /// The arena starts as a single hole `[0, total_size - 1]`.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let head = BlockId(0);
        debug!(
            total_size = config.total_size,
            strategy = %config.default_strategy,
            "arena initialised"
        );
        Ok(Self {
            slots: vec![Some(Block::hole(0, config.total_size))],
            free_slots: Vec::new(),
            head,
            owners: IndexMap::new(),
            config,
        })
    }

    /// Create an arena of `total_size` units with default settings.
    pub fn init(total_size: u32) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(total_size))
    }

    /// The configuration this arena was built from.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Total size of the address space.
    pub fn total_size(&self) -> u32 {
        self.config.total_size
    }

    /// Id of the lowest-address block.
    pub fn head(&self) -> BlockId {
        self.head
    }

    /// Look up a linked block by id.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Number of linked blocks.
    pub fn block_count(&self) -> usize {
        self.slots.len() - self.free_slots.len()
    }

    /// Number of holes.
    pub fn hole_count(&self) -> usize {
        self.blocks().filter(|(_, b)| b.is_free()).count()
    }

    /// Whether `name` currently owns a block.
    pub fn is_allocated(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    /// Live owner names in allocation order.
    pub fn owners(&self) -> impl Iterator<Item = &str> + '_ {
        self.owners.keys().map(String::as_str)
    }

    /// Iterate over `(id, block)` pairs in address order.
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks {
            arena: self,
            cursor: Some(self.head),
        }
    }

    /// Holes in address order, as placement candidates.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.blocks()
            .filter(|(_, b)| b.is_free())
            .map(|(id, b)| Candidate {
                id,
                start: b.start,
                size: b.size,
            })
    }

    /// Holes that can serve a request of `requested` units, with their
    /// slack, in address order.
    pub fn fits(&self, requested: u32) -> impl Iterator<Item = Fit> + '_ {
        self.blocks().filter_map(move |(id, b)| {
            let slack = b.slack_for(requested)?;
            Some(Fit {
                candidate: Candidate {
                    id,
                    start: b.start,
                    size: b.size,
                },
                slack,
            })
        })
    }

    /// Allocate `size` units to `name`, choosing a hole with `strategy`.
    ///
    /// The block is carved from the tail of the chosen hole. Returns the
    /// id of the new block.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::InvalidRequest`] if `size` is zero, `name` is empty,
    ///   or `name` already owns a block.
    /// - [`ArenaError::OutOfMemory`] if no hole is large enough.
    pub fn allocate(
        &mut self,
        size: u32,
        name: &str,
        strategy: Strategy,
    ) -> Result<BlockId, ArenaError> {
        if let Err(reason) = self.check_request(size, name) {
            debug!(size, name, %reason, "allocation rejected");
            return Err(reason.into());
        }

        let Some(fit) = placement::select(strategy, self.fits(size)) else {
            let largest_hole = self.largest_hole();
            debug!(size, name, %strategy, largest_hole, "allocation failed: out of memory");
            return Err(ArenaError::OutOfMemory {
                requested: size,
                largest_hole,
            });
        };

        let id = self.split(fit.candidate.id, size, name);
        debug!(
            size,
            name,
            %strategy,
            hole = %fit.candidate.id,
            slack = fit.slack,
            block = %id,
            "allocated"
        );
        Ok(id)
    }

    /// Allocate with the configured default strategy.
    pub fn allocate_default(&mut self, size: u32, name: &str) -> Result<BlockId, ArenaError> {
        self.allocate(size, name, self.config.default_strategy)
    }

    /// Release every block and its name storage, consuming the arena.
    ///
    /// Walks the list once from the head without coalescing and returns
    /// the number of blocks released. Dropping the arena frees the same
    /// storage; this exists for callers that want the walk accounted for.
    pub fn teardown(mut self) -> usize {
        let mut released = 0;
        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            let block = self.slots[id.index()]
                .take()
                .expect("linked block id refers to a live slot");
            cursor = block.next;
            released += 1;
        }
        self.owners.clear();
        debug!(released, "arena torn down");
        released
    }

    fn check_request(&self, size: u32, name: &str) -> Result<(), RequestDefect> {
        if size == 0 {
            return Err(RequestDefect::ZeroSize);
        }
        if name.is_empty() {
            return Err(RequestDefect::EmptyName);
        }
        if self.owners.contains_key(name) {
            return Err(RequestDefect::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    // ── slot and link primitives ────────────────────────────────────

    /// Shared access to a block the list links to.
    ///
    /// # Panics
    ///
    /// Panics if `id` names a vacated slot, which would mean the links
    /// are corrupt.
    pub(crate) fn block(&self, id: BlockId) -> &Block {
        self.slots[id.index()]
            .as_ref()
            .expect("linked block id refers to a live slot")
    }

    /// Mutable access to a block the list links to.
    pub(crate) fn block_mut(&mut self, id: BlockId) -> &mut Block {
        self.slots[id.index()]
            .as_mut()
            .expect("linked block id refers to a live slot")
    }

    /// Store `block`, reusing a vacated slot when one exists.
    pub(crate) fn insert_slot(&mut self, block: Block) -> BlockId {
        if let Some(id) = self.free_slots.pop() {
            self.slots[id.index()] = Some(block);
            id
        } else {
            let id = BlockId(self.slots.len() as u32);
            self.slots.push(Some(block));
            id
        }
    }

    /// Remove `id` from the list, relinking its neighbours, and vacate its slot.
    ///
    /// Returns the removed block with its links cleared.
    pub(crate) fn unlink(&mut self, id: BlockId) -> Block {
        let (prev, next) = {
            let b = self.block(id);
            (b.prev, b.next)
        };
        match prev {
            Some(p) => self.block_mut(p).next = next,
            None => {
                if let Some(n) = next {
                    self.head = n;
                }
            }
        }
        if let Some(n) = next {
            self.block_mut(n).prev = prev;
        }

        let mut block = self.slots[id.index()]
            .take()
            .expect("linked block id refers to a live slot");
        self.free_slots.push(id);
        block.prev = None;
        block.next = None;
        block
    }

    /// Size of the largest hole, or 0 if there are none.
    pub(crate) fn largest_hole(&self) -> u32 {
        self.candidates().map(|c| c.size).max().unwrap_or(0)
    }
}

/// Address-order iterator over an arena's blocks.
///
/// Created by [`Arena::blocks`].
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    arena: &'a Arena,
    cursor: Option<BlockId>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = (BlockId, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let block = self.arena.block(id);
        self.cursor = block.next;
        Some((id, block))
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(arena: &Arena) -> Vec<(u32, u32, Option<String>)> {
        arena
            .blocks()
            .map(|(_, b)| (b.start(), b.end(), b.owner().map(str::to_string)))
            .collect()
    }

    #[test]
    fn init_creates_single_hole() {
        let arena = Arena::init(100).unwrap();
        assert_eq!(layout(&arena), vec![(0, 99, None)]);
        assert_eq!(arena.block_count(), 1);
        assert_eq!(arena.hole_count(), 1);
        let head = arena.get(arena.head()).unwrap();
        assert!(head.prev().is_none() && head.next().is_none());
    }

    #[test]
    fn init_rejects_zero_size() {
        let err = Arena::init(0).unwrap_err();
        assert_eq!(err, ArenaError::InvalidSize { total_size: 0 });
    }

    #[test]
    fn allocation_carves_from_the_tail() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(30, "P1", Strategy::FirstFit).unwrap();
        assert_eq!(
            layout(&arena),
            vec![(0, 69, None), (70, 99, Some("P1".into()))]
        );
    }

    #[test]
    fn out_of_memory_leaves_arena_unchanged() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(30, "P1", Strategy::FirstFit).unwrap();
        let before = layout(&arena);

        let err = arena.allocate(80, "P2", Strategy::FirstFit).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                requested: 80,
                largest_hole: 70
            }
        );
        assert_eq!(layout(&arena), before);
        assert!(!arena.is_allocated("P2"));
    }

    #[test]
    fn invalid_requests_are_rejected_before_search() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(10, "P1", Strategy::FirstFit).unwrap();
        let before = layout(&arena);

        assert_eq!(
            arena.allocate(0, "P2", Strategy::BestFit).unwrap_err(),
            ArenaError::InvalidRequest {
                reason: RequestDefect::ZeroSize
            }
        );
        assert_eq!(
            arena.allocate(5, "", Strategy::BestFit).unwrap_err(),
            ArenaError::InvalidRequest {
                reason: RequestDefect::EmptyName
            }
        );
        assert_eq!(
            arena.allocate(5, "P1", Strategy::WorstFit).unwrap_err(),
            ArenaError::InvalidRequest {
                reason: RequestDefect::DuplicateName { name: "P1".into() }
            }
        );
        assert_eq!(layout(&arena), before);
    }

    #[test]
    fn released_name_can_be_reused() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(10, "P1", Strategy::FirstFit).unwrap();
        arena.release("P1").unwrap();
        assert!(arena.allocate(10, "P1", Strategy::FirstFit).is_ok());
    }

    #[test]
    fn allocate_default_uses_configured_strategy() {
        let config = ArenaConfig::new(100).with_strategy(Strategy::BestFit);
        let mut arena = Arena::new(config).unwrap();
        arena.allocate(20, "A", Strategy::FirstFit).unwrap();
        arena.allocate(20, "B", Strategy::FirstFit).unwrap();
        arena.allocate(20, "C", Strategy::FirstFit).unwrap();
        // B sits between C and A, so it becomes a standalone 20-unit hole
        // next to the 40-unit hole at the front.
        arena.release("B").unwrap();

        let id = arena.allocate_default(20, "D").unwrap();
        let d = arena.get(id).unwrap();
        assert_eq!((d.start(), d.end()), (60, 79));
    }

    #[test]
    fn owners_follow_allocation_order() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(10, "b", Strategy::FirstFit).unwrap();
        arena.allocate(10, "a", Strategy::FirstFit).unwrap();
        arena.allocate(10, "c", Strategy::FirstFit).unwrap();
        arena.release("a").unwrap();
        assert_eq!(arena.owners().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn teardown_visits_every_block_once() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(10, "A", Strategy::FirstFit).unwrap();
        arena.allocate(10, "B", Strategy::FirstFit).unwrap();
        arena.allocate(10, "C", Strategy::FirstFit).unwrap();
        arena.release("B").unwrap();
        let count = arena.block_count();
        assert_eq!(arena.teardown(), count);
    }

    #[test]
    fn teardown_of_fresh_arena_releases_one_block() {
        assert_eq!(Arena::init(1).unwrap().teardown(), 1);
    }

    #[test]
    fn fits_skip_allocated_and_undersized_blocks() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(10, "A", Strategy::FirstFit).unwrap();
        arena.allocate(10, "B", Strategy::FirstFit).unwrap();
        arena.allocate(30, "C", Strategy::FirstFit).unwrap();
        arena.release("B").unwrap();
        // Hole [0,49], C [50,79], hole [80,89], A [90,99].
        let fits: Vec<(u32, u32)> = arena
            .fits(10)
            .map(|f| (f.candidate.start, f.slack))
            .collect();
        assert_eq!(fits, vec![(0, 40), (80, 0)]);

        let fits: Vec<u32> = arena.fits(11).map(|f| f.candidate.start).collect();
        assert_eq!(fits, vec![0]);
        assert_eq!(arena.fits(51).count(), 0);
    }

    #[test]
    fn teardown_after_churn_counts_each_block() {
        let mut arena = Arena::init(100).unwrap();
        for name in ["A", "B", "C", "D"] {
            arena.allocate(10, name, Strategy::FirstFit).unwrap();
        }
        arena.release("B").unwrap();
        arena.release("C").unwrap();
        arena.compact();
        // Hole [0,79], D, A.
        assert_eq!(arena.block_count(), 3);
        assert_eq!(arena.teardown(), 3);
    }

    #[test]
    fn candidates_are_holes_in_address_order() {
        let mut arena = Arena::init(100).unwrap();
        arena.allocate(10, "A", Strategy::FirstFit).unwrap();
        arena.allocate(10, "B", Strategy::FirstFit).unwrap();
        arena.release("A").unwrap();
        let starts: Vec<u32> = arena.candidates().map(|c| c.start).collect();
        assert_eq!(starts, vec![0, 90]);
    }
}
