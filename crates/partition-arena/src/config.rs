//! Arena configuration parameters.

use partition_core::{ArenaError, Strategy};

/// Configuration for a simulated arena.
///
/// Validated at construction; immutable once the arena exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total size of the simulated address space in address units.
    ///
    /// Default: 1_048_576 (1 MiB). Must be non-zero.
    pub total_size: u32,

    /// Strategy used by [`Arena::allocate_default`](crate::Arena::allocate_default).
    ///
    /// Default: [`Strategy::FirstFit`].
    pub default_strategy: Strategy,
}

impl ArenaConfig {
    /// Default total size: 1 MiB of address space.
    pub const DEFAULT_TOTAL_SIZE: u32 = 1_048_576;

    /// Default placement strategy.
    pub const DEFAULT_STRATEGY: Strategy = Strategy::FirstFit;

    /// Create a config for an arena of `total_size` address units.
    pub fn new(total_size: u32) -> Self {
        Self {
            total_size,
            default_strategy: Self::DEFAULT_STRATEGY,
        }
    }

    /// Replace the default placement strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Check that the configuration describes a usable arena.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.total_size == 0 {
            return Err(ArenaError::InvalidSize {
                total_size: self.total_size,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOTAL_SIZE)
    }
}
