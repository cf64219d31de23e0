//! Placement strategies.
//!
//! A [`Strategy`] decides which hole satisfies an allocation request. It is
//! a closed enumeration: external tags (text or the legacy numeric codes)
//! are validated once, at the boundary, and unknown tags never reach the
//! placement search.

use std::fmt;
use std::str::FromStr;

use crate::error::ArenaError;

/// Policy used to choose a free block for an allocation request.
///
/// Only holes at least as large as the request are candidates. `slack` is
/// the candidate's size minus the requested size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// First candidate in address order.
    #[default]
    FirstFit,
    /// Candidate with the least slack; ties go to the lowest address.
    BestFit,
    /// Candidate with the most slack; ties go to the lowest address.
    WorstFit,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::FirstFit, Strategy::BestFit, Strategy::WorstFit];

    /// Legacy numeric tag for best-fit.
    pub const BEST_FIT_CODE: u32 = 600;
    /// Legacy numeric tag for worst-fit.
    pub const WORST_FIT_CODE: u32 = 700;
    /// Legacy numeric tag for first-fit.
    pub const FIRST_FIT_CODE: u32 = 800;

    /// The legacy numeric tag for this strategy.
    pub fn code(self) -> u32 {
        match self {
            Self::FirstFit => Self::FIRST_FIT_CODE,
            Self::BestFit => Self::BEST_FIT_CODE,
            Self::WorstFit => Self::WORST_FIT_CODE,
        }
    }

    /// Stable kebab-case name, as printed by `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstFit => "first-fit",
            Self::BestFit => "best-fit",
            Self::WorstFit => "worst-fit",
        }
    }

    /// Whether the search may stop at the first candidate.
    ///
    /// Best- and worst-fit must scan the whole list since a better slack
    /// can appear later.
    pub fn exits_early(self) -> bool {
        matches!(self, Self::FirstFit)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ArenaError;

    /// Accepts `first-fit`, `first_fit`, `firstfit` or `first` (and the
    /// best/worst equivalents), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalised.as_str() {
            "first" | "firstfit" => Ok(Self::FirstFit),
            "best" | "bestfit" => Ok(Self::BestFit),
            "worst" | "worstfit" => Ok(Self::WorstFit),
            _ => Err(ArenaError::InvalidStrategy { tag: s.to_string() }),
        }
    }
}

impl TryFrom<u32> for Strategy {
    type Error = ArenaError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            Self::FIRST_FIT_CODE => Ok(Self::FirstFit),
            Self::BEST_FIT_CODE => Ok(Self::BestFit),
            Self::WORST_FIT_CODE => Ok(Self::WorstFit),
            other => Err(ArenaError::InvalidStrategy {
                tag: other.to_string(),
            }),
        }
    }
}
