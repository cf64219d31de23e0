//! Hole selection for the three placement strategies.
//!
//! Selection is a pure function over the holes that can serve a request,
//! in address order. It never mutates anything: the arena splits the
//! chosen hole afterwards.

use partition_core::{BlockId, Strategy};

/// A hole considered during placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The hole's block id.
    pub id: BlockId,
    /// First address of the hole.
    pub start: u32,
    /// Size of the hole.
    pub size: u32,
}

/// A candidate that can satisfy the request, with its slack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fit {
    /// The qualifying hole.
    pub candidate: Candidate,
    /// `candidate.size - requested`.
    pub slack: u32,
}

/// Choose one of `fits` under `strategy`.
///
/// `fits` must be yielded in address order and hold only holes that can
/// serve the request (see [`Arena::fits`](crate::Arena::fits)). Strategies
/// that exit early take the first fit without pulling further items. The
/// others scan everything and keep the earlier fit on equal slack, so ties
/// resolve to the lowest address. `None` means nothing fits.
pub fn select<I>(strategy: Strategy, fits: I) -> Option<Fit>
where
    I: IntoIterator<Item = Fit>,
{
    let mut fits = fits.into_iter();
    if strategy.exits_early() {
        return fits.next();
    }
    fits.reduce(|kept, fit| if keeps(strategy, &kept, &fit) { kept } else { fit })
}

/// Whether `kept`, found earlier, beats `fit` under `strategy`.
fn keeps(strategy: Strategy, kept: &Fit, fit: &Fit) -> bool {
    match strategy {
        Strategy::FirstFit => true,
        Strategy::BestFit => kept.slack <= fit.slack,
        Strategy::WorstFit => kept.slack >= fit.slack,
    }
}
