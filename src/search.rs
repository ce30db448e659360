use crate::error::{Error, Result};
use crate::game_tree::{GameTree, Score};

/// Accumulators and alpha/beta bounds are kept in a type wider than [`Score`], so the
/// infinity sentinels below can never be mistaken for a real leaf value.
pub(crate) type Wide = i64;

pub(crate) const NEG_INFINITY: Wide = Wide::MIN;
pub(crate) const POS_INFINITY: Wide = Wide::MAX;

/// Narrows an accumulator back to a [`Score`].
///
/// An internal node always folds at least one child, so the accumulator holds a real value
/// by the time it is narrowed.
pub(crate) fn narrow(value: Wide) -> Result<Score> {
    Score::try_from(value).map_err(|_| Error::ScoreOutOfRange { value })
}

/// The result of one search over a [`GameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The game value computed for the root.
    pub value: Score,
    /// The number of nodes visited, the root and leaves included.
    pub expanded_nodes: u64,
    /// How many times the remaining children of a node were skipped.
    pub cutoffs: u64,
}

/// A search algorithm computing the game value of a tree.
///
/// Implementations write the value they compute for every visited node into the tree and
/// keep no state between calls.
pub trait Search {
    /// A human readable name, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Evaluates `tree` from its root.
    fn evaluate(&self, tree: &mut GameTree) -> Result<SearchOutcome>;
}
