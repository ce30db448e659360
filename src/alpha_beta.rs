use crate::error::Result;
use crate::game_tree::{GameTree, Score};
use crate::search::{NEG_INFINITY, POS_INFINITY, Search, SearchOutcome, Wide, narrow};
use ego_tree::NodeId;
use tracing::{debug, trace};

/// Minimax with alpha-beta pruning.
///
/// Returns the same root value as [`Minimax`](crate::minimax::Minimax) while visiting at most
/// as many nodes. Children are visited in declaration order; once `beta <= alpha` at a node,
/// its remaining children are skipped and keep no computed value.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBeta;

impl AlphaBeta {
    pub fn new() -> Self {
        AlphaBeta
    }
}

/// Per-call counters.
#[derive(Default)]
struct AlphaBetaRun {
    nodes: u64,
    cutoffs: u64,
}

impl AlphaBetaRun {
    fn alphabeta(
        &mut self,
        tree: &mut GameTree,
        id: NodeId,
        mut alpha: Wide,
        mut beta: Wide,
    ) -> Result<Score> {
        self.nodes += 1;

        let node = tree.node(id)?;
        trace!(node = ?id, alpha, beta, "alpha-beta visit");
        if node.is_leaf() {
            return node.value();
        }

        let maximizing = node.is_maximizing();
        let mut best_score: Wide = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut next_child = node.first_child().map(|child| child.id());

        while let Some(child) = next_child {
            let score = self.alphabeta(tree, child, alpha, beta)?;

            if maximizing {
                best_score = best_score.max(Wide::from(score));
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(Wide::from(score));
                beta = beta.min(best_score);
            }

            tree.set_value(child, score)?;
            next_child = tree.node(child)?.next_sibling().map(|sibling| sibling.id());

            if beta <= alpha {
                if next_child.is_some() {
                    self.cutoffs += 1;
                    debug!(node = ?id, alpha, beta, "cutoff");
                }
                break;
            }
        }

        narrow(best_score)
    }
}

impl Search for AlphaBeta {
    fn name(&self) -> &'static str {
        "Alpha-Beta"
    }

    fn evaluate(&self, tree: &mut GameTree) -> Result<SearchOutcome> {
        let mut run = AlphaBetaRun::default();
        let root = tree.root().id();

        let value = run.alphabeta(tree, root, NEG_INFINITY, POS_INFINITY)?;
        tree.set_value(root, value)?;

        debug!(
            value,
            expanded_nodes = run.nodes,
            cutoffs = run.cutoffs,
            "alpha-beta finished"
        );
        Ok(SearchOutcome {
            value,
            expanded_nodes: run.nodes,
            cutoffs: run.cutoffs,
        })
    }
}
