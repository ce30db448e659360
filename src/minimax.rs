use crate::error::Result;
use crate::game_tree::{GameTree, Score};
use crate::search::{NEG_INFINITY, POS_INFINITY, Search, SearchOutcome, Wide, narrow};
use ego_tree::NodeId;
use tracing::{debug, trace};

/// Plain minimax: every node of the tree is visited exactly once.
///
/// This is the baseline [`AlphaBeta`](crate::alpha_beta::AlphaBeta) is checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct Minimax;

impl Minimax {
    pub fn new() -> Self {
        Minimax
    }

    fn minimax(tree: &mut GameTree, id: NodeId, nodes: &mut u64) -> Result<Score> {
        *nodes += 1;

        let node = tree.node(id)?;
        trace!(node = ?id, player = ?node.player(), "minimax visit");
        if node.is_leaf() {
            return node.value();
        }

        let maximizing = node.is_maximizing();
        let mut best_score: Wide = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut next_child = node.first_child().map(|child| child.id());

        while let Some(child) = next_child {
            let score = Self::minimax(tree, child, nodes)?;
            tree.set_value(child, score)?;

            best_score = if maximizing {
                best_score.max(Wide::from(score))
            } else {
                best_score.min(Wide::from(score))
            };

            next_child = tree.node(child)?.next_sibling().map(|sibling| sibling.id());
        }

        narrow(best_score)
    }
}

impl Search for Minimax {
    fn name(&self) -> &'static str {
        "Minimax"
    }

    fn evaluate(&self, tree: &mut GameTree) -> Result<SearchOutcome> {
        let mut nodes = 0u64;
        let root = tree.root().id();

        let value = Self::minimax(tree, root, &mut nodes)?;
        tree.set_value(root, value)?;

        debug!(value, expanded_nodes = nodes, "minimax finished");
        Ok(SearchOutcome {
            value,
            expanded_nodes: nodes,
            cutoffs: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::two_ply::{lecture_tree, textbook_tree};
    use crate::game_tree::Player;

    #[test]
    fn lecture_tree_value_and_count() {
        // arrange
        let mut tree = lecture_tree().unwrap();

        // act
        let outcome = Minimax::new().evaluate(&mut tree).unwrap();

        // assert
        assert_eq!(outcome.value, 5);
        assert_eq!(outcome.expanded_nodes, 8);
        assert_eq!(outcome.cutoffs, 0);
        let min_values: Vec<Score> = tree
            .root()
            .children()
            .map(|child| child.value().unwrap())
            .collect();
        assert_eq!(min_values, vec![5, 2]);
        assert_eq!(tree.root().value(), Ok(5));
    }

    #[test]
    fn every_node_is_expanded_and_valued() {
        let mut tree = textbook_tree().unwrap();
        let outcome = Minimax::new().evaluate(&mut tree).unwrap();

        assert_eq!(outcome.value, 3);
        assert_eq!(outcome.expanded_nodes, tree.len() as u64);
        let root = tree.root();
        assert!(root.children().all(|child| child.is_evaluated()));
        let min_values: Vec<Score> = root.children().map(|c| c.value().unwrap()).collect();
        assert_eq!(min_values, vec![3, 2, 2]);
    }

    #[test]
    fn single_leaf_is_returned_unchanged() {
        let mut tree = GameTree::leaf(17, Player::Max);
        let outcome = Minimax::new().evaluate(&mut tree).unwrap();

        assert_eq!(outcome.value, 17);
        assert_eq!(outcome.expanded_nodes, 1);
    }

    #[test]
    fn extreme_leaf_values_are_not_confused_with_sentinels() {
        let mut tree = GameTree::builder(Player::Min)
            .leaf(Score::MAX)
            .max(|b| b.leaf(Score::MIN).leaf(Score::MIN))
            .build()
            .unwrap();

        let outcome = Minimax::new().evaluate(&mut tree).unwrap();
        assert_eq!(outcome.value, Score::MIN);
    }

    #[test]
    fn counter_restarts_on_every_call() {
        let minimax = Minimax::new();
        let first = minimax.evaluate(&mut lecture_tree().unwrap()).unwrap();
        let second = minimax.evaluate(&mut lecture_tree().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
