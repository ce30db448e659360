use adversarial_search::alpha_beta::AlphaBeta;
use adversarial_search::fixtures::random_tree::RandomTreeBuilder;
use adversarial_search::game_tree::{GameNode, GameTree, Player};
use adversarial_search::minimax::Minimax;
use adversarial_search::search::Search;

fn random_trees() -> impl Iterator<Item = GameTree> {
    (0..200).map(|seed| {
        RandomTreeBuilder::seeded(seed)
            .with_root_player(if seed % 2 == 0 { Player::Max } else { Player::Min })
            .with_depth(1 + (seed as usize % 5))
            .with_branching(1, 4)
            .with_value_range(-20, 20)
            .with_leaf_chance(15)
            .build()
            .expect("valid random tree settings")
    })
}

fn mirrored(node: GameNode<'_>) -> GameTree {
    if node.is_leaf() {
        return GameTree::leaf(node.value().unwrap(), node.player());
    }
    let children: Vec<GameTree> = node.children().map(mirrored).collect();
    GameTree::internal(node.player(), children.into_iter().rev()).unwrap()
}

fn evaluated_internal_nodes(node: GameNode<'_>) -> u64 {
    let own = u64::from(!node.is_leaf() && node.is_evaluated());
    own + node.children().map(evaluated_internal_nodes).sum::<u64>()
}

#[test]
fn alpha_beta_matches_minimax_value() {
    for tree in random_trees() {
        let minimax = Minimax::new().evaluate(&mut tree.fresh_copy()).unwrap();
        let alpha_beta = AlphaBeta::new().evaluate(&mut tree.fresh_copy()).unwrap();

        assert_eq!(minimax.value, alpha_beta.value, "tree: {tree:?}");
    }
}

#[test]
fn alpha_beta_never_expands_more_nodes() {
    for tree in random_trees() {
        let minimax = Minimax::new().evaluate(&mut tree.fresh_copy()).unwrap();
        let alpha_beta = AlphaBeta::new().evaluate(&mut tree.fresh_copy()).unwrap();

        assert!(alpha_beta.expanded_nodes <= minimax.expanded_nodes);
        assert!(alpha_beta.expanded_nodes >= 1);
    }
}

#[test]
fn minimax_expands_every_node() {
    for tree in random_trees() {
        let mut copy = tree.fresh_copy();
        let outcome = Minimax::new().evaluate(&mut copy).unwrap();
        let internal = (copy.len() - copy.leaf_count()) as u64;

        assert_eq!(outcome.expanded_nodes, tree.len() as u64);
        assert_eq!(evaluated_internal_nodes(copy.root()), internal);
    }
}

#[test]
fn alpha_beta_only_values_visited_nodes() {
    for tree in random_trees() {
        let mut copy = tree.fresh_copy();
        let outcome = AlphaBeta::new().evaluate(&mut copy).unwrap();

        assert!(copy.root().is_evaluated());
        assert!(evaluated_internal_nodes(copy.root()) <= outcome.expanded_nodes);
        if outcome.cutoffs == 0 {
            assert_eq!(outcome.expanded_nodes, tree.len() as u64);
        }
    }
}

#[test]
fn reordering_children_keeps_the_value() {
    for tree in random_trees() {
        let mut reversed = mirrored(tree.root());
        assert_eq!(reversed.len(), tree.len());

        let original = AlphaBeta::new().evaluate(&mut tree.fresh_copy()).unwrap();
        let flipped = AlphaBeta::new().evaluate(&mut reversed).unwrap();

        assert_eq!(original.value, flipped.value);
        assert!(flipped.expanded_nodes <= tree.len() as u64);
    }
}

#[test]
fn evaluating_twice_gives_the_same_outcome() {
    for tree in random_trees().take(20) {
        let mut copy = tree.fresh_copy();
        let first = AlphaBeta::new().evaluate(&mut copy).unwrap();
        let second = AlphaBeta::new().evaluate(&mut copy).unwrap();
        assert_eq!(first, second);
    }
}
