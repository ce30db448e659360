use crate::error::Result;
use crate::game_tree::{GameTree, Player};

/// The two-ply lecture example.
///
/// ```text
///              MAX
///           /       \
///        MIN         MIN
///      /  |  \      /   \
///     5   7   8    2     5
/// ```
///
/// Value 5. Minimax expands all 8 nodes; alpha-beta never looks at the last leaf (5) of the
/// second MIN node, because its first leaf (2) is already below what MAX is guaranteed.
pub fn lecture_tree() -> Result<GameTree> {
    GameTree::builder(Player::Max)
        .min(|b| b.leaf(5).leaf(7).leaf(8))
        .min(|b| b.leaf(2).leaf(5))
        .build()
}

/// The classic three-by-three textbook tree.
///
/// ```text
///                 MAX
///        /         |          \
///      MIN        MIN         MIN
///    /  |  \    /  |  \     /  |  \
///   3  12   8  2   4   6  14   5   2
/// ```
///
/// Value 3. Alpha-beta skips leaves 4 and 6 and expands 11 of the 13 nodes.
pub fn textbook_tree() -> Result<GameTree> {
    GameTree::builder(Player::Max)
        .min(|b| b.leaf(3).leaf(12).leaf(8))
        .min(|b| b.leaf(2).leaf(4).leaf(6))
        .min(|b| b.leaf(14).leaf(5).leaf(2))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lecture_tree_shape() {
        let tree = lecture_tree().unwrap();
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.depth(), 2);
        assert!(tree.root().is_maximizing());
        assert!(tree.root().children().all(|c| !c.is_maximizing()));
    }

    #[test]
    fn textbook_tree_shape() {
        let tree = textbook_tree().unwrap();
        assert_eq!(tree.len(), 13);
        assert_eq!(tree.leaf_count(), 9);
        assert_eq!(tree.depth(), 2);
    }
}
