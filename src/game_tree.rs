use crate::error::{Error, Result};
use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use std::fmt;

/// The numeric value of a game position. Leaf payoffs and computed values share this type.
pub type Score = i32;

/// Represents the two players of a zero-sum game.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    /// The player choosing the child with the highest value.
    Max = 1,
    /// The player choosing the child with the lowest value.
    Min = 2,
}

impl Player {
    /// The player moving one ply later.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::Max)
    }
}

/// The data stored for a single node of a [`GameTree`].
///
/// Structure (parent and children) lives in the tree arena; the node itself only holds
/// the role of the player to move and the value slot.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) struct GameTreeNode {
    player: Player,
    value: Option<Score>,
}

impl GameTreeNode {
    fn leaf(value: Score, player: Player) -> Self {
        Self {
            player,
            value: Some(value),
        }
    }

    fn unevaluated(player: Player) -> Self {
        Self {
            player,
            value: None,
        }
    }
}

/// A finite two-player game tree.
///
/// Leaves carry their payoff from construction on. Internal nodes start without a value and
/// receive one when a search visits them. The shape of the tree is fixed once built: searches
/// only ever write value slots.
#[derive(Debug, Clone)]
pub struct GameTree {
    tree: Tree<GameTreeNode>,
}

impl GameTree {
    /// Creates a tree made of a single leaf.
    pub fn leaf(value: Score, player: Player) -> Self {
        Self {
            tree: Tree::new(GameTreeNode::leaf(value, player)),
        }
    }

    /// Creates an internal node owning the given subtrees, in order.
    ///
    /// Fails when `children` is empty, or when one of the subtrees has already been
    /// evaluated (any of its internal nodes carries a value).
    pub fn internal(
        player: Player,
        children: impl IntoIterator<Item = GameTree>,
    ) -> Result<Self> {
        let mut tree = Tree::new(GameTreeNode::unevaluated(player));
        let mut has_children = false;
        {
            let mut root = tree.root_mut();
            for child in children {
                if child.has_computed_values() {
                    return Err(Error::PresetInternalValue);
                }
                graft(&mut root, child.tree.root());
                has_children = true;
            }
        }

        if !has_children {
            return Err(Error::EmptyInternalNode);
        }

        Ok(Self { tree })
    }

    /// Returns a builder growing a tree top-down from a root owned by `player`.
    pub fn builder(player: Player) -> GameTreeBuilder {
        GameTreeBuilder::new(player)
    }

    pub fn root(&self) -> GameNode<'_> {
        GameNode::new(self.tree.root())
    }

    pub fn get(&self, id: NodeId) -> Option<GameNode<'_>> {
        self.tree.get(id).map(GameNode::new)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<GameNode<'_>> {
        self.get(id).ok_or(Error::UnknownNode { id })
    }

    /// Overwrites the value slot of a node. The last write wins.
    ///
    /// Node ids are arena indices: an id taken from another tree is only rejected when it
    /// points past the end of this one.
    pub fn set_value(&mut self, id: NodeId, value: Score) -> Result<()> {
        let mut node = self.tree.get_mut(id).ok_or(Error::UnknownNode { id })?;
        node.value().value = Some(value);
        Ok(())
    }

    /// Clears the values computed for internal nodes. Leaf payoffs are kept.
    pub fn reset(&mut self) {
        let internal_ids: Vec<NodeId> = self
            .tree
            .nodes()
            .filter(|node| node.has_children())
            .map(|node| node.id())
            .collect();
        for id in internal_ids {
            if let Some(mut node) = self.tree.get_mut(id) {
                node.value().value = None;
            }
        }
    }

    /// A copy of this tree with every computed value cleared.
    pub fn fresh_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset();
        copy
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.tree.nodes().count()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.nodes().filter(|node| !node.has_children()).count()
    }

    /// Number of plies below the root. A single leaf has depth 0.
    pub fn depth(&self) -> usize {
        ply_depth(self.tree.root())
    }

    fn has_computed_values(&self) -> bool {
        self.tree
            .nodes()
            .any(|node| node.has_children() && node.value().value.is_some())
    }
}

fn graft(parent: &mut NodeMut<'_, GameTreeNode>, subtree: NodeRef<'_, GameTreeNode>) {
    let mut node = parent.append(*subtree.value());
    for child in subtree.children() {
        graft(&mut node, child);
    }
}

fn ply_depth(node: NodeRef<'_, GameTreeNode>) -> usize {
    node.children()
        .map(|child| 1 + ply_depth(child))
        .max()
        .unwrap_or(0)
}

/// A read-only view of one node of a [`GameTree`].
#[derive(Clone, Copy)]
pub struct GameNode<'a> {
    node: NodeRef<'a, GameTreeNode>,
}

impl<'a> GameNode<'a> {
    fn new(node: NodeRef<'a, GameTreeNode>) -> Self {
        Self { node }
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    pub fn is_leaf(&self) -> bool {
        !self.node.has_children()
    }

    pub fn player(&self) -> Player {
        self.node.value().player
    }

    pub fn is_maximizing(&self) -> bool {
        self.player().is_maximizing()
    }

    /// Children in declaration order. Empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = GameNode<'a>> + use<'a> {
        self.node.children().map(GameNode::new)
    }

    pub fn first_child(&self) -> Option<GameNode<'a>> {
        self.node.first_child().map(GameNode::new)
    }

    pub fn next_sibling(&self) -> Option<GameNode<'a>> {
        self.node.next_sibling().map(GameNode::new)
    }

    /// The stored value, or [`Error::UnsetValue`] for an internal node no search has reached.
    pub fn value(&self) -> Result<Score> {
        self.node
            .value()
            .value
            .ok_or(Error::UnsetValue { id: self.id() })
    }

    pub fn is_evaluated(&self) -> bool {
        self.node.value().value.is_some()
    }
}

impl fmt::Debug for GameNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameNode")
            .field("id", &self.id())
            .field("player", &self.player())
            .field("value", &self.node.value().value)
            .field("is_leaf", &self.is_leaf())
            .finish()
    }
}

/// A builder for creating a [`GameTree`] top-down.
///
/// Internal nodes are opened with [`max`](GameTreeBuilder::max) or
/// [`min`](GameTreeBuilder::min); the closure fills in their children.
///
/// ```rust
/// use adversarial_search::game_tree::{GameTree, Player};
///
/// let tree = GameTree::builder(Player::Max)
///     .min(|b| b.leaf(3).leaf(12))
///     .min(|b| b.leaf(2))
///     .build()
///     .unwrap();
/// assert_eq!(tree.len(), 6);
/// ```
pub struct GameTreeBuilder {
    tree: Tree<GameTreeNode>,
    cursor: NodeId,
}

impl GameTreeBuilder {
    /// Creates a builder whose root belongs to `player`.
    pub fn new(player: Player) -> Self {
        let tree = Tree::new(GameTreeNode::unevaluated(player));
        let cursor = tree.root().id();
        Self { tree, cursor }
    }

    /// Appends a leaf owned by the opponent of the current node's player.
    pub fn leaf(self, value: Score) -> Self {
        let player = self.current_player().opponent();
        self.leaf_with(value, player)
    }

    /// Appends a leaf with an explicit player.
    pub fn leaf_with(mut self, value: Score, player: Player) -> Self {
        self.append(GameTreeNode::leaf(value, player));
        self
    }

    /// Appends a maximizing node and fills it with `children`.
    pub fn max(self, children: impl FnOnce(Self) -> Self) -> Self {
        self.subtree(Player::Max, children)
    }

    /// Appends a minimizing node and fills it with `children`.
    pub fn min(self, children: impl FnOnce(Self) -> Self) -> Self {
        self.subtree(Player::Min, children)
    }

    /// Appends an internal node owned by `player` and fills it with `children`.
    pub fn subtree(mut self, player: Player, children: impl FnOnce(Self) -> Self) -> Self {
        let parent = self.cursor;
        if let Some(id) = self.append(GameTreeNode::unevaluated(player)) {
            self.cursor = id;
        }
        let mut built = children(self);
        built.cursor = parent;
        built
    }

    /// Builds the tree. Fails if an internal node (the root included) has no children.
    pub fn build(self) -> Result<GameTree> {
        let has_empty_internal = self
            .tree
            .nodes()
            .any(|node| !node.has_children() && node.value().value.is_none());
        if has_empty_internal {
            return Err(Error::EmptyInternalNode);
        }

        Ok(GameTree { tree: self.tree })
    }

    fn append(&mut self, node: GameTreeNode) -> Option<NodeId> {
        let mut parent = self.tree.get_mut(self.cursor)?;
        let id = parent.append(node).id();
        Some(id)
    }

    fn current_player(&self) -> Player {
        self.tree
            .get(self.cursor)
            .map_or(self.tree.root().value().player, |node| node.value().player)
    }
}
