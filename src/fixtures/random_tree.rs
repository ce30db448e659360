use crate::error::{Error, Result};
use crate::game_tree::{GameTree, GameTreeBuilder, Player, Score};
use crate::random::{CustomNumberGenerator, RandomGenerator};
use tracing::debug;

/// A builder for random game trees.
///
/// Every internal node gets between `min_branching` and `max_branching` children. Nodes at
/// `depth` plies are leaves; shallower nodes below the root turn into leaves early with
/// `leaf_chance` percent probability. Leaf values are drawn from `min_value..=max_value`.
pub struct RandomTreeBuilder<K: RandomGenerator = CustomNumberGenerator> {
    random_generator: K,
    root_player: Player,
    depth: usize,
    min_branching: usize,
    max_branching: usize,
    min_value: Score,
    max_value: Score,
    leaf_chance: u8,
}

impl<K: RandomGenerator> Default for RandomTreeBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> RandomTreeBuilder<K> {
    /// A depth 3 tree with two or three children per node and values in `-10..=10`.
    pub fn new() -> Self {
        Self {
            random_generator: K::default(),
            root_player: Player::Max,
            depth: 3,
            min_branching: 2,
            max_branching: 3,
            min_value: -10,
            max_value: 10,
            leaf_chance: 0,
        }
    }

    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn with_root_player(mut self, player: Player) -> Self {
        self.root_player = player;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_branching(mut self, min: usize, max: usize) -> Self {
        self.min_branching = min;
        self.max_branching = max;
        self
    }

    /// Inclusive range of leaf values.
    pub fn with_value_range(mut self, min: Score, max: Score) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Percent chance for a node above the maximum depth to be a leaf.
    pub fn with_leaf_chance(mut self, percent: u8) -> Self {
        self.leaf_chance = percent;
        self
    }

    /// Generates the tree.
    pub fn build(mut self) -> Result<GameTree> {
        self.validate()?;

        if self.depth == 0 {
            let value = self.next_value();
            return Ok(GameTree::leaf(value, self.root_player));
        }

        let root_player = self.root_player;
        let depth = self.depth;
        let builder = self.grow(GameTree::builder(root_player), root_player, depth);
        let tree = builder.build()?;
        debug!(
            nodes = tree.len(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "generated random tree"
        );
        Ok(tree)
    }

    fn grow(
        &mut self,
        mut builder: GameTreeBuilder,
        player: Player,
        plies_left: usize,
    ) -> GameTreeBuilder {
        let child_player = player.opponent();
        let children = self.next_branching();
        for _ in 0..children {
            if plies_left == 1 || self.random_generator.chance(self.leaf_chance) {
                let value = self.next_value();
                builder = builder.leaf(value);
            } else {
                builder = builder.subtree(child_player, |b| {
                    self.grow(b, child_player, plies_left - 1)
                });
            }
        }
        builder
    }

    fn next_value(&mut self) -> Score {
        self.random_generator
            .next_range(self.min_value, self.max_value + 1)
    }

    fn next_branching(&mut self) -> usize {
        // bounds fit in i32, checked by validate()
        let min = self.min_branching as i32;
        let max = self.max_branching as i32;
        self.random_generator.next_range(min, max + 1) as usize
    }

    fn validate(&self) -> Result<()> {
        if self.min_branching == 0 {
            return Err(invalid("branching must be at least 1"));
        }
        if self.min_branching > self.max_branching {
            return Err(invalid(format!(
                "branching range {}..={} is empty",
                self.min_branching, self.max_branching
            )));
        }
        if i32::try_from(self.max_branching).map_or(true, |max| max == i32::MAX) {
            return Err(invalid(format!(
                "branching {} is too large",
                self.max_branching
            )));
        }
        if self.min_value > self.max_value {
            return Err(invalid(format!(
                "value range {}..={} is empty",
                self.min_value, self.max_value
            )));
        }
        if self.max_value == Score::MAX {
            return Err(invalid("maximum leaf value must be below Score::MAX"));
        }
        if self.leaf_chance > 100 {
            return Err(invalid(format!(
                "leaf chance {}% is above 100%",
                self.leaf_chance
            )));
        }
        Ok(())
    }
}

impl RandomTreeBuilder<CustomNumberGenerator> {
    /// A builder drawing from a [`CustomNumberGenerator`] with the given seed.
    pub fn seeded(seed: i64) -> Self {
        Self::new().with_random_generator(CustomNumberGenerator::new(seed))
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfiguration {
        message: message.into(),
    }
}
