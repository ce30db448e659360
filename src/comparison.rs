use crate::alpha_beta::AlphaBeta;
use crate::error::Result;
use crate::game_tree::GameTree;
use crate::minimax::Minimax;
use crate::search::{Search, SearchOutcome};
use std::fmt;
use tracing::info;

/// Outcome of running a baseline search and a pruning search on copies of the same tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    baseline_name: &'static str,
    pruned_name: &'static str,
    baseline: SearchOutcome,
    pruned: SearchOutcome,
}

impl Comparison {
    /// Runs [`Minimax`] and [`AlphaBeta`] on two fresh copies of `template`.
    pub fn run(template: &GameTree) -> Result<Self> {
        Self::run_with(template, &Minimax, &AlphaBeta)
    }

    /// Runs `baseline` and `pruned` on two fresh copies of `template`, so values written by
    /// one search are never seen by the other.
    pub fn run_with(
        template: &GameTree,
        baseline: &dyn Search,
        pruned: &dyn Search,
    ) -> Result<Self> {
        let baseline_outcome = baseline.evaluate(&mut template.fresh_copy())?;
        let pruned_outcome = pruned.evaluate(&mut template.fresh_copy())?;

        let comparison = Self {
            baseline_name: baseline.name(),
            pruned_name: pruned.name(),
            baseline: baseline_outcome,
            pruned: pruned_outcome,
        };
        info!(
            baseline = comparison.baseline_name,
            pruned = comparison.pruned_name,
            agree = comparison.values_agree(),
            gain = comparison.efficiency_gain(),
            "comparison finished"
        );
        Ok(comparison)
    }

    pub fn baseline(&self) -> &SearchOutcome {
        &self.baseline
    }

    pub fn pruned(&self) -> &SearchOutcome {
        &self.pruned
    }

    /// Whether both searches found the same root value.
    pub fn values_agree(&self) -> bool {
        self.baseline.value == self.pruned.value
    }

    /// Percentage of baseline node expansions saved by the pruning search:
    /// `100 * (1 - pruned / baseline)`. Zero when the baseline expanded nothing.
    pub fn efficiency_gain(&self) -> f64 {
        if self.baseline.expanded_nodes == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.pruned.expanded_nodes as f64 / self.baseline.expanded_nodes as f64)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in [
            (self.baseline_name, &self.baseline),
            (self.pruned_name, &self.pruned),
        ] {
            writeln!(f, "{name} value for the root node: {}", outcome.value)?;
            writeln!(f, "{name} expanded {} nodes", outcome.expanded_nodes)?;
        }
        writeln!(
            f,
            "Both algorithms found the same optimal value: {}",
            self.values_agree()
        )?;
        write!(
            f,
            "{} is {:.2}% more efficient",
            self.pruned_name,
            self.efficiency_gain()
        )
    }
}
