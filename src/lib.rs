//! Minimax and alpha-beta pruning over explicit two-player game trees.
//!
//! A [`GameTree`](game_tree::GameTree) holds a finite tree of maximizing and minimizing nodes
//! with payoffs at the leaves. [`Minimax`](minimax::Minimax) computes the value of the root by
//! visiting every node; [`AlphaBeta`](alpha_beta::AlphaBeta) computes the same value while
//! skipping subtrees that cannot change it. Both write the value they compute for each visited
//! node back into the tree and report how many nodes they expanded.
//!
//! # Example
//!
//! ```rust
//! use adversarial_search::alpha_beta::AlphaBeta;
//! use adversarial_search::comparison::Comparison;
//! use adversarial_search::game_tree::{GameTree, Player};
//! use adversarial_search::minimax::Minimax;
//! use adversarial_search::search::Search;
//!
//! // MAX to move, each MIN reply leads to leaves
//! let tree = GameTree::builder(Player::Max)
//!     .min(|b| b.leaf(5).leaf(7).leaf(8))
//!     .min(|b| b.leaf(2).leaf(5))
//!     .build()
//!     .unwrap();
//!
//! let minimax = Minimax::new().evaluate(&mut tree.fresh_copy()).unwrap();
//! let alpha_beta = AlphaBeta::new().evaluate(&mut tree.fresh_copy()).unwrap();
//! assert_eq!(minimax.value, 5);
//! assert_eq!(alpha_beta.value, 5);
//! assert!(alpha_beta.expanded_nodes < minimax.expanded_nodes);
//!
//! let comparison = Comparison::run(&tree).unwrap();
//! println!("{comparison}");
//! ```

/// Minimax with alpha-beta pruning.
pub mod alpha_beta;
/// Runs both searches on copies of one tree and reports the difference.
pub mod comparison;
/// Error type shared by the whole crate.
pub mod error;
/// Contains pre-made trees for demos and tests.
pub mod fixtures;
/// The game tree, its nodes and the builder used to grow it.
pub mod game_tree;
/// Plain minimax.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The `Search` trait shared by both algorithms.
pub mod search;

pub use error::{Error, Result};
