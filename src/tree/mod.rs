//! Generic extensive-form game graph construction.
//!
//! This module turns any game implementing [`Game`] into the complete graph
//! a CFR trainer iterates over.
//!
//! # Overview
//!
//! Construction is a single depth-first pass:
//! 1. The root state becomes the first node and the first member of its
//!    player's information set
//! 2. Every popped node is expanded once per legal action
//! 3. Children with an already-known state reuse the existing node (the
//!    graph is a DAG, not a tree)
//! 4. Non-terminal children join the information set of their acting player,
//!    keyed by what that player observes
//!
//! # Example
//!
//! ```ignore
//! use chair_tree::games::electric_chair::{ChairGameConfig, ElectricChair};
//! use chair_tree::tree::GameTree;
//!
//! let game = ElectricChair::new(ChairGameConfig::default())?;
//! let tree = GameTree::build(game);
//!
//! let stats = tree.stats();
//! println!("{} nodes, {} terminal", stats.nodes, stats.terminal_nodes);
//! ```
//!
//! # Ownership
//!
//! ```text
//! GameTree
//!  ├── nodes: Vec<Node>            (owns every node)
//!  ├── index: State → NodeId       (deduplication)
//!  └── info_sets[player]: InfoState → [NodeId]
//! ```

pub mod builder;
pub mod game;
pub mod node;
pub mod stats;

pub use builder::{GameTree, GameTreeBuilder, InfoSetMap};
pub use game::{Action, Game, GameState, InfoState};
pub use node::{CfrAccumulators, Node, NodeId};
pub use stats::TreeStats;
