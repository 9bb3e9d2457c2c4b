//! # Chair Tree
//!
//! Builds the complete extensive-form game graph of the electric chair game,
//! ready to be consumed by a Counterfactual Regret Minimization (CFR)
//! trainer.
//!
//! ## Features
//!
//! - **Generic construction**: works with any game implementing the `Game` trait
//! - **State merging**: equal states share one node, so the graph is a DAG
//! - **Information sets**: per-player partition of nodes by observation
//! - **CFR storage**: zeroed per-node accumulators for an external trainer
//!
//! ## Quick Start
//!
//! ```ignore
//! use chair_tree::games::electric_chair::{ChairGameConfig, ElectricChair};
//!
//! let game = ElectricChair::new(ChairGameConfig::default())?;
//! let tree = game.build_tree();
//!
//! for (position, nodes) in tree.info_sets(0) {
//!     println!("{}: {} nodes", position, nodes.len());
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    GameTreeBuilder (Generic)                    │
//! │  - Iterative DFS          - State → node deduplication          │
//! │  - Terminal/utility       - Information-set partition           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ implements Game trait
//!                               ▼
//!                       ┌────────────────┐
//!                       │ Electric Chair │
//!                       └────────────────┘
//! ```

#![warn(missing_docs)]

/// Game graph construction module.
///
/// The game-agnostic builder, node arena and statistics.
pub mod tree;

/// Game implementations module.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use games::electric_chair::{ChairGameConfig, ChairTree, ElectricChair};
pub use tree::{Game, GameTree, GameTreeBuilder, Node, NodeId, TreeStats};
