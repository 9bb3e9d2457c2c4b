//! Vertices of the game graph.
//!
//! Nodes live in a single arena owned by the tree; edges are [`NodeId`]
//! indices into that arena, so a node reached along several paths is stored
//! once and referenced from every parent.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::tree::game::Game;

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// Bookkeeping slots for an external CFR trainer.
///
/// Tree construction only creates these (zeroed, with one map entry per
/// action actually expanded from the node). Nothing in this crate reads or
/// updates them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CfrAccumulators<A: Eq + Hash> {
    /// Reach probability of the node.
    pub pi: f64,
    /// Reach probability contributed by everyone except the acting player.
    pub pi_mi: f64,
    /// Reach probability contributed by the acting player.
    pub pi_i: f64,
    /// `pi_mi` under the current average strategy profile.
    pub true_pi_mi: f64,
    /// Counterfactual value.
    pub cv: f64,
    /// Cumulative counterfactual regret per action.
    pub regret: FxHashMap<A, f64>,
    /// Denominator of the average strategy.
    pub pi_i_sum: f64,
    /// Numerator of the average strategy, per action.
    pub strategy_sum: FxHashMap<A, f64>,
    /// Number of updates applied by the trainer.
    pub num_updates: u64,
}

impl<A: Eq + Hash> Default for CfrAccumulators<A> {
    fn default() -> Self {
        Self {
            pi: 0.0,
            pi_mi: 0.0,
            pi_i: 0.0,
            true_pi_mi: 0.0,
            cv: 0.0,
            regret: FxHashMap::default(),
            pi_i_sum: 0.0,
            strategy_sum: FxHashMap::default(),
            num_updates: 0,
        }
    }
}

impl<A: Eq + Hash> CfrAccumulators<A> {
    /// Create a slot pair for `action` if it does not exist yet.
    pub(crate) fn touch(&mut self, action: A)
    where
        A: Copy,
    {
        self.regret.entry(action).or_insert(0.0);
        self.strategy_sum.entry(action).or_insert(0.0);
    }
}

/// A vertex of the game graph.
#[derive(Debug)]
pub struct Node<G: Game> {
    state: G::State,
    player: usize,
    terminal: bool,
    utility: f64,
    children: Vec<(G::Action, NodeId)>,

    /// Storage for an external CFR trainer.
    pub cfr: CfrAccumulators<G::Action>,
}

impl<G: Game> Node<G> {
    /// Create a node for `state`, classifying it with the rules of `game`.
    ///
    /// Terminal nodes carry the payoff of player 0; all others carry 0.
    pub(crate) fn new(game: &G, state: G::State, player: usize) -> Self {
        let terminal = game.is_terminal(&state);
        let utility = if terminal {
            game.get_payoff(&state, 0)
        } else {
            0.0
        };

        Self {
            state,
            player,
            terminal,
            utility,
            children: Vec::new(),
            cfr: CfrAccumulators::default(),
        }
    }

    /// The deduplication key of this node.
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// The player acting at this node.
    pub fn player(&self) -> usize {
        self.player
    }

    /// Whether the game is over at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Payoff from player 0's perspective (0 for non-terminal nodes).
    pub fn utility(&self) -> f64 {
        self.utility
    }

    /// Outgoing edges, in expansion order.
    pub fn children(&self) -> &[(G::Action, NodeId)] {
        &self.children
    }

    /// The child reached by `action`, if it has been expanded.
    pub fn child(&self, action: &G::Action) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(a, _)| a == action)
            .map(|&(_, id)| id)
    }

    /// Record an edge and its accumulator slots. At most one edge per action.
    pub(crate) fn link(&mut self, action: G::Action, child: NodeId) {
        if self.child(&action).is_none() {
            self.children.push((action, child));
        }
        self.cfr.touch(action);
    }
}
