//! Game graph construction.
//!
//! The builder expands every reachable state with an iterative depth-first
//! traversal over an explicit stack, so deep elimination chains never touch
//! the call-stack limit. Equal states are merged into one node through a
//! state → node index, which turns the tree into a DAG.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::tree::game::Game;
use crate::tree::node::{Node, NodeId};
use crate::tree::stats::TreeStats;

/// Expansions between two debug log lines.
const LOG_INTERVAL: usize = 10_000;

/// Per-player information-set partition: observation → nodes sharing it.
pub type InfoSetMap<G> = FxHashMap<<G as Game>::InfoState, Vec<NodeId>>;

/// Builds the complete game graph of a [`Game`].
///
/// # Example
/// ```ignore
/// use chair_tree::games::electric_chair::{ChairGameConfig, ElectricChair};
/// use chair_tree::tree::GameTreeBuilder;
///
/// let game = ElectricChair::new(ChairGameConfig::small())?;
/// let tree = GameTreeBuilder::new(game).build();
/// println!("{} nodes", tree.len());
/// ```
pub struct GameTreeBuilder<G: Game> {
    game: G,
    nodes: Vec<Node<G>>,
    index: FxHashMap<G::State, NodeId>,
    info_sets: Vec<InfoSetMap<G>>,
    expansions: usize,
    shared_edges: usize,
    progress: Option<Box<dyn FnMut(usize)>>,
}

impl<G: Game> GameTreeBuilder<G> {
    /// Create a builder for `game`.
    pub fn new(game: G) -> Self {
        let info_sets = (0..game.num_players()).map(|_| FxHashMap::default()).collect();

        Self {
            game,
            nodes: Vec::new(),
            index: FxHashMap::default(),
            info_sets,
            expansions: 0,
            shared_edges: 0,
            progress: None,
        }
    }

    /// Register an observer called with the running expansion count.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Expand every reachable state and return the finished graph.
    pub fn build(mut self) -> GameTree<G> {
        let root_state = self.game.initial_state();
        let root_player = self.game.current_player(&root_state);
        log::info!(
            "building game tree from {}",
            self.game.state_description(&root_state)
        );

        let root = self.insert(root_state, root_player);
        self.record_info_set(root);

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let actions = self.game.available_actions(self.nodes[id].state());
            for action in actions {
                let (child, is_new) = self.expand(id, action);
                if self.nodes[child].is_terminal() {
                    continue;
                }
                self.record_info_set(child);
                if is_new {
                    stack.push(child);
                }
            }
        }

        let tree = GameTree {
            game: self.game,
            nodes: self.nodes,
            index: self.index,
            info_sets: self.info_sets,
            root,
            shared_edges: self.shared_edges,
        };
        let stats = tree.stats();
        log::info!(
            "game tree built: {} nodes ({} terminal), {} edges, info sets {:?}",
            stats.nodes,
            stats.terminal_nodes,
            stats.edges,
            stats.info_sets
        );
        tree
    }

    /// Expand the child of `parent` reached by `action`.
    ///
    /// Returns the child and whether it was created by this call. An existing
    /// node with the same state is reused; either way the edge and the
    /// parent's accumulator slots for `action` are recorded.
    fn expand(&mut self, parent: NodeId, action: G::Action) -> (NodeId, bool) {
        let state = self.game.apply_action(self.nodes[parent].state(), &action);

        self.expansions += 1;
        if self.expansions % LOG_INTERVAL == 0 {
            log::debug!("expansions: {}, nodes: {}", self.expansions, self.nodes.len());
        }
        if let Some(progress) = self.progress.as_mut() {
            progress(self.expansions);
        }

        let (child, is_new) = match self.index.get(&state) {
            Some(&existing) => {
                self.shared_edges += 1;
                (existing, false)
            }
            None => {
                let player = self.game.current_player(&state);
                (self.insert(state, player), true)
            }
        };

        self.nodes[parent].link(action, child);
        (child, is_new)
    }

    fn insert(&mut self, state: G::State, player: usize) -> NodeId {
        let id = self.nodes.len();
        self.index.insert(state.clone(), id);
        self.nodes.push(Node::new(&self.game, state, player));
        id
    }

    fn record_info_set(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let info = self.game.info_state(node.state());
        self.info_sets[node.player()]
            .entry(info)
            .or_default()
            .push(id);
    }
}

/// The complete game graph.
///
/// The arena owns every node; edges and information sets refer to nodes by
/// [`NodeId`]. Only the CFR accumulators of a node can be mutated after
/// construction.
pub struct GameTree<G: Game> {
    game: G,
    nodes: Vec<Node<G>>,
    index: FxHashMap<G::State, NodeId>,
    info_sets: Vec<InfoSetMap<G>>,
    root: NodeId,
    shared_edges: usize,
}

impl<G: Game> GameTree<G> {
    /// Build the graph of `game` without a progress observer.
    pub fn build(game: G) -> Self {
        GameTreeBuilder::new(game).build()
    }

    /// The game the graph was built from.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// The root node.
    pub fn root(&self) -> &Node<G> {
        &self.nodes[self.root]
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` is not a node of this tree.
    pub fn node(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id]
    }

    /// Mutable access to a node, for updating its CFR accumulators.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<G> {
        &mut self.nodes[id]
    }

    /// All nodes, indexed by [`NodeId`].
    pub fn nodes(&self) -> &[Node<G>] {
        &self.nodes
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes (never true for a built tree).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the node for a state.
    pub fn find(&self, state: &G::State) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// The information-set partition of `player`.
    pub fn info_sets(&self, player: usize) -> &InfoSetMap<G> {
        &self.info_sets[player]
    }

    /// Nodes of `player` sharing the observation `info`, in arrival order.
    pub fn info_set(&self, player: usize, info: &G::InfoState) -> &[NodeId] {
        self.info_sets[player]
            .get(info)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of incoming edges of every node.
    pub fn parent_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.nodes.len()];
        for node in &self.nodes {
            for &(_, child) in node.children() {
                counts[child] += 1;
            }
        }
        counts
    }

    /// Follow uniformly random edges from the root until a node without
    /// children. Returns the visited node ids, root first.
    pub fn sample_path<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<NodeId> {
        let mut path = vec![self.root];
        let mut current = self.root;
        while let Some(&(_, next)) = self.nodes[current].children().choose(rng) {
            path.push(next);
            current = next;
        }
        path
    }

    /// Summary statistics.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            nodes: self.nodes.len(),
            shared_edges: self.shared_edges,
            ..Default::default()
        };

        for node in &self.nodes {
            stats.edges += node.children().len();
            if node.is_terminal() {
                stats.terminal_nodes += 1;
            } else if node.children().is_empty() {
                stats.dead_ends += 1;
            } else {
                stats.decision_nodes += 1;
            }
        }

        for (player, sets) in self.info_sets.iter().enumerate().take(2) {
            stats.info_sets[player] = sets.len();
            stats.info_set_entries[player] = sets.values().map(Vec::len).sum();
        }

        stats
    }
}
