//! Game trait definition for tree construction.
//!
//! Any game that implements the `Game` trait can be expanded into a full
//! extensive-form graph by [`GameTreeBuilder`](crate::tree::GameTreeBuilder).
//! This keeps the traversal and deduplication logic apart from the rules of
//! a specific game.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for actions that label the edges of the game graph.
///
/// Actions must be small, comparable and hashable so they can key the
/// per-action accumulator maps on each node.
pub trait Action: Copy + Eq + Hash + Debug {
    /// Short string representation for display/storage.
    fn label(&self) -> String;
}

/// Trait for information states (what the acting player observes).
///
/// Two game states that look identical to a player must produce the same
/// information state. Nodes are grouped into information sets by this key.
pub trait InfoState: Clone + Eq + Hash + Debug {
    /// Generate a unique string key for this information state.
    fn key(&self) -> String;
}

/// Trait for game states.
///
/// The full game state, hidden information included. Structural equality is
/// the identity of a graph node: equal states always share one node.
pub trait GameState: Clone + Eq + Hash + Debug {}

/// The main Game trait that defines the interface for any game.
///
/// # Type Parameters
/// - `State`: the deduplication key of a node
/// - `Action`: the edge label
/// - `InfoState`: the information-set key
///
/// # Example
/// ```ignore
/// struct MyGame;
///
/// impl Game for MyGame {
///     type State = MyGameState;
///     type Action = MyAction;
///     type InfoState = MyInfoState;
///
///     // ... implement required methods
/// }
/// ```
pub trait Game {
    /// The type representing a complete game state.
    type State: GameState;

    /// The type representing an action a player can take.
    type Action: Action;

    /// The type representing what a player observes at a decision point.
    type InfoState: InfoState;

    /// Create the initial game state.
    fn initial_state(&self) -> Self::State;

    /// Check if the given state is terminal (game over).
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Get the payoff for a player at a terminal state.
    ///
    /// Two-player zero-sum: the payoff for player 1 is the negation of the
    /// payoff for player 0.
    fn get_payoff(&self, state: &Self::State, player: usize) -> f64;

    /// Get the index of the player who acts at this state.
    fn current_player(&self, state: &Self::State) -> usize;

    /// Get the total number of players in the game.
    fn num_players(&self) -> usize {
        2
    }

    /// Get the list of legal actions at this state.
    ///
    /// Returns an empty vector for terminal states.
    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to a state and return the resulting new state.
    ///
    /// The input state is never modified.
    ///
    /// # Panics
    /// Implementations panic when `action` is not legal at `state`.
    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Get the information state of the player acting at `state`.
    fn info_state(&self, state: &Self::State) -> Self::InfoState;

    /// Get a human-readable name for an action.
    fn action_name(&self, action: &Self::Action) -> String {
        action.label()
    }

    /// Get a human-readable description of a state.
    fn state_description(&self, state: &Self::State) -> String {
        format!("{:?}", state)
    }
}

/// Macro to simplify implementing the GameState trait.
#[macro_export]
macro_rules! impl_game_state {
    ($type:ty) => {
        impl $crate::tree::game::GameState for $type {}
    };
}
