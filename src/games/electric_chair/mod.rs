//! The electric chair game.
//!
//! A two-player elimination game with hidden information, built here as a
//! complete game graph for CFR training.
//!
//! ## Game Rules
//!
//! - Chairs `1..=N` are on the table; a chair is worth its number
//! - Each round one player secretly marks a remaining chair as live, then the
//!   other player sits on a remaining chair of their choice
//! - Live chair: the sitter loses a life and their score drops to 0
//! - Any other chair: the sitter scores its value and the chair is removed
//! - The sitter marks the live chair in the next round, so roles swap
//! - The game ends as soon as a player has no lives left or a player's score
//!   reaches the winning score
//!
//! ## Round Structure
//!
//! ```text
//! commit (P0 marks c)          active: P0 → P1, chair hidden
//!   └── resolve (P1 sits on s)
//!         ├── s == c → P1 life -1, score 0
//!         └── s != c → P1 score +s, s removed
//!               └── commit (P1 marks c') → resolve (P0 sits) → ...
//! ```
//!
//! ## Payoffs
//!
//! Always from player 0's perspective: +1 when player 0 reached the winning
//! score or player 1 ran out of lives, -1 otherwise.

pub mod chairs;
pub mod config;
pub mod position;
pub mod transition;

pub use chairs::{Chair, ChairSet, MAX_CHAIR};
pub use config::{ChairGameConfig, ConfigError};
pub use position::Position;
pub use transition::TransitionRecord;

use crate::tree::game::Game;
use crate::tree::GameTree;

/// The player who commits in the first round.
pub const FIRST_COMMITTER: usize = 0;

/// Complete game graph of the electric chair game.
pub type ChairTree = GameTree<ElectricChair>;

/// Electric chair game with fixed parameters.
#[derive(Debug, Clone)]
pub struct ElectricChair {
    config: ChairGameConfig,
}

impl Default for ElectricChair {
    fn default() -> Self {
        Self {
            config: ChairGameConfig::default(),
        }
    }
}

impl ElectricChair {
    /// Create a game from a validated configuration.
    pub fn new(config: ChairGameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The game parameters.
    pub fn config(&self) -> &ChairGameConfig {
        &self.config
    }

    /// Score that ends the game.
    pub fn winning_score(&self) -> u32 {
        self.config.winning_score
    }

    /// Build the complete game graph.
    pub fn build_tree(self) -> ChairTree {
        GameTree::build(self)
    }
}

impl Game for ElectricChair {
    type State = TransitionRecord;
    type Action = Chair;
    type InfoState = Position;

    fn initial_state(&self) -> Self::State {
        TransitionRecord::root(Position::initial(
            FIRST_COMMITTER,
            self.config.chairs(),
            self.config.max_life,
        ))
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.position().is_over(self.config.winning_score)
    }

    fn get_payoff(&self, state: &Self::State, player: usize) -> f64 {
        debug_assert!(self.is_terminal(state), "get_payoff called on non-terminal state");

        let p0_payoff = state.position().outcome(self.config.winning_score);
        if player == 0 {
            p0_payoff
        } else {
            -p0_payoff
        }
    }

    fn current_player(&self, state: &Self::State) -> usize {
        state.position().active_player
    }

    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if self.is_terminal(state) {
            return vec![];
        }
        state.position().remaining_chairs.iter().collect()
    }

    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        state.next(*action)
    }

    fn info_state(&self, state: &Self::State) -> Self::InfoState {
        *state.position()
    }

    fn action_name(&self, action: &Self::Action) -> String {
        format!("chair {}", action)
    }

    fn state_description(&self, state: &Self::State) -> String {
        state.to_string()
    }
}
