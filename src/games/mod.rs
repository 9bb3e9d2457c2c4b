//! Game implementations for tree construction.
//!
//! ## Available Games
//!
//! - [`electric_chair`]: two-player hidden-commitment elimination game
//!
//! ## Adding New Games
//!
//! 1. Create a new module under `src/games/`
//! 2. Define state, action, and info state types
//! 3. Implement the [`Game`](crate::tree::Game) trait
//! 4. Add tests that check the built graph

pub mod electric_chair;
