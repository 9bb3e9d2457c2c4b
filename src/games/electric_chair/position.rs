//! Public game facts: who acts, which chairs remain, lives and scores.

use std::fmt;

use crate::games::electric_chair::chairs::{Chair, ChairSet};
use crate::tree::game::InfoState;

/// Snapshot of everything both players can observe.
///
/// `Position` is `Copy`: every transition returns a fresh value and never
/// mutates the one it started from. Equality and hashing are structural,
/// which is what makes positions usable as information-set keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Player to act next (0 or 1).
    pub active_player: usize,
    /// Chairs nobody has safely sat on yet.
    pub remaining_chairs: ChairSet,
    /// Lives left per player.
    pub life: [u8; 2],
    /// Score per player.
    pub score: [u32; 2],
    /// `true` when the next step is a secret commitment, `false` when it
    /// resolves one.
    pub awaiting_commit: bool,
}

impl Position {
    /// Opening position: `player` commits first, all chairs present, full
    /// lives, zero scores.
    pub fn initial(player: usize, chairs: ChairSet, max_life: u8) -> Self {
        Self {
            active_player: player,
            remaining_chairs: chairs,
            life: [max_life, max_life],
            score: [0, 0],
            awaiting_commit: true,
        }
    }

    /// Position after the active player secretly commits a chair.
    ///
    /// The other player becomes active and must resolve.
    pub fn after_commit(self) -> Self {
        debug_assert!(self.awaiting_commit, "commit outside the commit phase");
        Self {
            active_player: 1 - self.active_player,
            awaiting_commit: false,
            ..self
        }
    }

    /// Position after the active player sat on the live chair.
    ///
    /// Costs one life and resets the player's score.
    pub fn after_hit(self) -> Self {
        debug_assert!(!self.awaiting_commit, "resolution inside the commit phase");
        let player = self.active_player;
        let mut next = Self {
            awaiting_commit: true,
            ..self
        };
        next.life[player] = next.life[player].saturating_sub(1);
        next.score[player] = 0;
        next
    }

    /// Position after the active player sat safely on `chair`.
    ///
    /// The chair's face value is scored and the chair leaves the pool.
    pub fn after_safe(self, chair: Chair) -> Self {
        debug_assert!(!self.awaiting_commit, "resolution inside the commit phase");
        let player = self.active_player;
        let mut next = Self {
            remaining_chairs: self.remaining_chairs.without(chair),
            awaiting_commit: true,
            ..self
        };
        next.score[player] += u32::from(chair);
        next
    }

    /// Whether either player ran out of lives or reached `winning_score`.
    pub fn is_over(&self, winning_score: u32) -> bool {
        self.life.contains(&0) || self.score.iter().any(|&s| s >= winning_score)
    }

    /// Outcome from player 0's perspective: +1 if player 0 reached the
    /// winning score or player 1 ran out of lives, -1 otherwise.
    ///
    /// Only meaningful once [`is_over`](Self::is_over) holds.
    pub fn outcome(&self, winning_score: u32) -> f64 {
        if self.score[0] >= winning_score || self.life[1] == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

impl InfoState for Position {
    fn key(&self) -> String {
        format!(
            "p{}|{}|{}|{}-{}|{}-{}",
            self.active_player,
            if self.awaiting_commit { 'c' } else { 'r' },
            self.remaining_chairs,
            self.life[0],
            self.life[1],
            self.score[0],
            self.score[1]
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{} to {} | chairs {} | life {:?} | score {:?}",
            self.active_player,
            if self.awaiting_commit { "commit" } else { "resolve" },
            self.remaining_chairs,
            self.life,
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Position {
        Position::initial(0, ChairSet::full(3), 1)
    }

    #[test]
    fn test_initial_position() {
        let pos = start();
        assert_eq!(pos.active_player, 0);
        assert!(pos.awaiting_commit);
        assert_eq!(pos.life, [1, 1]);
        assert_eq!(pos.score, [0, 0]);
        assert_eq!(pos.remaining_chairs.len(), 3);
    }

    #[test]
    fn test_commit_hands_over() {
        let pos = start().after_commit();
        assert_eq!(pos.active_player, 1);
        assert!(!pos.awaiting_commit);
        assert_eq!(pos.remaining_chairs, ChairSet::full(3));
    }

    #[test]
    fn test_hit_and_safe() {
        let resolving = start().after_commit();

        let hit = resolving.after_hit();
        assert_eq!(hit.life, [1, 0]);
        assert_eq!(hit.score, [0, 0]);
        assert_eq!(hit.active_player, 1);
        assert!(hit.awaiting_commit);
        assert_eq!(hit.remaining_chairs.len(), 3);

        let safe = resolving.after_safe(1);
        assert_eq!(safe.score, [0, 1]);
        assert_eq!(safe.life, [1, 1]);
        assert_eq!(safe.remaining_chairs.iter().collect::<Vec<_>>(), vec![2, 3]);

        // the source position is untouched
        assert_eq!(resolving.score, [0, 0]);
        assert_eq!(resolving.remaining_chairs.len(), 3);
    }

    #[test]
    fn test_hit_resets_score() {
        let mut pos = Position::initial(1, ChairSet::full(4), 2).after_commit();
        pos.score = [5, 7];
        let hit = pos.after_hit();
        assert_eq!(hit.score, [0, 7]);
        assert_eq!(hit.life, [1, 2]);
    }

    #[test]
    fn test_outcome_is_player_zero_relative() {
        let mut pos = start();
        pos.life = [1, 0];
        assert!(pos.is_over(3));
        assert_eq!(pos.outcome(3), 1.0);

        pos.life = [0, 1];
        assert_eq!(pos.outcome(3), -1.0);

        pos.life = [1, 1];
        pos.score = [0, 3];
        assert!(pos.is_over(3));
        assert_eq!(pos.outcome(3), -1.0);

        pos.score = [4, 0];
        assert_eq!(pos.outcome(3), 1.0);
    }

    #[test]
    fn test_info_key() {
        assert_eq!(start().key(), "p0|c|{1,2,3}|1-1|0-0");
        assert_eq!(start().after_commit().key(), "p1|r|{1,2,3}|1-1|0-0");
    }
}
