//! The two-phase turn protocol and the node identity it produces.

use std::fmt;

use crate::games::electric_chair::chairs::Chair;
use crate::games::electric_chair::position::Position;
use crate::impl_game_state;

/// Identity of a game-graph node: the pending secret commitment (if any)
/// plus the resulting public position.
///
/// Two action sequences that end in equal records share one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionRecord {
    commitment: Option<Chair>,
    position: Position,
}

impl_game_state!(TransitionRecord);

impl TransitionRecord {
    /// Create a record.
    ///
    /// # Panics
    /// Panics if `commitment` names a chair outside
    /// `position.remaining_chairs`.
    pub fn new(commitment: Option<Chair>, position: Position) -> Self {
        if let Some(chair) = commitment {
            assert!(
                position.remaining_chairs.contains(chair),
                "committed chair {} is not among the remaining chairs {}",
                chair,
                position.remaining_chairs
            );
        }
        Self {
            commitment,
            position,
        }
    }

    /// Record of a game that has not started: nothing committed.
    pub fn root(position: Position) -> Self {
        Self::new(None, position)
    }

    /// Whether a chair is secretly committed and awaiting resolution.
    pub fn has_commitment(&self) -> bool {
        self.commitment.is_some()
    }

    /// The committed (live) chair, if any.
    pub fn committed_chair(&self) -> Option<Chair> {
        self.commitment
    }

    /// The public position after this step.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Apply `chair` as the next step.
    ///
    /// Without a commitment the active player marks `chair` live. With one,
    /// the active player sits on `chair`: a hit when it is the live chair,
    /// safe otherwise.
    ///
    /// # Panics
    /// Panics if `chair` is not among the remaining chairs.
    pub fn next(&self, chair: Chair) -> Self {
        assert!(
            self.position.remaining_chairs.contains(chair),
            "chair {} is not among the remaining chairs {}",
            chair,
            self.position.remaining_chairs
        );

        match self.commitment {
            None => Self::new(Some(chair), self.position.after_commit()),
            Some(live) if live == chair => Self::new(None, self.position.after_hit()),
            Some(_) => Self::new(None, self.position.after_safe(chair)),
        }
    }
}

impl fmt::Display for TransitionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.commitment {
            Some(chair) => write!(f, "[live {}] {}", chair, self.position),
            None => write!(f, "[open] {}", self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::electric_chair::chairs::ChairSet;

    fn root() -> TransitionRecord {
        TransitionRecord::root(Position::initial(0, ChairSet::full(3), 1))
    }

    #[test]
    fn test_commit_step() {
        let committed = root().next(2);
        assert!(committed.has_commitment());
        assert_eq!(committed.committed_chair(), Some(2));
        assert_eq!(committed.position().active_player, 1);
        assert!(!committed.position().awaiting_commit);
        assert_eq!(committed.position().life, root().position().life);
        assert_eq!(committed.position().score, root().position().score);
    }

    #[test]
    fn test_round_trip_safe() {
        let after = root().next(2).next(1);
        assert!(!after.has_commitment());
        assert!(after.position().awaiting_commit);
        assert_eq!(after.position().score, [0, 1]);
        assert_eq!(after.position().life, [1, 1]);
        assert_eq!(after.position().remaining_chairs.len(), 2);
    }

    #[test]
    fn test_round_trip_hit() {
        let after = root().next(2).next(2);
        assert!(!after.has_commitment());
        assert!(after.position().awaiting_commit);
        assert_eq!(after.position().life, [1, 0]);
        assert_eq!(after.position().score, [0, 0]);
        assert_eq!(after.position().remaining_chairs.len(), 3);
    }

    #[test]
    fn test_different_commitments_are_distinct() {
        assert_ne!(root().next(1), root().next(2));
        assert_eq!(root().next(1).position(), root().next(2).position());
    }

    #[test]
    fn test_hits_on_different_chairs_merge() {
        assert_eq!(root().next(1).next(1), root().next(3).next(3));
    }

    #[test]
    #[should_panic(expected = "not among the remaining chairs")]
    fn test_commitment_outside_pool() {
        let pos = Position::initial(0, ChairSet::full(3), 1).after_commit();
        TransitionRecord::new(Some(5), pos);
    }

    #[test]
    #[should_panic(expected = "not among the remaining chairs")]
    fn test_illegal_action() {
        root().next(2).next(1).next(1);
    }
}
