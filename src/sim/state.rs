//! Round and session state
//!
//! A `Round` is immutable once built; the engine replaces it wholesale.

use serde::{Deserialize, Serialize};

use super::catalog::{Color, ShapeKind};
use crate::consts::BOARD_SIZE;
use crate::error::BoardError;

/// Board position
///
/// ```text
///    |-------|
///    | 0 | 1 |
///    |-------|
///    | 2 | 3 |
///    |-------|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; BOARD_SIZE] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One on-screen appearance: a colored shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub color: Color,
    pub shape: ShapeKind,
}

impl Combination {
    pub fn new(color: Color, shape: ShapeKind) -> Self {
        Self { color, shape }
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.shape)
    }
}

/// A shape placed in a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSlot {
    pub quadrant: Quadrant,
    pub combination: Combination,
    pub is_target: bool,
}

/// The four placed shapes of a round, stored in quadrant order
///
/// Serialized as a plain array of slots; deserializing runs the same checks
/// as [`Board::from_slots`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[BoardSlot; BOARD_SIZE]", into = "[BoardSlot; BOARD_SIZE]")]
pub struct Board {
    slots: [BoardSlot; BOARD_SIZE],
}

impl Board {
    /// Build from slots in any order. Every quadrant must appear exactly
    /// once and exactly one slot must be the target.
    pub fn from_slots(slots: [BoardSlot; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut seen = [false; BOARD_SIZE];
        for slot in &slots {
            let cell = &mut seen[slot.quadrant.index()];
            if *cell {
                return Err(BoardError::RepeatedQuadrant(slot.quadrant));
            }
            *cell = true;
        }
        let targets = slots.iter().filter(|s| s.is_target).count();
        if targets != 1 {
            return Err(BoardError::TargetCount(targets));
        }

        // Four slots over four distinct quadrants: sorting yields quadrant order
        let mut slots = slots;
        slots.sort_by_key(|s| s.quadrant);
        Ok(Self { slots })
    }

    /// Slots already indexed by quadrant, exactly one of them the target
    pub(crate) fn from_ordered(slots: [BoardSlot; BOARD_SIZE]) -> Self {
        debug_assert!(slots.iter().enumerate().all(|(i, s)| s.quadrant.index() == i));
        debug_assert_eq!(slots.iter().filter(|s| s.is_target).count(), 1);
        Self { slots }
    }

    /// Slots ordered top-left, top-right, bottom-left, bottom-right
    pub fn slots(&self) -> &[BoardSlot; BOARD_SIZE] {
        &self.slots
    }

    pub fn slot_at(&self, quadrant: Quadrant) -> &BoardSlot {
        &self.slots[quadrant.index()]
    }

    pub fn target_slot(&self) -> &BoardSlot {
        // Every constructor, deserialization included, checks for exactly one
        // target, so the fallback is unreachable
        self.slots
            .iter()
            .find(|s| s.is_target)
            .unwrap_or(&self.slots[0])
    }

    pub fn target_quadrant(&self) -> Quadrant {
        self.target_slot().quadrant
    }

    pub fn distractors(&self) -> impl Iterator<Item = &BoardSlot> {
        self.slots.iter().filter(|s| !s.is_target)
    }
}

impl TryFrom<[BoardSlot; BOARD_SIZE]> for Board {
    type Error = BoardError;

    fn try_from(slots: [BoardSlot; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl From<Board> for [BoardSlot; BOARD_SIZE] {
    fn from(board: Board) -> Self {
        board.slots
    }
}

/// One puzzle: the announced target and where everything sits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Sequence number within the generator (1-based)
    pub id: u64,
    pub target: Combination,
    pub board: Board,
}

/// Session-scoped progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Correct picks so far; never decreases
    score: u64,
    /// Rounds presented so far, including the current one
    rounds_presented: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn rounds_presented(&self) -> u64 {
        self.rounds_presented
    }

    pub(crate) fn award_point(&mut self) -> u64 {
        self.score += 1;
        self.score
    }

    pub(crate) fn record_round(&mut self) {
        self.rounds_presented += 1;
    }
}
