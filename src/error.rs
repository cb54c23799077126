//! Error types
//!
//! Configuration problems are fatal at construction time. Bad selections are
//! ordinary values: the engine reports and ignores them.

use std::fmt;

use crate::sim::Quadrant;

/// Which catalog a configuration problem refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Colors,
    Shapes,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Colors => f.write_str("color"),
            CatalogKind::Shapes => f.write_str("shape"),
        }
    }
}

/// Construction-time configuration failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A catalog cannot fill every quadrant with a distinct entry
    CatalogTooSmall {
        catalog: CatalogKind,
        distinct: usize,
        required: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CatalogTooSmall {
                catalog,
                distinct,
                required,
            } => write!(
                f,
                "{catalog} catalog has {distinct} distinct entries, at least {required} required"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Slots that do not form a valid board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Two slots claim the same quadrant
    RepeatedQuadrant(Quadrant),
    /// Number of slots flagged as the target, when not exactly one
    TargetCount(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::RepeatedQuadrant(q) => write!(f, "{q:?} appears more than once"),
            BoardError::TargetCount(n) => write!(f, "board has {n} targets, expected 1"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Reason a selection was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSelection {
    /// Index outside 0..=3
    OutOfRange(usize),
    /// Quadrant holds a distractor, which is inert
    Distractor(Quadrant),
    /// The current round was already answered
    NotAwaiting,
}

impl fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSelection::OutOfRange(index) => write!(f, "quadrant index {index} out of range"),
            InvalidSelection::Distractor(q) => write!(f, "{q:?} holds a distractor"),
            InvalidSelection::NotAwaiting => f.write_str("round already answered"),
        }
    }
}

impl std::error::Error for InvalidSelection {}
