//! Round simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Randomness only through `RandomSource`
//! - Time only through explicit `advance` calls
//! - No rendering or platform dependencies beyond the `Renderer` trait

pub mod catalog;
pub mod engine;
pub mod generator;
pub mod rng;
pub mod state;

pub use catalog::{COLORS, Color, SHAPES, ShapeKind};
pub use engine::{RoundEngine, RoundPhase, SelectionOutcome};
pub use generator::{PuzzleGenerator, RoundPlan};
pub use rng::{RandomSource, ScriptedSource, SeededSource, shuffle};
pub use state::{Board, BoardSlot, Combination, Quadrant, Round, Session};
