//! Round lifecycle state machine
//!
//! ```text
//!   AwaitingSelection --(target picked)--> RoundTransition
//!          ^                                     |
//!          +-------(transition delay elapsed)----+
//! ```
//!
//! The score is bumped before the phase changes and both happen inside the
//! same call, so a second pick on the same round always lands in
//! `RoundTransition` and is ignored.

use serde::{Deserialize, Serialize};

use super::catalog::{Color, ShapeKind};
use super::generator::PuzzleGenerator;
use super::rng::{RandomSource, SeededSource};
use super::state::{Quadrant, Round, Session};
use crate::error::{ConfigError, InvalidSelection};
use crate::renderer::Renderer;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Round on screen, waiting for the player
    AwaitingSelection,
    /// Target found, waiting out the delay before the next round
    RoundTransition,
}

/// Result of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Correct { score: u64 },
    Ignored(InvalidSelection),
}

pub struct RoundEngine<R: Renderer, S: RandomSource = SeededSource> {
    generator: PuzzleGenerator<S>,
    renderer: R,
    session: Session,
    round: Round,
    phase: RoundPhase,
    transition_delay_ms: u32,
    /// Remaining delay while in `RoundTransition`
    transition_remaining_ms: u32,
}

impl<R: Renderer> RoundEngine<R, SeededSource> {
    /// Build an engine from settings, seeding from entropy when no seed is set
    pub fn from_settings(settings: &Settings, renderer: R) -> Result<Self, ConfigError> {
        let source = match settings.seed {
            Some(seed) => SeededSource::new(seed),
            None => SeededSource::from_entropy(),
        };
        log::info!("Session seed: {}", source.seed());

        let generator = PuzzleGenerator::new(&settings.colors, &settings.shapes, source)?;
        Ok(Self::new(generator, renderer, settings.transition_delay_ms))
    }
}

impl<R: Renderer, S: RandomSource> RoundEngine<R, S> {
    /// Start a session and present its first round
    pub fn new(mut generator: PuzzleGenerator<S>, mut renderer: R, transition_delay_ms: u32) -> Self {
        let round = generator.generate_round();
        let mut session = Session::new();
        session.record_round();

        renderer.clear_board();
        renderer.present(&round);

        Self {
            generator,
            renderer,
            session,
            round,
            phase: RoundPhase::AwaitingSelection,
            transition_delay_ms,
            transition_remaining_ms: 0,
        }
    }

    /// Resolve a pointer-down on quadrant `index` (0-3)
    pub fn on_shape_selected(&mut self, index: usize) -> SelectionOutcome {
        let outcome = self.resolve(index);
        match outcome {
            SelectionOutcome::Correct { score } => {
                log::info!("Round {} solved, score {}", self.round.id, score);
            }
            SelectionOutcome::Ignored(reason) => {
                log::debug!("Selection ignored: {}", reason);
            }
        }
        outcome
    }

    fn resolve(&mut self, index: usize) -> SelectionOutcome {
        let Some(quadrant) = Quadrant::from_index(index) else {
            return SelectionOutcome::Ignored(InvalidSelection::OutOfRange(index));
        };
        if self.phase != RoundPhase::AwaitingSelection {
            return SelectionOutcome::Ignored(InvalidSelection::NotAwaiting);
        }
        if !self.round.board.slot_at(quadrant).is_target {
            return SelectionOutcome::Ignored(InvalidSelection::Distractor(quadrant));
        }

        let score = self.session.award_point();
        self.phase = RoundPhase::RoundTransition;
        self.transition_remaining_ms = self.transition_delay_ms;
        self.renderer.present_correct_feedback(score);

        SelectionOutcome::Correct { score }
    }

    /// Advance the transition timer. Returns true when a new round started.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != RoundPhase::RoundTransition {
            return false;
        }

        self.transition_remaining_ms = self.transition_remaining_ms.saturating_sub(elapsed_ms);
        if self.transition_remaining_ms > 0 {
            return false;
        }

        self.start_next_round();
        true
    }

    fn start_next_round(&mut self) {
        self.round = self.generator.generate_round();
        self.session.record_round();
        self.phase = RoundPhase::AwaitingSelection;

        self.renderer.clear_board();
        self.renderer.present(&self.round);
    }

    pub fn score(&self) -> u64 {
        self.session.score()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn current_round(&self) -> &Round {
        &self.round
    }

    pub fn transition_delay_ms(&self) -> u32 {
        self.transition_delay_ms
    }

    /// Zero unless a transition is pending
    pub fn transition_remaining_ms(&self) -> u32 {
        match self.phase {
            RoundPhase::RoundTransition => self.transition_remaining_ms,
            RoundPhase::AwaitingSelection => 0,
        }
    }

    pub fn colors(&self) -> &[Color] {
        self.generator.colors()
    }

    pub fn shapes(&self) -> &[ShapeKind] {
        self.generator.shapes()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear down the session. Any pending transition is discarded.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TRANSITION_DELAY_MS;
    use crate::renderer::{RecordingRenderer, RenderCall};

    fn engine(seed: u64) -> RoundEngine<RecordingRenderer> {
        let generator = PuzzleGenerator::with_default_catalogs(SeededSource::new(seed));
        RoundEngine::new(generator, RecordingRenderer::new(), TRANSITION_DELAY_MS)
    }

    fn distractor_index(engine: &RoundEngine<RecordingRenderer>) -> usize {
        engine
            .current_round()
            .board
            .distractors()
            .next()
            .map(|s| s.quadrant.index())
            .unwrap()
    }

    #[test]
    fn test_initial_round_presented() {
        let engine = engine(1);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.phase(), RoundPhase::AwaitingSelection);
        assert_eq!(
            engine.renderer().calls,
            vec![
                RenderCall::ClearBoard,
                RenderCall::Present(engine.current_round().clone())
            ]
        );
    }

    #[test]
    fn test_correct_pick_scores_and_transitions() {
        let mut engine = engine(2);
        let target = engine.current_round().board.target_quadrant().index();

        assert_eq!(
            engine.on_shape_selected(target),
            SelectionOutcome::Correct { score: 1 }
        );
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.phase(), RoundPhase::RoundTransition);
        assert_eq!(engine.transition_remaining_ms(), TRANSITION_DELAY_MS);
        assert_eq!(engine.renderer().feedback_scores(), vec![1]);
    }

    #[test]
    fn test_distractor_is_inert() {
        let mut engine = engine(3);
        let before = engine.current_round().clone();
        let index = distractor_index(&engine);

        let outcome = engine.on_shape_selected(index);
        assert_eq!(
            outcome,
            SelectionOutcome::Ignored(InvalidSelection::Distractor(
                Quadrant::from_index(index).unwrap()
            ))
        );
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.phase(), RoundPhase::AwaitingSelection);
        assert_eq!(engine.current_round(), &before);
        assert_eq!(engine.renderer().calls.len(), 2);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut engine = engine(4);
        assert_eq!(
            engine.on_shape_selected(4),
            SelectionOutcome::Ignored(InvalidSelection::OutOfRange(4))
        );
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_double_pick_scores_once() {
        let mut engine = engine(5);
        let target = engine.current_round().board.target_quadrant().index();

        engine.on_shape_selected(target);
        assert_eq!(
            engine.on_shape_selected(target),
            SelectionOutcome::Ignored(InvalidSelection::NotAwaiting)
        );
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.renderer().feedback_scores(), vec![1]);
    }

    #[test]
    fn test_advance_waits_for_full_delay() {
        let mut engine = engine(6);
        let target = engine.current_round().board.target_quadrant().index();
        engine.on_shape_selected(target);

        assert!(!engine.advance(1500));
        assert_eq!(engine.transition_remaining_ms(), 500);
        assert_eq!(engine.current_round().id, 1);

        assert!(engine.advance(500));
        assert_eq!(engine.phase(), RoundPhase::AwaitingSelection);
        assert_eq!(engine.current_round().id, 2);
        assert_eq!(engine.session().rounds_presented(), 2);
        assert_eq!(engine.renderer().clear_count(), 2);
    }

    #[test]
    fn test_advance_ignored_while_awaiting() {
        let mut engine = engine(7);
        assert!(!engine.advance(10_000));
        assert_eq!(engine.current_round().id, 1);
    }

    #[test]
    fn test_feedback_precedes_next_round() {
        let mut engine = engine(8);
        let target = engine.current_round().board.target_quadrant().index();
        engine.on_shape_selected(target);
        engine.advance(TRANSITION_DELAY_MS);

        let calls = &engine.renderer().calls;
        assert!(matches!(calls[2], RenderCall::CorrectFeedback(1)));
        assert!(matches!(calls[3], RenderCall::ClearBoard));
        assert!(matches!(calls[4], RenderCall::Present(ref r) if r.id == 2));
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let generator = PuzzleGenerator::with_default_catalogs(SeededSource::new(9));
        let mut engine = RoundEngine::new(generator, RecordingRenderer::new(), 0);
        let target = engine.current_round().board.target_quadrant().index();
        engine.on_shape_selected(target);
        assert_eq!(engine.phase(), RoundPhase::RoundTransition);
        assert!(engine.advance(0));
    }

    #[test]
    fn test_from_settings_rejects_small_catalog() {
        let settings = Settings {
            shapes: vec![ShapeKind::Circle, ShapeKind::Square],
            ..Settings::default()
        };
        let result = RoundEngine::from_settings(&settings, RecordingRenderer::new());
        assert!(matches!(result, Err(ConfigError::CatalogTooSmall { .. })));
    }

    #[test]
    fn test_from_settings_with_seed_is_reproducible() {
        let settings = Settings {
            seed: Some(1234),
            ..Settings::default()
        };
        let a = RoundEngine::from_settings(&settings, RecordingRenderer::new()).unwrap();
        let b = RoundEngine::from_settings(&settings, RecordingRenderer::new()).unwrap();
        assert_eq!(a.current_round(), b.current_round());
        assert_eq!(a.transition_delay_ms(), TRANSITION_DELAY_MS);
    }
}
