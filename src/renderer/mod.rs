//! Presentation boundary
//!
//! The engine pushes rounds and feedback through [`Renderer`]; pointer input
//! comes back as `RoundEngine::on_shape_selected`. Only the target slot
//! should be wired to input, distractors are inert.

pub mod recording;
pub mod text;

pub use recording::{RecordingRenderer, RenderCall};
pub use text::TextRenderer;

use crate::sim::Round;

pub trait Renderer {
    /// Drop everything shown for the previous round
    fn clear_board(&mut self);

    /// Show one shape per quadrant plus the prompt for `round`
    fn present(&mut self, round: &Round);

    /// Acknowledge a correct pick, before the next round is scheduled
    fn present_correct_feedback(&mut self, score: u64);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear_board(&mut self) {
        (**self).clear_board()
    }

    fn present(&mut self, round: &Round) {
        (**self).present(round)
    }

    fn present_correct_feedback(&mut self, score: u64) {
        (**self).present_correct_feedback(score)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn clear_board(&mut self) {
        (**self).clear_board()
    }

    fn present(&mut self, round: &Round) {
        (**self).present(round)
    }

    fn present_correct_feedback(&mut self, score: u64) {
        (**self).present_correct_feedback(score)
    }
}
