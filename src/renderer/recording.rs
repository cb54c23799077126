//! Headless renderer that records every call

use crate::sim::Round;

use super::Renderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    ClearBoard,
    Present(Round),
    CorrectFeedback(u64),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds presented so far, oldest first
    pub fn presented(&self) -> impl Iterator<Item = &Round> {
        self.calls.iter().filter_map(|c| match c {
            RenderCall::Present(round) => Some(round),
            _ => None,
        })
    }

    pub fn feedback_scores(&self) -> Vec<u64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RenderCall::CorrectFeedback(score) => Some(*score),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::ClearBoard))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear_board(&mut self) {
        self.calls.push(RenderCall::ClearBoard);
    }

    fn present(&mut self, round: &Round) {
        self.calls.push(RenderCall::Present(round.clone()));
    }

    fn present_correct_feedback(&mut self, score: u64) {
        self.calls.push(RenderCall::CorrectFeedback(score));
    }
}
