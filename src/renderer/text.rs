//! Plain text renderer for terminals
//!
//! Layout mirrors the board: two rows of quadrants with the prompt band
//! between them.
//!
//! ```text
//! +------------------------+------------------------+
//! | [0] RED Square         | [1] BLUE Circle        |
//! +------------------------+------------------------+
//!                I spy a RED Square
//! +------------------------+------------------------+
//! | [2] GREEN Diamond      | [3] YELLOW Triangle    |
//! +------------------------+------------------------+
//! ```

use std::io::Write;

use crate::prompt::{Prompt, feedback_text};
use crate::sim::{BoardSlot, Color, Round};

use super::Renderer;

const CELL_WIDTH: usize = 24;

pub struct TextRenderer<W: Write> {
    out: W,
    /// Emit 24-bit ANSI color escapes
    ansi: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let (r, g, b) = color.channels();
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    }

    fn separator() -> String {
        let bar = "-".repeat(CELL_WIDTH);
        format!("+{bar}+{bar}+")
    }

    fn cell(&self, slot: &BoardSlot) -> String {
        let label = format!("[{}] {}", slot.quadrant.index(), slot.combination);
        let pad = CELL_WIDTH.saturating_sub(label.len() + 1);
        // Only the color word is tinted, so pad on the plain label length
        let label = label.replacen(
            slot.combination.color.name(),
            &self.paint(slot.combination.color, slot.combination.color.name()),
            1,
        );
        format!(" {label}{}", " ".repeat(pad))
    }

    fn row(&self, left: &BoardSlot, right: &BoardSlot) -> String {
        format!("|{}|{}|", self.cell(left), self.cell(right))
    }

    fn prompt_line(&self, prompt: &Prompt) -> String {
        let width = CELL_WIDTH * 2 + 3;
        let indent = width.saturating_sub(prompt.text.len()) / 2;
        let (before, name, after) = prompt.parts();
        format!(
            "{}{before}{}{after}",
            " ".repeat(indent),
            self.paint(prompt.color, name)
        )
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            log::warn!("Text renderer write failed: {}", e);
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn clear_board(&mut self) {
        if self.ansi {
            // Clear screen and home the cursor
            self.emit("\x1b[2J\x1b[H");
        } else {
            self.emit("");
        }
    }

    fn present(&mut self, round: &Round) {
        let [tl, tr, bl, br] = round.board.slots();
        let prompt = Prompt::for_target(&round.target);
        log::debug!(
            "Presenting round {}: \"{}\" tinted {}",
            round.id,
            prompt,
            prompt.color.web_hex()
        );
        let lines = [
            Self::separator(),
            self.row(tl, tr),
            Self::separator(),
            self.prompt_line(&prompt),
            Self::separator(),
            self.row(bl, br),
            Self::separator(),
        ];
        self.emit(&lines.join("\n"));
    }

    fn present_correct_feedback(&mut self, score: u64) {
        let text = feedback_text(score);
        let text = if self.ansi {
            self.paint(Color::Green, &text)
        } else {
            text
        };
        self.emit(&text);
    }
}
