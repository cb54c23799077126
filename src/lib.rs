//! Shape Spy - an "I spy" shape matching puzzle
//!
//! Core modules:
//! - `sim`: Round generation and outcome resolution (catalogs, RNG, engine)
//! - `renderer`: Presentation boundary plus text and recording renderers
//! - `prompt`: "I spy" prompt and feedback text
//! - `settings`: Data-driven configuration
//! - `error`: Configuration and selection errors

pub mod error;
pub mod prompt;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{BoardError, ConfigError, InvalidSelection};
pub use prompt::Prompt;
pub use renderer::Renderer;
pub use settings::Settings;
pub use sim::{PuzzleGenerator, RoundEngine};

/// Game configuration constants
pub mod consts {
    /// Shapes placed on the board each round (one per quadrant)
    pub const BOARD_SIZE: usize = 4;
    /// Minimum distinct entries a color or shape catalog must provide
    pub const MIN_CATALOG_SIZE: usize = BOARD_SIZE;
    /// Delay between a correct pick and the next round
    pub const TRANSITION_DELAY_MS: u32 = 2000;
}
