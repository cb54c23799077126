//! Round generation
//!
//! Index 0 of every option list is reserved for the answer, so the target
//! never has to be searched for after the board is laid out.

use super::catalog::{COLORS, Color, SHAPES, ShapeKind};
use super::rng::{RandomSource, SeededSource, shuffle};
use super::state::{Board, BoardSlot, Combination, Quadrant, Round};
use crate::consts::{BOARD_SIZE, MIN_CATALOG_SIZE};
use crate::error::{CatalogKind, ConfigError};

/// Intermediate result of generation, before quadrant ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    pub target: Combination,
    /// Distinct colors, target color first
    pub color_options: [Color; BOARD_SIZE],
    /// Distinct shapes, target shape first
    pub shape_options: [ShapeKind; BOARD_SIZE],
    /// Quadrant assigned to each option index (a permutation)
    pub placements: [Quadrant; BOARD_SIZE],
}

impl RoundPlan {
    /// Lay the plan out on a board, option 0 being the target
    pub fn into_round(self, id: u64) -> Round {
        let mut option_at = [0usize; BOARD_SIZE];
        for (i, quadrant) in self.placements.iter().enumerate() {
            option_at[quadrant.index()] = i;
        }

        let slots = std::array::from_fn(|q| {
            let i = option_at[q];
            BoardSlot {
                quadrant: Quadrant::ALL[q],
                combination: Combination::new(self.color_options[i], self.shape_options[i]),
                is_target: i == 0,
            }
        });

        Round {
            id,
            target: self.target,
            board: Board::from_ordered(slots),
        }
    }
}

/// Builds rounds from the color and shape catalogs
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<S = SeededSource> {
    colors: Vec<Color>,
    shapes: Vec<ShapeKind>,
    source: S,
    next_round_id: u64,
}

impl<S: RandomSource> PuzzleGenerator<S> {
    /// Create a generator over custom catalogs.
    ///
    /// Duplicate catalog entries are dropped. Each catalog must still hold
    /// enough distinct entries to give every quadrant a different one.
    pub fn new(colors: &[Color], shapes: &[ShapeKind], source: S) -> Result<Self, ConfigError> {
        let colors = distinct(colors);
        let shapes = distinct(shapes);

        check_catalog(CatalogKind::Colors, colors.len())?;
        check_catalog(CatalogKind::Shapes, shapes.len())?;

        Ok(Self {
            colors,
            shapes,
            source,
            next_round_id: 1,
        })
    }

    /// Generator over the full built-in catalogs
    pub fn with_default_catalogs(source: S) -> Self {
        Self {
            colors: COLORS.to_vec(),
            shapes: SHAPES.to_vec(),
            source,
            next_round_id: 1,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn shapes(&self) -> &[ShapeKind] {
        &self.shapes
    }

    /// Draw a target and the option lists without assigning an id
    pub fn plan_round(&mut self) -> RoundPlan {
        let color = self.colors[self.source.next_int(self.colors.len())];
        let shape = self.shapes[self.source.next_int(self.shapes.len())];

        let color_options = pick_options(color, &self.colors, &mut self.source);
        let shape_options = pick_options(shape, &self.shapes, &mut self.source);

        // Sample quadrants without replacement
        let mut pool = Quadrant::ALL.to_vec();
        let source = &mut self.source;
        let placements = std::array::from_fn(|_| pool.remove(source.next_int(pool.len())));

        RoundPlan {
            target: Combination::new(color, shape),
            color_options,
            shape_options,
            placements,
        }
    }

    /// Generate the next round
    pub fn generate_round(&mut self) -> Round {
        let id = self.next_round_id;
        self.next_round_id += 1;

        let round = self.plan_round().into_round(id);
        log::debug!(
            "Round {}: spy {} in {:?}",
            round.id,
            round.target,
            round.board.target_quadrant()
        );
        round
    }
}

/// Shuffle the catalog and fill up behind the target with unseen entries
fn pick_options<T, R>(target: T, catalog: &[T], source: &mut R) -> [T; BOARD_SIZE]
where
    T: Copy + PartialEq,
    R: RandomSource,
{
    let mut pool = catalog.to_vec();
    shuffle(&mut pool, source);

    let mut options = [target; BOARD_SIZE];
    let mut len = 1;
    for item in pool {
        if len == BOARD_SIZE {
            break;
        }
        if !options[..len].contains(&item) {
            options[len] = item;
            len += 1;
        }
    }
    debug_assert_eq!(len, BOARD_SIZE, "catalog smaller than the board");
    options
}

fn distinct<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(*item);
        }
    }
    out
}

fn check_catalog(catalog: CatalogKind, distinct: usize) -> Result<(), ConfigError> {
    if distinct < MIN_CATALOG_SIZE {
        return Err(ConfigError::CatalogTooSmall {
            catalog,
            distinct,
            required: MIN_CATALOG_SIZE,
        });
    }
    Ok(())
}
