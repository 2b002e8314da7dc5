use crate::{Cell, Grid};
use log::{debug, trace};
use rand::Rng;

/// Result of a single [`Simulator::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The next generation differs from the previous one and is now current.
    Advanced,
    /// The next generation is identical to the current one; nothing was committed.
    Stabilized,
}

/// Conway's Game of Life on a bounded grid.
///
/// Cells outside of the grid are treated as permanently dead: the edges are
/// not stitched together.
pub struct Simulator {
    grid: Grid,
}

impl Simulator {
    /// Creates a `width x height` field seeded with fair coin flips from `rng`.
    pub fn new(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        Self::from_grid(Grid::random(width, height, rng))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Current generation.
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Counts alive cells in the Moore neighborhood of `(row, col)`.
    ///
    /// The cell itself and positions outside of the grid are not counted.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        count_live_neighbors(&self.grid, row, col)
    }

    /// Computes the generation following the current one without committing it.
    pub fn next_generation(&self) -> Grid {
        let (w, h) = (self.grid.width(), self.grid.height());
        let mut next = Grid::blank(w, h);
        for row in 0..h {
            for col in 0..w {
                let neibs = self.count_live_neighbors(row, col);
                let alive = if self.grid.get(row, col).is_alive() {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                next.set(row, col, Cell::from_alive(alive));
            }
        }
        next
    }

    /// Replaces the current generation with the next one, unless they are equal.
    ///
    /// Once [`Step::Stabilized`] is returned every further call returns it too.
    pub fn advance(&mut self) -> Step {
        let next = self.next_generation();
        if crate::grids_equal(&self.grid, &next) {
            debug!("stabilized with population {}", next.population());
            return Step::Stabilized;
        }
        trace!(
            "advanced: population {} -> {}",
            self.grid.population(),
            next.population()
        );
        self.grid = next;
        Step::Advanced
    }
}

fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let (w, h) = (grid.width(), grid.height());
    assert!(
        row < h && col < w,
        "cell ({row}, {col}) is outside of {w}x{h} grid"
    );
    let rows = row.saturating_sub(1)..=(row + 1).min(h - 1);
    let cols = col.saturating_sub(1)..=(col + 1).min(w - 1);
    let mut count = 0;
    for r in rows {
        for c in cols.clone() {
            if (r, c) != (row, col) && grid.get(r, c).is_alive() {
                count += 1;
            }
        }
    }
    count
}
