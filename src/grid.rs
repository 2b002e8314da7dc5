use anyhow::{bail, Result};
use rand::Rng;
use std::str::FromStr;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Fixed-size field of cells stored row by row.
///
/// The dimensions never change after construction and every position always
/// holds a valid [`Cell`]. Equality is structural: two grids are equal iff they
/// have the same dimensions and every pair of corresponding cells matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid of `height` rows and `width` columns with all cells dead.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![Cell::Dead; width * height],
            width,
            height,
        }
    }

    /// Creates a grid where every cell is decided by a fair coin flip drawn from `rng`.
    ///
    /// Cells are drawn row by row, left to right, so the same seeded source
    /// always yields the same grid.
    pub fn random(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let mut result = Self::blank(width, height);
        for cell in result.cells.iter_mut() {
            *cell = Cell::from_alive(rng.gen_bool(0.5));
        }
        result
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside of {}x{} grid",
            self.width,
            self.height
        );
        col + row * self.width
    }
}

/// Structural equality of two generations.
pub fn grids_equal(a: &Grid, b: &Grid) -> bool {
    a == b
}

impl FromStr for Grid {
    type Err = anyhow::Error;

    /// Parses one row per line; `*`, `#` and `O` are alive, `.`, `_` and `0` are dead.
    /// Whitespace inside a line and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows: Vec<Vec<Cell>> = vec![];
        for (line_no, line) in s.lines().enumerate() {
            let mut row = vec![];
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = match ch {
                    '*' | '#' | 'O' => Cell::Alive,
                    '.' | '_' | '0' => Cell::Dead,
                    _ => bail!("unexpected symbol {ch:?} on line {}", line_no + 1),
                };
                row.push(cell);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let Some(width) = rows.first().map(Vec::len) else {
            bail!("grid has no rows");
        };
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            bail!(
                "row {} has {} cells, expected {}",
                bad + 1,
                rows[bad].len(),
                width
            );
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
