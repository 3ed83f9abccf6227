use super::Cell;
use ahash::AHashSet;
use anyhow::Result;
use std::fmt;

/// Sparse Game of Life field (B3/S23) on the unbounded plane.
///
/// The only state is the set of live cells; dead cells are never stored, so
/// an update costs time proportional to the population.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    live_cells: AHashSet<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the rectangle `width x height` starting at `origin` with random cells.
    ///
    /// `fill_rate` - probability of cell being alive, clamped to `[0, 1]` (NaN counts as 0)
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(origin: Cell, width: u32, height: u32, fill_rate: f64, seed: Option<u64>) -> Self {
        use rand::{Rng, SeedableRng};

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let mut board = Self::new();
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                if rng.gen_bool(fill_rate) {
                    board.live_cells.insert(origin.offset(x, y));
                }
            }
        }
        board
    }

    /// Parses an RLE pattern with its top left corner at `(0, 0)`.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        Ok(crate::parse_rle(data)?.into_iter().collect())
    }

    /// Iterates over the live cells in unspecified order.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live_cells.iter().copied()
    }

    pub fn count_live_neighbors(&self, cell: Cell) -> usize {
        cell.neighbors().filter(|n| self.is_alive(*n)).count()
    }

    /// Survival half of the rule.
    ///
    /// Liveness of `cell` itself is not checked: callers pass live cells only.
    pub fn stays_alive(&self, cell: Cell) -> bool {
        (2..=3).contains(&self.count_live_neighbors(cell))
    }

    /// Birth half of the rule, independent of the liveness of `cell`.
    pub fn reproduces(&self, cell: Cell) -> bool {
        self.count_live_neighbors(cell) == 3
    }

    /// Advances the field by one generation.
    ///
    /// Only live cells and their dead neighbors are visited: a cell with no
    /// live neighbors cannot be born.
    pub fn update(&mut self) {
        let mut next = AHashSet::with_capacity(self.live_cells.len());
        for &cell in &self.live_cells {
            if self.stays_alive(cell) {
                next.insert(cell);
            }
            for n in cell.neighbors() {
                if !self.is_alive(n) && self.reproduces(n) {
                    next.insert(n);
                }
            }
        }
        log::trace!(
            "update: population {} -> {}",
            self.live_cells.len(),
            next.len()
        );
        self.live_cells = next;
    }

    /// Updates the field `generations` times.
    pub fn step(&mut self, generations: u64) {
        for _ in 0..generations {
            if self.is_empty() {
                break;
            }
            self.update();
        }
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.live_cells.contains(&cell)
    }

    /// Flips the state of `cell`; returns `true` if it is alive afterwards.
    pub fn toggle_cell(&mut self, cell: Cell) -> bool {
        if self.live_cells.remove(&cell) {
            false
        } else {
            self.live_cells.insert(cell);
            true
        }
    }

    pub fn set_cell(&mut self, cell: Cell, alive: bool) {
        if alive {
            self.live_cells.insert(cell);
        } else {
            self.live_cells.remove(&cell);
        }
    }

    /// Makes the `cells` of a pattern alive, shifted by `origin`.
    pub fn place(&mut self, cells: impl IntoIterator<Item = Cell>, origin: Cell) {
        self.live_cells
            .extend(cells.into_iter().map(|c| origin.offset(c.x, c.y)));
    }

    pub fn clear_board(&mut self) {
        self.live_cells.clear();
    }

    pub fn population(&self) -> usize {
        self.live_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live_cells.is_empty()
    }

    /// Inclusive bounding box `(top_left, bottom_right)` of the live cells.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.live_cells.iter();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Cell> for Board {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            live_cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for Board {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        self.live_cells.extend(iter);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.live_cells().collect::<Vec<_>>();
        cells.sort_unstable();
        write!(f, "{{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}}")
    }
}
