//! Wave Function Collapse solver over a [`Grid`].
//!
//! One attempt repeats three phases until every cell is collapsed or a
//! contradiction is found:
//!
//! 1. **Select** the uncollapsed cell with the fewest candidates, breaking
//!    ties uniformly at random.
//! 2. **Collapse** it to one tile drawn proportionally to tile weight.
//! 3. **Propagate** the new constraint outwards with an explicit worklist,
//!    filtering each neighbour to tiles whose facing socket is still allowed.
//!
//! A contradiction ends the attempt; the caller discards the grid.

use hashbrown::HashSet;
use rand::Rng;
use thiserror::Error;

use crate::catalog::{SocketId, TileCatalog, TileId};
use crate::grid::{Cell, Grid};

/// Some cell ran out of candidates. The attempt cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contradiction at cell ({row}, {col})")]
pub struct Contradiction {
    /// Row of the emptied cell.
    pub row: usize,
    /// Column of the emptied cell.
    pub col: usize,
}

/// Result of a single [`Solver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A cell was committed and its constraints propagated.
    Collapsed {
        /// Row of the collapsed cell.
        row: usize,
        /// Column of the collapsed cell.
        col: usize,
        /// Chosen tile.
        tile: TileId,
    },
    /// No uncollapsed cell remains.
    Done,
}

/// Counters for one successful attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Cells collapsed by weighted draw.
    pub collapses: usize,
    /// Neighbour domains narrowed during propagation.
    pub narrowed: usize,
}

/// Stateless WFC engine bound to a catalog. All attempt state lives in the [`Grid`].
pub struct Solver<'a> {
    catalog: &'a TileCatalog,
}

impl<'a> Solver<'a> {
    /// Creates a solver for grids built from `catalog`.
    pub fn new(catalog: &'a TileCatalog) -> Self {
        Self { catalog }
    }

    /// Runs one attempt to completion.
    ///
    /// On `Err` the grid is left partially collapsed and must not be used.
    pub fn run<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<SolveStats, Contradiction> {
        let mut stats = SolveStats::default();
        loop {
            let Some((row, col)) = self.select_cell(grid, rng)? else {
                return Ok(stats);
            };
            let i = grid.flat_index(row, col);
            self.collapse_cell(&mut grid.cells_mut()[i], rng)?;
            stats.collapses += 1;
            stats.narrowed += self.propagate(grid, row, col)?;
        }
    }

    /// Performs one select/collapse/propagate cycle.
    pub fn step<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Step, Contradiction> {
        let Some((row, col)) = self.select_cell(grid, rng)? else {
            return Ok(Step::Done);
        };
        let i = grid.flat_index(row, col);
        let tile = self.collapse_cell(&mut grid.cells_mut()[i], rng)?;
        self.propagate(grid, row, col)?;
        Ok(Step::Collapsed { row, col, tile })
    }

    /// Picks the uncollapsed cell with minimum entropy.
    ///
    /// Ties are resolved by reservoir sampling so every tied cell is equally
    /// likely. Returns `Ok(None)` when every cell is collapsed, and a
    /// [`Contradiction`] if any uncollapsed cell has an empty domain.
    pub fn select_cell<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Option<(usize, usize)>, Contradiction> {
        let mut best: Option<(usize, usize)> = None;
        let mut min_entropy = usize::MAX;
        let mut ties = 0u32;

        for cell in grid.cells().iter().filter(|cell| !cell.collapsed) {
            let entropy = cell.entropy();
            if entropy == 0 {
                return Err(Contradiction {
                    row: cell.row,
                    col: cell.col,
                });
            }
            if entropy < min_entropy {
                min_entropy = entropy;
                best = Some((cell.row, cell.col));
                ties = 1;
            } else if entropy == min_entropy {
                ties += 1;
                if rng.random_range(0..ties) == 0 {
                    best = Some((cell.row, cell.col));
                }
            }
        }

        Ok(best)
    }

    /// Commits `cell` to one tile drawn proportionally to catalog weight.
    pub fn collapse_cell<R: Rng + ?Sized>(
        &self,
        cell: &mut Cell,
        rng: &mut R,
    ) -> Result<TileId, Contradiction> {
        let tile = self
            .weighted_choice(&cell.domain, rng)
            .ok_or(Contradiction {
                row: cell.row,
                col: cell.col,
            })?;
        cell.domain.clear();
        cell.domain.push(tile);
        cell.collapsed = true;
        tracing::trace!(row = cell.row, col = cell.col, tile = tile.0, "collapsed");
        Ok(tile)
    }

    /// Draws from `domain` with probability `weight / total_weight`.
    ///
    /// Walks the domain subtracting weights from a uniform draw in
    /// `[0, total)` and takes the tile where the remainder drops to zero or
    /// below. If rounding leaves a positive remainder the first candidate wins.
    pub fn weighted_choice<R: Rng + ?Sized>(
        &self,
        domain: &[TileId],
        rng: &mut R,
    ) -> Option<TileId> {
        let first = *domain.first()?;
        let total: f64 = domain.iter().map(|&id| self.catalog.weight(id)).sum();
        let mut remainder = rng.random::<f64>() * total;
        for &id in domain {
            remainder -= self.catalog.weight(id);
            if remainder <= 0.0 {
                return Some(id);
            }
        }
        Some(first)
    }

    /// Propagates constraints outward from `(row, col)` until stable.
    ///
    /// Returns how many neighbour domains were narrowed. Stops at the first
    /// neighbour whose domain empties.
    pub fn propagate(
        &self,
        grid: &mut Grid,
        row: usize,
        col: usize,
    ) -> Result<usize, Contradiction> {
        let mut worklist = vec![(row, col)];
        let mut allowed: HashSet<SocketId> = HashSet::new();
        let mut narrowed = 0;

        while let Some((r, c)) = worklist.pop() {
            let current = grid.flat_index(r, c);
            for (dir, nr, nc) in grid.neighbor_coords(r, c) {
                let n = grid.flat_index(nr, nc);
                let cells = grid.cells_mut();
                if cells[n].collapsed {
                    continue;
                }

                allowed.clear();
                allowed.extend(
                    cells[current]
                        .domain
                        .iter()
                        .map(|&id| self.catalog.socket(id, dir)),
                );

                let facing = dir.opposite();
                let neighbor = &mut cells[n];
                let before = neighbor.domain.len();
                neighbor
                    .domain
                    .retain(|&id| allowed.contains(&self.catalog.socket(id, facing)));

                if neighbor.domain.is_empty() {
                    return Err(Contradiction { row: nr, col: nc });
                }
                if neighbor.domain.len() < before {
                    narrowed += 1;
                    worklist.push((nr, nc));
                }
            }
        }

        Ok(narrowed)
    }
}
