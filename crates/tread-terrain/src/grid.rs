//! Working grid for one solver attempt: a `rows × cols` matrix of candidate domains.

use thiserror::Error;

use crate::Direction;
use crate::catalog::{TileCatalog, TileId};

/// Errors from grid construction and cell lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate outside `[0, rows) × [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },

    /// A grid with zero rows or columns.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested height.
        rows: usize,
        /// Requested width.
        cols: usize,
    },
}

/// One grid position and the tiles still possible there.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
    /// Candidate tiles in ascending id order.
    pub domain: Vec<TileId>,
    /// Set once the solver has committed this cell to a single tile.
    pub collapsed: bool,
}

impl Cell {
    /// Number of remaining candidates.
    #[inline]
    pub fn entropy(&self) -> usize {
        self.domain.len()
    }

    /// The committed tile, if the domain is a singleton.
    pub fn tile(&self) -> Option<TileId> {
        match self.domain.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Row-major matrix of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid where every cell may still be any tile of `catalog`.
    pub fn new(rows: usize, cols: usize, catalog: &TileCatalog) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let full: Vec<TileId> = catalog.ids().collect();
        let cells = (0..rows * cols)
            .map(|i| Cell {
                row: i / cols,
                col: i % cols,
                domain: full.clone(),
                collapsed: false,
            })
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Restores every cell to the full domain, reusing the allocations.
    pub fn reset(&mut self, catalog: &TileCatalog) {
        for cell in &mut self.cells {
            cell.domain.clear();
            cell.domain.extend(catalog.ids());
            cell.collapsed = false;
        }
    }

    /// Grid height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.in_bounds(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let i = self.index(row, col)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, GridError> {
        let i = self.index(row, col)?;
        Ok(&mut self.cells[i])
    }

    /// In-bounds neighbour coordinates of `(row, col)`. No wraparound.
    pub fn neighbor_coords(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (Direction, usize, usize)> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        Direction::ALL.into_iter().filter_map(move |dir| {
            let (dr, dc) = dir.offset();
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            (nr < rows && nc < cols).then_some((dir, nr, nc))
        })
    }

    /// Up to four `(direction, neighbour)` pairs around `(row, col)`.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (Direction, &Cell)> {
        self.neighbor_coords(row, col)
            .map(move |(dir, nr, nc)| (dir, &self.cells[nr * self.cols + nc]))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major index of an in-bounds coordinate.
    #[inline]
    pub(crate) fn flat_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.in_bounds(row, col));
        row * self.cols + col
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// `true` once every cell is collapsed to a single tile.
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.collapsed && cell.domain.len() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileDef;

    fn catalog() -> TileCatalog {
        TileCatalog::new(
            vec![
                TileDef::new("a", [0, 0, 0, 0], 1.0),
                TileDef::new("b", [1, 1, 1, 1], 1.0),
                TileDef::new("c", [2, 2, 2, 2], 1.0),
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_grid_has_full_domains() {
        let grid = Grid::new(2, 3, &catalog()).unwrap();
        assert_eq!(grid.cells().len(), 6);
        for cell in grid.cells() {
            assert_eq!(cell.domain, vec![TileId(0), TileId(1), TileId(2)]);
            assert!(!cell.collapsed);
        }
        let cell = grid.cell_at(1, 2).unwrap();
        assert_eq!((cell.row, cell.col), (1, 2));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4, &catalog()).unwrap_err(),
            GridError::EmptyDimensions { rows: 0, cols: 4 }
        );
        assert!(Grid::new(4, 0, &catalog()).is_err());
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let grid = Grid::new(2, 3, &catalog()).unwrap();
        assert!(matches!(
            grid.cell_at(2, 0),
            Err(GridError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(grid.cell_at(0, 3).is_err());
        assert!(grid.cell_at(1, 2).is_ok());
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let grid = Grid::new(3, 3, &catalog()).unwrap();
        let dirs: Vec<Direction> = grid.neighbors(0, 0).map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![Direction::East, Direction::South]);

        let dirs: Vec<Direction> = grid.neighbors(2, 2).map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![Direction::North, Direction::West]);
    }

    #[test]
    fn test_edge_and_center_neighbor_counts() {
        let grid = Grid::new(3, 3, &catalog()).unwrap();
        assert_eq!(grid.neighbors(0, 1).count(), 3);
        assert_eq!(grid.neighbors(1, 1).count(), 4);

        let north = grid
            .neighbors(1, 1)
            .find(|(d, _)| *d == Direction::North)
            .map(|(_, cell)| (cell.row, cell.col));
        assert_eq!(north, Some((0, 1)));
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let grid = Grid::new(1, 1, &catalog()).unwrap();
        assert_eq!(grid.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn test_reset_restores_full_domains() {
        let catalog = catalog();
        let mut grid = Grid::new(2, 2, &catalog).unwrap();
        {
            let cell = grid.cell_at_mut(0, 1).unwrap();
            cell.domain = vec![TileId(2)];
            cell.collapsed = true;
        }
        grid.cell_at_mut(1, 0).unwrap().domain.clear();

        grid.reset(&catalog);
        for cell in grid.cells() {
            assert_eq!(cell.entropy(), 3);
            assert!(!cell.collapsed);
        }
    }

    #[test]
    fn test_cell_tile_only_for_singleton() {
        let grid = Grid::new(1, 1, &catalog()).unwrap();
        assert_eq!(grid.cell_at(0, 0).unwrap().tile(), None);

        let cell = Cell {
            row: 0,
            col: 0,
            domain: vec![TileId(1)],
            collapsed: true,
        };
        assert_eq!(cell.tile(), Some(TileId(1)));
    }
}
