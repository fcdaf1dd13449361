use std::{fmt::Display, ops::Index};

use bitflags::bitflags;

use crate::{Direction, Error, Pos};

bitflags! {
    /// State of a single cell
    ///
    /// Each cell only holds the walls on its west and south sides: the east
    /// and north ones belong to the neighbouring cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cell: u8 {
        /// The carve already passed through this cell
        const Visited   = 0b100;
        const WallWest  = 0b010;
        const WallSouth = 0b001;
        // A fresh cell
        const Walled = Self::WallWest.bits() | Self::WallSouth.bits();
    }
}
impl Default for Cell {
    fn default() -> Self {
        Cell::Walled
    }
}
impl Cell {
    #[inline(always)]
    #[must_use]
    pub fn visited(&self) -> bool {
        self.contains(Cell::Visited)
    }
    #[inline(always)]
    #[must_use]
    pub fn wall_west(&self) -> bool {
        self.contains(Cell::WallWest)
    }
    #[inline(always)]
    #[must_use]
    pub fn wall_south(&self) -> bool {
        self.contains(Cell::WallSouth)
    }
}

/// A rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    shape: [usize; 2],
    /// Cells, row by row starting from the south
    cells: Box<[Cell]>,
}

impl Grid {
    /// Allocate a fully walled, unvisited grid
    pub(crate) fn walled(shape: [usize; 2]) -> Result<Self, Error> {
        let [w, h] = shape;
        let len = usize::checked_mul(w, h).ok_or(Error::ResourceExhaustion { shape })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::ResourceExhaustion { shape })?;
        cells.resize(len, Cell::default());
        Ok(Self {
            shape,
            cells: cells.into_boxed_slice(),
        })
    }

    #[inline(always)]
    #[must_use]
    pub const fn shape(&self) -> [usize; 2] {
        self.shape
    }
    #[inline(always)]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.shape[0]
    }
    #[inline(always)]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.shape[1]
    }
    /// Number of cells, never zero
    #[inline(always)]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    #[must_use]
    pub const fn contains(&self, [x, y]: Pos) -> bool {
        x < self.shape[0] && y < self.shape[1]
    }

    #[inline(always)]
    fn linear(&self, pos: Pos) -> Option<usize> {
        let [x, y] = pos;
        self.contains(pos).then(|| y * self.shape[0] + x)
    }

    #[inline(always)]
    #[must_use]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.linear(pos).map(|l| self.cells[l])
    }

    pub(crate) fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.linear(pos).map(|l| &mut self.cells[l])
    }

    /// Wall between `pos` and the cell to its west
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn wall_west(&self, pos: Pos) -> bool {
        self[pos].wall_west()
    }

    /// Wall between `pos` and the cell to its south
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn wall_south(&self, pos: Pos) -> bool {
        self[pos].wall_south()
    }

    /// Check if a passage leads from `pos` towards `dir`
    ///
    /// Always `false` on the grid border or if `pos` is outside the grid.
    #[must_use]
    pub fn is_open(&self, pos: Pos, dir: Direction) -> bool {
        if !self.contains(pos) {
            return false;
        }
        dir.wall(pos, self.shape)
            .is_some_and(|(owner, wall)| !self[owner].contains(wall))
    }

    /// Remove the wall between `pos` and its neighbour towards `dir`
    ///
    /// Returns the neighbour, or `None` if there is none.
    pub(crate) fn open(&mut self, pos: Pos, dir: Direction) -> Option<Pos> {
        let neighbour = dir.step(pos, self.shape)?;
        let (owner, wall) = dir.wall(pos, self.shape)?;
        self.cell_mut(owner)?.remove(wall);
        Some(neighbour)
    }

    /// Cells directly reachable from `pos`
    pub fn open_neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            if self.is_open(pos, dir) {
                dir.step(pos, self.shape)
            } else {
                None
            }
        })
    }

    /// All coordinates, row by row starting from the south
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let [w, h] = self.shape;
        (0..h).flat_map(move |y| (0..w).map(move |x| [x, y]))
    }

    /// Every passage once, as the cell it starts from and a direction
    /// between [`Direction::East`] and [`Direction::North`]
    pub fn passages(&self) -> impl Iterator<Item = (Pos, Direction)> + '_ {
        self.positions().flat_map(move |pos| {
            [Direction::East, Direction::North]
                .into_iter()
                .filter(move |dir| self.is_open(pos, *dir))
                .map(move |dir| (pos, dir))
        })
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        match self.linear(pos) {
            Some(l) => &self.cells[l],
            None => panic!(
                "cell {pos:?} out of bounds for a {}x{} grid",
                self.shape[0], self.shape[1]
            ),
        }
    }
}

impl Display for Grid {
    /// Draw the grid with `#` for walls, north on top
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [w, h] = self.shape;
        let stride = w * 2 + 1;
        let mut screen = vec![true; stride * (h * 2 + 1)].into_boxed_slice();
        let mut rows = screen.chunks_mut(stride).collect::<Box<_>>();
        for [x, y] in self.positions() {
            // screen rows go south to north here, flipped on output
            rows[2 * y + 1][2 * x + 1] = false;
            if self.is_open([x, y], Direction::East) {
                rows[2 * y + 1][2 * x + 2] = false;
            }
            if self.is_open([x, y], Direction::North) {
                rows[2 * y + 2][2 * x + 1] = false;
            }
        }
        for r in rows.iter().rev() {
            for wall in r.iter() {
                if *wall {
                    write!(f, "#")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid};
    use crate::Direction;

    #[test]
    fn fresh_grid_is_walled() {
        let grid = Grid::walled([3, 2]).unwrap();
        assert_eq!(grid.cell_count(), 6);
        assert!(grid.positions().all(|p| grid[p] == Cell::Walled));
        assert_eq!(grid.passages().count(), 0);
        assert_eq!(grid.cell([3, 0]), None);
        assert_eq!(grid.cell([2, 1]), Some(Cell::Walled));
    }

    #[test]
    fn too_big_to_represent() {
        assert!(Grid::walled([usize::MAX, 2]).is_err());
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::walled([2, 2]).unwrap();
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            vec![[0, 0], [1, 0], [0, 1], [1, 1]]
        )
    }

    #[test]
    fn opening_east_clears_neighbour_west() {
        let mut grid = Grid::walled([2, 1]).unwrap();
        assert_eq!(grid.open([0, 0], Direction::East), Some([1, 0]));
        assert!(grid.wall_west([0, 0]));
        assert!(!grid.wall_west([1, 0]));
        assert!(grid.is_open([0, 0], Direction::East));
        assert!(grid.is_open([1, 0], Direction::West));
        assert_eq!(grid.passages().collect::<Vec<_>>(), vec![([0, 0], Direction::East)]);
    }

    #[test]
    fn opening_south_clears_own_south() {
        let mut grid = Grid::walled([1, 2]).unwrap();
        assert_eq!(grid.open([0, 1], Direction::South), Some([0, 0]));
        assert!(!grid.wall_south([0, 1]));
        assert!(grid.wall_south([0, 0]));
        assert_eq!(grid.open_neighbours([0, 0]).collect::<Vec<_>>(), vec![[0, 1]]);
        assert_eq!(grid.passages().collect::<Vec<_>>(), vec![([0, 0], Direction::North)]);
    }

    #[test]
    fn border_never_opens() {
        let mut grid = Grid::walled([2, 2]).unwrap();
        assert_eq!(grid.open([0, 0], Direction::West), None);
        assert_eq!(grid.open([1, 1], Direction::North), None);
        assert!(grid.positions().all(|p| grid[p] == Cell::Walled));
        assert!(!grid.is_open([5, 5], Direction::West));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let grid = Grid::walled([2, 2]).unwrap();
        let _ = grid.wall_west([2, 0]);
    }

    #[test]
    fn display() {
        let mut grid = Grid::walled([2, 2]).unwrap();
        grid.open([0, 0], Direction::East);
        grid.open([1, 0], Direction::North);
        assert_eq!(
            grid.to_string(),
            "#####\n#.#.#\n###.#\n#...#\n#####\n"
        )
    }
}
