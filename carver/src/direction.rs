use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use crate::{Cell, Pos};

/// One of the four axis-aligned moves on the grid
///
/// `y` grows northwards, `x` grows eastwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order they are fed to the shuffle
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline(always)]
    #[must_use]
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Direction::North => [0, 1],
            Direction::East => [1, 0],
            Direction::South => [0, -1],
            Direction::West => [-1, 0],
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Move one cell, if the destination is inside a grid of the given shape
    /// ```
    /// use maze_carver::Direction;
    ///
    /// assert_eq!(Direction::East.step([1, 2], [3, 3]), Some([2, 2]));
    /// assert_eq!(Direction::East.step([2, 2], [3, 3]), None);
    /// assert_eq!(Direction::South.step([1, 0], [3, 3]), None);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn step(self, [x, y]: Pos, [w, h]: [usize; 2]) -> Option<Pos> {
        let [dx, dy] = self.offset();
        let x = x.checked_add_signed(dx)?;
        let y = y.checked_add_signed(dy)?;
        (x < w && y < h).then_some([x, y])
    }

    /// Cell and flag holding the wall crossed by moving from `pos` in this direction
    ///
    /// Walls between horizontal neighbours belong to the eastern cell, walls
    /// between vertical neighbours to the northern one. `None` if the move
    /// leaves the grid.
    /// ```
    /// use maze_carver::{Cell, Direction};
    ///
    /// assert_eq!(Direction::East.wall([0, 0], [2, 2]), Some(([1, 0], Cell::WallWest)));
    /// assert_eq!(Direction::West.wall([1, 0], [2, 2]), Some(([1, 0], Cell::WallWest)));
    /// assert_eq!(Direction::North.wall([0, 0], [2, 2]), Some(([0, 1], Cell::WallSouth)));
    /// assert_eq!(Direction::South.wall([0, 1], [2, 2]), Some(([0, 1], Cell::WallSouth)));
    /// ```
    #[must_use]
    pub fn wall(self, pos: Pos, shape: [usize; 2]) -> Option<(Pos, Cell)> {
        let neighbour = self.step(pos, shape)?;
        Some(match self {
            Direction::East => (neighbour, Cell::WallWest),
            Direction::West => (pos, Cell::WallWest),
            Direction::North => (neighbour, Cell::WallSouth),
            Direction::South => (pos, Cell::WallSouth),
        })
    }

    /// The four directions in uniformly random order
    pub fn shuffled<R>(rng: &mut R) -> [Direction; 4]
    where
        R: Rng + ?Sized,
    {
        let mut dirs = Self::ALL;
        shuffle(&mut dirs, rng);
        dirs
    }
}

/// Fisher-Yates shuffle
///
/// Swaps every element but the last with one chosen uniformly from itself to
/// the end, sampling one number per swap in index order.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        items.swap(i, Uniform::new(i, len).sample(rng));
    }
}
