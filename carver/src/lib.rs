//! Perfect maze generation on rectangular grids
//!
//! Mazes are carved with a randomized depth first visit ("recursive
//! backtracking"): every cell ends up connected to every other through
//! exactly one path.
//!
//! ```
//! use maze_carver::{generate_from_origin, Direction};
//! use rand::SeedableRng;
//! use rand_wyrand::WyRand;
//!
//! let grid = generate_from_origin(8, 5, &mut WyRand::seed_from_u64(42)).unwrap();
//! assert_eq!(grid.passages().count(), 8 * 5 - 1);
//! assert!(!grid.is_open([0, 0], Direction::West));
//! ```

use rand::Rng;

mod carve;

mod direction;
pub use direction::{shuffle, Direction};

mod grid;
pub use grid::{Cell, Grid};

mod error;
pub use error::{Error, InvalidArgument};

pub mod config;
pub use config::Config;

/// Coordinates of a cell, `[x, y]`
pub type Pos = [usize; 2];

/// Generate a `width` x `height` maze, carving from `start`
///
/// Arguments are checked before anything gets allocated. The result depends
/// only on the arguments and on the numbers drawn from `rng`.
pub fn generate<R>(width: usize, height: usize, rng: &mut R, start: Pos) -> Result<Grid, Error>
where
    R: Rng + ?Sized,
{
    let shape = [width, height];
    carve::check_args(shape, start)?;
    log::debug!("Generating {width}x{height} maze from {start:?}");
    let mut grid = Grid::walled(shape)?;
    carve::carve(&mut grid, start, rng)?;
    log::debug!("Carved {} cells", grid.cell_count());
    Ok(grid)
}

/// Generate a maze carving from the `[0, 0]` corner
pub fn generate_from_origin<R>(width: usize, height: usize, rng: &mut R) -> Result<Grid, Error>
where
    R: Rng + ?Sized,
{
    generate(width, height, rng, [0, 0])
}
