use rand::Rng;

use crate::{Cell, Direction, Error, Grid, InvalidArgument, Pos};

/// A cell on the carving path, with the directions still to try
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Pos,
    directions: [Direction; 4],
    next: usize,
}
impl Frame {
    /// Enter a cell, shuffling the order its neighbours will be tried in
    fn enter<R>(pos: Pos, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            pos,
            directions: Direction::shuffled(rng),
            next: 0,
        }
    }
}
impl Iterator for Frame {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.directions.get(self.next).copied()?;
        self.next += 1;
        Some(dir)
    }
}

pub(crate) fn check_args(shape: [usize; 2], start: Pos) -> Result<(), InvalidArgument> {
    let [w, h] = shape;
    if w == 0 || h == 0 {
        return Err(InvalidArgument::EmptyGrid { shape });
    }
    let [x, y] = start;
    if x >= w || y >= h {
        return Err(InvalidArgument::StartOutOfBounds { start, shape });
    }
    Ok(())
}

/// Carve a perfect maze into a fully walled grid
///
/// Depth first visit from `start`: from each cell, the neighbours are tried
/// in random order, and every unvisited one gets connected and visited in
/// turn. The path is kept on the heap, so its length is bounded only by the
/// number of cells.
pub(crate) fn carve<R>(grid: &mut Grid, start: Pos, rng: &mut R) -> Result<(), Error>
where
    R: Rng + ?Sized,
{
    debug_assert!(grid.positions().all(|p| grid[p] == Cell::Walled));
    let mut path = Vec::new();
    path.try_reserve(grid.cell_count())
        .map_err(|_| Error::ResourceExhaustion {
            shape: grid.shape(),
        })?;

    mark_visited(grid, start);
    path.push(Frame::enter(start, rng));
    while let Some(frame) = path.last_mut() {
        let Some(dir) = frame.next() else {
            // every neighbour tried, backtrack
            path.pop();
            continue;
        };
        let pos = frame.pos;
        match dir.step(pos, grid.shape()) {
            Some(neighbour) if !grid[neighbour].visited() => {
                log::trace!("Carving {pos:?} -> {neighbour:?}");
                grid.open(pos, dir);
                mark_visited(grid, neighbour);
                path.push(Frame::enter(neighbour, rng));
            }
            _ => (),
        }
    }
    Ok(())
}

#[inline(always)]
fn mark_visited(grid: &mut Grid, pos: Pos) {
    if let Some(cell) = grid.cell_mut(pos) {
        cell.insert(Cell::Visited)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_wyrand::WyRand;

    use super::{carve, check_args};
    use crate::{Direction, Grid, InvalidArgument};

    #[test]
    fn rejects_empty_sides() {
        assert_eq!(
            check_args([0, 5], [0, 0]),
            Err(InvalidArgument::EmptyGrid { shape: [0, 5] })
        );
        assert_eq!(
            check_args([5, 0], [0, 0]),
            Err(InvalidArgument::EmptyGrid { shape: [5, 0] })
        );
    }

    #[test]
    fn rejects_start_outside() {
        assert_eq!(
            check_args([3, 4], [5, 5]),
            Err(InvalidArgument::StartOutOfBounds {
                start: [5, 5],
                shape: [3, 4]
            })
        );
        assert_eq!(
            check_args([3, 4], [2, 4]),
            Err(InvalidArgument::StartOutOfBounds {
                start: [2, 4],
                shape: [3, 4]
            })
        );
        assert_eq!(check_args([3, 4], [2, 3]), Ok(()));
    }

    #[test]
    fn strip_is_a_corridor() {
        let mut grid = Grid::walled([6, 1]).unwrap();
        carve(&mut grid, [2, 0], &mut WyRand::seed_from_u64(1)).unwrap();
        for x in 0..5 {
            assert!(grid.is_open([x, 0], Direction::East));
        }
        assert!(grid.positions().all(|p| grid[p].visited()));
    }

    #[test]
    fn single_cell() {
        let mut grid = Grid::walled([1, 1]).unwrap();
        carve(&mut grid, [0, 0], &mut WyRand::seed_from_u64(1)).unwrap();
        assert!(grid[[0, 0]].visited());
        assert!(grid.wall_west([0, 0]) && grid.wall_south([0, 0]));
    }
}
