//! Generation transition.
//!
//! A pass reads only the current buffer and writes only the interior of the
//! working buffer, so every interior row can be computed independently.
//! Each topology is a zero-sized [`Neighborhood`] and the pass is
//! monomorphised per topology to keep the inner loop free of dispatch.

use super::{Algorithm, Cell, CellCoord, GridBuffer, RuleSet, Topology};
use rayon::prelude::*;

/// Counts live neighbors of column `x` given the row above, the row itself
/// and the row below. `x` is always an interior column.
pub trait Neighborhood {
    const TOPOLOGY: Topology;

    fn count(above: &[Cell], row: &[Cell], below: &[Cell], x: usize) -> u8;
}

/// All 8 cells of the 3×3 block
pub struct Moore;

/// The 4 orthogonally adjacent cells
pub struct Cross;

/// The 4 corner-touching cells
pub struct Diagonal;

impl Neighborhood for Moore {
    const TOPOLOGY: Topology = Topology::Moore;

    #[inline]
    fn count(above: &[Cell], row: &[Cell], below: &[Cell], x: usize) -> u8 {
        let block: u8 = [above, row, below]
            .iter()
            .flat_map(|r| &r[x - 1..=x + 1])
            .map(|cell| cell.weight())
            .sum();
        // The center is not its own neighbor
        block - row[x].weight()
    }
}

impl Neighborhood for Cross {
    const TOPOLOGY: Topology = Topology::Cross;

    #[inline]
    fn count(above: &[Cell], row: &[Cell], below: &[Cell], x: usize) -> u8 {
        above[x].weight() + below[x].weight() + row[x - 1].weight() + row[x + 1].weight()
    }
}

impl Neighborhood for Diagonal {
    const TOPOLOGY: Topology = Topology::Diagonal;

    #[inline]
    fn count(above: &[Cell], _row: &[Cell], below: &[Cell], x: usize) -> u8 {
        above[x - 1].weight() + above[x + 1].weight() + below[x - 1].weight() + below[x + 1].weight()
    }
}

impl Topology {
    /// Live neighbors of the interior cell `(x, y)`, `None` for border
    /// and out-of-range positions
    pub fn count_neighbors(self, grid: &GridBuffer, x: usize, y: usize) -> Option<u8> {
        if !grid.is_interior(x, y) {
            return None;
        }
        Some(match self {
            Topology::Moore => count_at::<Moore>(grid, x, y),
            Topology::Cross => count_at::<Cross>(grid, x, y),
            Topology::Diagonal => count_at::<Diagonal>(grid, x, y),
        })
    }
}

fn count_at<N: Neighborhood>(grid: &GridBuffer, x: usize, y: usize) -> u8 {
    N::count(grid.row(y - 1), grid.row(y), grid.row(y + 1), x)
}

/// Compute the next generation of `current` into `working`.
///
/// Returns the interior cells alive in the new generation, row-major.
/// The border of `working` is left as it was.
pub fn step(
    current: &GridBuffer,
    working: &mut GridBuffer,
    rules: &RuleSet,
    algorithm: Algorithm,
) -> Vec<CellCoord> {
    let (width, height) = current.dimensions();
    let parallel = algorithm.is_parallel_for(width * height);

    match rules.topology() {
        Topology::Moore => evolve::<Moore>(current, working, rules, parallel),
        Topology::Cross => evolve::<Cross>(current, working, rules, parallel),
        Topology::Diagonal => evolve::<Diagonal>(current, working, rules, parallel),
    }
}

/// One pass under the neighborhood `N`
pub fn evolve<N: Neighborhood>(
    current: &GridBuffer,
    working: &mut GridBuffer,
    rules: &RuleSet,
    parallel: bool,
) -> Vec<CellCoord> {
    debug_assert_eq!(current.dimensions(), working.dimensions());
    debug_assert_eq!(N::TOPOLOGY, rules.topology());

    let (width, height) = current.dimensions();

    if parallel {
        let rows: Vec<Vec<CellCoord>> = working
            .cells_mut()
            .par_chunks_exact_mut(width)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .map(|(y, out)| {
                let mut live = Vec::new();
                evolve_row::<N>(current, y, out, rules, &mut live);
                live
            })
            .collect();
        rows.concat()
    } else {
        let mut live = Vec::new();
        working
            .cells_mut()
            .chunks_exact_mut(width)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, out)| evolve_row::<N>(current, y, out, rules, &mut live));
        live
    }
}

#[inline]
fn evolve_row<N: Neighborhood>(
    current: &GridBuffer,
    y: usize,
    out: &mut [Cell],
    rules: &RuleSet,
    live: &mut Vec<CellCoord>,
) {
    let (above, row, below) = (current.row(y - 1), current.row(y), current.row(y + 1));

    for x in 1..row.len() - 1 {
        let neighbors = N::count(above, row, below, x);
        let alive = rules.is_alive_next(row[x].is_alive(), neighbors);
        out[x] = Cell::from(alive);
        if alive {
            live.push((x, y));
        }
    }
}
