// step.rs - Toroidal generation step

use crate::grid::Grid;
use crate::rule::{NEIGHBOR_OFFSETS, next_state};

/// Mathematical modulo: always in `0..m`, even for negative `n`.
#[inline]
pub fn wrap(n: isize, m: usize) -> usize {
    n.rem_euclid(m as isize) as usize
}

/// Live neighbours of `(row, col)`, with edges wrapping around.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = (grid.rows(), grid.cols());
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(di, dj)| {
            let nr = wrap(row as isize + di, rows);
            let nc = wrap(col as isize + dj, cols);
            grid.get(nr, nc)
        })
        .count() as u8
}

/// Writes the generation after `current` into `next`.
///
/// Every cell of `next` is overwritten, so it may hold anything beforehand.
/// Panics if the two grids differ in shape.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        (current.rows(), current.cols()),
        (next.rows(), next.cols()),
        "step buffers must share dimensions"
    );
    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let count = live_neighbors(current, row, col);
            next.set(row, col, next_state(current.get(row, col), count));
        }
    }
}

/// The generation after `current`, as a fresh grid.
pub fn step(current: &Grid) -> Grid {
    let mut next = current.clone();
    step_into(current, &mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in live {
            grid.set(r, c, true);
        }
        grid
    }

    #[test]
    fn wrap_is_never_negative() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(-6, 5), 4);
        assert_eq!(wrap(3, 5), 3);
    }

    #[test]
    fn corner_cell_is_seen_through_every_edge() {
        let grid = grid_with(25, 50, &[(0, 0)]);
        assert_eq!(live_neighbors(&grid, 24, 49), 1); // diagonal
        assert_eq!(live_neighbors(&grid, 24, 0), 1); // vertical
        assert_eq!(live_neighbors(&grid, 0, 49), 1); // horizontal
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
        assert_eq!(live_neighbors(&grid, 12, 25), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn block_across_the_wrap_is_a_still_life() {
        let grid = grid_with(4, 4, &[(0, 0), (0, 3), (3, 0), (3, 3)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn birth_needs_exactly_three() {
        // (1, 1) sees three live cells above it
        let grid = grid_with(8, 8, &[(0, 0), (0, 1), (0, 2)]);
        assert!(step(&grid).get(1, 1));

        // two neighbours: (5, 5) stays dead
        let grid = grid_with(10, 10, &[(4, 4), (4, 6)]);
        assert_eq!(live_neighbors(&grid, 5, 5), 2);
        assert!(!step(&grid).get(5, 5));

        // four neighbours: (5, 5) stays dead
        let grid = grid_with(10, 10, &[(4, 4), (4, 6), (6, 4), (6, 6)]);
        assert_eq!(live_neighbors(&grid, 5, 5), 4);
        assert!(!step(&grid).get(5, 5));
    }

    #[test]
    fn thin_tori_count_the_same_cell_more_than_once() {
        // On a 1x1 torus every neighbour is the cell itself.
        let lone = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(live_neighbors(&lone, 0, 0), 8);
        assert_eq!(step(&lone).live_count(), 0);

        // On 1x3 the row above and below is the same row.
        let row = grid_with(1, 3, &[(0, 0)]);
        assert_eq!(live_neighbors(&row, 0, 0), 2);
        assert_eq!(live_neighbors(&row, 0, 1), 3);
        assert_eq!(live_neighbors(&row, 0, 2), 3);
        assert_eq!(step(&row).to_string(), "###\n");

        // On 2xN the rows above and below a cell coincide.
        let pair = grid_with(2, 4, &[(0, 1)]);
        assert_eq!(live_neighbors(&pair, 1, 1), 2);
        assert_eq!(live_neighbors(&pair, 1, 0), 2);
    }

    #[test]
    fn step_leaves_input_untouched_and_keeps_shape() {
        let grid = grid_with(7, 3, &[(0, 0), (1, 1), (2, 2)]);
        let before = grid.clone();
        let next = step(&grid);
        assert_eq!(grid, before);
        assert_eq!((next.rows(), next.cols()), (7, 3));
    }

    #[test]
    fn step_into_overwrites_stale_buffer() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut stale = grid_with(5, 5, &[(0, 0), (4, 4), (0, 4)]);
        step_into(&grid, &mut stale);
        assert_eq!(stale, step(&grid));
    }
}
