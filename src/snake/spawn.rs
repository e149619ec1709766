//! Food placement
//!
//! Rejection sampling over the whole grid, bounded by an attempt budget. When
//! the budget runs out (a crowded field) it falls back to picking uniformly
//! among the cells that are actually free, so placement always terminates.

use rand::Rng;

use super::grid::{Cell, Grid};

/// Pick a cell not covered by `body`. `None` means the field is full.
pub fn place_food<R: Rng>(rng: &mut R, grid: &Grid, body: &[Cell], attempts: u32) -> Option<Cell> {
    for _ in 0..attempts {
        let candidate = Cell::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if !body.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free = free_cells(grid, body);
    log::debug!(
        "Food sampling exhausted {} attempts, {} free cells remain",
        attempts,
        free.len()
    );
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

/// Cells not covered by `body`, in row-major order
pub fn free_cells(grid: &Grid, body: &[Cell]) -> Vec<Cell> {
    let mut occupied = vec![false; grid.cell_count()];
    for idx in body.iter().filter_map(|&cell| grid.index_of(cell)) {
        occupied[idx] = true;
    }
    grid.cells()
        .zip(occupied)
        .filter_map(|(cell, taken)| (!taken).then_some(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::seeded_rng;

    #[test]
    fn test_food_avoids_body() {
        let grid = Grid::new(6, 4);
        let body: Vec<Cell> = (0..5).map(|x| Cell::new(x, 0)).collect();
        let mut rng = seeded_rng(42);
        for _ in 0..200 {
            let food = place_food(&mut rng, &grid, &body, 16).unwrap();
            assert!(grid.contains(food));
            assert!(!body.contains(&food));
        }
    }

    #[test]
    fn test_scan_fallback_finds_last_free_cell() {
        let grid = Grid::new(3, 3);
        let body: Vec<Cell> = grid.cells().filter(|&c| c != Cell::new(2, 1)).collect();
        let mut rng = seeded_rng(1);
        // Zero attempts forces the scan
        assert_eq!(place_food(&mut rng, &grid, &body, 0), Some(Cell::new(2, 1)));
    }

    #[test]
    fn test_full_field() {
        let grid = Grid::new(2, 2);
        let body: Vec<Cell> = grid.cells().collect();
        let mut rng = seeded_rng(9);
        assert_eq!(place_food(&mut rng, &grid, &body, 64), None);
    }

    #[test]
    fn test_free_cells_ignores_out_of_field_segments() {
        let grid = Grid::new(2, 1);
        let body = [Cell::new(0, 0), Cell::new(-1, 0)];
        assert_eq!(free_cells(&grid, &body), vec![Cell::new(1, 0)]);
    }

    #[test]
    fn test_same_seed_same_food() {
        let grid = Grid::new(40, 30);
        let body = [Cell::new(20, 15)];
        let a = place_food(&mut seeded_rng(5), &grid, &body, 64);
        let b = place_food(&mut seeded_rng(5), &grid, &body, 64);
        assert_eq!(a, b);
    }
}
