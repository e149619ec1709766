//! Grid collision checks
//!
//! All checks look at the head after an advance. Food is tested first; wall
//! and body checks then run on the resulting head.

use super::grid::{Cell, Grid};
use super::state::{Cause, Snake};

/// Head landed on the food cell
#[inline]
pub fn eats_food(snake: &Snake, food: Option<Cell>) -> bool {
    food == Some(snake.head())
}

#[inline]
pub fn hits_wall(grid: &Grid, head: Cell) -> bool {
    !grid.contains(head)
}

/// Head shares a cell with any other segment
pub fn hits_self(body: &[Cell]) -> bool {
    match body.split_first() {
        Some((head, rest)) => rest.contains(head),
        None => false,
    }
}

/// Fatal collision, if any. A head outside the field reports `Wall`.
pub fn fatal_collision(grid: &Grid, snake: &Snake) -> Option<Cause> {
    if hits_wall(grid, snake.head()) {
        Some(Cause::Wall)
    } else if hits_self(snake.body()) {
        Some(Cause::SelfCollision)
    } else {
        None
    }
}
