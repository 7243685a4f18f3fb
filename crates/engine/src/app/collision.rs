use super::grid::{TileGrid, TILE_SIZE_PX};

/// True if the pixel-space box overlaps any solid cell. Cells outside the
/// grid count as solid (boundary-wall policy, see [`TileGrid`]).
pub fn overlaps_solid(grid: &TileGrid, x: f32, y: f32, width: f32, height: f32) -> bool {
    let left = (x / TILE_SIZE_PX).floor() as i32;
    let right = ((x + width - 1.0) / TILE_SIZE_PX).floor() as i32;
    let top = (y / TILE_SIZE_PX).floor() as i32;
    let bottom = ((y + height - 1.0) / TILE_SIZE_PX).floor() as i32;

    for row in top..=bottom {
        for col in left..=right {
            if grid.is_solid(col, row) {
                return true;
            }
        }
    }
    false
}

/// Attempt to move a box by (dx, dy), resolving each axis independently.
///
/// Invariant: X is tested and applied before Y, and the Y test uses the
/// already-updated X. Swapping the order changes sliding behavior at
/// corners, so it is part of the movement contract, not an implementation
/// detail.
pub fn move_with_collision(
    grid: &TileGrid,
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    width: f32,
    height: f32,
) -> (f32, f32) {
    let mut new_x = x;
    let mut new_y = y;

    if !overlaps_solid(grid, x + dx, y, width, height) {
        new_x += dx;
    }

    if !overlaps_solid(grid, new_x, y + dy, width, height) {
        new_y += dy;
    }

    (new_x, new_y)
}
