use super::collision::move_with_collision;
use super::grid::{TileGrid, TilePoint, TILE_SIZE_PX};
use super::input::{InputAction, InputSnapshot};

pub const PLAYER_SPEED_PX_PER_SECOND: f32 = 64.0;
pub const SNAP_RATE_PER_SECOND: f32 = 10.0;
pub const SNAP_EPSILON_PX: f32 = 0.5;
pub const WALK_FRAME_SECONDS: f32 = 0.15;
pub const WALK_FRAME_COUNT: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn as_token(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Player pawn with continuous sub-tile movement.
///
/// While a direction is held the position moves at a fixed speed, clipped by
/// collision every tick; vertical input wins over horizontal (strict
/// 4-directional). With no input the position decays exponentially toward
/// the nearest tile-aligned point and snaps exactly once within a small
/// epsilon. Facing updates even when the attempted move is fully blocked.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    x: f32,
    y: f32,
    facing: Facing,
    frame: u8,
    frame_timer: f32,
}

impl Player {
    pub fn new(spawn: TilePoint, facing: Facing) -> Self {
        Self {
            x: spawn.x as f32 * TILE_SIZE_PX,
            y: spawn.y as f32 * TILE_SIZE_PX,
            facing,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn tile(&self) -> TilePoint {
        TilePoint::new(
            (self.x / TILE_SIZE_PX).floor() as i32,
            (self.y / TILE_SIZE_PX).floor() as i32,
        )
    }

    pub fn center_x(&self) -> f32 {
        self.x + TILE_SIZE_PX / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + TILE_SIZE_PX / 2.0
    }

    pub fn teleport(&mut self, tile: TilePoint, facing: Facing) {
        self.x = tile.x as f32 * TILE_SIZE_PX;
        self.y = tile.y as f32 * TILE_SIZE_PX;
        self.facing = facing;
        self.reset_walk_cycle();
    }

    pub fn update(&mut self, input: &InputSnapshot, grid: &TileGrid, dt_seconds: f32) {
        let dy = if input.is_down(InputAction::MoveUp) {
            -1.0
        } else if input.is_down(InputAction::MoveDown) {
            1.0
        } else {
            0.0
        };
        let dx = if input.is_down(InputAction::MoveLeft) {
            -1.0
        } else if input.is_down(InputAction::MoveRight) {
            1.0
        } else {
            0.0
        };

        if dy != 0.0 {
            self.facing = if dy < 0.0 { Facing::Up } else { Facing::Down };
            self.step(grid, 0.0, dy * PLAYER_SPEED_PX_PER_SECOND * dt_seconds, dt_seconds);
        } else if dx != 0.0 {
            self.facing = if dx < 0.0 { Facing::Left } else { Facing::Right };
            self.step(grid, dx * PLAYER_SPEED_PX_PER_SECOND * dt_seconds, 0.0, dt_seconds);
        } else {
            self.snap_toward_tile(dt_seconds);
            self.reset_walk_cycle();
        }
    }

    fn step(&mut self, grid: &TileGrid, dx: f32, dy: f32, dt_seconds: f32) {
        let (new_x, new_y) =
            move_with_collision(grid, self.x, self.y, dx, dy, TILE_SIZE_PX, TILE_SIZE_PX);
        let displaced = new_x != self.x || new_y != self.y;
        self.x = new_x;
        self.y = new_y;

        if displaced {
            self.advance_walk_cycle(dt_seconds);
        } else {
            self.reset_walk_cycle();
        }
    }

    fn snap_toward_tile(&mut self, dt_seconds: f32) {
        let target_x = (self.x / TILE_SIZE_PX).round() * TILE_SIZE_PX;
        let target_y = (self.y / TILE_SIZE_PX).round() * TILE_SIZE_PX;
        let lerp = 1.0 - (-SNAP_RATE_PER_SECOND * dt_seconds).exp();
        self.x += (target_x - self.x) * lerp;
        self.y += (target_y - self.y) * lerp;

        // Finish the asymptotic approach instead of lerping forever.
        if (self.x - target_x).abs() < SNAP_EPSILON_PX {
            self.x = target_x;
        }
        if (self.y - target_y).abs() < SNAP_EPSILON_PX {
            self.y = target_y;
        }
    }

    fn advance_walk_cycle(&mut self, dt_seconds: f32) {
        self.frame_timer += dt_seconds;
        while self.frame_timer >= WALK_FRAME_SECONDS {
            self.frame_timer -= WALK_FRAME_SECONDS;
            self.frame = (self.frame + 1) % WALK_FRAME_COUNT;
        }
    }

    fn reset_walk_cycle(&mut self) {
        self.frame = 0;
        self.frame_timer = 0.0;
    }
}
