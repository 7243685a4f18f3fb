use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::transform::{world_to_screen_px, Viewport, RENDER_SCALE};
use crate::app::grid::{Tile, TILE_SIZE_PX};
use crate::app::player::Facing;
use crate::app::scene::{OverlayView, SceneView};

const CLEAR_COLOR_CAMPUS: [u8; 4] = [26, 26, 46, 255];
const CLEAR_COLOR_INTERIOR: [u8; 4] = [22, 18, 16, 255];
const PLAYER_COLOR: [u8; 4] = [224, 80, 72, 255];
const PLAYER_FACING_COLOR: [u8; 4] = [255, 228, 180, 255];
const PROMPT_MARKER_COLOR: [u8; 4] = [255, 214, 74, 255];
const DIALOG_STRIP_COLOR: [u8; 4] = [34, 40, 66, 255];
const DIALOG_BORDER_COLOR: [u8; 4] = [214, 219, 240, 255];
const PANEL_COLOR: [u8; 4] = [30, 34, 54, 255];
const PANEL_ENTRY_COLOR: [u8; 4] = [92, 100, 138, 255];
const PANEL_FOCUS_COLOR: [u8; 4] = [255, 214, 74, 255];
const MAX_VISIBLE_PANEL_TICKS: usize = 16;

fn tile_color(tile: Tile) -> Option<[u8; 4]> {
    match tile {
        Tile::Empty => None,
        Tile::Grass => Some([74, 112, 56, 255]),
        Tile::Path => Some([182, 160, 118, 255]),
        Tile::Water => Some([52, 94, 158, 255]),
        Tile::Flower => Some([118, 146, 84, 255]),
        Tile::Tree => Some([48, 78, 42, 255]),
        Tile::TreeTop => Some([58, 94, 50, 255]),
        Tile::Wall => Some([148, 120, 96, 255]),
        Tile::Roof => Some([112, 62, 54, 255]),
        Tile::Door => Some([96, 58, 34, 255]),
        Tile::Window => Some([150, 184, 210, 255]),
        Tile::Sign => Some([132, 100, 62, 255]),
        Tile::WoodFloor => Some([142, 108, 74, 255]),
        Tile::InteriorWall => Some([90, 70, 58, 255]),
        Tile::Bookshelf => Some([104, 66, 42, 255]),
        Tile::Desk => Some([128, 92, 60, 255]),
        Tile::Computer => Some([70, 80, 96, 255]),
        Tile::Podium => Some([120, 84, 52, 255]),
        Tile::LabBench => Some([136, 140, 148, 255]),
        Tile::Chair => Some([110, 76, 48, 255]),
    }
}

fn fill_rect(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: [u8; 4],
) {
    let x_min = x.max(0);
    let y_min = y.max(0);
    let x_max = (x + width).min(frame_width as i32);
    let y_max = (y + height).min(frame_height as i32);
    for row in y_min..y_max {
        for col in x_min..x_max {
            let offset = (row as usize * frame_width as usize + col as usize) * 4;
            frame[offset..offset + 4].copy_from_slice(&color);
        }
    }
}

fn dim_rect(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) {
    let x_min = x.max(0);
    let y_min = y.max(0);
    let x_max = (x + width).min(frame_width as i32);
    let y_max = (y + height).min(frame_height as i32);
    for row in y_min..y_max {
        for col in x_min..x_max {
            let offset = (row as usize * frame_width as usize + col as usize) * 4;
            frame[offset] /= 2;
            frame[offset + 1] /= 2;
            frame[offset + 2] /= 2;
        }
    }
}

/// Flat-color software renderer. Sprite art is a collaborator this crate
/// deliberately does without: tiles render as palette cells, the player as
/// a marked box, overlays as dimmed strips. Text presentation stays in the
/// structured log stream.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
        })
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    pub fn render(&mut self, view: &SceneView<'_>) -> Result<(), Error> {
        let Viewport { width, height } = self.viewport;
        if width == 0 || height == 0 {
            return Ok(());
        }
        let frame = self.pixels.frame_mut();

        let clear = if view.interior {
            CLEAR_COLOR_INTERIOR
        } else {
            CLEAR_COLOR_CAMPUS
        };
        for chunk in frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&clear);
        }

        draw_tiles(frame, width, height, view);
        draw_player(frame, width, height, view);
        draw_overlay(frame, width, height, view);

        self.pixels.render()
    }
}

fn draw_tiles(frame: &mut [u8], width: u32, height: u32, view: &SceneView<'_>) {
    let tile_screen = (TILE_SIZE_PX * RENDER_SCALE) as i32;
    let first_col = (view.camera.x() / TILE_SIZE_PX).floor() as i32;
    let first_row = (view.camera.y() / TILE_SIZE_PX).floor() as i32;
    let cols = (width as i32 / tile_screen) + 2;
    let rows = (height as i32 / tile_screen) + 2;

    for row in first_row..first_row + rows {
        for col in first_col..first_col + cols {
            let Some(color) = tile_color(view.grid.tile_at(col, row)) else {
                continue;
            };
            let (x, y) = world_to_screen_px(
                view.camera,
                col as f32 * TILE_SIZE_PX,
                row as f32 * TILE_SIZE_PX,
            );
            fill_rect(frame, width, height, x, y, tile_screen, tile_screen, color);
        }
    }
}

fn draw_player(frame: &mut [u8], width: u32, height: u32, view: &SceneView<'_>) {
    let tile_screen = (TILE_SIZE_PX * RENDER_SCALE) as i32;
    let bob = i32::from(view.player.frame % 2) * RENDER_SCALE as i32;
    let (x, y) = world_to_screen_px(view.camera, view.player.x, view.player.y);
    let y = y - bob;
    fill_rect(
        frame,
        width,
        height,
        x,
        y,
        tile_screen,
        tile_screen,
        PLAYER_COLOR,
    );

    let notch = tile_screen / 4;
    let (notch_x, notch_y) = match view.player.facing {
        Facing::Up => (x + (tile_screen - notch) / 2, y),
        Facing::Down => (x + (tile_screen - notch) / 2, y + tile_screen - notch),
        Facing::Left => (x, y + (tile_screen - notch) / 2),
        Facing::Right => (x + tile_screen - notch, y + (tile_screen - notch) / 2),
    };
    fill_rect(
        frame,
        width,
        height,
        notch_x,
        notch_y,
        notch,
        notch,
        PLAYER_FACING_COLOR,
    );

    if view.prompt.is_some() {
        let marker = tile_screen / 4;
        fill_rect(
            frame,
            width,
            height,
            x + (tile_screen - marker) / 2,
            y - marker - 2,
            marker,
            marker,
            PROMPT_MARKER_COLOR,
        );
    }
}

fn draw_overlay(frame: &mut [u8], width: u32, height: u32, view: &SceneView<'_>) {
    match view.overlay {
        OverlayView::None => {}
        OverlayView::Dialog { .. } => {
            let strip_height = (height as i32 / 4).max(1);
            let strip_top = height as i32 - strip_height;
            dim_rect(frame, width, height, 0, 0, width as i32, strip_top);
            fill_rect(
                frame,
                width,
                height,
                0,
                strip_top,
                width as i32,
                strip_height,
                DIALOG_STRIP_COLOR,
            );
            fill_rect(
                frame,
                width,
                height,
                0,
                strip_top,
                width as i32,
                2,
                DIALOG_BORDER_COLOR,
            );
        }
        OverlayView::Panel {
            entry_count,
            focus_index,
            ..
        } => {
            dim_rect(frame, width, height, 0, 0, width as i32, height as i32);
            let margin_x = width as i32 / 8;
            let margin_y = height as i32 / 8;
            let panel_width = width as i32 - 2 * margin_x;
            let panel_height = height as i32 - 2 * margin_y;
            fill_rect(
                frame,
                width,
                height,
                margin_x,
                margin_y,
                panel_width,
                panel_height,
                PANEL_COLOR,
            );

            // One tick per entry; the focused one is highlighted.
            let visible = entry_count.min(MAX_VISIBLE_PANEL_TICKS);
            let focused_tick = focus_index.min(visible.saturating_sub(1));
            let tick_height = 8;
            let tick_gap = 6;
            for index in 0..visible {
                let color = if index == focused_tick {
                    PANEL_FOCUS_COLOR
                } else {
                    PANEL_ENTRY_COLOR
                };
                let tick_y = margin_y + 12 + index as i32 * (tick_height + tick_gap);
                fill_rect(
                    frame,
                    width,
                    height,
                    margin_x + 12,
                    tick_y,
                    panel_width - 24,
                    tick_height,
                    color,
                );
            }
        }
    }
}
