mod camera;
mod collision;
mod grid;
mod input;
mod interaction;
mod loop_runner;
mod metrics;
mod overlay;
mod player;
mod rendering;
mod scene;
mod world;

pub use camera::{Camera, CAMERA_FOLLOW_RATE_PER_SECOND};
pub use collision::{move_with_collision, overlaps_solid};
pub use grid::{GridBuilder, GridError, Tile, TileGrid, TilePoint, TILE_SIZE_PX};
pub use input::{InputAction, InputSnapshot};
pub use interaction::{BuildingId, ContentSection, Interaction, RoomItem};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use overlay::{
    Activation, DialogPage, OverlayController, OverlayState, PanelEntry, Prompt,
    INTERACT_COOLDOWN_SECONDS,
};
pub use player::{
    Facing, Player, PLAYER_SPEED_PX_PER_SECOND, SNAP_EPSILON_PX, SNAP_RATE_PER_SECOND,
    WALK_FRAME_COUNT, WALK_FRAME_SECONDS,
};
pub use rendering::{world_to_screen_px, Renderer, Viewport, RENDER_SCALE};
pub use scene::{OverlayView, PlayerView, Scene, SceneCommand, SceneView};
pub use world::{
    Building, EnterOutcome, Location, World, WorldError, CAMPUS_LOCATION_NAME,
};
