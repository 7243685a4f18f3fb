use engine::{
    Activation, BuildingId, Camera, ContentLibrary, Facing, InputSnapshot, Interaction, Location,
    OverlayController, OverlayView, Player, PlayerView, Prompt, Scene, SceneCommand, SceneView,
    World,
};
use tracing::info;

use super::map::CAMPUS_SPAWN;
use super::{build_world, CampusBuildError};

/// The whole game wired together: world, player, camera, overlay, and
/// content, updated in a fixed per-tick order. Overlay input is consumed
/// first; the player only moves while no dialog or panel is up.
pub struct CampusScene {
    world: World,
    player: Player,
    camera: Camera,
    overlay: OverlayController,
    content: ContentLibrary,
    prompt: Option<Prompt>,
}

impl CampusScene {
    pub fn new(
        content: ContentLibrary,
        viewport_world_width: f32,
        viewport_world_height: f32,
    ) -> Result<Self, CampusBuildError> {
        let world = build_world(&content)?;
        let player = Player::new(CAMPUS_SPAWN, Facing::Up);
        let grid = world.current_grid();
        let mut camera = Camera::new(
            viewport_world_width,
            viewport_world_height,
            grid.pixel_width(),
            grid.pixel_height(),
        );
        camera.center_on(player.center_x(), player.center_y());
        info!(
            location = world.location_name(),
            spawn_x = CAMPUS_SPAWN.x,
            spawn_y = CAMPUS_SPAWN.y,
            "scene_loaded"
        );
        Ok(Self {
            world,
            player,
            camera,
            overlay: OverlayController::new(),
            content,
            prompt: None,
        })
    }

    fn enter_building(&mut self, id: BuildingId) {
        let Some(outcome) = self.world.enter_building(id) else {
            return;
        };
        let first_visit = self.overlay.record_visit(id);
        self.player.teleport(outcome.spawn, Facing::Up);
        self.recenter_camera();
        info!(
            building = id.as_token(),
            name = %outcome.name,
            first_visit,
            "building_entered"
        );
        let pages = self
            .overlay
            .welcome_pages(id, &outcome.name, first_visit, &self.content);
        self.overlay.open_dialog(pages);
    }

    fn exit_building(&mut self) {
        let Some(spawn) = self.world.exit_building() else {
            return;
        };
        self.player.teleport(spawn, Facing::Down);
        self.recenter_camera();
        info!(location = self.world.location_name(), "building_exited");
    }

    fn recenter_camera(&mut self) {
        let grid = self.world.current_grid();
        self.camera
            .set_map_bounds(grid.pixel_width(), grid.pixel_height());
        self.camera
            .center_on(self.player.center_x(), self.player.center_y());
    }

    fn prompt_for(&self, interaction: &Interaction) -> Prompt {
        let building_name = match interaction {
            Interaction::Door { building } | Interaction::Entrance { building } => self
                .world
                .building(*building)
                .map(|building| building.name.as_str()),
            _ => None,
        };
        Prompt::for_interaction(interaction, building_name)
    }
}

impl Scene for CampusScene {
    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        self.overlay.tick(fixed_dt_seconds);

        if self.overlay.is_dialog_open() {
            if input.interact_pressed() || input.close_pressed() {
                self.overlay.advance_dialog();
            }
            self.prompt = None;
            return SceneCommand::None;
        }

        if self.overlay.is_panel_open() {
            if input.focus_next_pressed() {
                self.overlay.focus_next();
            }
            if input.focus_prev_pressed() {
                self.overlay.focus_prev();
            }
            if input.close_pressed() || input.interact_pressed() {
                self.overlay.close_panel();
            }
            self.prompt = None;
            return SceneCommand::None;
        }

        if input.close_pressed() {
            info!("quit_requested");
            return SceneCommand::Quit;
        }

        self.player
            .update(input, self.world.current_grid(), fixed_dt_seconds);

        let player_tile = self.player.tile();
        let nearby = self
            .world
            .nearby_interaction(player_tile.x, player_tile.y)
            .map(|(cell, interaction)| (cell, interaction.clone()));

        if input.interact_pressed() {
            if let Some((_, interaction)) = &nearby {
                match self.overlay.activate(interaction, &self.content) {
                    Activation::EnterBuilding(id) => self.enter_building(id),
                    Activation::ExitBuilding => self.exit_building(),
                    Activation::Dialog | Activation::Panel | Activation::None => {}
                }
            }
        }

        self.prompt = if self.overlay.is_open() {
            None
        } else {
            nearby
                .as_ref()
                .map(|(_, interaction)| self.prompt_for(interaction))
        };

        self.camera
            .follow(self.player.center_x(), self.player.center_y(), fixed_dt_seconds);

        SceneCommand::None
    }

    fn view(&self) -> SceneView<'_> {
        SceneView {
            grid: self.world.current_grid(),
            camera: &self.camera,
            player: PlayerView {
                x: self.player.x(),
                y: self.player.y(),
                facing: self.player.facing(),
                frame: self.player.frame(),
            },
            overlay: OverlayView::from_state(self.overlay.state()),
            prompt: self.prompt.as_ref(),
            location_name: self.world.location_name(),
            interior: matches!(self.world.location(), Location::Inside(_)),
        }
    }

    fn handle_viewport_resize(&mut self, world_width: f32, world_height: f32) {
        self.camera.set_viewport_size(world_width, world_height);
    }
}

#[cfg(test)]
mod tests {
    use engine::{InputAction, OverlayState, TilePoint, TILE_SIZE_PX};

    use super::super::DEFAULT_CONTENT_JSON;
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const VIEWPORT: (f32, f32) = (320.0, 240.0);

    fn scene() -> CampusScene {
        let content = ContentLibrary::from_json_str(DEFAULT_CONTENT_JSON).expect("content");
        CampusScene::new(content, VIEWPORT.0, VIEWPORT.1).expect("scene")
    }

    fn idle_ticks(scene: &mut CampusScene, ticks: usize) {
        for _ in 0..ticks {
            scene.update(DT, &InputSnapshot::empty());
        }
    }

    fn interact() -> InputSnapshot {
        InputSnapshot::empty().with_interact_pressed(true)
    }

    fn close_welcome_dialog(scene: &mut CampusScene) {
        // First visits show up to two pages; advance until idle.
        for _ in 0..4 {
            if !scene.overlay.is_dialog_open() {
                break;
            }
            scene.update(DT, &interact());
        }
        assert!(!scene.overlay.is_open());
        // Let the interaction cooldown lapse before the next press.
        idle_ticks(scene, 20);
    }

    #[test]
    fn scene_spawns_on_the_campus_at_the_gates() {
        let scene = scene();
        assert_eq!(scene.world.location(), Location::Campus);
        assert_eq!(scene.player.tile(), CAMPUS_SPAWN);
        assert!(!scene.view().interior);
    }

    #[test]
    fn held_key_moves_the_player() {
        let mut scene = scene();
        let start_x = scene.player.x();
        let input = InputSnapshot::empty().with_action_down(InputAction::MoveRight, true);
        for _ in 0..30 {
            scene.update(DT, &input);
        }
        assert!(scene.player.x() > start_x);
    }

    #[test]
    fn interacting_at_a_door_enters_the_building_and_shows_a_welcome() {
        let mut scene = scene();
        // Stand on the lab's approach tile, one below its door.
        scene.player.teleport(TilePoint::new(20, 8), Facing::Up);

        scene.update(DT, &interact());

        assert_eq!(scene.world.location(), Location::Inside(BuildingId::Lab));
        let spawn = scene.world.building(BuildingId::Lab).expect("lab").spawn;
        assert_eq!(scene.player.tile(), spawn);
        assert!(scene.overlay.is_dialog_open());
        assert!(scene.view().interior);
    }

    #[test]
    fn first_visit_welcome_has_two_pages_and_return_visit_one() {
        let mut scene = scene();
        scene.player.teleport(TilePoint::new(20, 8), Facing::Up);
        scene.update(DT, &interact());

        // Page one, page two, then closed: the lab has an entrance note.
        assert!(scene.overlay.is_dialog_open());
        scene.update(DT, &interact());
        assert!(scene.overlay.is_dialog_open());
        scene.update(DT, &interact());
        assert!(!scene.overlay.is_open());

        // Leave via the exit cell and re-enter: a single welcome-back page.
        idle_ticks(&mut scene, 20);
        scene.player.teleport(TilePoint::new(8, 11), Facing::Down);
        scene.update(DT, &interact());
        assert_eq!(scene.world.location(), Location::Campus);

        idle_ticks(&mut scene, 20);
        scene.player.teleport(TilePoint::new(20, 8), Facing::Up);
        scene.update(DT, &interact());
        assert!(scene.overlay.is_dialog_open());
        scene.update(DT, &interact());
        assert!(!scene.overlay.is_open());
    }

    #[test]
    fn exit_record_returns_player_below_the_entrance() {
        let mut scene = scene();
        scene.player.teleport(TilePoint::new(20, 8), Facing::Up);
        scene.update(DT, &interact());
        close_welcome_dialog(&mut scene);

        // Step onto the exit cell on the bottom row; the whiteboard records
        // one row above the spawn would otherwise win the 3x3 scan.
        scene.player.teleport(TilePoint::new(8, 11), Facing::Down);
        scene.update(DT, &interact());

        assert_eq!(scene.world.location(), Location::Campus);
        assert_eq!(scene.player.tile(), TilePoint::new(20, 8));
        assert_eq!(scene.player.facing(), Facing::Down);
    }

    #[test]
    fn sign_prompt_appears_nearby_and_clears_far_away() {
        let mut scene = scene();
        // Next to the welcome sign at (20, 22).
        scene.player.teleport(TilePoint::new(20, 23), Facing::Up);
        scene.update(DT, &InputSnapshot::empty());
        let prompt = scene.prompt.clone().expect("prompt");
        assert_eq!(prompt.subject, "Sign");
        assert_eq!(prompt.action, "Press ENTER to read");

        scene.player.teleport(TilePoint::new(27, 27), Facing::Up);
        scene.update(DT, &InputSnapshot::empty());
        assert!(scene.prompt.is_none());
    }

    #[test]
    fn door_prompt_names_the_building() {
        let mut scene = scene();
        scene.player.teleport(TilePoint::new(20, 8), Facing::Up);
        scene.update(DT, &InputSnapshot::empty());
        let prompt = scene.prompt.clone().expect("prompt");
        assert_eq!(prompt.subject, "Research Lab");
        assert_eq!(prompt.action, "Press ENTER to enter");
    }

    #[test]
    fn reading_desk_opens_focusable_publications_panel() {
        let mut scene = scene();
        scene.player.teleport(TilePoint::new(20, 19), Facing::Up);
        scene.update(DT, &interact());
        close_welcome_dialog(&mut scene);
        assert_eq!(scene.world.location(), Location::Inside(BuildingId::Library));

        // Spawn sits next to the reading desk panel record at (7, 10).
        scene.update(DT, &interact());
        assert!(scene.overlay.is_panel_open());

        scene.update(DT, &InputSnapshot::empty().with_focus_next_pressed(true));
        match scene.overlay.state() {
            OverlayState::Panel { focus_index, .. } => assert_eq!(*focus_index, 1),
            other => panic!("unexpected state: {other:?}"),
        }

        scene.update(DT, &InputSnapshot::empty().with_close_pressed(true));
        assert!(!scene.overlay.is_open());
        assert_eq!(scene.world.location(), Location::Inside(BuildingId::Library));
    }

    #[test]
    fn escape_quits_only_when_no_overlay_is_open() {
        let mut scene = scene();
        scene.player.teleport(TilePoint::new(20, 23), Facing::Up);
        scene.update(DT, &interact());
        assert!(scene.overlay.is_dialog_open());

        // Escape while the dialog is up closes it instead of quitting.
        let close = InputSnapshot::empty().with_close_pressed(true);
        assert_eq!(scene.update(DT, &close), SceneCommand::None);
        assert!(!scene.overlay.is_open());

        assert_eq!(scene.update(DT, &close), SceneCommand::Quit);
    }

    #[test]
    fn camera_tracks_the_player_within_map_bounds() {
        let mut scene = scene();
        let input = InputSnapshot::empty().with_action_down(InputAction::MoveRight, true);
        for _ in 0..240 {
            scene.update(DT, &input);
        }
        let grid = scene.world.current_grid();
        let max_x = grid.pixel_width() - scene.camera.viewport_width();
        assert!(scene.camera.x() >= 0.0);
        assert!(scene.camera.x() <= max_x + 0.001);
        assert!(scene.camera.x() > 0.0, "camera never left the west edge");
    }

    #[test]
    fn blocked_movement_keeps_player_off_the_river() {
        let mut scene = scene();
        scene.player.teleport(TilePoint::new(3, 2), Facing::Left);
        let input = InputSnapshot::empty().with_action_down(InputAction::MoveLeft, true);
        for _ in 0..120 {
            scene.update(DT, &input);
        }
        assert_eq!(scene.player.tile(), TilePoint::new(3, 2));
        assert_eq!(scene.player.x(), 3.0 * TILE_SIZE_PX);
    }
}
