use super::camera::Camera;
use super::grid::TileGrid;
use super::input::InputSnapshot;
use super::overlay::{OverlayState, Prompt};
use super::player::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub frame: u8,
}

#[derive(Debug, Clone, Copy)]
pub enum OverlayView<'a> {
    None,
    Dialog {
        title: &'a str,
        body: &'a str,
    },
    Panel {
        title: &'a str,
        entry_count: usize,
        focus_index: usize,
    },
}

impl<'a> OverlayView<'a> {
    pub fn from_state(state: &'a OverlayState) -> Self {
        match state {
            OverlayState::Idle => OverlayView::None,
            OverlayState::Dialog { current, .. } => OverlayView::Dialog {
                title: &current.title,
                body: &current.body,
            },
            OverlayState::Panel {
                title,
                entries,
                focus_index,
            } => OverlayView::Panel {
                title,
                entry_count: entries.len(),
                focus_index: *focus_index,
            },
        }
    }
}

/// Everything the renderer needs for one frame. The scene owns the
/// simulation state; the renderer only reads this view.
pub struct SceneView<'a> {
    pub grid: &'a TileGrid,
    pub camera: &'a Camera,
    pub player: PlayerView,
    pub overlay: OverlayView<'a>,
    pub prompt: Option<&'a Prompt>,
    pub location_name: &'a str,
    pub interior: bool,
}

/// A game driven by the fixed-timestep loop: updates are deterministic in
/// their fixed dt, rendering happens from the returned view.
pub trait Scene {
    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand;
    fn view(&self) -> SceneView<'_>;
    fn handle_viewport_resize(&mut self, _world_width: f32, _world_height: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::overlay::DialogPage;

    #[test]
    fn overlay_view_mirrors_dialog_state() {
        let state = OverlayState::Dialog {
            current: DialogPage::new("Sign", "hello"),
            queue: Default::default(),
        };
        match OverlayView::from_state(&state) {
            OverlayView::Dialog { title, body } => {
                assert_eq!(title, "Sign");
                assert_eq!(body, "hello");
            }
            _ => panic!("expected dialog view"),
        }
    }

    #[test]
    fn overlay_view_mirrors_panel_focus() {
        let state = OverlayState::Panel {
            title: "Publications".to_string(),
            entries: vec![],
            focus_index: 0,
        };
        match OverlayView::from_state(&state) {
            OverlayView::Panel {
                title, entry_count, ..
            } => {
                assert_eq!(title, "Publications");
                assert_eq!(entry_count, 0);
            }
            _ => panic!("expected panel view"),
        }
    }
}
