pub const CAMERA_FOLLOW_RATE_PER_SECOND: f32 = 12.0;

/// Viewport camera. `x`/`y` is the top-left corner of the view in world
/// pixels, always clamped so the viewport never shows space outside the
/// active grid.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    x: f32,
    y: f32,
    viewport_width: f32,
    viewport_height: f32,
    map_width: f32,
    map_height: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32, map_width: f32, map_height: f32) -> Self {
        let mut camera = Self {
            x: 0.0,
            y: 0.0,
            viewport_width,
            viewport_height,
            map_width,
            map_height,
        };
        camera.clamp_to_bounds();
        camera
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Smoothly chase a world-space focus point (usually the player's
    /// center). Framerate-independent: factor = 1 - exp(-rate * dt).
    pub fn follow(&mut self, target_x: f32, target_y: f32, dt_seconds: f32) {
        let desired_x = target_x - self.viewport_width / 2.0;
        let desired_y = target_y - self.viewport_height / 2.0;
        let lerp = 1.0 - (-CAMERA_FOLLOW_RATE_PER_SECOND * dt_seconds).exp();
        self.x += (desired_x - self.x) * lerp;
        self.y += (desired_y - self.y) * lerp;
        self.clamp_to_bounds();
    }

    /// Immediate recenter, used on location transitions.
    pub fn center_on(&mut self, target_x: f32, target_y: f32) {
        self.x = target_x - self.viewport_width / 2.0;
        self.y = target_y - self.viewport_height / 2.0;
        self.clamp_to_bounds();
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_to_bounds();
    }

    pub fn set_map_bounds(&mut self, map_width: f32, map_height: f32) {
        self.map_width = map_width;
        self.map_height = map_height;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        let max_x = (self.map_width - self.viewport_width).max(0.0);
        let max_y = (self.map_height - self.viewport_height).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);
    }
}
