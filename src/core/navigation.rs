use glam::Vec3;

use super::controller::{Button, Controller};
use crate::config::NavConfig;

pub const WORLD_UP: Vec3 = Vec3::Y;

/// First-person camera state. Angles are in degrees; the look direction is
/// always derived from yaw/pitch, never stored, so it cannot drift out of
/// sync with them.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
}

impl CameraState {
    /// Unit look direction from yaw/pitch (spherical to Cartesian).
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
        .normalize()
    }
}

/// The model that rides along with the camera. Its translation is coupled
/// to camera movement; its heading integrates independently from strafe
/// input and never follows the camera's look direction.
#[derive(Debug, Clone, Copy)]
pub struct FollowerState {
    pub position: Vec3,
    pub heading: f32,
}

/// Cursor tracking for mouse look. The first observed sample only seeds
/// the last-position fields; consuming it as a delta would snap the view
/// by the cursor's full distance from the window origin.
#[derive(Debug, Clone, Copy, Default)]
struct MouseTracking {
    last_x: f32,
    last_y: f32,
    initialized: bool,
}

/// Owns all per-frame mutable viewer state and applies the three input
/// operations. Call order within a frame: `apply_keyboard`,
/// `apply_mouse_look`, `apply_scroll` (they touch disjoint fields), then
/// derive matrices from the result.
#[derive(Debug)]
pub struct NavigationState {
    pub camera: CameraState,
    pub follower: FollowerState,
    mouse: MouseTracking,
    config: NavConfig,
}

impl NavigationState {
    /// Initial pose framing the bundled scene: camera just behind and
    /// slightly above the model, both looking down negative Z.
    pub fn new(config: NavConfig) -> Self {
        Self {
            camera: CameraState {
                position: Vec3::new(0.0, 2.1, 3.0),
                yaw: -90.0,
                pitch: 0.0,
                fov: config.fov_max,
            },
            follower: FollowerState {
                position: Vec3::new(0.0, 2.0, 2.7),
                heading: 180.0,
            },
            mouse: MouseTracking::default(),
            config,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Look direction projected onto the ground plane and renormalized.
    /// Movement follows this regardless of pitch, so walking never gains a
    /// vertical component. Valid while pitch stays inside ±pitch_limit.
    pub fn horizontal_front(&self) -> Vec3 {
        let front = self.camera.front();
        Vec3::new(front.x, 0.0, front.z).normalize()
    }

    /// Apply held movement keys for this frame. Camera and follower receive
    /// the identical displacement vector per key; strafe keys additionally
    /// turn the follower's heading. Returns true when quit is requested.
    pub fn apply_keyboard(&mut self, input: &dyn Controller, delta: f32) -> bool {
        let step = self.config.move_speed * delta;
        let front = self.horizontal_front();
        let right = front.cross(WORLD_UP).normalize();

        if input.is_down(Button::Forward) {
            self.displace(step * front);
        }
        if input.is_down(Button::Backward) {
            self.displace(-step * front);
        }
        if input.is_down(Button::Left) {
            self.displace(-step * right);
            self.follower.heading += self.config.turn_rate * delta;
        }
        if input.is_down(Button::Right) {
            self.displace(step * right);
            self.follower.heading -= self.config.turn_rate * delta;
        }

        input.is_down(Button::Quit)
    }

    /// Apply the latest absolute cursor position. Screen Y grows downward
    /// while pitch grows upward, hence the inverted vertical delta.
    pub fn apply_mouse_look(&mut self, x: f32, y: f32) {
        if !self.mouse.initialized {
            self.mouse = MouseTracking {
                last_x: x,
                last_y: y,
                initialized: true,
            };
            return;
        }

        let dx = (x - self.mouse.last_x) * self.config.mouse_sensitivity;
        let dy = (self.mouse.last_y - y) * self.config.mouse_sensitivity;
        self.mouse.last_x = x;
        self.mouse.last_y = y;

        self.camera.yaw += dx;
        self.camera.pitch = (self.camera.pitch + dy)
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);
    }

    /// Apply this frame's accumulated scroll. Scrolling away narrows the
    /// field of view (zoom in); the result stays inside [fov_min, fov_max].
    pub fn apply_scroll(&mut self, scroll_y: f32) {
        self.camera.fov =
            (self.camera.fov - scroll_y).clamp(self.config.fov_min, self.config.fov_max);
    }

    fn displace(&mut self, offset: Vec3) {
        self.camera.position += offset;
        self.follower.position += offset;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}
