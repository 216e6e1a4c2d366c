use std::collections::HashSet;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// One scroll "line" per this many pixels when the device reports pixel
/// deltas (trackpads). Chosen so trackpad zoom roughly matches wheel zoom.
const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that folds winit events into a consistent per-frame snapshot:
/// the held-button set, the latest absolute cursor position, and the scroll
/// delta accumulated since the last frame. The navigation core only ever
/// reads this snapshot at the top of a frame.
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Most recent cursor position in physical pixels
    cursor_position: Option<(f32, f32)>,
    /// Scroll delta accumulated since last reset, in lines
    scroll_delta: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor_position: None,
            scroll_delta: 0.0,
        }
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                if self.pressed_keys.insert(button) {
                                    self.pressed_vec.push(button);
                                }
                            }
                            ElementState::Released => {
                                if self.pressed_keys.remove(&button) {
                                    self.pressed_vec.retain(|&b| b != button);
                                }
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            _ => {}
        }
    }

    /// Reset per-frame state (scroll delta)
    /// Call this at the end of each frame after the core has consumed it
    pub fn reset_deltas(&mut self) {
        self.scroll_delta = 0.0;
    }

    /// Get current cursor position (if the cursor has entered the window)
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    /// Get accumulated scroll delta since last reset
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Map winit KeyCode to a logical Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::Forward),
            KeyCode::KeyS => Some(Button::Backward),
            KeyCode::KeyA => Some(Button::Left),
            KeyCode::KeyD => Some(Button::Right),
            KeyCode::Escape => Some(Button::Quit),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
