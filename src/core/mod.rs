pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod navigation;
pub mod transform;

pub use clock::FrameClock;
pub use controller::{Button, Controller};
pub use input_adapter::WinitController;
pub use navigation::{CameraState, FollowerState, NavigationState, WORLD_UP};
pub use transform::{derive, FrameMatrices};
