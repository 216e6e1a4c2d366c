pub mod cli;
pub mod config;
pub mod core;
pub mod loaders;
pub mod renderer;
pub mod window;

pub use config::NavConfig;
pub use self::core::{
    Button, CameraState, Controller, FollowerState, FrameClock, FrameMatrices, NavigationState,
    WinitController, WORLD_UP,
};
