// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-walker")]
#[command(about = "Fly-camera viewer for a glTF model over a ground grid", long_about = None)]
pub struct Cli {
    /// Path to the glTF model to display
    #[arg(long = "model", default_value = "res/models/car/scene.gltf")]
    pub model: PathBuf,

    /// JSON file overriding navigation constants
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}
