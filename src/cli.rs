// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::scenes::SceneKind;
use crate::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-demos")]
#[command(about = "Starter, 3D text and haunted house scenes", long_about = None)]
pub struct Cli {
    /// Scene to build
    #[arg(long, value_enum, default_value_t = SceneKind::HauntedHouse)]
    pub scene: SceneKind,

    /// JSON config file (seed, floor displacement, ghost orbits)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without a window, tracing light positions to stdout
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many frames (headless default: 600)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Fixed frame rate for headless runs
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Seconds to start the animation at (headless)
    #[arg(long, default_value_t = 0.0)]
    pub start_time: f32,

    /// Write a trace line every N frames (headless)
    #[arg(long, default_value_t = 1)]
    pub trace_every: u64,

    /// Viewport width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Viewport height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Device pixel ratio for headless runs (clamped to 2)
    #[arg(long, default_value_t = 1.0)]
    pub pixel_ratio: f64,

    /// Directory textures and fonts are resolved against
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Seed for random prop placement, overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub const DEFAULT_HEADLESS_FRAMES: u64 = 600;

    /// Frame limit in effect; windowed runs are unbounded unless asked
    pub fn frame_limit(&self) -> Option<u64> {
        match (self.frames, self.headless) {
            (Some(n), _) => Some(n),
            (None, true) => Some(Self::DEFAULT_HEADLESS_FRAMES),
            (None, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["scene-demos"]);
        assert_eq!(cli.scene, SceneKind::HauntedHouse);
        assert!(!cli.headless);
        assert_eq!(cli.frame_limit(), None);
        assert_eq!((cli.width, cli.height), (800, 600));
    }

    #[test]
    fn headless_has_a_default_limit() {
        let cli = Cli::parse_from(["scene-demos", "--headless", "--scene", "text"]);
        assert_eq!(cli.scene, SceneKind::Text);
        assert_eq!(cli.frame_limit(), Some(Cli::DEFAULT_HEADLESS_FRAMES));
    }

    #[test]
    fn scene_names_are_kebab_case() {
        let cli = Cli::parse_from(["scene-demos", "--scene", "haunted-house", "--frames", "5"]);
        assert_eq!(cli.scene, SceneKind::HauntedHouse);
        assert_eq!(cli.frame_limit(), Some(5));
        assert!(Cli::try_parse_from(["scene-demos", "--scene", "castle"]).is_err());
    }
}
