use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::math::Color;
use crate::motion::OrbitalLightParams;

pub const DEFAULT_SEED: u64 = 42;

/// One animated point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostConfig {
    #[serde(flatten)]
    pub motion: OrbitalLightParams,
    pub color: Color,
    #[serde(default = "default_ghost_intensity")]
    pub intensity: f32,
}

fn default_ghost_intensity() -> f32 {
    6.0
}

impl GhostConfig {
    pub fn new(color: Color, angular_speed: f32, radius_xz: f32) -> Self {
        Self {
            motion: OrbitalLightParams::new(angular_speed, radius_xz),
            color,
            intensity: default_ghost_intensity(),
        }
    }
}

/// Floor displacement, the two values the haunted house exposes for tweaking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    pub displacement_scale: f32,
    pub displacement_bias: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            displacement_scale: 0.3,
            displacement_bias: 0.002,
        }
    }
}

/// Settings read from the JSON config file; every field is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed for randomly placed props (graves, donuts)
    pub seed: u64,
    pub asset_root: Option<PathBuf>,
    pub floor: FloorConfig,
    pub ghosts: Vec<GhostConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            asset_root: None,
            floor: FloorConfig::default(),
            ghosts: default_ghosts(),
        }
    }
}

/// The three ghosts circling the haunted house
pub fn default_ghosts() -> Vec<GhostConfig> {
    vec![
        GhostConfig::new(Color::from_u32(0x8800ff), 0.5, 5.0),
        GhostConfig::new(Color::from_u32(0xff0088), -0.38, 5.0),
        GhostConfig::new(Color::from_u32(0xff0000), 0.23, 6.0),
    ]
}

impl DemoConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        log::info!(
            "Loaded config {:?}: {} ghosts, seed {}",
            path,
            config.ghosts.len(),
            config.seed
        );
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: DemoConfig = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<()> {
        for (i, ghost) in self.ghosts.iter().enumerate() {
            if !ghost.motion.is_finite() {
                bail!("ghost {i}: orbit parameters must be finite numbers");
            }
            if !ghost.intensity.is_finite() || ghost.intensity < 0.0 {
                bail!("ghost {i}: intensity must be a non-negative number");
            }
        }

        let floor = &self.floor;
        if !(0.0..=1.0).contains(&floor.displacement_scale) {
            bail!(
                "floor displacement_scale {} is outside [0, 1]",
                floor.displacement_scale
            );
        }
        if !(-1.0..=1.0).contains(&floor.displacement_bias) {
            bail!(
                "floor displacement_bias {} is outside [-1, 1]",
                floor.displacement_bias
            );
        }
        Ok(())
    }
}
