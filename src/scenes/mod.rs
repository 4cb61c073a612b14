mod common;
mod haunted_house;
mod starter;
mod text;

use clap::ValueEnum;
use std::fmt;

use crate::config::DemoConfig;
use crate::scene::SceneContext;
use crate::window::Viewport;

pub use common::PbrTextures;
pub use haunted_house::{
    create_haunted_house_scene, GRAVES_GROUP, GRAVE_COUNT, GRAVE_MAX_RADIUS, GRAVE_MIN_RADIUS,
    HOUSE_GROUP,
};
pub use starter::create_starter_scene;
pub use text::{create_text_scene, DONUT_COUNT, DONUT_SPREAD, FONT_PATH, TEXT};

/// The demos this crate can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneKind {
    Starter,
    Text,
    #[default]
    HauntedHouse,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [SceneKind::Starter, SceneKind::Text, SceneKind::HauntedHouse];

    /// Run the scene's initialization routine
    pub fn build(self, viewport: Viewport, config: &DemoConfig) -> SceneContext {
        match self {
            SceneKind::Starter => create_starter_scene(viewport),
            SceneKind::Text => create_text_scene(viewport, config.seed),
            SceneKind::HauntedHouse => create_haunted_house_scene(viewport, config),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Starter => "Starter",
            SceneKind::Text => "3D Text",
            SceneKind::HauntedHouse => "Haunted House",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
