pub mod app;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod driver;
pub mod frame;
pub mod math;
pub mod motion;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod surface;
pub mod types;
pub mod window;

pub use motion::{orbit_position, update_lights, LightState, OrbitalLightParams};
pub use scene::SceneContext;
pub use scenes::{create_haunted_house_scene, create_starter_scene, create_text_scene, SceneKind};
