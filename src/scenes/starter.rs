use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::math::Color;
use crate::scene::SceneContext;
use crate::types::{Geometry, Helper, Material, Mesh};
use crate::window::Viewport;

/// Minimal starting point: a red cube with axes, a grid and a camera helper
pub fn create_starter_scene(viewport: Viewport) -> SceneContext {
    let camera = PerspectiveCamera::new(75.0, viewport.aspect(), 0.1, 100.0)
        .with_position(Vec3::new(4.0, 2.0, 5.0));

    let mut scene = SceneContext::new("starter", camera, viewport);

    scene.helpers.push(Helper::Axes { size: 10.0 });
    scene.helpers.push(Helper::Grid {
        size: 10.0,
        divisions: 10,
    });
    scene.helpers.push(Helper::Camera);

    scene.add_mesh(Mesh::new(
        "box",
        Geometry::cube(2.0),
        Material::Basic { color: Color::RED },
    ));

    log::info!("Starter scene created: {} meshes", scene.meshes().len());
    scene
}
