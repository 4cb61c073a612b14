use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use crate::camera::PerspectiveCamera;
use crate::math::Color;
use crate::scene::SceneContext;
use crate::types::{Bevel, Geometry, Light, LightKind, Material, Mesh, TextGeometry, Texture, Transform};
use crate::window::Viewport;

use super::common::seeded_rng;

pub const TEXT: &str = "Hello Three.js!";
pub const FONT_PATH: &str = "/fonts/helvetiker_regular.typeface.json";
pub const DONUT_COUNT: usize = 300;
/// Donuts are scattered in a cube of this edge length centred on the origin
pub const DONUT_SPREAD: f32 = 10.0;

/// Bevelled 3D text surrounded by randomly placed matcap donuts
pub fn create_text_scene(viewport: Viewport, seed: u64) -> SceneContext {
    let camera = PerspectiveCamera::new(75.0, viewport.aspect(), 0.1, 1000.0)
        .with_position(Vec3::new(0.0, 0.0, 5.0));

    let mut scene = SceneContext::new("text", camera, viewport);
    scene.render.antialias = true;

    scene.add_light(Light::new(
        "ambient",
        LightKind::Ambient {
            color: Color::WHITE,
            intensity: 1.0,
        },
    ));

    let text = TextGeometry {
        text: TEXT.to_string(),
        font: FONT_PATH.into(),
        size: 0.8,
        depth: 0.2,
        curve_segments: 5,
        bevel: Some(Bevel {
            thickness: 0.02,
            size: 0.03,
            offset: 0.0,
            segments: 3,
        }),
        centered: true,
    };
    scene.add_mesh(Mesh::new(
        "text",
        Geometry::Text(text),
        Material::Matcap {
            matcap: Texture::new("/matCap/mat-4.png"),
        },
    ));

    let donut = Geometry::Torus {
        radius: 0.3,
        tube: 0.2,
        radial_segments: 20,
        tubular_segments: 45,
    };
    let donut_material = Material::Matcap {
        matcap: Texture::new("/matCap/mat-2.png"),
    };

    let mut rng = seeded_rng(seed);
    for i in 0..DONUT_COUNT {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * DONUT_SPREAD,
            (rng.gen::<f32>() - 0.5) * DONUT_SPREAD,
            (rng.gen::<f32>() - 0.5) * DONUT_SPREAD,
        );
        let rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
        let scale = rng.gen::<f32>();

        scene.add_mesh(
            Mesh::new(format!("donut_{i}"), donut.clone(), donut_material.clone())
                .in_group("donuts")
                .with_transform(Transform::at(position).rotated(rotation).scaled(scale)),
        );
    }

    log::info!(
        "Text scene created: {} meshes ({} donuts, seed {})",
        scene.meshes().len(),
        DONUT_COUNT,
        seed
    );
    scene
}
