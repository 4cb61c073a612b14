use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::camera::PerspectiveCamera;
use crate::config::DemoConfig;
use crate::math::Color;
use crate::scene::SceneContext;
use crate::types::{
    DirectionalLight, Fog, Geometry, Light, LightKind, Material, Mesh, PointLight, ShadowCamera,
    ShadowMap, ShadowMapKind, Sky, StandardMaterial, Texture, Transform,
};
use crate::window::Viewport;

use super::common::{seeded_rng, PbrTextures};

pub const HOUSE_GROUP: &str = "house";
pub const GRAVES_GROUP: &str = "graves";
pub const GRAVE_COUNT: usize = 30;
pub const GRAVE_MIN_RADIUS: f32 = 3.0;
pub const GRAVE_MAX_RADIUS: f32 = 7.0;

const MOONLIGHT: u32 = 0x86cdff;
const WALL_HEIGHT: f32 = 2.5;
const ROOF_HEIGHT: f32 = 1.5;

/// Textured house in a graveyard, lit by moonlight, a door lamp and three orbiting ghosts
pub fn create_haunted_house_scene(viewport: Viewport, config: &DemoConfig) -> SceneContext {
    let camera = PerspectiveCamera::new(75.0, viewport.aspect(), 0.1, 1000.0)
        .with_position(Vec3::new(5.0, 3.0, 7.0));

    let mut scene = SceneContext::new("haunted-house", camera, viewport);
    scene.render.antialias = true;
    scene.render.shadow_map = ShadowMap {
        enabled: true,
        kind: ShadowMapKind::PcfSoft,
    };

    add_moonlight(&mut scene);
    add_floor(&mut scene, config);
    add_house(&mut scene);
    add_ghosts(&mut scene, config);
    add_graves(&mut scene, config.seed);

    scene.sky = Some(Sky {
        scale: 100.0,
        turbidity: 10.0,
        rayleigh: 3.0,
        mie_coefficient: 0.1,
        mie_directional_g: 0.95,
        sun_position: Vec3::new(0.3, -0.038, -0.95),
    });
    scene.fog = Some(Fog::Exp2 {
        color: Color::from_u32(0x04343f),
        density: 0.1,
    });

    log::info!(
        "Haunted house created: {} meshes, {} lights ({} animated), seed {}",
        scene.meshes().len(),
        scene.lights().len(),
        scene.animated_lights().len(),
        config.seed
    );
    scene
}

fn add_moonlight(scene: &mut SceneContext) {
    let moon = Color::from_u32(MOONLIGHT);

    scene.add_light(Light::new(
        "ambient",
        LightKind::Ambient {
            color: moon,
            intensity: 0.275,
        },
    ));
    scene.add_light(Light::new(
        "moon",
        LightKind::Directional(DirectionalLight {
            color: moon,
            intensity: 1.0,
            position: Vec3::new(3.0, 2.0, -8.0),
            shadow: Some(ShadowCamera {
                map_size: 256,
                top: 8.0,
                right: 8.0,
                bottom: -8.0,
                left: -8.0,
                near: 1.0,
                far: 20.0,
            }),
        }),
    ));
}

fn add_floor(scene: &mut SceneContext, config: &DemoConfig) {
    let textures = PbrTextures::new("./floor/textures", "coast_sand_rocks_02").repeated(8.0, 8.0);
    // Normal and height maps live in the unpacked 1k archive
    let normal = Texture::new("./floor/coast_sand_rocks_02_1k/coast_sand_rocks_02_nor_gl_1k.jpg")
        .repeated(8.0, 8.0);
    let displacement = Texture::new("./floor/coast_sand_rocks_02_1k/coast_sand_rocks_02_disp_1k.jpg")
        .repeated(8.0, 8.0);

    let material = StandardMaterial {
        alpha_map: Some(Texture::new("./floor/alpha.jpg")),
        transparent: true,
        normal_map: Some(normal),
        displacement_map: Some(displacement),
        displacement_scale: config.floor.displacement_scale,
        displacement_bias: config.floor.displacement_bias,
        ..textures.material()
    };

    scene.add_mesh(
        Mesh::new(
            "floor",
            Geometry::Plane {
                width: 20.0,
                height: 20.0,
                width_segments: 100,
                height_segments: 100,
            },
            Material::Standard(material),
        )
        .with_transform(Transform::IDENTITY.rotated(Vec3::new(-PI * 0.5, 0.0, 0.0))),
    );
}

fn add_house(scene: &mut SceneContext) {
    scene.add_light(
        Light::new(
            "door_light",
            LightKind::Point(PointLight::new(Color::from_u32(0xff7d46), 5.0).at(Vec3::new(0.0, 2.2, 2.5))),
        )
        .in_group(HOUSE_GROUP),
    );

    let walls = PbrTextures::new("./walls", "castle_brick_broken_06");
    scene.add_mesh(
        Mesh::new(
            "walls",
            Geometry::Box {
                width: 4.0,
                height: WALL_HEIGHT,
                depth: 4.0,
            },
            Material::Standard(walls.material()),
        )
        .in_group(HOUSE_GROUP)
        .with_transform(Transform::at(Vec3::new(0.0, WALL_HEIGHT * 0.5, 0.0))),
    );

    let roof = PbrTextures::new("./roof", "ceramic_roof_01").repeated(3.0, 1.0);
    scene.add_mesh(
        Mesh::new(
            "roof",
            Geometry::Cone {
                radius: 3.5,
                height: ROOF_HEIGHT,
                radial_segments: 4,
            },
            Material::Standard(roof.material()),
        )
        .in_group(HOUSE_GROUP)
        .with_transform(
            Transform::at(Vec3::new(0.0, WALL_HEIGHT + ROOF_HEIGHT * 0.5, 0.0))
                .rotated(Vec3::new(0.0, PI * 0.25, 0.0)),
        ),
    );

    let door = StandardMaterial {
        alpha_map: Some(Texture::new("./door/alpha.jpg")),
        transparent: true,
        map: Some(Texture::new("./door/color.jpg").srgb()),
        ao_map: Some(Texture::new("./door/ambientOcclusion.jpg")),
        metalness_map: Some(Texture::new("./door/metalness.jpg")),
        normal_map: Some(Texture::new("./door/normal.jpg")),
        roughness_map: Some(Texture::new("./door/roughness.jpg")),
        displacement_map: Some(Texture::new("./door/height.jpg")),
        displacement_scale: 0.15,
        displacement_bias: -0.04,
        ..StandardMaterial::default()
    };
    scene.add_mesh(
        Mesh::new(
            "door",
            Geometry::Plane {
                width: 2.2,
                height: 2.2,
                width_segments: 100,
                height_segments: 100,
            },
            Material::Standard(door),
        )
        .in_group(HOUSE_GROUP)
        // Just in front of the wall to avoid z-fighting
        .with_transform(Transform::at(Vec3::new(0.0, 1.0, 2.0 + 0.001))),
    );

    let bush_geometry = Geometry::Sphere {
        radius: 1.0,
        width_segments: 16,
        height_segments: 16,
    };
    let bush_material = Material::Standard(StandardMaterial {
        color: Some(Color::from_u32(0xccffcc)),
        ..PbrTextures::new("./bush", "leaves_forest_ground")
            .repeated(2.0, 1.0)
            .material()
    });
    let bushes = [
        (0.5, Vec3::new(0.8, 0.2, 2.2)),
        (0.25, Vec3::new(1.4, 0.1, 2.1)),
        (0.4, Vec3::new(-0.8, 0.1, 2.2)),
        (0.15, Vec3::new(-1.0, 0.05, 2.6)),
    ];
    for (i, (scale, position)) in bushes.into_iter().enumerate() {
        scene.add_mesh(
            Mesh::new(format!("bush_{}", i + 1), bush_geometry.clone(), bush_material.clone())
                .in_group(HOUSE_GROUP)
                .with_transform(
                    Transform::at(position)
                        .rotated(Vec3::new(-0.75, 0.0, 0.0))
                        .scaled(scale),
                ),
        );
    }
}

fn add_ghosts(scene: &mut SceneContext, config: &DemoConfig) {
    for (i, ghost) in config.ghosts.iter().enumerate() {
        let mut light = PointLight::new(ghost.color, ghost.intensity);
        light.cast_shadow = true;

        let id = scene.add_light(Light::new(format!("ghost_{}", i + 1), LightKind::Point(light)));
        scene.animate_light(id, ghost.motion);
    }
}

fn add_graves(scene: &mut SceneContext, seed: u64) {
    let textures = PbrTextures::new("./grave", "plastered_stone_wall").with_repeat(0.3, 0.4);
    let material = Material::Standard(textures.material());
    let geometry = Geometry::Box {
        width: 0.6,
        height: 0.8,
        depth: 0.2,
    };

    let mut rng = seeded_rng(seed);
    for i in 0..GRAVE_COUNT {
        let angle = rng.gen::<f32>() * TAU;
        let radius = GRAVE_MIN_RADIUS + rng.gen::<f32>() * (GRAVE_MAX_RADIUS - GRAVE_MIN_RADIUS);
        let position = Vec3::new(angle.sin() * radius, rng.gen::<f32>() * 0.4, angle.cos() * radius);
        let rotation = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 0.4,
            (rng.gen::<f32>() - 0.5) * 0.4,
            (rng.gen::<f32>() - 0.5) * 0.4,
        );

        scene.add_mesh(
            Mesh::new(format!("grave_{i}"), geometry.clone(), material.clone())
                .in_group(GRAVES_GROUP)
                .with_transform(Transform::at(position).rotated(rotation))
                .with_shadows(true, true),
        );
    }
}
