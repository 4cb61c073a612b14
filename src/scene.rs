use glam::Vec3;
use std::path::{Path, PathBuf};

use crate::camera::PerspectiveCamera;
use crate::math::Color;
use crate::motion::{orbit_position, update_lights, OrbitalLightParams};
use crate::types::{Fog, Geometry, Helper, Light, LightKind, Mesh, ShadowMap, Sky};
use crate::window::Viewport;

/// Index of a light inside its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(usize);

/// A point light driven by the orbit motion every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedLight {
    pub light: LightId,
    pub params: OrbitalLightParams,
}

/// Renderer options a scene asks for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSettings {
    pub antialias: bool,
    pub shadow_map: ShadowMap,
}

/// Everything one demo sets up, owned in one place and handed to the frame callback
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub name: String,
    pub camera: PerspectiveCamera,
    pub viewport: Viewport,
    pub render: RenderSettings,
    pub background: Color,
    pub fog: Option<Fog>,
    pub sky: Option<Sky>,
    pub helpers: Vec<Helper>,
    meshes: Vec<Mesh>,
    lights: Vec<Light>,
    animated: Vec<AnimatedLight>,
}

impl SceneContext {
    /// Empty scene; the camera takes its aspect from the viewport
    pub fn new(name: impl Into<String>, mut camera: PerspectiveCamera, viewport: Viewport) -> Self {
        camera.set_aspect(viewport.aspect());
        Self {
            name: name.into(),
            camera,
            viewport,
            render: RenderSettings::default(),
            background: Color::BLACK,
            fog: None,
            sky: None,
            helpers: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            animated: Vec::new(),
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    /// Drive a point light with the orbit motion
    /// Returns false if `light` is not a point light of this scene
    pub fn animate_light(&mut self, light: LightId, params: OrbitalLightParams) -> bool {
        let is_point = self
            .lights
            .get(light.0)
            .is_some_and(|l| l.as_point().is_some());

        if is_point {
            match self.animated.iter_mut().find(|a| a.light == light) {
                Some(existing) => existing.params = params,
                None => self.animated.push(AnimatedLight { light, params }),
            }
            // Place it where frame zero will put it
            self.write_position(light, orbit_position(0.0, &params));
        }
        is_point
    }

    /// Recompute every animated light for `time`
    pub fn update(&mut self, time: f32) {
        let animated = &self.animated;
        let pairs = self.lights.iter_mut().enumerate().filter_map(|(i, light)| {
            let params = animated.iter().find(|a| a.light.0 == i).map(|a| &a.params)?;
            Some((params, &mut light.as_point_mut()?.state))
        });
        update_lights(time, pairs);
    }

    fn write_position(&mut self, light: LightId, position: Vec3) {
        if let Some(point) = self.lights.get_mut(light.0).and_then(Light::as_point_mut) {
            point.state.position = position;
        }
    }

    /// Window resize: store the new viewport and refit the camera projection
    /// A minimised (empty) viewport leaves the scene as it was
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn animated_lights(&self) -> &[AnimatedLight] {
        &self.animated
    }

    pub fn light(&self, name: &str) -> Option<&Light> {
        self.lights.iter().find(|l| l.name == name)
    }

    pub fn light_by_id(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name == name)
    }

    pub fn meshes_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Mesh> + 'a {
        self.meshes
            .iter()
            .filter(move |m| m.group.as_deref() == Some(group))
    }

    /// Name and current position of every animated light, in animation order
    pub fn point_light_positions(&self) -> impl Iterator<Item = (&str, Vec3)> + '_ {
        self.animated.iter().filter_map(|a| {
            let light = self.lights.get(a.light.0)?;
            Some((light.name.as_str(), light.as_point()?.position()))
        })
    }

    /// Colour the frame is cleared to: fog colour when fogged, else the background
    pub fn clear_color(&self) -> Color {
        self.fog.map_or(self.background, |fog| fog.color())
    }

    pub fn casts_shadows(&self) -> bool {
        self.render.shadow_map.enabled
            && self.lights.iter().any(|l| match &l.kind {
                LightKind::Directional(d) => d.shadow.is_some(),
                LightKind::Point(p) => p.cast_shadow,
                LightKind::Ambient { .. } => false,
            })
    }

    /// Every asset path the scene refers to, deduplicated, in first-use order
    pub fn texture_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = Vec::new();
        for mesh in &self.meshes {
            let font = match &mesh.geometry {
                Geometry::Text(text) => Some(text.font.as_path()),
                _ => None,
            };
            let textures = mesh.material.textures().map(|t| t.path.as_path());

            for path in font.into_iter().chain(textures) {
                if !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }
        paths
    }

    /// Referenced assets that do not exist under `root`
    pub fn missing_assets(&self, root: &Path) -> Vec<PathBuf> {
        self.texture_paths()
            .into_iter()
            .map(|path| root.join(path.strip_prefix("/").unwrap_or(path)))
            .filter(|path| !path.exists())
            .collect()
    }
}
