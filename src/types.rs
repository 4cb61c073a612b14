use glam::Vec3;
use std::path::PathBuf;

use crate::math::Color;
use crate::motion::LightState;

// === Geometry ===

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Text(TextGeometry),
}

impl Geometry {
    pub const fn cube(size: f32) -> Self {
        Geometry::Box {
            width: size,
            height: size,
            depth: size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    pub thickness: f32,
    pub size: f32,
    pub offset: f32,
    pub segments: u32,
}

/// Extruded text; tessellation is left to the renderer's font loader
#[derive(Debug, Clone, PartialEq)]
pub struct TextGeometry {
    pub text: String,
    pub font: PathBuf,
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
    pub bevel: Option<Bevel>,
    /// Translate so the bounding box is centred on the origin
    pub centered: bool,
}

// === Textures and materials ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    #[default]
    Clamp,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    Linear,
    Srgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub path: PathBuf,
    pub repeat: [f32; 2],
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub color_space: ColorSpace,
}

impl Texture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            repeat: [1.0, 1.0],
            wrap_s: Wrap::Clamp,
            wrap_t: Wrap::Clamp,
            color_space: ColorSpace::Linear,
        }
    }

    /// Colour data is authored in sRGB
    pub fn srgb(mut self) -> Self {
        self.color_space = ColorSpace::Srgb;
        self
    }

    /// Scale texture coordinates only; wrapping stays as it is
    pub fn with_repeat(mut self, u: f32, v: f32) -> Self {
        self.repeat = [u, v];
        self
    }

    /// Tile the texture, setting repeat wrapping on every axis that tiles
    pub fn repeated(self, u: f32, v: f32) -> Self {
        let mut texture = self.with_repeat(u, v);
        if u != 1.0 {
            texture.wrap_s = Wrap::Repeat;
        }
        if v != 1.0 {
            texture.wrap_t = Wrap::Repeat;
        }
        texture
    }
}

/// Physically based material; ao, roughness and metalness often share one packed texture
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StandardMaterial {
    pub color: Option<Color>,
    pub map: Option<Texture>,
    pub ao_map: Option<Texture>,
    pub roughness_map: Option<Texture>,
    pub metalness_map: Option<Texture>,
    pub normal_map: Option<Texture>,
    pub alpha_map: Option<Texture>,
    pub displacement_map: Option<Texture>,
    pub displacement_scale: f32,
    pub displacement_bias: f32,
    pub transparent: bool,
}

impl StandardMaterial {
    /// Occlusion in R, roughness in G, metalness in B
    pub fn with_arm(mut self, arm: Texture) -> Self {
        self.ao_map = Some(arm.clone());
        self.roughness_map = Some(arm.clone());
        self.metalness_map = Some(arm);
        self
    }

    pub fn textures(&self) -> impl Iterator<Item = &Texture> {
        [
            &self.map,
            &self.ao_map,
            &self.roughness_map,
            &self.metalness_map,
            &self.normal_map,
            &self.alpha_map,
            &self.displacement_map,
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Basic { color: Color },
    Matcap { matcap: Texture },
    Standard(StandardMaterial),
}

impl Material {
    pub fn textures(&self) -> Box<dyn Iterator<Item = &Texture> + '_> {
        match self {
            Material::Basic { .. } => Box::new(std::iter::empty()),
            Material::Matcap { matcap } => Box::new(std::iter::once(matcap)),
            Material::Standard(standard) => Box::new(standard.textures()),
        }
    }
}

// === Objects ===

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// XYZ Euler angles in radians
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    /// Parent group, if the mesh belongs to one
    pub group: Option<String>,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            group: None,
            geometry,
            material,
            transform: Transform::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }
}

// === Lights ===

/// Orthographic frustum and map resolution for a directional shadow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCamera {
    pub map_size: u32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub shadow: Option<ShadowCamera>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub state: LightState,
    pub cast_shadow: bool,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            state: LightState::default(),
            cast_shadow: false,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.state = LightState::new(position);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient { color: Color, intensity: f32 },
    Directional(DirectionalLight),
    Point(PointLight),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub name: String,
    /// Parent group, if the light belongs to one
    pub group: Option<String>,
    pub kind: LightKind,
}

impl Light {
    pub fn new(name: impl Into<String>, kind: LightKind) -> Self {
        Self {
            name: name.into(),
            group: None,
            kind,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn as_point(&self) -> Option<&PointLight> {
        match &self.kind {
            LightKind::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_point_mut(&mut self) -> Option<&mut PointLight> {
        match &mut self.kind {
            LightKind::Point(point) => Some(point),
            _ => None,
        }
    }
}

// === Environment ===

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fog {
    Linear { color: Color, near: f32, far: f32 },
    Exp2 { color: Color, density: f32 },
}

impl Fog {
    pub fn color(&self) -> Color {
        match self {
            Fog::Linear { color, .. } | Fog::Exp2 { color, .. } => *color,
        }
    }
}

/// Atmospheric scattering dome parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    pub scale: f32,
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    pub sun_position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Helper {
    Axes { size: f32 },
    Grid { size: f32, divisions: u32 },
    /// Frustum of the scene camera
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMapKind {
    Basic,
    #[default]
    Pcf,
    PcfSoft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadowMap {
    pub enabled: bool,
    pub kind: ShadowMapKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_sets_wrapping_only_on_tiled_axes() {
        let texture = Texture::new("roof.jpg").repeated(3.0, 1.0);
        assert_eq!(texture.wrap_s, Wrap::Repeat);
        assert_eq!(texture.wrap_t, Wrap::Clamp);
    }

    #[test]
    fn with_repeat_leaves_wrapping_clamped() {
        let texture = Texture::new("grave.jpg").with_repeat(0.3, 0.4);
        assert_eq!(texture.repeat, [0.3, 0.4]);
        assert_eq!((texture.wrap_s, texture.wrap_t), (Wrap::Clamp, Wrap::Clamp));
    }

    #[test]
    fn arm_texture_fills_three_slots() {
        let material = StandardMaterial::default().with_arm(Texture::new("arm.jpg"));
        assert_eq!(material.textures().count(), 3);
    }

    #[test]
    fn fog_colour_is_shared_by_both_kinds() {
        let linear = Fog::Linear {
            color: Color::RED,
            near: 1.0,
            far: 13.0,
        };
        let exp2 = Fog::Exp2 {
            color: Color::RED,
            density: 0.1,
        };
        assert_eq!(linear.color(), Color::RED);
        assert_eq!(exp2.color(), Color::RED);
    }
}
