use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

use crate::types::{StandardMaterial, Texture};

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Colour, packed ARM and OpenGL-normal textures sharing one file stem:
/// `<dir>/<stem>_diff_1k.jpg`, `<dir>/<stem>_arm_1k.jpg`, `<dir>/<stem>_nor_gl_1k.jpg`
#[derive(Debug, Clone)]
pub struct PbrTextures {
    pub color: Texture,
    pub arm: Texture,
    pub normal: Texture,
}

impl PbrTextures {
    pub fn new(dir: impl AsRef<Path>, stem: &str) -> Self {
        let dir = dir.as_ref();
        let file = |suffix: &str| -> PathBuf { dir.join(format!("{stem}_{suffix}_1k.jpg")) };

        Self {
            color: Texture::new(file("diff")).srgb(),
            arm: Texture::new(file("arm")),
            normal: Texture::new(file("nor_gl")),
        }
    }

    pub fn repeated(self, u: f32, v: f32) -> Self {
        Self {
            color: self.color.repeated(u, v),
            arm: self.arm.repeated(u, v),
            normal: self.normal.repeated(u, v),
        }
    }

    /// Same repeat on the whole set without enabling wrapping
    pub fn with_repeat(self, u: f32, v: f32) -> Self {
        Self {
            color: self.color.with_repeat(u, v),
            arm: self.arm.with_repeat(u, v),
            normal: self.normal.with_repeat(u, v),
        }
    }

    pub fn material(self) -> StandardMaterial {
        StandardMaterial {
            map: Some(self.color),
            normal_map: Some(self.normal),
            ..StandardMaterial::default()
        }
        .with_arm(self.arm)
    }
}
