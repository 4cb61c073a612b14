/// Highest device pixel ratio the renderer will honour
pub const MAX_PIXEL_RATIO: f64 = 2.0;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Drawable area in logical pixels plus the pixel ratio used for the backing buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Viewport from a logical size and the device pixel ratio, clamped to `MAX_PIXEL_RATIO`
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };

        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Viewport from a physical window size, as winit reports it
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };

        Self::new(
            (width as f64 / scale).round() as u32,
            (height as f64 / scale).round() as u32,
            scale,
        )
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Size of the backing buffer in physical pixels, never smaller than 1x1
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let scale = |v: u32| ((v as f64 * self.pixel_ratio).round() as u32).max(1);
        (scale(self.width), scale(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_is_clamped() {
        assert_eq!(Viewport::new(800, 600, 3.0).pixel_ratio, 2.0);
        assert_eq!(Viewport::new(800, 600, 1.5).pixel_ratio, 1.5);
    }

    #[test]
    fn test_invalid_pixel_ratio_falls_back_to_one() {
        assert_eq!(Viewport::new(800, 600, 0.0).pixel_ratio, 1.0);
        assert_eq!(Viewport::new(800, 600, f64::NAN).pixel_ratio, 1.0);
    }

    #[test]
    fn test_aspect() {
        assert_eq!(Viewport::new(1920, 1080, 1.0).aspect(), 1920.0 / 1080.0);
        assert_eq!(Viewport::new(640, 0, 1.0).aspect(), 1.0);
    }

    #[test]
    fn test_from_physical_on_hidpi() {
        let viewport = Viewport::from_physical(3840, 2160, 3.0);
        assert_eq!((viewport.width, viewport.height), (1280, 720));
        assert_eq!(viewport.pixel_ratio, 2.0);
        assert_eq!(viewport.drawing_buffer_size(), (2560, 1440));
    }

    #[test]
    fn test_drawing_buffer_never_empty() {
        let viewport = Viewport::new(0, 0, 2.0);
        assert!(viewport.is_empty());
        assert_eq!(viewport.drawing_buffer_size(), (1, 1));
    }
}
