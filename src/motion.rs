use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Frequency multipliers for the vertical bob: sin(a) * sin(a * 2.34) * sin(a * 3.45)
pub const DEFAULT_VERTICAL_FACTORS: [f32; 3] = [1.0, 2.34, 3.45];

/// Orbit parameters for one animated light
///
/// The horizontal path is a circle of `radius_xz` around the origin, walked at
/// `angular_speed` radians per second. A negative speed reverses the direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalLightParams {
    pub angular_speed: f32,
    pub radius_xz: f32,
    #[serde(default = "default_vertical_factors")]
    pub vertical_amplitude_factors: [f32; 3],
}

fn default_vertical_factors() -> [f32; 3] {
    DEFAULT_VERTICAL_FACTORS
}

impl OrbitalLightParams {
    pub const fn new(angular_speed: f32, radius_xz: f32) -> Self {
        Self {
            angular_speed,
            radius_xz,
            vertical_amplitude_factors: DEFAULT_VERTICAL_FACTORS,
        }
    }

    pub const fn with_vertical_factors(mut self, factors: [f32; 3]) -> Self {
        self.vertical_amplitude_factors = factors;
        self
    }

    /// Position of the light at `time` seconds
    pub fn position_at(&self, time: f32) -> Vec3 {
        orbit_position(time, self)
    }

    /// Seconds for one full horizontal revolution, `None` for a light that never moves
    pub fn period(&self) -> Option<f32> {
        if self.angular_speed == 0.0 {
            None
        } else {
            Some(TAU / self.angular_speed.abs())
        }
    }

    pub fn is_finite(&self) -> bool {
        self.angular_speed.is_finite()
            && self.radius_xz.is_finite()
            && self.vertical_amplitude_factors.iter().all(|f| f.is_finite())
    }
}

/// Circle in XZ plus a product of three sines in Y
///
/// Recomputed from `time` every call, never integrated, so any timestamp can be
/// replayed directly.
pub fn orbit_position(time: f32, params: &OrbitalLightParams) -> Vec3 {
    let angle = time * params.angular_speed;
    let [f1, f2, f3] = params.vertical_amplitude_factors;

    let x = angle.cos() * params.radius_xz;
    let z = angle.sin() * params.radius_xz;
    let y = (angle * f1).sin() * (angle * f2).sin() * (angle * f3).sin();

    Vec3::new(x, y, z)
}

/// Per-frame state of an animated light
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightState {
    pub position: Vec3,
}

impl LightState {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn at(time: f32, params: &OrbitalLightParams) -> Self {
        Self::new(orbit_position(time, params))
    }

    /// Overwrite the position with the one for `time`
    pub fn advance(&mut self, time: f32, params: &OrbitalLightParams) {
        self.position = orbit_position(time, params);
    }
}

/// Write one position per light for the given time
pub fn update_lights<'a, I>(time: f32, lights: I)
where
    I: IntoIterator<Item = (&'a OrbitalLightParams, &'a mut LightState)>,
{
    for (params, state) in lights {
        state.advance(time, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_light_has_no_period() {
        let params = OrbitalLightParams::new(0.0, 3.0);
        assert_eq!(params.period(), None);
        assert_eq!(params.position_at(10.0), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn zero_radius_stays_on_the_axis() {
        let params = OrbitalLightParams::new(1.3, 0.0);
        let p = params.position_at(2.7);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.z, 0.0);
        assert!(p.y.abs() <= 1.0);
    }

    #[test]
    fn period_ignores_direction() {
        let forward = OrbitalLightParams::new(0.5, 5.0);
        let backward = OrbitalLightParams::new(-0.5, 5.0);
        assert_eq!(forward.period(), backward.period());
        assert!((forward.period().unwrap() - 4.0 * std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn advance_does_not_depend_on_previous_position() {
        let params = OrbitalLightParams::new(0.38, 5.0);
        let mut state = LightState::new(Vec3::splat(100.0));
        state.advance(1.5, &params);
        assert_eq!(state, LightState::at(1.5, &params));
    }

    #[test]
    fn update_lights_writes_every_state() {
        let params = [OrbitalLightParams::new(0.5, 5.0), OrbitalLightParams::new(-0.38, 6.0)];
        let mut states = [LightState::default(); 2];

        update_lights(2.0, params.iter().zip(states.iter_mut()));

        assert_eq!(states[0].position, orbit_position(2.0, &params[0]));
        assert_eq!(states[1].position, orbit_position(2.0, &params[1]));
    }

    #[test]
    fn custom_factors_change_only_the_bob() {
        let default = OrbitalLightParams::new(0.5, 5.0);
        let custom = default.with_vertical_factors([1.0, 1.0, 1.0]);
        let (a, b) = (default.position_at(3.0), custom.position_at(3.0));
        assert_eq!(a.x, b.x);
        assert_eq!(a.z, b.z);
        assert!((b.y - (1.5f32).sin().powi(3)).abs() < 1e-6);
    }

    #[test]
    fn missing_factors_deserialize_to_defaults() {
        let params: OrbitalLightParams =
            serde_json::from_str(r#"{"angular_speed": 0.23, "radius_xz": 6.0}"#).unwrap();
        assert_eq!(params.vertical_amplitude_factors, DEFAULT_VERTICAL_FACTORS);
    }
}
