use glam::Vec3;
use scene_demos::motion::{orbit_position, OrbitalLightParams, DEFAULT_VERTICAL_FACTORS};
use std::f32::consts::PI;

fn ghosts() -> [OrbitalLightParams; 3] {
    [
        OrbitalLightParams::new(0.5, 5.0),
        OrbitalLightParams::new(-0.38, 5.0),
        OrbitalLightParams::new(0.23, 6.0),
    ]
}

fn sample_times() -> impl Iterator<Item = f32> {
    (0..2000).map(|i| i as f32 * 0.05)
}

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn test_horizontal_path_lies_on_circle() {
        for params in ghosts() {
            let r2 = params.radius_xz * params.radius_xz;
            for t in sample_times() {
                let p = orbit_position(t, &params);
                let d2 = p.x * p.x + p.z * p.z;
                assert!(
                    (d2 - r2).abs() <= r2 * 1e-5,
                    "t={} radius^2={} got {}",
                    t,
                    r2,
                    d2
                );
            }
        }
    }

    #[test]
    fn test_vertical_bob_is_bounded() {
        let wild = OrbitalLightParams::new(7.3, 2.0).with_vertical_factors([0.1, 19.0, -4.5]);
        for params in ghosts().into_iter().chain([wild]) {
            for t in sample_times() {
                let y = orbit_position(t, &params).y;
                assert!((-1.0..=1.0).contains(&y), "t={} y={}", t, y);
            }
        }
    }

    #[test]
    fn test_same_input_is_bit_identical() {
        for params in ghosts() {
            for t in [0.0, 0.016, 1.0, 12.345, 600.0] {
                let a = orbit_position(t, &params);
                let b = orbit_position(t, &params);
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
                assert_eq!(a.z.to_bits(), b.z.to_bits());
            }
        }
    }

    #[test]
    fn test_horizontal_position_is_periodic() {
        for params in ghosts() {
            let period = params.period().unwrap();
            for t in [0.0, 0.7, 3.3, 10.0] {
                let a = orbit_position(t, &params);
                let b = orbit_position(t + period, &params);
                assert!((a.x - b.x).abs() < 1e-3, "x drifted at t={}", t);
                assert!((a.z - b.z).abs() < 1e-3, "z drifted at t={}", t);
            }
        }
    }

    #[test]
    fn test_opposite_speeds_mirror_across_x_axis() {
        let forward = OrbitalLightParams::new(0.38, 5.0);
        let backward = OrbitalLightParams::new(-0.38, 5.0);
        for t in sample_times() {
            let a = orbit_position(t, &forward);
            let b = orbit_position(t, &backward);
            assert!((a.x - b.x).abs() < 1e-6);
            assert!((a.z + b.z).abs() < 1e-6, "t={} z1={} z2={}", t, a.z, b.z);
        }
    }

    #[test]
    fn test_first_ghost_starts_on_positive_x() {
        let params = OrbitalLightParams::new(0.5, 5.0).with_vertical_factors([1.0, 2.34, 3.45]);
        assert_eq!(orbit_position(0.0, &params), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_half_turn_reaches_negative_x() {
        let params = OrbitalLightParams::new(1.0, 1.0);
        let p = orbit_position(PI, &params);
        assert!((p.x + 1.0).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn test_default_factors_match_expected_formula() {
        let params = OrbitalLightParams::new(0.23, 6.0);
        assert_eq!(params.vertical_amplitude_factors, DEFAULT_VERTICAL_FACTORS);

        let t = 4.2f32;
        let angle = t * 0.23;
        let expected = angle.sin() * (angle * 2.34).sin() * (angle * 3.45).sin();
        assert_eq!(orbit_position(t, &params).y, expected);
    }

    #[test]
    fn test_degenerate_params_are_valid() {
        let still = OrbitalLightParams::new(0.0, 0.0);
        for t in [0.0, 1.0, 100.0] {
            assert_eq!(orbit_position(t, &still), Vec3::ZERO);
        }
    }
}
