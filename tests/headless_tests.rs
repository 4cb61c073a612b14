use scene_demos::clock::FixedStep;
use scene_demos::config::DemoConfig;
use scene_demos::driver::FrameDriver;
use scene_demos::motion::orbit_position;
use scene_demos::renderer::TraceRenderer;
use scene_demos::scenes::SceneKind;
use scene_demos::window::Viewport;
use serde_json::Value;

fn trace(kind: SceneKind, fps: f32, frames: u64, every: u64) -> Vec<Value> {
    let mut scene = kind.build(Viewport::default(), &DemoConfig::default());
    let mut driver = FrameDriver::new(FixedStep::new(fps)).with_frame_limit(frames);
    let mut renderer = TraceRenderer::new(Vec::new(), every);

    assert_eq!(driver.run(&mut scene, &mut renderer).unwrap(), frames);

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    text.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn position(sample: &Value) -> [f64; 3] {
    let p = sample["position"].as_array().unwrap();
    [
        p[0].as_f64().unwrap(),
        p[1].as_f64().unwrap(),
        p[2].as_f64().unwrap(),
    ]
}

#[cfg(test)]
mod headless_tests {
    use super::*;

    #[test]
    fn test_first_frame_puts_ghost_one_on_positive_x() {
        let lines = trace(SceneKind::HauntedHouse, 60.0, 1, 1);
        assert_eq!(lines.len(), 1);

        let first = &lines[0];
        assert_eq!(first["frame"], 0);
        assert_eq!(first["time"].as_f64(), Some(0.0));
        assert_eq!(first["lights"][0]["name"], "ghost_1");
        assert_eq!(position(&first["lights"][0]), [5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_trace_matches_orbit_positions() {
        let config = DemoConfig::default();
        let lines = trace(SceneKind::HauntedHouse, 30.0, 90, 1);
        assert_eq!(lines.len(), 90);

        for line in &lines {
            let time = line["time"].as_f64().unwrap() as f32;
            let lights = line["lights"].as_array().unwrap();
            assert_eq!(lights.len(), config.ghosts.len());

            for (sample, ghost) in lights.iter().zip(&config.ghosts) {
                let expected = orbit_position(time, &ghost.motion);
                let got = position(sample);
                assert!((got[0] as f32 - expected.x).abs() < 1e-5);
                assert!((got[1] as f32 - expected.y).abs() < 1e-5);
                assert!((got[2] as f32 - expected.z).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_trace_every_thins_the_output() {
        let lines = trace(SceneKind::HauntedHouse, 60.0, 10, 4);
        let frames: Vec<u64> = lines.iter().map(|l| l["frame"].as_u64().unwrap()).collect();
        assert_eq!(frames, vec![0, 4, 8]);
    }

    #[test]
    fn test_static_scenes_trace_no_lights() {
        for kind in [SceneKind::Starter, SceneKind::Text] {
            let lines = trace(kind, 60.0, 3, 1);
            assert_eq!(lines.len(), 3);
            assert!(lines.iter().all(|l| l["lights"].as_array().unwrap().is_empty()));
        }
    }

    #[test]
    fn test_runs_are_reproducible() {
        let a = trace(SceneKind::HauntedHouse, 60.0, 120, 7);
        let b = trace(SceneKind::HauntedHouse, 60.0, 120, 7);
        assert_eq!(a, b);
    }
}
