use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::frame::FrameInfo;
use crate::scene::SceneContext;
use crate::window::Viewport;

/// Draws a scene once per frame
pub trait SceneRenderer {
    /// Called when the window or canvas changes size
    fn resize(&mut self, _viewport: &Viewport) {}

    /// Draw the scene as it stands after this frame's update
    fn render(&mut self, scene: &SceneContext, frame: &FrameInfo) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct LightSample<'a> {
    name: &'a str,
    position: [f32; 3],
}

#[derive(Debug, Serialize)]
struct FrameTrace<'a> {
    frame: u64,
    time: f32,
    lights: Vec<LightSample<'a>>,
}

/// Headless renderer that writes animated light positions as JSON lines
pub struct TraceRenderer<W: Write> {
    out: W,
    every: u64,
    written: u64,
}

impl<W: Write> TraceRenderer<W> {
    /// Trace every `every`th frame (0 is treated as 1)
    pub fn new(out: W, every: u64) -> Self {
        Self {
            out,
            every: every.max(1),
            written: 0,
        }
    }

    /// Number of lines written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SceneRenderer for TraceRenderer<W> {
    fn render(&mut self, scene: &SceneContext, frame: &FrameInfo) -> Result<()> {
        if frame.number % self.every != 0 {
            return Ok(());
        }

        let trace = FrameTrace {
            frame: frame.number,
            time: frame.time,
            lights: scene
                .point_light_positions()
                .map(|(name, position)| LightSample {
                    name,
                    position: position.to_array(),
                })
                .collect(),
        };

        serde_json::to_writer(&mut self.out, &trace).context("Failed to encode frame trace")?;
        writeln!(self.out).context("Failed to write frame trace")?;
        self.written += 1;
        Ok(())
    }
}
