use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::clock::TimeSource;
use crate::frame::{FrameInfo, FrameIterator};
use crate::renderer::SceneRenderer;
use crate::scene::SceneContext;

/// Stops a running `FrameDriver` from outside the loop
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    running: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// Per-frame loop: next time, update the scene, hand it to the renderer
pub struct FrameDriver<T: TimeSource> {
    frames: FrameIterator<T>,
    running: Arc<AtomicBool>,
    frame_limit: Option<u64>,
}

impl<T: TimeSource> FrameDriver<T> {
    pub fn new(source: T) -> Self {
        Self {
            frames: FrameIterator::with_source(source),
            running: Arc::new(AtomicBool::new(true)),
            frame_limit: None,
        }
    }

    /// Stop after `limit` frames
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            running: Arc::clone(&self.running),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stopped, or the frame limit has been reached
    pub fn is_finished(&self) -> bool {
        !self.is_running()
            || self
                .frame_limit
                .is_some_and(|limit| self.frames.frame_number() >= limit)
    }

    /// Frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frames.frame_number()
    }

    /// Run exactly one frame
    pub fn step<R>(&mut self, scene: &mut SceneContext, renderer: &mut R) -> Result<FrameInfo>
    where
        R: SceneRenderer + ?Sized,
    {
        // FrameIterator never ends
        let frame = self
            .frames
            .next()
            .unwrap_or_else(|| FrameInfo::new(self.frames.frame_number(), self.frames.time(), 0.0));

        scene.update(frame.time);
        renderer.render(scene, &frame)?;
        Ok(frame)
    }

    /// Step until stopped or the frame limit is reached; returns the frames rendered
    ///
    /// A renderer error ends the loop and is returned.
    pub fn run<R>(&mut self, scene: &mut SceneContext, renderer: &mut R) -> Result<u64>
    where
        R: SceneRenderer + ?Sized,
    {
        let mut rendered = 0;

        while !self.is_finished() {
            let frame = self.step(scene, renderer)?;
            rendered += 1;
            log::trace!("Frame {} t={:.3} dt={:.4}", frame.number, frame.time, frame.delta);
        }

        log::debug!("Frame driver stopped after {} frames", rendered);
        Ok(rendered)
    }
}
