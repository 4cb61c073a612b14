use crate::clock::{Clock, TimeSource};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator<T: TimeSource = Clock> {
    source: T,
    frame_number: u64,
    last_time: Option<f32>,
}

impl FrameIterator<Clock> {
    /// Frames timed by the wall clock
    pub fn new() -> Self {
        Self::with_source(Clock::new())
    }
}

impl Default for FrameIterator<Clock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> FrameIterator<T> {
    pub fn with_source(source: T) -> Self {
        Self {
            source,
            frame_number: 0,
            last_time: None,
        }
    }

    /// Number of the next frame to be yielded
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Time of the last yielded frame
    pub fn time(&self) -> f32 {
        self.last_time.unwrap_or(0.0)
    }
}

impl<T: TimeSource> Iterator for FrameIterator<T> {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let raw = self.source.elapsed();

        // Time never runs backwards, even if the source does
        let (time, delta) = match self.last_time {
            Some(last) => {
                let time = raw.max(last);
                (time, time - last)
            }
            None => (raw.max(0.0), 0.0),
        };

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_time = Some(time);

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedStep;

    struct Scripted(Vec<f32>);

    impl TimeSource for Scripted {
        fn elapsed(&mut self) -> f32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn first_frame_has_zero_delta() {
        let mut frames = FrameIterator::with_source(FixedStep::starting_at(60.0, 2.0));
        let first = frames.next().unwrap();
        assert_eq!(first.number, 0);
        assert_eq!(first.time, 2.0);
        assert_eq!(first.delta, 0.0);
    }

    #[test]
    fn numbers_and_deltas_follow_the_source() {
        let frames: Vec<FrameInfo> = FrameIterator::with_source(FixedStep::new(10.0))
            .take(3)
            .collect();

        assert_eq!(frames.iter().map(|f| f.number).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!((frames[2].delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn time_is_clamped_when_source_steps_back() {
        let mut frames = FrameIterator::with_source(Scripted(vec![1.0, 0.5, 2.0]));

        assert_eq!(frames.next().unwrap().time, 1.0);
        let back = frames.next().unwrap();
        assert_eq!(back.time, 1.0);
        assert_eq!(back.delta, 0.0);
        assert_eq!(frames.next().unwrap().delta, 1.0);
        assert_eq!(frames.time(), 2.0);
        assert_eq!(frames.frame_number(), 3);
    }
}
