use std::thread;
use std::time::{Duration, Instant};

/// Paces the loop to a target frame rate by sleeping off whatever is left of
/// each frame. A rate of 0 never sleeps.
#[derive(Debug)]
pub struct FrameClock {
    frame: Option<Duration>,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: (fps > 0).then(|| Duration::from_secs(1) / fps),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Block until the current frame's time is used up.
    pub fn tick(&mut self) {
        if let Some(frame) = self.frame {
            let elapsed = self.last.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        self.last = Instant::now();
    }
}
