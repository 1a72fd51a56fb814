use std::time::{Duration, Instant};

/// Keeps ticks at a fixed interval by sleeping off what is left of each frame.
pub struct Framepacer {
    frame_start: Instant,
    last_frametime: Duration,
}

impl Framepacer {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            last_frametime: Duration::ZERO,
        }
    }

    /// Length of the last finished frame in seconds, including the sleep.
    pub fn frametime(&self) -> f32 {
        self.last_frametime.as_secs_f32()
    }

    pub fn framerate(&self) -> f32 {
        let frametime = self.frametime();
        if frametime > f32::EPSILON {
            1.0 / frametime
        } else {
            f32::INFINITY
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleeps until `limit_frametime` has passed since `begin_frame`.
    /// A zero limit never sleeps.
    pub fn end_frame(&mut self, limit_frametime: Duration) {
        let elapsed = self.frame_start.elapsed();
        if let Some(sleep_time) = limit_frametime.checked_sub(elapsed) {
            if !sleep_time.is_zero() {
                std::thread::sleep(sleep_time);
            }
        }

        self.last_frametime = self.frame_start.elapsed();
    }
}
