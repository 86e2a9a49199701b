//! Sliding-window frame-rate estimator.
//!
//! Each recorded frame drops timestamps that have fallen out of the last
//! second and appends the new one, so the window is always exact. The
//! displayed value only refreshes once every eleven frames to keep the readout
//! from flickering.

#[cfg(test)]
#[path = "fps_test.rs"]
mod fps_test;

use std::collections::VecDeque;

use crate::consts::{FPS_THROTTLE_FRAMES, FPS_WINDOW_MS};

/// Recent frame timestamps and the throttled FPS derived from them.
#[derive(Debug, Clone, Default)]
pub struct FrameRate {
    times: VecDeque<f64>,
    fps: usize,
    throttle: u32,
}

impl FrameRate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame rendered at `timestamp_ms`.
    ///
    /// Timestamps are expected to be non-decreasing. A retained timestamp `t`
    /// is evicted once `t <= timestamp_ms - 1000`.
    pub fn record_frame(&mut self, timestamp_ms: f64) {
        let cutoff = timestamp_ms - FPS_WINDOW_MS;
        while self.times.front().is_some_and(|t| *t <= cutoff) {
            self.times.pop_front();
        }
        self.times.push_back(timestamp_ms);

        self.throttle += 1;
        if self.throttle > FPS_THROTTLE_FRAMES {
            self.fps = self.times.len();
            self.throttle = 0;
        }
    }

    /// Last published frames-per-second value; `0` until the throttle first fires.
    #[must_use]
    pub fn fps(&self) -> usize {
        self.fps
    }

    /// Frames recorded since the value was last published.
    #[must_use]
    pub fn throttle(&self) -> u32 {
        self.throttle
    }

    /// Timestamps currently inside the window, oldest first.
    pub fn window(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.times.iter().copied()
    }
}
