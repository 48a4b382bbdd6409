use alloc::collections::VecDeque;

use crate::DragRelease;

/// How much pointer history feeds the release velocity estimate.
pub const DEFAULT_VELOCITY_WINDOW_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f32,
    at_ms: u64,
}

/// Tracks one horizontal drag gesture.
///
/// The tracker only exists to turn raw pointer positions into a [`DragRelease`]: it keeps the
/// pointer-down origin and a short history of samples for the velocity estimate, and forgets
/// everything on release.
#[derive(Clone, Debug)]
pub struct DragTracker {
    origin: Option<Sample>,
    history: VecDeque<Sample>,
    window_ms: u64,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::with_velocity_window(DEFAULT_VELOCITY_WINDOW_MS)
    }

    pub fn with_velocity_window(window_ms: u64) -> Self {
        Self {
            origin: None,
            history: VecDeque::new(),
            window_ms: window_ms.max(1),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Starts a gesture at pointer position `x`. Any gesture in progress is dropped.
    pub fn begin(&mut self, x: f32, now_ms: u64) {
        let sample = Sample { x, at_ms: now_ms };
        self.origin = Some(sample);
        self.history.clear();
        self.history.push_back(sample);
    }

    /// Records a pointer move and returns the displacement from the origin.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, x: f32, now_ms: u64) -> Option<f32> {
        let origin = self.origin?;
        let at_ms = self
            .history
            .back()
            .map_or(now_ms, |last| now_ms.max(last.at_ms));
        self.history.push_back(Sample { x, at_ms });
        self.prune(at_ms);
        Some(x - origin.x)
    }

    fn prune(&mut self, now_ms: u64) {
        // Keep at most one sample older than the window; `velocity` falls back to it when the
        // window holds a single sample.
        while self.history.len() > 2 {
            let Some(second) = self.history.get(1) else {
                break;
            };
            if now_ms.saturating_sub(second.at_ms) > self.window_ms {
                self.history.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn displacement(&self) -> f32 {
        match (self.origin, self.history.back()) {
            (Some(origin), Some(last)) => last.x - origin.x,
            _ => 0.0,
        }
    }

    /// Estimated velocity in px/s as of `now_ms`.
    ///
    /// Only samples inside `[now_ms - window, now_ms]` count, so a press-and-hold before a flick
    /// does not dilute it. When the window holds a single sample the one before it is used. A
    /// pointer that has not moved for a whole window reads as stationary.
    pub fn velocity(&self, now_ms: u64) -> f32 {
        let Some(last) = self.history.back() else {
            return 0.0;
        };
        if now_ms.saturating_sub(last.at_ms) >= self.window_ms {
            return 0.0;
        }
        let window_start = now_ms.saturating_sub(self.window_ms);
        let newest = self.history.len() - 1;
        let oldest_in_window = self
            .history
            .iter()
            .position(|s| s.at_ms >= window_start)
            .unwrap_or(newest);
        let baseline = if oldest_in_window == newest {
            newest.saturating_sub(1)
        } else {
            oldest_in_window
        };
        let Some(first) = self.history.get(baseline) else {
            return 0.0;
        };
        let dt_ms = last.at_ms.saturating_sub(first.at_ms);
        if dt_ms == 0 {
            return 0.0;
        }
        (last.x - first.x) * 1000.0 / dt_ms as f32
    }

    /// Ends the gesture and returns its final measurements.
    pub fn release(&mut self, now_ms: u64) -> Option<DragRelease> {
        self.origin?;
        let release = DragRelease {
            displacement: self.displacement(),
            velocity: self.velocity(now_ms),
        };
        self.cancel();
        Some(release)
    }

    /// Drops the gesture without producing a release.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.history.clear();
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
