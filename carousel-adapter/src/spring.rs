//! Damped harmonic oscillator used for carousel motion.
//!
//! `F = -stiffness * (position - target) - damping * velocity`, integrated with semi-implicit
//! Euler in fixed sub-steps. Time is passed in milliseconds, matching the rest of the adapter.

/// Largest integration step; longer frames are subdivided.
const MAX_STEP_MS: u64 = 4;

/// Longest frame a single `advance` simulates. Longer gaps (a suspended frame loop) are
/// treated as one frame of this length.
pub const MAX_FRAME_MS: u64 = 64;

const DEFAULT_REST_DELTA: f32 = 0.01;
const DEFAULT_REST_SPEED: f32 = 0.01;

/// Minimum stiffness; a zero-stiffness spring never converges.
const MIN_STIFFNESS: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    rest_delta: f32,
    rest_speed: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(from: f32, to: f32, stiffness: f32, damping: f32) -> Self {
        let mut spring = Self {
            position: from,
            velocity: 0.0,
            target: to,
            stiffness: stiffness.max(MIN_STIFFNESS),
            damping: damping.max(0.0),
            rest_delta: DEFAULT_REST_DELTA,
            rest_speed: DEFAULT_REST_SPEED,
            at_rest: false,
        };
        spring.settle_if_at_rest();
        spring
    }

    /// Starts with an initial velocity (units per second), e.g. the release speed of a drag.
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.at_rest = false;
        self
    }

    pub fn with_rest_thresholds(mut self, rest_delta: f32, rest_speed: f32) -> Self {
        self.rest_delta = rest_delta.max(0.0);
        self.rest_speed = rest_speed.max(0.0);
        self
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Changes the target, keeping position and velocity. Wakes the spring.
    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    fn step(&mut self, dt: f32) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    fn settle_if_at_rest(&mut self) {
        let delta = self.position - self.target;
        if delta * delta <= self.rest_delta * self.rest_delta
            && self.velocity * self.velocity <= self.rest_speed * self.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }

    /// Advances the simulation by `dt_ms` (capped at [`MAX_FRAME_MS`]) and returns the new
    /// position.
    pub fn advance(&mut self, dt_ms: u64) -> f32 {
        if self.at_rest || dt_ms == 0 {
            return self.position;
        }
        let mut remaining_ms = dt_ms.min(MAX_FRAME_MS);
        while remaining_ms > 0 {
            let step_ms = remaining_ms.min(MAX_STEP_MS);
            self.step(step_ms as f32 / 1000.0);
            remaining_ms -= step_ms;
        }
        self.settle_if_at_rest();
        self.position
    }
}
