use cylinder_carousel::{Transform, Transition, TransitionKind};

use crate::{Spring, Tween};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Driver {
    Idle,
    Spring { spring: Spring, last_ms: u64 },
    Tween(Tween),
}

/// A single animated scalar driven by a [`Transition`].
///
/// This is the one interpolation utility every animated carousel value goes through: the
/// transition decides whether the value springs or tweens towards its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionValue {
    value: f32,
    target: f32,
    transition: Transition,
    driver: Driver,
}

impl MotionValue {
    pub fn new(value: f32, transition: Transition) -> Self {
        Self {
            value,
            target: value,
            transition,
            driver: Driver::Idle,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Applies to the next `animate_to`; a running animation keeps its configuration.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.driver, Driver::Idle)
    }

    /// Jumps to `value` immediately, stopping any animation.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.driver = Driver::Idle;
    }

    /// Stops at the current value.
    pub fn stop(&mut self) {
        self.target = self.value;
        self.driver = Driver::Idle;
    }

    /// Starts animating towards `target`.
    ///
    /// Re-targeting a running spring keeps its velocity so motion stays continuous. Calling this
    /// with the current target is a no-op.
    pub fn animate_to(&mut self, target: f32, now_ms: u64) {
        if target == self.target && (self.is_animating() || self.value == target) {
            return;
        }
        self.target = target;
        self.driver = match self.transition.kind {
            TransitionKind::Spring => {
                let velocity = match self.driver {
                    Driver::Spring { spring, .. } => spring.velocity(),
                    _ => 0.0,
                };
                let spring = Spring::new(
                    self.value,
                    target,
                    self.transition.stiffness,
                    self.transition.damping,
                )
                .with_velocity(velocity);
                Driver::Spring {
                    spring,
                    last_ms: now_ms,
                }
            }
            TransitionKind::Tween {
                duration_ms,
                easing,
            } => Driver::Tween(Tween::new(self.value, target, now_ms, duration_ms, easing)),
        };
    }

    /// Advances the animation to `now_ms` and returns the current value.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        match &mut self.driver {
            Driver::Idle => {}
            Driver::Spring { spring, last_ms } => {
                let dt_ms = now_ms.saturating_sub(*last_ms);
                *last_ms = now_ms.max(*last_ms);
                self.value = spring.advance(dt_ms);
                if spring.is_at_rest() {
                    self.value = self.target;
                    self.driver = Driver::Idle;
                }
            }
            Driver::Tween(tween) => {
                self.value = tween.sample(now_ms);
                if tween.is_done(now_ms) {
                    self.value = self.target;
                    self.driver = Driver::Idle;
                }
            }
        }
        self.value
    }
}

/// The five animated channels of one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedTransform {
    pub x: MotionValue,
    pub rotate_y: MotionValue,
    pub z: MotionValue,
    pub scale: MotionValue,
    pub opacity: MotionValue,
}

impl AnimatedTransform {
    /// Starts at rest on `transform`.
    pub fn new(transform: Transform, transition: Transition) -> Self {
        Self {
            x: MotionValue::new(transform.x, transition),
            rotate_y: MotionValue::new(transform.rotate_y, transition),
            z: MotionValue::new(transform.z, transition),
            scale: MotionValue::new(transform.scale, transition),
            opacity: MotionValue::new(transform.opacity, transition),
        }
    }

    fn channels_mut(&mut self) -> [&mut MotionValue; 5] {
        [
            &mut self.x,
            &mut self.rotate_y,
            &mut self.z,
            &mut self.scale,
            &mut self.opacity,
        ]
    }

    pub fn set_transition(&mut self, transition: Transition) {
        for channel in self.channels_mut() {
            channel.set_transition(transition);
        }
    }

    pub fn animate_to(&mut self, target: Transform, now_ms: u64) {
        self.x.animate_to(target.x, now_ms);
        self.rotate_y.animate_to(target.rotate_y, now_ms);
        self.z.animate_to(target.z, now_ms);
        self.scale.animate_to(target.scale, now_ms);
        self.opacity.animate_to(target.opacity, now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) -> Transform {
        for channel in self.channels_mut() {
            channel.tick(now_ms);
        }
        self.current()
    }

    pub fn current(&self) -> Transform {
        Transform {
            x: self.x.value(),
            rotate_y: self.rotate_y.value(),
            z: self.z.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value(),
        }
    }

    pub fn target(&self) -> Transform {
        Transform {
            x: self.x.target(),
            rotate_y: self.rotate_y.target(),
            z: self.z.target(),
            scale: self.scale.target(),
            opacity: self.opacity.target(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating()
            || self.rotate_y.is_animating()
            || self.z.is_animating()
            || self.scale.is_animating()
            || self.opacity.is_animating()
    }
}
