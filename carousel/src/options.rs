use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{CardSize, Easing};

/// A callback fired after the selected index changes.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// How a visual value travels to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// Physically-based damped spring using `stiffness` and `damping`.
    Spring,
    /// Fixed-duration interpolation; `stiffness`/`damping` are ignored.
    Tween { duration_ms: u64, easing: Easing },
}

/// Animation configuration shared by every animated value of the carousel.
///
/// Adapters hand this to a single interpolation utility instead of sprinkling literals across
/// call sites.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub kind: TransitionKind,
    pub stiffness: f32,
    pub damping: f32,
}

impl Transition {
    pub const fn spring(stiffness: f32, damping: f32) -> Self {
        Self {
            kind: TransitionKind::Spring,
            stiffness,
            damping,
        }
    }

    pub const fn tween(duration_ms: u64, easing: Easing) -> Self {
        Self {
            kind: TransitionKind::Tween {
                duration_ms,
                easing,
            },
            stiffness: 0.0,
            damping: 0.0,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::spring(300.0, 30.0)
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Every layout constant of the cylinder lives here. The defaults reproduce the stock look: 280px
/// cards spaced 40px apart, 25° of rotation and 60px of depth per step away from the center.
#[derive(Clone)]
pub struct CarouselOptions {
    pub card_width: f32,
    pub card_gap: f32,
    /// Card height as a multiple of `card_width`.
    pub card_aspect: f32,

    /// Degrees of rotation per index step.
    pub rotation_step: f32,
    /// Depth (pixels) pushed back per index step.
    pub depth_step: f32,
    pub scale_step: f32,
    pub min_scale: f32,
    pub opacity_step: f32,
    pub min_opacity: f32,
    /// Extra scale applied to the hovered active card.
    pub hover_scale: f32,

    /// Fraction of `card_width` a drag must travel to commit to a navigation.
    pub drag_threshold_ratio: f32,
    /// Release velocity (px/s) that commits to a navigation regardless of distance.
    pub velocity_threshold: f32,
    /// How far the track follows the pointer while dragging (0 = rigid, 1 = free).
    pub drag_elastic: f32,

    /// Number of cards an adapter should keep rendered around the active one.
    pub visible_cards: usize,

    pub transition: Transition,

    /// Optional callback fired after every selected-index change.
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            card_width: 280.0,
            card_gap: 40.0,
            card_aspect: 16.0 / 9.0,
            rotation_step: 25.0,
            depth_step: 60.0,
            scale_step: 0.12,
            min_scale: 0.65,
            opacity_step: 0.25,
            min_opacity: 0.3,
            hover_scale: 1.02,
            drag_threshold_ratio: 1.0 / 3.0,
            velocity_threshold: 500.0,
            drag_elastic: 0.1,
            visible_cards: 5,
            transition: Transition::default(),
            on_change: None,
        }
    }

    pub fn with_card_width(mut self, card_width: f32) -> Self {
        self.card_width = card_width;
        self
    }

    pub fn with_card_gap(mut self, card_gap: f32) -> Self {
        self.card_gap = card_gap;
        self
    }

    pub fn with_card_aspect(mut self, card_aspect: f32) -> Self {
        self.card_aspect = card_aspect;
        self
    }

    pub fn with_rotation_step(mut self, degrees: f32) -> Self {
        self.rotation_step = degrees;
        self
    }

    pub fn with_depth_step(mut self, depth_step: f32) -> Self {
        self.depth_step = depth_step;
        self
    }

    /// Sets the per-step scale falloff and the floor it never drops below.
    pub fn with_scale(mut self, scale_step: f32, min_scale: f32) -> Self {
        self.scale_step = scale_step;
        self.min_scale = min_scale;
        self
    }

    /// Sets the per-step opacity falloff and the floor it never drops below.
    pub fn with_opacity(mut self, opacity_step: f32, min_opacity: f32) -> Self {
        self.opacity_step = opacity_step;
        self.min_opacity = min_opacity;
        self
    }

    pub fn with_hover_scale(mut self, hover_scale: f32) -> Self {
        self.hover_scale = hover_scale;
        self
    }

    pub fn with_drag_threshold_ratio(mut self, ratio: f32) -> Self {
        self.drag_threshold_ratio = ratio;
        self
    }

    pub fn with_velocity_threshold(mut self, px_per_sec: f32) -> Self {
        self.velocity_threshold = px_per_sec;
        self
    }

    pub fn with_drag_elastic(mut self, drag_elastic: f32) -> Self {
        self.drag_elastic = drag_elastic.clamp(0.0, 1.0);
        self
    }

    pub fn with_visible_cards(mut self, visible_cards: usize) -> Self {
        self.visible_cards = visible_cards;
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Minimum drag distance (pixels) that commits to a navigation.
    pub fn drag_threshold(&self) -> f32 {
        self.card_width * self.drag_threshold_ratio
    }

    /// Distance between the centers of two neighboring cards.
    pub fn card_pitch(&self) -> f32 {
        self.card_width + self.card_gap
    }

    pub fn card_size(&self) -> CardSize {
        CardSize {
            width: self.card_width,
            height: self.card_width * self.card_aspect,
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("card_width", &self.card_width)
            .field("card_gap", &self.card_gap)
            .field("card_aspect", &self.card_aspect)
            .field("rotation_step", &self.rotation_step)
            .field("depth_step", &self.depth_step)
            .field("scale_step", &self.scale_step)
            .field("min_scale", &self.min_scale)
            .field("opacity_step", &self.opacity_step)
            .field("min_opacity", &self.min_opacity)
            .field("hover_scale", &self.hover_scale)
            .field("drag_threshold_ratio", &self.drag_threshold_ratio)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("drag_elastic", &self.drag_elastic)
            .field("visible_cards", &self.visible_cards)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}
