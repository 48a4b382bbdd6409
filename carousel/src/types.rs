use alloc::string::String;

/// A single entry in the carousel catalog.
///
/// Items are immutable once the catalog is built. `artist` and `thumbnail_gradient` are optional
/// presentation fields forwarded to the media card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub video_file_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub artist: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumbnail_gradient: Option<String>,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>, video_file_name: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            video_file_name: video_file_name.into(),
            artist: None,
            thumbnail_gradient: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_thumbnail_gradient(mut self, gradient: impl Into<String>) -> Self {
        self.thumbnail_gradient = Some(gradient.into());
        self
    }
}

/// Visual placement of one card on the cylinder.
///
/// All values are derived from the signed offset between the card and the active card; they are
/// recomputed on demand and never stored by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Lateral offset in pixels.
    pub x: f32,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y: f32,
    /// Depth in pixels (zero or negative: cards curve away from the viewer).
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Transform {
    /// The resting transform of the active card.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        rotate_y: 0.0,
        z: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Prev,
    Next,
}

/// Horizontal drag measurements captured at pointer release.
///
/// `displacement` is in pixels and `velocity` in pixels per second; negative values point left
/// (towards the next card).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragRelease {
    pub displacement: f32,
    pub velocity: f32,
}

impl DragRelease {
    pub fn new(displacement: f32, velocity: f32) -> Self {
        Self {
            displacement,
            velocity,
        }
    }
}

/// The index change (if any) caused by an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
}

impl IndexChange {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationDot {
    pub index: usize,
    pub is_active: bool,
}

/// Card dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl ItemRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Easing curves for time-based transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseOut,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
