//! A headless 3D "cylinder" carousel engine.
//!
//! For adapter-level utilities (springs, tweens, a pointer-driven controller), see the
//! `cylinder-carousel-adapter` crate.
//!
//! The crate covers the logic behind a carousel of video cards arranged on a cylinder:
//! per-item transforms derived from the offset to the active card, drag-release interpretation,
//! clamped navigation, per-card playback state and a fault boundary for renderers.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - pointer positions and timestamps
//! - click/tap events on cards, navigation buttons and pagination dots
//! - a media handle per card (see [`MediaHandle`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod boundary;
mod card;
mod carousel;
mod catalog;
mod drag;
mod error;
mod options;
mod path;
mod types;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use boundary::{
    CapturedFault, FALLBACK_HINT, FALLBACK_TITLE, Fallback, FaultBoundary, Render, Rendered,
};
pub use card::{CardView, DEFAULT_THUMBNAIL_GRADIENT, MediaCard, MediaHandle};
pub use carousel::Carousel;
pub use catalog::Catalog;
pub use drag::{DEFAULT_VELOCITY_WINDOW_MS, DragTracker};
pub use error::{CatalogError, RenderFault};
pub use options::{CarouselOptions, OnChangeCallback, Transition, TransitionKind};
pub use path::{BASE_PATH_ENV, PathResolver};
pub use types::{
    CardSize, Direction, DragRelease, Easing, IndexChange, Item, ItemRange, PaginationDot,
    Transform,
};
