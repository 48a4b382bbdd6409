//! Adapter utilities for the `cylinder-carousel` crate.
//!
//! The `cylinder-carousel` crate is UI-agnostic and focuses on the carousel math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Spring and tween interpolation driven by a single [`cylinder_carousel::Transition`] config
//! - A pointer-driven [`Controller`] that animates card transforms and the drag offset
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod motion;
mod spring;
mod tween;


pub use controller::Controller;
pub use motion::{AnimatedTransform, MotionValue};
pub use spring::{MAX_FRAME_MS, Spring};
pub use tween::Tween;
