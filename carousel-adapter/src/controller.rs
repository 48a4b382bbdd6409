use alloc::vec::Vec;

use cylinder_carousel::{
    Carousel, CarouselOptions, Catalog, Direction, DragTracker, IndexChange, MediaCard,
    MediaHandle, Transform,
};

use crate::{AnimatedTransform, MotionValue};

/// A framework-neutral controller that wraps a [`Carousel`] and animates it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer_down` / `pointer_move` / `pointer_up` for horizontal drags
/// - `click_item` / `navigate` for clicks on cards, dots and arrow buttons
/// - `tick(now_ms)` each frame, then `for_each_item` to read the animated transforms
///
/// While dragging, the whole track follows the pointer (scaled by `drag_elastic`). On release the
/// carousel decides whether to move and the track springs back to rest either way.
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    drag: DragTracker,
    drag_origin: f32,
    drag_offset: MotionValue,
    cards: Vec<AnimatedTransform>,
}

impl Controller {
    pub fn new(catalog: Catalog, options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(catalog, options))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        let transition = carousel.options().transition;
        let mut cards = Vec::with_capacity(carousel.len());
        carousel.for_each_transform(|_, t| cards.push(AnimatedTransform::new(t, transition)));
        Self {
            drag: DragTracker::new(),
            drag_origin: 0.0,
            drag_offset: MotionValue::new(0.0, transition),
            cards,
            carousel,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Mutable access to the engine. Index changes made here are picked up on the next `tick`.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn selected_index(&self) -> usize {
        self.carousel.selected_index()
    }

    /// Re-reads the transition from the carousel options for every animated value.
    pub fn sync_transition(&mut self) {
        let transition = self.carousel.options().transition;
        self.drag_offset.set_transition(transition);
        for card in &mut self.cards {
            card.set_transition(transition);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current horizontal offset of the whole track (pixels).
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset.value()
    }

    pub fn is_animating(&self) -> bool {
        self.drag_offset.is_animating() || self.cards.iter().any(|c| c.is_animating())
    }

    /// Starts a drag. A track still springing back is caught where it is.
    pub fn pointer_down(&mut self, x: f32, now_ms: u64) {
        self.drag_offset.tick(now_ms);
        self.drag_offset.stop();
        self.drag_origin = self.drag_offset.value();
        self.drag.begin(x, now_ms);
    }

    pub fn pointer_move(&mut self, x: f32, now_ms: u64) {
        let Some(displacement) = self.drag.update(x, now_ms) else {
            return;
        };
        let elastic = self.carousel.options().drag_elastic;
        self.drag_offset.set(self.drag_origin + displacement * elastic);
    }

    /// Ends a drag, applies it to the carousel and springs the track back to rest.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<IndexChange> {
        let release = self.drag.release(now_ms)?;
        let change = self.carousel.on_drag_end(release);
        atrace!(
            displacement = release.displacement,
            velocity = release.velocity,
            to = change.to,
            "Controller::pointer_up"
        );
        self.drag_offset.animate_to(0.0, now_ms);
        self.retarget(now_ms);
        Some(change)
    }

    /// Abandons a drag without navigating (e.g. pointer capture lost).
    pub fn pointer_cancel(&mut self, now_ms: u64) {
        if self.drag.is_dragging() {
            adebug!(offset = self.drag_offset.value(), "Controller::pointer_cancel");
        }
        self.drag.cancel();
        self.drag_offset.animate_to(0.0, now_ms);
    }

    pub fn click_item(&mut self, index: usize, now_ms: u64) -> IndexChange {
        let change = self.carousel.select_item(index);
        self.retarget(now_ms);
        change
    }

    pub fn navigate(&mut self, direction: Direction, now_ms: u64) -> IndexChange {
        let change = self.carousel.navigate(direction);
        self.retarget(now_ms);
        change
    }

    fn retarget(&mut self, now_ms: u64) {
        let carousel = &self.carousel;
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.animate_to(carousel.compute_transform(index), now_ms);
        }
    }

    /// Advances every animation to `now_ms`.
    ///
    /// Returns `true` while something is still moving, so adapters can stop requesting frames.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.retarget(now_ms);
        if !self.drag.is_dragging() {
            self.drag_offset.tick(now_ms);
        }
        for card in &mut self.cards {
            card.tick(now_ms);
        }
        self.is_animating()
    }

    /// Calls `f(index, transform, is_active)` for every card, using the animated transforms.
    ///
    /// The drag offset is not folded in; apply [`Self::drag_offset`] to the track container.
    pub fn for_each_item(&self, mut f: impl FnMut(usize, Transform, bool)) {
        for (index, card) in self.cards.iter().enumerate() {
            f(index, card.current(), self.carousel.is_active(index));
        }
    }

    /// Animated transform of one card.
    pub fn item_transform(&self, index: usize) -> Option<Transform> {
        self.cards.get(index).map(AnimatedTransform::current)
    }

    /// Pushes the current active flags down to the media cards (one per catalog item).
    ///
    /// Cards losing the active flag stop their playback.
    pub fn sync_cards<H: MediaHandle>(&self, cards: &mut [MediaCard<H>]) {
        for card in cards.iter_mut() {
            card.set_active(self.carousel.is_active(card.index()));
        }
    }
}
