use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{
    CardSize, Catalog, CarouselOptions, Direction, DragRelease, IndexChange, Item, ItemRange,
    PaginationDot, PathResolver, Transform,
};

/// A headless cylinder carousel.
///
/// This type owns the selected index and nothing else that changes: transforms are recomputed
/// from `(item index - selected index)` on every query. It holds no UI objects; an adapter feeds
/// it clicks and drag releases and renders the transforms it returns.
///
/// For drag tracking and spring-driven animation, see the `cylinder-carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    catalog: Catalog,
    selected_index: usize,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel centered on the middle item (`len / 2`).
    pub fn new(catalog: Catalog, options: CarouselOptions) -> Self {
        let selected_index = catalog.len() / 2;
        cdebug!(len = catalog.len(), selected_index, "Carousel::new");
        Self {
            options,
            catalog,
            selected_index,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options. Transforms pick the new layout up on the next query; `on_change` is
    /// not fired since the selected index is unchanged.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
        ctrace!(
            card_width = self.options.card_width,
            card_gap = self.options.card_gap,
            "Carousel::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.catalog.get(index)
    }

    /// The item under the selected index, or `None` for an empty catalog.
    pub fn active_item(&self) -> Option<&Item> {
        self.catalog.get(self.selected_index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.catalog.is_empty() && index == self.selected_index
    }

    fn last_index(&self) -> usize {
        self.catalog.len().saturating_sub(1)
    }

    fn set_selected_index(&mut self, index: usize) -> IndexChange {
        let change = IndexChange {
            from: self.selected_index,
            to: index,
        };
        if change.changed() {
            self.selected_index = index;
            cdebug!(from = change.from, to = change.to, "Carousel: selected index changed");
            self.notify();
        }
        change
    }

    /// Computes the visual placement of the item at `index`.
    ///
    /// `index` does not have to be inside the catalog: the ramp is linear and unbounded, so items
    /// far from the center keep rotating and sliding further out. Only `scale` and `opacity` have
    /// floors.
    pub fn compute_transform(&self, index: usize) -> Transform {
        let offset = index as i64 - self.selected_index as i64;
        self.transform_at_offset(offset)
    }

    /// The transform of a card `offset` steps away from the active card.
    pub fn transform_at_offset(&self, offset: i64) -> Transform {
        let o = &self.options;
        let signed = offset as f32;
        let distance = offset.unsigned_abs() as f32;
        Transform {
            x: signed * o.card_pitch(),
            rotate_y: signed * o.rotation_step,
            z: -distance * o.depth_step,
            scale: (1.0 - distance * o.scale_step).max(o.min_scale),
            opacity: (1.0 - distance * o.opacity_step).max(o.min_opacity),
        }
    }

    /// Calls `f(index, transform)` for every item in catalog order.
    pub fn for_each_transform(&self, mut f: impl FnMut(usize, Transform)) {
        for index in 0..self.catalog.len() {
            f(index, self.compute_transform(index));
        }
    }

    /// Collects one transform per item into `out` (cleared first).
    pub fn collect_transforms(&self, out: &mut Vec<Transform>) {
        out.clear();
        out.reserve(self.catalog.len());
        self.for_each_transform(|_, t| out.push(t));
    }

    pub fn transforms(&self) -> Vec<Transform> {
        let mut out = Vec::new();
        self.collect_transforms(&mut out);
        out
    }

    /// Hover scale for `index`; only the active card reacts to hover.
    pub fn hover_scale(&self, index: usize) -> Option<f32> {
        if !self.is_active(index) {
            return None;
        }
        Some(self.compute_transform(index).scale * self.options.hover_scale)
    }

    pub fn card_size(&self) -> CardSize {
        self.options.card_size()
    }

    /// Decides which way a released drag should move, without applying it.
    ///
    /// Distance and velocity are checked independently: a fast flick that travels less than the
    /// threshold still navigates, and so does a slow drag past it. The "next" test runs first.
    pub fn drag_outcome(&self, release: DragRelease) -> Option<Direction> {
        let threshold = self.options.drag_threshold();
        let max_velocity = self.options.velocity_threshold;
        if release.displacement < -threshold || release.velocity < -max_velocity {
            Some(Direction::Next)
        } else if release.displacement > threshold || release.velocity > max_velocity {
            Some(Direction::Prev)
        } else {
            None
        }
    }

    /// Applies a drag release.
    ///
    /// Returns the index change; below-threshold gestures leave the index untouched. The caller is
    /// expected to animate the transient drag offset back to rest either way.
    pub fn on_drag_end(&mut self, release: DragRelease) -> IndexChange {
        let outcome = self.drag_outcome(release);
        ctrace!(
            displacement = release.displacement,
            velocity = release.velocity,
            ?outcome,
            "Carousel::on_drag_end"
        );
        match outcome {
            Some(direction) => self.navigate(direction),
            None => IndexChange {
                from: self.selected_index,
                to: self.selected_index,
            },
        }
    }

    /// Whether the prev/next affordance is enabled (no wraparound at the ends).
    pub fn can_navigate(&self, direction: Direction) -> bool {
        match direction {
            Direction::Prev => self.selected_index > 0,
            Direction::Next => self.selected_index < self.last_index(),
        }
    }

    /// Moves the selection by exactly one item; a no-op at either boundary.
    pub fn navigate(&mut self, direction: Direction) -> IndexChange {
        if !self.can_navigate(direction) {
            return IndexChange {
                from: self.selected_index,
                to: self.selected_index,
            };
        }
        let next = match direction {
            Direction::Prev => self.selected_index - 1,
            Direction::Next => self.selected_index + 1,
        };
        self.set_selected_index(next)
    }

    /// Selects an item directly (card click, pagination dot).
    ///
    /// Out-of-range indexes are clamped to the last item.
    pub fn select_item(&mut self, index: usize) -> IndexChange {
        if self.catalog.is_empty() {
            return IndexChange { from: 0, to: 0 };
        }
        let last = self.last_index();
        if index > last {
            cwarn!(index, last, "Carousel::select_item: index clamped");
        }
        self.set_selected_index(index.min(last))
    }

    /// One dot per item, in catalog order.
    pub fn pagination(&self) -> impl Iterator<Item = PaginationDot> + '_ {
        (0..self.catalog.len()).map(move |index| PaginationDot {
            index,
            is_active: index == self.selected_index,
        })
    }

    /// The window of `visible_cards` items centered on the active one, clamped to the catalog.
    ///
    /// Adapters can skip cards outside this window; their transforms are still well defined.
    pub fn visible_range(&self) -> ItemRange {
        let len = self.catalog.len();
        if len == 0 {
            return ItemRange {
                start_index: 0,
                end_index: 0,
            };
        }
        let half = self.options.visible_cards / 2;
        ItemRange {
            start_index: self.selected_index.saturating_sub(half),
            end_index: self
                .selected_index
                .saturating_add(half)
                .saturating_add(1)
                .min(len),
        }
    }

    /// Resolves the media path of the item at `index`.
    pub fn media_path(&self, index: usize, resolver: &PathResolver) -> Option<String> {
        self.catalog
            .get(index)
            .map(|item| resolver.resolve(&item.video_file_name))
    }
}
