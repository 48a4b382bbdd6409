use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }
}

fn catalog(len: usize) -> Catalog {
    (0..len)
        .map(|i| Item::new(i as u64 + 1, format!("Exhibit {i}"), format!("exhibit-{i}.mp4")))
        .collect()
}

fn carousel(len: usize) -> Carousel {
    Carousel::new(catalog(len), CarouselOptions::default())
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[derive(Debug, Default)]
struct FakeMedia {
    playing: bool,
    plays: usize,
    pauses: usize,
}

impl MediaHandle for FakeMedia {
    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }
}

fn card(media: Option<FakeMedia>) -> MediaCard<FakeMedia> {
    let item = Item::new(7, "Exhibit", "exhibit.mp4").with_artist("Class of 2026");
    let source = media.as_ref().map(|_| PathResolver::default().resolve("exhibit.mp4"));
    MediaCard::new(0, &item, source, media)
}

#[test]
fn starts_on_the_middle_item() {
    assert_eq!(carousel(7).selected_index(), 3);
    assert_eq!(carousel(4).selected_index(), 2);
    assert_eq!(carousel(1).selected_index(), 0);

    let empty = carousel(0);
    assert_eq!(empty.selected_index(), 0);
    assert!(empty.active_item().is_none());
    assert!(!empty.is_active(0));
}

#[test]
fn active_card_rests_at_identity() {
    let c = carousel(5);
    assert_eq!(c.compute_transform(2), Transform::IDENTITY);
}

#[test]
fn neighbor_transform_uses_layout_constants() {
    let c = carousel(9);
    assert_eq!(c.selected_index(), 4);

    let right = c.compute_transform(5);
    assert_close(right.x, 320.0);
    assert_close(right.rotate_y, 25.0);
    assert_close(right.z, -60.0);
    assert_close(right.scale, 0.88);
    assert_close(right.opacity, 0.75);

    let far_left = c.compute_transform(1);
    assert_close(far_left.x, -960.0);
    assert_close(far_left.rotate_y, -75.0);
    assert_close(far_left.z, -180.0);
    assert_close(far_left.scale, 0.65);
    assert_close(far_left.opacity, 0.3);
}

#[test]
fn transforms_are_symmetric_around_the_active_card() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..500 {
        let len = rng.gen_range_usize(1, 40);
        let mut c = carousel(len);
        c.select_item(rng.gen_range_usize(0, len));
        let center = c.selected_index();
        let reach = center.min(len - 1 - center);

        for k in 0..=reach {
            let left = c.compute_transform(center - k);
            let right = c.compute_transform(center + k);
            assert_eq!(left.rotate_y.abs(), right.rotate_y.abs());
            assert_eq!(left.z, right.z);
            assert_eq!(left.scale, right.scale);
            assert_eq!(left.opacity, right.opacity);
            assert_eq!(left.x, -right.x);
            assert_eq!(left.rotate_y, -right.rotate_y);
        }
    }
}

#[test]
fn scale_and_opacity_never_drop_below_their_floors() {
    let c = carousel(3);
    for offset in -1_000i64..=1_000 {
        let t = c.transform_at_offset(offset);
        assert!(t.scale >= 0.65, "offset={offset} scale={}", t.scale);
        assert!(t.opacity >= 0.3, "offset={offset} opacity={}", t.opacity);
    }
    let far = c.transform_at_offset(50);
    assert_eq!(far.scale, 0.65);
    assert_eq!(far.opacity, 0.3);
    // Rotation and lateral offset keep growing.
    assert_close(far.rotate_y, 1250.0);
    assert_close(far.x, 16_000.0);
}

#[test]
fn collect_transforms_yields_one_per_item() {
    let c = carousel(6);
    let transforms = c.transforms();
    assert_eq!(transforms.len(), 6);
    for (i, t) in transforms.iter().enumerate() {
        assert_eq!(*t, c.compute_transform(i));
    }

    let mut out = Vec::from([Transform::IDENTITY; 10]);
    c.collect_transforms(&mut out);
    assert_eq!(out.len(), 6);
}

#[test]
fn navigate_clamps_without_wraparound() {
    let mut c = carousel(5);
    c.select_item(0);
    assert!(!c.can_navigate(Direction::Prev));
    let change = c.navigate(Direction::Prev);
    assert!(!change.changed());
    assert_eq!(c.selected_index(), 0);

    c.select_item(4);
    assert!(!c.can_navigate(Direction::Next));
    c.navigate(Direction::Next);
    assert_eq!(c.selected_index(), 4);

    let change = c.navigate(Direction::Prev);
    assert_eq!(change, IndexChange { from: 4, to: 3 });
    assert!(c.can_navigate(Direction::Prev));
    assert!(c.can_navigate(Direction::Next));
}

#[test]
fn navigation_is_inert_on_an_empty_catalog() {
    let mut c = carousel(0);
    assert!(!c.can_navigate(Direction::Prev));
    assert!(!c.can_navigate(Direction::Next));
    assert!(!c.navigate(Direction::Next).changed());
    assert!(!c.select_item(3).changed());
    assert!(!c.on_drag_end(DragRelease::new(-500.0, -900.0)).changed());
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn fast_long_drag_advances_exactly_one() {
    let mut c = carousel(5);
    let change = c.on_drag_end(DragRelease::new(-100.0, -600.0));
    assert_eq!(change, IndexChange { from: 2, to: 3 });
}

#[test]
fn short_slow_drag_snaps_back() {
    let mut c = carousel(5);
    let change = c.on_drag_end(DragRelease::new(50.0, 0.0));
    assert!(!change.changed());
    assert_eq!(c.selected_index(), 2);
}

#[test]
fn distance_and_velocity_trigger_independently() {
    let c = carousel(5);
    assert_eq!(
        c.drag_outcome(DragRelease::new(-10.0, -600.0)),
        Some(Direction::Next)
    );
    assert_eq!(
        c.drag_outcome(DragRelease::new(-100.0, 0.0)),
        Some(Direction::Next)
    );
    assert_eq!(
        c.drag_outcome(DragRelease::new(10.0, 600.0)),
        Some(Direction::Prev)
    );
    assert_eq!(
        c.drag_outcome(DragRelease::new(100.0, 0.0)),
        Some(Direction::Prev)
    );
    assert_eq!(c.drag_outcome(DragRelease::new(0.0, 500.0)), None);
    assert_eq!(c.drag_outcome(DragRelease::new(0.0, -500.0)), None);
}

#[test]
fn next_wins_when_distance_and_velocity_disagree() {
    let c = carousel(5);
    // Dragged left past the threshold but flung right on release.
    assert_eq!(
        c.drag_outcome(DragRelease::new(-120.0, 800.0)),
        Some(Direction::Next)
    );
}

#[test]
fn drag_threshold_is_strict() {
    let c = carousel(5);
    let threshold = c.options().drag_threshold();
    assert_close(threshold, 280.0 / 3.0);
    assert_eq!(c.drag_outcome(DragRelease::new(-threshold, 0.0)), None);
    assert_eq!(c.drag_outcome(DragRelease::new(threshold, 0.0)), None);
}

#[test]
fn drag_past_the_last_item_is_clamped() {
    let mut c = carousel(3);
    c.select_item(2);
    assert!(!c.on_drag_end(DragRelease::new(-400.0, -2_000.0)).changed());
    c.select_item(0);
    assert!(!c.on_drag_end(DragRelease::new(400.0, 2_000.0)).changed());
}

#[test]
fn select_item_clamps_out_of_range_indexes() {
    let mut c = carousel(4);
    assert_eq!(c.select_item(1), IndexChange { from: 2, to: 1 });
    assert_eq!(c.select_item(99), IndexChange { from: 1, to: 3 });
    assert_eq!(c.active_item().map(|item| item.id), Some(4));
}

#[test]
fn on_change_fires_once_per_index_change() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let options = CarouselOptions::default().with_on_change(Some(move |_: &Carousel| {
        seen.fetch_add(1, Ordering::Relaxed);
    }));
    let mut c = Carousel::new(catalog(5), options);

    c.navigate(Direction::Next);
    c.select_item(3); // unchanged
    c.on_drag_end(DragRelease::new(0.0, 0.0));
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    c.batch_update(|c| {
        c.navigate(Direction::Prev);
        c.navigate(Direction::Prev);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(c.selected_index(), 1);
}

#[test]
fn option_changes_do_not_fire_on_change() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let options = CarouselOptions::default().with_on_change(Some(move |_: &Carousel| {
        seen.fetch_add(1, Ordering::Relaxed);
    }));
    let mut c = Carousel::new(catalog(5), options);

    c.update_options(|o| o.card_gap = 10.0);
    assert_eq!(calls.load(Ordering::Relaxed), 0);
    assert_close(c.compute_transform(3).x, 290.0);

    c.select_item(4);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn pagination_marks_only_the_active_dot() {
    let mut c = carousel(4);
    c.select_item(1);
    let dots: Vec<PaginationDot> = c.pagination().collect();
    assert_eq!(dots.len(), 4);
    assert_eq!(dots.iter().filter(|d| d.is_active).count(), 1);
    assert!(dots[1].is_active);
}

#[test]
fn visible_range_is_centered_and_clamped() {
    let mut c = carousel(9);
    assert_eq!(
        c.visible_range(),
        ItemRange {
            start_index: 2,
            end_index: 7
        }
    );

    c.select_item(0);
    let r = c.visible_range();
    assert_eq!((r.start_index, r.end_index), (0, 3));
    assert!(r.contains(2) && !r.contains(3));

    c.select_item(8);
    let r = c.visible_range();
    assert_eq!((r.start_index, r.end_index), (6, 9));
    assert_eq!(r.len(), 3);

    assert!(carousel(0).visible_range().is_empty());
}

#[test]
fn only_the_active_card_reacts_to_hover() {
    let c = carousel(3);
    assert_close(c.hover_scale(1).unwrap_or_default(), 1.02);
    assert_eq!(c.hover_scale(0), None);
}

#[test]
fn card_size_follows_portrait_aspect() {
    let size = carousel(3).card_size();
    assert_close(size.width, 280.0);
    assert_close(size.height, 280.0 * 16.0 / 9.0);
}

#[test]
fn options_reshape_the_cylinder() {
    let mut c = carousel(3);
    c.update_options(|o| {
        o.card_width = 200.0;
        o.card_gap = 20.0;
        o.rotation_step = 30.0;
    });
    let t = c.compute_transform(2);
    assert_close(t.x, 220.0);
    assert_close(t.rotate_y, 30.0);
    assert_close(c.options().drag_threshold(), 200.0 / 3.0);
}

#[test]
fn path_resolver_prepends_base_and_videos_dir() {
    assert_eq!(PathResolver::default().resolve("a.mp4"), "/videos/a.mp4");
    let resolver = PathResolver::new("/pongal/");
    assert_eq!(resolver.resolve("kolam.mp4"), "/pongal/videos/kolam.mp4");
    assert_eq!(resolver.base_path(), "/pongal/");

    let c = carousel(2);
    assert_eq!(
        c.media_path(1, &resolver).as_deref(),
        Some("/pongal/videos/exhibit-1.mp4")
    );
    assert_eq!(c.media_path(5, &resolver), None);
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let items = [
        Item::new(1, "a", "a.mp4"),
        Item::new(2, "b", "b.mp4"),
        Item::new(1, "c", "c.mp4"),
    ];
    assert!(matches!(
        Catalog::try_new(items),
        Err(CatalogError::DuplicateId(1))
    ));

    let ok = Catalog::try_new([Item::new(1, "a", "a.mp4"), Item::new(2, "b", "b.mp4")]);
    let ok = ok.unwrap_or_else(|e| panic!("unexpected error: {e}"));
    assert_eq!(ok.position(2), Some(1));
    assert_eq!((&ok).into_iter().count(), 2);
}

#[cfg(feature = "json")]
#[test]
fn catalog_loads_from_json() {
    let json = r#"[
        { "id": 1, "title": "Kolam", "videoFileName": "kolam.mp4" },
        { "id": 2, "title": "Jallikattu", "videoFileName": "bull.mp4", "artist": "CS 3rd year" }
    ]"#;
    let catalog = Catalog::from_json(json).unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.items()[1].video_file_name, "bull.mp4");
    assert_eq!(catalog.items()[1].artist.as_deref(), Some("CS 3rd year"));
    assert!(catalog.items()[0].thumbnail_gradient.is_none());

    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn deactivating_a_playing_card_stops_playback() {
    let mut card = card(Some(FakeMedia::default()));
    card.set_active(true);
    assert!(card.toggle_play());
    assert!(card.is_playing());
    assert!(card.media().is_some_and(|m| m.playing));

    card.set_active(false);
    assert!(!card.is_playing());
    let media = card.media().unwrap_or_else(|| panic!("media handle missing"));
    assert!(!media.playing);
    assert_eq!(media.pauses, 1);
}

#[test]
fn inactive_card_ignores_toggle() {
    let mut card = card(Some(FakeMedia::default()));
    assert!(!card.toggle_play());
    assert!(!card.is_playing());
    assert_eq!(card.media().map(|m| m.plays), Some(0));
}

#[test]
fn toggle_play_alternates_play_and_pause() {
    let mut card = card(Some(FakeMedia::default()));
    card.set_active(true);
    card.toggle_play();
    card.toggle_play();
    assert!(!card.is_playing());
    let media = card.media().unwrap_or_else(|| panic!("media handle missing"));
    assert_eq!((media.plays, media.pauses), (1, 1));
}

#[test]
fn reactivation_does_not_resume_playback() {
    let mut card = card(Some(FakeMedia::default()));
    card.set_active(true);
    card.toggle_play();
    card.set_active(false);
    card.set_active(true);
    assert!(!card.is_playing());
    assert_eq!(card.media().map(|m| m.plays), Some(1));
}

#[test]
fn card_without_media_swallows_toggle() {
    let mut card = card(None);
    card.set_active(true);
    assert!(card.toggle_play());
    assert!(!card.is_playing());
    assert!(!card.view().has_media);
}

#[test]
fn card_view_reflects_activity_and_playback() {
    let mut card = card(Some(FakeMedia::default()));
    let idle = card.view();
    assert!(!idle.play_indicator_visible);
    assert_eq!(idle.audio_indicator_opacity, 0.5);
    assert_eq!(idle.glow_opacity, 0.0);
    assert_eq!(idle.background, DEFAULT_THUMBNAIL_GRADIENT);
    assert_eq!(idle.artist, Some("Class of 2026"));

    card.set_active(true);
    assert!(card.view().play_indicator_visible);
    card.toggle_play();
    let playing = card.view();
    assert!(!playing.play_indicator_visible);
    assert_eq!(playing.audio_indicator_opacity, 1.0);
    assert_eq!(playing.glow_opacity, 1.0);
    assert_eq!(card.source(), Some("/videos/exhibit.mp4"));
}

#[test]
fn drag_tracker_measures_displacement_and_velocity() {
    let mut drag = DragTracker::new();
    drag.begin(0.0, 0);
    assert!(drag.is_dragging());
    assert_eq!(drag.update(-50.0, 50), Some(-50.0));
    assert_eq!(drag.update(-100.0, 100), Some(-100.0));

    let release = drag.release(100);
    assert_eq!(release, Some(DragRelease::new(-100.0, -1_000.0)));
    assert!(!drag.is_dragging());
    assert_eq!(drag.release(120), None);
}

#[test]
fn drag_tracker_only_uses_recent_history_for_velocity() {
    let mut drag = DragTracker::new();
    drag.begin(0.0, 0);
    drag.update(-300.0, 20); // fast start
    drag.update(-310.0, 200);
    drag.update(-320.0, 300);
    // Only the last window feeds the estimate: (-320 - -310) / 100ms.
    assert_close(drag.velocity(300), -100.0);
    assert_close(drag.displacement(), -320.0);
}

#[test]
fn paused_pointer_releases_with_zero_velocity() {
    let mut drag = DragTracker::new();
    drag.begin(10.0, 0);
    drag.update(-110.0, 40);
    let release = drag
        .release(400)
        .unwrap_or_else(|| panic!("gesture should be active"));
    assert_eq!(release.velocity, 0.0);
    assert_close(release.displacement, -120.0);

    let mut c = carousel(5);
    assert_eq!(c.on_drag_end(release), IndexChange { from: 2, to: 3 });
}

#[test]
fn press_and_hold_does_not_dilute_a_later_flick() {
    let mut drag = DragTracker::new();
    drag.begin(0.0, 0);
    drag.update(-20.0, 1_000);
    drag.update(-50.0, 1_016);
    drag.update(-80.0, 1_032);
    let release = drag
        .release(1_032)
        .unwrap_or_else(|| panic!("gesture should be active"));
    // 60px over the last 32ms; the held origin is outside the window.
    assert_close(release.velocity, -1_875.0);
    assert_close(release.displacement, -80.0);

    let mut c = carousel(5);
    assert_eq!(c.on_drag_end(release), IndexChange { from: 2, to: 3 });
}

#[test]
fn lone_sample_after_a_hold_measures_against_the_previous_one() {
    let mut drag = DragTracker::new();
    drag.begin(0.0, 0);
    drag.update(-100.0, 1_000);
    assert_close(drag.velocity(1_000), -100.0);
    drag.update(-160.0, 1_020);
    assert_close(drag.velocity(1_020), -3_000.0);
}

#[test]
fn drag_tracker_ignores_moves_without_a_gesture() {
    let mut drag = DragTracker::new();
    assert_eq!(drag.update(10.0, 5), None);
    assert_eq!(drag.displacement(), 0.0);
    assert_eq!(drag.velocity(5), 0.0);

    drag.begin(0.0, 0);
    drag.cancel();
    assert_eq!(drag.release(10), None);
}

#[cfg(feature = "std")]
#[test]
fn boundary_passes_through_healthy_children() {
    let mut boundary = FaultBoundary::new(|| Ok::<_, RenderFault>(String::from("carousel")));
    assert_eq!(boundary.render(), Rendered::Content(String::from("carousel")));
    assert!(!boundary.is_faulted());
}

#[cfg(feature = "std")]
#[test]
fn boundary_replaces_faulting_children_with_fallback() {
    let mut boundary = FaultBoundary::new(|| -> Result<String, RenderFault> {
        Err(RenderFault::new("TypeError: exhibits is undefined"))
    });
    let fallback = match boundary.render() {
        Rendered::Fallback(fallback) => fallback,
        other => panic!("expected fallback, got {other:?}"),
    };
    assert_eq!(fallback.title, FALLBACK_TITLE);
    assert_eq!(fallback.detail, "TypeError: exhibits is undefined");
    assert!(format!("{fallback}").contains("exhibits is undefined"));
    assert!(boundary.is_faulted());
}

#[cfg(feature = "std")]
#[test]
fn fallback_hint_only_mentions_the_log_when_one_is_written() {
    let mut boundary =
        FaultBoundary::new(|| -> Result<(), RenderFault> { Err(RenderFault::new("broken")) });
    let hint = match boundary.render() {
        Rendered::Fallback(fallback) => fallback.hint,
        other => panic!("expected fallback, got {other:?}"),
    };
    assert_eq!(hint, FALLBACK_HINT);
    assert_eq!(hint.contains("log"), cfg!(feature = "tracing"));
}

#[cfg(feature = "std")]
#[test]
fn boundary_catches_panics() {
    let mut boundary = FaultBoundary::new(|| -> Result<u32, RenderFault> {
        panic!("card index out of bounds")
    })
    .with_label("carousel");
    let rendered = boundary.render();
    assert!(rendered.is_fallback());
    let captured = boundary
        .fault()
        .unwrap_or_else(|| panic!("fault should be latched"));
    assert_eq!(captured.fault().message(), "card index out of bounds");
    assert_eq!(captured.trace()[0], "carousel");
}

#[cfg(feature = "std")]
#[test]
fn boundary_does_not_retry_after_a_fault() {
    let attempts = Cell::new(0u32);
    let mut boundary = FaultBoundary::new(|| -> Result<u32, RenderFault> {
        attempts.set(attempts.get() + 1);
        if attempts.get() == 1 {
            Err(RenderFault::new("first render failed"))
        } else {
            Ok(attempts.get())
        }
    });
    assert!(boundary.render().is_fallback());
    assert!(boundary.render().is_fallback());
    assert_eq!(attempts.get(), 1);
}

#[cfg(feature = "std")]
#[test]
fn boundary_trace_follows_the_source_chain() {
    let mut boundary = FaultBoundary::new(|| -> Result<(), RenderFault> {
        Err(RenderFault::from_error(std::io::Error::other(
            "videos/kolam.mp4 missing",
        )))
    })
    .with_label("gallery");
    boundary.render();
    let captured = boundary
        .fault()
        .unwrap_or_else(|| panic!("fault should be latched"));
    assert_eq!(
        captured.trace(),
        ["gallery", "videos/kolam.mp4 missing"].map(String::from)
    );
}

#[cfg(feature = "std")]
#[test]
fn boundary_wraps_custom_renderers() {
    struct Gallery {
        carousel: Carousel,
    }

    impl Render for Gallery {
        type Output = Vec<Transform>;

        fn render(&self) -> Result<Self::Output, RenderFault> {
            if self.carousel.is_empty() {
                return Err(RenderFault::new("empty catalog"));
            }
            Ok(self.carousel.transforms())
        }
    }

    let mut ok = FaultBoundary::new(Gallery {
        carousel: carousel(3),
    });
    assert_eq!(ok.render().content().map(|t| t.len()), Some(3));

    let mut empty = FaultBoundary::new(Gallery {
        carousel: carousel(0),
    });
    assert!(empty.render().is_fallback());
    assert_eq!(empty.child().carousel.len(), 0);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseOut,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
    ] {
        assert_close(easing.sample(0.0), 0.0);
        assert_close(easing.sample(1.0), 1.0);
        assert_close(easing.sample(2.0), 1.0);
    }
}

#[test]
fn default_transition_is_the_stock_spring() {
    let t = CarouselOptions::default().transition;
    assert_eq!(t.kind, TransitionKind::Spring);
    assert_eq!((t.stiffness, t.damping), (300.0, 30.0));
}
