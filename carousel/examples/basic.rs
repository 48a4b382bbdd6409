use cylinder_carousel::{
    Carousel, CarouselOptions, Catalog, Direction, DragRelease, Item, PathResolver,
};

fn main() {
    let catalog: Catalog = ["Kolam", "Pongal pot", "Jallikattu", "Sugarcane", "Cattle parade"]
        .into_iter()
        .enumerate()
        .map(|(i, title)| Item::new(i as u64 + 1, title, format!("exhibit-{}.mp4", i + 1)))
        .collect();

    let mut c = Carousel::new(catalog, CarouselOptions::default());
    let resolver = PathResolver::from_env();

    println!("active={} ({:?})", c.selected_index(), c.active_item().map(|i| &i.title));
    c.for_each_transform(|index, t| {
        println!(
            "#{index} x={:>7.1} rotY={:>6.1} z={:>6.1} scale={:.2} opacity={:.2} src={:?}",
            t.x,
            t.rotate_y,
            t.z,
            t.scale,
            t.opacity,
            c.media_path(index, &resolver)
        );
    });

    // A quick flick to the left moves to the next card even though it is short.
    let change = c.on_drag_end(DragRelease::new(-40.0, -750.0));
    println!("flick: {change:?}");

    c.navigate(Direction::Next);
    println!(
        "after next: active={} can_next={}",
        c.selected_index(),
        c.can_navigate(Direction::Next)
    );
}
