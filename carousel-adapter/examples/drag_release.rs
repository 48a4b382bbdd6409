use cylinder_carousel::{CarouselOptions, Catalog, Item};
use cylinder_carousel_adapter::Controller;

fn main() {
    // Example: an adapter forwarding pointer events and rendering on each animation frame.
    //
    // A real adapter would:
    // - call pointer_down/move/up from its input handlers
    // - call tick(now_ms) from its frame callback while it returns true
    // - translate the track by drag_offset() and place each card with for_each_item
    let catalog: Catalog = (1..=7)
        .map(|i| Item::new(i, format!("Exhibit {i}"), format!("exhibit-{i}.mp4")))
        .collect();
    let mut c = Controller::new(catalog, CarouselOptions::default());

    c.pointer_down(640.0, 0);
    for (x, t) in [(620.0, 16), (590.0, 32), (560.0, 48)] {
        c.pointer_move(x, t);
        println!("t={t} dragging offset={:.1}", c.drag_offset());
    }
    let change = c.pointer_up(48);
    println!("released: {change:?}");

    let mut now_ms = 48u64;
    while c.tick(now_ms) {
        if now_ms % 96 == 0 {
            c.for_each_item(|index, t, is_active| {
                if is_active {
                    println!(
                        "t={now_ms} offset={:.2} active=#{index} x={:.1} scale={:.3}",
                        c.drag_offset(),
                        t.x,
                        t.scale
                    );
                }
            });
        }
        now_ms += 16;
    }
    println!("settled at t={now_ms}, active={}", c.selected_index());
}
