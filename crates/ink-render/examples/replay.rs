use ink_core::StrokeRecorder;
use ink_core::input::PointerEvent;
use ink_core::model::Color;
use ink_core::surface::Surface;
use ink_render::PixelSurface;

/// Replays a scripted gesture onto the software surface and prints
/// coverage: a smoke check for the stroke pipeline without a browser.
/// Run with `RUST_LOG=trace` to watch the recorder's event handling.
fn main() {
    env_logger::init();

    let mut recorder = StrokeRecorder::new();
    let mut surface = PixelSurface::new(800, 600);

    // A zig-zag in the default 3px black pen.
    let zigzag = [
        PointerEvent::Down { x: 100.0, y: 300.0 },
        PointerEvent::Move { x: 200.0, y: 200.0 },
        PointerEvent::Move { x: 300.0, y: 300.0 },
        PointerEvent::Move { x: 400.0, y: 200.0 },
        PointerEvent::Up,
    ];
    for event in &zigzag {
        let ops = recorder.handle(event);
        surface.apply_all(&ops);
    }
    println!("default pen:  {} pixels inked", surface.inked_count());

    // A wide red flourish across the same area.
    recorder.set_line_width(8.0);
    recorder.set_line_color(Color::rgb(231, 76, 60));
    let flourish = [
        PointerEvent::Down { x: 150.0, y: 350.0 },
        PointerEvent::Move { x: 350.0, y: 250.0 },
        PointerEvent::Move { x: 550.0, y: 350.0 },
        PointerEvent::Up,
    ];
    for event in &flourish {
        let ops = recorder.handle(event);
        surface.apply_all(&ops);
    }
    println!("after red 8px: {} pixels inked", surface.inked_count());

    surface.apply_all(&recorder.clear());
    println!("after clear:  blank = {}", surface.is_blank());
}
