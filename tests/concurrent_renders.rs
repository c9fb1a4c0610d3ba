use std::sync::Arc;
use std::thread;

use labeld::label::{LabelBuilder, LabelStyle};
use labeld::FontFace;

/// Many renders sharing one read-only face must produce the same output as
/// the same renders run alone: no cross-contamination between canvases.
#[test]
fn concurrent_renders_share_the_face_without_interference() {
    let face = Arc::new(FontFace::bitmap_fallback());
    let texts: Vec<String> = (0..16).map(|i| format!("worker {}", i)).collect();

    // Reference outputs, rendered serially.
    let reference: Vec<Vec<u8>> = texts
        .iter()
        .map(|t| {
            let builder = LabelBuilder::new(Arc::clone(&face));
            let canvas = builder
                .render_fixed((192, 64), t, &LabelStyle::default())
                .unwrap();
            canvas
                .pixels()
                .iter()
                .flat_map(|p| [p.r, p.g, p.b, p.a])
                .collect()
        })
        .collect();

    let handles: Vec<_> = texts
        .iter()
        .cloned()
        .map(|t| {
            let face = Arc::clone(&face);
            thread::spawn(move || {
                let builder = LabelBuilder::new(face);
                let canvas = builder
                    .render_fixed((192, 64), &t, &LabelStyle::default())
                    .unwrap();
                canvas
                    .pixels()
                    .iter()
                    .flat_map(|p| [p.r, p.g, p.b, p.a])
                    .collect::<Vec<u8>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let pixels = handle.join().expect("render thread panicked");
        assert_eq!(
            pixels, reference[i],
            "concurrent render of {:?} diverged from the serial one",
            texts[i]
        );
    }
}
